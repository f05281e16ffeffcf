//! Scenes: which shape is shown and how
//!
//! A scene pairs a [`ShapeKind`] with a [`RenderStyle`]. The twelve
//! combinations form one fixed cycle: every shape in turn, each in its
//! light wireframe, dark wireframe and colored-face variant.

use serde::{Serialize, Deserialize};

use crate::shape::ShapeKind;

/// How the active shape is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderStyle {
    /// Edges only, on a light background
    WireframeLight,
    /// Edges only, on a dark background
    WireframeDark,
    /// Filled faces with outlined edges
    ColoredFaces,
}

impl RenderStyle {
    pub const ALL: [RenderStyle; 3] = [
        RenderStyle::WireframeLight,
        RenderStyle::WireframeDark,
        RenderStyle::ColoredFaces,
    ];

    /// Whether faces are filled in this style
    #[inline]
    pub const fn fills_faces(self) -> bool {
        matches!(self, RenderStyle::ColoredFaces)
    }

    pub const fn name(self) -> &'static str {
        match self {
            RenderStyle::WireframeLight => "Wireframe (light)",
            RenderStyle::WireframeDark => "Wireframe (dark)",
            RenderStyle::ColoredFaces => "Colored faces",
        }
    }
}

/// One entry of the scene cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scene {
    pub shape: ShapeKind,
    pub style: RenderStyle,
}

impl Scene {
    /// Number of scenes in the cycle
    pub const COUNT: usize = ShapeKind::ALL.len() * RenderStyle::ALL.len();

    /// The first scene: tesseract, light wireframe
    pub const FIRST: Scene = Scene::from_index(0);

    /// Scene at a position in the cycle, wrapping modulo [`Scene::COUNT`]
    pub const fn from_index(index: usize) -> Self {
        let index = index % Self::COUNT;
        let styles = RenderStyle::ALL.len();
        Self {
            shape: ShapeKind::ALL[index / styles],
            style: RenderStyle::ALL[index % styles],
        }
    }

    /// Position of this scene in the cycle
    pub const fn index(self) -> usize {
        self.shape as usize * RenderStyle::ALL.len() + self.style as usize
    }

    /// The scene after this one, wrapping from the last to the first
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Iterate every scene in cycle order
    pub fn all() -> impl Iterator<Item = Scene> {
        (0..Self::COUNT).map(Self::from_index)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.shape, self.style.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_count() {
        assert_eq!(Scene::COUNT, 12);
        assert_eq!(Scene::all().count(), 12);
    }

    #[test]
    fn test_first_scene() {
        assert_eq!(Scene::FIRST, Scene { shape: ShapeKind::Tesseract, style: RenderStyle::WireframeLight });
        assert_eq!(Scene::default().index(), 0);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(Scene::from_index(2), Scene { shape: ShapeKind::Tesseract, style: RenderStyle::ColoredFaces });
        assert_eq!(Scene::from_index(3), Scene { shape: ShapeKind::Pyramid, style: RenderStyle::WireframeLight });
        assert_eq!(Scene::from_index(7), Scene { shape: ShapeKind::PentagonPrism, style: RenderStyle::WireframeDark });
        assert_eq!(Scene::from_index(11), Scene { shape: ShapeKind::HexagonPrism, style: RenderStyle::ColoredFaces });
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, scene) in Scene::all().enumerate() {
            assert_eq!(scene.index(), i);
        }
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Scene::from_index(11).next(), Scene::FIRST);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Scene::from_index(5));
        assert_eq!(s, "Pyramid - Colored faces");
    }
}
