//! Per-scene drawing style

use poly4d_core::{RenderStyle, Scene, ShapeKind};

use crate::color::Color;

/// Colors and fill mode for one scene
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSpec {
    /// Cleared before anything is drawn
    pub background: Color,
    /// Edge color, drawn over faces when they are filled
    pub edge_color: Color,
    /// Whether faces are filled from the palette
    pub fill_faces: bool,
}

impl StyleSpec {
    /// Style for a scene
    ///
    /// The light wireframe draws the tesseract in red and every other shape
    /// in black. Filled scenes outline their faces in black.
    pub fn for_scene(scene: Scene) -> Self {
        match scene.style {
            RenderStyle::WireframeLight => Self {
                background: Color::RAYWHITE,
                edge_color: match scene.shape {
                    ShapeKind::Tesseract => Color::RED,
                    _ => Color::BLACK,
                },
                fill_faces: false,
            },
            RenderStyle::WireframeDark => Self {
                background: Color::BLACK,
                edge_color: Color::WHITE,
                fill_faces: false,
            },
            RenderStyle::ColoredFaces => Self {
                background: Color::BLACK,
                edge_color: Color::BLACK,
                fill_faces: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tesseract_light_is_red() {
        let style = StyleSpec::for_scene(Scene::from_index(0));
        assert_eq!(style.background, Color::RAYWHITE);
        assert_eq!(style.edge_color, Color::RED);
        assert!(!style.fill_faces);
    }

    #[test]
    fn test_other_light_scenes_are_black() {
        for index in [3, 6, 9] {
            let style = StyleSpec::for_scene(Scene::from_index(index));
            assert_eq!(style.background, Color::RAYWHITE);
            assert_eq!(style.edge_color, Color::BLACK);
        }
    }

    #[test]
    fn test_dark_scenes() {
        for index in [1, 4, 7, 10] {
            let style = StyleSpec::for_scene(Scene::from_index(index));
            assert_eq!(style.background, Color::BLACK);
            assert_eq!(style.edge_color, Color::WHITE);
            assert!(!style.fill_faces);
        }
    }

    #[test]
    fn test_face_scenes() {
        for index in [2, 5, 8, 11] {
            let style = StyleSpec::for_scene(Scene::from_index(index));
            assert_eq!(style.background, Color::BLACK);
            assert_eq!(style.edge_color, Color::BLACK);
            assert!(style.fill_faces);
        }
    }
}
