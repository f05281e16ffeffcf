//! The wgpu-backed canvas
//!
//! [`GpuCanvas`] records a frame on the CPU as colored vertices grouped
//! into [`Batch`]es. [`GpuCanvas::present`] uploads them and draws the
//! frame through a [`PrimitivePipeline`].

use poly4d_math::Vec3;

use crate::camera::Camera3D;
use crate::color::Color;
use crate::context::RenderContext;
use crate::dispatch::Canvas3D;
use crate::pipeline::{Batch, BatchKind, ColorVertex, PrimitivePipeline, Uniforms};

/// Records one frame of lines and triangles
#[derive(Debug)]
pub struct GpuCanvas {
    aspect: f32,
    clear: Color,
    uniforms: Uniforms,
    culling: bool,
    vertices: Vec<ColorVertex>,
    batches: Vec<Batch>,
}

impl GpuCanvas {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            clear: Color::BLACK,
            uniforms: Uniforms::default(),
            culling: true,
            vertices: Vec::new(),
            batches: Vec::new(),
        }
    }

    /// Drop the previous frame and start a new one
    pub fn reset(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.clear = Color::BLACK;
        self.uniforms = Uniforms::default();
        self.culling = true;
        self.vertices.clear();
        self.batches.clear();
    }

    pub fn clear_color(&self) -> Color {
        self.clear
    }

    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Upload the recorded frame and encode its render pass
    pub fn present(
        &self,
        context: &RenderContext,
        pipeline: &mut PrimitivePipeline,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        pipeline.update_uniforms(&context.queue, &self.uniforms);
        pipeline.upload_vertices(&context.device, &context.queue, &self.vertices);

        let [r, g, b, a] = self.clear.to_linear_f32();
        let clear = wgpu::Color { r: r as f64, g: g as f64, b: b as f64, a: a as f64 };
        pipeline.render(encoder, view, clear, &self.batches);
    }

    fn push(&mut self, kind: BatchKind, points: &[Vec3], color: Color) {
        let color = color.to_linear_f32();
        let start = self.vertices.len() as u32;
        self.vertices.extend(points.iter().map(|p| ColorVertex::new(p.to_array(), color)));
        let count = points.len() as u32;

        match self.batches.last_mut() {
            Some(last) if last.kind == kind && last.start + last.count == start => last.count += count,
            _ => self.batches.push(Batch { kind, start, count }),
        }
    }
}

impl Canvas3D for GpuCanvas {
    fn clear_background(&mut self, color: Color) {
        self.clear = color;
    }

    fn begin_scope(&mut self, camera: &Camera3D) {
        self.uniforms = Uniforms {
            view_proj: camera.view_projection(self.aspect),
        };
    }

    fn end_scope(&mut self) {}

    fn set_backface_culling(&mut self, enabled: bool) {
        self.culling = enabled;
    }

    fn draw_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: Color) {
        let kind = BatchKind::Triangles { culled: self.culling };
        self.push(kind, &[a, b, c], color);
    }

    fn draw_line(&mut self, a: Vec3, b: Vec3, color: Color) {
        self.push(BatchKind::Lines, &[a, b], color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RenderDispatcher;
    use poly4d_core::{PolytopeLibrary, Scene, SceneState};

    #[test]
    fn test_consecutive_primitives_merge() {
        let mut canvas = GpuCanvas::new(1.0);
        canvas.draw_line(Vec3::ZERO, Vec3::Y, Color::WHITE);
        canvas.draw_line(Vec3::Y, Vec3::ZERO, Color::WHITE);
        assert_eq!(canvas.batches(), &[Batch { kind: BatchKind::Lines, start: 0, count: 4 }]);
    }

    #[test]
    fn test_culling_splits_batches() {
        let mut canvas = GpuCanvas::new(1.0);
        let (a, b, c) = (Vec3::ZERO, Vec3::Y, Vec3::new(1.0, 0.0, 0.0));
        canvas.draw_triangle(a, b, c, Color::RED);
        canvas.set_backface_culling(false);
        canvas.draw_triangle(a, b, c, Color::RED);
        canvas.draw_line(a, b, Color::BLACK);

        let batches = canvas.batches();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].kind, BatchKind::Triangles { culled: true });
        assert_eq!(batches[1], Batch { kind: BatchKind::Triangles { culled: false }, start: 3, count: 3 });
        assert_eq!(batches[2], Batch { kind: BatchKind::Lines, start: 6, count: 2 });
    }

    #[test]
    fn test_dispatched_face_scene_layout() {
        let library = PolytopeLibrary::new().unwrap();
        let mut dispatcher = RenderDispatcher::default();
        let mut canvas = GpuCanvas::new(16.0 / 9.0);
        let mut state = SceneState::default();
        state.scene = Scene::from_index(2);

        dispatcher.render(&mut canvas, &library, &state, &Camera3D::default());

        assert_eq!(canvas.clear_color(), Color::BLACK);
        assert_eq!(
            canvas.batches(),
            &[
                Batch { kind: BatchKind::Triangles { culled: false }, start: 0, count: 144 },
                Batch { kind: BatchKind::Lines, start: 144, count: 64 },
            ]
        );
        assert_ne!(*canvas.uniforms(), Uniforms::default());
    }

    #[test]
    fn test_reset_clears_frame() {
        let mut canvas = GpuCanvas::new(1.0);
        canvas.draw_line(Vec3::ZERO, Vec3::Y, Color::WHITE);
        canvas.set_backface_culling(false);
        canvas.reset(2.0);
        assert!(canvas.vertices().is_empty());
        assert!(canvas.batches().is_empty());
        canvas.draw_triangle(Vec3::ZERO, Vec3::Y, Vec3::ZERO, Color::WHITE);
        assert_eq!(canvas.batches()[0].kind, BatchKind::Triangles { culled: true });
    }
}
