//! Render dispatch
//!
//! [`RenderDispatcher`] turns the current [`SceneState`] into a sequence of
//! calls on a [`Canvas3D`]. It knows nothing about GPUs: the wgpu backend
//! is one canvas ([`crate::GpuCanvas`]), and [`CommandList`] is another that
//! just records what was asked of it.
//!
//! Per frame the dispatcher:
//! 1. Rotates and projects every vertex of the active shape
//! 2. Clears to the style's background and opens a 3D scope
//! 3. For filled styles, disables culling, fan-triangulates every face in
//!    its palette color, then restores culling
//! 4. Draws every edge as a line in the style's edge color
//! 5. Closes the scope

use poly4d_core::{PolytopeLibrary, RotationAngles, SceneState, Shape};
use poly4d_math::{Projector, Rotation4, Vec3};

use crate::camera::Camera3D;
use crate::color::{palette_color, Color};
use crate::style::StyleSpec;

/// Drawing capabilities the dispatcher needs
pub trait Canvas3D {
    fn clear_background(&mut self, color: Color);
    /// Start drawing in 3D through `camera`
    fn begin_scope(&mut self, camera: &Camera3D);
    fn end_scope(&mut self);
    fn set_backface_culling(&mut self, enabled: bool);
    fn draw_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: Color);
    fn draw_line(&mut self, a: Vec3, b: Vec3, color: Color);
}

/// One recorded canvas call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    ClearBackground(Color),
    BeginScope(Camera3D),
    EndScope,
    SetBackfaceCulling(bool),
    Triangle { vertices: [Vec3; 3], color: Color },
    Line { from: Vec3, to: Vec3, color: Color },
}

/// Canvas that records every call in order
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Triangle { .. })).count()
    }

    pub fn line_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count()
    }
}

impl Canvas3D for CommandList {
    fn clear_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::ClearBackground(color));
    }

    fn begin_scope(&mut self, camera: &Camera3D) {
        self.commands.push(DrawCommand::BeginScope(*camera));
    }

    fn end_scope(&mut self) {
        self.commands.push(DrawCommand::EndScope);
    }

    fn set_backface_culling(&mut self, enabled: bool) {
        self.commands.push(DrawCommand::SetBackfaceCulling(enabled));
    }

    fn draw_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: Color) {
        self.commands.push(DrawCommand::Triangle { vertices: [a, b, c], color });
    }

    fn draw_line(&mut self, a: Vec3, b: Vec3, color: Color) {
        self.commands.push(DrawCommand::Line { from: a, to: b, color });
    }
}

/// Project `shape` into `out`, one point per vertex in vertex order
///
/// `out` is cleared first so a buffer can be reused across frames.
pub fn project_vertices(shape: &Shape, angles: &RotationAngles, projector: &Projector, out: &mut Vec<Vec3>) {
    let rotation = Rotation4::from_angles(angles);
    out.clear();
    out.extend(shape.vertices().iter().map(|&v| projector.project(rotation.rotate(v))));
}

/// Draws the active scene onto a canvas
#[derive(Clone, Debug, Default)]
pub struct RenderDispatcher {
    projector: Projector,
    /// Reused between frames
    projected: Vec<Vec3>,
}

impl RenderDispatcher {
    pub fn new(projector: Projector) -> Self {
        Self { projector, projected: Vec::new() }
    }

    /// Points from the most recent [`RenderDispatcher::render`] call
    pub fn projected(&self) -> &[Vec3] {
        &self.projected
    }

    /// Draw one frame of `state` onto `canvas`
    pub fn render<C: Canvas3D>(
        &mut self,
        canvas: &mut C,
        library: &PolytopeLibrary,
        state: &SceneState,
        camera: &Camera3D,
    ) {
        let shape = library.get(state.scene.shape);
        let style = StyleSpec::for_scene(state.scene);
        project_vertices(shape, &state.angles, &self.projector, &mut self.projected);
        let points = &self.projected;

        canvas.clear_background(style.background);
        canvas.begin_scope(camera);

        if style.fill_faces {
            canvas.set_backface_culling(false);
            for (i, face) in shape.faces().iter().enumerate() {
                let color = palette_color(i);
                for [a, b, c] in face.triangles() {
                    canvas.draw_triangle(points[a], points[b], points[c], color);
                }
            }
            canvas.set_backface_culling(true);
        }

        for edge in shape.edges() {
            canvas.draw_line(points[edge.a], points[edge.b], style.edge_color);
        }

        canvas.end_scope();
    }
}
