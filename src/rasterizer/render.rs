//! Projection and whole-mesh render passes

use log::debug;

use super::line::line;
use super::math::{Vec2i, Vec3f};
use super::triangle::triangle_with;
use super::types::{Color, FillMethod, PixelSink};

/// Read-only triangle mesh as seen by the render passes
pub trait Mesh {
    fn vertex_count(&self) -> usize;
    fn face_count(&self) -> usize;
    /// Positions of face `i`'s three corners; panics if `i` or its indices are out of range
    fn face_vertices(&self, i: usize) -> [Vec3f; 3];
}

/// Model space to integer screen space
pub trait Projector {
    fn project(&self, v: Vec3f) -> Vec2i;
}

/// Maps `[-1, 1]` on x and y onto the full image, dropping z
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orthographic {
    pub width: usize,
    pub height: usize,
}

impl Orthographic {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn for_sink(sink: &impl PixelSink) -> Self {
        Self::new(sink.width(), sink.height())
    }
}

impl Projector for Orthographic {
    fn project(&self, v: Vec3f) -> Vec2i {
        Vec2i::new(
            ((v.x + 1.0) * self.width as f32 * 0.5) as i32,
            ((v.y + 1.0) * self.height as f32 * 0.5) as i32,
        )
    }
}

/// Per-pass face counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub faces: usize,
    pub drawn: usize,
    /// Faces skipped because they face away from the light
    pub culled: usize,
}

fn project_face(projector: &dyn Projector, face: [Vec3f; 3]) -> [Vec2i; 3] {
    face.map(|v| projector.project(v))
}

/// Edge loop of every face in a single color, orthographic projection
pub fn render_wireframe<M, S>(mesh: &M, sink: &mut S, color: Color) -> PassStats
where
    M: Mesh + ?Sized,
    S: PixelSink,
{
    let projector = Orthographic::for_sink(&*sink);
    render_wireframe_with(mesh, sink, color, &projector)
}

pub fn render_wireframe_with<M, S>(mesh: &M, sink: &mut S, color: Color, projector: &dyn Projector) -> PassStats
where
    M: Mesh + ?Sized,
    S: PixelSink,
{
    let faces = mesh.face_count();
    for i in 0..faces {
        let [s0, s1, s2] = project_face(projector, mesh.face_vertices(i));
        line(s0, s1, sink, color);
        line(s1, s2, sink, color);
        line(s2, s0, sink, color);
    }

    let stats = PassStats { faces, drawn: faces, culled: 0 };
    debug!("wireframe pass: {:?}", stats);
    stats
}

/// Lambert term of a face: `dot(normalize((v2 - v0) x (v1 - v0)), light_dir)`.
///
/// A zero-area face has a zero normal and therefore intensity 0.
pub fn face_intensity(face: [Vec3f; 3], light_dir: Vec3f) -> f32 {
    let [v0, v1, v2] = face;
    let normal = (v2 - v0).cross(v1 - v0).normalized();
    normal.dot(light_dir)
}

/// Flat greyscale shading with the default fill and orthographic projection
pub fn render_flat<M, S>(mesh: &M, sink: &mut S, light_dir: Vec3f) -> PassStats
where
    M: Mesh + ?Sized,
    S: PixelSink,
{
    let projector = Orthographic::for_sink(&*sink);
    render_flat_with(mesh, sink, light_dir, &projector, FillMethod::default())
}

/// Faces with intensity <= 0 are skipped entirely (backface cull against the light).
/// So are faces whose normal overflowed to a NaN intensity.
pub fn render_flat_with<M, S>(
    mesh: &M,
    sink: &mut S,
    light_dir: Vec3f,
    projector: &dyn Projector,
    fill: FillMethod,
) -> PassStats
where
    M: Mesh + ?Sized,
    S: PixelSink,
{
    let mut stats = PassStats { faces: mesh.face_count(), ..Default::default() };

    for i in 0..stats.faces {
        let face = mesh.face_vertices(i);
        let intensity = face_intensity(face, light_dir);
        if intensity.is_nan() || intensity <= 0.0 {
            stats.culled += 1;
            continue;
        }

        let color = Color::WHITE.shade(intensity);
        let [s0, s1, s2] = project_face(projector, face);
        triangle_with(fill, s0, s1, s2, sink, color);
        stats.drawn += 1;
    }

    debug!("flat pass ({:?}): {:?}", fill, stats);
    stats
}
