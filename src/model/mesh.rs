//! Indexed triangle mesh

use crate::rasterizer::{Mesh, Vec3f};
use super::ModelError;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3f,
    pub max: Vec3f,
}

impl Aabb {
    pub fn new(min: Vec3f, max: Vec3f) -> Self {
        Self { min, max }
    }

    /// Expand bounds to include a point
    pub fn expand(&mut self, point: Vec3f) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// True when x and y lie in `[-1, 1]`, the range the orthographic projector maps onto the image
    pub fn fits_view(&self) -> bool {
        self.min.x >= -1.0 && self.min.y >= -1.0 && self.max.x <= 1.0 && self.max.y <= 1.0
    }
}

/// Vertex positions plus faces as index triples into them.
///
/// Every index is checked on construction, so `face_vertices` can index directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    vertices: Vec<Vec3f>,
    faces: Vec<[usize; 3]>,
}

impl Model {
    pub fn new(vertices: Vec<Vec3f>, faces: Vec<[usize; 3]>) -> Result<Self, ModelError> {
        let count = vertices.len();
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= count) {
                return Err(ModelError::FaceIndexOutOfRange { face, index, count });
            }
        }
        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vec3f] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Bounds of all vertices, `None` for an empty model
    pub fn bounds(&self) -> Option<Aabb> {
        let (first, rest) = self.vertices.split_first()?;
        let mut bb = Aabb::new(*first, *first);
        for v in rest {
            bb.expand(*v);
        }
        Some(bb)
    }
}

impl Mesh for Model {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face_vertices(&self, i: usize) -> [Vec3f; 3] {
        let [a, b, c] = self.faces[i];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Vec<Vec3f> {
        vec![
            Vec3f::new(0.0, 0.0, 0.0),
            Vec3f::new(1.0, 0.0, 0.5),
            Vec3f::new(0.0, -1.0, 0.0),
        ]
    }

    #[test]
    fn test_face_vertices() {
        let model = Model::new(tri(), vec![[2, 0, 1]]).unwrap();
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.face_count(), 1);
        assert_eq!(model.face_vertices(0), [tri()[2], tri()[0], tri()[1]]);
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let err = Model::new(tri(), vec![[0, 1, 2], [0, 3, 1]]).unwrap_err();
        assert!(matches!(err, ModelError::FaceIndexOutOfRange { face: 1, index: 3, count: 3 }));
    }

    #[test]
    fn test_bounds() {
        let model = Model::new(tri(), vec![]).unwrap();
        let bb = model.bounds().unwrap();
        assert_eq!(bb.min, Vec3f::new(0.0, -1.0, 0.0));
        assert_eq!(bb.max, Vec3f::new(1.0, 0.0, 0.5));
        assert!(bb.fits_view());
        assert!(Model::default().bounds().is_none());
    }

    #[test]
    fn test_bounds_outside_view() {
        let model = Model::new(vec![Vec3f::new(0.0, 0.0, 0.0), Vec3f::new(2.5, 0.0, 0.0)], vec![]).unwrap();
        assert!(!model.bounds().unwrap().fits_view());
    }
}
