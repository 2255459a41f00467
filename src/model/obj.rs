//! Wavefront OBJ loading
//!
//! Only geometry is read: `v` records become vertices and `f` records become
//! faces. Texture coordinates, normals, groups and materials are skipped.

use std::fs;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::rasterizer::Vec3f;
use super::Model;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("face {face} references vertex {index}, but the model has {count} vertices")]
    FaceIndexOutOfRange { face: usize, index: usize, count: usize },
}

fn parse_error(line: usize, message: impl Into<String>) -> ModelError {
    ModelError::Parse { line, message: message.into() }
}

/// Load a model from an OBJ file
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Model, ModelError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let model = parse_obj(&contents)?;
    info!("{}: {} vertices, {} faces", path.display(), model.vertices().len(), model.faces().len());
    Ok(model)
}

/// Parse OBJ text.
///
/// Face corners may be written `i`, `i/t`, `i/t/n` or `i//n`; only `i` is used.
/// Indices are 1-based, negative ones count back from the latest vertex.
/// Polygons are split into a triangle fan around their first corner.
pub fn parse_obj(src: &str) -> Result<Model, ModelError> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    let mut polygons = 0;

    for (n, raw) in src.lines().enumerate() {
        let line_no = n + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut coord = [0.0f32; 3];
                for (i, c) in coord.iter_mut().enumerate() {
                    let token = parts
                        .next()
                        .ok_or_else(|| parse_error(line_no, format!("vertex has {} of 3 coordinates", i)))?;
                    *c = token
                        .parse()
                        .map_err(|_| parse_error(line_no, format!("invalid coordinate '{}'", token)))?;
                    if !c.is_finite() {
                        return Err(parse_error(line_no, format!("non-finite coordinate '{}'", token)));
                    }
                }
                vertices.push(Vec3f::new(coord[0], coord[1], coord[2]));
            }
            Some("f") => {
                let corners = parts
                    .map(|token| resolve_index(token, vertices.len(), line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(parse_error(line_no, format!("face has {} corners", corners.len())));
                }
                if corners.len() > 3 {
                    polygons += 1;
                }
                for k in 1..corners.len() - 1 {
                    faces.push([corners[0], corners[k], corners[k + 1]]);
                }
            }
            _ => {}
        }
    }

    if polygons > 0 {
        debug!("triangulated {} polygons", polygons);
    }
    Model::new(vertices, faces)
}

/// Zero-based vertex index of one face corner token
fn resolve_index(token: &str, vertex_count: usize, line_no: usize) -> Result<usize, ModelError> {
    let head = token.split('/').next().unwrap_or(token);
    let index: i64 = head
        .parse()
        .map_err(|_| parse_error(line_no, format!("invalid face index '{}'", token)))?;

    let resolved = match index {
        0 => return Err(parse_error(line_no, "face index 0 (OBJ indices start at 1)")),
        i if i > 0 => i - 1,
        i => vertex_count as i64 + i,
    };
    if resolved < 0 {
        return Err(parse_error(line_no, format!("relative index {} before first vertex", index)));
    }
    Ok(resolved as usize)
}
