//! Triangle fill
//!
//! Three interchangeable strategies over the same inputs: three integer
//! screen-space vertices, a sink and a flat color.
//! - Scanline: sort by y and interpolate the two boundary edges per row.
//! - Barycentric: solve for (u, v, w) at every pixel of the bounding box.
//! - Edge function: step three integer edge equations across the bounding box.
//!
//! The edge-function walk is the default; the other two are kept for
//! comparison and produce the same coverage up to boundary pixels.

use std::mem::swap;

use super::math::{compute_bbox, Vec2i};
use super::types::{Color, FillMethod, PixelSink};

/// Fill with the default strategy (incremental edge functions)
pub fn triangle(v0: Vec2i, v1: Vec2i, v2: Vec2i, sink: &mut impl PixelSink, color: Color) {
    triangle_edge(v0, v1, v2, sink, color);
}

/// Fill with an explicitly chosen strategy
pub fn triangle_with(
    method: FillMethod,
    v0: Vec2i,
    v1: Vec2i,
    v2: Vec2i,
    sink: &mut impl PixelSink,
    color: Color,
) {
    match method {
        FillMethod::Scanline => triangle_scanline(v0, v1, v2, sink, color),
        FillMethod::Barycentric => triangle_barycentric(v0, v1, v2, sink, color),
        FillMethod::EdgeFunction => triangle_edge(v0, v1, v2, sink, color),
    }
}

// ============================================================================
// Scanline
// ============================================================================

/// Row-by-row fill between the long edge (top to bottom vertex) and the
/// short edge of whichever half the row falls in.
///
/// Rows and spans are clamped to the sink; interpolation runs in `i64`/`f64`
/// so saturated projections neither overflow nor walk off-image pixels.
pub fn triangle_scanline(
    mut t0: Vec2i,
    mut t1: Vec2i,
    mut t2: Vec2i,
    sink: &mut impl PixelSink,
    color: Color,
) {
    if t0.y > t1.y {
        swap(&mut t0, &mut t1);
    }
    if t0.y > t2.y {
        swap(&mut t0, &mut t2);
    }
    if t1.y > t2.y {
        swap(&mut t1, &mut t2);
    }
    let (x0, y0) = (t0.x as i64, t0.y as i64);
    let (x1, y1) = (t1.x as i64, t1.y as i64);
    let (x2, y2) = (t2.x as i64, t2.y as i64);

    let total_height = y2 - y0;
    if total_height == 0 {
        return;
    }
    let upper_height = y1 - y0;

    let (width, height) = (sink.width() as i64, sink.height() as i64);
    let first_row = (-y0).max(0);
    let last_row = total_height.min(height - 1 - y0);

    for i in first_row..=last_row {
        let second_half = i > upper_height || upper_height == 0;
        let segment_height = if second_half { y2 - y1 } else { upper_height };
        if segment_height == 0 {
            continue;
        }

        let alpha = i as f64 / total_height as f64;
        let beta = (i - if second_half { upper_height } else { 0 }) as f64 / segment_height as f64;

        let mut left = x0 + ((x2 - x0) as f64 * alpha) as i64;
        let mut right = if second_half {
            x1 + ((x2 - x1) as f64 * beta) as i64
        } else {
            x0 + ((x1 - x0) as f64 * beta) as i64
        };
        if left > right {
            swap(&mut left, &mut right);
        }

        let y = (y0 + i) as i32;
        for x in left.max(0)..=right.min(width - 1) {
            sink.set(x as i32, y, color);
        }
    }
}

// ============================================================================
// Barycentric
// ============================================================================

/// Weights of a point relative to triangle (a, b, c): `p = w*a + u*b + v*c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub u: f32,
    pub v: f32,
    pub w: f32,
}

impl Barycentric {
    /// Returned for zero-area triangles; fails `is_inside` everywhere
    pub const DEGENERATE: Barycentric = Barycentric { u: -1.0, v: -1.0, w: -1.0 };

    /// Inside or on the boundary
    pub fn is_inside(&self) -> bool {
        self.u >= 0.0 && self.v >= 0.0 && self.w >= 0.0
    }
}

/// Solve `P = A + u(B-A) + v(C-A)` with 2D cross products (Cramer's rule).
///
/// The cross products are exact in `i128`; only the final division is
/// floating point.
pub fn barycentric(a: Vec2i, b: Vec2i, c: Vec2i, p: Vec2i) -> Barycentric {
    let a = a.to_i128();
    let ab = b.to_i128() - a;
    let ac = c.to_i128() - a;
    let ap = p.to_i128() - a;

    // Twice the signed area; integer, so zero means exactly degenerate
    let denom = ab.cross2d(ac);
    if denom == 0 {
        return Barycentric::DEGENERATE;
    }

    let u = (ap.cross2d(ac) as f64 / denom as f64) as f32;
    let v = (ab.cross2d(ap) as f64 / denom as f64) as f32;
    Barycentric { u, v, w: 1.0 - u - v }
}

/// Test every pixel of the clamped bounding box with `barycentric`
pub fn triangle_barycentric(v0: Vec2i, v1: Vec2i, v2: Vec2i, sink: &mut impl PixelSink, color: Color) {
    let bb = compute_bbox(v0, v1, v2, sink.width(), sink.height());

    for y in bb.min_y..=bb.max_y {
        for x in bb.min_x..=bb.max_x {
            if barycentric(v0, v1, v2, Vec2i::new(x, y)).is_inside() {
                sink.set(x, y, color);
            }
        }
    }
}

// ============================================================================
// Edge function
// ============================================================================

/// Signed doubled area of (a, b, p).
///
/// Zero when p is on the line through a and b; the sign tells which side.
/// Evaluated in i128: differences of i32 points need 33 bits, their products 66.
pub fn edge_fn(a: Vec2i, b: Vec2i, p: Vec2i) -> i128 {
    let (a, b, p) = (a.to_i128(), b.to_i128(), p.to_i128());
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// `edge_fn(a, b, _)` with its constant partial derivatives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEquation {
    pub a: Vec2i,
    pub b: Vec2i,
    /// Change in value for one pixel to the right
    pub step_x: i128,
    /// Change in value for one row down
    pub step_y: i128,
}

impl EdgeEquation {
    pub fn new(a: Vec2i, b: Vec2i) -> Self {
        Self {
            a,
            b,
            step_x: b.y as i128 - a.y as i128,
            step_y: a.x as i128 - b.x as i128,
        }
    }

    pub fn eval(&self, p: Vec2i) -> i128 {
        edge_fn(self.a, self.b, p)
    }
}

/// Bounding-box walk with incrementally stepped edge equations.
///
/// Winding is normalized to positive area first, so a pixel is covered when
/// all three weights are non-negative. Pixels exactly on an edge are covered.
pub fn triangle_edge(v0: Vec2i, mut v1: Vec2i, mut v2: Vec2i, sink: &mut impl PixelSink, color: Color) {
    if edge_fn(v0, v1, v2) < 0 {
        swap(&mut v1, &mut v2);
    }

    let bb = compute_bbox(v0, v1, v2, sink.width(), sink.height());

    let e0 = EdgeEquation::new(v1, v2);
    let e1 = EdgeEquation::new(v2, v0);
    let e2 = EdgeEquation::new(v0, v1);

    let origin = Vec2i::new(bb.min_x, bb.min_y);
    let mut row0 = e0.eval(origin);
    let mut row1 = e1.eval(origin);
    let mut row2 = e2.eval(origin);

    for y in bb.min_y..=bb.max_y {
        let (mut w0, mut w1, mut w2) = (row0, row1, row2);

        for x in bb.min_x..=bb.max_x {
            if w0 >= 0 && w1 >= 0 && w2 >= 0 {
                sink.set(x, y, color);
            }
            w0 += e0.step_x;
            w1 += e1.step_x;
            w2 += e2.step_x;
        }

        row0 += e0.step_y;
        row1 += e1.step_y;
        row2 += e2.step_y;
    }
}
