//! Bresenham line drawing

use std::mem::swap;

use super::math::Vec2i;
use super::types::{Color, PixelSink};

/// Draw the segment p0-p1 with integer-only error accumulation.
///
/// Iterates along the longer axis so every step sets exactly one pixel.
/// Differences and the error term are `i64`, so saturated projections
/// cannot overflow. Only the part of the long axis that lies inside the
/// sink is walked; the short axis is left to the sink to drop.
pub fn line(p0: Vec2i, p1: Vec2i, sink: &mut impl PixelSink, color: Color) {
    let (mut x0, mut y0) = (p0.x as i64, p0.y as i64);
    let (mut x1, mut y1) = (p1.x as i64, p1.y as i64);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    // Transpose steep lines so x is always the long axis
    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let y_step = if y1 > y0 { 1 } else { -1 };

    let extent = (if steep { sink.height() } else { sink.width() }) as i64;
    let first = x0.max(0);
    let last = x1.min(extent - 1);
    if first > last {
        return;
    }

    // Error scaled by 2*dx to stay in integers, kept in (-dx, dx].
    // Columns before `first` are off-image but still advance y.
    let (y_steps, mut error) = skip_ahead(first - x0, dx, dy);
    let mut y = y0 + y_step * y_steps;

    for x in first..=last {
        // y stays between y0 and y1, both i32
        if steep {
            sink.set(y as i32, x as i32, color);
        } else {
            sink.set(x as i32, y as i32, color);
        }

        error += 2 * dy;
        if error > dx {
            y += y_step;
            error -= 2 * dx;
        }
    }
}

/// Short-axis steps and error after `skipped` iterations of the loop in `line`.
///
/// The error is then `2*dy*skipped - 2*dx*steps`, with `steps` the smallest
/// count that brings it to at most `dx`.
fn skip_ahead(skipped: i64, dx: i64, dy: i64) -> (i64, i64) {
    if skipped == 0 {
        return (0, 0);
    }
    let (k, dx, dy) = (skipped as i128, dx as i128, dy as i128);
    let num = 2 * dy * k - dx;
    let den = 2 * dx;
    let steps = num / den + i128::from(num % den > 0);
    (steps as i64, (2 * dy * k - den * steps) as i64)
}
