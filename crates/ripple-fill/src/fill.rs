//! 8-connected breadth-first flood fill.
//!
//! Both variants share one acceptance rule: a pixel joins the fill region
//! iff its color is within tolerance of the color found at the seed
//! (`old_color`). Neighbors are enqueued (and marked visited) when first
//! discovered equivalent; the check is repeated when a node is popped, and
//! a node that fails on its first dequeue is permanently excluded. The
//! eager variant paints accepted pixels immediately; the layered variant
//! only records them, grouped by BFS depth, and leaves the buffer
//! untouched.

use std::collections::VecDeque;

use crate::canvas::Canvas;
use crate::color::{self, Color};
use crate::types::{Layer, Point};

/// The eight neighbor offsets, orthogonal and diagonal.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Result of a layered discovery pass.
#[derive(Debug, Clone)]
pub enum Discovery {
    /// The seed color already matches the target within tolerance; there is
    /// nothing to fill and no session should be created.
    AlreadyFilled,
    /// Depth rings in ascending BFS order. None of them is empty.
    Layers(Vec<Layer>),
}

/// Fill the region connected to `seed` with `fill_argb`, in place.
///
/// `fill_argb` uses the host packed-ARGB convention and is reordered once.
/// Returns the number of pixels painted; zero means the seed already
/// matched the target within tolerance, which is a successful no-op.
///
/// The seed must have been validated by [`Canvas::seed`].
pub fn flood_fill(canvas: &mut Canvas, seed: Point, fill_argb: u32, tolerance: u8) -> usize {
    let target = Color::from_argb(fill_argb);
    let threshold = color::threshold(tolerance);
    let old_color = canvas.color_at(seed);

    if color::squared_distance(old_color, target) <= threshold {
        return 0;
    }

    let mut visited = vec![false; canvas.width() as usize * canvas.height() as usize];
    let mut queue = VecDeque::new();
    visited[canvas.index(seed)] = true;
    queue.push_back(seed);

    let mut painted = 0usize;
    while let Some(p) = queue.pop_front() {
        // Re-check on pop; a pixel that no longer matches is skipped
        // without being painted or expanded.
        if color::squared_distance(canvas.color_at(p), old_color) > threshold {
            continue;
        }
        canvas.paint(p, target);
        painted += 1;
        enqueue_neighbors(canvas, p, old_color, threshold, &mut visited, &mut queue);
    }

    log::debug!("eager fill painted {painted} pixels from ({}, {})", seed.x, seed.y);
    painted
}

/// Discover the fill region as BFS depth rings without writing anything.
///
/// Traversal and acceptance are identical to [`flood_fill`]; one ring is
/// produced per queue "wave" (the queue's length when the wave starts) and
/// empty rings are discarded. Because painting is deferred, every
/// acceptance check observes the original buffer contents.
pub fn discover_layers(canvas: &Canvas, seed: Point, fill_argb: u32, tolerance: u8) -> Discovery {
    let target = Color::from_argb(fill_argb);
    let threshold = color::threshold(tolerance);
    let old_color = canvas.color_at(seed);

    if color::squared_distance(old_color, target) <= threshold {
        return Discovery::AlreadyFilled;
    }

    let mut visited = vec![false; canvas.width() as usize * canvas.height() as usize];
    let mut queue = VecDeque::new();
    visited[canvas.index(seed)] = true;
    queue.push_back(seed);

    let mut layers = Vec::new();
    while !queue.is_empty() {
        let wave = queue.len();
        let mut layer = Layer::default();

        for _ in 0..wave {
            let Some(p) = queue.pop_front() else { break };
            if color::squared_distance(canvas.color_at(p), old_color) > threshold {
                continue;
            }
            layer.points.push(p);
            enqueue_neighbors(canvas, p, old_color, threshold, &mut visited, &mut queue);
        }

        if !layer.is_empty() {
            layers.push(layer);
        }
    }

    log::debug!(
        "layered discovery found {} rings from ({}, {})",
        layers.len(),
        seed.x,
        seed.y
    );
    Discovery::Layers(layers)
}

/// Enqueue the unvisited in-bounds neighbors of `p` that match `old_color`.
fn enqueue_neighbors(
    canvas: &Canvas,
    p: Point,
    old_color: Color,
    threshold: u32,
    visited: &mut [bool],
    queue: &mut VecDeque<Point>,
) {
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = p.x as i32 + dx;
        let ny = p.y as i32 + dy;
        if nx < 0 || ny < 0 || nx >= canvas.width() as i32 || ny >= canvas.height() as i32 {
            continue;
        }
        let n = Point::new(nx as u32, ny as u32);
        let idx = canvas.index(n);
        if !visited[idx] && color::squared_distance(canvas.color_at(n), old_color) <= threshold {
            visited[idx] = true;
            queue.push_back(n);
        }
    }
}
