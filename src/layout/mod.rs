//! Canvas Layout
//! Scale transform and node/edge geometry for the fixed logical canvas

use egui::{pos2, vec2, Pos2, Rect};

use crate::graph::Node;


/// Logical canvas size node coordinates are authored against
pub const LOGICAL_W: f32 = 1200.0;
pub const LOGICAL_H: f32 = 760.0;

/// Arrowhead geometry in screen pixels
const ARROW_LEN: f32 = 10.0;
const ARROW_HALF_H: f32 = 6.0;

/// Uniform scale factor that fits the logical canvas into `container_w`
/// pixels, capped at 1:1. Zero, negative, and NaN widths fall back to the
/// full logical width so the scale is always a usable positive number.
pub fn compute_scale(container_w: f32) -> f32 {
    if !(container_w > 0.0) {
        return 1.0;
    }
    (container_w / LOGICAL_W).min(1.0)
}

/// Rendered canvas height for a scale factor
pub fn scaled_height(scale: f32) -> f32 {
    LOGICAL_H * scale
}

/// On-screen bounding box of a node
pub fn node_rect(node: &Node, scale: f32) -> Rect {
    Rect::from_min_size(
        pos2(node.x * scale, node.y * scale),
        vec2(node.w * scale, node.h * scale),
    )
}

/// Connector anchors: the source's right-center and the target's left-center
pub fn edge_anchors(from: &Node, to: &Node, scale: f32) -> (Pos2, Pos2) {
    (
        pos2((from.x + from.w) * scale, (from.y + from.h / 2.0) * scale),
        pos2(to.x * scale, (to.y + to.h / 2.0) * scale),
    )
}

/// Cubic Bézier control points for a connector
///
/// Both control points sit at the horizontal midpoint, each at its own
/// anchor's vertical coordinate, so the curve leaves the source horizontally
/// and arrives at the target horizontally for any vertical offset.
pub fn edge_curve(start: Pos2, end: Pos2) -> [Pos2; 4] {
    let mid_x = (start.x + end.x) / 2.0;
    [start, pos2(mid_x, start.y), pos2(mid_x, end.y), end]
}

/// Arrowhead triangle with its apex at the target anchor and its base offset
/// back along the horizontal axis
pub fn arrowhead(tip: Pos2) -> [Pos2; 3] {
    [
        tip,
        pos2(tip.x - ARROW_LEN, tip.y - ARROW_HALF_H),
        pos2(tip.x - ARROW_LEN, tip.y + ARROW_HALF_H),
    ]
}
