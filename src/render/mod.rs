//! Render Pass
//! Builds a draw-ordered scene from the diagram and the playback state

use std::collections::HashSet;

use egui::{Pos2, Rect};

use crate::config::AssetMap;
use crate::graph::{Diagram, Node};
use crate::layout;
use crate::player::Player;

#[cfg(test)]
mod tests;

/// One connector: curve control points, arrowhead, and emphasis flag
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape {
    /// Cubic Bézier control points, start to end
    pub curve: [Pos2; 4],
    /// Arrowhead triangle, apex first
    pub arrow: [Pos2; 3],
    /// Either endpoint is in the current step's highlight set
    pub active: bool,
}

/// One node box with its resolved asset paths
#[derive(Debug, Clone)]
pub struct NodeShape<'a> {
    pub node: &'a Node,
    /// On-screen bounding box
    pub rect: Rect,
    /// Node is in the current step's highlight set
    pub active: bool,
    pub icon: Option<&'a str>,
    pub logo: Option<&'a str>,
}

/// Full redraw output
///
/// `edges` is listed, and must be painted, before `nodes` so connectors sit
/// beneath the boxes.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    pub edges: Vec<EdgeShape>,
    pub nodes: Vec<NodeShape<'a>>,
    /// Current step's narration line
    pub narration: &'a str,
    /// Progress text, 1-based for display
    pub legend: String,
}

/// Legend text for a step index
pub fn legend(step: usize, step_count: usize) -> String {
    format!("Step {} / {}", step + 1, step_count)
}

/// Build the scene for the player's current step and scale
///
/// Pure: same inputs produce the same scene, and nothing here touches the
/// player. Call after every state mutation.
pub fn build_scene<'a>(diagram: &'a Diagram, assets: &'a AssetMap, player: &Player) -> Scene<'a> {
    let step = &diagram.steps[player.step()];
    let active: HashSet<&str> = step.highlight.iter().map(String::as_str).collect();
    let scale = player.scale();

    let mut edges = Vec::with_capacity(diagram.edges.len());
    for edge in &diagram.edges {
        let (Some(from), Some(to)) = (diagram.node(&edge.from), diagram.node(&edge.to)) else {
            // Dangling ids are rejected at validation time.
            continue;
        };
        let (start, end) = layout::edge_anchors(from, to, scale);
        edges.push(EdgeShape {
            curve: layout::edge_curve(start, end),
            arrow: layout::arrowhead(end),
            active: active.contains(edge.from.as_str()) || active.contains(edge.to.as_str()),
        });
    }

    let nodes = diagram
        .nodes
        .iter()
        .map(|node| NodeShape {
            node,
            rect: layout::node_rect(node, scale),
            active: active.contains(node.id.as_str()),
            icon: node.icon.map(|key| assets.resolve(key)),
            logo: node.logo.map(|key| assets.resolve(key)),
        })
        .collect();

    Scene {
        edges,
        nodes,
        narration: &step.text,
        legend: legend(player.step(), diagram.steps.len()),
    }
}
