//! Diagram Data Structures
//! Nodes, directed edges, and the narrated step script that drive the player

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AssetKey;


/// A complete diagram: the graph plus the step script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    /// Node boxes positioned on the logical canvas
    pub nodes: Vec<Node>,
    /// Directed connections, drawn beneath the nodes
    pub edges: Vec<Edge>,
    /// Ordered narration steps; the playback index wraps over this
    pub steps: Vec<Step>,
}

impl Diagram {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, steps: Vec<Step>) -> Self {
        Self {
            nodes,
            edges,
            steps,
        }
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Validate the diagram definition
    ///
    /// Dangling references are authoring defects; callers are expected to
    /// reject the diagram before any rendering happens.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                errors.push(format!("Duplicate node id '{}'", node.id));
            }
        }

        for edge in &self.edges {
            if self.node(&edge.from).is_none() {
                errors.push(format!("Edge source node '{}' not found", edge.from));
            }
            if self.node(&edge.to).is_none() {
                errors.push(format!("Edge target node '{}' not found", edge.to));
            }
        }

        if self.steps.is_empty() {
            errors.push("Step script is empty".to_string());
        }
        for step in &self.steps {
            for id in &step.highlight {
                if self.node(id).is_none() {
                    errors.push(format!("Step '{}' highlights unknown node '{}'", step.id, id));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Parse a diagram from JSON and validate it
    pub fn from_json(source: &str) -> Result<Self, DiagramError> {
        let diagram: Diagram = serde_json::from_str(source)?;
        diagram.validate().map_err(DiagramError::Invalid)?;
        Ok(diagram)
    }

    /// Read and parse a diagram from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DiagramError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("could not read diagram file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed diagram JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid diagram: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// A node box on the 1200x760 logical canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier referenced by edges and step highlights
    pub id: String,
    /// Heading shown in the box
    pub title: String,
    /// Smaller line under the title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Position and size in logical canvas units
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Border color override; the neutral border is used when unset
    #[serde(default)]
    pub color: Option<egui::Color32>,
    /// Draw the border dashed
    #[serde(default)]
    pub dashed: bool,
    /// Hover text shown next to the pointer
    #[serde(default)]
    pub tooltip: Option<String>,
    /// Bullet list rendered inside the box
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Icon shown left of the title
    #[serde(default)]
    pub icon: Option<AssetKey>,
    /// Logo shown at the box's top-right corner
    #[serde(default)]
    pub logo: Option<AssetKey>,
}

impl Node {
    pub fn new(id: impl Into<String>, title: impl Into<String>, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            x,
            y,
            w,
            h,
            color: None,
            dashed: false,
            tooltip: None,
            bullets: Vec::new(),
            icon: None,
            logo: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_color(mut self, color: egui::Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_bullets(mut self, bullets: &[&str]) -> Self {
        self.bullets = bullets.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_icon(mut self, icon: AssetKey) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_logo(mut self, logo: AssetKey) -> Self {
        self.logo = Some(logo);
        self
    }
}

/// A directed connection between two nodes
///
/// Edges are drawing data only; nothing traverses the graph. Cycles are fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// One entry in the narrated sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    /// Node ids emphasized while this step is current
    pub highlight: Vec<String>,
    /// Narration line shown above the canvas
    pub text: String,
}

impl Step {
    pub fn new(id: impl Into<String>, highlight: &[&str], text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            highlight: highlight.iter().map(|h| h.to_string()).collect(),
            text: text.into(),
        }
    }

    /// Whether this step emphasizes the given node
    pub fn highlights(&self, id: &str) -> bool {
        self.highlight.iter().any(|h| h == id)
    }
}
