//! Pipeline Player - interactive auto-advancing pipeline diagrams
//! Declarative graph data, a scalable canvas layout, and a timer-driven step player

pub mod config;
pub mod graph;
pub mod layout;
pub mod pipeline;
pub mod player;
pub mod render;

pub use config::{AssetKey, AssetMap, PlayerConfig};
pub use graph::{Diagram, DiagramError, Edge, Node, Step};
pub use pipeline::task_pipeline;
pub use player::Player;
pub use render::{build_scene, Scene};
