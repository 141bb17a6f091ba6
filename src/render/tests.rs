//! Unit tests for scene construction

use std::time::Duration;

use egui::pos2;

use crate::config::{AssetKey, AssetMap, PlayerConfig};
use crate::pipeline::task_pipeline;
use crate::player::Player;
use crate::render::{build_scene, legend};

fn paused_player(step_count: usize) -> Player {
    let config = PlayerConfig {
        autoplay: false,
        ..PlayerConfig::default()
    };
    Player::new(step_count, &config)
}

#[test]
fn test_legend_is_one_based() {
    assert_eq!(legend(0, 7), "Step 1 / 7");
    assert_eq!(legend(3, 7), "Step 4 / 7");
    assert_eq!(legend(6, 7), "Step 7 / 7");
}

#[test]
fn test_scene_shape_counts() {
    let diagram = task_pipeline();
    let assets = AssetMap::default();
    let player = paused_player(diagram.steps.len());

    let scene = build_scene(&diagram, &assets, &player);
    assert_eq!(scene.edges.len(), diagram.edges.len());
    assert_eq!(scene.nodes.len(), diagram.nodes.len());
}

#[test]
fn test_legend_after_three_ticks() {
    // Reference scenario: playing at 1600 ms from step 0, three ticks in.
    let diagram = task_pipeline();
    let assets = AssetMap::default();
    let mut player = Player::new(diagram.steps.len(), &PlayerConfig::default());

    player.advance(Duration::from_millis(3 * 1600));

    let scene = build_scene(&diagram, &assets, &player);
    assert_eq!(scene.legend, "Step 4 / 7");
}

#[test]
fn test_narration_matches_current_step() {
    let diagram = task_pipeline();
    let assets = AssetMap::default();
    let mut player = paused_player(diagram.steps.len());

    for step in &diagram.steps {
        let scene = build_scene(&diagram, &assets, &player);
        assert_eq!(scene.narration, step.text);
        player.step_forward();
    }
}

#[test]
fn test_active_edges_match_highlight_set() {
    let diagram = task_pipeline();
    let assets = AssetMap::default();
    let mut player = paused_player(diagram.steps.len());

    for step in &diagram.steps {
        let scene = build_scene(&diagram, &assets, &player);
        for (shape, edge) in scene.edges.iter().zip(&diagram.edges) {
            let expected = step.highlights(&edge.from) || step.highlights(&edge.to);
            assert_eq!(
                shape.active, expected,
                "edge {} --> {} at step '{}'",
                edge.from, edge.to, step.id
            );
        }
        player.step_forward();
    }
}

#[test]
fn test_active_nodes_match_highlight_set() {
    let diagram = task_pipeline();
    let assets = AssetMap::default();
    let mut player = paused_player(diagram.steps.len());

    for step in &diagram.steps {
        let scene = build_scene(&diagram, &assets, &player);
        for shape in &scene.nodes {
            assert_eq!(shape.active, step.highlights(&shape.node.id));
        }
        player.step_forward();
    }
}

#[test]
fn test_edge_geometry_connects_anchor_points() {
    let diagram = task_pipeline();
    let assets = AssetMap::default();
    let player = paused_player(diagram.steps.len());

    let scene = build_scene(&diagram, &assets, &player);

    // First edge is raw --> clean; at scale 1 the connector runs from raw's
    // right-center to clean's left-center, and the arrow apex sits on the end.
    let edge = &scene.edges[0];
    assert_eq!(edge.curve[0], pos2(210.0, 370.0));
    assert_eq!(edge.curve[3], pos2(250.0, 360.0));
    assert_eq!(edge.arrow[0], edge.curve[3]);
}

#[test]
fn test_node_rects_follow_scale() {
    let diagram = task_pipeline();
    let assets = AssetMap::default();
    let mut player = paused_player(diagram.steps.len());
    player.rescale(600.0);

    let scene = build_scene(&diagram, &assets, &player);
    let raw = scene
        .nodes
        .iter()
        .find(|shape| shape.node.id == "raw")
        .expect("Should contain the raw node");

    assert_eq!(raw.rect.min, pos2(10.0, 145.0));
    assert_eq!(raw.rect.width(), 95.0);
    assert_eq!(raw.rect.height(), 80.0);
}

#[test]
fn test_asset_references_resolve() {
    let diagram = task_pipeline();
    let mut assets = AssetMap::default();
    assets.set(AssetKey::Farmers, "custom/people.png");
    let player = paused_player(diagram.steps.len());

    let scene = build_scene(&diagram, &assets, &player);
    let raw = scene.nodes.iter().find(|s| s.node.id == "raw").unwrap();
    let lvlm = scene.nodes.iter().find(|s| s.node.id == "lvlm").unwrap();
    let clean = scene.nodes.iter().find(|s| s.node.id == "clean").unwrap();

    assert_eq!(raw.icon, Some("custom/people.png"));
    assert_eq!(lvlm.logo, Some("/assets/openai.png"));
    assert!(clean.icon.is_none() && clean.logo.is_none());
}
