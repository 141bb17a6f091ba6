//! Built-in task generation pipeline diagram

use egui::Color32;

use crate::config::AssetKey;
use crate::graph::{Diagram, Edge, Node, Step};

/// The compiled-in pipeline: raw conversation data through cleaning, image
/// parsing, dialogue truncation, and prompt assembly into structured task
/// entries.
pub fn task_pipeline() -> Diagram {
    let nodes = vec![
        Node::new("raw", "Raw Data", 20.0, 290.0, 190.0, 160.0)
            .with_subtitle("(JSON)")
            .with_color(Color32::from_rgb(0x38, 0xbd, 0xf8))
            .with_tooltip("User–expert conversations, images, image descriptions, and metadata.")
            .with_bullets(&[
                "Dialogue",
                "Attachments (Images)",
                "Image Descriptions",
                "Meta Data",
            ])
            .with_icon(AssetKey::Farmers),
        Node::new("clean", "Data Cleaning", 250.0, 300.0, 170.0, 120.0)
            .with_subtitle("PII / URLs")
            .dashed()
            .with_tooltip("Strip PII and scrub URLs before any processing."),
        Node::new("lvlm", "LVLM", 260.0, 450.0, 140.0, 70.0)
            .with_subtitle("(image parsing)")
            .with_tooltip("Vision-language model used to summarize or describe attached images.")
            .with_logo(AssetKey::OpenAi),
        Node::new("truncate", "Truncate Dialogue", 450.0, 250.0, 220.0, 210.0)
            .with_subtitle("Partial Observability")
            .dashed()
            .with_tooltip(
                "Iterate over user turns, select a context window, retain context up to the \
                 user turn, and extract the next user utterance (revealed fact).",
            )
            .with_bullets(&[
                "Iterate through user turns",
                "Select context window",
                "Retain context up to user turn",
                "Extract next user utterance",
            ]),
        Node::new("prompt", "Prompt Design", 430.0, 500.0, 260.0, 170.0)
            .with_color(Color32::from_rgb(0xf5, 0x9e, 0x0b))
            .with_tooltip(
                "Compose the MMMT prompt from dialogue context, revealed facts, user goal, \
                 optional image description, and mark the expert turn.",
            )
            .with_bullets(&[
                "Dialogue Context",
                "Revealed Facts",
                "User Goal",
                "Image Description",
                "Expert Turn",
            ]),
        Node::new("llm", "LLM", 720.0, 530.0, 100.0, 80.0)
            .with_tooltip("Language model converts the prompt into a structured task entry.")
            .with_logo(AssetKey::OpenAi),
        Node::new("task", "MMMT Task", 860.0, 250.0, 260.0, 310.0)
            .with_subtitle("(JSON)")
            .with_color(Color32::from_rgb(0xfb, 0x71, 0x85))
            .with_tooltip("Final structured sample for the benchmark / dataset.")
            .with_bullets(&[
                "Source ID",
                "Dialogue Context",
                "Attachments (Images)",
                "Goal",
                "Goal State {...}",
                "Decision",
                "Utterance",
            ])
            .with_icon(AssetKey::FarmerRobot),
    ];

    let edges = vec![
        Edge::new("raw", "clean"),
        Edge::new("clean", "truncate"),
        Edge::new("raw", "lvlm"),
        Edge::new("lvlm", "prompt"),
        Edge::new("truncate", "prompt"),
        Edge::new("prompt", "llm"),
        Edge::new("llm", "task"),
    ];

    let steps = vec![
        Step::new(
            "s1",
            &["raw"],
            "Start with raw JSON: dialogues, images, descriptions, metadata.",
        ),
        Step::new("s2", &["clean"], "Clean sensitive info (PII) and strip URLs."),
        Step::new(
            "s3",
            &["truncate"],
            "Truncate dialogue for partial observability; extract next user fact.",
        ),
        Step::new(
            "s4",
            &["lvlm"],
            "Use LVLM to summarize or describe attached images.",
        ),
        Step::new(
            "s5",
            &["prompt"],
            "Assemble the prompt: context + revealed facts + user goal + (image description).",
        ),
        Step::new(
            "s6",
            &["llm"],
            "LLM converts prompt into a structured MMMT sample.",
        ),
        Step::new(
            "s7",
            &["task"],
            "Output: MMMT Task JSON with fields like Goal, Goal State, Decision, and Utterance.",
        ),
    ];

    Diagram::new(nodes, edges, steps)
}
