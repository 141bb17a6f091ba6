//! Pipeline Player CLI - diagram inspection and validation

mod config;
mod graph;
mod pipeline;

use std::env;
use std::process::ExitCode;

use graph::Diagram;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Pipeline Player CLI - diagram inspection");
        println!("Usage: pipeline-player-cli [diagram.json]");
        println!();
        println!("Validates and prints the given diagram, or the built-in");
        println!("task generation pipeline when no file is given.");
        println!();
        println!("Example: pipeline-player-cli demos/ingest_pipeline.json");
        return ExitCode::SUCCESS;
    }

    let diagram = match args.get(1) {
        Some(path) => match Diagram::load(path) {
            Ok(diagram) => {
                println!("✅ Loaded diagram from '{path}'");
                diagram
            }
            Err(e) => {
                eprintln!("❌ {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let diagram = pipeline::task_pipeline();
            if let Err(errors) = diagram.validate() {
                for error in &errors {
                    eprintln!("❌ {error}");
                }
                return ExitCode::FAILURE;
            }
            println!("✅ Built-in task generation pipeline");
            diagram
        }
    };

    println!();
    println!(
        "  Nodes: {} | Edges: {} | Steps: {}",
        diagram.nodes.len(),
        diagram.edges.len(),
        diagram.steps.len()
    );

    println!("  Nodes:");
    for node in &diagram.nodes {
        println!(
            "    - {} '{}' at ({}, {}) size {}x{}",
            node.id, node.title, node.x, node.y, node.w, node.h
        );
    }

    println!("  Edges:");
    for edge in &diagram.edges {
        println!("    {} --> {}", edge.from, edge.to);
    }

    println!("  Steps:");
    for (i, step) in diagram.steps.iter().enumerate() {
        println!("    {}. [{}] {}", i + 1, step.highlight.join(", "), step.text);
    }

    ExitCode::SUCCESS
}
