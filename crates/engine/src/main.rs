//! Headless agent: drives the editor over a JSON line protocol.
//!
//! Reads one command per stdin line, executes it against an in-process
//! editor session, and prints one JSON response per line. A `.homemodeler`
//! project can be preloaded with `--project <path>`.

use std::io::BufRead;

use homemodeler_engine::command::execute_json;
use homemodeler_engine::harness::EditorHarness;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homemodeler=info".into()),
        )
        .init();

    let mut harness = EditorHarness::new();

    if let Some(path) = parse_project_arg() {
        match harness.load_file(std::path::Path::new(&path)) {
            Ok(()) => {
                tracing::info!(
                    "Loaded project from {path} ({} objects, {} floors)",
                    harness.object_count(),
                    harness.floor_count()
                );
            }
            Err(e) => {
                tracing::error!("Failed to load project {path}: {e}");
            }
        }
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let output = match execute_json(&mut harness, &line) {
            Ok(resp) => serde_json::to_string(&resp).unwrap_or_default(),
            Err(e) => serde_json::json!({ "success": false, "error": e }).to_string(),
        };
        println!("{output}");
    }
}

fn parse_project_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--project" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
        i += 1;
    }
    None
}
