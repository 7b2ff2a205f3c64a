//! Waypoint CLI
//!
//! Drives the ingestion pipeline and the history store from the
//! command line: feed it a saved model transcript and it prints the
//! canonical roadmap; point it at a store file to list, toggle and
//! remove saved roadmaps.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tokio::sync::mpsc;
use waypoint_core::{GenerationPipeline, VERSION};
use waypoint_ingest::StreamEvent;
use waypoint_store::{FileSlot, HistoryStore, ProgressTracker};

fn store_arg() -> Arg {
    Arg::new("store")
        .long("store")
        .required(true)
        .help("Path of the history store file")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("waypoint")
        .version(VERSION)
        .about("Roadmap ingestion: untrusted model transcripts to canonical documents")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("ingest")
                .about("Extract and validate a roadmap from a model transcript")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .help("Transcript file (defaults to stdin)"),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .action(ArgAction::SetTrue)
                        .requires("store")
                        .help("Save the canonical roadmap into the history store"),
                )
                .arg(store_arg().required(false)),
        )
        .subcommand(
            Command::new("list")
                .about("List saved roadmaps, newest first")
                .arg(store_arg()),
        )
        .subcommand(
            Command::new("remove")
                .about("Delete a saved roadmap")
                .arg(Arg::new("id").long("id").required(true).help("Roadmap id"))
                .arg(store_arg()),
        )
        .subcommand(
            Command::new("toggle")
                .about("Toggle a node's completion on a saved roadmap")
                .arg(Arg::new("id").long("id").required(true).help("Roadmap id"))
                .arg(Arg::new("node").long("node").required(true).help("Node id"))
                .arg(store_arg()),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("ingest", args)) => {
            let transcript = match args.get_one::<String>("file") {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("reading transcript {path}"))?,
                None => std::io::read_to_string(std::io::stdin()).context("reading stdin")?,
            };

            let roadmap = GenerationPipeline::new()
                .run(scripted_stream(&transcript), |_| {})
                .await?;

            println!("{}", serde_json::to_string_pretty(&roadmap)?);

            if args.get_flag("save") {
                let path = args.get_one::<String>("store").expect("requires store");
                let mut store = HistoryStore::open(FileSlot::new(path));
                let id = roadmap.id.to_string();
                store.upsert(roadmap)?;
                eprintln!("saved {id}");
            }
        }
        Some(("list", args)) => {
            let path = args.get_one::<String>("store").expect("required");
            let store = HistoryStore::open(FileSlot::new(path));

            for roadmap in store.list() {
                let done = roadmap.nodes.iter().filter(|n| n.completed).count();
                println!(
                    "{}  {}  [{}/{} done]",
                    roadmap.id,
                    roadmap.title,
                    done,
                    roadmap.nodes.len()
                );
            }
        }
        Some(("remove", args)) => {
            let path = args.get_one::<String>("store").expect("required");
            let id = args.get_one::<String>("id").expect("required");
            let mut store = HistoryStore::open(FileSlot::new(path));

            if store.remove(id)? {
                eprintln!("removed {id}");
            } else {
                eprintln!("no roadmap with id {id}");
            }
        }
        Some(("toggle", args)) => {
            let path = args.get_one::<String>("store").expect("required");
            let id = args.get_one::<String>("id").expect("required");
            let node = args.get_one::<String>("node").expect("required");
            let mut store = HistoryStore::open(FileSlot::new(path));

            let Some(active) = store.get(id).cloned() else {
                anyhow::bail!("no roadmap with id {id}");
            };
            let updated = ProgressTracker::toggle(&mut store, &active, node)?;
            match updated.node(node) {
                Some(n) => println!("{node} completed: {}", n.completed),
                None => eprintln!("no node with id {node}"),
            }
        }
        _ => {}
    }

    Ok(())
}

/// Feed a complete transcript through the stream contract line by line
fn scripted_stream(transcript: &str) -> mpsc::Receiver<StreamEvent> {
    let lines: Vec<&str> = transcript.split_inclusive('\n').collect();
    let (tx, rx) = mpsc::channel(lines.len() + 1);
    for line in lines {
        let _ = tx.try_send(StreamEvent::Fragment(line.to_string()));
    }
    let _ = tx.try_send(StreamEvent::Done);
    rx
}
