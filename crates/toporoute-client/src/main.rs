//! TopoRoute Client - generates a random topology and queries the routing
//! server.
//!
//! Each invocation generates a fresh topology unless `--topology` points at a
//! previously saved one; reuse across requests is an explicit file, not
//! hidden process state.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use serde_json::{json, Value};

use toporoute_core::{generate, AdjacencyList};

/// TopoRoute Client - random topology generation and route queries
#[derive(Parser, Debug)]
#[command(name = "toporoute-client")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Routing server host
    #[arg(long, default_value = "127.0.0.1", env = "TOPOROUTE_SERVER_HOST")]
    server_host: String,

    /// Routing server port
    #[arg(long, default_value = "5001", env = "TOPOROUTE_SERVER_PORT")]
    server_port: u16,

    /// Number of nodes in the generated topology
    #[arg(short, long, default_value = "10")]
    nodes: usize,

    /// Force an edge onto nodes that look isolated during generation
    /// (best-effort, not a connectivity guarantee)
    #[arg(long)]
    connected: bool,

    /// Source node label
    #[arg(short, long)]
    source: String,

    /// Destination node label
    #[arg(short, long)]
    destination: String,

    /// Routing strategy: all_simple_paths, all_cheapest_paths,
    /// sortest_path_spf, or sortest_path_bf
    #[arg(short, long, default_value = "sortest_path_spf")]
    routing_logic: String,

    /// Hop-count limit for path enumeration
    #[arg(long)]
    cutoff: Option<usize>,

    /// Reuse a previously saved topology instead of generating a new one
    #[arg(long)]
    topology: Option<PathBuf>,

    /// Save the topology used for this request
    #[arg(long)]
    save_topology: Option<PathBuf>,
}

fn load_or_generate(args: &Args) -> anyhow::Result<AdjacencyList> {
    match &args.topology {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read topology {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid topology file {}", path.display()))
        }
        None => Ok(generate(args.nodes, args.connected)),
    }
}

fn build_payload(args: &Args, adj_list: &AdjacencyList) -> Value {
    json!({
        "source": args.source,
        "destination": args.destination,
        "routing_logic": args.routing_logic,
        "adj_list": adj_list,
        "cutoff": args.cutoff,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let adj_list = load_or_generate(&args)?;
    println!("{}", "Topology:".bold());
    println!("{}", serde_json::to_string_pretty(&adj_list)?);

    if let Some(path) = &args.save_topology {
        fs::write(path, serde_json::to_string_pretty(&adj_list)?)
            .with_context(|| format!("failed to save topology {}", path.display()))?;
        println!("Topology saved to {}", path.display().to_string().green());
    }

    let url = format!(
        "http://{}:{}/get_routes",
        args.server_host, args.server_port
    );
    println!("Querying {} ...", url.cyan());

    let client = reqwest::blocking::Client::new();
    let response = client
        .post(&url)
        .json(&build_payload(&args, &adj_list))
        .send()
        .with_context(|| format!("request to {url} failed"))?;

    let status = response.status();
    let body: Value = response.json().context("server returned a non-JSON body")?;

    if status.is_success() {
        println!("{}", "Routes:".bold());
        println!("{}", serde_json::to_string_pretty(&body)?);
        Ok(())
    } else {
        let error = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        println!("{} {}", "Routing failed:".red(), error);
        anyhow::bail!("server responded {status}: {error}")
    }
}
