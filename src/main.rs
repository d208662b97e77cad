use std::path::PathBuf;

use clap::Parser;

use multimodal_router::{all_paths, graph_topology, sample_network, standard_modes};

#[derive(Parser, Debug)]
struct Args {
    /// Where to write the node/edge list of the network
    #[arg(long, default_value = "graph.json")]
    graph_out: PathBuf,
    /// Where to write the per-city, per-mode cheapest paths
    #[arg(long, default_value = "paths.json")]
    paths_out: PathBuf,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let graph = sample_network()?;

    let topology = graph_topology(&graph);
    std::fs::write(&args.graph_out, serde_json::to_string_pretty(&topology)?)?;
    println!("Saved graph topology to {}", args.graph_out.display());

    let start_time = std::time::Instant::now();
    let report = all_paths(&graph, &standard_modes())?;
    println!(
        "Took {}ms to compute shortest paths",
        start_time.elapsed().as_millis()
    );

    std::fs::write(&args.paths_out, serde_json::to_string_pretty(&report)?)?;
    println!("Saved path costs to {}", args.paths_out.display());

    Ok(())
}
