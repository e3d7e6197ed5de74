mod config;
mod generators;

use std::time::Instant;

use anyhow::{Context, Result};
use hopnet_core::Network;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{BenchConfig, Mode};
use generators::Generator;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HOPNET_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cfg = BenchConfig::from_env_and_args(&args)?;
    info!(?cfg, "hopnet-bench: starting");

    let generators: Vec<(&str, Generator)> = match cfg.mode {
        Mode::Help => {
            print_help();
            return Ok(());
        }
        Mode::Demo => return run_demo(),
        Mode::Status => return run_status(),
        Mode::Chain => vec![("Chain", generators::gen_chain)],
        Mode::Star => vec![("Star", generators::gen_star)],
        Mode::Cycle => vec![("Cycle with chords", generators::gen_cycle)],
        Mode::Random => vec![("Erdos-Renyi random", generators::gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", generators::gen_barbell)],
        Mode::All => vec![
            ("Chain", generators::gen_chain as Generator),
            ("Star", generators::gen_star),
            ("Cycle with chords", generators::gen_cycle),
            ("Erdos-Renyi random", generators::gen_random),
            ("Barbell (cluster-bridge-cluster)", generators::gen_barbell),
        ],
    };

    println!("hopnet-bench");
    println!("============");
    println!();

    for (name, generator) in generators {
        run_benchmark(name, generator, &cfg)?;
    }
    Ok(())
}

fn print_help() {
    println!("Usage: hopnet-bench [mode] [node_count]");
    println!();
    println!("Modes:");
    println!("  demo        Eight-node fixture: four reachability and four level queries (default)");
    println!("  status      Fixture network statistics as JSON");
    println!("  chain       Single path, maximal hop distance");
    println!("  star        One hub joined to every node");
    println!("  cycle       Ring with periodic chords");
    println!("  random      Erdos-Renyi uniform random edges");
    println!("  barbell     Two dense clusters connected by a thin bridge");
    println!("  all         Run every generator");
    println!();
    println!("Environment:");
    println!("  HOPNET_NODE_COUNT  nodes per generated network (default 1000000)");
    println!("  HOPNET_MAX_DEPTH   deepest neighborhood probe (default 50)");
    println!("  HOPNET_SEED        generator seed (default 42)");
    println!("  HOPNET_LOG         tracing filter (default warn)");
}

/// The eight-node network with edges 1-2, 6-2, 2-4, 5-8.
fn fixture_network() -> Result<Network> {
    let mut network = Network::new(8)?;
    network.connect(1, 2)?;
    network.connect(6, 2)?;
    network.connect(2, 4)?;
    network.connect(5, 8)?;
    Ok(network)
}

fn run_demo() -> Result<()> {
    let network = fixture_network()?;

    for (a, b) in [(1, 6), (6, 4), (7, 4), (5, 6)] {
        println!("{}-{} connected: {}", a, b, network.query(a, b)?);
    }
    for (a, b) in [(1, 6), (6, 4), (7, 4), (5, 8)] {
        println!("level {}-{}: {}", a, b, network.level_connection(a, b)?);
    }
    Ok(())
}

fn run_status() -> Result<()> {
    let network = fixture_network()?;
    let json = serde_json::to_string_pretty(&network.stats())
        .context("serializing network stats")?;
    println!("{}", json);
    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, cfg: &BenchConfig) -> Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} nodes", cfg.node_count);

    let t = Instant::now();
    let network = generator(cfg.node_count, cfg.seed)
        .with_context(|| format!("generating {} network", name))?;
    let gen_time = t.elapsed();
    let stats = network.stats();
    println!(
        "Generated in {:.2}s — {} nodes, {} edges, {} isolated, ~{:.0}MB",
        gen_time.as_secs_f64(),
        stats.size,
        stats.edge_count,
        stats.isolated_nodes,
        stats.memory_bytes as f64 / 1_048_576.0
    );

    // Neighborhood from node 1 (the hub or chain head)
    println!();
    println!("{:>8} {:>12} {:>10}", "depth", "found", "time");
    println!("{:->8} {:->12} {:->10}", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50, 100, 1000, 10_000] {
        if depth > cfg.max_depth {
            break;
        }
        let t = Instant::now();
        let found = network.neighborhood(1, depth)?;
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>8.1}ms",
            depth,
            found.len(),
            elapsed.as_secs_f64() * 1000.0
        );
        // Stop once every other node has been reached
        if found.len() + 1 >= network.size() as usize {
            println!("{:>8} (entire network reached)", "");
            break;
        }
    }

    // Node 1 to the last node: reachability, level, path
    let far_node = network.size();
    println!();

    let t = Instant::now();
    let reachable = network.query(1, far_node)?;
    println!(
        "Query 1 → {}: {} in {:.1}ms",
        far_node,
        reachable,
        t.elapsed().as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let level = network.level_connection(1, far_node)?;
    println!(
        "Level 1 → {}: {} in {:.1}ms",
        far_node,
        level,
        t.elapsed().as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let path = network.shortest_path(1, far_node)?;
    let elapsed = t.elapsed();
    match path {
        Some(p) => println!(
            "Shortest path 1 → {}: {} hops in {:.1}ms",
            far_node,
            p.len() - 1,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "Shortest path 1 → {}: no path ({:.1}ms)",
            far_node,
            elapsed.as_secs_f64() * 1000.0
        ),
    }
    println!();
    Ok(())
}
