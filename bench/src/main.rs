use std::time::Instant;

use graph_walk_core::{all_shortest_paths, bfs, bft, dft, earliest_ancestor, Graph, SocialNetwork};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let size: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-walk-bench [mode] [size]");
        println!();
        println!("Modes:");
        println!("  all       Run every benchmark (default)");
        println!("  chain     Linear path graph (worst-case traversal depth)");
        println!("  social    Random symmetric friendship network");
        println!("  pedigree  Random ancestor tree for earliest-ancestor queries");
        println!();
        println!("Default size: 100000");
        return;
    }

    println!("graph-walk-bench");
    println!("================");
    println!();

    match mode {
        "chain" => bench_chain(size),
        "social" => bench_social(size),
        "pedigree" => bench_pedigree(size),
        "all" => {
            bench_chain(size);
            bench_social(size);
            bench_pedigree(size);
        }
        _ => eprintln!("Unknown mode: {}. Use --help for options.", mode),
    }
}

/// Linear chain 0 → 1 → … → size-1: deepest possible traversal and the
/// longest possible reconstructed path.
fn bench_chain(size: u32) {
    println!("--- Chain ---");
    let size = size.max(2);

    let t = Instant::now();
    let mut graph: Graph<u32> = Graph::with_capacity(size as usize);
    for v in 0..size {
        graph.add_vertex(v);
    }
    for v in 0..size - 1 {
        if let Err(err) = graph.add_edge(&v, &(v + 1)) {
            eprintln!("chain construction failed: {}", err);
            return;
        }
    }
    report_generation(t.elapsed(), graph.vertex_count(), graph.edge_count());

    let t = Instant::now();
    match bft(&graph, &0) {
        Ok(order) => println!(
            "bft full sweep: {} visited in {:.1}ms",
            order.len(),
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Err(err) => println!("bft failed: {}", err),
    }

    let t = Instant::now();
    match dft(&graph, &0) {
        Ok(order) => println!(
            "dft full sweep: {} visited in {:.1}ms",
            order.len(),
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Err(err) => println!("dft failed: {}", err),
    }

    let far = size - 1;
    let t = Instant::now();
    match bfs(&graph, &0, &far) {
        Ok(Some(path)) => println!(
            "bfs 0 → {}: {} hops in {:.1}ms",
            far,
            path.len() - 1,
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Ok(None) => println!("bfs 0 → {}: no path", far),
        Err(err) => println!("bfs failed: {}", err),
    }
    println!();
}

/// Random friendship network, then a full shortest-path map from user 1.
fn bench_social(size: u32) {
    println!("--- Social network ---");
    let users = size.max(2);
    let avg_friendships = 3.min(users - 1);
    let mut rng = StdRng::seed_from_u64(42);

    let t = Instant::now();
    let mut network = SocialNetwork::new();
    if let Err(err) = network.populate_random(users, avg_friendships, &mut rng) {
        println!("population failed: {}", err);
        return;
    }
    println!(
        "Populated in {:.2}s — {} users, {} friendship entries",
        t.elapsed().as_secs_f64(),
        network.user_count(),
        network.friendship_count()
    );

    let t = Instant::now();
    match network.get_all_social_paths(1) {
        Ok(paths) => {
            let longest = paths.values().map(|p| p.len()).max().unwrap_or(0);
            println!(
                "social paths from user 1: {} reachable, longest path {} users, {:.1}ms",
                paths.len(),
                longest,
                t.elapsed().as_secs_f64() * 1000.0
            );
        }
        Err(err) => println!("social paths failed: {}", err),
    }
    println!();
}

/// Random ancestor tree rooted at 0: every node's parent is a random
/// earlier node, so all lineages run back to the root.
fn bench_pedigree(size: u32) {
    println!("--- Pedigree ---");
    let size = i64::from(size.max(2));
    let mut rng = StdRng::seed_from_u64(7);

    let t = Instant::now();
    let mut edges: Vec<(i64, i64)> = Vec::with_capacity(size as usize);
    for child in 1..size {
        let parent = rng.gen_range(0..child);
        edges.push((parent, child));
    }
    println!(
        "Generated in {:.2}s — {} edges",
        t.elapsed().as_secs_f64(),
        edges.len()
    );

    let start = size - 1;
    let t = Instant::now();
    match earliest_ancestor(&edges, start) {
        Some(root) => println!(
            "earliest ancestor of {}: {} in {:.1}ms",
            start,
            root,
            t.elapsed().as_secs_f64() * 1000.0
        ),
        None => println!("node {} has no ancestors", start),
    }

    // Same edge list through the graph store for a traversal comparison.
    let t = Instant::now();
    let mut graph: Graph<i64> = Graph::with_capacity(size as usize);
    for v in 0..size {
        graph.add_vertex(v);
    }
    for (parent, child) in &edges {
        if let Err(err) = graph.add_edge(parent, child) {
            eprintln!("pedigree construction failed: {}", err);
            return;
        }
    }
    match all_shortest_paths(&graph, &0) {
        Ok(paths) => println!(
            "descendant paths from root: {} reachable in {:.1}ms",
            paths.len(),
            t.elapsed().as_secs_f64() * 1000.0
        ),
        Err(err) => println!("descendant paths failed: {}", err),
    }
    println!();
}

fn report_generation(elapsed: std::time::Duration, vertices: usize, edges: usize) {
    println!(
        "Generated in {:.2}s — {} vertices, {} edges",
        elapsed.as_secs_f64(),
        vertices,
        edges
    );
}
