//! Graph algorithms example
//!
//! Runs all six operations on a small delivery network, first through the
//! typed API and then through the JSON envelope.
//!
//! Run with: cargo run --example graph_algorithms
//! Logs:     RUST_LOG=trueno_algo=debug cargo run --example graph_algorithms

use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trueno_algo::api::{error_body, execute, Operation};
use trueno_algo::{
    dijkstra, floyd_warshall, infer, max_matching, prim, tsp, AdjacencyMatrix, BayesNetwork,
    BayesNode, Evidence, Limits, NodeId,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("🦀 trueno-algo: Graph Algorithms\n");

    // 1. Build a delivery network (symmetric, 0 = no road)
    println!("📊 Building delivery network...");
    let names = ["depot", "bakery", "market", "school", "harbor"];
    let graph = AdjacencyMatrix::from_rows(&[
        vec![0, 4, 9, 0, 7],
        vec![4, 0, 3, 6, 0],
        vec![9, 3, 0, 2, 5],
        vec![0, 6, 2, 0, 8],
        vec![7, 0, 5, 8, 0],
    ])?;
    println!("  ✅ {} stops\n", graph.num_nodes());

    // 2. Dijkstra: routes from the depot
    println!("🛣️  Shortest routes from {}:", names[0]);
    for (target, result) in dijkstra(&graph, NodeId(0))?.iter().enumerate() {
        let route: Vec<&str> = result.path.iter().map(|n| names[n.index()]).collect();
        println!("  → {:<7} {:>3}  {}", names[target], result.distance, route.join(" → "));
    }
    println!();

    // 3. Floyd–Warshall: any stop to any stop
    let all = floyd_warshall(&graph);
    let route: Vec<&str> = all
        .path(NodeId(4), NodeId(1))?
        .iter()
        .map(|n| names[n.index()])
        .collect();
    println!("🗺️  {} → {}: {}\n", names[4], names[1], route.join(" → "));

    // 4. Prim: cheapest road set connecting every stop
    let tree = prim(&graph);
    let total: i64 = tree.iter().map(|e| e.weight).sum();
    println!("🌲 Spanning tree ({} roads, total {total}):", tree.len());
    for edge in &tree {
        println!("  {} - {} ({})", names[edge.from.index()], names[edge.to.index()], edge.weight);
    }
    println!();

    // 5. Matching: pair up stops along direct roads
    let matching = max_matching(&graph);
    println!("🤝 {} pairs:", matching.size);
    for edge in &matching.matching {
        println!("  {} ↔ {}", names[edge.from.index()], names[edge.to.index()]);
    }
    println!();

    // 6. TSP: one loop through every stop
    let tour = tsp(&graph, &Limits::default())?;
    let route: Vec<&str> = tour.path.iter().map(|n| names[n.index()]).collect();
    println!("🔁 Tour ({}): {}\n", tour.distance, route.join(" → "));

    // 7. Bayes: how likely is the observed morning?
    let network = BayesNetwork {
        nodes: vec![
            BayesNode::root(0, "rain", 0.2),
            BayesNode {
                id: 1,
                name: "late_delivery".to_string(),
                parents: vec![0],
                children: Vec::new(),
                probabilities: vec![0.1, 0.6],
            },
        ],
    };
    let evidence: Evidence = [(0, true), (1, true)].into_iter().collect();
    let weighted = infer(network, &evidence)?;
    println!("🌧️  P(rain, late_delivery) = {:.3}\n", weighted.probability);

    // 8. The same operations through the JSON envelope
    println!("📨 JSON envelope:");
    let body = json!({"graph": [[0, 4, 0], [4, 0, 1], [0, 1, 0]], "start": 0});
    let response = execute(Operation::Dijkstra, &body, &Limits::default())?;
    println!("  {} {body}\n    → {response}", Operation::Dijkstra);

    let oversized = json!({ "graph": vec![vec![1_i64; 8]; 8] });
    let tight = Limits::default().with_max_tsp_vertices(6);
    if let Err(err) = execute(Operation::Tsp, &oversized, &tight) {
        println!("  {} (8 stops, limit 6)\n    → {}", Operation::Tsp, error_body(&err));
    }

    println!("\n✅ Done");
    Ok(())
}
