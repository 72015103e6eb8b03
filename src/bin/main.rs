use anstream::println;
use clap::Parser;
use indoc::indoc;
use owo_colors::OwoColorize;

use informed_search::algorithms::a_star_search;
use informed_search::algorithms::ao_star_search;
use informed_search::algorithms::best_first_search;
use informed_search::demo;
use informed_search::demo::DecompositionSpec;
use informed_search::demo::EdgeSpec;
use informed_search::demo::HeuristicSpec;
use informed_search::graph::InformedGraph;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = informed_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Undirected weighted edges, 'U-V[:COST]' (cost defaults to 1).
    /// With no edges given, the classic five-node scenario runs.
    #[arg()]
    pub edges: Vec<EdgeSpec>,

    /// Heuristic table entries, 'NODE=VALUE'
    #[arg(long = "heuristic")]
    pub heuristics: Vec<HeuristicSpec>,

    /// Decomposition (AND-OR) edges, 'PARENT-CHILD[:and|or]'
    #[arg(long = "decomposition")]
    pub decompositions: Vec<DecompositionSpec>,

    #[arg(short, long, env = "SEARCH_START", default_value = demo::DEFAULT_START)]
    pub start: String,

    #[arg(short, long, env = "SEARCH_GOAL", default_value = demo::DEFAULT_GOAL)]
    pub goal: String,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

impl Args {
    fn graph(&self) -> InformedGraph<String, u32> {
        if self.edges.is_empty() && self.heuristics.is_empty() && self.decompositions.is_empty() {
            return demo::reference_graph();
        }

        let mut g = InformedGraph::new();
        for e in &self.edges {
            g.add_edge(e.from.clone(), e.to.clone(), e.cost);
        }
        for h in &self.heuristics {
            g.set_heuristic(h.node.clone(), h.value);
        }
        for d in &self.decompositions {
            g.add_decomposition(d.parent.clone(), d.child.clone(), d.connector);
        }
        g
    }
}

fn main() {
    let args = Args::parse();
    args.color.write_global();

    println!(
        "{}",
        indoc! {"
            Informed graph search: Best-First, A* and AO* over a shared
            weighted graph, heuristic table and AND-OR decomposition.
        "}
    );

    let graph = args.graph();
    let start = &args.start;
    let goal = &args.goal;

    println!("{}", "Graph:".bold());
    print!("{graph}");

    println!("\n{}", "--- Best First Search ---".bold());
    match best_first_search(&graph, start, goal) {
        Some(expansions) => {
            let trace = expansions
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("Best First Search Path: {}", trace.green());
        }
        None => println!("{}", "Goal not reachable".red()),
    }

    println!("\n{}", "--- A* Search ---".bold());
    match a_star_search(&graph, start, goal) {
        Some(path) => println!(
            "A* Search Path: {} (cost {})",
            path.green(),
            path.cost.yellow()
        ),
        None => println!("{}", "Goal not reachable".red()),
    }

    println!("\n{}", "--- AO* Search ---".bold());
    match ao_star_search(&graph, start, goal) {
        Some(path) => println!(
            "AO* Search Path: {} ({} steps)",
            path.green(),
            path.cost.yellow()
        ),
        None => println!("{}", "Goal not reachable".red()),
    }
}
