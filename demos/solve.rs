use std::{collections::BTreeMap, process, sync::Arc};

use clap::Parser;
use novem::{
    codec,
    solver::{search::Solver, stats::render_stats_table, topology::Topology},
};

/// Solve a Sudoku puzzle given as an 81-character string ('.' for blanks).
#[derive(Debug, Parser)]
struct Args {
    /// The puzzle, left to right, top to bottom.
    puzzle: String,

    /// Require both main diagonals to contain each digit once as well.
    #[arg(long)]
    diagonal: bool,

    /// Layer the naked-twins rule into every propagation pass.
    #[arg(long)]
    naked_twins: bool,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the solution and statistics as JSON instead of a grid drawing.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let topology = if args.diagonal {
        Topology::diagonal()
    } else {
        Topology::standard()
    };

    let grid = match codec::parse(&topology, &args.puzzle) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let solver = Solver::new(Arc::clone(&topology)).with_naked_twins(args.naked_twins);
    let (solution, stats) = solver.solve(grid);

    let Some(solution) = solution else {
        eprintln!("no solution");
        process::exit(1);
    };

    if args.json {
        let cells: BTreeMap<String, String> = topology
            .cells()
            .filter_map(|cell| {
                solution
                    .candidates(cell)
                    .singleton()
                    .map(|digit| (cell.to_string(), digit.to_string()))
            })
            .collect();
        let payload = serde_json::json!({ "solution": cells, "stats": stats });
        println!("{payload}");
    } else {
        println!("{}", codec::render(&topology, &solution));
        if args.stats {
            println!("nodes visited: {}", stats.nodes_visited);
            println!("backtracks:    {}", stats.backtracks);
            println!("{}", render_stats_table(&stats));
        }
    }
}
