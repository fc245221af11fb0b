//! Runs the online agent through a maze it discovers by sensing, then
//! compares the walked path against the offline optimum.
//!
//! Run with: `cargo run --example online_maze`

use wayfind::{manhattan_distance, offline_astar, GridWorld, OnlineAgent, Result};

const MAZE: &str = "\
S...#....
.##.#.##.
.#..#..#.
.#.###.#.
.#.....#.
.#####.#.
.......#G
";

fn main() -> Result<()> {
    let world = GridWorld::from_text(MAZE)?;

    let offline = offline_astar(&world, manhattan_distance)?;
    println!(
        "offline optimum: cost {} with {} expansions",
        offline.path_cost, offline.node_expansions
    );

    let run = OnlineAgent::new(&world, manhattan_distance).run()?;
    println!(
        "online run:      cost {} with {} expansions over {} plans",
        run.metrics.path_cost, run.metrics.node_expansions, run.metrics.replans
    );

    println!("\n{}", world.render_with_path(&run.path));
    Ok(())
}
