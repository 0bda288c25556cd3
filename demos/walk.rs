//! Terminal demo: watch a search spread over a random grid.
//!
//! Run: cargo run --bin wayfind-walk -- [algorithm] [seed]

use wayfind_demos::{GridConfig, GridMap, Overlay, RunConfig};
use wayfind_paths::{Algorithm, Pathfinder, SearchEvent, StepStatus};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let mut run = RunConfig::default();
    if let Some(name) = args.next() {
        run.algorithm = name.parse::<Algorithm>()?;
    }
    let mut grid = GridConfig::default();
    if let Some(seed) = args.next() {
        grid.seed = seed.parse()?;
    }

    let map = GridMap::generate(&grid)?;
    let walkable = map.walkable();
    let (Some(&start), Some(&end)) = (walkable.first(), walkable.last()) else {
        return Err("grid has no walkable cells".into());
    };

    let mut overlay = Overlay::new(&map, start, end);
    let mut pathfinder = run.algorithm.pathfinder();
    let mut search = pathfinder.find_path_step_by_step(&map.graph, start, end, run.step_delay);

    let mut events = Vec::new();
    let mut steps = 0usize;
    let mut found = None;
    loop {
        events.clear();
        let status = search.step(&mut events);
        for event in events.drain(..) {
            event.dispatch(&mut overlay);
            if let SearchEvent::Finished(path) = event {
                found = Some(path);
            }
        }
        steps += 1;
        redraw(&map, &overlay, run.algorithm, steps);
        match status {
            StepStatus::Suspended(delay) => std::thread::sleep(delay),
            StepStatus::Done => break,
        }
    }

    match found.flatten() {
        Some(path) => {
            let cost = map.graph.path_cost(&path).unwrap_or(f32::NAN);
            println!("path: {} nodes, cost {cost:.2}", path.len());
        }
        None => println!("no path"),
    }
    Ok(())
}

fn redraw(map: &GridMap, overlay: &Overlay, algorithm: Algorithm, steps: usize) {
    // Clear screen, cursor home.
    print!("\x1b[2J\x1b[H");
    println!("{algorithm}  step {steps}");
    print!("{}", overlay.render(map));
}
