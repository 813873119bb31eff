//! Smoke test: load a map, walk a fixed action sequence and print the result.
//!
//! Usage: `gridworld [CONFIG.json]`. Without an argument the default 5x5 map
//! is used. Set `RUST_LOG=gridworld=trace` to see every step.

use gridworld::config::GridConfig;
use gridworld::env::GridWorld;
use gridworld::rollout::run_actions;
use gridworld::types::Action;
use gridworld::visualization::render_grid;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    gridworld::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading configuration");
            GridConfig::from_json_file(&path)?
        }
        None => GridConfig::default(),
    };
    config.validate()?;

    println!("GridWorld smoke test");
    println!("{}", "-".repeat(50));

    println!("Initial state: {}", config.start);
    let mut env = GridWorld::new(config);

    let actions = [Action::RIGHT, Action::DOWN, Action::RIGHT, Action::DOWN];
    let summary = run_actions(&mut env, actions)?;

    for (i, step) in summary.transitions.iter().enumerate() {
        println!(
            "Step {}: action={} state={} reward={:.2} done={}",
            i + 1,
            step.action,
            step.next_state,
            step.reward,
            step.done
        );
    }

    println!();
    println!(
        "Total reward: {:.2} | Steps: {} | Reached target: {}",
        summary.total_reward, summary.steps, summary.reached_target
    );
    println!();
    print!("{}", render_grid(&env));

    Ok(())
}
