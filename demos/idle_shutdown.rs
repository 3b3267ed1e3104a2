//! Idle Shutdown
//!
//! This example winds a worker down once it has gone quiet.
//!
//! Key concepts:
//! - A short countdown while active, a long one while idle
//! - Every reset restarts the full duration for the given state
//! - Stop releases the timer when the work is done
//!
//! Run with: RUST_LOG=debug cargo run --example idle_shutdown

use state_timer::{state_enum, DurationMap, StateTimer};
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Activity {
        Active,
        Idle,
    }
    names: [Active => "active", Idle => "idle"]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Idle Shutdown Example ===\n");

    let states = DurationMap::from([
        (Activity::Active, Duration::from_millis(5)),
        (Activity::Idle, Duration::from_secs(24 * 60 * 60)),
    ]);

    // Create a timer in the idle state
    let mut timer = StateTimer::new(Activity::Idle, states);
    println!("Timer created in state {:?}", timer.state());

    // Do some work that keeps the timer in the active state
    timer.reset(Activity::Active);
    thread::sleep(Duration::from_millis(50));

    let last_reset = Instant::now();
    timer.reset(Activity::Active);
    println!("Timer reset to {:?} twice, 50ms apart", timer.state());

    // Wait for the timer to expire
    if let Some(fired) = timer.signal().recv() {
        println!(
            "Timer fired at {} ({:?} after the last reset)",
            fired,
            last_reset.elapsed()
        );
    }

    // Always stop the timer when finished
    timer.stop();

    println!("\n=== Example Complete ===");
}
