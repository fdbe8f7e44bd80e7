//! Anchor Drift
//!
//! This demo shows what the fixed scenario never does: repeated attempts
//! to ground perception with a sensory anchor.
//!
//! Key concepts:
//! - Seeded random source for reproducible runs
//! - Narration captured in a transcript instead of printed live
//! - Entropy as an unclamped accumulator
//!
//! Run with: cargo run --example anchor_drift

use double_track::narration::Transcript;
use double_track::system::{AnchorOutcome, SystemBuilder};

fn main() {
    println!("=== Anchor Drift Demo ===\n");

    let mut system = SystemBuilder::new().seed(2024).build().unwrap();
    let mut transcript = Transcript::new();

    let mut held = 0;
    for attempt in 1..=10 {
        let outcome = system.attempt_anchor(&mut transcript);
        if outcome == AnchorOutcome::Held {
            held += 1;
        }
        println!(
            "Attempt {attempt:>2}: {outcome:?} -> entropy {:.1}",
            system.entropy()
        );
    }

    println!("\nAnchors held: {held}/10");
    println!("Narrated lines: {}", transcript.lines().len());

    println!("\n=== Demo Complete ===");
}
