//! Lemonade Session
//!
//! This example walks a terminal "view" through two full lemonade cycles.
//!
//! Key concepts:
//! - A seeded tree makes the walk reproducible
//! - Long presses only show a notice while squeezing
//! - Suspending mid-squeeze and resuming from a checkpoint
//!
//! Run with: RUST_LOG=debug cargo run --example lemonade_session

use lemonade::checkpoint::Checkpoint;
use lemonade::core::{LemonTree, Stage};
use lemonade::display::Strings;
use lemonade::session::{Frame, Session, View};
use tracing_subscriber::EnvFilter;

struct TerminalView;

impl View for TerminalView {
    fn render(&mut self, frame: &Frame) {
        println!("  [{}] {}", frame.image, frame.text);
    }

    fn notify(&mut self, message: &str) {
        println!("  (notice) {}", message);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Lemonade Session ===\n");

    let mut session = Session::start(LemonTree::seeded(7), TerminalView);

    println!("\nLong press on the tree:");
    let shown = session.long_press();
    println!("  notice shown: {}", shown);

    println!("\nPick and start squeezing:");
    session.tap();
    session.tap();
    session.long_press();

    println!("\nSuspending mid-squeeze...");
    let json = session.checkpoint().to_json()?;
    println!("{}", json);

    let checkpoint = Checkpoint::from_json(&json)?;
    println!("\nResuming checkpoint {}:", checkpoint.id);
    let mut session = Session::resume(
        LemonTree::seeded(8),
        &checkpoint.snapshot,
        Strings::default(),
        TerminalView,
    );

    println!("\nSqueeze until the glass is full:");
    while session.stage() == Stage::Squeeze {
        session.tap();
    }

    println!("\nDrink, empty the glass and go around once more:");
    let mut cycles = 0;
    while cycles < 2 {
        if session.tap().to == Stage::Select {
            cycles += 1;
        }
    }

    println!("\n=== Done ===");
    Ok(())
}
