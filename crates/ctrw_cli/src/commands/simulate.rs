//! Simulate command implementation
//!
//! Grows one walk to a horizon and prints its summary (table) or its full
//! event list (json, csv).

use ctrw_engine::{CtrwEngine, WalkConfig, WalkSummary};
use serde::Serialize;
use tracing::info;

use super::{write_csv, write_json, OutputFormat};
use crate::Result;

/// One trajectory event with the jump that produced it
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EventRow {
    /// Event index (0 is the origin)
    pub index: usize,
    /// Arrival time
    pub time: f64,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Length of the jump into this event (0 for the origin)
    pub jump_length: f64,
    /// Direction of the jump into this event (0 for the origin)
    pub jump_angle: f64,
}

#[derive(Serialize)]
struct SimulationReport {
    summary: WalkSummary,
    events: Vec<EventRow>,
}

/// Flatten a walk into one row per event
pub fn event_rows(walk: &CtrwEngine) -> Vec<EventRow> {
    let lengths = walk.jump_lengths();
    let angles = walk.jump_angles();
    walk.trajectory()
        .iter()
        .enumerate()
        .map(|(index, (position, time))| {
            let jump = index.checked_sub(1);
            EventRow {
                index,
                time,
                x: position.x,
                y: position.y,
                jump_length: jump.and_then(|j| lengths.get(j)).copied().unwrap_or(0.0),
                jump_angle: jump.and_then(|j| angles.get(j)).copied().unwrap_or(0.0),
            }
        })
        .collect()
}

/// Run the simulate command
pub fn run(config: WalkConfig, horizon: f64, format: OutputFormat) -> Result<()> {
    info!("Starting simulation...");
    info!("  Horizon: {}", horizon);

    let mut walk = CtrwEngine::new(config)?;
    walk.advance_to(horizon)?;
    let summary = walk.summary();
    info!(seed = summary.seed, jumps = summary.jumps, "simulation complete");

    match format {
        OutputFormat::Table => print_summary(&summary),
        OutputFormat::Json => write_json(&SimulationReport {
            summary,
            events: event_rows(&walk),
        })?,
        OutputFormat::Csv => write_csv(&event_rows(&walk))?,
    }
    Ok(())
}

fn print_summary(summary: &WalkSummary) {
    println!("\n┌──────────────────────┬──────────────────────┐");
    println!("│ Seed                 │ {:>20} │", summary.seed);
    println!("│ Jumps                │ {:>20} │", summary.jumps);
    println!("│ Horizon reached      │ {:>20.4} │", summary.horizon);
    println!("│ Final x              │ {:>20.4} │", summary.final_position.x);
    println!("│ Final y              │ {:>20.4} │", summary.final_position.y);
    println!("│ Squared displacement │ {:>20.4} │", summary.squared_displacement);
    println!("└──────────────────────┴──────────────────────┘");
}
