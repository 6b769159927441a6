//! MSD command implementation
//!
//! Simulates an ensemble of walks and reports the mean squared displacement
//! over a time grid next to the closed-form value.

use ctrw_engine::{Ensemble, MsdPoint, WalkConfig};
use serde::Serialize;
use tracing::info;

use super::{write_csv, write_json, OutputFormat};
use crate::{CliError, Result};

/// Empirical and theoretical MSD at one time
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MsdRow {
    /// Query time
    pub time: f64,
    /// Ensemble mean of x² + y²
    pub msd: f64,
    /// (t / τ) · E[R²]
    pub expected: f64,
}

/// Maximum number of times in an MSD grid.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Time grid for a horizon: `points` evenly spaced times, or integer times
/// 0, 1, … below the horizon when `points` is unset.
pub fn time_grid(horizon: f64, points: Option<usize>) -> Result<Vec<f64>> {
    if !(horizon.is_finite() && horizon >= 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "Horizon must be finite and non-negative, got {}",
            horizon
        )));
    }
    let count = match points {
        Some(points) => points as f64,
        None => horizon.ceil(),
    };
    if count > MAX_GRID_POINTS as f64 {
        return Err(CliError::InvalidArgument(format!(
            "Time grid of {} points exceeds the limit of {}",
            count, MAX_GRID_POINTS
        )));
    }
    Ok(match points {
        Some(points) => Ensemble::uniform_grid(horizon, points),
        None => Ensemble::integer_grid(count as usize),
    })
}

/// Attach the theoretical MSD to each ensemble point
pub fn msd_rows(config: &WalkConfig, points: &[MsdPoint]) -> Vec<MsdRow> {
    points
        .iter()
        .map(|p| MsdRow {
            time: p.time,
            msd: p.msd,
            expected: config.expected_msd(p.time),
        })
        .collect()
}

/// Run the msd command
pub fn run(
    config: WalkConfig,
    walks: usize,
    horizon: f64,
    points: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    info!("Starting ensemble simulation...");
    info!("  Walks: {}", walks);
    info!("  Horizon: {}", horizon);

    let grid = time_grid(horizon, points)?;
    let mut ensemble = Ensemble::new(config, walks)?;
    let steps = ensemble.simulate(horizon)?;
    info!(seed = ensemble.seed(), steps, "ensemble simulated");

    let rows = msd_rows(&config, &ensemble.mean_squared_displacement(&grid)?);

    match format {
        OutputFormat::Table => {
            println!("\n┌────────────┬──────────────┬──────────────┐");
            println!("│ t          │ MSD          │ Expected     │");
            println!("├────────────┼──────────────┼──────────────┤");
            for row in &rows {
                println!(
                    "│ {:>10.3} │ {:>12.4} │ {:>12.4} │",
                    row.time, row.msd, row.expected
                );
            }
            println!("└────────────┴──────────────┴──────────────┘");
        }
        OutputFormat::Json => write_json(&rows)?,
        OutputFormat::Csv => write_csv(&rows)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_grid() {
        assert_eq!(time_grid(3.0, None).unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(time_grid(2.5, None).unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(time_grid(4.0, Some(3)).unwrap(), vec![0.0, 2.0, 4.0]);
        assert!(time_grid(f64::NAN, None).is_err());
        assert!(time_grid(-1.0, Some(3)).is_err());
    }

    #[test]
    fn test_time_grid_size_is_bounded() {
        assert!(matches!(
            time_grid(1e20, None),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            time_grid(10.0, Some(MAX_GRID_POINTS + 1)),
            Err(CliError::InvalidArgument(_))
        ));
        assert_eq!(time_grid(1e20, Some(2)).unwrap(), vec![0.0, 1e20]);
    }

    #[test]
    fn test_rows_carry_expected_msd() {
        let config = WalkConfig::default();
        let points = [
            MsdPoint { time: 0.0, msd: 0.0 },
            MsdPoint { time: 8.0, msd: 2.9 },
        ];
        let rows = msd_rows(&config, &points);

        assert_eq!(rows[0].expected, 0.0);
        assert_eq!(rows[1].expected, 3.0);
        assert_eq!(rows[1].msd, 2.9);
    }
}
