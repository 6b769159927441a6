//! Ensembles of independent walks and mean squared displacement.
//!
//! # Architecture
//!
//! ```text
//! Ensemble
//! ├── WalkConfig        (shared parameters)
//! ├── master WalkRng    (derives one seed per walk)
//! └── Vec<CtrwEngine>   (owned, no shared state)
//!     ├── simulate()                    ─ rayon, one task per walk
//!     └── mean_squared_displacement()  ─ rayon, one resumable sweep per walk
//!                                         then element-wise reduction
//! ```
//!
//! Walks share no mutable state, so both operations parallelise without
//! locks. Per-walk seeds are drawn from the master stream in walk order,
//! which makes results independent of the thread count.

use ctrw_core::rng::WalkRng;
use rayon::prelude::*;
use tracing::{debug, info_span, warn};

use crate::config::WalkConfig;
use crate::engine::CtrwEngine;
use crate::error::WalkError;

/// Mean squared displacement of an ensemble at one time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MsdPoint {
    /// Query time.
    pub time: f64,
    /// Mean of x² + y² across walks at `time`.
    pub msd: f64,
}

/// A fixed-size collection of independent walks.
///
/// # Examples
///
/// ```rust
/// use ctrw_engine::{Ensemble, WalkConfig};
///
/// let config = WalkConfig::builder().seed(1).build().unwrap();
/// let mut ensemble = Ensemble::new(config, 200).unwrap();
/// ensemble.simulate(20.0).unwrap();
///
/// let grid = Ensemble::integer_grid(20);
/// let msd = ensemble.mean_squared_displacement(&grid).unwrap();
/// assert_eq!(msd.len(), 20);
/// assert_eq!(msd[0].msd, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Ensemble {
    config: WalkConfig,
    seed: u64,
    walks: Vec<CtrwEngine>,
}

impl Ensemble {
    /// Creates `size` walks at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::EmptyEnsemble`] for `size == 0` and
    /// [`WalkError::Config`] for an invalid configuration.
    pub fn new(config: WalkConfig, size: usize) -> Result<Self, WalkError> {
        if size == 0 {
            return Err(WalkError::EmptyEnsemble);
        }
        config.validate()?;

        let mut master = match config.seed() {
            Some(seed) => WalkRng::from_seed(seed),
            None => WalkRng::from_entropy(),
        };
        let seed = master.seed();
        let walks = (0..size)
            .map(|_| CtrwEngine::new(config.with_seed(master.split().seed())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            seed,
            walks,
        })
    }

    /// Shared walk configuration.
    #[inline]
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Master seed the per-walk seeds were derived from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of walks.
    #[inline]
    pub fn len(&self) -> usize {
        self.walks.len()
    }

    /// Always `false`; empty ensembles are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }

    /// The walks, in creation order.
    #[inline]
    pub fn walks(&self) -> &[CtrwEngine] {
        &self.walks
    }

    /// Smallest horizon reached by any walk.
    pub fn min_horizon(&self) -> f64 {
        self.walks
            .iter()
            .map(CtrwEngine::horizon)
            .fold(f64::INFINITY, f64::min)
    }

    /// Advances every walk to `horizon` in parallel.
    ///
    /// Returns the total number of steps taken.
    ///
    /// # Errors
    ///
    /// Propagates the first [`CtrwEngine::advance_to`] failure.
    pub fn simulate(&mut self, horizon: f64) -> Result<usize, WalkError> {
        let span = info_span!("ensemble_simulate", walks = self.walks.len(), horizon);
        let _guard = span.enter();

        let steps: Vec<usize> = self
            .walks
            .par_iter_mut()
            .map(|walk| walk.advance_to(horizon))
            .collect::<Result<_, _>>()?;
        let total: usize = steps.iter().sum();

        debug!(total_steps = total, "ensemble simulated");
        Ok(total)
    }

    /// Mean squared displacement at each time of `grid`.
    ///
    /// Every walk rewinds its cursor and sweeps the grid in resumable mode,
    /// so the cost per walk is O(events + grid points).
    ///
    /// Times past a walk's horizon use its last known position; simulate to
    /// at least the largest grid time for unbiased values.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::UnsortedTimeGrid`] unless `grid` is
    /// non-decreasing and free of NaN.
    pub fn mean_squared_displacement(&mut self, grid: &[f64]) -> Result<Vec<MsdPoint>, WalkError> {
        if let Some(index) = grid.iter().position(|t| t.is_nan()) {
            return Err(WalkError::UnsortedTimeGrid { index });
        }
        if let Some(index) = grid.windows(2).position(|w| w[1] < w[0]) {
            return Err(WalkError::UnsortedTimeGrid { index: index + 1 });
        }

        let span = info_span!("ensemble_msd", walks = self.walks.len(), points = grid.len());
        let _guard = span.enter();

        if let Some(&last) = grid.last() {
            let min_horizon = self.min_horizon();
            if last > min_horizon {
                warn!(
                    grid_end = last,
                    min_horizon, "grid extends past simulated horizon; MSD underestimated"
                );
            }
        }

        let sums = self
            .walks
            .par_iter_mut()
            .map(|walk| {
                walk.reset_cursor();
                grid.iter()
                    .map(|&t| walk.resume_position(t).squared_norm())
                    .collect::<Vec<f64>>()
            })
            .reduce(
                || vec![0.0; grid.len()],
                |mut acc, r2| {
                    acc.iter_mut().zip(r2).for_each(|(a, b)| *a += b);
                    acc
                },
            );

        let n = self.walks.len() as f64;
        Ok(grid
            .iter()
            .zip(sums)
            .map(|(&time, sum)| MsdPoint {
                time,
                msd: sum / n,
            })
            .collect())
    }

    /// Times 0, 1, …, `end − 1`.
    pub fn integer_grid(end: usize) -> Vec<f64> {
        (0..end).map(|t| t as f64).collect()
    }

    /// `points` evenly spaced times from 0 to `horizon` inclusive.
    ///
    /// A single point yields `[0.0]`; zero points yield an empty grid.
    pub fn uniform_grid(horizon: f64, points: usize) -> Vec<f64> {
        match points {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let step = horizon / (points - 1) as f64;
                (0..points).map(|i| i as f64 * step).collect()
            }
        }
    }
}
