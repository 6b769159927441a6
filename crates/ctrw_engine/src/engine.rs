//! The continuous-time random walk engine.
//!
//! # Step
//!
//! Each step of [`CtrwEngine::advance_to`] draws, in order:
//! 1. a direction θ uniformly in [0, 2π)
//! 2. a jump length R from the configured [`JumpLengthDistribution`]
//! 3. a waiting time Δt ~ Exp(τ)
//!
//! and appends the event (last position + R·(cos θ, sin θ), last time + Δt).
//! The number of steps needed to reach a horizon is itself random.
//!
//! # Random Sources
//!
//! The engine derives four independent streams from its master seed: one
//! each for directions, jump lengths, the Gaussian generator and the
//! waiting-time generator. A seed therefore fixes the whole walk.

use ctrw_core::rng::WalkRng;
use ctrw_core::variates::{ExponentialVariate, GaussianVariate};
use tracing::{debug, warn};

use crate::config::WalkConfig;
use crate::error::WalkError;
use crate::jump::{JumpLengthDistribution, JumpRecords, JumpSampler};
use crate::query::{QueryCursor, QueryMode};
use crate::trajectory::Trajectory;
use crate::types::Position;

/// Summary of a walk for reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkSummary {
    /// Master seed of the walk.
    pub seed: u64,
    /// Number of jumps taken.
    pub jumps: usize,
    /// Arrival time of the last event.
    pub horizon: f64,
    /// Position after the last jump.
    pub final_position: Position,
    /// Squared distance of the final position from the origin.
    pub squared_displacement: f64,
}

/// A single continuous-time random walk in the plane.
///
/// Created at the origin at t = 0. [`advance_to`](Self::advance_to) only
/// ever extends the trajectory; nothing shrinks or resets it.
///
/// # Examples
///
/// ```rust
/// use ctrw_engine::{CtrwEngine, Position, QueryMode, WalkConfig};
///
/// let config = WalkConfig::builder().seed(42).build().unwrap();
/// let mut walk = CtrwEngine::new(config).unwrap();
///
/// assert_eq!(walk.scan_position(5.0), Position::ORIGIN);
///
/// walk.advance_to(100.0).unwrap();
/// assert!(walk.horizon() >= 100.0);
///
/// let p = walk.position_at(50.0, QueryMode::Resumable);
/// assert_eq!(p, walk.scan_position(50.0));
/// ```
#[derive(Clone, Debug)]
pub struct CtrwEngine {
    config: WalkConfig,
    seed: u64,
    angles: WalkRng,
    jump_lengths: JumpSampler,
    waiting_times: ExponentialVariate,
    trajectory: Trajectory,
    jumps: JumpRecords,
    cursor: QueryCursor,
}

impl CtrwEngine {
    /// Creates a walk at the origin.
    ///
    /// Without a configured seed, one is drawn from OS entropy and can be
    /// read back with [`seed`](Self::seed).
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Config`] if the configuration is invalid.
    pub fn new(config: WalkConfig) -> Result<Self, WalkError> {
        config.validate()?;

        let mut master = match config.seed() {
            Some(seed) => WalkRng::from_seed(seed),
            None => WalkRng::from_entropy(),
        };
        let seed = master.seed();
        let angles = master.split();
        let jump_rng = master.split();
        let gaussian = GaussianVariate::new(master.split());
        let waiting_times = ExponentialVariate::new(master.split());
        let jump_lengths = JumpSampler::new(config.jump_length(), jump_rng, gaussian)?;

        Ok(Self {
            config,
            seed,
            angles,
            jump_lengths,
            waiting_times,
            trajectory: Trajectory::new(),
            jumps: JumpRecords::default(),
            cursor: QueryCursor::default(),
        })
    }

    /// The configuration this walk was built from.
    #[inline]
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Master seed of this walk.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Jump-length law in use.
    #[inline]
    pub fn jump_length_distribution(&self) -> JumpLengthDistribution {
        self.config.jump_length()
    }

    /// Arrival time of the last recorded event.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.trajectory.last_time()
    }

    /// Position after the last recorded jump.
    #[inline]
    pub fn current_position(&self) -> Position {
        self.trajectory.last_position()
    }

    /// Recorded (position, arrival time) events.
    #[inline]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Per-jump draws.
    #[inline]
    pub fn jumps(&self) -> &JumpRecords {
        &self.jumps
    }

    /// Jump lengths, one per jump.
    #[inline]
    pub fn jump_lengths(&self) -> &[f64] {
        self.jumps.lengths()
    }

    /// Jump directions in radians, one per jump.
    #[inline]
    pub fn jump_angles(&self) -> &[f64] {
        self.jumps.angles()
    }

    /// Waiting times, one per jump.
    #[inline]
    pub fn waiting_times(&self) -> &[f64] {
        self.jumps.waiting_times()
    }

    /// State of the resumable query cursor.
    #[inline]
    pub fn cursor(&self) -> QueryCursor {
        self.cursor
    }

    /// Rewinds the resumable cursor to the first event.
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Summary of the walk so far.
    pub fn summary(&self) -> WalkSummary {
        let final_position = self.current_position();
        WalkSummary {
            seed: self.seed,
            jumps: self.trajectory.jump_count(),
            horizon: self.horizon(),
            final_position,
            squared_displacement: final_position.squared_norm(),
        }
    }

    /// Extends the walk until the last arrival time is at least `horizon`.
    ///
    /// A horizon at or before the current one is a no-op. Returns the
    /// number of steps taken.
    ///
    /// # Errors
    ///
    /// - [`WalkError::InvalidHorizon`] for a NaN or infinite horizon
    /// - [`WalkError::HorizonNotReached`] once `max_steps_per_advance` steps
    ///   have been taken in this call without reaching `horizon`; the steps
    ///   already taken are kept
    pub fn advance_to(&mut self, horizon: f64) -> Result<usize, WalkError> {
        if !horizon.is_finite() {
            return Err(WalkError::InvalidHorizon { horizon });
        }

        let limit = self.config.max_steps_per_advance();
        let mut steps = 0usize;
        while self.trajectory.last_time() < horizon {
            if steps == limit {
                let reached = self.trajectory.last_time();
                warn!(
                    seed = self.seed,
                    target = horizon,
                    reached,
                    steps,
                    "step limit hit before horizon"
                );
                return Err(WalkError::HorizonNotReached {
                    target: horizon,
                    reached,
                    steps,
                });
            }
            self.step()?;
            steps += 1;
        }

        if steps > 0 {
            debug!(
                seed = self.seed,
                steps,
                horizon = self.trajectory.last_time(),
                "walk advanced"
            );
        }
        Ok(steps)
    }

    fn step(&mut self) -> Result<(), WalkError> {
        let angle = self.angles.gen_angle();
        let length = self.jump_lengths.sample()?;
        let wait = self.waiting_times.next(self.config.waiting_time_mean())?;

        let position = self.trajectory.last_position().displaced(length, angle);
        let time = self.trajectory.last_time() + wait;

        self.jumps.push(length, angle, wait);
        self.trajectory.push(position, time);
        Ok(())
    }

    /// Position active at time `t` using the given traversal mode.
    ///
    /// The active position is event `i` with `times[i] <= t < times[i + 1]`.
    /// Times before 0 give the origin; times at or past the horizon give the
    /// last known position (never extrapolated).
    #[inline]
    pub fn position_at(&mut self, t: f64, mode: QueryMode) -> Position {
        match mode {
            QueryMode::FullScan => self.scan_position(t),
            QueryMode::Resumable => self.resume_position(t),
        }
    }

    /// Full-scan lookup: correct for any query order; leaves the cursor alone.
    pub fn scan_position(&self, t: f64) -> Position {
        if t < 0.0 {
            return Position::ORIGIN;
        }
        match self.trajectory.find_active(t, 0) {
            Some(i) => self.trajectory.positions()[i],
            None => self.trajectory.last_position(),
        }
    }

    /// Resumable lookup, scanning forward from the previous hit.
    ///
    /// Only correct when successive calls use non-decreasing `t`. An
    /// earlier `t` than the cursor's event yields the last known position.
    pub fn resume_position(&mut self, t: f64) -> Position {
        if t < 0.0 {
            return Position::ORIGIN;
        }
        match self.trajectory.find_active(t, self.cursor.last_index()) {
            Some(i) => {
                self.cursor.set(i);
                self.trajectory.positions()[i]
            }
            None => self.trajectory.last_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn walk(seed: u64) -> CtrwEngine {
        CtrwEngine::new(WalkConfig::builder().seed(seed).build().unwrap()).unwrap()
    }

    #[test]
    fn test_new_walk_is_at_origin() {
        let mut w = walk(1);
        assert_eq!(w.trajectory().len(), 1);
        assert_eq!(w.horizon(), 0.0);
        assert!(w.jump_lengths().is_empty());
        assert_eq!(w.position_at(0.0, QueryMode::FullScan), Position::ORIGIN);
        assert_eq!(w.position_at(12.0, QueryMode::Resumable), Position::ORIGIN);
    }

    #[test]
    fn test_advance_reaches_horizon() {
        let mut w = walk(2);
        let steps = w.advance_to(50.0).unwrap();

        assert!(steps > 0);
        assert!(w.horizon() >= 50.0);
        // The event before the last one is still short of the horizon
        let times = w.trajectory().times();
        assert!(times[times.len() - 2] < 50.0);
        assert_eq!(w.trajectory().len(), w.jump_lengths().len() + 1);
    }

    #[test]
    fn test_advance_to_earlier_horizon_is_noop() {
        let mut w = walk(3);
        w.advance_to(20.0).unwrap();
        let before = w.trajectory().clone();

        assert_eq!(w.advance_to(10.0).unwrap(), 0);
        assert_eq!(w.advance_to(-5.0).unwrap(), 0);
        assert_eq!(w.trajectory(), &before);
    }

    #[test]
    fn test_advance_rejects_non_finite_horizon() {
        let mut w = walk(4);
        assert!(matches!(
            w.advance_to(f64::NAN),
            Err(WalkError::InvalidHorizon { .. })
        ));
        assert_eq!(
            w.advance_to(f64::INFINITY),
            Err(WalkError::InvalidHorizon {
                horizon: f64::INFINITY
            })
        );
        assert_eq!(w.trajectory().len(), 1);
    }

    #[test]
    fn test_step_limit_surfaces_horizon_not_reached() {
        let config = WalkConfig::builder()
            .seed(5)
            .max_steps_per_advance(3)
            .build()
            .unwrap();
        let mut w = CtrwEngine::new(config).unwrap();

        match w.advance_to(1_000.0) {
            Err(WalkError::HorizonNotReached {
                target,
                reached,
                steps,
            }) => {
                assert_eq!(target, 1_000.0);
                assert_eq!(steps, 3);
                assert_eq!(reached, w.horizon());
            }
            other => panic!("Expected HorizonNotReached, got {:?}", other),
        }
        // Steps taken before the limit are kept
        assert_eq!(w.trajectory().jump_count(), 3);
    }

    #[test]
    fn test_trajectory_is_cumulative_sum_of_jumps() {
        let mut w = walk(6);
        w.advance_to(30.0).unwrap();

        let mut expected = Position::ORIGIN;
        let mut t = 0.0;
        for (i, (&r, (&theta, &dt))) in w
            .jump_lengths()
            .iter()
            .zip(w.jump_angles().iter().zip(w.waiting_times()))
            .enumerate()
        {
            expected = expected.displaced(r, theta);
            t += dt;
            let (p, time) = w.trajectory().get(i + 1).unwrap();
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-12);
            assert_relative_eq!(time, t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_draws_within_support() {
        let mut w = walk(7);
        w.advance_to(200.0).unwrap();

        assert!(w.jump_angles().iter().all(|a| (0.0..TAU).contains(a)));
        assert!(w.jump_lengths().iter().all(|r| (0.0..=1.0).contains(r)));
        assert!(w.waiting_times().iter().all(|&dt| dt > 0.0));
    }

    #[test]
    fn test_same_seed_same_walk() {
        let mut a = walk(8);
        let mut b = walk(8);
        a.advance_to(40.0).unwrap();
        b.advance_to(40.0).unwrap();
        assert_eq!(a.trajectory(), b.trajectory());
        assert_eq!(a.jumps(), b.jumps());
    }

    #[test]
    fn test_split_advance_matches_single_advance() {
        let mut a = walk(9);
        let mut b = walk(9);
        a.advance_to(10.0).unwrap();
        a.advance_to(60.0).unwrap();
        b.advance_to(60.0).unwrap();
        assert_eq!(a.trajectory(), b.trajectory());
    }

    #[test]
    fn test_gaussian_squared_jumps() {
        let config = WalkConfig::builder()
            .seed(10)
            .jump_length(JumpLengthDistribution::DOCUMENTED_GAUSSIAN)
            .build()
            .unwrap();
        let mut w = CtrwEngine::new(config).unwrap();
        w.advance_to(500.0).unwrap();

        let n = w.jump_lengths().len() as f64;
        let mean = w.jump_lengths().iter().sum::<f64>() / n;
        assert!(w.jump_lengths().iter().all(|&r| r >= 0.0));
        // N(10, 1)² has mean 101 and standard deviation ≈ 20
        assert!((mean - 101.0).abs() < 5.0, "mean jump {}", mean);
    }

    #[test]
    fn test_entropy_seed_is_replayable() {
        let mut a = CtrwEngine::new(WalkConfig::default()).unwrap();
        let mut b = CtrwEngine::new(WalkConfig::default().with_seed(a.seed())).unwrap();
        a.advance_to(10.0).unwrap();
        b.advance_to(10.0).unwrap();
        assert_eq!(a.trajectory(), b.trajectory());
    }

    #[test]
    fn test_position_lookup_semantics() {
        let mut w = walk(11);
        w.advance_to(25.0).unwrap();
        let times = w.trajectory().times().to_vec();
        let positions = w.trajectory().positions().to_vec();

        for i in 0..times.len() - 1 {
            let mid = 0.5 * (times[i] + times[i + 1]);
            assert_eq!(w.scan_position(times[i]), positions[i]);
            assert_eq!(w.scan_position(mid), positions[i]);
        }
        assert_eq!(w.scan_position(-0.1), Position::ORIGIN);
        assert_eq!(w.scan_position(w.horizon()), w.current_position());
        assert_eq!(w.scan_position(1e9), w.current_position());
    }

    #[test]
    fn test_full_scan_leaves_cursor_alone() {
        let mut w = walk(12);
        w.advance_to(25.0).unwrap();
        w.position_at(20.0, QueryMode::Resumable);
        let cursor = w.cursor();
        assert!(cursor.last_index() > 0);

        w.position_at(1.0, QueryMode::FullScan);
        w.position_at(24.0, QueryMode::FullScan);
        assert_eq!(w.cursor(), cursor);
    }

    #[test]
    fn test_resumable_rewind_returns_last_position_until_reset() {
        let mut w = walk(13);
        w.advance_to(25.0).unwrap();

        w.resume_position(20.0);
        assert_eq!(w.resume_position(0.5), w.current_position());

        w.reset_cursor();
        assert_eq!(w.resume_position(0.5), w.scan_position(0.5));
    }

    #[test]
    fn test_query_before_horizon_underestimates() {
        let mut w = walk(14);
        w.advance_to(5.0).unwrap();
        // Past the simulated horizon the walk reports where it is now
        assert_eq!(w.scan_position(100.0), w.current_position());
        assert_eq!(w.resume_position(100.0), w.current_position());
    }

    #[test]
    fn test_summary() {
        let mut w = walk(15);
        w.advance_to(10.0).unwrap();
        let summary = w.summary();

        assert_eq!(summary.seed, 15);
        assert_eq!(summary.jumps, w.jump_lengths().len());
        assert_eq!(summary.horizon, w.horizon());
        assert_eq!(summary.final_position, w.current_position());
        assert_relative_eq!(
            summary.squared_displacement,
            w.current_position().squared_norm()
        );
    }
}
