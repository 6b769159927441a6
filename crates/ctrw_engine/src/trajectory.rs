//! Time-indexed trajectory storage.
//!
//! # Memory Layout
//!
//! Positions and arrival times live in two parallel vectors (structure of
//! arrays) so that time searches touch only the time column. Event 0 is
//! always the origin at t = 0.

use crate::types::Position;

/// Ordered (position, arrival time) events of one walk.
///
/// Append-only: the engine only ever pushes events with a later arrival
/// time, so `times()` is strictly increasing and `positions()[i]` is the sum
/// of the first `i` jump vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    positions: Vec<Position>,
    times: Vec<f64>,
}

impl Trajectory {
    /// A trajectory holding only the origin at t = 0.
    pub(crate) fn new() -> Self {
        Self {
            positions: vec![Position::ORIGIN],
            times: vec![0.0],
        }
    }

    /// Number of events, including the initial one.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; the origin event is present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of jumps taken so far.
    #[inline]
    pub fn jump_count(&self) -> usize {
        self.len() - 1
    }

    /// Event positions, in event order.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Event arrival times, in event order.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Event `i` as (position, arrival time).
    #[inline]
    pub fn get(&self, i: usize) -> Option<(Position, f64)> {
        Some((*self.positions.get(i)?, *self.times.get(i)?))
    }

    /// Iterates over (position, arrival time) events in order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, f64)> + '_ {
        self.positions.iter().copied().zip(self.times.iter().copied())
    }

    /// Position of the most recent event.
    #[inline]
    pub fn last_position(&self) -> Position {
        self.positions.last().copied().unwrap_or(Position::ORIGIN)
    }

    /// Arrival time of the most recent event, i.e. the simulated horizon.
    #[inline]
    pub fn last_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    pub(crate) fn push(&mut self, position: Position, time: f64) {
        debug_assert!(time >= self.last_time());
        self.positions.push(position);
        self.times.push(time);
    }

    /// Index `i` with `times[i] <= t < times[i + 1]`, scanning forward from
    /// `start`. `None` if no such pair exists at or after `start`.
    pub(crate) fn find_active(&self, t: f64, start: usize) -> Option<usize> {
        let tail = self.times.get(start..).unwrap_or(&[]);
        tail.windows(2)
            .position(|w| w[0] <= t && t < w[1])
            .map(|offset| start + offset)
    }
}
