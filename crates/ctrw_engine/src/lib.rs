//! # CTRW Engine (Layer 2: Walks)
//!
//! Continuous-time random walks in the plane.
//!
//! This crate provides:
//! - [`CtrwEngine`]: a single walk grown on demand to a time horizon
//! - Point-in-time position queries in full-scan or resumable mode
//! - [`Ensemble`]: many independent walks with a parallel mean squared
//!   displacement sweep
//!
//! Random variates come from `ctrw_core`; each walk owns its generators and
//! is fully determined by its seed.
//!
//! ## Usage Example
//!
//! ```rust
//! use ctrw_engine::{CtrwEngine, QueryMode, WalkConfig};
//!
//! let config = WalkConfig::builder().seed(3).build().unwrap();
//! let mut walk = CtrwEngine::new(config).unwrap();
//! walk.advance_to(100.0).unwrap();
//!
//! let p = walk.position_at(42.0, QueryMode::FullScan);
//! assert!(p.norm().is_finite());
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod engine;
pub mod ensemble;
pub mod error;
pub mod jump;
pub mod query;
pub mod trajectory;
pub mod types;

pub use config::{
    WalkConfig, WalkConfigBuilder, DEFAULT_STEP_LIMIT, DEFAULT_WAITING_TIME_MEAN, MAX_STEP_LIMIT,
};
pub use engine::{CtrwEngine, WalkSummary};
pub use ensemble::{Ensemble, MsdPoint};
pub use error::{ConfigError, WalkError};
pub use jump::{JumpLengthDistribution, JumpRecords};
pub use query::{QueryCursor, QueryMode};
pub use trajectory::Trajectory;
pub use types::Position;
