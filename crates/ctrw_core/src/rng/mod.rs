//! # Uniform Random Source
//!
//! Every generator in this crate owns its own uniform source instead of
//! drawing from a process-wide generator. This keeps walks independent of
//! each other and makes every simulation reproducible from a seed.
//!
//! ## Module Structure
//!
//! - `prng`: Seeded PRNG wrapper with seed tracking and child derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use ctrw_core::rng::WalkRng;
//!
//! let mut rng = WalkRng::from_seed(12345);
//!
//! // Uniform in [0, 1)
//! let u = rng.gen_uniform();
//!
//! // Uniform in the open interval (0, 1), safe to feed into ln()
//! let w = rng.gen_open01();
//! assert!(w > 0.0 && w < 1.0);
//!
//! // Independent child stream for another generator
//! let child = rng.split();
//! assert_ne!(child.seed(), rng.seed());
//! # let _ = u;
//! ```

mod prng;

pub use prng::WalkRng;
