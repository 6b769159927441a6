//! Random-variate generators.
//!
//! Both generators own an injected [`WalkRng`](crate::rng::WalkRng), so
//! independent instances never share state:
//!
//! | Generator | Method | Cross-call state |
//! |-----------|--------|------------------|
//! | [`GaussianVariate`] | Polar rejection | Cached spare value |
//! | [`ExponentialVariate`] | Inverse CDF | None |
//!
//! Neither type is internally synchronised; callers sharing one across
//! threads must provide their own locking.

mod error;
mod exponential;
mod gaussian;

pub use error::VariateError;
pub use exponential::ExponentialVariate;
pub use gaussian::GaussianVariate;
