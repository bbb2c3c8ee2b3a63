//! Shared test infrastructure.


/// Mock implementations of predictor traits.
pub mod mocks;
