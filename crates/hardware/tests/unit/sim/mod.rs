//! Load stream and replay driver tests.



/// Synthetic load stream shapes.
pub mod workload;
