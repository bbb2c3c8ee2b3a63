//! Address Prediction Table engine tests.
