//! Shared objectives for the end-to-end line search scenarios.

pub mod test_objectives;
