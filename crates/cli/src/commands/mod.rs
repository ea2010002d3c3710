//! CLI command implementations.

pub mod countdown;
pub mod seed;
