//! Shared test helpers

pub mod tree_fixtures;
