//! Qualified chain tests
//!
//! - Decomposing chains into identifier paths
//! - Full, prefix and suffix matching against dotted names
//! - Upward walks and full chain collection

mod tests_chains;
mod tests_matching;
