//! quadsplit-test - Regression test framework for quadsplit
//!
//! Regression tests record a sequence of numbered checks and report all
//! failures at the end instead of stopping at the first one. Two modes
//! are supported:
//!
//! - **Compare**: Run every check (default)
//! - **Display**: Run every check and also write text dumps of the
//!   structures under test to `tests/regout` for inspection
//!
//! # Usage
//!
//! ```ignore
//! use quadsplit_test::RegParams;
//!
//! let mut rp = RegParams::new("point_tree");
//! rp.compare_values(5.0, tree.node_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // quadsplit-test is at crates/quadsplit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
