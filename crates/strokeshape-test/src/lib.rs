//! strokeshape-test - Regression test framework for strokeshape
//!
//! Provides a golden-file regression framework with three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use strokeshape_test::RegParams;
//!
//! let mut rp = RegParams::new("classify");
//! rp.compare_values(900.0, score as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//!
//! The [`strokes`] module generates synthetic user strokes for
//! end-to-end classifier tests.

mod error;
mod params;
pub mod strokes;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a mask from the test data directory
pub fn load_test_mask(name: &str) -> TestResult<strokeshape_core::Mask> {
    let path = test_data_path(name);
    strokeshape_io::read_mask_file(&path).map_err(|e| TestError::MaskRead {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // strokeshape-test is at crates/strokeshape-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
