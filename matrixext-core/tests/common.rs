use matrixext_core::{Element, Matrix};

/// Installs `env_logger` once so `RUST_LOG=trace cargo test` shows the
/// crate's log output.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper function to create a matrix from nested rows for testing.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn create_test_matrix<T: Element>(rows: Vec<Vec<T>>) -> Matrix<T> {
    Matrix::from_rows(rows).expect("Test matrix creation failed")
}
