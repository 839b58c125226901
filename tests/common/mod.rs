//! Common test utilities for integration tests

use tempfile::TempDir;
use todo_cli::TodoStore;

/// Create a test store backed by a fresh temporary file
///
/// The TempDir must be kept alive for the duration of the test.
pub fn get_test_store() -> (TodoStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = TodoStore::new(dir.path().join("todo.json"));
    (store, dir)
}
