//! General test utilities for TUI tests.
//!
//! # Usage
//!
//! ```rust
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[test]
//!     fn test_example() {
//!         let runtime = create_runtime();
//!         // Dispatch actions, build and render...
//!     }
//! }
//! ```

use std::sync::Arc;

use ratatui::buffer::Buffer;

use super::effects::DataEffects;
use super::runtime::Runtime;
use super::state::AppState;
use crate::data_provider::FixtureProvider;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Creates a runtime backed by fixture data.
///
/// Must be called inside a tokio runtime (e.g. a `#[tokio::test]`).
pub fn create_runtime() -> Runtime {
    let data_effects = Arc::new(DataEffects::new(Arc::new(FixtureProvider)));
    Runtime::new(AppState::default(), data_effects)
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
