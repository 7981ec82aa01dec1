//! Integration tests for nodeboard.
//!
//! These tests drive complete gestures through the dispatcher, the
//! controllers and a `MemorySurface`.

mod drag_workflow_tests;
mod window_select_tests;
