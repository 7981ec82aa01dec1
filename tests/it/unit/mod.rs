//! Unit tests for nodeboard.

mod settings_tests;
mod surface_tests;
