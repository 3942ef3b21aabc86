// src/state.rs
use std::sync::Arc;

use crate::services::catalog;
use crate::services::picker::{RandomPicker, ResponsePicker};

pub type SharedState = Arc<AppState>;

/// Read-only application state, built once at startup. Nothing in here is
/// mutated during request handling.
pub struct AppState {
    pub catalog: &'static [&'static str],
    pub picker: Box<dyn ResponsePicker>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomPicker))
    }

    /// Substitute the selection strategy, mainly for deterministic tests.
    pub fn with_picker(picker: Box<dyn ResponsePicker>) -> Self {
        Self {
            catalog: catalog::RESPONSES,
            picker,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
