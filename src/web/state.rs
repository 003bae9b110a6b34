//! Shared state handed to every handler.

use std::sync::Arc;

use crate::dispatcher::Dispatcher;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}
