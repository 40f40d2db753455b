//! Platform detection and task spawning helpers.

use std::future::Future;

use dioxus::prelude::{spawn, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }
}

/// Spawns onto the current Dioxus scope; keep the [`Task`] to cancel it later.
pub fn spawn_future(future: impl Future<Output = ()> + 'static) -> Task {
    spawn(future)
}
