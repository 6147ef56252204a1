//! Host-bundle model for browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    chat::{ChatService, SimulatedChatService},
    style::{NoopStyleSink, StyleSink},
    viewport::{FixedViewport, ViewportProvider},
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Off-browser composition with in-memory adapters (tests, native tooling).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates decoupled from browser details.
#[derive(Clone)]
pub struct HostServices {
    /// AI chat backend.
    pub chat: Rc<dyn ChatService>,
    /// Global style-variable sink used by the theme manager.
    pub style: Rc<dyn StyleSink>,
    /// Viewport size query.
    pub viewport: Rc<dyn ViewportProvider>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Headless bundle: simulated chat, discarded style writes, fixed 1280x800 viewport.
    pub fn headless() -> Self {
        Self {
            chat: Rc::new(SimulatedChatService),
            style: Rc::new(NoopStyleSink),
            viewport: Rc::new(FixedViewport::default()),
            host_strategy: HostStrategy::Headless,
        }
    }
}
