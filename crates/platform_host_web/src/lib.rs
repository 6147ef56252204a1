//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the style sink used by the
//! theme manager, the viewport query used for window placement, and the Gemini-backed chat
//! service. Every adapter compiles natively as an inert fallback so runtime crates stay testable
//! off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-service factories for runtime wiring.
pub mod adapters;
pub mod chat;
pub mod style;
pub mod viewport;

pub use adapters::{build_host_services, chat_service, host_strategy_name};
pub use chat::{gemini_request_body, parse_gemini_reply, GeminiChatService, GEMINI_ENDPOINT};
pub use style::WebStyleSink;
pub use viewport::WebViewport;
