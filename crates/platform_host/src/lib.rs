//! Typed host-domain contracts shared by the desktop runtime, managed apps and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes time and entropy
//! helpers, the AI chat service contract, the style-variable sink used by the theme manager, and
//! viewport queries. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chat;
pub mod entropy;
pub mod host;
pub mod style;
pub mod time;
pub mod viewport;

pub use chat::{
    new_chat_reply, send_chat_message, ChatError, ChatFuture, ChatOutcome, ChatReply,
    ChatService, NoopChatService, SimulatedChatService, CHAT_EMPTY_REPLY_MESSAGE,
    CHAT_FAILURE_MESSAGE,
};
pub use entropy::{signed_jitter, unit_random};
pub use host::{HostServices, HostStrategy};
pub use style::{MemoryStyleSink, NoopStyleSink, StyleSink};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
pub use viewport::{FixedViewport, Viewport, ViewportProvider};
