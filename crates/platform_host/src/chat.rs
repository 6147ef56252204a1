//! AI chat host-service contracts.
//!
//! A [`ChatService`] performs one request/response exchange. Callers go through
//! [`send_chat_message`], which never fails: service errors are turned into a
//! [`ChatOutcome::Failed`] carrying a user-visible apology alongside the underlying error.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::unix_time_ms_now;

/// Object-safe boxed future used by [`ChatService`].
pub type ChatFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Reply text shown when the chat backend fails.
pub const CHAT_FAILURE_MESSAGE: &str = "抱歉，连接大模型时遇到问题。请检查网络或稍后再试。";

/// Reply text used when the backend answers without any candidate text.
pub const CHAT_EMPTY_REPLY_MESSAGE: &str = "I'm sorry, I couldn't generate a response for that.";

/// One assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Unique message id.
    pub id: String,
    /// Message text.
    pub content: String,
    /// Creation time in unix milliseconds.
    pub timestamp_ms: u64,
}

/// Builds a reply with a fresh id and the current timestamp.
pub fn new_chat_reply(content: impl Into<String>) -> ChatReply {
    ChatReply {
        id: uuid::Uuid::new_v4().to_string(),
        content: content.into(),
        timestamp_ms: unix_time_ms_now(),
    }
}

/// Failures reported by a [`ChatService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The request never produced an HTTP response.
    #[error("chat transport failed: {0}")]
    Transport(String),
    /// The backend answered with an error payload.
    #[error("chat backend rejected the request: {0}")]
    Api(String),
    /// The response body could not be decoded.
    #[error("chat response could not be decoded: {0}")]
    Decode(String),
    /// No chat backend is configured for this host.
    #[error("chat service is unavailable on this host")]
    Unavailable,
}

/// Host service producing assistant replies.
pub trait ChatService {
    /// Sends `text` and resolves to the assistant reply.
    fn send<'a>(&'a self, text: &'a str) -> ChatFuture<'a, Result<ChatReply, ChatError>>;
}

/// Result of [`send_chat_message`]; both branches carry a renderable reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The backend answered.
    Replied(ChatReply),
    /// The backend failed; `reply` holds the apology bubble.
    Failed {
        /// Fallback message to render.
        reply: ChatReply,
        /// Underlying failure.
        error: ChatError,
    },
}

impl ChatOutcome {
    /// Returns the message to render for either branch.
    pub fn reply(&self) -> &ChatReply {
        match self {
            Self::Replied(reply) | Self::Failed { reply, .. } => reply,
        }
    }

    /// Returns the failure, if any.
    pub fn error(&self) -> Option<&ChatError> {
        match self {
            Self::Replied(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

/// Sends `text` through `service`, mapping failures onto the fallback reply.
pub async fn send_chat_message(service: &dyn ChatService, text: &str) -> ChatOutcome {
    match service.send(text).await {
        Ok(mut reply) => {
            let trimmed = reply.content.trim();
            reply.content = if trimmed.is_empty() {
                CHAT_EMPTY_REPLY_MESSAGE.to_string()
            } else {
                trimmed.to_string()
            };
            ChatOutcome::Replied(reply)
        }
        Err(error) => ChatOutcome::Failed {
            reply: new_chat_reply(CHAT_FAILURE_MESSAGE),
            error,
        },
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Offline chat service echoing the prompt back in a canned sentence.
pub struct SimulatedChatService;

impl ChatService for SimulatedChatService {
    fn send<'a>(&'a self, text: &'a str) -> ChatFuture<'a, Result<ChatReply, ChatError>> {
        Box::pin(async move {
            Ok(new_chat_reply(format!(
                "I received your message: \"{text}\". This is a simulated AI response."
            )))
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Chat service for hosts without a backend; every request fails with [`ChatError::Unavailable`].
pub struct NoopChatService;

impl ChatService for NoopChatService {
    fn send<'a>(&'a self, _text: &'a str) -> ChatFuture<'a, Result<ChatReply, ChatError>> {
        Box::pin(async { Err(ChatError::Unavailable) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedReplyService(&'static str);

    impl ChatService for FixedReplyService {
        fn send<'a>(&'a self, _text: &'a str) -> ChatFuture<'a, Result<ChatReply, ChatError>> {
            Box::pin(async move { Ok(new_chat_reply(self.0)) })
        }
    }

    #[test]
    fn simulated_service_echoes_prompt() {
        let outcome = block_on(send_chat_message(&SimulatedChatService, "hi"));
        assert_eq!(outcome.error(), None);
        assert_eq!(
            outcome.reply().content,
            "I received your message: \"hi\". This is a simulated AI response."
        );
    }

    #[test]
    fn failures_become_fallback_reply_with_error_kept() {
        let outcome = block_on(send_chat_message(&NoopChatService, "hello"));
        assert_eq!(outcome.reply().content, CHAT_FAILURE_MESSAGE);
        assert_eq!(outcome.error(), Some(&ChatError::Unavailable));
    }

    #[test]
    fn replies_are_trimmed_and_blank_replies_replaced() {
        let outcome = block_on(send_chat_message(&FixedReplyService("  answer \n"), "q"));
        assert_eq!(outcome.reply().content, "answer");

        let outcome = block_on(send_chat_message(&FixedReplyService("   "), "q"));
        assert_eq!(outcome.reply().content, CHAT_EMPTY_REPLY_MESSAGE);
    }

    #[test]
    fn reply_ids_are_unique() {
        let a = new_chat_reply("a");
        let b = new_chat_reply("b");
        assert_ne!(a.id, b.id);
    }
}
