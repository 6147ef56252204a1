//! Gemini-backed [`ChatService`].
//!
//! The request is a single `generateContent` call with one user part; the reply is the first
//! candidate's first text part. Off-browser builds report [`ChatError::Unavailable`].

use platform_host::{new_chat_reply, ChatError, ChatFuture, ChatReply, ChatService, CHAT_EMPTY_REPLY_MESSAGE};
use serde::{Deserialize, Serialize};

/// `generateContent` endpoint without the `key` query parameter.
pub const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Serializes the request body for `text`.
pub fn gemini_request_body(text: &str) -> Result<String, ChatError> {
    let body = GenerateRequest {
        contents: [RequestContent {
            parts: [RequestPart { text }],
        }],
    };
    serde_json::to_string(&body).map_err(|err| ChatError::Decode(err.to_string()))
}

/// Extracts the reply text from a `generateContent` response body.
///
/// A response without candidate text yields [`CHAT_EMPTY_REPLY_MESSAGE`].
pub fn parse_gemini_reply(body: &str) -> Result<String, ChatError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|err| ChatError::Decode(err.to_string()))?;
    if let Some(error) = response.error {
        return Err(ChatError::Api(error.message));
    }
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text);
    Ok(text.unwrap_or_else(|| CHAT_EMPTY_REPLY_MESSAGE.to_string()))
}

/// Error for a non-OK HTTP response: the body's `error.message` when present, else the status.
pub fn failed_response_error(status: u16, body: &str) -> ChatError {
    serde_json::from_str::<GenerateResponse>(body)
        .ok()
        .and_then(|response| response.error)
        .map(|error| error.message)
        .filter(|message| !message.is_empty())
        .map_or_else(|| ChatError::Api(format!("HTTP {status}")), ChatError::Api)
}

#[derive(Debug, Clone)]
/// Chat service calling the Gemini REST API with `fetch`.
pub struct GeminiChatService {
    api_key: String,
}

impl GeminiChatService {
    /// Creates a service using `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Returns the full request URL including the key.
    pub fn request_url(&self) -> String {
        format!("{GEMINI_ENDPOINT}?key={}", self.api_key)
    }

    #[cfg(target_arch = "wasm32")]
    async fn post(&self, body: String) -> Result<String, ChatError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or(ChatError::Unavailable)?;
        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));
        let request = web_sys::Request::new_with_str_and_init(&self.request_url(), &init)
            .map_err(|err| ChatError::Transport(format!("{err:?}")))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| ChatError::Transport(format!("{err:?}")))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| ChatError::Transport(format!("{err:?}")))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|err| ChatError::Transport(format!("{err:?}")))?;
        let text_promise = response
            .text()
            .map_err(|err| ChatError::Decode(format!("{err:?}")))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|err| ChatError::Decode(format!("{err:?}")))?;
        let text = text
            .as_string()
            .ok_or_else(|| ChatError::Decode("response body was not text".to_string()))?;
        if !response.ok() {
            return Err(failed_response_error(response.status(), &text));
        }
        Ok(text)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post(&self, _body: String) -> Result<String, ChatError> {
        Err(ChatError::Unavailable)
    }
}

impl ChatService for GeminiChatService {
    fn send<'a>(&'a self, text: &'a str) -> ChatFuture<'a, Result<ChatReply, ChatError>> {
        Box::pin(async move {
            let body = gemini_request_body(text)?;
            let raw = self.post(body).await?;
            parse_gemini_reply(&raw).map(new_chat_reply)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_body_wraps_text_in_single_part() {
        assert_eq!(
            gemini_request_body("hello").unwrap(),
            r#"{"contents":[{"parts":[{"text":"hello"}]}]}"#
        );
    }

    #[test]
    fn reply_is_first_candidate_first_part() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hi there"},{"text":"ignored"}]}}]}"#;
        assert_eq!(parse_gemini_reply(body).unwrap(), "hi there");
    }

    #[test]
    fn missing_candidates_fall_back_to_apology() {
        assert_eq!(parse_gemini_reply("{}").unwrap(), CHAT_EMPTY_REPLY_MESSAGE);
        assert_eq!(
            parse_gemini_reply(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap(),
            CHAT_EMPTY_REPLY_MESSAGE
        );
    }

    #[test]
    fn api_errors_and_garbage_are_reported() {
        assert_eq!(
            parse_gemini_reply(r#"{"error":{"message":"API key not valid"}}"#),
            Err(ChatError::Api("API key not valid".to_string()))
        );
        assert!(matches!(parse_gemini_reply("<html>"), Err(ChatError::Decode(_))));
    }

    #[test]
    fn failed_responses_surface_the_api_message() {
        assert_eq!(
            failed_response_error(400, r#"{"error":{"code":400,"message":"API key not valid"}}"#),
            ChatError::Api("API key not valid".to_string())
        );
        assert_eq!(
            failed_response_error(503, "Service Unavailable"),
            ChatError::Api("HTTP 503".to_string())
        );
        assert_eq!(
            failed_response_error(500, r#"{"error":{}}"#),
            ChatError::Api("HTTP 500".to_string())
        );
    }

    #[test]
    fn request_url_carries_key() {
        let service = GeminiChatService::new("abc");
        assert_eq!(service.request_url(), format!("{GEMINI_ENDPOINT}?key=abc"));
    }

    #[test]
    fn native_builds_report_unavailable() {
        let service = GeminiChatService::new("abc");
        assert_eq!(block_on(service.send("hi")), Err(ChatError::Unavailable));
    }
}
