use std::rc::Rc;

use platform_host::{ChatService, HostServices, HostStrategy, SimulatedChatService};

use crate::{GeminiChatService, WebStyleSink, WebViewport};

/// Compile-time Gemini API key; the simulated chat service is used when unset or empty.
const GEMINI_API_KEY: Option<&str> = option_env!("DESKTOP_GEMINI_API_KEY");

/// Returns the host strategy name for diagnostics.
pub fn host_strategy_name() -> &'static str {
    HostStrategy::Browser.as_str()
}

/// Selects the chat backend for a compile-time API key.
pub fn chat_service(api_key: Option<&str>) -> Rc<dyn ChatService> {
    match api_key.map(str::trim).filter(|key| !key.is_empty()) {
        Some(key) => Rc::new(GeminiChatService::new(key)),
        None => Rc::new(SimulatedChatService),
    }
}

/// Builds the browser host-service bundle consumed by `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    HostServices {
        chat: chat_service(GEMINI_API_KEY),
        style: Rc::new(WebStyleSink),
        viewport: Rc::new(WebViewport),
        host_strategy: HostStrategy::Browser,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::ChatError;

    use super::*;

    #[test]
    fn blank_key_selects_simulated_chat() {
        let service = chat_service(Some("  "));
        let reply = block_on(service.send("ping")).unwrap();
        assert!(reply.content.contains("ping"));
    }

    #[test]
    fn present_key_selects_gemini_chat() {
        let service = chat_service(Some("key"));
        assert_eq!(block_on(service.send("ping")), Err(ChatError::Unavailable));
    }

    #[test]
    fn browser_bundle_reports_browser_strategy() {
        assert_eq!(build_host_services().host_strategy, HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
    }
}
