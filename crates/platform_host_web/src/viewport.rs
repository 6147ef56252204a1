//! Browser viewport query.

use platform_host::{Viewport, ViewportProvider};

#[derive(Debug, Clone, Copy, Default)]
/// Reads `window.innerWidth`/`innerHeight`, falling back to [`Viewport::default`].
pub struct WebViewport;

impl ViewportProvider for WebViewport {
    fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return Viewport::default();
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            match (width, height) {
                (Some(width), Some(height)) => Viewport::new(width.round() as i32, height.round() as i32),
                _ => Viewport::default(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Viewport::default()
        }
    }
}
