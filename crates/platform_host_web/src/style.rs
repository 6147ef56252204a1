//! Document-backed [`StyleSink`] used by the theme manager in the browser.

use platform_host::StyleSink;

#[derive(Debug, Clone, Copy, Default)]
/// Writes CSS custom properties and classes onto `document.documentElement` and inline styles
/// onto `document.body`.
pub struct WebStyleSink;

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

impl StyleSink for WebStyleSink {
    fn set_root_property(&self, name: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let Some(root) = document().and_then(|doc| doc.document_element()) else {
                return;
            };
            let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            if let Err(err) = root.style().set_property(name, value) {
                leptos::logging::warn!("theme: failed to set root property {name}: {err:?}");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value);
        }
    }

    fn set_body_style(&self, name: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(body) = document().and_then(|doc| doc.body()) else {
                return;
            };
            if let Err(err) = body.style().set_property(name, value) {
                leptos::logging::warn!("theme: failed to set body style {name}: {err:?}");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value);
        }
    }

    fn set_root_class(&self, class: &str, replaces: &[&str]) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = document().and_then(|doc| doc.document_element()) else {
                return;
            };
            let classes = root.class_list();
            for old in replaces {
                let _ = classes.remove_1(old);
            }
            if let Err(err) = classes.add_1(class) {
                leptos::logging::warn!("theme: failed to add root class {class}: {err:?}");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (class, replaces);
        }
    }
}
