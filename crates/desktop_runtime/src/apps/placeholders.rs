//! Built-in lightweight apps that live inside the runtime crate: Paint, Files and the browser.

use desktop_app_contract::{translations, AppMountContext};
use leptos::*;

/// Mounts the Paint app.
pub(super) fn mount_paint_app(context: AppMountContext) -> View {
    view! { <PaintApp context=context /> }.into_view()
}

/// Mounts the Files app.
pub(super) fn mount_files_app(context: AppMountContext) -> View {
    view! { <FilesApp context=context /> }.into_view()
}

/// Mounts the browser app.
pub(super) fn mount_browser_app(context: AppMountContext) -> View {
    view! { <BrowserApp context=context /> }.into_view()
}

const DEFAULT_BROWSER_URL: &str = "https://www.apple.com";

/// Prefixes `https://` unless the input already starts with `http`.
pub fn normalize_browser_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFileKind {
    Folder,
    Text,
    Image,
    Music,
    Video,
}

impl MockFileKind {
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Text => "file-text",
            Self::Image => "image",
            Self::Music => "music",
            Self::Video => "film",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFile {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: MockFileKind,
    pub size: Option<&'static str>,
    pub content: Option<&'static str>,
}

/// Static listing shown by the Files app.
pub fn mock_files() -> Vec<MockFile> {
    vec![
        MockFile {
            id: "1",
            name: "Documents",
            kind: MockFileKind::Folder,
            size: None,
            content: None,
        },
        MockFile {
            id: "2",
            name: "Pictures",
            kind: MockFileKind::Folder,
            size: None,
            content: None,
        },
        MockFile {
            id: "3",
            name: "Music",
            kind: MockFileKind::Folder,
            size: None,
            content: None,
        },
        MockFile {
            id: "4",
            name: "Project_Design.txt",
            kind: MockFileKind::Text,
            size: Some("1.2 KB"),
            content: Some(
                "This is a sample project design document.\n\nKey features:\n- Modern UI\n- Dynamic Themes\n- High Performance\n- Responsive Layout",
            ),
        },
        MockFile {
            id: "5",
            name: "Wallpaper.jpg",
            kind: MockFileKind::Image,
            size: Some("3.5 MB"),
            content: None,
        },
        MockFile {
            id: "6",
            name: "Meeting_Notes.txt",
            kind: MockFileKind::Text,
            size: Some("856 B"),
            content: Some(
                "Agenda for next week:\n1. Update primary colors\n2. Fix border radius logic\n3. Add file preview feature",
            ),
        },
        MockFile {
            id: "7",
            name: "Intro_Video.mp4",
            kind: MockFileKind::Video,
            size: Some("42 MB"),
            content: None,
        },
        MockFile {
            id: "8",
            name: "Theme_Song.mp3",
            kind: MockFileKind::Music,
            size: Some("4.8 MB"),
            content: None,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaintTool {
    Pencil,
    Eraser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PaintState {
    tool: PaintTool,
    color: String,
    brush_size: u8,
    drawing: bool,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            tool: PaintTool::Pencil,
            color: "#ffffff".to_string(),
            brush_size: 5,
            drawing: false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn canvas_context(
    canvas: &web_sys::HtmlCanvasElement,
) -> Option<web_sys::CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;

    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()
}

#[component]
fn PaintApp(context: AppMountContext) -> impl IntoView {
    let lifecycle = context.lifecycle;
    let state = create_rw_signal(PaintState::default());
    let canvas_ref = create_node_ref::<html::Canvas>();

    let begin_stroke = move |ev: web_sys::PointerEvent| {
        state.update(|s| s.drawing = true);
        #[cfg(target_arch = "wasm32")]
        if let Some(canvas) = canvas_ref.get_untracked() {
            let bounds = canvas.get_bounding_client_rect();
            if let Some(ctx) = canvas_context(&canvas) {
                ctx.set_line_cap("round");
                ctx.set_line_join("round");
                ctx.begin_path();
                ctx.move_to(
                    f64::from(ev.client_x()) - bounds.left(),
                    f64::from(ev.client_y()) - bounds.top(),
                );
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (ev, canvas_ref);
    };

    let continue_stroke = move |ev: web_sys::PointerEvent| {
        let current = state.get_untracked();
        if !current.drawing {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        if let Some(canvas) = canvas_ref.get_untracked() {
            let bounds = canvas.get_bounding_client_rect();
            if let Some(ctx) = canvas_context(&canvas) {
                ctx.set_line_width(f64::from(current.brush_size));
                match current.tool {
                    PaintTool::Eraser => {
                        let _ = ctx.set_global_composite_operation("destination-out");
                    }
                    PaintTool::Pencil => {
                        let _ = ctx.set_global_composite_operation("source-over");
                        ctx.set_stroke_style_str(&current.color);
                    }
                }
                ctx.line_to(
                    f64::from(ev.client_x()) - bounds.left(),
                    f64::from(ev.client_y()) - bounds.top(),
                );
                ctx.stroke();
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ev;
    };

    let end_stroke = move |_| state.update(|s| s.drawing = false);

    let clear = move |_| {
        #[cfg(target_arch = "wasm32")]
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Some(ctx) = canvas_context(&canvas) {
                ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
            }
        }
    };

    view! {
        <div class="app app-paint" data-lifecycle=move || lifecycle.get().token()>
            <div class="app-toolbar" role="group" aria-label="Paint tools">
                <button
                    type="button"
                    class:active=move || state.get().tool == PaintTool::Pencil
                    on:click=move |_| state.update(|s| s.tool = PaintTool::Pencil)
                >
                    "Pencil"
                </button>
                <button
                    type="button"
                    class:active=move || state.get().tool == PaintTool::Eraser
                    on:click=move |_| state.update(|s| s.tool = PaintTool::Eraser)
                >
                    "Eraser"
                </button>
                <input
                    type="color"
                    prop:value=move || state.get().color
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.color = value);
                    }
                />
                <input
                    type="range"
                    min="1"
                    max="50"
                    prop:value=move || state.get().brush_size.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse::<u8>().unwrap_or(5).clamp(1, 50);
                        state.update(|s| s.brush_size = value);
                    }
                />
                <button type="button" on:click=clear>"Clear"</button>
            </div>
            <div class="app-paint-surface">
                <canvas
                    node_ref=canvas_ref
                    width="1200"
                    height="800"
                    on:pointerdown=begin_stroke
                    on:pointermove=continue_stroke
                    on:pointerup=end_stroke
                    on:pointerleave=end_stroke
                />
            </div>
        </div>
    }
}

#[component]
fn FilesApp(context: AppMountContext) -> impl IntoView {
    let locale = context.locale;
    let t = move || translations(locale.get());
    let grid = create_rw_signal(true);
    let selected = create_rw_signal(None::<MockFile>);

    view! {
        <div class="app app-files">
            <aside class="app-files-sidebar">
                <p class="app-files-heading">{move || t().files.sidebar.favorites}</p>
                <button type="button">{move || t().files.sidebar.airdrop}</button>
                <button type="button">{move || t().files.sidebar.applications}</button>
                <button type="button">{move || t().files.sidebar.documents}</button>
            </aside>
            <section class="app-files-main">
                <header class="app-files-header">
                    <h2>{move || t().files.all_files}</h2>
                    <div role="group">
                        <button type="button" class:active=move || grid.get() on:click=move |_| grid.set(true)>
                            "Grid"
                        </button>
                        <button type="button" class:active=move || !grid.get() on:click=move |_| grid.set(false)>
                            "List"
                        </button>
                    </div>
                </header>
                <div class=move || if grid.get() { "app-files-grid" } else { "app-files-list" }>
                    <For each=mock_files key=|file| file.id let:file>
                        {{
                            let name = file.name;
                            let icon = file.kind.icon();
                            let size = file.size.unwrap_or("--");
                            let is_selected = {
                                let id = file.id;
                                move || selected.get().is_some_and(|f| f.id == id)
                            };
                            let file = file.clone();
                            view! {
                                <button
                                    type="button"
                                    class="app-files-item"
                                    class:selected=is_selected
                                    on:click=move |_| selected.set(Some(file.clone()))
                                >
                                    <span class="app-files-icon" data-icon=icon aria-hidden="true"></span>
                                    <span>{name}</span>
                                    <span class="app-files-size">{size}</span>
                                </button>
                            }
                        }}
                    </For>
                </div>
            </section>
            <Show when=move || selected.get().is_some() fallback=|| ()>
                {move || {
                    selected.get().map(|file| {
                        let body = file.content.unwrap_or(t().files.preview.no_preview);
                        view! {
                            <aside class="app-files-preview">
                                <header>
                                    <strong>{file.name}</strong>
                                    <button type="button" on:click=move |_| selected.set(None)>"×"</button>
                                </header>
                                <pre>{body}</pre>
                                <dl>
                                    <dt>{t().files.preview.created}</dt>
                                    <dd>"2024-01-01"</dd>
                                    <dt>{t().files.preview.modified}</dt>
                                    <dd>"2024-01-02"</dd>
                                </dl>
                                <button type="button">{t().files.preview.open}</button>
                            </aside>
                        }
                    })
                }}
            </Show>
        </div>
    }
}

#[component]
fn BrowserApp(context: AppMountContext) -> impl IntoView {
    let lifecycle = context.lifecycle;
    let url = create_rw_signal(DEFAULT_BROWSER_URL.to_string());
    let input = create_rw_signal("apple.com".to_string());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        url.set(normalize_browser_url(&input.get_untracked()));
    };

    view! {
        <div class="app app-browser" data-lifecycle=move || lifecycle.get().token()>
            <form class="app-browser-toolbar" on:submit=submit>
                <input
                    type="text"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </form>
            <iframe
                class="app-browser-view"
                src=move || url.get()
                title="Browser View"
                sandbox="allow-scripts allow-same-origin allow-forms allow-popups allow-modals allow-presentation"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_hosts_get_https_prefix() {
        assert_eq!(normalize_browser_url("apple.com"), "https://apple.com");
        assert_eq!(normalize_browser_url(" example.org "), "https://example.org");
    }

    #[test]
    fn existing_schemes_are_kept() {
        assert_eq!(normalize_browser_url("http://a.test"), "http://a.test");
        assert_eq!(normalize_browser_url("https://a.test"), "https://a.test");
    }

    #[test]
    fn mock_listing_has_previewable_text_files() {
        let files = mock_files();
        assert_eq!(files.len(), 8);
        let notes = files.iter().find(|f| f.name == "Meeting_Notes.txt").unwrap();
        assert_eq!(notes.kind, MockFileKind::Text);
        assert!(notes.content.unwrap().starts_with("Agenda"));
    }
}
