//! Viewport queries used for window placement and maximized layout.

/// Size of the visible desktop area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Viewport {
    /// Creates a viewport size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

/// Host service reporting the current viewport size.
pub trait ViewportProvider {
    /// Returns the current viewport.
    fn viewport(&self) -> Viewport;
}

#[derive(Debug, Clone, Copy, Default)]
/// Viewport provider returning a fixed size, used off-browser and in tests.
pub struct FixedViewport(pub Viewport);

impl ViewportProvider for FixedViewport {
    fn viewport(&self) -> Viewport {
        self.0
    }
}
