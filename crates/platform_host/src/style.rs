//! Style-variable sink contracts used by the theme manager.

use std::{cell::RefCell, collections::BTreeMap};

/// Destination for global style writes (CSS custom properties, body styles, mode class).
///
/// Writes are fire-and-forget; sinks swallow host failures.
pub trait StyleSink {
    /// Sets a property (usually a `--custom-property`) on the document root.
    fn set_root_property(&self, name: &str, value: &str);
    /// Sets an inline style property on the document body.
    fn set_body_style(&self, name: &str, value: &str);
    /// Adds `class` to the document root after removing every class in `replaces`.
    fn set_root_class(&self, class: &str, replaces: &[&str]);
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink discarding every write.
pub struct NoopStyleSink;

impl StyleSink for NoopStyleSink {
    fn set_root_property(&self, _name: &str, _value: &str) {}

    fn set_body_style(&self, _name: &str, _value: &str) {}

    fn set_root_class(&self, _class: &str, _replaces: &[&str]) {}
}

#[derive(Debug, Default)]
/// In-memory sink recording the latest value of every write.
pub struct MemoryStyleSink {
    root: RefCell<BTreeMap<String, String>>,
    body: RefCell<BTreeMap<String, String>>,
    root_classes: RefCell<Vec<String>>,
}

impl MemoryStyleSink {
    /// Returns the last value written for a root property.
    pub fn root_property(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    /// Returns the last value written for a body style property.
    pub fn body_style(&self, name: &str) -> Option<String> {
        self.body.borrow().get(name).cloned()
    }

    /// Returns the classes currently set on the root.
    pub fn root_classes(&self) -> Vec<String> {
        self.root_classes.borrow().clone()
    }
}

impl StyleSink for MemoryStyleSink {
    fn set_root_property(&self, name: &str, value: &str) {
        self.root
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_body_style(&self, name: &str, value: &str) {
        self.body
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_root_class(&self, class: &str, replaces: &[&str]) {
        let mut classes = self.root_classes.borrow_mut();
        classes.retain(|existing| !replaces.contains(&existing.as_str()) && existing != class);
        classes.push(class.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_replaces_mode_classes() {
        let sink = MemoryStyleSink::default();
        sink.set_root_class("dark", &["dark", "light"]);
        sink.set_root_class("light", &["dark", "light"]);
        assert_eq!(sink.root_classes(), vec!["light".to_string()]);
    }

    #[test]
    fn memory_sink_keeps_latest_property_value() {
        let sink = MemoryStyleSink::default();
        sink.set_root_property("--radius", "0.5rem");
        sink.set_root_property("--radius", "1rem");
        assert_eq!(sink.root_property("--radius").as_deref(), Some("1rem"));
        assert_eq!(sink.body_style("font-size"), None);
    }
}
