//! Document abstraction: named containers that receive rendered HTML

use std::{
    collections::HashMap,
    sync::Mutex,
};

/// The page a controller renders into
pub trait Document: Send + Sync {
    /// Replace the inner HTML of the container with id `container`
    fn set_html(&self, container: &str, html: &str);

    /// Read an attribute of the element with id `element`
    fn attribute(&self, element: &str, name: &str) -> Option<String>;

    /// Full-page navigation to `url`
    fn navigate(&self, url: &str);
}

#[derive(Default)]
struct DocumentState {
    containers: HashMap<String, String>,
    attributes: HashMap<(String, String), String>,
    navigations: Vec<String>,
}

/// In-memory document, used by the preview binary and the tests
#[derive(Default)]
pub struct InMemoryDocument {
    state: Mutex<DocumentState>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(self, element: &str, name: &str, value: impl Into<String>) -> Self {
        self.lock()
            .attributes
            .insert((element.to_string(), name.to_string()), value.into());
        self
    }

    pub fn html(&self, container: &str) -> Option<String> {
        self.lock().containers.get(container).cloned()
    }

    /// Container ids in sorted order
    pub fn containers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lock().containers.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn navigations(&self) -> Vec<String> {
        self.lock().navigations.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Document for InMemoryDocument {
    fn set_html(&self, container: &str, html: &str) {
        self.lock()
            .containers
            .insert(container.to_string(), html.to_string());
    }

    fn attribute(&self, element: &str, name: &str) -> Option<String> {
        self.lock()
            .attributes
            .get(&(element.to_string(), name.to_string()))
            .cloned()
    }

    fn navigate(&self, url: &str) {
        tracing::info!("Navigating to {}", url);
        self.lock().navigations.push(url.to_string());
    }
}
