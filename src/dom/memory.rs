//! In-memory page model used by the host bridge and by tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ContentElement, OutputTarget};

/// A text-bearing descendant of a content element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    pub tag: String,
    pub text: String,
}

/// Snapshot of a content container: its text nodes, images and layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    nodes: Vec<ContentNode>,
    image_heights: Vec<f64>,
    height: f64,
    attributes: BTreeMap<String, String>,
}

impl MemoryElement {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    pub fn with_node(mut self, tag: &str, text: &str) -> Self {
        self.push_node(tag, text);
        self
    }

    pub fn with_image(mut self, height: f64) -> Self {
        self.image_heights.push(height);
        self
    }

    pub fn push_node(&mut self, tag: &str, text: &str) {
        self.nodes.push(ContentNode {
            tag: tag.to_ascii_lowercase(),
            text: text.to_string(),
        });
    }

    pub fn push_image(&mut self, height: f64) {
        self.image_heights.push(height);
    }

    /// Replaces the image heights, e.g. with measurements taken after load.
    pub fn set_image_heights(&mut self, heights: Vec<f64>) {
        self.image_heights = heights;
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

impl ContentElement for MemoryElement {
    fn texts_matching(&self, tags: &[String]) -> Vec<String> {
        self.nodes
            .iter()
            .filter(|n| tags.iter().any(|t| t.trim().eq_ignore_ascii_case(&n.tag)))
            .map(|n| n.text.clone())
            .collect()
    }

    fn image_heights(&self) -> Vec<f64> {
        self.image_heights.clone()
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// An element outside the content that can receive status text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub inner_html: String,
}

impl OutputElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            inner_html: String::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Matches a selector list such as `#read_timer, span.timer`.
    pub fn matches(&self, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .any(|s| self.matches_compound(s))
    }

    /// Matches one compound selector: an optional tag followed by `#id` and
    /// `.class` parts.
    fn matches_compound(&self, selector: &str) -> bool {
        let tag_end = selector.find(['#', '.']).unwrap_or(selector.len());
        let tag = &selector[..tag_end];
        if !tag.is_empty() && tag != "*" && !tag.eq_ignore_ascii_case(&self.tag) {
            return false;
        }

        let mut rest = &selector[tag_end..];
        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return false;
            }
            let ok = match marker {
                b'#' => self.id.as_deref() == Some(name),
                _ => self.classes.iter().any(|c| c == name),
            };
            if !ok {
                return false;
            }
            rest = &body[end..];
        }
        true
    }
}

/// The page around the content: the set of output elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocument {
    outputs: Vec<OutputElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_output(&mut self, element: OutputElement) {
        self.outputs.push(element);
    }

    pub fn outputs(&self) -> &[OutputElement] {
        &self.outputs
    }

    /// Inner content of every element matching `selector`, in document order.
    pub fn inner_html(&self, selector: &str) -> Vec<&str> {
        self.outputs
            .iter()
            .filter(|e| e.matches(selector))
            .map(|e| e.inner_html.as_str())
            .collect()
    }
}

impl OutputTarget for MemoryDocument {
    fn count_matching(&self, selector: &str) -> usize {
        self.outputs.iter().filter(|e| e.matches(selector)).count()
    }

    fn set_inner_html(&mut self, selector: &str, html: &str) {
        for element in self.outputs.iter_mut().filter(|e| e.matches(selector)) {
            element.inner_html = html.to_string();
        }
    }
}
