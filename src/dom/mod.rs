//! Host page abstraction.
//!
//! The estimator only reads and writes the page through these traits, so a
//! browser binding, a webview bridge and the in-memory model in [`memory`]
//! are interchangeable.

pub mod html;
pub mod memory;

/// The container element a read timer is attached to.
pub trait ContentElement {
    /// Visible text of every descendant whose tag is in `tags`, in document order.
    fn texts_matching(&self, tags: &[String]) -> Vec<String>;
    /// Rendered height of every image descendant.
    fn image_heights(&self) -> Vec<f64>;
    /// Rendered height of the element itself.
    fn height(&self) -> f64;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Document-level elements addressed by CSS selector.
pub trait OutputTarget {
    fn count_matching(&self, selector: &str) -> usize;
    /// Replaces the inner content of every element matching `selector`.
    fn set_inner_html(&mut self, selector: &str, html: &str);
}
