//! In-memory `DomHost` used to drive layout helpers without a browser.
#![allow(dead_code)]
//!
//! Heights follow a simple model: either fixed, or proportional to the effective
//! font size (inline `font-size` if set, otherwise the base size). That is enough
//! to reproduce both a shrinkable caption and content that never gets smaller.

use std::collections::HashMap;

use crate::dom::{parse_leading_float, DomHost};
use crate::format::css_number;

/// Index of a node in a `MemoryDocument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// How a node's rendered height is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightModel {
    /// Height does not depend on font size (e.g. an image or a fixed-height box).
    Fixed(f64),
    /// Height = `lines × line_height × font size`.
    FontScaled { line_height: f64, lines: u32 },
}

#[derive(Debug, Clone)]
struct MemoryNode {
    id: Option<String>,
    children: Vec<NodeId>,
    height: HeightModel,
    margin_top: String,
    margin_bottom: String,
    base_font_px: f64,
    inline_styles: HashMap<String, String>,
}

impl MemoryNode {
    fn new(id: Option<String>, height: HeightModel) -> Self {
        Self {
            id,
            children: Vec::new(),
            height,
            margin_top: "0px".to_string(),
            margin_bottom: "0px".to_string(),
            base_font_px: 16.0,
            inline_styles: HashMap::new(),
        }
    }

    fn font_px(&self) -> f64 {
        self.inline_styles
            .get("font-size")
            .and_then(|v| parse_leading_float(v))
            .unwrap_or(self.base_font_px)
    }
}

/// A flat arena of nodes rooted at a body element.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
    ids: HashMap<String, NodeId>,
    /// Every inline style write, in order, as `(node, property, value)`.
    style_writes: Vec<(NodeId, String, String)>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            nodes: vec![MemoryNode::new(None, HeightModel::Fixed(0.0))],
            ids: HashMap::new(),
            style_writes: Vec::new(),
        }
    }

    /// Creates an element with the given `id` attribute and appends it to the body.
    pub fn create_element(&mut self, id: &str, height: HeightModel) -> NodeId {
        let node = self.push(Some(id.to_string()), height);
        self.ids.insert(id.to_string(), node);
        self.append_child(NodeId(0), node);
        node
    }

    /// Creates an element without an id, detached until appended.
    pub fn create_anonymous(&mut self, height: HeightModel) -> NodeId {
        self.push(None, height)
    }

    /// Moves `child` under `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        for node in &mut self.nodes {
            node.children.retain(|c| *c != child);
        }
        self.nodes[parent.0].children.push(child);
    }

    pub fn set_margins(&mut self, node: NodeId, top: &str, bottom: &str) {
        let n = &mut self.nodes[node.0];
        n.margin_top = top.to_string();
        n.margin_bottom = bottom.to_string();
    }

    pub fn set_base_font_size(&mut self, node: NodeId, px: f64) {
        self.nodes[node.0].base_font_px = px;
    }

    pub fn inline_style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes[node.0]
            .inline_styles
            .get(property)
            .map(String::as_str)
    }

    pub fn style_writes(&self) -> &[(NodeId, String, String)] {
        &self.style_writes
    }

    fn push(&mut self, id: Option<String>, height: HeightModel) -> NodeId {
        self.nodes.push(MemoryNode::new(id, height));
        NodeId(self.nodes.len() - 1)
    }
}

impl DomHost for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    fn first_child(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes.get(element.0)?.children.first().copied()
    }

    fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn offset_height(&self, element: &NodeId) -> f64 {
        let node = &self.nodes[element.0];
        match node.height {
            HeightModel::Fixed(px) => px,
            HeightModel::FontScaled { line_height, lines } => {
                lines as f64 * line_height * node.font_px()
            }
        }
    }

    fn computed_style(&self, element: &NodeId, property: &str) -> Option<String> {
        let node = self.nodes.get(element.0)?;
        match property {
            "margin-top" => Some(node.margin_top.clone()),
            "margin-bottom" => Some(node.margin_bottom.clone()),
            "font-size" => Some(format!("{}px", css_number(node.font_px()))),
            other => node.inline_styles.get(other).cloned(),
        }
    }

    fn set_inline_style(&mut self, element: &NodeId, property: &str, value: &str) {
        self.nodes[element.0]
            .inline_styles
            .insert(property.to_string(), value.to_string());
        self.style_writes
            .push((*element, property.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scaled_height_tracks_inline_font_size() {
        let mut doc = MemoryDocument::new();
        let el = doc.create_element(
            "text",
            HeightModel::FontScaled {
                line_height: 1.25,
                lines: 2,
            },
        );
        doc.set_base_font_size(el, 20.0);
        assert_eq!(doc.offset_height(&el), 50.0);

        doc.set_inline_style(&el, "font-size", "8px");
        assert_eq!(doc.offset_height(&el), 20.0);
        assert_eq!(doc.computed_style(&el, "font-size").as_deref(), Some("8px"));
    }

    #[test]
    fn test_first_child_follows_append_order() {
        let mut doc = MemoryDocument::new();
        let parent = doc.create_element("outer", HeightModel::Fixed(10.0));
        let a = doc.create_anonymous(HeightModel::Fixed(1.0));
        let b = doc.create_anonymous(HeightModel::Fixed(2.0));
        doc.append_child(parent, a);
        doc.append_child(parent, b);
        assert_eq!(doc.first_child(&parent), Some(a));
        assert_eq!(doc.first_child(&a), None);
    }

    #[test]
    fn test_element_by_id_unknown_is_none() {
        let doc = MemoryDocument::new();
        assert_eq!(doc.element_by_id("missing"), None);
    }
}
