//! In-memory element tree implementing the presentation port.

use std::collections::{BTreeSet, HashMap};

use crate::domain::ports::{ElementRef, PresentationPort};

/// Description of an element to insert.
#[derive(Debug, Clone, Default)]
pub struct Node {
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    icon: Option<String>,
    value: String,
    hidden: bool,
}

impl Node {
    /// Creates an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the element's own text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the icon token.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the input value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Starts hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Observable state of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: Option<String>,
    classes: BTreeSet<String>,
    text: String,
    icon: Option<String>,
    value: String,
    visible: bool,
    background: Option<String>,
    opacity: Option<f32>,
    interactive: bool,
    disabled: bool,
    scroll_top: u32,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Element {
    /// Element id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Own text, without descendants.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Icon token.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Input value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the element itself is displayed.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Background color token.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Opacity override.
    #[must_use]
    pub const fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    /// Whether pointer interaction is enabled.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Whether the disabled attribute is set.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Vertical scroll offset.
    #[must_use]
    pub const fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    /// Checks class membership.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Iterates classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    fn matches(&self, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::Id(id) => self.id.as_deref() == Some(*id),
            Selector::Class(class) => self.classes.contains(*class),
        }
    }
}

enum Selector<'a> {
    Id(&'a str),
    Class(&'a str),
}

impl<'a> Selector<'a> {
    fn parse(selector: &'a str) -> Self {
        let selector = selector.trim();
        if let Some(id) = selector.strip_prefix('#') {
            Self::Id(id)
        } else {
            Self::Class(selector.strip_prefix('.').unwrap_or(selector))
        }
    }
}

/// Arena-backed element tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewTree {
    nodes: Vec<Element>,
    ids: HashMap<String, usize>,
}

impl ViewTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node under `parent`, or as a root when `parent` is `None`.
    pub fn append(&mut self, parent: Option<ElementRef>, node: Node) -> ElementRef {
        let index = self.nodes.len();
        let parent = parent
            .map(ElementRef::index)
            .filter(|p| *p < self.nodes.len());

        if let Some(id) = &node.id {
            self.ids.insert(id.clone(), index);
        }

        self.nodes.push(Element {
            id: node.id,
            classes: node.classes.into_iter().collect(),
            text: node.text,
            icon: node.icon,
            value: node.value,
            visible: !node.hidden,
            background: None,
            opacity: None,
            interactive: true,
            disabled: false,
            scroll_top: 0,
            parent,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            self.nodes[parent].children.push(index);
        }

        ElementRef::new(index)
    }

    /// Returns element state by handle.
    #[must_use]
    pub fn element(&self, element: ElementRef) -> Option<&Element> {
        self.nodes.get(element.index())
    }

    /// Returns element state by id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.ids.get(id).and_then(|index| self.nodes.get(*index))
    }

    /// Returns the direct children of an element.
    #[must_use]
    pub fn children(&self, element: ElementRef) -> Vec<ElementRef> {
        self.element(element)
            .map(|e| e.children.iter().copied().map(ElementRef::new).collect())
            .unwrap_or_default()
    }

    /// Whether the element and all its ancestors are displayed.
    #[must_use]
    pub fn is_rendered(&self, element: ElementRef) -> bool {
        let mut current = Some(element.index());
        while let Some(index) = current {
            match self.nodes.get(index) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_mut(&mut self, element: ElementRef) -> Option<&mut Element> {
        self.nodes.get_mut(element.index())
    }

    fn collect_text(&self, index: usize, out: &mut Vec<String>) {
        let Some(node) = self.nodes.get(index) else {
            return;
        };
        if !node.text.is_empty() {
            out.push(node.text.clone());
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    fn find_descendant(&self, index: usize, selector: &Selector<'_>) -> Option<usize> {
        let node = self.nodes.get(index)?;
        for child in &node.children {
            if self.nodes.get(*child).is_some_and(|c| c.matches(selector)) {
                return Some(*child);
            }
            if let Some(found) = self.find_descendant(*child, selector) {
                return Some(found);
            }
        }
        None
    }
}

impl PresentationPort for ViewTree {
    fn get_element(&self, id: &str) -> Option<ElementRef> {
        self.ids.get(id).copied().map(ElementRef::new)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementRef> {
        let selector = Selector::parse(selector);
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches(&selector))
            .map(|(index, _)| ElementRef::new(index))
            .collect()
    }

    fn query_descendant(&self, element: ElementRef, selector: &str) -> Option<ElementRef> {
        let selector = Selector::parse(selector);
        self.find_descendant(element.index(), &selector)
            .map(ElementRef::new)
    }

    fn set_text(&mut self, element: ElementRef, text: &str) {
        if let Some(node) = self.node_mut(element) {
            node.text = text.to_string();
        }
    }

    // Space-joined, unlike a DOM textContent, so adjacent texts never fuse into one token.
    fn text_content(&self, element: ElementRef) -> String {
        let mut parts = Vec::new();
        self.collect_text(element.index(), &mut parts);
        parts.join(" ")
    }

    fn set_icon(&mut self, element: ElementRef, icon: Option<&str>) {
        if let Some(node) = self.node_mut(element) {
            node.icon = icon.map(str::to_string);
        }
    }

    fn set_visible(&mut self, element: ElementRef, visible: bool) {
        if let Some(node) = self.node_mut(element) {
            node.visible = visible;
        }
    }

    fn set_background(&mut self, element: ElementRef, color: Option<&str>) {
        if let Some(node) = self.node_mut(element) {
            node.background = color.map(str::to_string);
        }
    }

    fn set_opacity(&mut self, element: ElementRef, opacity: Option<f32>) {
        if let Some(node) = self.node_mut(element) {
            node.opacity = opacity;
        }
    }

    fn set_interactive(&mut self, element: ElementRef, interactive: bool) {
        if let Some(node) = self.node_mut(element) {
            node.interactive = interactive;
        }
    }

    fn set_disabled(&mut self, element: ElementRef, disabled: bool) {
        if let Some(node) = self.node_mut(element) {
            node.disabled = disabled;
        }
    }

    fn has_class(&self, element: ElementRef, class: &str) -> bool {
        self.element(element).is_some_and(|e| e.has_class(class))
    }

    fn add_class(&mut self, element: ElementRef, class: &str) {
        if let Some(node) = self.node_mut(element) {
            node.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementRef, class: &str) {
        if let Some(node) = self.node_mut(element) {
            node.classes.remove(class);
        }
    }

    fn value(&self, element: ElementRef) -> String {
        self.element(element)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, element: ElementRef, value: &str) {
        if let Some(node) = self.node_mut(element) {
            node.value = value.to_string();
        }
    }

    fn set_scroll_top(&mut self, element: ElementRef, offset: u32) {
        if let Some(node) = self.node_mut(element) {
            node.scroll_top = offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ViewTree, ElementRef) {
        let mut tree = ViewTree::new();
        let root = tree.append(None, Node::new().id("root").class("screen"));
        let scroll = tree.append(Some(root), Node::new().class("scroll"));
        tree.append(Some(scroll), Node::new().id("title").text("Hello"));
        tree.append(Some(scroll), Node::new().class("toggle").text("World"));
        (tree, root)
    }

    #[test]
    fn test_lookup_and_query() {
        let (tree, root) = sample();
        assert_eq!(tree.get_element("root"), Some(root));
        assert!(tree.get_element("missing").is_none());
        assert_eq!(tree.query_all(".scroll").len(), 1);
        assert_eq!(tree.query_all("#title").len(), 1);
        assert!(tree.query_descendant(root, ".toggle").is_some());
        assert!(tree.query_descendant(root, ".screen").is_none());
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let (tree, root) = sample();
        assert_eq!(tree.text_content(root), "Hello World");
    }

    #[test]
    fn test_text_content_separates_elements() {
        let mut tree = ViewTree::new();
        let card = tree.append(None, Node::new().class("package-card"));
        tree.append(Some(card), Node::new().text("PKG-1"));
        tree.append(Some(card), Node::new());
        tree.append(Some(card), Node::new().text("23 Elm St"));

        let text = tree.text_content(card);

        assert_eq!(text, "PKG-1 23 Elm St");
        assert!(!text.contains("PKG-123"));
        assert!(text.contains("PKG-1 23"));
    }

    #[test]
    fn test_class_operations() {
        let (mut tree, root) = sample();
        assert!(tree.toggle_class(root, "open"));
        assert!(tree.has_class(root, "open"));
        assert!(!tree.toggle_class(root, "open"));
        tree.set_class(root, "active", true);
        assert!(tree.by_id("root").unwrap().has_class("active"));
        tree.set_class(root, "active", false);
        assert!(!tree.has_class(root, "active"));
    }

    #[test]
    fn test_values_are_trimmed_on_read() {
        let mut tree = ViewTree::new();
        let input = tree.append(None, Node::new().id("email").value("  a@b.com "));
        assert_eq!(tree.read_trimmed_value(input), "a@b.com");
        tree.set_value(input, "x");
        assert_eq!(tree.value(input), "x");
    }

    #[test]
    fn test_rendered_respects_ancestors() {
        let (mut tree, root) = sample();
        let title = tree.get_element("title").unwrap();
        assert!(tree.is_rendered(title));
        tree.set_visible(root, false);
        assert!(!tree.is_rendered(title));
    }
}
