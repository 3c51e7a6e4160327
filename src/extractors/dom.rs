// src/extractors/dom.rs

// --- Imports ---
use scraper::{node::Node, ElementRef, Html};

/// A node in a parsed markup tree, as seen by the extractors.
///
/// The row and cell logic only needs tag identity, class membership, text and
/// ordered children, so anything that can answer those can be extracted from.
pub trait MarkupNode: Sized {
    /// Lower-case tag name, or `None` for a text node.
    fn tag_name(&self) -> Option<&str>;

    /// Raw text, `Some` only for text nodes.
    fn text(&self) -> Option<&str>;

    /// True when the element's class attribute contains `class` as a token.
    fn has_class(&self, class: &str) -> bool;

    fn children(&self) -> &[Self];

    fn first_child(&self) -> Option<&Self> {
        self.children().first()
    }

    fn is_element(&self, tag: &str) -> bool {
        self.tag_name() == Some(tag)
    }

    /// All descendant text concatenated in document order.
    fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Descendants carrying `class`, in document order. A matched node is not
    /// searched further, so nested matches are reported once.
    fn find_by_class(&self, class: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        collect_matching(self, &|node: &Self| node.has_class(class), &mut found);
        found
    }

    /// Descendants with tag `tag`, in document order (outermost matches only).
    fn find_by_tag(&self, tag: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        collect_matching(self, &|node: &Self| node.is_element(tag), &mut found);
        found
    }
}

fn collect_text<N: MarkupNode>(node: &N, out: &mut String) {
    match node.text() {
        Some(text) => out.push_str(text),
        None => node.children().iter().for_each(|child| collect_text(child, out)),
    }
}

fn collect_matching<'a, N, F>(node: &'a N, matches: &F, found: &mut Vec<&'a N>)
where
    N: MarkupNode,
    F: Fn(&N) -> bool,
{
    for child in node.children() {
        if matches(child) {
            found.push(child);
        } else {
            collect_matching(child, matches, found);
        }
    }
}

// --- Owned tree ---
/// Owned markup tree detached from the parser that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    Element {
        tag: String,
        classes: Vec<String>,
        children: Vec<DomNode>,
    },
    Text(String),
}

impl DomNode {
    /// Parses a full HTML document (html5ever via scraper) and returns the
    /// `<html>` element. Comments and doctype nodes are dropped.
    pub fn parse_document(html_content: &str) -> Self {
        let document = Html::parse_document(html_content);
        if !document.errors.is_empty() {
            tracing::trace!("HTML parser reported {} recoverable errors", document.errors.len());
        }
        Self::from_element(document.root_element())
    }

    fn from_element(element: ElementRef<'_>) -> Self {
        let children = element
            .children()
            .filter_map(|child| match child.value() {
                Node::Text(text_node) => Some(DomNode::Text(text_node.text.to_string())),
                Node::Element(_) => ElementRef::wrap(child).map(DomNode::from_element),
                _ => None, // Ignore comments, etc.
            })
            .collect();

        let value = element.value();
        DomNode::Element {
            tag: value.name().to_ascii_lowercase(),
            classes: value.classes().map(str::to_string).collect(),
            children,
        }
    }
}

// Hand-built trees for tests
#[cfg(test)]
impl DomNode {
    pub fn element(tag: &str, classes: &[&str], children: Vec<DomNode>) -> Self {
        DomNode::Element {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            children,
        }
    }

    pub fn text_node(text: &str) -> Self {
        DomNode::Text(text.to_string())
    }
}

impl MarkupNode for DomNode {
    fn tag_name(&self) -> Option<&str> {
        match self {
            DomNode::Element { tag, .. } => Some(tag.as_str()),
            DomNode::Text(_) => None,
        }
    }

    fn text(&self) -> Option<&str> {
        match self {
            DomNode::Text(text) => Some(text.as_str()),
            DomNode::Element { .. } => None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        match self {
            DomNode::Element { classes, .. } => classes.iter().any(|c| c == class),
            DomNode::Text(_) => false,
        }
    }

    fn children(&self) -> &[Self] {
        match self {
            DomNode::Element { children, .. } => children.as_slice(),
            DomNode::Text(_) => &[],
        }
    }
}
