//! Node views handed to visitors

use crate::core::attributes::{Attribute, AttributeList};
use crate::core::declaration::Declaration;

/// One encountered opening tag
///
/// `body_start` is a snapshot of the cursor taken right after the tag's `>`.
/// It locates the node's own closing tag and says nothing about where the
/// cursor is now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'a> {
    name: &'a [u8],
    attributes: AttributeList<'a>,
    body_start: usize,
    self_closing: bool,
}

impl<'a> Node<'a> {
    pub(crate) fn new(decl: Declaration<'a>, body_start: usize) -> Self {
        Node {
            name: decl.name,
            attributes: decl.attributes,
            body_start,
            self_closing: decl.self_closing,
        }
    }

    /// Element name as written in the tag
    #[inline]
    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    /// Get the name as a string
    pub fn name_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.name).ok()
    }

    /// Decoded attributes in declaration order
    #[inline]
    pub fn attributes(&self) -> &[Attribute<'a>] {
        self.attributes.as_slice()
    }

    /// Value of the first attribute called `name`
    pub fn attribute(&self, name: &[u8]) -> Option<&'a [u8]> {
        self.attributes.get(name).map(|a| a.value)
    }

    /// Get an attribute value by name as string
    pub fn attribute_str(&self, name: &str) -> Option<&'a str> {
        self.attribute(name.as_bytes())
            .and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Document offset just past this node's opening tag
    #[inline]
    pub fn body_start(&self) -> usize {
        self.body_start
    }

    /// True for `<name/>`, which has neither body nor children
    #[inline]
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }
}
