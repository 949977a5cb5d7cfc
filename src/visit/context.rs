//! Traversal engine
//!
//! A [`Context`] owns the document cursor and the scope stack of one
//! traversal session. Visitors receive `&mut Context` and advance the shared
//! cursor themselves by descending or reading bodies; whatever a visitor
//! leaves unconsumed is skipped by the engine when the visitor returns
//! [`Signal::Continue`].

use std::ops::{Deref, DerefMut};

use super::node::Node;
use super::visitor::{Signal, Visitor};
use crate::core::cursor::ByteCursor;
use crate::core::declaration::decode_declaration;
use crate::error::{Result, ScanError};
use crate::options::ScanOptions;

/// Longest element name whose closing tag can be matched
pub const MAX_NAME_LEN: usize = 256;

/// `</` + name + `>`
const CLOSE_TAG_CAPACITY: usize = MAX_NAME_LEN + 3;

/// One open nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    /// Element whose children are being enumerated, `None` at document level
    pub element: Option<&'a [u8]>,
    /// Where that element's body starts (0 at document level)
    pub body_start: usize,
}

/// Location of one `<...>` construct
#[derive(Debug, Clone, Copy)]
struct Tag {
    /// Offset of `<`
    open: usize,
    /// Offset of `>`
    close: usize,
}

/// Traversal session over one document
#[derive(Debug)]
pub struct Context<'a> {
    cursor: ByteCursor<'a>,
    scopes: Vec<Scope<'a>>,
    options: ScanOptions,
    /// `body_start` of the most recent node whose closing tag was consumed
    last_closed: Option<usize>,
}

impl<'a> Context<'a> {
    /// Create a context with default options
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, ScanOptions::default())
    }

    /// Create a context with explicit options
    pub fn with_options(input: &'a [u8], options: ScanOptions) -> Self {
        Context {
            cursor: ByteCursor::new(input),
            scopes: Vec::with_capacity(4),
            options,
            last_closed: None,
        }
    }

    /// Rewind to the start of the document and drop any scope state
    pub fn reset(&mut self) {
        self.cursor.set_position(0);
        self.scopes.clear();
        self.last_closed = None;
    }

    /// The document being scanned
    #[inline]
    pub fn input(&self) -> &'a [u8] {
        self.cursor.input()
    }

    /// Current cursor offset
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Unconsumed bytes
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.cursor.remaining()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Number of open scopes
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Open scopes, outermost first
    #[inline]
    pub fn scopes(&self) -> &[Scope<'a>] {
        &self.scopes
    }

    #[inline]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Parse the document's single root element
    ///
    /// Leading `<?...>` and `<!...>` declarations are discarded, then the
    /// first element is handed to `visitor`. Only that element is scanned;
    /// later top-level siblings are ignored. Empty input visits nothing.
    pub fn parse<V: Visitor<'a>>(&mut self, visitor: &mut V) -> Result<()> {
        self.scopes.clear();
        self.last_closed = None;

        self.skip_prolog()?;
        if self.cursor.is_eof() {
            log::debug!("document has no root element");
            return Ok(());
        }

        let mut scope = self.enter_scope(None)?;
        scope.visit_root(visitor)
    }

    /// Enumerate the children of `parent`
    ///
    /// Each child is handed to `visitor` in document order until the
    /// parent's closing tag is consumed, or until the visitor returns
    /// [`Signal::Stop`], in which case the rest of the parent is left
    /// unconsumed. Both outcomes are `Ok`.
    pub fn traverse_children<V: Visitor<'a>>(&mut self, parent: &Node<'a>, visitor: &mut V) -> Result<()> {
        if parent.is_self_closing() {
            self.last_closed = Some(parent.body_start());
            return Ok(());
        }

        let mut scope = self.enter_scope(Some(parent))?;
        scope.scan_children(parent, visitor)
    }

    /// Consume `node` through its closing tag and return its raw body
    ///
    /// Markup inside the body is returned as is.
    pub fn read_body(&mut self, node: &Node<'a>) -> Result<&'a [u8]> {
        self.advance_past_closing_tag(node)
    }

    fn enter_scope(&mut self, element: Option<&Node<'a>>) -> Result<ScopeGuard<'_, 'a>> {
        if self.scopes.len() >= self.options.max_depth {
            log::debug!("scope stack full at depth {}", self.scopes.len());
            return Err(ScanError::DepthExceeded {
                max: self.options.max_depth,
            });
        }
        self.scopes.try_reserve(1)?;

        let scope = Scope {
            element: element.map(|n| n.name()),
            body_start: element.map_or(0, |n| n.body_start()),
        };
        log::trace!("enter scope {:?} at depth {}", scope.element.map(String::from_utf8_lossy), self.scopes.len());
        self.scopes.push(scope);
        Ok(ScopeGuard { ctx: self })
    }

    /// Locate the next `<...>` at or after the cursor
    fn next_tag(&self) -> Result<Tag> {
        let open = self
            .cursor
            .find_byte(b'<')
            .ok_or(ScanError::MissingTagStart {
                position: self.cursor.position(),
            })?;
        let close = self
            .cursor
            .find_byte_from(open + 1, b'>')
            .ok_or(ScanError::MissingTagEnd { position: open })?;
        Ok(Tag { open, close })
    }

    /// `<?...>` and `<!...>`
    fn is_markup_declaration(&self, tag: Tag) -> bool {
        matches!(self.cursor.byte_at(tag.open + 1), Some(b'?' | b'!'))
    }

    fn skip_prolog(&mut self) -> Result<()> {
        while !self.cursor.is_eof() {
            let tag = self.next_tag()?;
            if !self.is_markup_declaration(tag) {
                self.cursor.set_position(tag.open);
                break;
            }
            log::trace!("skipping declaration at byte {}", tag.open);
            self.cursor.set_position(tag.close + 1);
        }
        Ok(())
    }

    /// Decode the tag at the cursor into a node and move past its `>`
    fn open_node(&mut self, tag: Tag) -> Result<Node<'a>> {
        let decl = self.cursor.slice(tag.open + 1, tag.close);
        self.cursor.set_position(tag.close + 1);
        let decl = decode_declaration(decl, tag.open, self.options.attribute_overflow)?;
        Ok(Node::new(decl, self.cursor.position()))
    }

    fn visit_root<V: Visitor<'a>>(&mut self, visitor: &mut V) -> Result<()> {
        let tag = self.next_tag()?;
        if self.cursor.byte_at(tag.open + 1) == Some(b'/') {
            return Err(ScanError::UnexpectedClosingTag { position: tag.open });
        }
        let root = self.open_node(tag)?;
        // a single root: the signal has nothing left to stop
        let _ = visitor.visit(self, &root)?;
        Ok(())
    }

    fn scan_children<V: Visitor<'a>>(&mut self, parent: &Node<'a>, visitor: &mut V) -> Result<()> {
        loop {
            let tag = self.next_tag()?;

            if self.cursor.byte_at(tag.open + 1) == Some(b'/') {
                self.cursor.set_position(tag.close + 1);
                self.last_closed = Some(parent.body_start());
                return Ok(());
            }

            if self.is_markup_declaration(tag) {
                log::trace!("skipping declaration at byte {}", tag.open);
                self.cursor.set_position(tag.close + 1);
                continue;
            }

            let child = self.open_node(tag)?;
            match visitor.visit(self, &child)? {
                Signal::Stop => return Ok(()),
                Signal::Continue => {
                    if !self.is_closed(&child) {
                        self.advance_past_closing_tag(&child)?;
                    }
                }
            }
        }
    }

    /// Whether the cursor already sits past `node`'s closing tag
    fn is_closed(&self, node: &Node<'a>) -> bool {
        node.is_self_closing() || self.last_closed == Some(node.body_start())
    }

    /// Find `</name>` from the node's body start and move the cursor past it
    ///
    /// The cursor only ever moves forward, so repeating this for a node that
    /// was already consumed leaves it where it is.
    fn advance_past_closing_tag(&mut self, node: &Node<'a>) -> Result<&'a [u8]> {
        if node.is_self_closing() {
            self.last_closed = Some(node.body_start());
            return Ok(&[]);
        }

        let name = node.name();
        let body_start = node.body_start();
        let pattern_len = name.len() + 3;

        let remaining = self.cursor.tail_from(body_start).len();
        if pattern_len > remaining {
            return Err(ScanError::ClosingTagOutOfRange {
                name: String::from_utf8_lossy(name).into_owned(),
                remaining,
            });
        }
        if pattern_len > CLOSE_TAG_CAPACITY {
            return Err(ScanError::NameTooLong {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }

        let mut buf = [0u8; CLOSE_TAG_CAPACITY];
        buf[..2].copy_from_slice(b"</");
        buf[2..2 + name.len()].copy_from_slice(name);
        buf[2 + name.len()] = b'>';
        let pattern = &buf[..pattern_len];

        let Some(found) = self.cursor.find_exact_from(body_start, pattern) else {
            log::debug!("no closing tag for <{}> after byte {}", String::from_utf8_lossy(name), body_start);
            return Err(ScanError::closing_tag_not_found(name));
        };

        let end = found + pattern_len;
        if end > self.cursor.position() {
            self.cursor.set_position(end);
        }
        self.last_closed = Some(body_start);
        Ok(self.cursor.slice(body_start, found))
    }
}

/// Pops the scope it was created for on every exit path
struct ScopeGuard<'c, 'a> {
    ctx: &'c mut Context<'a>,
}

impl<'a> Deref for ScopeGuard<'_, 'a> {
    type Target = Context<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.ctx
    }
}

impl<'a> DerefMut for ScopeGuard<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ctx
    }
}

impl Drop for ScopeGuard<'_, '_> {
    fn drop(&mut self) {
        let scope = self.ctx.scopes.pop();
        log::trace!(
            "leave scope {:?} at depth {}",
            scope.and_then(|s| s.element).map(String::from_utf8_lossy),
            self.ctx.scopes.len()
        );
    }
}
