//! Visitor contract
//!
//! A visitor is called once per node at the level it was registered for. It
//! may descend with [`Context::traverse_children`], take the node's text with
//! [`Context::read_body`], or do neither and let the engine skip the node.

use super::context::Context;
use super::node::Node;
use crate::error::Result;

/// What the engine should do after a visitor returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Move on to the next sibling
    Continue,
    /// Stop iterating at this level
    Stop,
}

/// Callback invoked for each encountered node
///
/// Errors returned here abort the whole traversal. Use [`visit_fn`] to turn
/// a closure into a visitor.
pub trait Visitor<'a> {
    fn visit(&mut self, ctx: &mut Context<'a>, node: &Node<'a>) -> Result<Signal>;
}

impl<'a, V: Visitor<'a> + ?Sized> Visitor<'a> for &mut V {
    #[inline]
    fn visit(&mut self, ctx: &mut Context<'a>, node: &Node<'a>) -> Result<Signal> {
        (**self).visit(ctx, node)
    }
}

/// Visitor backed by a closure, see [`visit_fn`]
pub struct VisitFn<F>(F);

/// Wrap a closure as a [`Visitor`]
///
/// ```
/// use rustyxml_visit::{visit_fn, Context, Signal};
///
/// let mut name = None;
/// let mut ctx = Context::new(b"<Greeting>hi</Greeting>");
/// ctx.parse(&mut visit_fn(|_ctx, node| {
///     name = node.name_str();
///     Ok(Signal::Continue)
/// }))?;
/// assert_eq!(name, Some("Greeting"));
/// # Ok::<(), rustyxml_visit::ScanError>(())
/// ```
pub fn visit_fn<'a, F>(f: F) -> VisitFn<F>
where
    F: FnMut(&mut Context<'a>, &Node<'a>) -> Result<Signal>,
{
    VisitFn(f)
}

impl<'a, F> Visitor<'a> for VisitFn<F>
where
    F: FnMut(&mut Context<'a>, &Node<'a>) -> Result<Signal>,
{
    #[inline]
    fn visit(&mut self, ctx: &mut Context<'a>, node: &Node<'a>) -> Result<Signal> {
        (self.0)(ctx, node)
    }
}
