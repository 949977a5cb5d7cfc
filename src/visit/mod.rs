//! Visitor-driven traversal
//!
//! ## Architecture
//!
//! ```text
//! Context::parse ---> root Visitor
//!                        |
//!                        +--> Context::traverse_children ---> child Visitor ...
//!                        |
//!                        +--> Context::read_body ---> raw body bytes
//! ```
//!
//! All calls share the cursor owned by the [`Context`]. A visitor that
//! neither descends nor reads the body is skipped past its closing tag once
//! it returns [`Signal::Continue`].

pub mod context;
pub mod node;
pub mod visitor;

pub use context::{Context, Scope, MAX_NAME_LEN};
pub use node::Node;
pub use visitor::{visit_fn, Signal, VisitFn, Visitor};
