//! Core scanning primitives
//!
//! This module contains the building blocks the traversal engine works with:
//! - Cursor: memchr-accelerated byte cursor with exact substring search
//! - Attributes: borrowed attributes in fixed-capacity storage
//! - Declaration: decoding of the text between `<` and `>`

pub mod attributes;
pub mod cursor;
pub mod declaration;
