//! Tag declaration decoding
//!
//! Turns the bytes between `<` and `>` of an opening tag into a name and an
//! attribute list. Splitting is on the space byte only and attribute pairs
//! must be `name=value` with exactly one `=`; anything else is skipped.

use super::attributes::{Attribute, AttributeList, MAX_ATTRIBUTES};
use super::cursor::{split_pair, trim_matches};
use crate::error::{Result, ScanError};
use crate::options::AttributeOverflow;

/// Decoded opening tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a [u8],
    pub attributes: AttributeList<'a>,
    /// Declared as `<name .../>`
    pub self_closing: bool,
}

#[inline]
fn is_quote(b: u8) -> bool {
    b == b'"'
}

/// Decode a tag declaration
///
/// `position` is the document offset of the tag's `<` and is only used for
/// error reporting.
pub fn decode_declaration(
    decl: &[u8],
    position: usize,
    overflow: AttributeOverflow,
) -> Result<Declaration<'_>> {
    let (decl, self_closing) = match decl.strip_suffix(b"/") {
        Some(inner) => (inner, true),
        None => (decl, false),
    };

    let mut tokens = decl.split(|&b| b == b' ');
    let name = match tokens.next() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ScanError::EmptyDeclaration { position }),
    };

    let mut attributes = AttributeList::new();
    for token in tokens {
        let Some((attr_name, raw_value)) = split_pair(token, b'=') else {
            continue;
        };
        let attr = Attribute::new(attr_name, trim_matches(raw_value, is_quote));
        if attributes.push(attr).is_err() {
            match overflow {
                AttributeOverflow::Truncate => {
                    log::debug!(
                        "truncating attributes of <{}> to {}",
                        String::from_utf8_lossy(name),
                        MAX_ATTRIBUTES
                    );
                    break;
                }
                AttributeOverflow::Reject => {
                    return Err(ScanError::TooManyAttributes {
                        name: String::from_utf8_lossy(name).into_owned(),
                        max: MAX_ATTRIBUTES,
                    });
                }
            }
        }
    }

    Ok(Declaration {
        name,
        attributes,
        self_closing,
    })
}
