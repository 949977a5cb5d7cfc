//! Attribute storage
//!
//! Attributes borrow the document. A node holds them in a fixed inline array
//! so decoding a tag never allocates.

use std::fmt;

/// Maximum number of attributes decoded per node
pub const MAX_ATTRIBUTES: usize = 10;

/// A decoded attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attribute<'a> {
    /// Attribute name as written
    pub name: &'a [u8],
    /// Attribute value with surrounding double quotes trimmed, undecoded
    pub value: &'a [u8],
}

impl<'a> Attribute<'a> {
    /// Create a new attribute
    #[inline]
    pub const fn new(name: &'a [u8], value: &'a [u8]) -> Self {
        Attribute { name, value }
    }

    /// Get the name as a string
    pub fn name_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.name).ok()
    }

    /// Get the value as a string
    pub fn value_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.value).ok()
    }
}

/// Fixed-capacity, declaration-ordered attribute list
#[derive(Clone, Copy, Default)]
pub struct AttributeList<'a> {
    items: [Attribute<'a>; MAX_ATTRIBUTES],
    len: usize,
}

impl<'a> AttributeList<'a> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, handing it back when the list is full
    pub fn push(&mut self, attr: Attribute<'a>) -> Result<(), Attribute<'a>> {
        match self.items.get_mut(self.len) {
            Some(slot) => {
                *slot = attr;
                self.len += 1;
                Ok(())
            }
            None => Err(attr),
        }
    }

    /// Number of stored attributes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once [`MAX_ATTRIBUTES`] are stored
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == MAX_ATTRIBUTES
    }

    /// Stored attributes in declaration order
    #[inline]
    pub fn as_slice(&self) -> &[Attribute<'a>] {
        &self.items[..self.len]
    }

    /// Iterate over stored attributes
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute<'a>> {
        self.as_slice().iter()
    }

    /// First attribute with the given name
    pub fn get(&self, name: &[u8]) -> Option<&Attribute<'a>> {
        self.iter().find(|a| a.name == name)
    }
}

impl fmt::Debug for AttributeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for AttributeList<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for AttributeList<'_> {}

impl<'l, 'a> IntoIterator for &'l AttributeList<'a> {
    type Item = &'l Attribute<'a>;
    type IntoIter = std::slice::Iter<'l, Attribute<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut list = AttributeList::new();
        for _ in 0..MAX_ATTRIBUTES {
            assert!(list.push(Attribute::new(b"k", b"v")).is_ok());
        }
        assert!(list.is_full());

        let rejected = list.push(Attribute::new(b"extra", b"1"));
        assert_eq!(rejected, Err(Attribute::new(b"extra", b"1")));
        assert_eq!(list.len(), MAX_ATTRIBUTES);
    }

    #[test]
    fn test_lookup_keeps_first() {
        let mut list = AttributeList::new();
        list.push(Attribute::new(b"id", b"1")).unwrap();
        list.push(Attribute::new(b"id", b"2")).unwrap();
        assert_eq!(list.get(b"id").map(|a| a.value), Some(&b"1"[..]));
        assert!(list.get(b"missing").is_none());
    }

    #[test]
    fn test_equality_ignores_unused_slots() {
        let mut a = AttributeList::new();
        let mut b = AttributeList::new();
        a.push(Attribute::new(b"x", b"1")).unwrap();
        b.push(Attribute::new(b"x", b"1")).unwrap();
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "[Attribute { name: [120], value: [49] }]");
    }

    #[test]
    fn test_str_accessors() {
        let attr = Attribute::new(b"class", b"container");
        assert_eq!(attr.name_str(), Some("class"));
        assert_eq!(attr.value_str(), Some("container"));
        assert_eq!(Attribute::new(b"k", &[0xff]).value_str(), None);
    }
}
