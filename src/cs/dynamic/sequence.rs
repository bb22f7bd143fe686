//! The ordered, length-known, randomly indexable view that every input is
//! adapted into before reaching the distance engine.
//!
//! Text goes through [`CharSequence`] (one element per Unicode scalar value);
//! token lists are used directly as slices, vectors or arrays.

/// An immutable, zero-indexed sequence of comparable elements.
pub trait Sequence {
    /// Element type compared by the engine.
    type Element;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn element(&self, index: usize) -> &Self::Element;

    /// Returns `true` when the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Element = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Sequence for Vec<T> {
    type Element = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Element = T;

    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> &T {
        &self[index]
    }
}

/// Characters of a string, decoded once so they can be indexed in O(1).
///
/// # Examples
///
/// ```
/// use damerau::{CharSequence, Sequence};
///
/// let text = CharSequence::from("café");
/// assert_eq!(text.len(), 4);
/// assert_eq!(*text.element(3), 'é');
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSequence {
    chars: Vec<char>,
}

impl CharSequence {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// The decoded characters.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for CharSequence {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CharSequence {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl FromIterator<char> for CharSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Sequence for CharSequence {
    type Element = char;

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn element(&self, index: usize) -> &char {
        &self.chars[index]
    }
}
