//! Carousel position over a fixed list.

use std::sync::Arc;

/// Current position within an ordered, immutable list of items.
///
/// The index is kept in `[0, len)` by modulo arithmetic after every move;
/// on an empty list every move is a no-op and the index stays 0.
///
/// The generation counts list replacements and manual moves. A scheduled
/// advance taken against an older generation is stale and must not apply.
#[derive(Debug)]
pub struct CarouselState<T> {
    items: Arc<[T]>,
    index: usize,
    generation: u64,
}

impl<T> Clone for CarouselState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            index: self.index,
            generation: self.generation,
        }
    }
}

impl<T> CarouselState<T> {
    /// Start at the first item.
    #[must_use]
    pub fn new(items: impl Into<Arc<[T]>>) -> Self {
        Self {
            items: items.into(),
            index: 0,
            generation: 0,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the list is long enough to rotate.
    #[must_use]
    pub fn rotates(&self) -> bool {
        self.items.len() >= 2
    }

    /// Current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Item in focus, `None` on an empty list.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Number of replacements and manual moves so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The backing list.
    #[must_use]
    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Move to the next item, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len();
        }
    }

    /// Move to the previous item, wrapping at the start.
    pub fn retreat(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len() - 1) % self.len();
        }
    }

    /// Jump to `index`, normalized modulo the list length.
    ///
    /// Negative values count back from the end.
    pub fn go_to(&mut self, index: i64) {
        let Ok(len) = i64::try_from(self.len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        // rem_euclid with a positive modulus is in [0, len)
        self.index = usize::try_from(index.rem_euclid(len)).unwrap_or(0);
    }

    /// Swap in a new list and return to the first item.
    pub fn replace(&mut self, items: impl Into<Arc<[T]>>) {
        self.items = items.into();
        self.index = 0;
        self.touch();
    }

    /// Mark the position as set by hand, invalidating pending advances.
    pub(crate) const fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advance only if nothing moved the carousel since `generation`.
    ///
    /// Returns whether the index moved.
    pub(crate) fn advance_from(&mut self, generation: u64) -> bool {
        if self.generation != generation || !self.rotates() {
            return false;
        }
        self.advance();
        true
    }
}
