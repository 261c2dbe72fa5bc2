//! Forward iteration over the list. You'll rarely want to name this type
//! directly, [`DoublyLinkedList::iter`] hands it out readily.
//!
//! An ASCII diagram showing the initial situation for fun and profit:
//!
//! ```text
//!   node
//!      |
//!      v
//!   head <-> node <-> node <-> tail -> (None)
//! ```
//!
//! Each step yields the current node's value and hops one `next` link;
//! hitting `None` past the tail ends the iteration.
//!
//! [`DoublyLinkedList::iter`]: crate::DoublyLinkedList::iter

use std::marker::PhantomData;

use crate::MaybePointer;

pub struct Iter<'list> {
    node: MaybePointer,
    _bound_to_list: PhantomData<&'list ()>,
}

impl<'list> Iter<'list> {
    /// # Safety
    ///
    /// `start` must be `None` or point at a live node of a list that
    /// outlives `'list` and is not mutated while this iterator exists.
    pub(crate) unsafe fn new(start: MaybePointer) -> Self {
        Self {
            node: start,
            _bound_to_list: PhantomData,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        // SAFETY: delegated to the contract of `Iter::new` --- the borrow
        //         held by `_bound_to_list` keeps the links from changing
        let current = unsafe { self.node?.as_ref() };
        self.node = current.next;
        Some(current.data)
    }
}
