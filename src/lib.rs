
pub mod iter;

use std::{fmt, ptr::NonNull};

pub(crate) type MaybePointer = Option<NonNull<Node>>;

pub(crate) struct Node {
    pub(crate) data: i32,
    pub(crate) prev: MaybePointer,
    pub(crate) next: MaybePointer,
}

/// A doubly linked list of integers tracking both of its ends, so pushing
/// and popping at either end is _O_(1).
///
/// The `next` pointers form the owning forward chain; `prev` pointers are
/// back-references used only for traversal and unlinking. Both ends of the
/// chain are `None`, there are no sentinel nodes.
pub struct DoublyLinkedList {
    pub(crate) head: MaybePointer,
    pub(crate) tail: MaybePointer,
    len: usize,
}

impl DoublyLinkedList {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value at the head without removing it.
    pub fn front(&self) -> Option<i32> {
        // SAFETY: `head` only ever holds pointers from `allocate`,
        //         which stay valid until the node is popped
        self.head.map(|node| unsafe { node.as_ref().data })
    }

    /// Returns the value at the tail without removing it.
    pub fn back(&self) -> Option<i32> {
        // SAFETY: same argument as in `front`
        self.tail.map(|node| unsafe { node.as_ref().data })
    }

    /// Iterates over the values from head to tail. The iterator borrows the
    /// list, so calling this repeatedly yields the same sequence each time.
    pub fn iter(&self) -> iter::Iter<'_> {
        // SAFETY: `head` points at a live node (or is `None`), and `Iter`
        //         is bound to this borrow --- it cannot outlive the list
        unsafe { iter::Iter::new(self.head) }
    }

    /// Makes `data` the new first element.
    pub fn push_front(&mut self, data: i32) {
        let new_head = allocate(Node {
            data,
            prev: None,
            next: self.head,
        });

        match self.head {
            // SAFETY: `head` only ever holds pointers from `allocate`,
            //         links are only rewired while holding `&mut self`
            Some(old_head) => unsafe { (*old_head.as_ptr()).prev = Some(new_head) },
            None => self.tail = Some(new_head),
        }

        self.head = Some(new_head);
        self.len += 1;
    }

    /// Makes `data` the new last element.
    pub fn push_back(&mut self, data: i32) {
        let new_tail = allocate(Node {
            data,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            // SAFETY: same argument as in `push_front`
            Some(old_tail) => unsafe { (*old_tail.as_ptr()).next = Some(new_tail) },
            None => self.head = Some(new_tail),
        }

        self.tail = Some(new_tail);
        self.len += 1;
    }

    /// Removes the first element and returns its value, or `None` if the
    /// list is empty. Popping an empty list is not an error.
    pub fn pop_front(&mut self) -> Option<i32> {
        let old_head = self.head?;
        // SAFETY: the pointer came from `allocate` and is unlinked below,
        //         so this box is the only remaining owner
        let node = unsafe { Box::from_raw(old_head.as_ptr()) };

        self.head = node.next;
        match self.head {
            // SAFETY: a node reachable via `next` is live, see `push_front`
            Some(new_head) => unsafe { (*new_head.as_ptr()).prev = None },
            None => self.tail = None,
        }

        self.len -= 1;
        Some(node.data)
    }

    /// Removes the last element and returns its value, or `None` if the
    /// list is empty.
    pub fn pop_back(&mut self) -> Option<i32> {
        let old_tail = self.tail?;
        // SAFETY: same argument as in `pop_front`
        let node = unsafe { Box::from_raw(old_tail.as_ptr()) };

        self.tail = node.prev;
        match self.tail {
            // SAFETY: a node reachable via `prev` is live, see `push_back`
            Some(new_tail) => unsafe { (*new_tail.as_ptr()).next = None },
            None => self.head = None,
        }

        self.len -= 1;
        Some(node.data)
    }

    /// Returns the zero-based position of the first element equal to
    /// `query`, scanning from head to tail, or `None` if no element
    /// matches. An empty list is a miss without looking at any node.
    pub fn find(&self, query: i32) -> Option<usize> {
        self.iter().position(|data| data == query)
    }
}

fn allocate(node: Node) -> NonNull<Node> {
    let ptr = Box::into_raw(Box::new(node));
    // SAFETY: `Box::into_raw` always returns a non-null pointer according to the docs
    unsafe { NonNull::new_unchecked(ptr) }
}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for DoublyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DoublyLinkedList {
    fn drop(&mut self) {
        // every node was boxed in `allocate`, popping hands each box
        // back exactly once
        while self.pop_front().is_some() {}
    }
}
