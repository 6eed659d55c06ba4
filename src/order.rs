//! Recency list backed by a slot arena.
//!
//! Stores list nodes in a growable arena (`Vec` of slots with a free-list)
//! and links them by `NodeId`, so the cache index can hold stable integer
//! handles instead of pointers while every reorder stays O(1).
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Option<Node<T>>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ NodeId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ 0      │ { value: A, prev: None, next: Some(1) }     │
//!   │ 1      │ { value: B, prev: Some(0), next: Some(2) }  │
//!   │ 2      │ { value: C, prev: Some(1), next: None }     │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [0] ◄──► [1] ◄──► [2] ◄── tail
//!          (MRU)              (LRU)
//! ```
//!
//! Removed slots go on the free-list and are reused by later insertions, so
//! a cache running at capacity allocates no new slots in steady state.
//!
//! ## Operations
//! - `push_front(value)`: O(1), returns a stable `NodeId`
//! - `move_to_front(id)`: O(1) detach + reattach
//! - `pop_back()` / `remove(id)`: O(1), slot returned to the free-list
//! - `iter()` / `iter_ids()`: O(n) front-to-back traversal
//!
//! `debug_validate()` is available in debug/test builds.

/// Stable handle to a node in a [`RecencyList`].
///
/// Handles stay valid across any number of reorders and are only
/// invalidated when their node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the underlying slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly-linked recency order over arena-allocated nodes.
///
/// Front is the most-recently-used position, back the least-recently-used.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `id` currently names a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the value at the front (MRU) of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the `NodeId` at the front (MRU) of the list.
    pub fn front_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the value at the back (LRU) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the `NodeId` at the back (LRU) of the list.
    pub fn back_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the value for a node id, if live.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if live.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the front and returns its `NodeId`.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => {
                if let Some(node) = self.node_mut(old_head) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Removes and returns the back (LRU) value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.detach(id)?;
        let node = self.release(id)?;
        self.len -= 1;
        Some(node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not live.
    pub fn move_to_front(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator over values from front (MRU) to back (LRU).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator over `NodeId`s from front (MRU) to back (LRU).
    pub fn iter_ids(&self) -> IterIds<'_, T> {
        IterIds {
            list: self,
            current: self.head,
        }
    }

    #[inline]
    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            },
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id.index())?;
        let node = slot.take()?;
        self.free.push(id.0);
        Some(node)
    }

    /// Unlinks `id` from its neighbors without freeing the slot.
    fn detach(&mut self, id: NodeId) -> Option<()> {
        let (prev, next) = {
            let node = self.node(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.node_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.node_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: NodeId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        } else {
            return;
        }
        match old_head {
            Some(old_head) => {
                if let Some(head_node) = self.node_mut(old_head) {
                    head_node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if the link structure is inconsistent with `len`.
    pub fn debug_validate(&self) {
        if self.len == 0 {
            debug_assert!(self.head.is_none());
            debug_assert!(self.tail.is_none());
            return;
        }

        let mut count = 0usize;
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = match self.node(id) {
                Some(node) => node,
                None => panic!("dangling link to freed slot {}", id.index()),
            };
            debug_assert_eq!(node.prev, prev);
            count += 1;
            if count > self.len {
                panic!("cycle detected in recency list");
            }
            prev = Some(id);
            current = node.next;
        }

        debug_assert_eq!(count, self.len);
        debug_assert_eq!(self.tail, prev);
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back value iterator over a [`RecencyList`].
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.current?;
        let node = self.list.node(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// Front-to-back `NodeId` iterator over a [`RecencyList`].
pub struct IterIds<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<NodeId>,
}

impl<T> Iterator for IterIds<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.list.node(id).and_then(|node| node.next);
        Some(id)
    }
}
