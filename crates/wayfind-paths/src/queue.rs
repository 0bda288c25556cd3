//! Binary min-heap priority queue.
//!
//! Items are stored in a dense `Vec` laid out as an implicit binary tree.
//! Lower priorities are dequeued first. There is no decrease-priority
//! operation: a search that finds a cheaper route simply enqueues the item
//! again, and the outdated entry is discarded when it surfaces.

use std::fmt;

/// Errors returned by [`PriorityQueue::try_dequeue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no items.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "priority queue: dequeue on empty queue"),
        }
    }
}

impl std::error::Error for QueueError {}

#[derive(Debug, Clone)]
struct Element<T> {
    item: T,
    priority: f32,
}

/// A min-heap keyed by an `f32` priority.
///
/// Ordering among equal priorities is determined by the heap layout: a new
/// item only rises above its parent when strictly smaller, and when sifting
/// down the left child wins ties. Priorities must not be NaN.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    elements: Vec<Element<T>>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of items in the queue, stale duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove every item, keeping the allocation.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Insert `item` with the given priority.
    pub fn enqueue(&mut self, item: T, priority: f32) {
        self.elements.push(Element { item, priority });
        let mut index = self.elements.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.elements[index].priority >= self.elements[parent].priority {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    /// Remove and return the minimum-priority item.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Check [`is_empty`](Self::is_empty)
    /// first, or use [`try_dequeue`](Self::try_dequeue).
    pub fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }

    /// Remove and return the minimum-priority item, or
    /// [`QueueError::Empty`].
    pub fn try_dequeue(&mut self) -> Result<T, QueueError> {
        if self.elements.is_empty() {
            return Err(QueueError::Empty);
        }
        // Moves the last element into the root slot.
        let best = self.elements.swap_remove(0);
        self.sift_down(0);
        Ok(best.item)
    }

    /// The minimum-priority item and its priority, without removing it.
    pub fn peek(&self) -> Option<(&T, f32)> {
        self.elements.first().map(|e| (&e.item, e.priority))
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let mut child = index * 2 + 1;
            if child >= len {
                break;
            }
            let right = child + 1;
            if right < len && self.elements[right].priority < self.elements[child].priority {
                child = right;
            }
            if self.elements[index].priority <= self.elements[child].priority {
                break;
            }
            self.elements.swap(index, child);
            index = child;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
