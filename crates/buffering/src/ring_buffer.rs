// crates/buffering/src/ring_buffer.rs

use ringstore_core::{RingstoreError, RingstoreResult};
use std::fmt;
use tracing::{debug, trace};

/// Fixed-capacity FIFO that drops its oldest entry when written while full.
///
/// The backing slice holds `capacity + 1` slots, so `head == tail` only ever
/// means empty: a full buffer always leaves exactly one slot unoccupied.
pub struct RingBuffer<T> {
    buffer: Box<[Option<T>]>,
    head: usize,
    tail: usize,
}

impl<T> RingBuffer<T> {
    /// Allocates storage for `capacity` elements. The storage is never resized.
    ///
    /// A capacity of zero is accepted; every `add` is then evicted immediately.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is `usize::MAX`, since the reserved slot cannot be
    /// counted.
    pub fn new(capacity: usize) -> Self {
        let slots = capacity
            .checked_add(1)
            .expect("ring buffer capacity leaves no room for the reserved slot");
        let buffer = std::iter::repeat_with(|| None).take(slots).collect();

        Self {
            buffer,
            head: 0,
            tail: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len() - 1
    }

    pub fn empty(&self) -> bool {
        self.head == self.tail
    }

    pub fn size(&self) -> usize {
        let slots = self.buffer.len();
        (self.head + slots - self.tail) % slots
    }

    pub fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Appends `item`. On a full buffer the oldest element is dropped to make
    /// room; this never fails.
    pub fn add(&mut self, item: T) {
        self.buffer[self.head] = Some(item);
        self.head = self.advance(self.head);

        if self.head == self.tail {
            // Drop oldest entry, keep rest.
            self.buffer[self.tail] = None;
            self.tail = self.advance(self.tail);
            trace!(capacity = self.capacity(), "ring buffer full, evicted oldest entry");
        }
    }

    /// Removes and returns the oldest element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty. Check [`empty`](Self::empty) first, or
    /// use [`try_remove`](Self::try_remove).
    pub fn remove(&mut self) -> T {
        match self.try_remove() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_remove(&mut self) -> RingstoreResult<T> {
        let item = if self.empty() {
            None
        } else {
            self.buffer[self.tail].take()
        };

        let item = item.ok_or_else(|| RingstoreError::EmptyBuffer {
            capacity: self.capacity(),
        })?;
        self.tail = self.advance(self.tail);

        Ok(item)
    }

    /// Drops every stored element and resets both indices to zero.
    pub fn clear(&mut self) {
        let dropped = self.size();

        while self.tail != self.head {
            self.buffer[self.tail] = None;
            self.tail = self.advance(self.tail);
        }

        self.head = 0;
        self.tail = 0;
        debug!(dropped, capacity = self.capacity(), "cleared ring buffer");
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.buffer.len()
    }
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("size", &self.size())
            .finish()
    }
}
