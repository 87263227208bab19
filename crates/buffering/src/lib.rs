// crates/buffering/src/lib.rs

pub mod ring_buffer;

pub use ring_buffer::RingBuffer;
pub use ringstore_core::{RingstoreError, RingstoreResult};
