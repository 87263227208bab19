pub mod app;
pub mod logging;

pub use app::{RingstoreApp, RunSummary};
pub use ringstore_buffering::RingBuffer;
pub use ringstore_config::{BufferSettings, RingstoreConfig};
pub use ringstore_core::{RingstoreError, RingstoreResult};
