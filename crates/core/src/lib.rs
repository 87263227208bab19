// crates/core/src/lib.rs
pub mod result;

pub use result::*;
