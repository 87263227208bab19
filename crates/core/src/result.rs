// crates/core/src/result.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingstoreError {
    #[error("Buffer error: remove() called on an empty buffer (capacity {capacity})")]
    EmptyBuffer { capacity: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RingstoreResult<T> = Result<T, RingstoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_message_names_capacity() {
        let err = RingstoreError::EmptyBuffer { capacity: 5 };
        assert_eq!(
            err.to_string(),
            "Buffer error: remove() called on an empty buffer (capacity 5)"
        );
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> RingstoreResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
            Ok(())
        }

        assert!(matches!(read(), Err(RingstoreError::Io(_))));
    }
}
