use thiserror::Error;

pub type Result<T> = std::result::Result<T, SequenceError>;

#[non_exhaustive]
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SequenceError {
    /// Positional read past the end of the sequence.
    #[error("index {index} is out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl SequenceError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, SequenceError::IndexOutOfBounds { .. })
    }
}
