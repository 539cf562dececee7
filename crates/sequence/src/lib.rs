mod error;
mod sequence;
mod stable_sort;
mod std_impls;
mod util;

pub use error::{Result, SequenceError};
pub use sequence::{Sequence, reduce};

#[derive(Clone, Copy, Debug)]
pub struct SortParams {
    /// Runs of at most this many elements are finished with binary insertion sort.
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: SortParams = SortParams {
    insertion_threshold: 24,
};
