pub mod alignment;
pub use alignment::{AlignmentResult, AlignmentStats};

pub mod sequence;
pub use sequence::Sequence;
