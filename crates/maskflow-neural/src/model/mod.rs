//! Layer pipelines

pub mod sequential;

pub use sequential::MaskedSequential;
