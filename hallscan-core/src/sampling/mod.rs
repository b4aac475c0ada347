//! Step-and-sample sweep

pub mod engine;

pub use engine::{target_position, ReadingSequence, SamplingEngine, TargetPositions};
