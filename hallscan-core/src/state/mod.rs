//! State machine for the command loop
//!
//! The state machine is explicit, finite, and deterministic. The current
//! state is a field of the scan controller, not ambient global state.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
