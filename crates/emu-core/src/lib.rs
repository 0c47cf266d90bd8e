//! Shared types for the Atari 2600 video chain.
//!
//! Everything is counted in TIA colour clocks. The CPU runs at a third of
//! that rate and the television consumes one signal per colour clock.

mod observable;
mod ticks;

pub use observable::{Observable, Value};
pub use ticks::Ticks;
