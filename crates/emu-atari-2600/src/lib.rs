//! Atari 2600 video chain.
//!
//! The TIA runs off the 3.58 MHz colour clock (NTSC) and the 6507 CPU at a
//! third of that, so one 228-clock scanline is 76 CPU cycles. This crate
//! drives the chip from a scripted kernel in place of a cartridge and feeds
//! its output to a television.
//!
//! One NTSC frame = 228 colour clocks × 262 scanlines = 59,736 colour clocks.

mod audio_log;
pub mod capture;
mod config;
mod kernel;
mod machine;

pub use audio_log::{AudioLog, AudioSummary};
pub use config::{KernelConfig, KernelStandard, MachineConfig};
pub use kernel::Kernel;
pub use machine::{Machine, Screen};
