//! Atari TIA (Television Interface Adaptor).
//!
//! Horizontal timing of the 2600's video chip: the colour clock, HBLANK,
//! HSYNC and colour burst, the HMOVE extra-clock window and RSYNC. The chip
//! is stepped once per colour clock and sends one signal per step to a
//! television.
//!
//! # Timing
//!
//! - 228 colour clocks per scanline, 3 per CPU cycle
//! - HSYNC from clock 16 to 31, colour burst at 48
//! - HBLANK until clock 68, or 76 on a line with an HMOVE window
//! - Motion clock from 60 to 223
//!
//! Vertical timing is entirely up to the program, through VSYNC and
//! VBLANK.
//!
//! # Video objects
//!
//! Players, missiles, ball and playfield are behind the [`VideoCircuit`]
//! trait. [`Backdrop`] draws only the background colour.

mod audio;
mod hmove;
mod polycounter;
mod registers;
mod rsync;
mod tia;
mod video;

pub use audio::AudioLatch;
pub use hmove::{Hmove, STUFFED_CLOCKS};
pub use polycounter::Polycounter;
pub use registers::{Register, SYNC_MASK};
pub use rsync::Rsync;
pub use tia::{CLOCKS_PER_LINE, Tia};
pub use video::{Backdrop, VideoCircuit};
