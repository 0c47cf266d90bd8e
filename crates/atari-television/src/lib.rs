//! Television for the Atari 2600's TIA.
//!
//! The TIA emits one signal per colour clock: sync and blanking flags, a
//! colour, and occasionally new audio register contents. A television
//! interprets that stream the way a real set would, recovering scanlines
//! from HSYNC and frames from VSYNC, and hands the picture and sound to
//! registered renderers and mixers.
//!
//! Two televisions are provided. [`Television`] is the full reference
//! implementation, with NTSC/PAL auto-detection, screen-size stabilisation,
//! a frame-rate limiter and a signal history that supports snapshots.
//! [`HeadlessTelevision`] only counts frames.
//!
//! ```
//! use atari_television::pattern::{Line, SignalPattern};
//! use atari_television::{SignalSink, SpecRequest, StateReq, Television};
//!
//! let mut tv = Television::new(SpecRequest::Auto);
//! tv.set_fps_cap(false);
//! let mut pattern = SignalPattern::new();
//! for sig in pattern.scanline(Line::picture(0x1E)) {
//!     tv.signal(sig)?;
//! }
//! assert_eq!(tv.get_state(StateReq::Scanline), 1);
//! # Ok::<(), atari_television::TvError>(())
//! ```

mod config;
mod error;
mod headless;
mod history;
mod limiter;
mod palette;
pub mod pattern;
mod protocol;
mod resizer;
mod signal;
mod specification;
mod sync;
mod television;

pub use config::{
    EXCESS_SCANLINES_NTSC, LEADING_FRAMES, RESIZE_THRESHOLD, STABILITY_THRESHOLD, TvConfig,
};
pub use error::TvError;
pub use headless::HeadlessTelevision;
pub use history::{HistoryEntry, SignalHistory};
pub use limiter::Limiter;
pub use palette::{NTSC_PALETTE, PAL_PALETTE};
pub use protocol::{AudioMixer, FrameTrigger, PixelRefresher, PixelRenderer, StateReq};
pub use resizer::{Geometry, Resizer};
pub use signal::{AudioData, ColorSignal, SignalAttributes, SignalSink};
pub use specification::{
    CLOCKS_PER_HBLANK, CLOCKS_PER_SCANLINE, CLOCKS_PER_VISIBLE, HSYNC_BACK, HSYNC_FRONT, SPEC_NTSC,
    SPEC_PAL, SpecId, SpecRequest, Specification,
};
pub use sync::{Decoded, Flyback, SyncDecoder};
pub use television::{Television, TvState};
