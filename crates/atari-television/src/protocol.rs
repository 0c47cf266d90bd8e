//! Interfaces between the television and the things that consume it.
//!
//! The television does not present anything itself. Renderers, refreshers,
//! frame triggers and mixers are registered with it and called
//! synchronously, in registration order, while a signal is processed. They
//! receive copies of coordinates and colours; nothing they are given refers
//! back into the television's buffers.

use std::fmt;
use std::str::FromStr;

use crate::error::TvError;
use crate::signal::AudioData;
use crate::specification::Specification;

/// Notified at the start of every frame.
pub trait FrameTrigger {
    /// `stable` is true once the television considers the picture stable.
    fn new_frame(&mut self, frame_num: i32, stable: bool) -> Result<(), TvError>;
}

/// Works with the visual output of the television.
///
/// `set_pixel` is called on every colour clock regardless of HBLANK and
/// VBLANK. `x` counts from the start of HBLANK, so renderers decide for
/// themselves what to do with `x < CLOCKS_PER_HBLANK`. Some ROMs (Custer's
/// Revenge, Ladybug) use VBLANK to colour parts of the visible picture, so
/// the flag is passed along rather than acted upon.
pub trait PixelRenderer {
    /// The visible window has changed, or the specification has.
    ///
    /// Renderers should prefer these values to the specification's ideal
    /// ones.
    fn resize(
        &mut self,
        spec: &'static Specification,
        top_scanline: i32,
        visible_scanlines: i32,
    ) -> Result<(), TvError>;

    fn new_frame(&mut self, frame_num: i32) -> Result<(), TvError>;

    fn new_scanline(&mut self, scanline: i32) -> Result<(), TvError>;

    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        red: u8,
        green: u8,
        blue: u8,
        vblank: bool,
    ) -> Result<(), TvError>;

    fn end_rendering(&mut self) -> Result<(), TvError> {
        Ok(())
    }
}

/// Redraws a frame from the television's signal history after a restore.
pub trait PixelRefresher {
    /// Called with `true` before the first pixel and `false` after the last.
    fn refresh(&mut self, begin: bool);

    /// `not_yet_reached` is true for history entries at or beyond the
    /// restored write cursor: they belong to the previous frame and have not
    /// been redrawn by the current one yet.
    fn refresh_pixel(
        &mut self,
        x: i32,
        y: i32,
        red: u8,
        green: u8,
        blue: u8,
        vblank: bool,
        not_yet_reached: bool,
    );
}

/// Works with the audio output of the television.
pub trait AudioMixer {
    fn set_audio(&mut self, audio: AudioData) -> Result<(), TvError>;

    fn end_mixing(&mut self) -> Result<(), TvError> {
        Ok(())
    }
}

/// Television attributes that can be requested with `get_state()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateReq {
    FrameNum,
    Scanline,
    HorizPos,
}

impl FromStr for StateReq {
    type Err = TvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frame" | "framenum" => Ok(Self::FrameNum),
            "scanline" => Ok(Self::Scanline),
            "horizpos" | "hp" => Ok(Self::HorizPos),
            _ => Err(TvError::UnsupportedRequest(s.to_string())),
        }
    }
}

impl fmt::Display for StateReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameNum => write!(f, "frame"),
            Self::Scanline => write!(f, "scanline"),
            Self::HorizPos => write!(f, "horizpos"),
        }
    }
}
