//! The signal sent from the TIA to the television, one per colour clock.

use crate::error::TvError;

/// Colour carried by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSignal {
    /// Blanked: nothing is drawn.
    #[default]
    VideoBlack,
    /// Palette index (0-127).
    Color(u8),
}

impl ColorSignal {
    /// Colour signal for a TIA colour register value (bit 0 ignored).
    #[must_use]
    pub const fn from_register(value: u8) -> Self {
        Self::Color(value >> 1)
    }
}

/// Contents of the TIA audio registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioData {
    /// AUDC0/AUDC1: waveform (4 bits).
    pub control: [u8; 2],
    /// AUDF0/AUDF1: frequency divider (5 bits).
    pub freq: [u8; 2],
    /// AUDV0/AUDV1: volume (4 bits).
    pub volume: [u8; 2],
}

/// The attributes of one colour clock of TIA output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalAttributes {
    pub vsync: bool,
    pub vblank: bool,
    pub cburst: bool,
    pub hsync: bool,
    /// Set on the first colour clock of every TIA scanline. A real set
    /// recovers the line from HSYNC; the marker brings the front and back
    /// porches together so that scanlines count from the start of HBLANK.
    pub new_line: bool,
    pub pixel: ColorSignal,
    /// Present when an audio register was written since the last signal.
    pub audio: Option<AudioData>,
}

/// Anything that accepts the TIA's output.
///
/// Signals must arrive in the order the TIA generated them. An `Err` means
/// the signal sequence no longer makes sense and emulation must stop.
pub trait SignalSink {
    fn signal(&mut self, sig: SignalAttributes) -> Result<(), TvError>;
}
