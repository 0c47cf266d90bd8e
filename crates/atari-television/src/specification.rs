//! Television specifications.
//!
//! Both standards share the TIA's horizontal timing (228 colour clocks per
//! scanline, 68 of them in HBLANK). They differ in scanline count, ideal
//! frame layout, frame rate and colour decoding.
//!
//! | | NTSC | PAL |
//! |---|---|---|
//! | scanlines | 262 | 312 |
//! | VSYNC | 3 | 3 |
//! | VBLANK | 37 | 45 |
//! | overscan | 30 | 36 |
//! | frame rate | 60 Hz | 50 Hz |

use std::fmt;
use std::str::FromStr;

use crate::error::TvError;
use crate::palette::{NTSC_PALETTE, PAL_PALETTE};
use crate::signal::ColorSignal;

/// Colour clocks per scanline.
pub const CLOCKS_PER_SCANLINE: i32 = 228;
/// Colour clocks per horizontal blank.
pub const CLOCKS_PER_HBLANK: i32 = 68;
/// Colour clocks in the visible part of a scanline.
pub const CLOCKS_PER_VISIBLE: i32 = CLOCKS_PER_SCANLINE - CLOCKS_PER_HBLANK;

/// Horizontal position forced on the rising edge of HSYNC.
pub const HSYNC_FRONT: i32 = 16;
/// Horizontal position forced on the falling edge of HSYNC.
pub const HSYNC_BACK: i32 = 32;

/// Identifies one of the two supported standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecId {
    Ntsc,
    Pal,
}

impl SpecId {
    /// The static specification for this standard.
    #[must_use]
    pub fn spec(self) -> &'static Specification {
        match self {
            Self::Ntsc => &SPEC_NTSC,
            Self::Pal => &SPEC_PAL,
        }
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ntsc => write!(f, "NTSC"),
            Self::Pal => write!(f, "PAL"),
        }
    }
}

/// The specification a caller asks the television to use.
///
/// `Auto` starts as NTSC and allows a single flip to PAL if the picture
/// looks like it was generated for a PAL set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecRequest {
    Ntsc,
    Pal,
    #[default]
    Auto,
}

impl SpecRequest {
    /// The specification in effect immediately after the request is applied.
    #[must_use]
    pub fn initial(self) -> &'static Specification {
        match self {
            Self::Ntsc | Self::Auto => &SPEC_NTSC,
            Self::Pal => &SPEC_PAL,
        }
    }
}

impl FromStr for SpecRequest {
    type Err = TvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NTSC" => Ok(Self::Ntsc),
            "PAL" => Ok(Self::Pal),
            "AUTO" => Ok(Self::Auto),
            _ => Err(TvError::UnsupportedSpec(s.to_string())),
        }
    }
}

impl fmt::Display for SpecRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ntsc => write!(f, "NTSC"),
            Self::Pal => write!(f, "PAL"),
            Self::Auto => write!(f, "AUTO"),
        }
    }
}

/// Constant description of a television standard.
#[derive(Debug, PartialEq)]
pub struct Specification {
    pub id: SpecId,
    pub scanlines_total: i32,
    pub scanlines_per_vsync: i32,
    pub scanlines_per_vblank: i32,
    pub scanlines_per_overscan: i32,
    pub clocks_per_scanline: i32,
    pub clocks_per_hblank: i32,
    /// Width of an ideal VSYNC pulse in colour clocks.
    pub vsync_clocks: i32,
    pub frames_per_second: f32,
    palette: &'static [u32; 128],
}

impl Specification {
    /// First scanline of the ideal visible picture.
    #[must_use]
    pub const fn scanline_top(&self) -> i32 {
        self.scanlines_per_vsync + self.scanlines_per_vblank
    }

    /// First scanline after the ideal visible picture.
    #[must_use]
    pub const fn scanline_bottom(&self) -> i32 {
        self.scanlines_total - self.scanlines_per_overscan
    }

    /// Decode a colour signal to an RGB triple. Video black for a blanked
    /// signal.
    #[must_use]
    pub fn color(&self, signal: ColorSignal) -> (u8, u8, u8) {
        match signal {
            ColorSignal::VideoBlack => (0, 0, 0),
            ColorSignal::Color(index) => {
                let rgb = self.palette[usize::from(index) & 0x7F];
                ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
            }
        }
    }
}

pub static SPEC_NTSC: Specification = Specification {
    id: SpecId::Ntsc,
    scanlines_total: 262,
    scanlines_per_vsync: 3,
    scanlines_per_vblank: 37,
    scanlines_per_overscan: 30,
    clocks_per_scanline: CLOCKS_PER_SCANLINE,
    clocks_per_hblank: CLOCKS_PER_HBLANK,
    vsync_clocks: 3 * CLOCKS_PER_SCANLINE,
    frames_per_second: 60.0,
    palette: &NTSC_PALETTE,
};

pub static SPEC_PAL: Specification = Specification {
    id: SpecId::Pal,
    scanlines_total: 312,
    scanlines_per_vsync: 3,
    scanlines_per_vblank: 45,
    scanlines_per_overscan: 36,
    clocks_per_scanline: CLOCKS_PER_SCANLINE,
    clocks_per_hblank: CLOCKS_PER_HBLANK,
    vsync_clocks: 3 * CLOCKS_PER_SCANLINE,
    frames_per_second: 50.0,
    palette: &PAL_PALETTE,
};

#[cfg(feature = "serde")]
pub(crate) mod by_id {
    //! Serialise a `&'static Specification` as its id.

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{SpecId, Specification};

    pub fn serialize<S: Serializer>(
        spec: &&'static Specification,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        spec.id.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<&'static Specification, D::Error> {
        Ok(SpecId::deserialize(deserializer)?.spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_frame_layout_adds_up() {
        for spec in [&SPEC_NTSC, &SPEC_PAL] {
            let visible = spec.scanline_bottom() - spec.scanline_top();
            assert_eq!(
                spec.scanlines_per_vsync
                    + spec.scanlines_per_vblank
                    + visible
                    + spec.scanlines_per_overscan,
                spec.scanlines_total
            );
        }
        assert_eq!(SPEC_NTSC.scanline_bottom() - SPEC_NTSC.scanline_top(), 192);
        assert_eq!(SPEC_PAL.scanline_bottom() - SPEC_PAL.scanline_top(), 228);
    }

    #[test]
    fn spec_requests_parse_case_insensitively() {
        assert_eq!("ntsc".parse::<SpecRequest>().ok(), Some(SpecRequest::Ntsc));
        assert_eq!("Pal".parse::<SpecRequest>().ok(), Some(SpecRequest::Pal));
        assert_eq!("AUTO".parse::<SpecRequest>().ok(), Some(SpecRequest::Auto));
        assert!(matches!(
            "SECAM".parse::<SpecRequest>(),
            Err(TvError::UnsupportedSpec(s)) if s == "SECAM"
        ));
    }

    #[test]
    fn video_black_ignores_palette() {
        assert_eq!(SPEC_NTSC.color(ColorSignal::VideoBlack), (0, 0, 0));
        assert_eq!(SPEC_PAL.color(ColorSignal::VideoBlack), (0, 0, 0));
    }

    #[test]
    fn palette_lookup_splits_components() {
        // NTSC hue 4 (red), luminance 0
        assert_eq!(SPEC_NTSC.color(ColorSignal::Color(32)), (0x88, 0x00, 0x00));
        // Greys are the same on both standards' first row
        assert_eq!(SPEC_PAL.color(ColorSignal::Color(0)), (0, 0, 0));
        // Index wraps into the 7-bit range
        assert_eq!(
            SPEC_NTSC.color(ColorSignal::Color(0x80 | 32)),
            SPEC_NTSC.color(ColorSignal::Color(32))
        );
    }

    #[test]
    fn spec_ids_resolve_to_static_tables() {
        assert!(std::ptr::eq(SpecId::Ntsc.spec(), &SPEC_NTSC));
        assert!(std::ptr::eq(SpecId::Pal.spec(), &SPEC_PAL));
        assert!(std::ptr::eq(SpecRequest::Auto.initial(), &SPEC_NTSC));
    }
}
