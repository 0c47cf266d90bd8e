//! Television tuning.
//!
//! The thresholds here were tuned against real cartridges (Pitfall, H.E.R.O.,
//! Ladybug, Communist Mutants From Space and friends). They are exposed so
//! they can be adjusted against a reference ROM, not so they can be derived.

/// Additional scanlines over the NTSC total tolerated before an auto
/// television flips to PAL.
pub const EXCESS_SCANLINES_NTSC: i32 = 40;

/// Synced frames during which the picture is expected to be in flux.
pub const LEADING_FRAMES: i32 = 5;

/// Synced frames required before the picture is considered stable.
pub const STABILITY_THRESHOLD: i32 = 20;

/// Consistent frames required before a new screen geometry is committed.
pub const RESIZE_THRESHOLD: u32 = 6;

/// Television tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TvConfig {
    pub excess_scanlines_ntsc: i32,
    pub leading_frames: i32,
    pub stability_threshold: i32,
    pub resize_threshold: u32,
}

impl Default for TvConfig {
    fn default() -> Self {
        Self {
            excess_scanlines_ntsc: EXCESS_SCANLINES_NTSC,
            leading_frames: LEADING_FRAMES,
            stability_threshold: STABILITY_THRESHOLD,
            resize_threshold: RESIZE_THRESHOLD,
        }
    }
}

impl TvConfig {
    /// Whether a synced-frame count lies inside the window in which the
    /// specification may still change.
    #[must_use]
    pub fn in_auto_detect_window(&self, synced_frames: i32) -> bool {
        synced_frames > self.leading_frames && synced_frames < self.stability_threshold
    }
}
