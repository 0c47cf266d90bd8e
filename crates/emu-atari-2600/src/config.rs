//! Machine configuration.

use std::fmt;
use std::str::FromStr;

use atari_television::SpecRequest;

/// Frame layout a kernel is written for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KernelStandard {
    /// 262 scanlines: 3 VSYNC, 37 VBLANK, 192 picture, 30 overscan.
    #[default]
    Ntsc,
    /// 312 scanlines: 3 VSYNC, 45 VBLANK, 228 picture, 36 overscan.
    Pal,
}

impl FromStr for KernelStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ntsc" => Ok(Self::Ntsc),
            "pal" => Ok(Self::Pal),
            other => Err(format!("unknown kernel standard: {other}")),
        }
    }
}

impl fmt::Display for KernelStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ntsc => write!(f, "ntsc"),
            Self::Pal => write!(f, "pal"),
        }
    }
}

/// What the scripted kernel draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelConfig {
    pub vsync_lines: u32,
    pub vblank_lines: u32,
    pub picture_lines: u32,
    pub overscan_lines: u32,
    /// Write HMOVE at the start of every picture line.
    pub hmove: bool,
    /// Background colour of the first picture line. Each following line
    /// steps one luminance.
    pub base_color: u8,
}

impl KernelConfig {
    #[must_use]
    pub const fn for_standard(standard: KernelStandard) -> Self {
        match standard {
            KernelStandard::Ntsc => Self {
                vsync_lines: 3,
                vblank_lines: 37,
                picture_lines: 192,
                overscan_lines: 30,
                hmove: false,
                base_color: 0x10,
            },
            KernelStandard::Pal => Self {
                vsync_lines: 3,
                vblank_lines: 45,
                picture_lines: 228,
                overscan_lines: 36,
                hmove: false,
                base_color: 0x20,
            },
        }
    }

    /// Scanlines per frame.
    #[must_use]
    pub const fn total_lines(&self) -> u32 {
        self.vsync_lines + self.vblank_lines + self.picture_lines + self.overscan_lines
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::for_standard(KernelStandard::Ntsc)
    }
}

/// Machine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineConfig {
    /// Television specification. Defaults to auto-detect.
    pub spec: SpecRequest,
    pub kernel: KernelConfig,
    /// Frame-rate limit. `None` follows the television specification.
    pub fps: Option<f32>,
    /// Run as fast as possible.
    pub uncapped: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            spec: SpecRequest::Auto,
            kernel: KernelConfig::default(),
            fps: None,
            uncapped: false,
        }
    }
}
