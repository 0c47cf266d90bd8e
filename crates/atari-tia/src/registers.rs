//! TIA write registers.
//!
//! The TIA decodes the low six address lines, so the register file repeats
//! throughout its address range.

/// VSYNC and VBLANK both use bit 1.
pub const SYNC_MASK: u8 = 0x02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Vsync,
    Vblank,
    Wsync,
    Rsync,
    Nusiz0,
    Nusiz1,
    Colup0,
    Colup1,
    Colupf,
    Colubk,
    Ctrlpf,
    Refp0,
    Refp1,
    Pf0,
    Pf1,
    Pf2,
    Resp0,
    Resp1,
    Resm0,
    Resm1,
    Resbl,
    Audc0,
    Audc1,
    Audf0,
    Audf1,
    Audv0,
    Audv1,
    Grp0,
    Grp1,
    Enam0,
    Enam1,
    Enabl,
    Hmp0,
    Hmp1,
    Hmm0,
    Hmm1,
    Hmbl,
    Vdelp0,
    Vdelp1,
    Vdelbl,
    Resmp0,
    Resmp1,
    Hmove,
    Hmclr,
    Cxclr,
}

impl Register {
    /// Decode a CPU write address. `None` for the unused top of the range.
    #[must_use]
    pub fn from_address(address: u16) -> Option<Self> {
        Some(match address & 0x3F {
            0x00 => Self::Vsync,
            0x01 => Self::Vblank,
            0x02 => Self::Wsync,
            0x03 => Self::Rsync,
            0x04 => Self::Nusiz0,
            0x05 => Self::Nusiz1,
            0x06 => Self::Colup0,
            0x07 => Self::Colup1,
            0x08 => Self::Colupf,
            0x09 => Self::Colubk,
            0x0A => Self::Ctrlpf,
            0x0B => Self::Refp0,
            0x0C => Self::Refp1,
            0x0D => Self::Pf0,
            0x0E => Self::Pf1,
            0x0F => Self::Pf2,
            0x10 => Self::Resp0,
            0x11 => Self::Resp1,
            0x12 => Self::Resm0,
            0x13 => Self::Resm1,
            0x14 => Self::Resbl,
            0x15 => Self::Audc0,
            0x16 => Self::Audc1,
            0x17 => Self::Audf0,
            0x18 => Self::Audf1,
            0x19 => Self::Audv0,
            0x1A => Self::Audv1,
            0x1B => Self::Grp0,
            0x1C => Self::Grp1,
            0x1D => Self::Enam0,
            0x1E => Self::Enam1,
            0x1F => Self::Enabl,
            0x20 => Self::Hmp0,
            0x21 => Self::Hmp1,
            0x22 => Self::Hmm0,
            0x23 => Self::Hmm1,
            0x24 => Self::Hmbl,
            0x25 => Self::Vdelp0,
            0x26 => Self::Vdelp1,
            0x27 => Self::Vdelbl,
            0x28 => Self::Resmp0,
            0x29 => Self::Resmp1,
            0x2A => Self::Hmove,
            0x2B => Self::Hmclr,
            0x2C => Self::Cxclr,
            _ => return None,
        })
    }

    #[must_use]
    pub fn is_audio(self) -> bool {
        matches!(
            self,
            Self::Audc0 | Self::Audc1 | Self::Audf0 | Self::Audf1 | Self::Audv0 | Self::Audv1
        )
    }
}
