//! Audio register latch.
//!
//! Sound generation happens in the mixer; the chip only records register
//! writes and passes the full register set along with the next signal.

use atari_television::AudioData;

use crate::registers::Register;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioLatch {
    regs: AudioData,
    dirty: bool,
}

impl AudioLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a write. Ignores registers that aren't audio registers.
    pub fn write(&mut self, register: Register, value: u8) {
        match register {
            Register::Audc0 => self.regs.control[0] = value & 0x0F,
            Register::Audc1 => self.regs.control[1] = value & 0x0F,
            Register::Audf0 => self.regs.freq[0] = value & 0x1F,
            Register::Audf1 => self.regs.freq[1] = value & 0x1F,
            Register::Audv0 => self.regs.volume[0] = value & 0x0F,
            Register::Audv1 => self.regs.volume[1] = value & 0x0F,
            _ => return,
        }
        self.dirty = true;
    }

    /// The registers, if written since the last call.
    pub fn take(&mut self) -> Option<AudioData> {
        std::mem::take(&mut self.dirty).then_some(self.regs)
    }

    #[must_use]
    pub fn registers(&self) -> AudioData {
        self.regs
    }
}
