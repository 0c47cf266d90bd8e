//! Colour clock counter.
//!
//! The real TIA counts with a 6-bit linear feedback shift register that
//! advances every four colour clocks. Only the count matters to everything
//! downstream, so this is a plain modulo counter.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polycounter {
    count: u8,
    reset_point: u8,
}

impl Polycounter {
    #[must_use]
    pub const fn new(reset_point: u8) -> Self {
        Self {
            count: 0,
            reset_point,
        }
    }

    /// Advance one step. True if the count has just wrapped to zero.
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.reset_point {
            self.count = 0;
            return true;
        }
        false
    }

    #[must_use]
    pub const fn matches(&self, n: u8) -> bool {
        self.count == n
    }

    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
