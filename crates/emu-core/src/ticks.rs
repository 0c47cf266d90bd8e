//! Colour clock counts.

/// Colour clocks per CPU cycle.
pub const CLOCKS_PER_CPU_CYCLE: u64 = 3;

/// A count of TIA colour clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticks(pub u64);

impl Ticks {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whole CPU cycles elapsed.
    #[must_use]
    pub const fn cpu_cycles(self) -> u64 {
        self.0 / CLOCKS_PER_CPU_CYCLE
    }

    /// Whether this colour clock is the first of a CPU cycle.
    #[must_use]
    pub const fn is_cpu_phase(self) -> bool {
        self.0 % CLOCKS_PER_CPU_CYCLE == 0
    }
}

impl core::ops::Add for Ticks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::AddAssign for Ticks {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl core::ops::Sub for Ticks {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}
