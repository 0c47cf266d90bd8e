//! The chip, its television and the kernel driving them.
//!
//! Ticks at the colour clock. The kernel gets a CPU cycle on every third
//! colour clock, unless WSYNC has pulled the chip's RDY line low.

use atari_television::{HeadlessTelevision, SignalSink, StateReq, Television, TvError};
use atari_tia::Tia;
use emu_core::{Observable, Ticks, Value};
use log::trace;

use crate::config::{KernelConfig, MachineConfig};
use crate::kernel::Kernel;

/// A television the machine can drive.
pub trait Screen: SignalSink + Observable {
    fn frame_num(&self) -> i32;
}

impl Screen for Television {
    fn frame_num(&self) -> i32 {
        self.get_state(StateReq::FrameNum)
    }
}

impl Screen for HeadlessTelevision {
    fn frame_num(&self) -> i32 {
        self.get_state(StateReq::FrameNum)
    }
}

pub struct Machine<T: Screen = Television> {
    tia: Tia,
    tv: T,
    kernel: Kernel,
    /// Colour clocks since power-on.
    clock: Ticks,
    /// RDY as last reported by the chip.
    ready: bool,
}

impl Machine<Television> {
    /// A machine with a reference television set up from `config`. Fails
    /// if the requested frame rate is unusable.
    pub fn new(config: &MachineConfig) -> Result<Self, TvError> {
        let mut tv = Television::new(config.spec);
        tv.set_fps(config.fps)?;
        tv.set_fps_cap(!config.uncapped);
        Ok(Self::with_television(config.kernel, tv))
    }
}

impl Machine<HeadlessTelevision> {
    #[must_use]
    pub fn headless(config: &MachineConfig) -> Self {
        Self::with_television(config.kernel, HeadlessTelevision::new(config.spec))
    }
}

impl<T: Screen> Machine<T> {
    #[must_use]
    pub fn with_television(kernel: KernelConfig, tv: T) -> Self {
        Self {
            tia: Tia::new(),
            tv,
            kernel: Kernel::new(kernel),
            clock: Ticks::ZERO,
            ready: true,
        }
    }

    /// One colour clock.
    pub fn step(&mut self) -> Result<(), TvError> {
        if self.ready
            && self.clock.is_cpu_phase()
            && let Some((register, value)) = self.kernel.cycle()
        {
            self.tia.write(register, value);
        }
        self.ready = self.tia.step(&mut self.tv)?;
        self.clock += Ticks::new(1);
        Ok(())
    }

    /// Run until the television starts a new frame.
    pub fn run_frame(&mut self) -> Result<(), TvError> {
        let frame = self.tv.frame_num();
        while self.tv.frame_num() == frame {
            self.step()?;
        }
        trace!(
            "machine: frame {} at colour clock {}",
            self.tv.frame_num(),
            self.clock.get()
        );
        Ok(())
    }

    #[must_use]
    pub fn tv(&self) -> &T {
        &self.tv
    }

    pub fn tv_mut(&mut self) -> &mut T {
        &mut self.tv
    }

    #[must_use]
    pub fn tia(&self) -> &Tia {
        &self.tia
    }

    #[must_use]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    #[must_use]
    pub fn clock(&self) -> Ticks {
        self.clock
    }
}

impl<T: Screen> Observable for Machine<T> {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("tia.") {
            return self.tia.query(rest);
        }
        if let Some(rest) = path.strip_prefix("tv.") {
            return self.tv.query(rest);
        }
        match path {
            "clock" => Some(self.clock.get().into()),
            "cpu_cycles" => Some(self.clock.cpu_cycles().into()),
            "ready" => Some(self.ready.into()),
            "kernel.line" => Some(self.kernel.line().into()),
            "kernel.frame" => Some(self.kernel.frame().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "clock",
            "cpu_cycles",
            "ready",
            "kernel.line",
            "kernel.frame",
            "tia.<path>",
            "tv.<path>",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KernelStandard;

    fn uncapped() -> MachineConfig {
        MachineConfig {
            uncapped: true,
            ..MachineConfig::default()
        }
    }

    #[test]
    fn frames_take_a_frame_of_colour_clocks() {
        let mut machine = Machine::new(&uncapped()).expect("default config");
        machine.run_frame().expect("valid signal");
        let first = machine.clock();
        machine.run_frame().expect("valid signal");
        assert_eq!((machine.clock() - first).get(), 262 * 228);
        assert_eq!(machine.kernel().frame(), 1);
    }

    #[test]
    fn headless_machine_counts_frames() {
        let config = MachineConfig {
            kernel: KernelConfig::for_standard(KernelStandard::Pal),
            ..uncapped()
        };
        let mut machine = Machine::headless(&config);
        for _ in 0..3 {
            machine.run_frame().expect("valid signal");
        }
        assert_eq!(machine.tv().frame_num(), 3);
        // A headless set never switches away from NTSC
        assert_eq!(machine.query("tv.spec"), Some(Value::from("NTSC")));
    }

    #[test]
    fn queries_reach_the_chip() {
        let mut machine = Machine::new(&uncapped()).expect("default config");
        for _ in 0..10 {
            machine.step().expect("valid signal");
        }
        assert_eq!(machine.query("clock"), Some(Value::U64(10)));
        assert_eq!(machine.query("tia.color_clock"), Some(Value::U8(10)));
        assert_eq!(machine.query("tv.spec"), Some(Value::from("NTSC")));
        assert_eq!(machine.query("nonsense"), None);
    }

    #[test]
    fn unusable_fps_is_a_setup_error() {
        let config = MachineConfig {
            fps: Some(f32::NAN),
            ..uncapped()
        };
        let err = Machine::new(&config).err().expect("NaN is refused");
        assert!(!err.is_fatal());
    }
}
