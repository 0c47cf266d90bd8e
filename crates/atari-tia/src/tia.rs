//! The TIA's horizontal timing and signal output.

use atari_television::{ColorSignal, SignalAttributes, SignalSink, TvError};
use emu_core::{Observable, Value};
use log::trace;

use crate::audio::AudioLatch;
use crate::hmove::Hmove;
use crate::polycounter::Polycounter;
use crate::registers::{Register, SYNC_MASK};
use crate::rsync::Rsync;
use crate::video::{Backdrop, VideoCircuit};

/// Colour clocks per scanline.
pub const CLOCKS_PER_LINE: u8 = 228;

// Edges, in colour clocks from the start of the line
const HSYNC_ON: u8 = 16;
const HSYNC_OFF: u8 = 32;
const COLOR_BURST: u8 = 48;
const MOTION_CLOCK_ON: u8 = 60;
const HBLANK_OFF: u8 = 68;
/// HBLANK ends 8 clocks late on a line with an HMOVE window.
const HBLANK_OFF_LATE: u8 = 76;
const MOTION_CLOCK_OFF: u8 = 224;

/// Television Interface Adaptor.
///
/// Stepped once per colour clock. Every step produces exactly one signal.
pub struct Tia<V: VideoCircuit = Backdrop> {
    color_clock: Polycounter,
    hmove: Hmove,
    rsync: Rsync,
    audio: AudioLatch,
    video: V,

    hblank: bool,
    hsync: bool,
    vsync: bool,
    vblank: bool,
    /// CPU held until the next scanline.
    wsync: bool,
    /// Out-of-phase clock for the video objects' delayed writes.
    motion_clock: bool,
}

impl Tia<Backdrop> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_video(Backdrop::new())
    }
}

impl Default for Tia<Backdrop> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VideoCircuit> Tia<V> {
    #[must_use]
    pub fn with_video(video: V) -> Self {
        Self {
            color_clock: Polycounter::new(CLOCKS_PER_LINE),
            hmove: Hmove::new(),
            rsync: Rsync::new(),
            audio: AudioLatch::new(),
            video,
            hblank: true,
            hsync: false,
            vsync: false,
            vblank: false,
            wsync: false,
            motion_clock: false,
        }
    }

    #[must_use]
    pub fn video(&self) -> &V {
        &self.video
    }

    pub fn video_mut(&mut self) -> &mut V {
        &mut self.video
    }

    /// Colour clock within the current scanline.
    #[must_use]
    pub fn color_clock(&self) -> u8 {
        self.color_clock.count()
    }

    /// Whether the CPU may run. False while WSYNC holds it.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.wsync
    }

    /// A CPU write to a TIA register.
    pub fn write(&mut self, register: Register, value: u8) {
        match register {
            Register::Vsync => self.vsync = value & SYNC_MASK == SYNC_MASK,
            Register::Vblank => self.vblank = value & SYNC_MASK == SYNC_MASK,
            Register::Wsync => self.wsync = true,
            Register::Rsync => {
                trace!("tia: RSYNC at colour clock {}", self.color_clock.count());
                self.rsync.set();
            }
            Register::Hmove => {
                self.video.prepare_for_hmove();
                self.hmove.trigger();
            }
            r if r.is_audio() => self.audio.write(r, value),
            r => self.video.write(r, value),
        }
    }

    /// A CPU write by address. Writes to unused addresses are dropped.
    pub fn write_address(&mut self, address: u16, value: u8) {
        match Register::from_address(address) {
            Some(register) => self.write(register, value),
            None => trace!("tia: write to unused address {address:#06X}"),
        }
    }

    /// Advance one colour clock and send the result to `tv`.
    ///
    /// Returns whether the CPU may run on this clock. A television error
    /// means the signal stream has broken and emulation must stop.
    pub fn step(&mut self, tv: &mut dyn SignalSink) -> Result<bool, TvError> {
        let wrapped = self.color_clock.tick();
        let resync = self.rsync.tick();
        let new_line = wrapped || resync;
        if new_line {
            self.color_clock.reset();
            self.wsync = false;
            self.hblank = true;
            self.hsync = false;
            self.hmove.reset();
            self.video.new_scanline();
        }

        let ct = self.color_clock.count();
        match ct {
            HSYNC_ON => self.hsync = true,
            HSYNC_OFF => self.hsync = false,
            MOTION_CLOCK_ON => self.motion_clock = true,
            HBLANK_OFF if !self.hmove.is_active() => self.hblank = false,
            HBLANK_OFF_LATE if self.hmove.is_active() => self.hblank = false,
            MOTION_CLOCK_OFF => self.motion_clock = false,
            _ => {}
        }
        let cburst = ct == COLOR_BURST;

        // Stuffed clocks reach the sprites even though HBLANK is on
        if let Some(extra) = self.hmove.step() {
            self.video.tick_for_hmove(extra);
        }
        if !self.hblank {
            self.video.tick_sprites();
        }
        self.video.tick_playfield();
        self.video.tick_futures(self.motion_clock);

        let pixel = if self.hblank {
            ColorSignal::VideoBlack
        } else {
            ColorSignal::from_register(self.video.pixel())
        };

        tv.signal(SignalAttributes {
            vsync: self.vsync,
            vblank: self.vblank,
            cburst,
            hsync: self.hsync,
            new_line,
            pixel,
            audio: self.audio.take(),
        })?;

        Ok(!self.wsync)
    }
}

impl<V: VideoCircuit> Observable for Tia<V> {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "color_clock" => Some(self.color_clock.count().into()),
            "hblank" => Some(self.hblank.into()),
            "hsync" => Some(self.hsync.into()),
            "vsync" => Some(self.vsync.into()),
            "vblank" => Some(self.vblank.into()),
            "wsync" => Some(self.wsync.into()),
            "motion_clock" => Some(self.motion_clock.into()),
            "hmove.armed" => Some(self.hmove.is_armed().into()),
            "hmove.active" => Some(self.hmove.is_active().into()),
            "hmove.stuffing" => Some(self.hmove.is_stuffing().into()),
            "rsync.pending" => Some(self.rsync.is_pending().into()),
            "audio.audc0" => Some(self.audio.registers().control[0].into()),
            "audio.audc1" => Some(self.audio.registers().control[1].into()),
            "audio.audf0" => Some(self.audio.registers().freq[0].into()),
            "audio.audf1" => Some(self.audio.registers().freq[1].into()),
            "audio.audv0" => Some(self.audio.registers().volume[0].into()),
            "audio.audv1" => Some(self.audio.registers().volume[1].into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "color_clock",
            "hblank",
            "hsync",
            "vsync",
            "vblank",
            "wsync",
            "motion_clock",
            "hmove.armed",
            "hmove.active",
            "hmove.stuffing",
            "rsync.pending",
            "audio.audc0",
            "audio.audc1",
            "audio.audf0",
            "audio.audf1",
            "audio.audv0",
            "audio.audv1",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Capture(Vec<SignalAttributes>);

    impl SignalSink for Capture {
        fn signal(&mut self, sig: SignalAttributes) -> Result<(), TvError> {
            self.0.push(sig);
            Ok(())
        }
    }

    /// Counts what the chip asks of its video objects.
    #[derive(Default)]
    struct CountingVideo {
        hmove_ticks: Vec<u8>,
        sprite_ticks: usize,
        playfield_ticks: usize,
        scanlines: usize,
        prepared: usize,
    }

    impl VideoCircuit for CountingVideo {
        fn new_scanline(&mut self) {
            self.scanlines += 1;
        }
        fn prepare_for_hmove(&mut self) {
            self.prepared += 1;
        }
        fn tick_for_hmove(&mut self, count: u8) {
            self.hmove_ticks.push(count);
        }
        fn tick_sprites(&mut self) {
            self.sprite_ticks += 1;
        }
        fn tick_playfield(&mut self) {
            self.playfield_ticks += 1;
        }
        fn tick_futures(&mut self, _motion_clock: bool) {}
        fn pixel(&self) -> u8 {
            0x1E
        }
        fn write(&mut self, _register: Register, _value: u8) {}
    }

    fn run<V: VideoCircuit>(tia: &mut Tia<V>, clocks: usize) -> Vec<SignalAttributes> {
        let mut capture = Capture::default();
        for _ in 0..clocks {
            tia.step(&mut capture).expect("capture never fails");
        }
        capture.0
    }

    #[test]
    fn scanline_edges() {
        let mut tia = Tia::new();
        tia.write(Register::Colubk, 0x1E);
        // Power-on is clock 0; the first step is clock 1
        let sigs = run(&mut tia, 228);
        let at = |ct: usize| sigs[ct - 1];

        assert!(!at(15).hsync && at(16).hsync && at(31).hsync && !at(32).hsync);
        assert!(at(48).cburst);
        assert_eq!(sigs.iter().filter(|s| s.cburst).count(), 1);
        assert_eq!(at(67).pixel, ColorSignal::VideoBlack);
        assert_eq!(at(68).pixel, ColorSignal::Color(0x0F));
        assert_eq!(at(227).pixel, ColorSignal::Color(0x0F));

        // Clock 0 of the next line
        let marker = sigs[227];
        assert!(marker.new_line);
        assert_eq!(marker.pixel, ColorSignal::VideoBlack);
        assert_eq!(tia.color_clock(), 0);
    }

    #[test]
    fn wsync_holds_until_next_line() {
        let mut tia = Tia::new();
        let mut capture = Capture::default();
        for _ in 0..100 {
            tia.step(&mut capture).expect("capture never fails");
        }
        tia.write(Register::Wsync, 0);
        assert!(!tia.is_ready());

        let mut held = 0;
        while !tia.step(&mut capture).expect("capture never fails") {
            held += 1;
        }
        assert_eq!(held, 227 - 100);
        assert!(capture.0.last().is_some_and(|s| s.new_line));
    }

    #[test]
    fn rsync_starts_line_on_next_clock() {
        let mut tia = Tia::new();
        run(&mut tia, 20);
        tia.write(Register::Rsync, 0);
        let sigs = run(&mut tia, 1);
        assert!(sigs[0].new_line);
        assert!(!sigs[0].hsync);
        assert_eq!(tia.color_clock(), 0);

        // HSYNC lands 16 clocks after the reset
        let sigs = run(&mut tia, 16);
        assert!(sigs[15].hsync);
    }

    #[test]
    fn hmove_stuffs_and_delays_hblank() {
        let mut tia = Tia::with_video(CountingVideo::default());
        run(&mut tia, 100);
        tia.write(Register::Hmove, 0);
        assert_eq!(tia.video().prepared, 1);

        // Rest of this line is unaffected
        run(&mut tia, 127);
        assert!(tia.video().hmove_ticks.is_empty());
        assert_eq!(tia.color_clock(), 227);

        // The next line, from its clock 0
        let sprite_ticks = tia.video().sprite_ticks;
        let sigs = run(&mut tia, 228);
        assert!(sigs[0].new_line);
        assert_eq!(tia.video().hmove_ticks, (0..15).collect::<Vec<u8>>());
        assert_eq!(sigs[75].pixel, ColorSignal::VideoBlack);
        assert_eq!(sigs[76].pixel, ColorSignal::Color(0x0F));
        assert_eq!(tia.video().sprite_ticks - sprite_ticks, 228 - 76);

        // Only one line
        let sprite_ticks = tia.video().sprite_ticks;
        let sigs = run(&mut tia, 228);
        assert_eq!(sigs[68].pixel, ColorSignal::Color(0x0F));
        assert_eq!(tia.video().hmove_ticks.len(), 15);
        assert_eq!(tia.video().sprite_ticks - sprite_ticks, 228 - 68);
    }

    #[test]
    fn video_objects_ticked_every_clock() {
        let mut tia = Tia::with_video(CountingVideo::default());
        run(&mut tia, 228 * 3);
        assert_eq!(tia.video().playfield_ticks, 228 * 3);
        assert_eq!(tia.video().scanlines, 3);
        assert_eq!(tia.video().sprite_ticks, 3 * (228 - 68));
    }

    #[test]
    fn hmove_and_audio_latches_are_observable() {
        let mut tia = Tia::new();
        run(&mut tia, 10);
        tia.write(Register::Hmove, 0);
        tia.write(Register::Audf1, 0xFF);
        assert_eq!(tia.query("hmove.armed"), Some(Value::Bool(true)));
        assert_eq!(tia.query("hmove.active"), Some(Value::Bool(false)));
        assert_eq!(tia.query("audio.audf1"), Some(Value::U8(0x1F)));
        assert_eq!(tia.query("audio.audv0"), Some(Value::U8(0)));

        // Armed until the line boundary, the latch keeps its value
        run(&mut tia, 218);
        assert_eq!(tia.query("hmove.armed"), Some(Value::Bool(false)));
        assert_eq!(tia.query("hmove.active"), Some(Value::Bool(true)));
        assert_eq!(tia.query("audio.audf1"), Some(Value::U8(0x1F)));

        for path in tia.query_paths() {
            assert!(tia.query(path).is_some(), "{path}");
        }
    }

    #[test]
    fn audio_write_carried_once() {
        let mut tia = Tia::new();
        tia.write(Register::Audv0, 0x0A);
        let sigs = run(&mut tia, 3);
        assert_eq!(sigs[0].audio.map(|a| a.volume), Some([0x0A, 0]));
        assert!(sigs[1].audio.is_none() && sigs[2].audio.is_none());
    }

    #[test]
    fn sync_registers_use_bit_one() {
        let mut tia = Tia::new();
        tia.write(Register::Vsync, 0x02);
        tia.write(Register::Vblank, 0x40);
        let sigs = run(&mut tia, 1);
        assert!(sigs[0].vsync);
        assert!(!sigs[0].vblank);
        assert_eq!(tia.query("vsync"), Some(Value::Bool(true)));
    }

    #[test]
    fn unused_address_is_ignored() {
        let mut tia = Tia::new();
        tia.write_address(0x2F, 0xFF);
        tia.write_address(0x49, 0x1E);
        assert_eq!(tia.video().colubk(), 0x1E);
    }
}
