//! Television behaviour over whole frames of reference signal.

use std::cell::RefCell;
use std::rc::Rc;

use atari_television::pattern::{Line, SignalPattern};
use atari_television::{
    FrameTrigger, PixelRefresher, PixelRenderer, SignalSink, SpecId, SpecRequest, Specification,
    StateReq, Television, TvError,
};

#[derive(Debug, Default)]
struct Log {
    resizes: Vec<(SpecId, i32, i32)>,
    frames: Vec<(i32, bool)>,
    pixels: usize,
    refreshed: usize,
    refreshed_unreached: usize,
    refresh_brackets: Vec<bool>,
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Log>>);

impl PixelRenderer for Recorder {
    fn resize(
        &mut self,
        spec: &'static Specification,
        top_scanline: i32,
        visible_scanlines: i32,
    ) -> Result<(), TvError> {
        self.0
            .borrow_mut()
            .resizes
            .push((spec.id, top_scanline, visible_scanlines));
        Ok(())
    }

    fn new_frame(&mut self, _frame_num: i32) -> Result<(), TvError> {
        Ok(())
    }

    fn new_scanline(&mut self, _scanline: i32) -> Result<(), TvError> {
        Ok(())
    }

    fn set_pixel(&mut self, _: i32, _: i32, _: u8, _: u8, _: u8, _: bool) -> Result<(), TvError> {
        self.0.borrow_mut().pixels += 1;
        Ok(())
    }
}

impl FrameTrigger for Recorder {
    fn new_frame(&mut self, frame_num: i32, stable: bool) -> Result<(), TvError> {
        self.0.borrow_mut().frames.push((frame_num, stable));
        Ok(())
    }
}

impl PixelRefresher for Recorder {
    fn refresh(&mut self, begin: bool) {
        self.0.borrow_mut().refresh_brackets.push(begin);
    }

    fn refresh_pixel(&mut self, _: i32, _: i32, _: u8, _: u8, _: u8, _: bool, unreached: bool) {
        let mut log = self.0.borrow_mut();
        log.refreshed += 1;
        if unreached {
            log.refreshed_unreached += 1;
        }
    }
}

struct Rig {
    tv: Television,
    pattern: SignalPattern,
    log: Rc<RefCell<Log>>,
}

impl Rig {
    fn new(request: SpecRequest) -> Self {
        let mut tv = Television::new(request);
        tv.set_fps_cap(false);
        let recorder = Recorder::default();
        let log = Rc::clone(&recorder.0);
        tv.add_pixel_renderer(Box::new(recorder.clone()))
            .expect("renderer accepts geometry");
        tv.add_frame_trigger(Box::new(recorder.clone()));
        tv.add_pixel_refresher(Box::new(recorder));
        Self {
            tv,
            pattern: SignalPattern::new(),
            log,
        }
    }

    fn lines(&mut self, line: Line, count: usize) {
        for _ in 0..count {
            for sig in self.pattern.scanline(line) {
                self.tv.signal(sig).expect("valid signal");
            }
        }
    }

    fn clocks(&mut self, line: Line, count: usize) {
        for sig in self.pattern.clocks(line, count) {
            self.tv.signal(sig).expect("valid signal");
        }
    }

    /// A complete frame with the classic layout. `total` is 262 for NTSC
    /// and 312 for PAL.
    fn frame(&mut self, total: usize) {
        let (vblank, overscan) = if total == 262 { (37, 30) } else { (45, 36) };
        self.lines(Line::vsync(), 3);
        self.lines(Line::blank(), vblank);
        self.lines(Line::picture(0x1E), total - 3 - vblank - overscan);
        self.lines(Line::blank(), overscan);
    }
}

#[test]
fn one_ntsc_frame_from_power_on() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    rig.frame(262);

    // The VSYNC ended three lines in, so the second frame has started and is
    // three lines short of its end
    assert_eq!(rig.log.borrow().frames, vec![(1, false)]);
    assert_eq!(rig.tv.get_state(StateReq::FrameNum), 1);
    assert_eq!(rig.tv.get_state(StateReq::Scanline), 259);
    assert_eq!(rig.log.borrow().pixels, 228 * 262);

    // Closing VSYNC of the next frame
    rig.lines(Line::vsync(), 3);
    rig.clocks(Line::blank(), 1);
    assert_eq!(rig.tv.get_state(StateReq::FrameNum), 2);
    assert_eq!(rig.tv.get_state(StateReq::Scanline), 0);
}

#[test]
fn frame_without_vsync_overruns() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    rig.lines(Line::picture(0), 263);
    assert_eq!(rig.log.borrow().frames, vec![(1, false)]);
    assert_eq!(rig.tv.get_state(StateReq::Scanline), 0);
    assert_eq!(rig.tv.state().synced_frame_num(), 0);
}

#[test]
fn auto_switches_to_pal_while_settling() {
    let mut rig = Rig::new(SpecRequest::Auto);
    let mut switched_at = None;
    for _ in 0..10 {
        rig.frame(312);
        let synced = rig.tv.state().synced_frame_num();
        if synced <= 5 {
            // Too early to judge the signal
            assert_eq!(rig.tv.spec().id, SpecId::Ntsc, "switched at synced {synced}");
        } else if rig.tv.spec().id == SpecId::Pal && switched_at.is_none() {
            switched_at = Some(synced);
        }
    }
    assert_eq!(rig.tv.spec().id, SpecId::Pal);
    assert!(switched_at.is_some_and(|synced| synced >= 6));
    assert!(
        rig.log
            .borrow()
            .resizes
            .iter()
            .any(|&(id, top, visible)| id == SpecId::Pal && top == 48 && visible == 228)
    );

    // Settled PAL frames are now fully synced
    let synced = rig.tv.state().synced_frame_num();
    for _ in 0..5 {
        rig.frame(312);
    }
    assert_eq!(rig.tv.state().synced_frame_num(), synced + 5);
}

#[test]
fn auto_does_not_switch_once_stable() {
    let mut rig = Rig::new(SpecRequest::Auto);
    for _ in 0..25 {
        rig.frame(262);
    }
    assert!(rig.tv.is_stable());
    for _ in 0..10 {
        rig.frame(312);
    }
    assert_eq!(rig.tv.spec().id, SpecId::Ntsc);
}

#[test]
fn explicit_ntsc_never_switches() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    for _ in 0..15 {
        rig.frame(312);
    }
    assert_eq!(rig.tv.spec().id, SpecId::Ntsc);
}

#[test]
fn stability_is_reached_and_kept() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    for _ in 0..30 {
        rig.frame(262);
    }
    let log = rig.log.borrow();
    let first_stable = log
        .frames
        .iter()
        .position(|&(_, stable)| stable)
        .expect("stable within 30 frames");
    assert!(log.frames[first_stable..].iter().all(|&(_, stable)| stable));
    assert!(log.frames[..first_stable].iter().all(|&(_, stable)| !stable));
    let frame_nums: Vec<i32> = log.frames.iter().map(|&(n, _)| n).collect();
    assert!(frame_nums.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn steady_vblank_window_is_committed_once() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    for _ in 0..20 {
        rig.frame(262);
    }
    // Registration, then the window measured from the end of VSYNC
    assert_eq!(
        rig.log.borrow().resizes,
        vec![(SpecId::Ntsc, 40, 192), (SpecId::Ntsc, 37, 192)]
    );
}

#[test]
fn alternating_window_is_never_committed() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    for i in 0..30 {
        if i % 3 == 0 {
            rig.lines(Line::vsync(), 3);
            rig.lines(Line::blank(), 30);
            rig.lines(Line::picture(0x1E), 199);
            rig.lines(Line::blank(), 30);
        } else {
            rig.frame(262);
        }
    }
    assert_eq!(rig.log.borrow().resizes.len(), 1);
}

#[test]
fn history_rewinds_at_each_frame() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    rig.frame(262);
    rig.lines(Line::vsync(), 3);
    // The first of these ends the VSYNC and starts a frame
    rig.clocks(Line::blank(), 10);
    let history = rig.tv.state().history();
    assert_eq!(history.cursor(), 10);
    assert_eq!(history.entries().len(), 228 * 262);
}

#[test]
fn snapshot_restore_replays_history() {
    let mut rig = Rig::new(SpecRequest::Ntsc);
    rig.frame(262);
    rig.frame(262);
    rig.lines(Line::picture(0x40), 100);
    let snapshot = rig.tv.snapshot();
    let snapshot_display = rig.tv.to_string();

    rig.lines(Line::picture(0x40), 50);
    let continued = rig.tv.snapshot();
    assert_ne!(continued, snapshot);

    rig.tv.restore(snapshot.clone());
    assert_eq!(rig.tv.snapshot(), snapshot);
    assert_eq!(rig.tv.to_string(), snapshot_display);
    {
        let log = rig.log.borrow();
        let entries = snapshot.history().entries().len();
        assert_eq!(log.refresh_brackets, vec![true, false]);
        assert_eq!(log.refreshed, entries);
        assert_eq!(log.refreshed_unreached, entries - snapshot.history().cursor());
    }

    // Emulation continues identically from the restored point
    rig.lines(Line::picture(0x40), 50);
    assert_eq!(rig.tv.snapshot(), continued);
}

#[test]
fn failing_collaborator_is_fatal() {
    struct Broken;
    impl FrameTrigger for Broken {
        fn new_frame(&mut self, _: i32, _: bool) -> Result<(), TvError> {
            Err(TvError::Collaborator {
                collaborator: "trigger",
                message: "disconnected".into(),
            })
        }
    }

    let mut tv = Television::new(SpecRequest::Ntsc);
    tv.set_fps_cap(false);
    tv.add_frame_trigger(Box::new(Broken));
    let mut pattern = SignalPattern::new();
    let result = (0..263)
        .flat_map(|_| pattern.scanline(Line::picture(0)))
        .try_for_each(|sig| tv.signal(sig));
    let err = result.unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("disconnected"));
}

#[cfg(feature = "serde")]
#[test]
fn state_survives_json() {
    let mut rig = Rig::new(SpecRequest::Pal);
    rig.frame(312);
    rig.lines(Line::picture(0x40), 10);
    let snapshot = rig.tv.snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialise");
    let back: atari_television::TvState = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(back, snapshot);
    assert!(std::ptr::eq(back.spec(), &atari_television::SPEC_PAL));
}
