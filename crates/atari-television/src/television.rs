//! The reference television.
//!
//! Decodes the TIA's signal stream into frames and scanlines, decides which
//! specification the signal was generated for, and hands pixels and audio
//! to whatever renderers and mixers have been registered.

use std::fmt;

use emu_core::{Observable, Value};
use log::{debug, info};

use crate::config::TvConfig;
use crate::error::TvError;
use crate::history::{HistoryEntry, SignalHistory};
use crate::limiter::Limiter;
use crate::protocol::{AudioMixer, FrameTrigger, PixelRefresher, PixelRenderer, StateReq};
use crate::resizer::{Geometry, Resizer};
use crate::signal::{SignalAttributes, SignalSink};
use crate::specification::{SpecId, SpecRequest, Specification};
use crate::sync::{Flyback, SyncDecoder};

/// Everything a snapshot needs to put the television back where it was.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TvState {
    #[cfg_attr(feature = "serde", serde(with = "crate::specification::by_id"))]
    spec: &'static Specification,
    /// Whether the specification may still flip to PAL.
    auto: bool,
    decoder: SyncDecoder,
    frame_num: i32,
    /// Frames that ended with a VSYNC. Never decreases except on reset.
    synced_frame_num: i32,
    /// Whether the frame in progress started with a VSYNC.
    synced_frame: bool,
    resizer: Resizer,
    history: SignalHistory,
}

impl TvState {
    fn new(request: SpecRequest) -> Self {
        let spec = request.initial();
        Self {
            spec,
            auto: request == SpecRequest::Auto,
            decoder: SyncDecoder::new(),
            frame_num: 0,
            synced_frame_num: 0,
            synced_frame: false,
            resizer: Resizer::new(Geometry::ideal(spec)),
            history: SignalHistory::for_spec(spec),
        }
    }

    #[must_use]
    pub fn spec(&self) -> &'static Specification {
        self.spec
    }

    #[must_use]
    pub fn frame_num(&self) -> i32 {
        self.frame_num
    }

    #[must_use]
    pub fn scanline(&self) -> i32 {
        self.decoder.scanline()
    }

    /// Horizontal position from the start of HBLANK.
    #[must_use]
    pub fn horiz_pos(&self) -> i32 {
        self.decoder.horiz_pos()
    }

    #[must_use]
    pub fn synced_frame_num(&self) -> i32 {
        self.synced_frame_num
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.resizer.committed()
    }

    #[must_use]
    pub fn history(&self) -> &SignalHistory {
        &self.history
    }
}

/// Reference television.
pub struct Television {
    /// Specification applied on reset.
    requested: SpecRequest,
    config: TvConfig,
    state: TvState,

    limiter: Limiter,
    /// Follow the specification's frame rate rather than a requested one.
    nominal_fps: bool,

    renderers: Vec<Box<dyn PixelRenderer>>,
    refreshers: Vec<Box<dyn PixelRefresher>>,
    frame_triggers: Vec<Box<dyn FrameTrigger>>,
    mixers: Vec<Box<dyn AudioMixer>>,
}

impl Television {
    #[must_use]
    pub fn new(request: SpecRequest) -> Self {
        Self::with_config(request, TvConfig::default())
    }

    #[must_use]
    pub fn with_config(request: SpecRequest, config: TvConfig) -> Self {
        let state = TvState::new(request);
        let limiter = Limiter::new(state.spec.frames_per_second, state.spec.scanlines_total);
        Self {
            requested: request,
            config,
            state,
            limiter,
            nominal_fps: true,
            renderers: Vec::new(),
            refreshers: Vec::new(),
            frame_triggers: Vec::new(),
            mixers: Vec::new(),
        }
    }

    /// Register a renderer. It is told the current geometry straight away.
    pub fn add_pixel_renderer(
        &mut self,
        mut renderer: Box<dyn PixelRenderer>,
    ) -> Result<(), TvError> {
        let g = self.state.resizer.committed();
        renderer.resize(self.state.spec, g.top, g.visible_scanlines())?;
        self.renderers.push(renderer);
        Ok(())
    }

    pub fn add_pixel_refresher(&mut self, refresher: Box<dyn PixelRefresher>) {
        self.refreshers.push(refresher);
    }

    pub fn add_frame_trigger(&mut self, trigger: Box<dyn FrameTrigger>) {
        self.frame_triggers.push(trigger);
    }

    pub fn add_audio_mixer(&mut self, mixer: Box<dyn AudioMixer>) {
        self.mixers.push(mixer);
    }

    /// Switch specification. `Auto` starts as NTSC and re-enables detection.
    pub fn set_spec(&mut self, request: SpecRequest) -> Result<(), TvError> {
        self.requested = request;
        self.apply_spec(request)
    }

    /// Switch specification by name, as given on a command line. An unknown
    /// name leaves the television untouched.
    pub fn set_spec_str(&mut self, name: &str) -> Result<(), TvError> {
        self.set_spec(name.parse()?)
    }

    fn apply_spec(&mut self, request: SpecRequest) -> Result<(), TvError> {
        let spec = request.initial();
        self.state.spec = spec;
        self.state.auto = request == SpecRequest::Auto;
        self.state.resizer = Resizer::new(Geometry::ideal(spec));
        self.state.history = SignalHistory::for_spec(spec);
        self.state.decoder.clamp_scanline(spec.scanlines_total);

        let fps = if self.nominal_fps {
            spec.frames_per_second
        } else {
            self.limiter.requested_fps()
        };
        self.limiter.set_rate(fps, spec.scanlines_total);

        for renderer in &mut self.renderers {
            renderer.resize(spec, spec.scanline_top(), spec.scanline_bottom() - spec.scanline_top())?;
        }
        debug!("television: specification {} ({request})", spec.id);
        Ok(())
    }

    /// Back to power-on: the requested specification, frame zero, nothing
    /// synced.
    pub fn reset(&mut self) -> Result<(), TvError> {
        self.apply_spec(self.requested)?;
        self.state.decoder.reset();
        self.state.frame_num = 0;
        self.state.synced_frame_num = 0;
        self.state.synced_frame = false;
        Ok(())
    }

    /// Tell every renderer and mixer that output has finished.
    pub fn end(&mut self) -> Result<(), TvError> {
        for renderer in &mut self.renderers {
            renderer.end_rendering()?;
        }
        for mixer in &mut self.mixers {
            mixer.end_mixing()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get_state(&self, request: StateReq) -> i32 {
        match request {
            StateReq::FrameNum => self.state.frame_num,
            StateReq::Scanline => self.state.scanline(),
            StateReq::HorizPos => self.state.horiz_pos() - self.state.spec.clocks_per_hblank,
        }
    }

    /// `get_state` for a request given by name.
    pub fn query_state(&self, request: &str) -> Result<i32, TvError> {
        Ok(self.get_state(request.parse()?))
    }

    #[must_use]
    pub fn spec(&self) -> &'static Specification {
        self.state.spec
    }

    #[must_use]
    pub fn requested_spec(&self) -> SpecRequest {
        self.requested
    }

    #[must_use]
    pub fn config(&self) -> &TvConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &TvState {
        &self.state
    }

    /// Whether enough synced frames have been seen for the picture to be
    /// considered stable. Once true, stays true until reset.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.state.synced_frame_num >= self.config.stability_threshold
    }

    #[must_use]
    pub fn last_signal(&self) -> SignalAttributes {
        self.state.decoder.last_signal()
    }

    /// Limit emulation to a frame rate. `None` follows the specification's
    /// own rate, including across specification changes. A rate that isn't
    /// a usable positive number leaves the television untouched.
    pub fn set_fps(&mut self, fps: Option<f32>) -> Result<(), TvError> {
        let rate = fps.unwrap_or(self.state.spec.frames_per_second);
        if !self.limiter.set_rate(rate, self.state.spec.scanlines_total) {
            return Err(TvError::UnsupportedFps(rate));
        }
        self.nominal_fps = fps.is_none();
        Ok(())
    }

    /// Switch frame-rate limiting on or off.
    pub fn set_fps_cap(&mut self, limit: bool) {
        self.limiter.set_limit(limit);
    }

    #[must_use]
    pub fn requested_fps(&self) -> f32 {
        self.limiter.requested_fps()
    }

    #[must_use]
    pub fn actual_fps(&self) -> f32 {
        self.limiter.actual_fps()
    }

    /// Copy of the current state, signal history included.
    #[must_use]
    pub fn snapshot(&self) -> TvState {
        self.state.clone()
    }

    /// Put a snapshot back and redraw it through the refreshers.
    pub fn restore(&mut self, state: TvState) {
        self.state = state;
        self.state.history.reserve();

        for refresher in &mut self.refreshers {
            refresher.refresh(true);
        }
        for (entry, not_yet_reached) in self.state.history.replay() {
            let (red, green, blue) = self.state.spec.color(entry.sig.pixel);
            for refresher in &mut self.refreshers {
                refresher.refresh_pixel(
                    entry.x,
                    entry.y,
                    red,
                    green,
                    blue,
                    entry.sig.vblank,
                    not_yet_reached,
                );
            }
        }
        for refresher in &mut self.refreshers {
            refresher.refresh(false);
        }
    }

    fn new_frame(&mut self, synced: bool) -> Result<(), TvError> {
        if self.state.synced_frame {
            self.state.synced_frame_num += 1;
            if self.state.synced_frame_num == self.config.stability_threshold {
                info!("television: picture stable at frame {}", self.state.frame_num);
            }
        }

        // A frame that overran NTSC by a margin while the picture is still
        // settling was most likely generated for PAL
        if self.config.in_auto_detect_window(self.state.synced_frame_num)
            && self.state.auto
            && !self.state.synced_frame
            && self.state.scanline() > self.config.excess_scanlines_ntsc
            && self.state.spec.id == SpecId::Ntsc
        {
            info!(
                "television: switching to PAL ({} excess scanlines)",
                self.state.scanline()
            );
            self.apply_spec(SpecRequest::Pal)?;
        }

        if let Some(g) = self.state.resizer.commit(self.config.resize_threshold) {
            for renderer in &mut self.renderers {
                renderer.resize(self.state.spec, g.top, g.visible_scanlines())?;
            }
        }
        self.state.resizer.prepare();

        self.state.decoder.new_frame();
        self.state.frame_num += 1;
        self.state.synced_frame = synced;

        let stable = self.is_stable();
        for renderer in &mut self.renderers {
            renderer.new_frame(self.state.frame_num)?;
        }
        for trigger in &mut self.frame_triggers {
            trigger.new_frame(self.state.frame_num, stable)?;
        }

        self.state.history.rewind();
        Ok(())
    }

    fn new_scanline(&mut self) -> Result<(), TvError> {
        let scanline = self.state.scanline();
        for renderer in &mut self.renderers {
            renderer.new_scanline(scanline)?;
        }
        Ok(())
    }
}

impl SignalSink for Television {
    fn signal(&mut self, sig: SignalAttributes) -> Result<(), TvError> {
        if let Some(audio) = sig.audio {
            for mixer in &mut self.mixers {
                mixer.set_audio(audio)?;
            }
        }

        let spec = self.state.spec;
        self.state
            .resizer
            .examine(&sig, self.state.decoder.scanline(), spec);

        let decoded =
            self.state
                .decoder
                .decode(&sig, spec.clocks_per_scanline, spec.scanlines_total)?;
        match decoded.flyback {
            Some(flyback) => self.new_frame(flyback == Flyback::Synced)?,
            None if decoded.line_started => self.new_scanline()?,
            None => {}
        }
        if decoded.line_started {
            self.limiter.check_rate();
        }

        // The specification may have changed with the frame
        let (red, green, blue) = self.state.spec.color(sig.pixel);
        let x = self.state.horiz_pos();
        let y = self.state.scanline();
        for renderer in &mut self.renderers {
            renderer.set_pixel(x, y, red, green, blue, sig.vblank)?;
        }

        self.state.history.record(HistoryEntry { x, y, sig })
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FR={:04} SL={:03} HP={:03}",
            self.state.frame_num,
            self.state.scanline(),
            self.state.horiz_pos() - self.state.spec.clocks_per_hblank
        )
    }
}

impl Observable for Television {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "frame" => Some(self.state.frame_num.into()),
            "scanline" => Some(self.state.scanline().into()),
            "horiz_pos" => Some(self.get_state(StateReq::HorizPos).into()),
            "spec" => Some(self.state.spec.id.to_string().into()),
            "auto" => Some(self.state.auto.into()),
            "stable" => Some(self.is_stable().into()),
            "synced_frames" => Some(self.state.synced_frame_num.into()),
            "screen.top" => Some(self.state.geometry().top.into()),
            "screen.bottom" => Some(self.state.geometry().bottom.into()),
            "fps.requested" => Some(self.requested_fps().into()),
            "fps.actual" => Some(self.actual_fps().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "frame",
            "scanline",
            "horiz_pos",
            "spec",
            "auto",
            "stable",
            "synced_frames",
            "screen.top",
            "screen.bottom",
            "fps.requested",
            "fps.actual",
        ]
    }
}
