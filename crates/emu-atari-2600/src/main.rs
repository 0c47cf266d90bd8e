//! Atari 2600 video chain binary.
//!
//! Runs the scripted kernel through the TIA into the reference television,
//! paced at the television's frame rate, or into the headless television as
//! fast as possible. Can save screenshots, frame sequences and the
//! television's state.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use atari_television::{HeadlessTelevision, SpecRequest, StateReq, Television};
use emu_atari_2600::capture::{self, FrameCapture};
use emu_atari_2600::{AudioLog, AudioSummary, KernelConfig, KernelStandard, Machine, MachineConfig};
use log::info;
use serde::Serialize;

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

struct CliArgs {
    spec: SpecRequest,
    kernel: KernelStandard,
    frames: u32,
    fps: Option<f32>,
    uncapped: bool,
    hmove: bool,
    headless: bool,
    screenshot_path: Option<PathBuf>,
    record_dir: Option<PathBuf>,
    print_state: bool,
    save_state_path: Option<PathBuf>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        spec: SpecRequest::Auto,
        kernel: KernelStandard::Ntsc,
        frames: 60,
        fps: None,
        uncapped: false,
        hmove: false,
        headless: false,
        screenshot_path: None,
        record_dir: None,
        print_state: false,
        save_state_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--spec" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.spec = s.parse().unwrap_or_else(|e| {
                        eprintln!("{e}");
                        process::exit(1);
                    });
                }
            }
            "--kernel" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.kernel = s.parse().unwrap_or_else(|e| {
                        eprintln!("{e}");
                        process::exit(1);
                    });
                }
            }
            "--frames" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.frames = s.parse().unwrap_or(60);
                }
            }
            "--fps" => {
                i += 1;
                cli.fps = args.get(i).and_then(|s| s.parse().ok());
            }
            "--uncapped" => {
                cli.uncapped = true;
            }
            "--hmove" => {
                cli.hmove = true;
            }
            "--headless" => {
                cli.headless = true;
            }
            "--screenshot" => {
                i += 1;
                cli.screenshot_path = args.get(i).map(PathBuf::from);
            }
            "--record" => {
                i += 1;
                cli.record_dir = args.get(i).map(PathBuf::from);
            }
            "--state" => {
                cli.print_state = true;
            }
            "--save-state" => {
                i += 1;
                cli.save_state_path = args.get(i).map(PathBuf::from);
            }
            "--help" | "-h" => {
                eprintln!("Usage: emu-atari-2600 [OPTIONS]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --spec <name>          Television: ntsc, pal or auto [default: auto]");
                eprintln!("  --kernel <name>        Frame layout drawn: ntsc or pal [default: ntsc]");
                eprintln!("  --frames <n>           Number of frames to run [default: 60]");
                eprintln!("  --fps <n>              Frame-rate limit [default: the television's]");
                eprintln!("  --uncapped             Run as fast as possible");
                eprintln!("  --hmove                Strobe HMOVE on every picture line");
                eprintln!("  --headless             Use the headless television (no outputs)");
                eprintln!("  --screenshot <file>    Save a PNG of the last frame");
                eprintln!("  --record <dir>         Save every frame as a PNG");
                eprintln!("  --state                Print the final state as JSON");
                eprintln!("  --save-state <file>    Write a television snapshot as JSON");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn machine_config(cli: &CliArgs) -> MachineConfig {
    let mut kernel = KernelConfig::for_standard(cli.kernel);
    kernel.hmove = cli.hmove;
    MachineConfig {
        spec: cli.spec,
        kernel,
        fps: cli.fps,
        uncapped: cli.uncapped,
    }
}

// ---------------------------------------------------------------------------
// Status report
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Status {
    frame: i32,
    scanline: i32,
    horiz_pos: i32,
    spec: String,
    synced_frames: i32,
    stable: bool,
    top: i32,
    bottom: i32,
    requested_fps: f32,
    actual_fps: f32,
    audio: AudioSummary,
}

impl Status {
    fn new(tv: &Television, audio: AudioSummary) -> Self {
        let state = tv.state();
        let geometry = state.geometry();
        Self {
            frame: state.frame_num(),
            scanline: state.scanline(),
            horiz_pos: tv.get_state(StateReq::HorizPos),
            spec: state.spec().id.to_string(),
            synced_frames: state.synced_frame_num(),
            stable: tv.is_stable(),
            top: geometry.top,
            bottom: geometry.bottom,
            requested_fps: tv.requested_fps(),
            actual_fps: tv.actual_fps(),
            audio,
        }
    }
}

/// What the headless television can report.
#[derive(Serialize)]
struct HeadlessStatus {
    frame: i32,
    scanline: i32,
    horiz_pos: i32,
    spec: String,
    synced_frames: i32,
}

impl HeadlessStatus {
    fn new(tv: &HeadlessTelevision) -> Self {
        Self {
            frame: tv.get_state(StateReq::FrameNum),
            scanline: tv.get_state(StateReq::Scanline),
            horiz_pos: tv.get_state(StateReq::HorizPos),
            spec: tv.spec().id.to_string(),
            synced_frames: tv.synced_frames(),
        }
    }
}

// ---------------------------------------------------------------------------
// Headless television
// ---------------------------------------------------------------------------

fn run_headless(cli: &CliArgs) -> Result<(), Box<dyn Error>> {
    if cli.screenshot_path.is_some() || cli.record_dir.is_some() || cli.save_state_path.is_some() {
        return Err("the headless television has no picture or snapshot to save".into());
    }

    let mut machine = Machine::headless(&machine_config(cli));
    for _ in 0..cli.frames {
        machine.run_frame()?;
    }

    let tv = machine.tv();
    info!("headless: {tv}, {} synced frames", tv.synced_frames());
    if cli.print_state {
        let status = HeadlessStatus::new(tv);
        println!("{}", serde_json::to_string_pretty(&status)?);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Reference television
// ---------------------------------------------------------------------------

fn run(cli: &CliArgs) -> Result<(), Box<dyn Error>> {
    let mut machine = Machine::new(&machine_config(cli))?;

    let capture = FrameCapture::new();
    let audio = AudioLog::new();
    let tv = machine.tv_mut();
    tv.add_pixel_renderer(Box::new(capture.clone()))?;
    tv.add_pixel_refresher(Box::new(capture.clone()));
    tv.add_audio_mixer(Box::new(audio.clone()));

    if let Some(ref dir) = cli.record_dir {
        capture::record(&mut machine, &capture, dir, cli.frames)?;
    } else {
        for _ in 0..cli.frames {
            machine.run_frame()?;
        }
    }

    if let Some(ref path) = cli.screenshot_path {
        capture::save_screenshot(&capture.framebuffer(), path)?;
        eprintln!("Screenshot saved to {}", path.display());
    }

    let tv = machine.tv_mut();
    tv.end()?;
    info!("television: {tv} at {:.2} fps", tv.actual_fps());

    if let Some(ref path) = cli.save_state_path {
        let json = serde_json::to_string_pretty(&tv.snapshot())?;
        fs::write(path, json)?;
        eprintln!("Television state saved to {}", path.display());
    }

    if cli.print_state {
        let status = Status::new(tv, *audio.summary());
        println!("{}", serde_json::to_string_pretty(&status)?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = parse_args();

    let result = if cli.headless {
        run_headless(&cli)
    } else {
        run(&cli)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
