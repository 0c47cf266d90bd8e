//! The whole chain: kernel, chip and television.

use atari_television::{AudioData, ColorSignal, SPEC_NTSC, SpecId, SpecRequest, StateReq};
use emu_atari_2600::capture::FrameCapture;
use emu_atari_2600::{AudioLog, Kernel, KernelConfig, KernelStandard, Machine, MachineConfig};

fn config(spec: SpecRequest, kernel: KernelConfig) -> MachineConfig {
    MachineConfig {
        spec,
        kernel,
        fps: None,
        uncapped: true,
    }
}

fn machine_for(spec: SpecRequest, kernel: KernelConfig) -> Machine {
    Machine::new(&config(spec, kernel)).expect("usable config")
}

fn rgb(register: u8) -> u32 {
    let (red, green, blue) = SPEC_NTSC.color(ColorSignal::from_register(register));
    (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
}

#[test]
fn kernel_frames_sync_the_television() {
    let mut machine = machine_for(SpecRequest::Auto, KernelConfig::default());
    for _ in 0..25 {
        machine.run_frame().expect("valid signal");
    }
    let tv = machine.tv();
    assert_eq!(tv.get_state(StateReq::FrameNum), 25);
    assert_eq!(tv.get_state(StateReq::Scanline), 0);
    assert!(tv.is_stable());
    assert_eq!(tv.spec().id, SpecId::Ntsc);
}

#[test]
fn pal_kernel_flips_an_auto_television() {
    let kernel = KernelConfig::for_standard(KernelStandard::Pal);
    let mut machine = machine_for(SpecRequest::Auto, kernel);
    for _ in 0..40 {
        machine.run_frame().expect("valid signal");
        if machine.tv().spec().id == SpecId::Pal {
            break;
        }
    }
    assert_eq!(machine.tv().spec().id, SpecId::Pal);
}

#[test]
fn captured_picture_shows_colour_bands() {
    let mut machine = machine_for(SpecRequest::Ntsc, KernelConfig::default());
    let capture = FrameCapture::new();
    machine
        .tv_mut()
        .add_pixel_renderer(Box::new(capture.clone()))
        .expect("renderer accepts geometry");
    for _ in 0..20 {
        machine.run_frame().expect("valid signal");
    }

    let fb = capture.framebuffer();
    // The window follows the kernel's VBLANK
    assert_eq!(fb.top(), 37);
    assert_eq!(fb.height(), 192);
    for column in [0, 80, 159] {
        assert_eq!(fb.pixel(column, 0), Some(rgb(0x10)));
        assert_eq!(fb.pixel(column, 3), Some(rgb(0x10)));
        assert_eq!(fb.pixel(column, 4), Some(rgb(0x12)));
    }
}

#[test]
fn hmove_lines_show_the_comb() {
    let kernel = KernelConfig {
        hmove: true,
        ..KernelConfig::default()
    };
    let mut machine = machine_for(SpecRequest::Ntsc, kernel);
    let capture = FrameCapture::new();
    machine
        .tv_mut()
        .add_pixel_renderer(Box::new(capture.clone()))
        .expect("renderer accepts geometry");
    for _ in 0..20 {
        machine.run_frame().expect("valid signal");
    }

    let fb = capture.framebuffer();
    let color = rgb(kernel_band(10));
    for column in 0..8 {
        assert_eq!(fb.pixel(column, 10), Some(0));
    }
    assert_eq!(fb.pixel(8, 10), Some(color));
    assert_eq!(fb.pixel(159, 10), Some(color));
}

fn kernel_band(row: u32) -> u8 {
    Kernel::new(KernelConfig::default()).band_color(row)
}

#[test]
fn audio_writes_reach_the_mixer() {
    let mut machine = machine_for(SpecRequest::Ntsc, KernelConfig::default());
    let audio = AudioLog::new();
    machine.tv_mut().add_audio_mixer(Box::new(audio.clone()));
    for _ in 0..3 {
        machine.run_frame().expect("valid signal");
    }

    // Two overscans, three writes each
    let summary = audio.summary();
    assert_eq!(summary.writes, 6);
    assert_eq!(
        summary.last,
        Some(AudioData {
            control: [4, 0],
            freq: [1, 0],
            volume: [8, 0],
        })
    );
}

#[test]
fn headless_television_keeps_pace() {
    let kernel = KernelConfig::default();
    let mut reference = machine_for(SpecRequest::Ntsc, kernel);
    let mut headless = Machine::headless(&config(SpecRequest::Ntsc, kernel));
    for _ in 0..5 {
        reference.run_frame().expect("valid signal");
        headless.run_frame().expect("valid signal");
        assert_eq!(reference.clock(), headless.clock());
        for request in [StateReq::FrameNum, StateReq::Scanline, StateReq::HorizPos] {
            assert_eq!(
                reference.tv().get_state(request),
                headless.tv().get_state(request)
            );
        }
    }
}
