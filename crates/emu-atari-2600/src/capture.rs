//! Headless capture: PNG screenshots.
//!
//! [`FrameCapture`] is a television renderer that keeps the visible window
//! in a framebuffer. The television owns the renderer; the caller keeps a
//! clone to read the finished frame.

use std::cell::{Ref, RefCell};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use atari_television::{
    CLOCKS_PER_HBLANK, CLOCKS_PER_VISIBLE, PixelRefresher, PixelRenderer, Specification, TvError,
};

use crate::machine::{Machine, Screen};

/// Framebuffer width: one pixel per visible colour clock.
pub const FB_WIDTH: u32 = CLOCKS_PER_VISIBLE as u32;

/// The visible window, 0x00RRGGBB.
#[derive(Debug, Clone, Default)]
pub struct Framebuffer {
    top: i32,
    height: u32,
    /// Frame being drawn.
    back: Vec<u32>,
    /// Last complete frame.
    front: Vec<u32>,
    frames: u32,
}

impl Framebuffer {
    #[must_use]
    pub fn width(&self) -> u32 {
        FB_WIDTH
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Scanline shown on the first row.
    #[must_use]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Completed frames.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// The last complete frame.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.front
    }

    /// Pixel of the last complete frame.
    #[must_use]
    pub fn pixel(&self, column: u32, row: u32) -> Option<u32> {
        if column >= FB_WIDTH || row >= self.height {
            return None;
        }
        self.front.get((row * FB_WIDTH + column) as usize).copied()
    }

    fn resize(&mut self, top: i32, visible: i32) {
        self.top = top;
        self.height = visible.max(0) as u32;
        let len = (FB_WIDTH * self.height) as usize;
        self.back = vec![0; len];
        self.front = vec![0; len];
    }

    fn plot(&mut self, x: i32, y: i32, rgb: u32) {
        let column = x - CLOCKS_PER_HBLANK;
        let row = y - self.top;
        if !(0..FB_WIDTH as i32).contains(&column) || !(0..self.height as i32).contains(&row) {
            return;
        }
        self.back[(row as u32 * FB_WIDTH + column as u32) as usize] = rgb;
    }

    fn publish(&mut self) {
        self.front.clone_from(&self.back);
    }

    fn flip(&mut self) {
        self.publish();
        self.frames += 1;
    }
}

/// Renderer and refresher feeding a shared [`Framebuffer`].
#[derive(Debug, Clone, Default)]
pub struct FrameCapture(Rc<RefCell<Framebuffer>>);

impl FrameCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn framebuffer(&self) -> Ref<'_, Framebuffer> {
        self.0.borrow()
    }
}

fn rgb(red: u8, green: u8, blue: u8, vblank: bool) -> u32 {
    if vblank {
        return 0;
    }
    (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
}

impl PixelRenderer for FrameCapture {
    fn resize(
        &mut self,
        _spec: &'static Specification,
        top_scanline: i32,
        visible_scanlines: i32,
    ) -> Result<(), TvError> {
        self.0.borrow_mut().resize(top_scanline, visible_scanlines);
        Ok(())
    }

    fn new_frame(&mut self, _frame_num: i32) -> Result<(), TvError> {
        self.0.borrow_mut().flip();
        Ok(())
    }

    fn new_scanline(&mut self, _scanline: i32) -> Result<(), TvError> {
        Ok(())
    }

    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        red: u8,
        green: u8,
        blue: u8,
        vblank: bool,
    ) -> Result<(), TvError> {
        self.0.borrow_mut().plot(x, y, rgb(red, green, blue, vblank));
        Ok(())
    }
}

impl PixelRefresher for FrameCapture {
    fn refresh(&mut self, begin: bool) {
        if !begin {
            self.0.borrow_mut().publish();
        }
    }

    fn refresh_pixel(
        &mut self,
        x: i32,
        y: i32,
        red: u8,
        green: u8,
        blue: u8,
        vblank: bool,
        _not_yet_reached: bool,
    ) {
        self.0.borrow_mut().plot(x, y, rgb(red, green, blue, vblank));
    }
}

/// Save the last complete frame as a PNG file.
///
/// # Errors
///
/// Returns an error if there is no picture yet, or if the file cannot be
/// created or written.
pub fn save_screenshot(fb: &Framebuffer, path: &Path) -> Result<(), Box<dyn Error>> {
    if fb.height() == 0 {
        return Err("no visible picture to capture".into());
    }

    let file = fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, fb.width(), fb.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let mut rgba = Vec::with_capacity(fb.pixels().len() * 4);
    for &pixel in fb.pixels() {
        rgba.push((pixel >> 16) as u8);
        rgba.push((pixel >> 8) as u8);
        rgba.push(pixel as u8);
        rgba.push(0xFF);
    }

    writer.write_image_data(&rgba)?;
    Ok(())
}

/// Record video: dump frames as PNGs.
///
/// # Errors
///
/// Returns an error if emulation fails or frames cannot be saved.
pub fn record<T: Screen>(
    machine: &mut Machine<T>,
    capture: &FrameCapture,
    dir: &Path,
    num_frames: u32,
) -> Result<(), Box<dyn Error>> {
    let frames_dir = dir.join("frames");
    fs::create_dir_all(&frames_dir)?;

    for i in 1..=num_frames {
        machine.run_frame()?;
        let filename = frames_dir.join(format!("{i:06}.png"));
        save_screenshot(&capture.framebuffer(), &filename)?;
    }

    eprintln!("Captured {num_frames} frames to {}", frames_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atari_television::SPEC_NTSC;

    #[test]
    fn plots_visible_window_only() {
        let mut capture = FrameCapture::new();
        capture.resize(&SPEC_NTSC, 40, 192).expect("resize");
        capture.set_pixel(68, 40, 0x12, 0x34, 0x56, false).expect("plot");
        capture.set_pixel(67, 40, 0xFF, 0xFF, 0xFF, false).expect("plot");
        capture.set_pixel(100, 39, 0xFF, 0xFF, 0xFF, false).expect("plot");
        capture.set_pixel(69, 40, 0xFF, 0xFF, 0xFF, true).expect("plot");

        // Nothing is visible until the frame completes
        assert_eq!(capture.framebuffer().pixel(0, 0), Some(0));
        PixelRenderer::new_frame(&mut capture, 1).expect("flip");

        let fb = capture.framebuffer();
        assert_eq!(fb.pixel(0, 0), Some(0x0012_3456));
        assert_eq!(fb.pixel(1, 0), Some(0));
        assert_eq!(fb.pixel(160, 0), None);
        assert_eq!(fb.frames(), 1);
        assert_eq!(fb.pixels().iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn refresh_publishes_redrawn_frame() {
        let mut capture = FrameCapture::new();
        capture.resize(&SPEC_NTSC, 40, 192).expect("resize");
        capture.refresh(true);
        capture.refresh_pixel(70, 41, 0xAA, 0xBB, 0xCC, false, true);
        capture.refresh(false);
        assert_eq!(capture.framebuffer().pixel(2, 1), Some(0x00AA_BBCC));
    }

    #[test]
    fn empty_framebuffer_cannot_be_saved() {
        let fb = Framebuffer::default();
        let path = std::env::temp_dir().join("emu-atari-2600-empty.png");
        assert!(save_screenshot(&fb, &path).is_err());
    }
}
