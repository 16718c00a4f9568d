use acht_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use acht_core::{ColorProfile, Error, FrameBuffer, Renderer, Result};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

/// # Display
///
/// The Chip-8 display is composed of 64x32 monochrome pixels.
/// Each frame is painted into a streaming texture in the active profile's
/// colors and stretched over a window `scale` times that size.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw.
    /// * `scale` the magnitude with which that size of each pixel should be multiplied.
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self> {
        let video_subsystem = sdl.video().map_err(Error::Render)?;
        let window = video_subsystem
            .window(
                "Acht",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(render_error)?;
        let canvas = window.into_canvas().build().map_err(render_error)?;

        Ok(Display { canvas })
    }
}

impl Renderer for Display {
    /// Renders a single Chip-8 FrameBuffer.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer that represents the state of every pixel on the Display.
    /// * `profile` the colors of lit and unlit pixels.
    fn render(&mut self, frame: &FrameBuffer, profile: &ColorProfile) -> Result<()> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(render_error)?;

        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                paint(frame, profile, buffer, pitch)
            })
            .map_err(Error::Render)?;

        self.canvas.copy(&texture, None, None).map_err(Error::Render)?;
        self.canvas.present();
        Ok(())
    }
}

fn render_error(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}

/// Writes `frame` into an RGB24 pixel buffer with rows `pitch` bytes apart.
fn paint(frame: &FrameBuffer, profile: &ColorProfile, buffer: &mut [u8], pitch: usize) {
    for (y, row) in frame.iter().enumerate() {
        for (x, &lit) in row.iter().enumerate() {
            let offset = y * pitch + x * 3;
            let color = if lit {
                profile.foreground
            } else {
                profile.background
            };
            buffer[offset..offset + 3].copy_from_slice(&[color.0, color.1, color.2]);
        }
    }
}
