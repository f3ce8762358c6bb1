use sdl2::pixels::PixelFormatEnum;

use chip8_vm::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8_vm::FrameBuffer;

/// # Display
/// An SDL2 window showing the 64x32 Chip-8 screen, each pixel blown up to a `scale` sized square.
/// The host only calls `render` when the machine reports a changed FrameBuffer.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "CHIP-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// One RGB24 row of bytes per display row, lit pixels white and unlit black.
    /// Rows are packed at 64 * 3 bytes; `render` spreads them out to the texture's pitch.
    fn rgb_rows(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|pixel| std::iter::repeat(pixel * 255).take(3))
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::rgb_rows(frame);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            // rows may be padded past 64 * 3 bytes
            for (row, chunk) in pixels.chunks(DISPLAY_WIDTH * 3).enumerate() {
                buffer[row * pitch..row * pitch + chunk.len()].copy_from_slice(chunk);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
