//! SDL2 backend for NIMBUS.
//!
//! Implements `RenderBackend` and `InputBackend` using SDL2. Extended
//! primitives (rounded rects, lines, vertical gradients) are implemented
//! with SDL2 renderer calls and software rasterization helpers.

mod font;

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use nimbus_types::backend::{Color, InputBackend, RenderBackend};
use nimbus_types::error::{NimbusError, Result};
use nimbus_types::input::{InputEvent, Key};

/// SDL2 rendering and input backend.
///
/// Supports solid-color rects, rounded rects, vertical gradients, and 8x8
/// bitmap text scaled by font size.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    viewport_w: u32,
    viewport_h: u32,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| NimbusError::Backend(e.to_string()))?;
        let video = sdl
            .video()
            .map_err(|e| NimbusError::Backend(e.to_string()))?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| NimbusError::Backend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| NimbusError::Backend(e.to_string()))?;
        let event_pump = sdl
            .event_pump()
            .map_err(|e| NimbusError::Backend(e.to_string()))?;

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self {
            canvas,
            event_pump,
            viewport_w: width,
            viewport_h: height,
        })
    }

    /// Current viewport size.
    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_w, self.viewport_h)
    }

    /// Set the SDL draw color with optional blend mode.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::None);
        }
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
    }
}

impl RenderBackend for SdlBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        self.viewport_w = width;
        self.viewport_h = height;
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(|e| NimbusError::Backend(e.to_string()))?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        let scale = if font_size >= 8 {
            (font_size / 8) as i32
        } else {
            1
        };
        let glyph_w = (font::GLYPH_WIDTH as i32) * scale;
        self.set_color(color);

        let mut cx = x;
        for ch in text.chars() {
            let glyph_data = font::glyph(ch);
            for row in 0..8i32 {
                let bits = glyph_data[row as usize];
                for col in 0..8i32 {
                    if bits & (0x80 >> col) != 0 {
                        let px = cx + col * scale;
                        let py = y + row * scale;
                        if scale == 1 {
                            let _ = self.canvas.draw_point(sdl2::rect::Point::new(px, py));
                        } else {
                            let _ = self.canvas.fill_rect(Rect::new(
                                px,
                                py,
                                scale as u32,
                                scale as u32,
                            ));
                        }
                    }
                }
            }
            cx += glyph_w;
        }
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        let scale = if font_size >= 8 {
            (font_size / 8) as u32
        } else {
            1
        };
        text.len() as u32 * font::GLYPH_WIDTH as u32 * scale
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("SDL2 backend shut down");
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()> {
        let r = (radius as u32).min(w / 2).min(h / 2) as i32;
        if r == 0 {
            return self.fill_rect(x, y, w, h, color);
        }
        self.set_color(color);
        // Center band.
        if h > 2 * r as u32 {
            self.canvas
                .fill_rect(Rect::new(x, y + r, w, h - 2 * r as u32))
                .map_err(|e| NimbusError::Backend(e.to_string()))?;
        }
        // Top and bottom caps, one row at a time with circular inset.
        for dy in 0..r {
            let inset = r - isqrt(r * r - (r - dy - 1) * (r - dy - 1));
            let row_w = w.saturating_sub(2 * inset as u32);
            if row_w == 0 {
                continue;
            }
            self.canvas
                .fill_rect(Rect::new(x + inset, y + dy, row_w, 1))
                .map_err(|e| NimbusError::Backend(e.to_string()))?;
            self.canvas
                .fill_rect(Rect::new(x + inset, y + h as i32 - dy - 1, row_w, 1))
                .map_err(|e| NimbusError::Backend(e.to_string()))?;
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        if y1 == y2 {
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
            self.canvas
                .fill_rect(Rect::new(lo, y1, (hi - lo) as u32, width as u32))
                .map_err(|e| NimbusError::Backend(e.to_string()))?;
        } else if x1 == x2 {
            let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
            self.canvas
                .fill_rect(Rect::new(x1, lo, width as u32, (hi - lo) as u32))
                .map_err(|e| NimbusError::Backend(e.to_string()))?;
        } else {
            // Diagonal: thin line per offset for thickness.
            for i in 0..width as i32 {
                self.canvas
                    .draw_line(
                        sdl2::rect::Point::new(x1, y1 + i),
                        sdl2::rect::Point::new(x2, y2 + i),
                    )
                    .map_err(|e| NimbusError::Backend(e.to_string()))?;
            }
        }
        Ok(())
    }

    fn fill_rect_gradient_v(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        top: Color,
        bottom: Color,
    ) -> Result<()> {
        for row in 0..h {
            let color = lerp_color_steps(top, bottom, row, h);
            self.set_color(color);
            self.canvas
                .fill_rect(Rect::new(x, y + row as i32, w, 1))
                .map_err(|e| NimbusError::Backend(e.to_string()))?;
        }
        Ok(())
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            if let Some(e) = map_sdl_event(event) {
                if let InputEvent::Resize { w, h } = e {
                    self.viewport_w = w;
                    self.viewport_h = h;
                }
                events.push(e);
            }
        }
        events
    }
}

/// Map an SDL2 event to a NIMBUS input event.
fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key_down(key),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::CursorMove { x, y }),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::PointerClick { x, y }),
        Event::MouseButtonUp { x, y, .. } => Some(InputEvent::PointerRelease { x, y }),
        Event::MouseWheel { y, .. } => Some(InputEvent::Wheel { delta: -y }),
        Event::Window {
            win_event: sdl2::event::WindowEvent::Resized(w, h),
            ..
        } => Some(InputEvent::Resize {
            w: w.max(0) as u32,
            h: h.max(0) as u32,
        }),
        Event::Window {
            win_event: sdl2::event::WindowEvent::FocusGained,
            ..
        } => Some(InputEvent::FocusGained),
        Event::Window {
            win_event: sdl2::event::WindowEvent::FocusLost,
            ..
        } => Some(InputEvent::FocusLost),
        _ => None,
    }
}

fn map_key_down(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::Escape => Some(InputEvent::KeyPress(Key::Escape)),
        Keycode::M => Some(InputEvent::KeyPress(Key::Menu)),
        Keycode::Home => Some(InputEvent::KeyPress(Key::Home)),
        Keycode::End => Some(InputEvent::KeyPress(Key::End)),
        Keycode::Num1 => Some(InputEvent::KeyPress(Key::Section(1))),
        Keycode::Num2 => Some(InputEvent::KeyPress(Key::Section(2))),
        Keycode::Num3 => Some(InputEvent::KeyPress(Key::Section(3))),
        Keycode::Num4 => Some(InputEvent::KeyPress(Key::Section(4))),
        _ => None,
    }
}

/// Integer color interpolation at `num / den`.
fn lerp_color_steps(a: Color, b: Color, num: u32, den: u32) -> Color {
    if den == 0 {
        return a;
    }
    let inv = den - num;
    Color::rgba(
        ((a.r as u32 * inv + b.r as u32 * num + den / 2) / den) as u8,
        ((a.g as u32 * inv + b.g as u32 * num + den / 2) / den) as u8,
        ((a.b as u32 * inv + b.b as u32 * num + den / 2) / den) as u8,
        ((a.a as u32 * inv + b.a as u32 * num + den / 2) / den) as u8,
    )
}

/// Integer square root (floor).
fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let mut x = (n as f32).sqrt() as i32;
    // Newton correction.
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(9), 3);
        assert_eq!(isqrt(10), 3);
    }

    #[test]
    fn lerp_color_steps_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(255, 255, 255);
        assert_eq!(lerp_color_steps(a, b, 0, 10), a);
        assert_eq!(lerp_color_steps(a, b, 10, 10), b);
    }

    #[test]
    fn map_quit_event() {
        let e = Event::Quit { timestamp: 0 };
        assert_eq!(map_sdl_event(e), Some(InputEvent::Quit));
    }

    #[test]
    fn map_escape_key() {
        assert_eq!(
            map_key_down(Keycode::Escape),
            Some(InputEvent::KeyPress(Key::Escape))
        );
        assert_eq!(map_key_down(Keycode::F12), None);
    }
}
