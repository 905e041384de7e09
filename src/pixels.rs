use crate::histogram::{BucketColor, Canvas, PixelRect};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// RGB pixel buffer drawn into the terminal two pixel rows per cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Option<(u8, u8, u8)>>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Self {
        let mut grid = Self::default();
        grid.resize(width, height);
        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            None
        }
    }
}

impl Canvas for PixelGrid {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![None; (width * height) as usize];
    }

    fn clear(&mut self) {
        self.pixels.fill(None);
    }

    // A pixel is covered when its centre lies inside the rectangle.
    fn fill_rect(&mut self, rect: PixelRect, color: BucketColor) {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return;
        }
        let span = |start: f64, len: f64, limit: u32| {
            let lo = (start - 0.5).ceil().max(0.0);
            let hi = (start + len - 0.5).ceil().min(limit as f64);
            (lo as u32)..(hi.max(lo) as u32)
        };
        let rgb = color.rgb();
        for y in span(rect.y, rect.height, self.height) {
            for x in span(rect.x, rect.width, self.width) {
                self.pixels[(y * self.width + x) as usize] = Some(rgb);
            }
        }
    }
}

impl Widget for &PixelGrid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let to_color = |p: Option<(u8, u8, u8)>| p.map(|(r, g, b)| Color::Rgb(r, g, b));

        for row in 0..area.height {
            for col in 0..area.width {
                let (x, y) = (col as u32, row as u32 * 2);
                let top = to_color(self.get(x, y));
                let bottom = to_color(self.get(x, y + 1));
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                match (top, bottom) {
                    (None, None) => {}
                    (Some(top), None) => {
                        cell.set_char('▀').set_fg(top);
                    }
                    (None, Some(bottom)) => {
                        cell.set_char('▄').set_fg(bottom);
                    }
                    (Some(top), Some(bottom)) => {
                        cell.set_char('▀').set_fg(top).set_bg(bottom);
                    }
                }
            }
        }
    }
}
