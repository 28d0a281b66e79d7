//! Pixel buffer printed with half-block glyphs: each terminal cell shows two
//! vertically stacked pixels, the upper one as the `▀` foreground and the
//! lower one as the background.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color},
    QueueableCommand,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb { r, g, b }
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    px: Vec<Rgb>,
}

impl Canvas {
    /// Odd heights are rounded up so every terminal row holds two pixels.
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        let height = height + height % 2;
        Self {
            width,
            height,
            px: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Terminal rows needed to show the whole buffer.
    pub fn rows(&self) -> usize {
        self.height / 2
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.iter_mut().for_each(|p| *p = c);
    }

    /// Writes outside the buffer are clipped.
    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.px[y as usize * self.width + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.px[y * self.width + x])
    }

    /// Print the buffer with its top-left corner at terminal cell (0, 0).
    /// Colour changes are only emitted when they differ from the last cell.
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for row in 0..self.rows() {
            out.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.width {
                let top = self.px[row * 2 * self.width + col];
                let bot = self.px[(row * 2 + 1) * self.width + col];

                if bg != Some(bot) {
                    out.queue(style::SetBackgroundColor(bot.into()))?;
                    bg = Some(bot);
                }
                if top == bot {
                    out.queue(style::Print(' '))?;
                } else {
                    if fg != Some(top) {
                        out.queue(style::SetForegroundColor(top.into()))?;
                        fg = Some(top);
                    }
                    out.queue(style::Print('\u{2580}'))?; // ▀
                }
            }
        }
        out.queue(style::ResetColor)?;
        Ok(())
    }
}
