/// Rendering collaborator contract.
///
/// All coordinates are playfield pixels. Images and fonts are opaque: the
/// core names them by role and never looks inside.

use crate::palette::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }
}

/// Named font handles, resolved once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Score,
    Ui,
    Small,
}

impl FontRole {
    pub const ALL: [FontRole; 4] = [FontRole::Title, FontRole::Score, FontRole::Ui, FontRole::Small];

    /// Nominal point size.
    pub fn size(self) -> i32 {
        match self {
            FontRole::Title => 72,
            FontRole::Score => 28,
            FontRole::Ui => 22,
            FontRole::Small => 18,
        }
    }
}

/// Pre-scaled images loaded once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Enemy,
}

pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    /// Outline `width` pixels thick.
    fn stroke_rect(&mut self, rect: Rect, color: Rgba, width: i32);
    /// `width == 0` fills the disc; otherwise draws a ring.
    fn circle(&mut self, center: (i32, i32), radius: i32, color: Rgba, width: i32);
    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba, width: i32);
    /// Text with its top-left corner at `pos`.
    fn text(&mut self, text: &str, font: FontRole, color: Rgba, pos: (i32, i32));
    /// Pixel extent `(w, h)` of `text` in `font`.
    fn text_size(&self, text: &str, font: FontRole) -> (i32, i32);
    fn sprite(&mut self, sprite: SpriteId, pos: (i32, i32));
    /// Show everything drawn since the previous call.
    fn present(&mut self) -> std::io::Result<()>;
}

// ── Recording canvas ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect(Rect, Rgba),
    StrokeRect(Rect, Rgba, i32),
    Circle((i32, i32), i32, Rgba, i32),
    Line((i32, i32), (i32, i32), Rgba, i32),
    Text(String, FontRole, Rgba, (i32, i32)),
    Sprite(SpriteId, (i32, i32)),
}

/// Keeps every command issued since the last `present`. Each call to
/// `present` moves the pending commands into `last_frame`.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub pending: Vec<DrawCommand>,
    pub last_frame: Vec<DrawCommand>,
    pub frames_presented: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strings of every text command in the last presented frame.
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text(s, ..) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self, id: SpriteId) -> usize {
        self.last_frame
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Sprite(s, _) if *s == id))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.pending.push(DrawCommand::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, width: i32) {
        self.pending.push(DrawCommand::StrokeRect(rect, color, width));
    }

    fn circle(&mut self, center: (i32, i32), radius: i32, color: Rgba, width: i32) {
        self.pending.push(DrawCommand::Circle(center, radius, color, width));
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba, width: i32) {
        self.pending.push(DrawCommand::Line(from, to, color, width));
    }

    fn text(&mut self, text: &str, font: FontRole, color: Rgba, pos: (i32, i32)) {
        self.pending.push(DrawCommand::Text(text.to_string(), font, color, pos));
    }

    fn text_size(&self, text: &str, font: FontRole) -> (i32, i32) {
        let size = font.size();
        (text.chars().count() as i32 * size / 2, size)
    }

    fn sprite(&mut self, sprite: SpriteId, pos: (i32, i32)) {
        self.pending.push(DrawCommand::Sprite(sprite, pos));
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        Ok(())
    }
}
