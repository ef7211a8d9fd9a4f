//! Draw lists handed to the host each frame

use glam::Vec2;

/// A 16-colour palette index (see `palette`)
pub type ColorIndex = u8;

/// One draw call, in screen units (160x144, y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear { color: ColorIndex },
    /// Filled rectangle
    Rect { pos: Vec2, size: Vec2, color: ColorIndex },
    /// Rectangle outline (1 unit wide)
    RectOutline { pos: Vec2, size: Vec2, color: ColorIndex },
    /// Text with its top-left corner at `pos`
    Text { pos: Vec2, text: String, color: ColorIndex },
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, color: ColorIndex) {
        self.commands.push(DrawCommand::Clear { color });
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: ColorIndex) {
        self.commands.push(DrawCommand::Rect {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            color,
        });
    }

    pub fn rect_outline(&mut self, x: f32, y: f32, w: f32, h: f32, color: ColorIndex) {
        self.commands.push(DrawCommand::RectOutline {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            color,
        });
    }

    pub fn text(&mut self, x: f32, y: f32, text: impl Into<String>, color: ColorIndex) {
        self.commands.push(DrawCommand::Text {
            pos: Vec2::new(x, y),
            text: text.into(),
            color,
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
