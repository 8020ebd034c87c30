/// Color in either OKLCH or sRGB space.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }
}

/// Inline per-element style overrides.
///
/// Only the properties the enhancement behaviors animate are modeled;
/// everything else lives in stylesheet text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub opacity: Option<f32>,
    /// Vertical offset in pixels, positive pushes the element down.
    pub translate_y: Option<i16>,
    /// Offsets within the parent, used for positioned decorations.
    pub left: Option<i16>,
    pub top: Option<i16>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn translate_y(mut self, offset: i16) -> Self {
        self.translate_y = Some(offset);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }
}
