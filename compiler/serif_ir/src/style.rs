//! Resolved character style.

/// Point size of text that carries no explicit size.
pub const DEFAULT_SIZE: u32 = 11;

/// Colour of text that carries no explicit colour (black).
pub const DEFAULT_COLOR: u32 = 0x00_0000;

/// Largest representable RGB colour, and so the largest integer literal.
pub const MAX_COLOR: u32 = 0xFF_FFFF;

/// The formatting attributes in effect for a run of text.
///
/// Colours are packed `0xRRGGBB`. An empty `font` means the document's
/// default family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub sub: bool,
    pub superscript: bool,
    pub size: u32,
    pub color: u32,
    pub font: String,
}

impl Style {
    /// Unformatted text at the default size, colour and family.
    pub fn plain() -> Self {
        Style {
            bold: false,
            italic: false,
            underline: false,
            strike: false,
            sub: false,
            superscript: false,
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR,
            font: String::new(),
        }
    }

    #[must_use]
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn with_strike(mut self) -> Self {
        self.strike = true;
        self
    }

    #[must_use]
    pub fn with_sub(mut self) -> Self {
        self.sub = true;
        self
    }

    #[must_use]
    pub fn with_super(mut self) -> Self {
        self.superscript = true;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain()
    }
}
