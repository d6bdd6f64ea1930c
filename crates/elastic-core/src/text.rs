use crate::Size;

/// Line height used for single-line text, relative to the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.3;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// `None` picks the measurer's default sans-serif family.
    pub family: Option<String>,
    /// px
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: None,
            size: 16.0,
        }
    }
}

impl Font {
    pub fn sized(size: f32) -> Self {
        Self { family: None, size }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }
}

/// Single-line text measurement supplied by the host.
///
/// Returns the natural size of `text`. `max` is the space the caller has
/// available; implementations may use it as a hint but callers clamp the
/// result themselves.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &Font, max: Size) -> Size;
}

/// Fixed advance per character. Deterministic, for headless hosts and tests.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasure {
    /// Advance of one character as a fraction of the font size.
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font: &Font, _max: Size) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(chars * font.size * self.advance, font.line_height())
    }
}
