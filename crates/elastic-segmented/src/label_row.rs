use elastic_core::{Color, Font, Rect, Size, TextMeasure};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub frame: Rect,
}

/// One row of segment titles drawn with a single color and font.
///
/// The control keeps two of these with the same titles: the base row and
/// the selected-appearance row that is only visible under the thumb.
#[derive(Clone, Debug)]
pub struct LabelRow {
    labels: Vec<Label>,
    color: Color,
    font: Font,
}

impl LabelRow {
    pub fn new(color: Color, font: Font) -> Self {
        Self {
            labels: Vec::new(),
            color,
            font,
        }
    }

    /// Replaces every label. Frames start empty until the next layout.
    pub fn set_titles<S: AsRef<str>>(&mut self, titles: &[S]) {
        self.labels = titles
            .iter()
            .map(|t| Label {
                text: t.as_ref().to_owned(),
                frame: Rect::default(),
            })
            .collect();
    }

    pub fn titles(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Natural size of every title in this row's font.
    pub fn measure(&self, measurer: &dyn TextMeasure, max: Size) -> SmallVec<[Size; 4]> {
        self.labels
            .iter()
            .map(|l| measurer.measure(&l.text, &self.font, max))
            .collect()
    }

    /// Forgets every frame, e.g. when the bounds leave no room for a layout.
    pub fn clear_frames(&mut self) {
        for label in &mut self.labels {
            label.frame = Rect::default();
        }
    }

    pub fn set_frames(&mut self, frames: &[Rect]) {
        debug_assert_eq!(frames.len(), self.labels.len());
        for (label, frame) in self.labels.iter_mut().zip(frames) {
            label.frame = *frame;
        }
    }
}
