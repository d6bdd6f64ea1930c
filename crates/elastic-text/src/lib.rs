//! `TextMeasure` backed by cosmic-text shaping.
//!
//! Shaping is expensive relative to everything else a segmented control
//! does per layout pass, so results are cached per (text, family, size).

use ahash::RandomState;
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, fontdb};
use elastic_core::{Font, Size, TextMeasure};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    family: Option<String>,
    size_bits: u32,
}

struct Engine {
    fs: FontSystem,
    cache: HashMap<MeasureKey, Size, RandomState>,
}

impl Engine {
    fn new(fs: FontSystem) -> Self {
        Self {
            fs,
            cache: HashMap::default(),
        }
    }

    fn measure(&mut self, text: &str, font: &Font) -> Size {
        let key = MeasureKey {
            text: text.to_owned(),
            family: font.family.clone(),
            size_bits: font.size.to_bits(),
        };
        if let Some(s) = self.cache.get(&key) {
            return *s;
        }
        let s = shape_single_line(&mut self.fs, text, font);
        log::trace!("measured {text:?} at {}px -> {s:?}", font.size);
        self.cache.insert(key, s);
        s
    }
}

// Shape without wrapping and report the widest run and total line height.
fn shape_single_line(fs: &mut FontSystem, text: &str, font: &Font) -> Size {
    // cosmic-text rejects a zero line height
    if font.size.is_nan() || font.size <= 0.0 {
        return Size::default();
    }
    let metrics = Metrics::new(font.size, font.line_height());
    let mut buf = Buffer::new(fs, metrics);
    {
        let attrs = match font.family.as_deref() {
            Some(name) => Attrs::new().family(Family::Name(name)),
            None => Attrs::new(),
        };
        let mut b = buf.borrow_with(fs);
        b.set_size(None, None);
        b.set_text(text, &attrs, Shaping::Advanced, None);
        b.shape_until_scroll(true);
    }

    let mut width = 0.0f32;
    let mut lines = 0usize;
    for run in buf.layout_runs() {
        width = width.max(run.line_w);
        lines += 1;
    }
    Size::new(width, lines.max(1) as f32 * metrics.line_height)
}

static SHARED: OnceCell<Arc<Mutex<Engine>>> = OnceCell::new();

/// Measures with system fonts (shared engine) or a private font set.
#[derive(Clone)]
pub struct CosmicMeasure {
    engine: Arc<Mutex<Engine>>,
}

impl Default for CosmicMeasure {
    fn default() -> Self {
        Self::shared()
    }
}

impl CosmicMeasure {
    /// Process-wide engine over the system font database.
    pub fn shared() -> Self {
        let engine = SHARED
            .get_or_init(|| Arc::new(Mutex::new(Engine::new(FontSystem::new()))))
            .clone();
        Self { engine }
    }

    /// Private engine that only knows the given font files.
    pub fn with_font_data(fonts: impl IntoIterator<Item = Vec<u8>>) -> Self {
        let mut db = fontdb::Database::new();
        for data in fonts {
            db.load_font_data(data);
        }
        let fs = FontSystem::new_with_locale_and_db("en-US".to_string(), db);
        Self {
            engine: Arc::new(Mutex::new(Engine::new(fs))),
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.engine.lock().cache.len()
    }

    pub fn clear_cache(&self) {
        self.engine.lock().cache.clear();
    }
}

impl TextMeasure for CosmicMeasure {
    fn measure(&self, text: &str, font: &Font, _max: Size) -> Size {
        self.engine.lock().measure(text, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_is_cached_per_font() {
        let m = CosmicMeasure::with_font_data(Vec::new());
        let font = Font::sized(16.0);
        let max = Size::new(100.0, 40.0);

        let a = m.measure("Day", &font, max);
        let b = m.measure("Day", &font, max);
        assert_eq!(a, b);
        assert_eq!(m.cached_entries(), 1);

        m.measure("Day", &Font::sized(20.0), max);
        assert_eq!(m.cached_entries(), 2);

        m.clear_cache();
        assert_eq!(m.cached_entries(), 0);
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let m = CosmicMeasure::with_font_data(Vec::new());
        let font = Font::sized(10.0);
        let s = m.measure("", &font, Size::new(50.0, 50.0));
        assert_eq!(s.width, 0.0);
        assert!((s.height - font.line_height()).abs() < 1e-4);
    }
}
