use elastic_core::{AnimationSpec, Color, Font};
use web_time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("thumb inset must be finite and non-negative (got {0})")]
    InvalidInset(f32),
    #[error("corner radius must be finite and non-negative (got {0})")]
    InvalidCornerRadius(f32),
    #[error("font size must be finite and positive (got {0})")]
    InvalidFontSize(f32),
    #[error("animation duration must be positive")]
    ZeroDuration,
    #[error("spring damping must be finite and positive (got {0})")]
    InvalidDamping(f32),
    #[error("initial spring velocity must be finite (got {0})")]
    InvalidVelocity(f32),
}

/// Spring used when the thumb moves to a new segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringSpec {
    pub duration: Duration,
    /// Damping ratio; below 1.0 the thumb overshoots and settles back.
    pub damping: f32,
    /// Distance-per-second relative to the whole travel.
    pub initial_velocity: f32,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            damping: 0.75,
            initial_velocity: 0.0,
        }
    }
}

impl SpringSpec {
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.duration.is_zero() {
            return Err(StyleError::ZeroDuration);
        }
        if !self.damping.is_finite() || self.damping <= 0.0 {
            return Err(StyleError::InvalidDamping(self.damping));
        }
        if !self.initial_velocity.is_finite() {
            return Err(StyleError::InvalidVelocity(self.initial_velocity));
        }
        Ok(())
    }

    pub fn to_animation_spec(&self) -> AnimationSpec {
        AnimationSpec::spring(self.duration, self.damping, self.initial_velocity)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmentedStyle {
    pub base_text_color: Color,
    pub selected_text_color: Color,
    pub font: Font,
    pub background_color: Color,
    /// `None` rounds the control into a pill (half the height).
    pub corner_radius: Option<f32>,
    pub thumb_color: Color,
    /// `None` rounds the thumb into a pill (half its height).
    pub thumb_corner_radius: Option<f32>,
    pub thumb_inset: f32,
    pub animation: SpringSpec,
}

impl Default for SegmentedStyle {
    fn default() -> Self {
        Self {
            base_text_color: Color::from_hex("#B0B0B0"),
            selected_text_color: Color::WHITE,
            font: Font::default(),
            background_color: Color::from_hex("#1E1E1E"),
            corner_radius: None,
            thumb_color: Color::from_hex("#2196F3"),
            thumb_corner_radius: None,
            thumb_inset: 2.0,
            animation: SpringSpec::default(),
        }
    }
}

pub(crate) fn check_inset(inset: f32) -> Result<(), StyleError> {
    if inset.is_finite() && inset >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidInset(inset))
    }
}

pub(crate) fn check_radius(radius: Option<f32>) -> Result<(), StyleError> {
    match radius {
        Some(r) if !r.is_finite() || r < 0.0 => Err(StyleError::InvalidCornerRadius(r)),
        _ => Ok(()),
    }
}

pub(crate) fn check_font(font: &Font) -> Result<(), StyleError> {
    if font.size.is_finite() && font.size > 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidFontSize(font.size))
    }
}

impl SegmentedStyle {
    pub fn validate(&self) -> Result<(), StyleError> {
        check_inset(self.thumb_inset)?;
        check_radius(self.corner_radius)?;
        check_radius(self.thumb_corner_radius)?;
        check_font(&self.font)?;
        self.animation.validate()
    }
}
