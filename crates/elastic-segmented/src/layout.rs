//! Geometry of the control: one equal-width slot per segment, a thumb inset
//! inside the selected slot, and labels centered in their slots.
//!
//! Everything here is a pure function of its arguments. Both label rows are
//! placed from the same [`SegmentLayout`].

use elastic_core::{Interpolate, Rect, Size, Vec2};
use smallvec::SmallVec;

pub type LabelFrames = SmallVec<[Rect; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentLayout {
    pub bounds: Size,
    pub slot_width: f32,
    pub thumb: Rect,
    /// One frame per segment, shared by the base and selected rows.
    pub labels: LabelFrames,
}

impl Interpolate for SegmentLayout {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let labels = if self.labels.len() == other.labels.len() {
            self.labels
                .iter()
                .zip(other.labels.iter())
                .map(|(a, b)| a.interpolate(b, t))
                .collect()
        } else {
            other.labels.clone()
        };
        SegmentLayout {
            bounds: other.bounds,
            slot_width: self.slot_width.interpolate(&other.slot_width, t),
            thumb: self.thumb.interpolate(&other.thumb, t),
            labels,
        }
    }
}

/// `None` without segments or without horizontal room for them.
pub fn slot_width(width: f32, count: usize) -> Option<f32> {
    (count > 0 && width > 0.0).then(|| width / count as f32)
}

/// Largest size a label may take: the thumb's width and the bounds' height
/// minus the inset on both sides.
pub fn measure_constraint(bounds: Size, count: usize, inset: f32) -> Option<Size> {
    let slot = slot_width(bounds.width, count)?;
    Some(Size::new(slot - 2.0 * inset, bounds.height - 2.0 * inset))
}

pub fn thumb_rect(bounds: Size, count: usize, selected: usize, inset: f32) -> Option<Rect> {
    let slot = slot_width(bounds.width, count)?;
    let w = slot - 2.0 * inset;
    Some(Rect {
        x: inset + selected as f32 * (w + 2.0 * inset),
        y: inset,
        w,
        h: bounds.height - 2.0 * inset,
    })
}

/// Full layout for `content.len()` segments. `None` when there are none or
/// the bounds have no width.
pub fn compute(bounds: Size, selected: usize, inset: f32, content: &[Size]) -> Option<SegmentLayout> {
    let count = content.len();
    debug_assert!(count == 0 || selected < count);
    let slot = slot_width(bounds.width, count)?;
    let thumb = thumb_rect(bounds, count, selected, inset)?;
    let max_w = slot - 2.0 * inset;

    let labels = content
        .iter()
        .enumerate()
        .map(|(k, size)| {
            let w = size.width.min(max_w);
            let h = size.height;
            Rect {
                x: (slot * k as f32 + (slot - w) / 2.0).floor(),
                y: ((bounds.height - h) / 2.0).floor(),
                w,
                h,
            }
        })
        .collect();

    Some(SegmentLayout {
        bounds,
        slot_width: slot,
        thumb,
        labels,
    })
}

/// Slot under `x`, or `None` when `x` falls outside `[0, count)` slots.
pub fn index_at(x: f32, width: f32, count: usize) -> Option<usize> {
    let slot = slot_width(width, count)?;
    let i = (x / slot).floor();
    (i >= 0.0 && i < count as f32).then_some(i as usize)
}

/// Nearest slot for a released thumb, clamped into range.
pub fn settle_index(center_x: f32, width: f32, count: usize) -> Option<usize> {
    let slot = slot_width(width, count)?;
    let i = (center_x / slot).floor().max(0.0) as usize;
    Some(i.min(count - 1))
}

/// Keeps a dragged thumb inside the inset bounds. The left edge wins when
/// the thumb is wider than the space available.
pub fn clamp_thumb_x(x: f32, width: f32, inset: f32, thumb_width: f32) -> f32 {
    x.min(width - inset - thumb_width).max(inset)
}

/// A pan may start only on the thumb.
pub fn admits_pan(start: Vec2, thumb: &Rect) -> bool {
    thumb.contains(start)
}
