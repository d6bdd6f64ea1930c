use elastic_core::{
    Clock, Color, Emitter, Font, PointerEvent, Rect, Signal, Size, SubId, SystemClock,
    TextMeasure, Vec2, signal,
};
use std::rc::Rc;

use crate::animator::{Animator, Progress};
use crate::gestures::{Gesture, GestureRecognizer, PanEvent, PanPhase};
use crate::label_row::LabelRow;
use crate::layout::{self, SegmentLayout};
use crate::mask::MaskSync;
use crate::style::{self, SegmentedStyle, SpringSpec, StyleError};

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    origin_x: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Idle,
    Dragging(DragSession),
}

/// Row of mutually exclusive text segments with a thumb that can be tapped
/// or dragged between them.
///
/// The host feeds bounds, input and one [`tick`](Self::tick) per frame, and
/// draws [`paint`](Self::paint). Listeners registered with
/// [`on_value_changed`](Self::on_value_changed) run synchronously and must
/// not call back into the control.
pub struct ElasticSegmentedControl {
    base_row: LabelRow,
    selected_row: LabelRow,
    selected_index: usize,
    bounds: Size,
    pub(crate) style: SegmentedStyle,
    pub(crate) presented: Option<SegmentLayout>,
    mode: Mode,
    animator: Animator,
    gestures: GestureRecognizer,
    measurer: Rc<dyn TextMeasure>,
    thumb: Signal<Rect>,
    pub(crate) mask: MaskSync,
    value_changed: Emitter<usize>,
}

impl ElasticSegmentedControl {
    pub fn new(measurer: Rc<dyn TextMeasure>) -> Self {
        Self::with_clock(measurer, Rc::new(SystemClock))
    }

    pub fn with_clock(measurer: Rc<dyn TextMeasure>, clock: Rc<dyn Clock>) -> Self {
        let style = SegmentedStyle::default();
        let thumb = signal(Rect::default());
        let mask = MaskSync::attach(&thumb);
        Self {
            base_row: LabelRow::new(style.base_text_color, style.font.clone()),
            selected_row: LabelRow::new(style.selected_text_color, style.font.clone()),
            selected_index: 0,
            bounds: Size::default(),
            style,
            presented: None,
            mode: Mode::Idle,
            animator: Animator::new(clock),
            gestures: GestureRecognizer::new(),
            measurer,
            thumb,
            mask,
            value_changed: Emitter::new(),
        }
    }

    pub fn with_titles<S: AsRef<str>>(titles: &[S], measurer: Rc<dyn TextMeasure>) -> Self {
        let mut control = Self::new(measurer);
        control.set_titles(titles);
        control
    }

    pub fn titles(&self) -> Vec<String> {
        self.base_row.titles()
    }

    /// Replaces the segments in both rows. A selection that no longer
    /// exists moves to the last segment; no notification is sent.
    pub fn set_titles<S: AsRef<str>>(&mut self, titles: &[S]) {
        self.base_row.set_titles(titles);
        self.selected_row.set_titles(titles);
        let count = titles.len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            log::debug!(
                "selection {} out of range after replacing segments; clamping to {}",
                self.selected_index,
                count - 1
            );
            self.selected_index = count - 1;
        }
        self.relayout();
    }

    pub fn segment_count(&self) -> usize {
        self.base_row.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn base_row(&self) -> &LabelRow {
        &self.base_row
    }

    pub fn selected_row(&self) -> &LabelRow {
        &self.selected_row
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        if bounds != self.bounds {
            self.bounds = bounds;
            self.relayout();
        }
    }

    /// Thumb rect currently on screen (mid-animation or mid-drag included).
    pub fn thumb_rect(&self) -> Option<Rect> {
        self.presented.as_ref().map(|l| l.thumb)
    }

    pub fn presented_layout(&self) -> Option<&SegmentLayout> {
        self.presented.as_ref()
    }

    /// Clip applied to the selected-appearance row.
    pub fn clip_rect(&self) -> Rect {
        self.mask.clip_rect()
    }

    pub fn mask(&self) -> &MaskSync {
        &self.mask
    }

    pub fn style(&self) -> &SegmentedStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SegmentedStyle) -> Result<(), StyleError> {
        style.validate().inspect_err(|e| log::warn!("rejected style: {e}"))?;
        self.base_row.set_color(style.base_text_color);
        self.base_row.set_font(style.font.clone());
        self.selected_row.set_color(style.selected_text_color);
        self.selected_row.set_font(style.font.clone());
        self.style = style;
        self.relayout();
        Ok(())
    }

    pub fn set_base_text_color(&mut self, color: Color) {
        self.style.base_text_color = color;
        self.base_row.set_color(color);
    }

    pub fn set_selected_text_color(&mut self, color: Color) {
        self.style.selected_text_color = color;
        self.selected_row.set_color(color);
    }

    pub fn set_font(&mut self, font: Font) -> Result<(), StyleError> {
        style::check_font(&font)?;
        self.base_row.set_font(font.clone());
        self.selected_row.set_font(font.clone());
        self.style.font = font;
        self.relayout();
        Ok(())
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.style.background_color = color;
    }

    pub fn set_thumb_color(&mut self, color: Color) {
        self.style.thumb_color = color;
    }

    pub fn set_corner_radius(&mut self, radius: Option<f32>) -> Result<(), StyleError> {
        style::check_radius(radius)?;
        self.style.corner_radius = radius;
        Ok(())
    }

    pub fn set_thumb_corner_radius(&mut self, radius: Option<f32>) -> Result<(), StyleError> {
        style::check_radius(radius)?;
        self.style.thumb_corner_radius = radius;
        Ok(())
    }

    pub fn set_thumb_inset(&mut self, inset: f32) -> Result<(), StyleError> {
        style::check_inset(inset)?;
        self.style.thumb_inset = inset;
        self.relayout();
        Ok(())
    }

    pub fn set_animation(&mut self, spring: SpringSpec) -> Result<(), StyleError> {
        spring.validate()?;
        self.style.animation = spring;
        Ok(())
    }

    pub fn corner_radius(&self) -> f32 {
        self.style
            .corner_radius
            .unwrap_or(self.bounds.height / 2.0)
    }

    pub fn thumb_corner_radius(&self) -> f32 {
        self.style
            .thumb_corner_radius
            .unwrap_or_else(|| self.thumb_rect().map_or(0.0, |t| t.h / 2.0))
    }

    /// Called with the new index whenever the selection changes.
    pub fn on_value_changed(&self, f: impl Fn(&usize) + 'static) -> SubId {
        self.value_changed.subscribe(f)
    }

    pub fn remove_value_changed(&self, id: SubId) {
        self.value_changed.unsubscribe(id);
    }

    /// Called on every thumb move, e.g. to schedule a redraw.
    pub fn on_thumb_changed(&self, f: impl Fn(&Rect) + 'static) -> SubId {
        self.thumb.subscribe(f)
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.animator.is_interaction_enabled()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, Mode::Dragging(_))
    }

    /// Moves the selection to `index`. Out-of-range indices are ignored.
    ///
    /// Animated changes notify only when the index actually changes, so a
    /// drag released over the current segment just settles the thumb.
    /// Non-animated changes always notify, even for the current index.
    pub fn set_selected_index(&mut self, index: usize, animated: bool) {
        if index >= self.segment_count() {
            log::trace!(
                "ignoring selection {index}; only {} segments",
                self.segment_count()
            );
            return;
        }
        if let Mode::Dragging(_) = self.mode {
            log::debug!("selection set during drag; dropping drag session");
            self.mode = Mode::Idle;
        }

        let same = index == self.selected_index;
        self.selected_index = index;
        let Some(target) = self.target_layout() else {
            return;
        };

        if animated {
            if !same {
                self.value_changed.emit(&index);
            }
            let from = self.presented.clone().unwrap_or_else(|| target.clone());
            self.animator
                .animate(self.style.animation.to_animation_spec(), &from, target);
        } else {
            self.animator.cancel();
            self.present(target);
            self.value_changed.emit(&index);
        }
    }

    /// Advance the running animation to the clock's current time. Returns
    /// true while another frame is needed.
    pub fn tick(&mut self) -> bool {
        match self.animator.tick() {
            Progress::Idle => false,
            Progress::Running(frame) => {
                self.present(frame);
                true
            }
            Progress::Finished(frame) => {
                log::trace!("thumb settled at {:?}", frame.thumb);
                self.present(frame);
                false
            }
        }
    }

    /// Selects the segment under `location`. Returns false if ignored.
    pub fn handle_tap(&mut self, location: Vec2) -> bool {
        if !self.is_interaction_enabled() {
            log::trace!("tap dropped while animating");
            return false;
        }
        match layout::index_at(location.x, self.bounds.width, self.segment_count()) {
            Some(index) => {
                self.set_selected_index(index, true);
                true
            }
            None => {
                log::trace!("tap at {location:?} outside every segment");
                false
            }
        }
    }

    /// Whether a pan starting at `location` belongs to this control.
    pub fn should_begin_pan(&self, location: Vec2) -> bool {
        self.thumb_rect()
            .is_some_and(|thumb| layout::admits_pan(location, &thumb))
    }

    /// Returns false when the event was not consumed.
    pub fn handle_pan(&mut self, event: PanEvent) -> bool {
        match event.phase {
            PanPhase::Began => {
                if !self.is_interaction_enabled() {
                    log::trace!("pan dropped while animating");
                    return false;
                }
                if !self.should_begin_pan(event.location) {
                    return false;
                }
                let Some(thumb) = self.thumb_rect() else {
                    return false;
                };
                log::debug!("drag began at thumb x={}", thumb.x);
                self.mode = Mode::Dragging(DragSession { origin_x: thumb.x });
                true
            }
            PanPhase::Changed => {
                let Mode::Dragging(session) = self.mode else {
                    return false;
                };
                let Some(presented) = self.presented.as_mut() else {
                    return false;
                };
                let thumb = &mut presented.thumb;
                thumb.x = layout::clamp_thumb_x(
                    session.origin_x + event.translation.x,
                    self.bounds.width,
                    self.style.thumb_inset,
                    thumb.w,
                );
                let thumb = *thumb;
                self.thumb.set(thumb);
                true
            }
            PanPhase::Ended | PanPhase::Cancelled => {
                if !self.is_dragging() {
                    return false;
                }
                self.mode = Mode::Idle;
                let center = self.thumb_rect().map_or(0.0, |t| t.center_x());
                if let Some(index) =
                    layout::settle_index(center, self.bounds.width, self.segment_count())
                {
                    log::debug!("drag {:?}; settling on {index}", event.phase);
                    self.set_selected_index(index, true);
                }
                true
            }
        }
    }

    /// Feeds a raw pointer event through the tap/pan recognizer.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let thumb = self.thumb_rect();
        let enabled = self.is_interaction_enabled();
        let gestures = self.gestures.handle_pointer(event, |start| {
            enabled && thumb.is_some_and(|t| layout::admits_pan(start, &t))
        });

        let mut handled = false;
        for g in gestures {
            handled |= match g {
                Gesture::Tap(p) => self.handle_tap(p),
                Gesture::Pan(e) => self.handle_pan(e),
            };
        }
        handled
    }

    fn target_layout(&self) -> Option<SegmentLayout> {
        let count = self.segment_count();
        let inset = self.style.thumb_inset;
        let max = layout::measure_constraint(self.bounds, count, inset)?;
        let sizes = self.base_row.measure(self.measurer.as_ref(), max);
        layout::compute(self.bounds, self.selected_index, inset, &sizes)
    }

    /// Recomputes everything from bounds, content and selection and applies
    /// it immediately.
    fn relayout(&mut self) {
        self.animator.cancel();
        match self.target_layout() {
            Some(target) => self.present(target),
            None => {
                self.base_row.clear_frames();
                self.selected_row.clear_frames();
                self.presented = None;
                self.thumb.set(Rect::default());
            }
        }
    }

    // Every presented-thumb write outside a drag goes through here.
    fn present(&mut self, layout: SegmentLayout) {
        self.base_row.set_frames(&layout.labels);
        self.selected_row.set_frames(&layout.labels);
        let thumb = layout.thumb;
        self.presented = Some(layout);
        self.thumb.set(thumb);
    }
}
