use elastic_core::{PointerButton, PointerEvent, PointerEventKind, PointerId, Vec2};
use smallvec::{SmallVec, smallvec};

/// Movement (px) after which a press stops being a tap candidate.
pub const TOUCH_SLOP: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    pub location: Vec2,
    /// Offset from where the pan started.
    pub translation: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Tap(Vec2),
    Pan(PanEvent),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tracking {
    Idle,
    Pressed { id: PointerId, start: Vec2 },
    Panning { id: PointerId, start: Vec2, last: Vec2 },
    /// Moved past the slop but the pan was not admitted; the touch is spent.
    Rejected { id: PointerId },
}

/// Turns one pointer's down/move/up stream into taps and pans.
pub struct GestureRecognizer {
    state: Tracking,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self {
            state: Tracking::Idle,
        }
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.state, Tracking::Panning { .. })
    }

    /// `admit` decides, from the press location, whether a pan may begin.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        admit: impl FnOnce(Vec2) -> bool,
    ) -> SmallVec<[Gesture; 2]> {
        let pos = event.position;
        match (event.event, self.state) {
            (PointerEventKind::Down(PointerButton::Primary), Tracking::Idle) => {
                self.state = Tracking::Pressed {
                    id: event.id,
                    start: pos,
                };
                SmallVec::new()
            }
            // The host lost the previous touch's up or cancel.
            (PointerEventKind::Down(PointerButton::Primary), stale) => {
                log::debug!("press while still tracking {stale:?}; restarting");
                self.state = Tracking::Pressed {
                    id: event.id,
                    start: pos,
                };
                match stale {
                    Tracking::Panning { start, last, .. } => {
                        smallvec![pan(PanPhase::Cancelled, start, last)]
                    }
                    _ => SmallVec::new(),
                }
            }
            (PointerEventKind::Move, Tracking::Pressed { id, start }) if id == event.id => {
                if distance(start, pos) <= TOUCH_SLOP {
                    return SmallVec::new();
                }
                if admit(start) {
                    self.state = Tracking::Panning {
                        id,
                        start,
                        last: pos,
                    };
                    smallvec![
                        Gesture::Pan(PanEvent {
                            phase: PanPhase::Began,
                            location: start,
                            translation: Vec2::default(),
                        }),
                        pan(PanPhase::Changed, start, pos),
                    ]
                } else {
                    log::trace!("pan not admitted at {start:?}");
                    self.state = Tracking::Rejected { id };
                    SmallVec::new()
                }
            }
            (PointerEventKind::Move, Tracking::Panning { id, start, .. }) if id == event.id => {
                self.state = Tracking::Panning {
                    id,
                    start,
                    last: pos,
                };
                smallvec![pan(PanPhase::Changed, start, pos)]
            }
            (PointerEventKind::Up(PointerButton::Primary), Tracking::Pressed { id, .. })
                if id == event.id =>
            {
                self.state = Tracking::Idle;
                smallvec![Gesture::Tap(pos)]
            }
            (PointerEventKind::Up(PointerButton::Primary), Tracking::Panning { id, start, .. })
                if id == event.id =>
            {
                self.state = Tracking::Idle;
                smallvec![pan(PanPhase::Ended, start, pos)]
            }
            (PointerEventKind::Cancel, Tracking::Panning { id, start, .. }) if id == event.id => {
                self.state = Tracking::Idle;
                smallvec![pan(PanPhase::Cancelled, start, pos)]
            }
            (
                PointerEventKind::Up(PointerButton::Primary) | PointerEventKind::Cancel,
                Tracking::Pressed { id, .. } | Tracking::Rejected { id },
            ) if id == event.id => {
                // cancelled press, or the spent touch lifting
                self.state = Tracking::Idle;
                SmallVec::new()
            }
            _ => SmallVec::new(),
        }
    }
}

fn pan(phase: PanPhase, start: Vec2, pos: Vec2) -> Gesture {
    Gesture::Pan(PanEvent {
        phase,
        location: pos,
        translation: Vec2::new(pos.x - start.x, pos.y - start.y),
    })
}

fn distance(a: Vec2, b: Vec2) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(kind: PointerEventKind, x: f32) -> PointerEvent {
        PointerEvent::touch(kind, Vec2::new(x, 20.0))
    }

    const DOWN: PointerEventKind = PointerEventKind::Down(PointerButton::Primary);
    const UP: PointerEventKind = PointerEventKind::Up(PointerButton::Primary);

    #[test]
    fn test_short_press_is_tap() {
        let mut g = GestureRecognizer::new();
        assert!(g.handle_pointer(&ev(DOWN, 50.0), |_| true).is_empty());
        assert!(g.handle_pointer(&ev(PointerEventKind::Move, 55.0), |_| true).is_empty());
        let out = g.handle_pointer(&ev(UP, 55.0), |_| true);
        assert_eq!(out.as_slice(), &[Gesture::Tap(Vec2::new(55.0, 20.0))]);
    }

    #[test]
    fn test_admitted_drag_is_pan() {
        let mut g = GestureRecognizer::new();
        g.handle_pointer(&ev(DOWN, 50.0), |_| true);
        let out = g.handle_pointer(&ev(PointerEventKind::Move, 80.0), |p| p.x == 50.0);
        assert_eq!(out.len(), 2);
        assert!(matches!(
            out[0],
            Gesture::Pan(PanEvent {
                phase: PanPhase::Began,
                ..
            })
        ));
        assert!(g.is_panning());

        let out = g.handle_pointer(&ev(UP, 120.0), |_| true);
        assert_eq!(
            out.as_slice(),
            &[Gesture::Pan(PanEvent {
                phase: PanPhase::Ended,
                location: Vec2::new(120.0, 20.0),
                translation: Vec2::new(70.0, 0.0),
            })]
        );
        assert!(!g.is_panning());
    }

    #[test]
    fn test_rejected_drag_produces_nothing() {
        let mut g = GestureRecognizer::new();
        g.handle_pointer(&ev(DOWN, 250.0), |_| true);
        assert!(g.handle_pointer(&ev(PointerEventKind::Move, 200.0), |_| false).is_empty());
        assert!(g.handle_pointer(&ev(PointerEventKind::Move, 150.0), |_| true).is_empty());
        assert!(g.handle_pointer(&ev(UP, 150.0), |_| true).is_empty());
        // recognizer is ready for the next touch
        g.handle_pointer(&ev(DOWN, 10.0), |_| true);
        assert_eq!(g.handle_pointer(&ev(UP, 10.0), |_| true).len(), 1);
    }

    #[test]
    fn test_cancel_while_panning() {
        let mut g = GestureRecognizer::new();
        g.handle_pointer(&ev(DOWN, 50.0), |_| true);
        g.handle_pointer(&ev(PointerEventKind::Move, 90.0), |_| true);
        let out = g.handle_pointer(&ev(PointerEventKind::Cancel, 95.0), |_| true);
        assert!(matches!(
            out[0],
            Gesture::Pan(PanEvent {
                phase: PanPhase::Cancelled,
                ..
            })
        ));
    }

    #[test]
    fn test_other_pointer_is_ignored() {
        let mut g = GestureRecognizer::new();
        g.handle_pointer(&ev(DOWN, 50.0), |_| true);
        let mut other = ev(UP, 50.0);
        other.id = PointerId(7);
        assert!(g.handle_pointer(&other, |_| true).is_empty());
        assert_eq!(g.handle_pointer(&ev(UP, 50.0), |_| true).len(), 1);
    }

    #[test]
    fn test_lost_release_does_not_wedge_recognizer() {
        let mut g = GestureRecognizer::new();
        g.handle_pointer(&ev(DOWN, 50.0), |_| true);
        // the release of pointer 0 never arrives
        let mut down = ev(DOWN, 250.0);
        down.id = PointerId(1);
        let mut up = ev(UP, 250.0);
        up.id = PointerId(1);
        assert!(g.handle_pointer(&down, |_| true).is_empty());
        assert_eq!(
            g.handle_pointer(&up, |_| true).as_slice(),
            &[Gesture::Tap(Vec2::new(250.0, 20.0))]
        );
    }

    #[test]
    fn test_new_press_cancels_stale_pan() {
        let mut g = GestureRecognizer::new();
        g.handle_pointer(&ev(DOWN, 50.0), |_| true);
        g.handle_pointer(&ev(PointerEventKind::Move, 90.0), |_| true);
        let mut down = ev(DOWN, 250.0);
        down.id = PointerId(1);
        let out = g.handle_pointer(&down, |_| true);
        assert_eq!(
            out.as_slice(),
            &[Gesture::Pan(PanEvent {
                phase: PanPhase::Cancelled,
                location: Vec2::new(90.0, 20.0),
                translation: Vec2::new(40.0, 0.0),
            })]
        );
        assert!(!g.is_panning());
    }
}
