use elastic_core::{Rect, Signal, SubId};
use std::cell::Cell;
use std::rc::Rc;

/// Clip for the selected-appearance row.
///
/// Subscribed to the control's thumb signal, so every thumb write (drag,
/// animation frame, commit) is mirrored before the next paint.
pub struct MaskSync {
    clip: Rc<Cell<Rect>>,
    mirrored: Rc<Cell<u64>>,
    source: Signal<Rect>,
    sub: SubId,
}

impl MaskSync {
    pub fn attach(thumb: &Signal<Rect>) -> Self {
        let clip = Rc::new(Cell::new(thumb.get()));
        let mirrored = Rc::new(Cell::new(0));
        let sub = thumb.subscribe({
            let clip = clip.clone();
            let mirrored = mirrored.clone();
            move |r| {
                clip.set(*r);
                mirrored.set(mirrored.get() + 1);
            }
        });
        Self {
            clip,
            mirrored,
            source: thumb.clone(),
            sub,
        }
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip.get()
    }

    /// Number of thumb updates mirrored so far.
    pub fn mirrored(&self) -> u64 {
        self.mirrored.get()
    }
}

impl Drop for MaskSync {
    fn drop(&mut self) {
        self.source.unsubscribe(self.sub);
    }
}
