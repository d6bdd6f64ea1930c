use elastic_core::{AnimatedValue, AnimationSpec, Clock};
use std::rc::Rc;

use crate::layout::SegmentLayout;

#[derive(Clone, Debug, PartialEq)]
pub enum Progress {
    Idle,
    Running(SegmentLayout),
    /// Last frame of a transition; interaction is enabled again.
    Finished(SegmentLayout),
}

/// Drives the presented layout towards a target and holds the interaction
/// lock while it does.
pub struct Animator {
    clock: Rc<dyn Clock>,
    transition: Option<AnimatedValue<SegmentLayout>>,
    interaction_enabled: bool,
}

impl Animator {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            transition: None,
            interaction_enabled: true,
        }
    }

    /// Starts a transition from `from`, or from the sampled frame of the
    /// transition already running, towards `to`. Interaction stays disabled
    /// until the newest transition finishes.
    pub fn animate(&mut self, spec: AnimationSpec, from: &SegmentLayout, to: SegmentLayout) {
        let start = match self.transition.as_mut() {
            Some(running) => {
                running.update();
                log::debug!("superseding in-flight thumb animation");
                running.get().clone()
            }
            None => from.clone(),
        };
        let mut value = AnimatedValue::new(start, spec, self.clock.clone());
        value.set_target(to);
        self.transition = Some(value);
        self.interaction_enabled = false;
    }

    /// Drops any running transition; the caller applies values directly.
    pub fn cancel(&mut self) {
        if self.transition.take().is_some() {
            log::debug!("thumb animation cancelled by direct commit");
        }
        self.interaction_enabled = true;
    }

    /// Samples the running transition at the clock's current instant.
    pub fn tick(&mut self) -> Progress {
        let Some(value) = self.transition.as_mut() else {
            return Progress::Idle;
        };
        let running = value.update();
        let frame = value.get().clone();
        if running {
            Progress::Running(frame)
        } else {
            self.transition = None;
            self.interaction_enabled = true;
            Progress::Finished(frame)
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn target(&self) -> Option<&SegmentLayout> {
        self.transition.as_ref().map(|t| t.target())
    }
}
