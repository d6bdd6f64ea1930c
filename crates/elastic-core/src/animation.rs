use std::cell::Cell;
use std::rc::Rc;
use web_time::{Duration, Instant};

use crate::{Color, Rect, Vec2};

/// Envelope decay reached at the end of a spring: e^-LN_1000 = 0.1%.
const SPRING_SETTLE_LN: f32 = 6.907_755;
/// Solves e^-w * (1 + w) = 0.001, the same 0.1% for the critical envelope.
const SPRING_SETTLE_CRITICAL: f32 = 9.233_413;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    /// Damped harmonic oscillator over normalized time.
    ///
    /// `initial_velocity` is expressed in "total distance per normalized
    /// duration"; see [`AnimationSpec::spring`] for the per-second form.
    Spring {
        damping_ratio: f32,
        initial_velocity: f32,
    },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::Spring {
                damping_ratio,
                initial_velocity,
            } => spring_progress(t, damping_ratio, initial_velocity),
        }
    }
}

fn spring_progress(t: f32, zeta: f32, v0: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if zeta < 1.0 {
        // Underdamped: overshoots and rings before the envelope dies out
        let zeta = zeta.max(0.01);
        let omega = SPRING_SETTLE_LN / zeta;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        let b = (zeta * omega - v0) / omega_d;
        1.0 - envelope * ((omega_d * t).cos() + b * (omega_d * t).sin())
    } else {
        let omega = SPRING_SETTLE_CRITICAL;
        1.0 - (-omega * t).exp() * (1.0 + (omega - v0) * t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    /// Spring over `duration` with the given damping ratio (1.0 = no
    /// overshoot) and initial velocity in total-distances per second.
    pub fn spring(duration: Duration, damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            duration,
            easing: Easing::Spring {
                damping_ratio,
                initial_velocity: initial_velocity * duration.as_secs_f32(),
            },
            delay: Duration::ZERO,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Vec2 {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
        }
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Rect {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
            w: self.w.interpolate(&other.w, t),
            h: self.h.interpolate(&other.h, t),
        }
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).clamp(0.0, 255.0) as u8;
        Color(
            ch(self.0, other.0),
            ch(self.1, other.1),
            ch(self.2, other.2),
            ch(self.3, other.3),
        )
    }
}

// Animation clock
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock tests and headless hosts drive by hand. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    t: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl ManualClock {
    pub fn new(t: Instant) -> Self {
        Self {
            t: Rc::new(Cell::new(t)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }

    pub fn set(&self, t: Instant) {
        self.t.set(t);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Animated value that transitions smoothly.
///
/// Retargeting while a transition is running samples the value at the
/// current instant and continues from there.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
    clock: Rc<dyn Clock>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec, clock: Rc<dyn Clock>) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
            clock,
        }
    }

    pub fn set_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    pub fn set_target(&mut self, target: T) {
        self.update();
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(self.clock.now());
    }

    /// Jump to `value` and stop any running transition.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
    }

    /// Advance to the clock's current instant. Returns true while animating.
    pub fn update(&mut self) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = self.clock.now().saturating_duration_since(start);

        if elapsed < self.spec.delay {
            return true;
        }

        let animation_time = elapsed - self.spec.delay;

        if animation_time >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);

        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
