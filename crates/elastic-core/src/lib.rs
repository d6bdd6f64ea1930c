//! # Core types for the elastic widgets
//!
//! Everything a widget needs that is not specific to one widget:
//!
//! - `Rect`, `Size`, `Vec2` — local-coordinate geometry in px.
//! - `Color`, `Font` and the `TextMeasure` seam the host fills in.
//! - `AnimatedValue<T>` — clock-driven transitions with spring easing.
//! - `Signal<T>` / `Emitter<T>` — synchronous, widget-scoped pub/sub.
//! - `PointerEvent` — raw input delivered by the host.
//! - `Scene` — the display list a widget paints into.
//!
//! ## Animation clock
//!
//! Animations never read the system time directly. Each `AnimatedValue`
//! holds an `Rc<dyn Clock>`; hosts pass `SystemClock`, tests pass a
//! `ManualClock` and step it:
//!
//! ```rust
//! use elastic_core::*;
//! use std::rc::Rc;
//! use web_time::Duration;
//!
//! let clock = ManualClock::default();
//! let mut a = AnimatedValue::new(
//!     0.0f32,
//!     AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
//!     Rc::new(clock.clone()),
//! );
//! a.set_target(10.0);
//! clock.advance(Duration::from_millis(50));
//! a.update();
//! assert!((*a.get() - 5.0).abs() < 0.01);
//! ```
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a value whose subscribers run
//! synchronously on every write:
//!
//! ```rust
//! use elastic_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod scene;
pub mod signal;
pub mod tests;
pub mod text;

pub use animation::*;
pub use color::*;
pub use geometry::*;
pub use input::*;
pub use scene::*;
pub use signal::*;
pub use text::*;
