pub use crate::animation::{
    AnimatedValue, AnimationSpec, Clock, Easing, Interpolate, ManualClock, SystemClock,
};
pub use crate::color::Color;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::input::*;
pub use crate::scene::{Scene, SceneNode};
pub use crate::signal::{Emitter, Signal, SubId, signal};
pub use crate::text::{Font, MonospaceMeasure, TextMeasure};
