//! # Elastic segmented control
//!
//! A horizontal row of mutually exclusive text segments with a thumb that
//! highlights the selection. The thumb can be tapped to any segment or
//! dragged between them; it springs into place when released.
//!
//! Three layers are kept in sync:
//!
//! - the base label row,
//! - the thumb,
//! - the selected-appearance label row, clipped to the thumb so its text
//!   "wipes" in under the moving thumb.
//!
//! ```rust
//! use elastic_core::*;
//! use elastic_segmented::ElasticSegmentedControl;
//! use std::rc::Rc;
//!
//! let mut control =
//!     ElasticSegmentedControl::with_titles(&["Day", "Week", "Month"], Rc::new(MonospaceMeasure::default()));
//! control.set_bounds(Size::new(300.0, 40.0));
//! control.on_value_changed(|i| log::info!("selected {i}"));
//!
//! control.handle_tap(Vec2::new(250.0, 20.0));
//! assert_eq!(control.selected_index(), 2);
//!
//! // once per frame; false when the thumb has settled
//! let _animating = control.tick();
//! let scene = control.paint();
//! assert!(!scene.nodes.is_empty());
//! ```
//!
//! Layout lives in [`layout`] and is pure; [`animator::Animator`] moves the
//! presented layout; [`mask::MaskSync`] mirrors the thumb into the clip on
//! every write; [`gestures::GestureRecognizer`] turns raw pointer events into
//! taps and pans for hosts that don't have their own recognizers.

pub mod animator;
pub mod control;
pub mod gestures;
pub mod label_row;
pub mod layout;
pub mod mask;
mod paint;
pub mod style;

pub use control::ElasticSegmentedControl;
pub use gestures::{Gesture, GestureRecognizer, PanEvent, PanPhase};
pub use label_row::{Label, LabelRow};
pub use layout::SegmentLayout;
pub use style::{SegmentedStyle, SpringSpec, StyleError};
