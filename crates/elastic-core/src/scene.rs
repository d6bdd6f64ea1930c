use crate::{Color, Font, Rect};

/// Flat display list handed to whatever renders the widget.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        font: Font,
        /// Text wider than `rect` is cut at the tail with an ellipsis
        /// instead of overflowing.
        truncate: bool,
    },
    /// Everything until the matching `PopClip` is clipped to `rect`.
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Clip rects currently open at the end of the list, innermost last.
    pub fn open_clips(&self) -> Vec<Rect> {
        let mut stack = Vec::new();
        for n in &self.nodes {
            match n {
                SceneNode::PushClip { rect, .. } => stack.push(*rect),
                SceneNode::PopClip => {
                    if stack.pop().is_none() {
                        log::warn!("PopClip with empty stack");
                    }
                }
                _ => {}
            }
        }
        stack
    }
}
