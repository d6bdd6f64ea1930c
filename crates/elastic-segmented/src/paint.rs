use elastic_core::{Rect, Scene, SceneNode};

use crate::control::ElasticSegmentedControl;
use crate::label_row::LabelRow;

impl ElasticSegmentedControl {
    /// Display list for the current frame, back to front: background, base
    /// labels, thumb, then the selected labels clipped to the thumb.
    ///
    /// Label frames are hard limits, so every title is marked for tail
    /// truncation.
    pub fn paint(&self) -> Scene {
        let mut scene = Scene::new();
        let bounds = Rect::from_size(self.bounds());
        let radius = self.corner_radius();

        scene.push(SceneNode::Rect {
            rect: bounds,
            color: self.style.background_color,
            radius,
        });
        // the control clips its own content to its rounded bounds
        scene.push(SceneNode::PushClip {
            rect: bounds,
            radius,
        });
        // without a layout there is nothing to place labels or a thumb in
        if let Some(thumb) = self.thumb_rect() {
            push_labels(&mut scene, self.base_row());
            let thumb_radius = self.thumb_corner_radius();
            scene.push(SceneNode::Rect {
                rect: thumb,
                color: self.style.thumb_color,
                radius: thumb_radius,
            });
            scene.push(SceneNode::PushClip {
                rect: self.mask.clip_rect(),
                radius: thumb_radius,
            });
            push_labels(&mut scene, self.selected_row());
            scene.push(SceneNode::PopClip);
        }

        scene.push(SceneNode::PopClip);
        scene
    }
}

fn push_labels(scene: &mut Scene, row: &LabelRow) {
    for label in row.labels() {
        scene.push(SceneNode::Text {
            rect: label.frame,
            text: label.text.clone(),
            color: row.color(),
            font: row.font().clone(),
            truncate: true,
        });
    }
}
