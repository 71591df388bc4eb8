//! Hit testing: logical point → topmost shape.
//!
//! Reverse-walks the scene (last painted = topmost).

use crate::scene::Scene;
use kurbo::Point;

/// Index of the topmost shape containing `pt`, or `None` for background.
pub fn hit_test(scene: &Scene, pt: Point) -> Option<usize> {
    scene
        .shapes()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, shape)| shape.contains(pt))
        .map(|(idx, _)| idx)
}
