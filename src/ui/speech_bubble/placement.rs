//! Bubble and text transforms derived from the message and anchor bounds.
//!
//! Pure functions of their inputs; the constants are tuned for the shipped
//! bubble asset rather than derived from anything.
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// Widest the bubble may stretch regardless of message length.
const MAX_HORIZONTAL_SCALE: f32 = 27.0;
const HORIZONTAL_SCALE_PER_CHAR: f32 = 0.7;
const DEPTH_SCALE_PER_LINE: f32 = 2.7;
const VERTICAL_DROP_PER_LINE: f32 = 0.5;
const FORWARD_OFFSET: f32 = 10.0;

const TEXT_LIFT_PER_LINE: f32 = 0.7;
const TEXT_LIFT_BASE: f32 = 1.0;
const TEXT_FORWARD_NUDGE: f32 = 0.1;

/// Transform for the bubble scene, anchored at the model's bounding-box
/// maximum corner. `message_chars` is the raw, pre-wrap character count.
pub fn bubble_transform(message_chars: usize, line_count: usize, anchor_max: Vec3) -> Transform {
    let lines = line_count as f32;
    let horizontal = MAX_HORIZONTAL_SCALE.min(message_chars as f32 * HORIZONTAL_SCALE_PER_CHAR);

    let mut translation = anchor_max;
    translation.y -= VERTICAL_DROP_PER_LINE * lines;
    translation.z -= FORWARD_OFFSET;

    Transform {
        translation,
        rotation: Quat::from_rotation_x(FRAC_PI_2),
        scale: Vec3::new(horizontal, 1.0, DEPTH_SCALE_PER_LINE * lines),
    }
}

/// Transform for the text node, offset from the resolved bubble transform so
/// the glyphs sit on the bubble's face.
pub fn text_transform(bubble: &Transform, line_count: usize) -> Transform {
    let lines = line_count as f32;

    let mut translation = bubble.translation;
    translation.x -= bubble.scale.x;
    translation.z += TEXT_FORWARD_NUDGE;
    translation.y += lines * TEXT_LIFT_PER_LINE - TEXT_LIFT_BASE;

    Transform::from_translation(translation)
}
