//! Components and resources describing the loaded character model.
use bevy::prelude::*;

/// Marker component for the root entity of the character scene.
#[derive(Component, Debug)]
pub struct CharacterModel;

/// Axis-aligned bounding box in the model's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Vec3,
    max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Smallest box enclosing both `self` and `other`.
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Folds an iterator of boxes into their union. Empty input yields `None`.
    pub fn enclose_all(boxes: impl IntoIterator<Item = Bounds>) -> Option<Bounds> {
        boxes.into_iter().reduce(Bounds::union)
    }
}

/// Anchor bounds for bubble placement, computed once at model load time.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CharacterBounds(Bounds);

impl CharacterBounds {
    pub fn new(bounds: Bounds) -> Self {
        Self(bounds)
    }

    pub fn bounds(&self) -> Bounds {
        self.0
    }

    /// Maximum corner, the anchor point for speech bubbles.
    pub fn max_corner(&self) -> Vec3 {
        self.0.max()
    }
}

/// Graph built from the model's first animation clip.
#[derive(Resource, Debug, Clone)]
pub struct CharacterAnimation {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_takes_componentwise_extremes() {
        let a = Bounds::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 3.0, 4.0));
        let b = Bounds::new(Vec3::new(-2.0, 1.0, 3.0), Vec3::new(0.5, 2.0, 6.0));

        let merged = a.union(b);
        assert_eq!(merged.min(), Vec3::new(-2.0, 0.0, 2.0));
        assert_eq!(merged.max(), Vec3::new(1.0, 3.0, 6.0));
    }

    #[test]
    fn enclose_all_folds_every_box() {
        let boxes = vec![
            Bounds::new(Vec3::ZERO, Vec3::ONE),
            Bounds::new(Vec3::splat(-3.0), Vec3::splat(-2.0)),
            Bounds::new(Vec3::splat(0.5), Vec3::splat(5.0)),
        ];

        let merged = Bounds::enclose_all(boxes).unwrap();
        assert_eq!(merged.min(), Vec3::splat(-3.0));
        assert_eq!(merged.max(), Vec3::splat(5.0));
    }

    #[test]
    fn enclose_all_of_nothing_is_none() {
        assert!(Bounds::enclose_all(std::iter::empty()).is_none());
    }
}
