use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Handle to a bone within one [`Skeleton`](super::Skeleton).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoneId(pub(crate) u32);

/// Opaque reference to a sprite owned by the asset pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u64);

/// Local transform of a bone. Rotation is Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalTransform {
    pub translation: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
        }
    }
}

/// The renderable part of a bone: what the rendering backend consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpriteSlot {
    /// Sprite to render, if any is assigned.
    pub sprite: Option<SpriteId>,
    /// Tint applied to the sprite.
    pub color: Color,
    /// Draw-order key consumed by the rendering backend.
    pub draw_order: i32,
}

impl SpriteSlot {
    pub fn new(sprite: Option<SpriteId>, draw_order: i32) -> Self {
        Self {
            sprite,
            color: Color::WHITE,
            draw_order,
        }
    }
}

/// A named node of a skeleton, optionally carrying a sprite.
#[derive(Debug, Clone)]
pub struct Bone {
    pub(crate) name: String,
    pub(crate) parent: Option<BoneId>,
    pub(crate) children: Vec<BoneId>,
    /// Local transform, mutated when a skin variant is applied.
    pub transform: LocalTransform,
    /// Renderable capability; `None` for plain grouping bones.
    pub sprite: Option<SpriteSlot>,
}

impl Bone {
    pub(crate) fn new(name: &str, parent: Option<BoneId>, sprite: Option<SpriteSlot>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            transform: LocalTransform::default(),
            sprite,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    pub fn children(&self) -> &[BoneId] {
        &self.children
    }
}
