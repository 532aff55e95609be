use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::check;
use crate::color::Color;
use crate::palette::Palette;
use crate::skeleton::{Bone, LocalTransform, SpriteId};

/// One concrete visual variant for a single bone: the sprite it renders,
/// the local transform offset it sits at and the color it is tinted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneAppearance {
    /// Local translation of the bone.
    pub translation: Vec3,
    /// Local scale of the bone.
    pub scale: Vec3,
    /// Local rotation of the bone (Euler degrees).
    pub rotation: Vec3,
    /// Sprite rendered for the bone, if any.
    pub sprite: Option<SpriteId>,
    /// Color applied when no palette is referenced.
    pub base_color: Color,
    /// Index into the owning definition's palette list; the tint is then a
    /// seeded pick from that palette instead of `base_color`.
    #[serde(default)]
    pub palette: Option<usize>,
}

impl Default for BoneAppearance {
    /// Identity transform, no sprite, white tint.
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
            sprite: None,
            base_color: Color::WHITE,
            palette: None,
        }
    }
}

impl BoneAppearance {
    /// Appearance from explicit parts; the tint stays on the base color.
    pub fn new(sprite: Option<SpriteId>, transform: LocalTransform, base_color: Color) -> Self {
        Self {
            translation: transform.translation,
            scale: transform.scale,
            rotation: transform.rotation,
            sprite,
            base_color,
            palette: None,
        }
    }

    /// Snapshot of a bone's current transform, sprite and color.
    pub fn capture(bone: &Bone) -> Self {
        let slot = bone.sprite.unwrap_or_default();
        Self {
            translation: bone.transform.translation,
            scale: bone.transform.scale,
            rotation: bone.transform.rotation,
            sprite: slot.sprite,
            base_color: slot.color,
            palette: None,
        }
    }

    /// Apply this appearance to the bone: sprite, local transform and the
    /// base color.
    ///
    /// # Panics
    /// In strict mode, panics when the bone has no sprite slot.
    pub fn apply(&self, bone: &mut Bone) {
        check::require_with(bone.sprite.is_some(), || {
            format!("bone \"{}\" has no sprite slot to apply a skin to", bone.name())
        });
        bone.transform.translation = self.translation;
        bone.transform.scale = self.scale;
        bone.transform.rotation = self.rotation;
        if let Some(slot) = bone.sprite.as_mut() {
            slot.sprite = self.sprite;
            slot.color = self.base_color;
        }
    }

    /// As [`apply`](Self::apply), but when a palette is referenced the tint
    /// is a seeded pick from it. The pick reuses the same seed as the
    /// variant selection, so the two draws differ only by domain size.
    ///
    /// # Panics
    /// In strict mode, panics when the bone has no sprite slot or the
    /// palette reference is out of range.
    pub fn apply_with_palettes(&self, bone: &mut Bone, palettes: &[Palette], seed: i32) {
        self.apply(bone);
        if let Some(index) = self.palette {
            check::require_with(index < palettes.len(), || {
                format!(
                    "appearance references palette {index} but only {} palettes exist",
                    palettes.len()
                )
            });
            if let Some(slot) = bone.sprite.as_mut() {
                slot.color = palettes[index].select_random_color(seed);
            }
        }
    }
}
