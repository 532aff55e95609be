use serde::{Deserialize, Serialize};

use crate::check;
use crate::palette::Palette;
use crate::random::UnityRandom;
use crate::skeleton::{Bone, SpriteId};

use super::BoneAppearance;

/// The ordered list of appearances available for one bone path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantGroup {
    /// Bone identifier: the "/"-joined chain of names below the skeleton
    /// root. Uniqueness across a definition is not enforced; resolution is
    /// first-match-wins.
    pub path: String,
    /// Available appearances, in authored order.
    pub variants: Vec<BoneAppearance>,
}

impl VariantGroup {
    /// A group for `path` with no variants yet.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            variants: Vec::new(),
        }
    }

    /// Apply the appearance the seed selects. The selection is a pure
    /// function of `(seed, variants.len())`.
    ///
    /// # Panics
    /// In strict mode, panics when the group has no variants.
    pub fn apply_random(&self, bone: &mut Bone, seed: i32) {
        check::require_with(!self.variants.is_empty(), || {
            format!("cannot apply a random variant from the empty group \"{}\"", self.path)
        });
        self.variants[UnityRandom::pick(seed, self.variants.len())].apply(bone);
    }

    /// Apply the appearance the seed selects, drawing its tint from the
    /// referenced palette when it has one. Selection and tint reuse the
    /// same seed.
    ///
    /// # Panics
    /// In strict mode, panics when the group has no variants or `palettes`
    /// is empty.
    pub fn apply_random_with_palettes(&self, bone: &mut Bone, palettes: &[Palette], seed: i32) {
        check::require_with(!self.variants.is_empty(), || {
            format!("cannot apply a random variant from the empty group \"{}\"", self.path)
        });
        check::require_with(!palettes.is_empty(), || {
            format!("cannot apply a palette variant to \"{}\" without palettes", self.path)
        });
        self.variants[UnityRandom::pick(seed, self.variants.len())]
            .apply_with_palettes(bone, palettes, seed);
    }

    /// Apply the appearance at `index` directly; no seed involved.
    ///
    /// # Panics
    /// In strict mode, panics when `index` is out of range.
    pub fn apply(&self, bone: &mut Bone, index: usize) {
        check::require_with(index < self.variants.len(), || {
            format!(
                "variant index {index} out of range for \"{}\" ({} variants)",
                self.path,
                self.variants.len()
            )
        });
        self.variants[index].apply(bone);
    }

    /// Whether any variant already carries this sprite identity. "No
    /// sprite" counts as an identity of its own, so a `None` candidate
    /// matches a `None` variant.
    pub fn contains_sprite(&self, sprite: Option<SpriteId>) -> bool {
        self.variants.iter().any(|variant| variant.sprite == sprite)
    }

    /// Append a snapshot of the bone's current state as a new variant.
    pub fn push_snapshot(&mut self, bone: &Bone) {
        self.variants.push(BoneAppearance::capture(bone));
    }
}
