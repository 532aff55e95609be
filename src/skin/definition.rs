use serde::{Deserialize, Serialize};

use crate::check;
use crate::palette::Palette;
use crate::skeleton::{BoneId, Skeleton};

use super::VariantGroup;

/// The full mapping of bone paths to variant groups, plus the palettes the
/// appearances may reference.
///
/// Definitions are authored data: captured from a live skeleton, grown by
/// [`merge`](Self::merge), and read-only at apply time. One definition may
/// be shared by any number of spawned characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinDefinition {
    /// One group per captured bone, in capture traversal order.
    pub variant_groups: Vec<VariantGroup>,
    /// Palettes appearances reference by index.
    pub palettes: Vec<Palette>,
}

impl SkinDefinition {
    /// Capture a skin from a live skeleton: one single-variant group per
    /// sprite-bearing descendant, named by its path from the root.
    ///
    /// Group order is exactly the skeleton's depth-first traversal order.
    /// That order is a contract: [`apply_random`](Self::apply_random) pairs
    /// groups against a renderer list produced by the same traversal.
    ///
    /// # Panics
    /// In strict mode, panics when `skeleton` lacks the posable marker.
    pub fn create_from_skeleton(skeleton: &Skeleton) -> Self {
        check::require(
            skeleton.is_posable(),
            "capturing a skin requires a posable skeleton root",
        );
        let mut variant_groups = Vec::new();
        for id in skeleton.sprite_bones() {
            let mut group = VariantGroup::new(&skeleton.path_to(id));
            group.push_snapshot(skeleton.bone(id));
            log::debug!("captured {} ({})", group.path, variant_groups.len());
            variant_groups.push(group);
        }
        Self {
            variant_groups,
            palettes: Vec::new(),
        }
    }

    /// Merge the skeleton's current state into this definition, much like a
    /// union: every group whose path resolves and whose bone now shows a
    /// sprite not yet among its variants gains a new snapshot.
    ///
    /// Merging an unchanged skeleton twice is a no-op the second time.
    ///
    /// # Panics
    /// In strict mode, panics when `skeleton` lacks the posable marker.
    pub fn merge(&mut self, skeleton: &Skeleton) {
        check::require(
            skeleton.is_posable(),
            "merging a skin requires a posable skeleton root",
        );
        for group in &mut self.variant_groups {
            let Some(id) = skeleton.find_by_path(&group.path) else {
                continue;
            };
            let Some(slot) = skeleton.bone(id).sprite else {
                continue;
            };
            if !group.contains_sprite(slot.sprite) {
                group.push_snapshot(skeleton.bone(id));
                log::debug!("merge: added {:?} to {}", slot.sprite, group.path);
            }
        }
    }

    /// Apply the permutation the seed selects to a renderer list captured
    /// in the same traversal order as this definition.
    ///
    /// The group cursor advances only when a group is applied: a group with
    /// no variants pins the cursor, so later renderers stay untouched. The
    /// iteration also stops at the end of the group list. Palettes are used
    /// whenever the definition has any.
    ///
    /// Every group draws with the same seed, so groups with equal variant
    /// counts select the same index as each other.
    ///
    /// # Panics
    /// In strict mode, panics when `renderers` does not match the captured
    /// group count.
    pub fn apply_random(&self, skeleton: &mut Skeleton, renderers: &[BoneId], seed: i32) {
        check::require(
            renderers.len() == self.variant_groups.len(),
            "renderer list does not match the captured variant groups",
        );
        let use_palettes = !self.palettes.is_empty();
        let mut cursor = 0;
        for &id in renderers {
            let Some(group) = self.variant_groups.get(cursor) else {
                break;
            };
            if group.variants.is_empty() {
                continue;
            }
            if use_palettes {
                group.apply_random_with_palettes(skeleton.bone_mut(id), &self.palettes, seed);
            } else {
                group.apply_random(skeleton.bone_mut(id), seed);
            }
            cursor += 1;
        }
    }

    /// Path-addressed application: resolve every group against the skeleton
    /// and apply to each bone that resolves; misses are skipped. An empty
    /// definition warns and applies nothing.
    pub fn apply_random_by_path(&self, skeleton: &mut Skeleton, seed: i32) {
        if self.variant_groups.is_empty() {
            log::warn!("no variant groups defined, no skin will be applied");
            return;
        }
        let use_palettes = !self.palettes.is_empty();
        for group in &self.variant_groups {
            let Some(id) = skeleton.find_by_path(&group.path) else {
                log::debug!("no bone found at {}, skipping", group.path);
                continue;
            };
            if use_palettes {
                group.apply_random_with_palettes(skeleton.bone_mut(id), &self.palettes, seed);
            } else {
                group.apply_random(skeleton.bone_mut(id), seed);
            }
        }
    }
}
