//! Per-skeleton runtime: spawn-time skinning and per-frame depth updates.

use std::sync::Arc;

use rand::Rng;

use crate::depth::ZOrderTracker;
use crate::project::Projection;
use crate::skeleton::{BoneId, Capability, Skeleton};
use crate::skin::SkinDefinition;

/// A spawned character: one skeleton, the renderer list resolved for it,
/// the skins it can switch between and the tracker that keeps it sorted
/// against its neighbours.
///
/// Skins act as states (e.g. skin 0 for walking, skin 1 for climbing) and
/// every applied skin is the permutation the instance seed selects, so a
/// character keeps its identity across state changes.
#[derive(Debug)]
pub struct SkinInstance {
    skeleton: Skeleton,
    renderers: Vec<BoneId>,
    skins: Vec<Arc<SkinDefinition>>,
    tracker: ZOrderTracker,
    seed: i32,
    current_skin: Option<usize>,
    /// Offset added to the root position to form the depth baseline,
    /// scaled by the root's vertical scale.
    pub baseline_offset: f32,
    /// Whether [`update`](Self::update) refreshes draw order.
    pub update_z_order: bool,
}

impl SkinInstance {
    /// Spawn an instance: resolve the renderer list once through the
    /// capability registry, pick a seed when none is given, apply skin 0
    /// and start tracking draw order.
    ///
    /// # Panics
    /// In strict mode, panics when the skeleton has no sprite bones or a
    /// captured draw order reaches the depth interval.
    pub fn spawn(
        mut skeleton: Skeleton,
        skins: Vec<Arc<SkinDefinition>>,
        seed: Option<i32>,
        baseline_offset: f32,
    ) -> Self {
        let registry = skeleton.registry();
        let renderers = registry.bones(Capability::SpriteRenderer).to_vec();
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..i32::MAX));

        let mut current_skin = None;
        if let Some(skin) = skins.first() {
            skin.apply_random(&mut skeleton, &renderers, seed);
            current_skin = Some(0);
        } else {
            log::warn!("spawning an instance without skins, keeping the authored appearance");
        }

        let tracker = ZOrderTracker::initialize(&skeleton, &renderers);
        Self {
            skeleton,
            renderers,
            skins,
            tracker,
            seed,
            current_skin,
            baseline_offset,
            update_z_order: true,
        }
    }

    /// The seed all of this instance's skins draw with.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Mutable skeleton access for the host (movement, posing).
    pub fn skeleton_mut(&mut self) -> &mut Skeleton {
        &mut self.skeleton
    }

    /// The tracked renderer list, in the traversal order captured at spawn.
    pub fn renderers(&self) -> &[BoneId] {
        &self.renderers
    }

    /// Index of the currently applied skin, if any.
    pub fn current_skin(&self) -> Option<usize> {
        self.current_skin
    }

    /// Per-frame entry point, invoked by the owning scheduler. Recomputes
    /// draw order from the root's current position; pass `None` when no
    /// camera is current this frame.
    pub fn update(&mut self, projection: Option<&dyn Projection>) {
        if !self.update_z_order {
            return;
        }
        let root = self.skeleton.bone(self.skeleton.root());
        let baseline =
            root.transform.translation.y + self.baseline_offset * root.transform.scale.y;
        self.tracker
            .update(&mut self.skeleton, &self.renderers, baseline, projection);
    }

    /// Switch to the skin at `index`, re-rolling its permutation from the
    /// instance seed. Re-selecting the current skin or passing an index out
    /// of range changes nothing.
    pub fn set_skin(&mut self, index: usize) {
        if self.current_skin == Some(index) {
            return;
        }
        let Some(skin) = self.skins.get(index) else {
            return;
        };
        skin.apply_random(&mut self.skeleton, &self.renderers, self.seed);
        self.current_skin = Some(index);
    }
}
