//! Screen-space depth ordering for overlapping skeletons.
//!
//! A bone's draw order has an internal component (how the bones of one
//! skeleton relate to each other) and an external one (how whole skeletons
//! relate on screen). The tracker captures the internal orders once, then
//! re-bases them every frame on a bucket derived from the skeleton's
//! projected baseline: the lower a character stands on screen, the larger
//! its bucket and the later it draws.

use glam::Vec3;

use crate::check;
use crate::project::Projection;
use crate::skeleton::{BoneId, Skeleton};

/// Default bucket width. Every intra-skeleton draw order must stay below
/// the interval, or neighbouring buckets can interleave.
pub const DEFAULT_INTERVAL: i32 = 10;

/// Per-instance draw-order tracker.
///
/// Created once per spawned skeleton and updated every frame it lives; the
/// tracked renderer list must keep the traversal order it was initialized
/// with.
#[derive(Debug, Clone)]
pub struct ZOrderTracker {
    interval: i32,
    intra: Vec<i32>,
    last_baseline: Option<f32>,
}

impl ZOrderTracker {
    /// Capture the intra-skeleton draw orders of `renderers`, using the
    /// default interval.
    ///
    /// # Panics
    /// In strict mode, panics when `renderers` is empty or a captured draw
    /// order reaches the interval.
    pub fn initialize(skeleton: &Skeleton, renderers: &[BoneId]) -> Self {
        Self::initialize_with_interval(skeleton, renderers, DEFAULT_INTERVAL)
    }

    /// Capture the intra-skeleton draw orders of `renderers` with an
    /// explicit bucket width.
    ///
    /// # Panics
    /// In strict mode, panics when `renderers` is empty or a captured draw
    /// order reaches the interval.
    pub fn initialize_with_interval(
        skeleton: &Skeleton,
        renderers: &[BoneId],
        interval: i32,
    ) -> Self {
        check::require(
            !renderers.is_empty(),
            "no renderers provided, cannot track draw order",
        );
        let mut intra = Vec::with_capacity(renderers.len());
        for &id in renderers {
            let order = skeleton.bone(id).sprite.map_or(0, |slot| slot.draw_order);
            check::require_with(order < interval, || {
                format!(
                    "draw order of \"{}\" ({order}) reaches the interval ({interval}); \
                     keep intra-skeleton orders below the interval or raise it",
                    skeleton.bone(id).name()
                )
            });
            intra.push(order);
        }
        Self {
            interval,
            intra,
            last_baseline: None,
        }
    }

    pub fn interval(&self) -> i32 {
        self.interval
    }

    /// The captured intra-skeleton orders, in initialization order.
    pub fn intra_orders(&self) -> &[i32] {
        &self.intra
    }

    /// Recompute draw-order keys from the skeleton's projected baseline.
    ///
    /// No-op when the baseline is unchanged since the last recompute, or
    /// when no projection is available this frame; in both cases the keys
    /// keep their last values. A skipped frame does not advance the memo,
    /// so the next frame with a projection recomputes.
    ///
    /// # Panics
    /// In strict mode, panics when `renderers` does not match the
    /// initialized bone count.
    pub fn update(
        &mut self,
        skeleton: &mut Skeleton,
        renderers: &[BoneId],
        baseline_world_y: f32,
        projection: Option<&dyn Projection>,
    ) {
        check::require(
            renderers.len() == self.intra.len(),
            "renderer list does not match the initialized bone count",
        );
        if self.last_baseline == Some(baseline_world_y) {
            return;
        }
        let Some(projection) = projection else {
            return;
        };

        let screen = projection.world_to_screen(Vec3::new(0.0, baseline_world_y, 0.0));
        let bucket = projection.viewport_height() as i32 - screen.y.floor() as i32;
        for (&order, &id) in self.intra.iter().zip(renderers) {
            if let Some(slot) = skeleton.bone_mut(id).sprite.as_mut() {
                slot.draw_order = order + self.interval * bucket;
            }
        }
        self.last_baseline = Some(baseline_world_y);
    }
}
