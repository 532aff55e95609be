//! Bone trees and the traversal contracts skinning depends on.
//!
//! A skeleton is a tree of named bones; some bones carry a [`SpriteSlot`]
//! the rendering backend consumes. Authoring capture and runtime
//! application both enumerate sprite bones in the same deterministic
//! depth-first order, and that shared order is what makes index-paired
//! operations valid.

mod node;
mod tree;

pub use node::{Bone, BoneId, LocalTransform, SpriteId, SpriteSlot};
pub use tree::{Capability, CapabilityRegistry, Skeleton};
