//! Seeded sprite-skeleton skinning and screen-space depth ordering.
//!
//! An articulated 2D character is a tree of named bones, each optionally
//! carrying a sprite. A [`skin::SkinDefinition`] maps bone paths to lists of
//! appearance variants; a seed deterministically selects one permutation per
//! character. A [`depth::ZOrderTracker`] keeps overlapping characters sorted
//! by their projected screen position without disturbing the draw order of
//! bones inside each character.

pub mod check;
pub mod color;
pub mod depth;
pub mod instance;
pub mod palette;
pub mod project;
pub mod random;
pub mod skeleton;
pub mod skin;
