//! Skin definitions: seeded visual variants for sprite skeletons.
//!
//! A [`SkinDefinition`] maps bone paths to [`VariantGroup`]s and carries the
//! palettes their appearances may reference. Applying a definition with a
//! seed deterministically picks one appearance per bone, so a character
//! spawned with the same seed always wears the same outfit.

mod appearance;
mod definition;
mod variant;

pub mod asset;

pub use appearance::BoneAppearance;
pub use definition::SkinDefinition;
pub use variant::VariantGroup;
