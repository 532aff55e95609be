use serde::{Deserialize, Serialize};

use crate::check;
use crate::color::Color;
use crate::random::UnityRandom;

/// Named collection of colors that bones may draw a tint from.
///
/// Palettes are authored data, immutable at runtime and possibly shared by
/// many skin definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Human readable name identifying the intention of the colors.
    pub name: String,
    /// The colors making up the set.
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn new(name: &str, colors: Vec<Color>) -> Self {
        Self {
            name: name.to_string(),
            colors,
        }
    }

    /// Returns a color selected by the given seed.
    ///
    /// A pure function of `(seed, colors.len())`: the same seed always
    /// returns the same color.
    ///
    /// # Panics
    /// In strict mode, panics when the palette is empty.
    pub fn select_random_color(&self, seed: i32) -> Color {
        check::require_with(!self.colors.is_empty(), || {
            format!(
                "palette \"{}\" is empty, add colors before selecting from it",
                self.name
            )
        });
        self.colors[UnityRandom::pick(seed, self.colors.len())]
    }
}
