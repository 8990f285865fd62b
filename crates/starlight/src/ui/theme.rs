//! Console palette

use serde::{Deserialize, Serialize};

use crate::surface::Color;

/// Colors and bevel width shared by every element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Flat face of windows and buttons
    pub base: Color,
    /// Raised (top/left) bevel strips
    pub light: Color,
    /// Shadowed (bottom/right) bevel strips
    pub dark: Color,
    /// Text on windows, labels and enabled buttons
    pub text: Color,
    /// Text on disabled buttons
    pub disabled: Color,
    /// Bevel thickness in pixels
    pub edge: i64,
}

impl Theme {
    /// Bevel width the element constructors pad with
    pub const DEFAULT_EDGE: i64 = 3;

    /// Grey console palette
    pub const CLASSIC: Self = Self {
        base: 0xFF8D_8C7F,
        light: 0xFFA6_A595,
        dark: 0xFF7C_7B70,
        text: 0xFFFF_FFFF,
        disabled: 0xFF6B_6B6B,
        edge: Self::DEFAULT_EDGE,
    };

    /// Warm orange palette
    pub const AMBER: Self = Self {
        base: 0xFFDB_9834,
        light: 0xFFE2_AD5D,
        dark: 0xFFC1_862E,
        text: 0xFF00_0000,
        disabled: 0xFF6B_6B6B,
        edge: Self::DEFAULT_EDGE,
    };

    /// Palette with the bevel flipped, used for sunken (disabled) buttons
    #[must_use]
    pub const fn sunken(self) -> Self {
        Self {
            light: self.dark,
            dark: self.light,
            ..self
        }
    }

    /// Check the values make sense
    pub fn validate(&self) -> Result<(), String> {
        if self.edge < 0 {
            return Err(format!("Bevel edge must not be negative, got {}", self.edge));
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::CLASSIC
    }
}
