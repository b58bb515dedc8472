//! Color handling for Stencil drawings
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. The generator uses it to decide whether a drawing
//! node's fill or stroke value is a color the emitted markup can carry over.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
/// This provides convenience methods for working with colors in the Stencil project
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_core::color::Color;
    ///
    /// let green = Color::new("#4caf50").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Checks whether a raw style value is renderable as a CSS color.
    ///
    /// Drawing tools store arbitrary strings in fill/stroke fields (gradient
    /// references, "none", tool-internal tokens). Only values that parse as
    /// a CSS color are copied into emitted markup.
    pub fn is_renderable(color_str: &str) -> bool {
        DynamicColor::from_str(color_str).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hex_colors() {
        assert!(Color::new("#fff").is_ok());
        assert!(Color::new("#4caf50").is_ok());
        assert!(Color::new("#4caf50cc").is_ok());
    }

    #[test]
    fn test_parses_named_and_functional_colors() {
        assert!(Color::new("white").is_ok());
        assert!(Color::new("rgb(255, 0, 0)").is_ok());
    }

    #[test]
    fn test_rejects_non_color_values() {
        assert!(Color::new("").is_err());
        assert!(Color::new("url(#gradient-3)").is_err());
        assert!(Color::new("not a color").is_err());
    }

    #[test]
    fn test_is_renderable_matches_parse() {
        assert!(Color::is_renderable("#4caf50"));
        assert!(!Color::is_renderable("linear-gradient(red, blue)"));
    }
}
