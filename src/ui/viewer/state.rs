// SPDX-License-Identifier: MPL-2.0
//! Derived viewer geometry for landscape media shown inside a portrait
//! viewport.

use iced_core::{Point, Rectangle, Size};

/// The portrait viewport the media surface renders into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The unrotated render rectangle: the full viewport.
    #[must_use]
    pub fn upright_rect(self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(self.width, self.height))
    }

    /// The render rectangle for 90°-rotated content.
    ///
    /// Width and height are swapped and the rectangle is re-centered so
    /// the rotated content fills the viewport:
    /// `offset_left = (w - h) / 2`, `offset_top = (h - w) / 2`.
    #[must_use]
    pub fn rotated_rect(self) -> Rectangle {
        let offset_left = (self.width - self.height) / 2.0;
        let offset_top = (self.height - self.width) / 2.0;
        Rectangle::new(
            Point::new(offset_left, offset_top),
            Size::new(self.height, self.width),
        )
    }
}

/// Whether a source's natural dimensions make it a landscape source.
#[must_use]
pub fn is_landscape(source_width: f32, source_height: f32) -> bool {
    source_width > source_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upright_rect_covers_viewport() {
        let rect = Viewport::new(390.0, 844.0).upright_rect();
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.width, 390.0);
        assert_eq!(rect.height, 844.0);
    }

    #[test]
    fn rotated_rect_swaps_and_recenters() {
        let rect = Viewport::new(390.0, 844.0).rotated_rect();
        assert_eq!(rect.width, 844.0);
        assert_eq!(rect.height, 390.0);
        assert_eq!(rect.x, (390.0 - 844.0) / 2.0);
        assert_eq!(rect.y, (844.0 - 390.0) / 2.0);
        // The rotated rectangle stays centered on the viewport center.
        assert_eq!(rect.x + rect.width / 2.0, 195.0);
        assert_eq!(rect.y + rect.height / 2.0, 422.0);
    }

    #[test]
    fn landscape_detection() {
        assert!(is_landscape(1920.0, 1080.0));
        assert!(!is_landscape(1080.0, 1920.0));
        assert!(!is_landscape(512.0, 512.0));
    }
}
