//! Rectangles assigned to windows.

use std::collections::HashMap;

use ratatui::layout::Rect;

/// Window name to assigned rectangle.
pub type WindowDimensions = HashMap<String, Dimensions>;

/// Inclusive cell bounds of a window.
///
/// A rectangle with `x1 < x0` or `y1 < y0` is degenerate: the window got no
/// space and should not be drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Left column.
    pub x0: i32,
    /// Right column, inclusive.
    pub x1: i32,
    /// Top row.
    pub y0: i32,
    /// Bottom row, inclusive.
    pub y1: i32,
}

impl Dimensions {
    /// Create dimensions from inclusive bounds.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Dimensions covering `width` x `height` cells from `(x0, y0)`.
    #[must_use]
    pub fn from_origin(x0: i32, y0: i32, width: i32, height: i32) -> Self {
        Self {
            x0,
            x1: x0 + width - 1,
            y0,
            y1: y0 + height - 1,
        }
    }

    /// Number of columns. Zero or negative when hidden.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Number of rows. Zero or negative when hidden.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Returns true if the window has no space to be drawn in.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Convert to a ratatui [`Rect`].
    ///
    /// Returns `None` for hidden rectangles and for rectangles that start at
    /// a negative coordinate or do not fit in `u16`.
    #[must_use]
    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_hidden() {
            return None;
        }
        let x = u16::try_from(self.x0).ok()?;
        let y = u16::try_from(self.y0).ok()?;
        let width = u16::try_from(self.width()).ok()?;
        let height = u16::try_from(self.height()).ok()?;
        x.checked_add(width)?;
        y.checked_add(height)?;
        Some(Rect::new(x, y, width, height))
    }
}

impl From<Rect> for Dimensions {
    fn from(rect: Rect) -> Self {
        Self::from_origin(
            i32::from(rect.x),
            i32::from(rect.y),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin() {
        let d = Dimensions::from_origin(2, 3, 10, 4);

        assert_eq!(d, Dimensions::new(2, 3, 11, 6));
        assert_eq!(d.width(), 10);
        assert_eq!(d.height(), 4);
        assert!(!d.is_hidden());
    }

    #[test]
    fn test_zero_size_is_hidden() {
        let d = Dimensions::from_origin(10, 0, 0, 10);

        assert_eq!(d, Dimensions::new(10, 0, 9, 9));
        assert_eq!(d.width(), 0);
        assert!(d.is_hidden());
        assert_eq!(d.to_rect(), None);
    }

    #[test]
    fn test_to_rect() {
        let d = Dimensions::new(0, 1, 9, 9);

        assert_eq!(d.to_rect(), Some(Rect::new(0, 1, 10, 9)));
    }

    #[test]
    fn test_to_rect_rejects_negative_origin() {
        let d = Dimensions::new(-1, 0, 5, 5);

        assert!(!d.is_hidden());
        assert_eq!(d.to_rect(), None);
    }

    #[test]
    fn test_to_rect_rejects_overflow() {
        let d = Dimensions::from_origin(i32::from(u16::MAX) - 1, 0, 10, 1);

        assert_eq!(d.to_rect(), None);
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(4, 2, 20, 5);
        let d = Dimensions::from(rect);

        assert_eq!(d, Dimensions::new(4, 2, 23, 6));
        assert_eq!(d.to_rect(), Some(rect));
    }
}
