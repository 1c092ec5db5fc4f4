#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle for drawing regions and hit testing.
///
/// Uses console coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Rect::new(x, y, right - x, bottom - y)
        } else {
            Rect::default()
        }
    }

    /// Shrink the rectangle by `margin` cells on every side.
    pub fn inset(&self, margin: u16) -> Rect {
        let twice = margin.saturating_mul(2);
        Rect {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            width: self.width.saturating_sub(twice),
            height: self.height.saturating_sub(twice),
        }
    }
}

/// A signed cell position or offset.
///
/// Pointer positions translated into a widget's local space can fall left of
/// or above its origin, so the components are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by another.
    #[inline]
    #[must_use]
    pub const fn offset(self, by: Point) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
        }
    }

    /// Translate an absolute console position into the local space of a
    /// widget whose origin is `origin`.
    #[inline]
    pub const fn local_to(x: u16, y: u16, origin: Point) -> Self {
        Self {
            x: x as i32 - origin.x,
            y: y as i32 - origin.y,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));
    }

    #[test]
    fn rect_intersection_no_overlap_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(3, 3, 2, 2);
        assert_eq!(a.intersection(&b), Rect::default());
    }

    #[test]
    fn rect_inset_shrinks_both_sides() {
        let rect = Rect::new(0, 0, 10, 5);
        assert_eq!(rect.inset(1), Rect::new(1, 1, 8, 3));
        assert!(Rect::new(0, 0, 1, 1).inset(1).is_empty());
    }

    #[test]
    fn point_local_translation_can_go_negative() {
        let origin = Point::new(5, 5);
        assert_eq!(Point::local_to(7, 9, origin), Point::new(2, 4));
        assert_eq!(Point::local_to(0, 0, origin), Point::new(-5, -5));
    }

    #[test]
    fn point_offset_adds_components() {
        assert_eq!(Point::new(1, 2).offset(Point::new(-3, 4)), Point::new(-2, 6));
        assert_eq!(Point::from((3, 4)), Point::new(3, 4));
    }

    mod proptests {
        use super::Rect;
        use proptest::prelude::*;

        fn rect() -> impl Strategy<Value = Rect> {
            (0u16..200, 0u16..200, 0u16..100, 0u16..100).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn intersection_lies_in_both(a in rect(), b in rect()) {
                let i = a.intersection(&b);
                if !i.is_empty() {
                    prop_assert!(a.contains(i.x, i.y) && b.contains(i.x, i.y));
                    prop_assert!(i.right() <= a.right().min(b.right()));
                    prop_assert!(i.bottom() <= a.bottom().min(b.bottom()));
                }
                prop_assert_eq!(i, b.intersection(&a));
            }
        }
    }
}
