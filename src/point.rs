//! Planar points and the quadrants they partition the plane into.

use core::fmt::{self, Display, Formatter};

/// A point on the plane.
///
/// Points are plain values: they cannot be changed after construction and have no identity beyond their coordinates. Any ordinate type with a partial order works, including all primitive integer and floating-point types.
///
/// The `y` axis grows *downwards* when the tree is plotted, which is why the quadrant with smaller `y` ordinates is called "north".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    x: T,
    y: T,
}
impl<T> Point<T> {
    /// Creates a point from its ordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
    /// Returns a reference to the `x` ordinate.
    #[inline(always)]
    pub const fn x(&self) -> &T {
        &self.x
    }
    /// Returns a reference to the `y` ordinate.
    #[inline(always)]
    pub const fn y(&self) -> &T {
        &self.y
    }
    /// Consumes the point, returning its ordinates as an `(x, y)` tuple.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // cannot drop at compile time
    pub fn into_inner(self) -> (T, T) {
        (self.x, self.y)
    }
}
impl<T: PartialOrd> Point<T> {
    /// Returns the quadrant of `self` into which `other` falls, or `None` if the two points are equal.
    ///
    /// A point goes west if its `x` is less than ours and east otherwise, north if its `y` is less than ours and south otherwise. Points which share exactly one ordinate with `self` are thus routed east or south rather than treated as duplicates.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Point, Quadrant};
    /// let center = Point::new(5, 5);
    /// assert_eq!(center.quadrant_of(&Point::new(2, 2)), Some(Quadrant::NorthWest));
    /// assert_eq!(center.quadrant_of(&Point::new(8, 2)), Some(Quadrant::NorthEast));
    /// assert_eq!(center.quadrant_of(&Point::new(5, 9)), Some(Quadrant::SouthEast));
    /// assert_eq!(center.quadrant_of(&Point::new(5, 5)), None);
    /// ```
    #[inline]
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN ordinates go east and south
    pub fn quadrant_of(&self, other: &Self) -> Option<Quadrant> {
        if other == self {
            return None;
        }
        let east = !(other.x < self.x);
        let south = !(other.y < self.y);
        Some(match (east, south) {
            (false, false) => Quadrant::NorthWest,
            (true, false) => Quadrant::NorthEast,
            (false, true) => Quadrant::SouthWest,
            (true, true) => Quadrant::SouthEast,
        })
    }
}
impl<T> From<(T, T)> for Point<T> {
    #[inline(always)]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}
impl<T: Display> Display for Point<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One of the four child slots of a quadtree node, named after the part of the plane it covers relative to the node's point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Quadrant {
    /// Smaller `x`, smaller `y`. Slot 0.
    NorthWest = 0,
    /// Greater `x`, smaller `y`. Slot 1.
    NorthEast = 1,
    /// Smaller `x`, greater `y`. Slot 2.
    SouthWest = 2,
    /// Greater `x`, greater `y`. Slot 3.
    SouthEast = 3,
}
impl Quadrant {
    /// All quadrants in slot order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];
    /// Returns the slot index of the quadrant, from 0 to 3.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the quadrant at the specified slot index, or `None` if `index > 3`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
impl Display for Quadrant {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NorthWest => "north-west",
            Self::NorthEast => "north-east",
            Self::SouthWest => "south-west",
            Self::SouthEast => "south-east",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_quadrants() {
        let center = Point::new(5, 5);
        let expected = [
            (Point::new(2, 2), Quadrant::NorthWest),
            (Point::new(8, 2), Quadrant::NorthEast),
            (Point::new(2, 8), Quadrant::SouthWest),
            (Point::new(8, 8), Quadrant::SouthEast),
        ];
        for (point, quadrant) in &expected {
            assert_eq!(center.quadrant_of(point), Some(*quadrant));
        }
    }
    #[test]
    fn ties_go_east_and_south() {
        let center = Point::new(5.0, 5.0);
        assert_eq!(center.quadrant_of(&Point::new(5.0, 1.0)), Some(Quadrant::NorthEast));
        assert_eq!(center.quadrant_of(&Point::new(1.0, 5.0)), Some(Quadrant::SouthWest));
        assert_eq!(center.quadrant_of(&Point::new(9.0, 5.0)), Some(Quadrant::SouthEast));
    }
    #[test]
    fn slot_indices_round_trip() {
        for (i, quadrant) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(quadrant.index(), i);
            assert_eq!(Quadrant::from_index(i), Some(*quadrant));
        }
        assert_eq!(Quadrant::from_index(4), None);
    }
    #[test]
    fn display() {
        assert_eq!(Point::new(3, -4).to_string(), "(3,-4)");
        assert_eq!(format!("{:>12}", Quadrant::SouthEast), "  south-east");
    }
}
