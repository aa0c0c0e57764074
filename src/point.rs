use core::ops::{Add, Sub};

use num_traits::Float;

use super::NativeFloat;

/// Trait defined over 2D points whose coordinates can be read as a float `Scalar`.
/// The polyline metrics only need the two axes and the distance between points,
/// so keeping the trait minimal makes it easy to plug in other point types.
pub trait Point: Copy + PartialEq {
    type Scalar: Float;

    /// Horizontal coordinate
    fn x(&self) -> Self::Scalar;

    /// Vertical coordinate
    fn y(&self) -> Self::Scalar;

    /// Returns the Euclidean distance between self and other
    fn distance(&self, other: &Self) -> Self::Scalar {
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        (dx * dx + dy * dy).sqrt()
    }
}

/// Point on the integer grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatticePoint {
    pub x: i64,
    pub y: i64,
}

impl LatticePoint {
    pub fn new(x: i64, y: i64) -> Self {
        LatticePoint { x, y }
    }

    /// Reflection across the diagonal y = x
    pub fn transpose(self) -> Self {
        LatticePoint {
            x: self.y,
            y: self.x,
        }
    }

    pub fn is_on_diagonal(&self) -> bool {
        self.x == self.y
    }
}

impl From<(i64, i64)> for LatticePoint {
    fn from((x, y): (i64, i64)) -> Self {
        LatticePoint { x, y }
    }
}

impl From<LatticePoint> for (i64, i64) {
    fn from(p: LatticePoint) -> Self {
        (p.x, p.y)
    }
}

impl Add for LatticePoint {
    type Output = Self;

    fn add(self, other: LatticePoint) -> LatticePoint {
        LatticePoint {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for LatticePoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        LatticePoint {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Point for LatticePoint {
    type Scalar = NativeFloat;

    fn x(&self) -> Self::Scalar {
        self.x as NativeFloat
    }

    fn y(&self) -> Self::Scalar {
        self.y as NativeFloat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypothenuse 5
    #[test]
    fn lattice_distance_pythagorean() {
        let p = LatticePoint::new(1, 2);
        let q = LatticePoint::new(4, 6);
        assert!((p.distance(&q) - 5.0).abs() < EPSILON);
        assert!((q.distance(&p) - 5.0).abs() < EPSILON);
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn transpose_swaps_axes() {
        let p = LatticePoint::new(3, 250);
        assert_eq!(p.transpose(), LatticePoint::new(250, 3));
        assert_eq!(p.transpose().transpose(), p);
        assert!(!p.is_on_diagonal());
        assert!(LatticePoint::new(177, 177).is_on_diagonal());
    }

    #[test]
    fn lattice_arithmetic() {
        let p = LatticePoint::new(2, 5);
        let q = LatticePoint::new(7, 1);
        assert_eq!(p + q, LatticePoint::new(9, 6));
        assert_eq!(q - p, LatticePoint::new(5, -4));
        assert_eq!(LatticePoint::from((4, 8)), LatticePoint::new(4, 8));
        assert_eq!(<(i64, i64)>::from(p), (2, 5));
    }
}
