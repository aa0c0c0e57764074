use core::slice;

use num_traits::{One, Zero};
use tinyvec::TinyVec;

use super::*;

/// Area under the polyline through `points` by the trapezoid rule.
/// Segments running towards smaller x contribute negatively.
pub fn trapezoid_area<P: Point>(points: &[P]) -> P::Scalar {
    let two = P::Scalar::one() + P::Scalar::one();
    points
        .windows(2)
        .fold(P::Scalar::zero(), |area, w| {
            area + (w[1].x() - w[0].x()) * (w[0].y() + w[1].y()) / two
        })
}

/// Euclidean length of the polyline through `points`.
pub fn polyline_length<P: Point>(points: &[P]) -> P::Scalar {
    points
        .windows(2)
        .fold(P::Scalar::zero(), |len, w| len + w[0].distance(&w[1]))
}

/// An ordered sequence of lattice points joined by straight segments.
/// Up to `MAX_POINTS` points are stored inline; longer sequences spill to the heap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: TinyVec<[LatticePoint; MAX_POINTS]>,
}

impl Polyline {
    pub fn new() -> Self {
        Polyline {
            points: TinyVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, LatticePoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[LatticePoint] {
        self.points.as_slice()
    }

    pub fn first(&self) -> Option<LatticePoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<LatticePoint> {
        self.points.last().copied()
    }

    pub fn push(&mut self, point: LatticePoint) {
        self.points.push(point);
    }

    pub fn contains(&self, point: &LatticePoint) -> bool {
        self.points.contains(point)
    }

    /// True if the transpose of every point is also part of the polyline
    pub fn is_symmetric(&self) -> bool {
        self.points.iter().all(|p| self.points.contains(&p.transpose()))
    }

    /// Signed trapezoidal area between the polyline and the x axis
    pub fn area(&self) -> NativeFloat {
        trapezoid_area(self.points.as_slice())
    }

    pub fn length(&self) -> NativeFloat {
        polyline_length(self.points.as_slice())
    }

    /// Ratio of area to length. Fails for polylines of zero length
    /// (empty, a single point, or all points coincident).
    pub fn performance(&self) -> Result<NativeFloat, WaveformError> {
        let length = self.length();
        if length <= EPSILON {
            return Err(WaveformError::DegenerateCurve {
                points: self.len(),
            });
        }
        Ok(self.area() / length)
    }
}

impl FromIterator<LatticePoint> for Polyline {
    fn from_iter<I: IntoIterator<Item = LatticePoint>>(iter: I) -> Self {
        Polyline {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<LatticePoint> for Polyline {
    fn extend<I: IntoIterator<Item = LatticePoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a LatticePoint;
    type IntoIter = slice::Iter<'a, LatticePoint>;

    fn into_iter(self) -> slice::Iter<'a, LatticePoint> {
        self.points.iter()
    }
}
