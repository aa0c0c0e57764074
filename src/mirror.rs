use log::trace;
use tinyvec::TinyVec;

use super::*;

/// Close a half curve into a polyline that is symmetric across the diagonal y = x.
///
/// Points below the diagonal (x > y) are dropped, the rest are sorted by x (then y)
/// and deduplicated. The reflection of that half is appended in reverse order so the
/// result runs from the y axis side over the diagonal to the x axis side.
/// A final point that already lies on the diagonal is not reflected, so it appears once.
///
/// An empty input yields an empty polyline.
pub fn mirror<I>(points: I) -> Polyline
where
    I: IntoIterator<Item = LatticePoint>,
{
    let mut half: TinyVec<[LatticePoint; MAX_POINTS]> =
        points.into_iter().filter(|p| p.y >= p.x).collect();
    half.sort_unstable();

    let mut out = Polyline::new();
    for p in half.iter().copied() {
        if out.last() != Some(p) {
            out.push(p);
        }
    }

    let kept = out.len();
    let reflected = match out.last() {
        Some(p) if p.is_on_diagonal() => kept - 1,
        _ => kept,
    };
    trace!("mirror: {} of {} points kept, {} reflected", kept, half.len(), reflected);

    let mirrored: TinyVec<[LatticePoint; MAX_POINTS]> = out.as_slice()[..reflected]
        .iter()
        .rev()
        .map(|p| p.transpose())
        .collect();
    out.extend(mirrored);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(points: &[(i64, i64)]) -> Vec<LatticePoint> {
        points.iter().map(|&p| LatticePoint::from(p)).collect()
    }

    #[test]
    fn mirror_ending_on_diagonal_keeps_single_midpoint() {
        let out = mirror(pts(&[(0, 3), (1, 3), (2, 2)]));
        assert_eq!(out.as_slice(), pts(&[(0, 3), (1, 3), (2, 2), (3, 1), (3, 0)]).as_slice());
        assert!(out.is_symmetric());
    }

    #[test]
    fn mirror_off_diagonal_reflects_every_point() {
        let out = mirror(pts(&[(0, 4), (1, 4), (2, 3)]));
        assert_eq!(
            out.as_slice(),
            pts(&[(0, 4), (1, 4), (2, 3), (3, 2), (4, 1), (4, 0)]).as_slice()
        );
        assert!(out.is_symmetric());
    }

    #[test]
    fn mirror_drops_points_below_diagonal_and_duplicates() {
        let out = mirror(pts(&[(2, 2), (0, 3), (3, 1), (0, 3), (1, 3)]));
        assert_eq!(out.as_slice(), pts(&[(0, 3), (1, 3), (2, 2), (3, 1), (3, 0)]).as_slice());
    }

    #[test]
    fn mirror_sorts_by_x() {
        let out = mirror(pts(&[(2, 2), (1, 3), (0, 3)]));
        assert_eq!(out.first(), Some(LatticePoint::new(0, 3)));
        assert_eq!(out.last(), Some(LatticePoint::new(3, 0)));
    }

    #[test]
    fn mirror_degenerate_inputs() {
        assert!(mirror(pts(&[])).is_empty());
        assert!(mirror(pts(&[(5, 1), (7, 0)])).is_empty());
        assert_eq!(mirror(pts(&[(4, 4)])).as_slice(), pts(&[(4, 4)]).as_slice());
        assert_eq!(mirror(pts(&[(1, 4)])).as_slice(), pts(&[(1, 4), (4, 1)]).as_slice());
    }

    #[test]
    fn mirror_is_idempotent_on_symmetric_input() {
        let once = mirror(pts(&[(0, 5), (1, 5), (2, 4), (3, 3)]));
        let twice = mirror(once.iter().copied());
        assert_eq!(once, twice);
    }
}
