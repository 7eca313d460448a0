//! Line rasterization
//!
//! Integer-only conversion of a segment between two grid points into the
//! 8-connected cells that draw it.

/// A grid point `(x, y)`
pub type GridPoint = (i64, i64);

/// Cells of the discrete line between two grid points, endpoints included.
///
/// Each cell along the major axis is visited exactly once, and the minor
/// coordinate is the exact rounding of the ideal line at that cell. The path
/// is always computed from the lexicographically smaller endpoint, so
/// swapping the endpoints yields the same cells in reverse order.
///
/// The iterator is lazy and yields from both ends. A clone resumes from the
/// same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment {
    /// Canonical start point
    origin: GridPoint,
    /// Total displacement along the major axis (non-negative)
    major: i64,
    /// Total displacement along the minor axis (signed)
    minor: i64,
    /// Whether the major axis is x
    x_major: bool,
    /// Sign of the step along the major axis
    major_dir: i64,
    /// Whether to yield canonical steps back to front
    reversed: bool,
    /// Next canonical step from the front
    front: i64,
    /// One past the last canonical step from the back
    back: i64,
}

impl LineSegment {
    /// Cells from `start` to `end`
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        let reversed = end < start;
        let (origin, target) = if reversed { (end, start) } else { (start, end) };

        let dx = target.0 - origin.0;
        let dy = target.1 - origin.1;
        let x_major = dx.abs() >= dy.abs();
        let (major, minor, major_dir) = if x_major {
            (dx.abs(), dy, dx.signum())
        } else {
            (dy.abs(), dx, dy.signum())
        };

        Self {
            origin,
            major,
            minor,
            x_major,
            major_dir,
            reversed,
            front: 0,
            back: major + 1,
        }
    }

    /// The cell at canonical step `i`
    fn point_at(&self, i: i64) -> GridPoint {
        let along = i * self.major_dir;
        let across = if self.major == 0 {
            0
        } else {
            round_div(i * self.minor, self.major)
        };
        if self.x_major {
            (self.origin.0 + along, self.origin.1 + across)
        } else {
            (self.origin.0 + across, self.origin.1 + along)
        }
    }
}

/// `n / d` rounded to nearest, halves away from zero, for `d > 0`
fn round_div(n: i64, d: i64) -> i64 {
    if n >= 0 {
        (2 * n + d) / (2 * d)
    } else {
        -((-2 * n + d) / (2 * d))
    }
}

impl Iterator for LineSegment {
    type Item = GridPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let step = if self.reversed {
            self.back -= 1;
            self.back
        } else {
            self.front += 1;
            self.front - 1
        };
        Some(self.point_at(step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LineSegment {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let step = if self.reversed {
            self.front += 1;
            self.front - 1
        } else {
            self.back -= 1;
            self.back
        };
        Some(self.point_at(step))
    }
}

impl ExactSizeIterator for LineSegment {}

impl std::iter::FusedIterator for LineSegment {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_point() {
        let cells: Vec<_> = LineSegment::new((3, 4), (3, 4)).collect();
        assert_eq!(cells, vec![(3, 4)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        let cells: Vec<_> = LineSegment::new((0, 0), (3, 0)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);

        let cells: Vec<_> = LineSegment::new((2, 5), (2, 2)).collect();
        assert_eq!(cells, vec![(2, 5), (2, 4), (2, 3), (2, 2)]);
    }

    #[test]
    fn test_diagonal() {
        let cells: Vec<_> = LineSegment::new((0, 0), (3, -3)).collect();
        assert_eq!(cells, vec![(0, 0), (1, -1), (2, -2), (3, -3)]);
    }

    #[test]
    fn test_shallow_slope() {
        let cells: Vec<_> = LineSegment::new((0, 0), (4, 1)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_steep_slope_never_skips_rows() {
        let cells: Vec<_> = LineSegment::new((0, 0), (1, 6)).collect();
        assert_eq!(cells.len(), 7);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.1, i as i64);
        }
    }

    #[test]
    fn test_restartable_and_exact_size() {
        let segment = LineSegment::new((0, 0), (5, 2));
        assert_eq!(segment.len(), 6);
        let first: Vec<_> = segment.clone().collect();
        let second: Vec<_> = segment.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reversed_endpoints_mirror() {
        let forward: Vec<_> = LineSegment::new((1, 7), (6, 2)).collect();
        let mut backward: Vec<_> = LineSegment::new((6, 2), (1, 7)).collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_double_ended() {
        let segment = LineSegment::new((0, 0), (4, 2));
        let forward: Vec<_> = segment.clone().collect();
        let mut backward: Vec<_> = segment.rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    proptest! {
        #[test]
        fn prop_connected_and_symmetric(
            x0 in -50i64..50, y0 in -50i64..50,
            x1 in -50i64..50, y1 in -50i64..50,
        ) {
            let path: Vec<_> = LineSegment::new((x0, y0), (x1, y1)).collect();
            prop_assert_eq!(path[0], (x0, y0));
            prop_assert_eq!(*path.last().unwrap(), (x1, y1));
            prop_assert_eq!(
                path.len() as i64,
                (x1 - x0).abs().max((y1 - y0).abs()) + 1
            );

            for pair in path.windows(2) {
                prop_assert!((pair[1].0 - pair[0].0).abs() <= 1);
                prop_assert!((pair[1].1 - pair[0].1).abs() <= 1);
                prop_assert_ne!(pair[0], pair[1]);
            }

            let mut reverse: Vec<_> = LineSegment::new((x1, y1), (x0, y0)).collect();
            reverse.reverse();
            prop_assert_eq!(path, reverse);
        }
    }
}
