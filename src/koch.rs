use std::f64::consts::FRAC_PI_3;

/// A point in local or screen space. Screen space has its origin at the top left with y growing
/// downward.
pub type Point = (f64, f64);

/// An open polyline approximating a Koch snowflake.
///
/// The last point repeats the first one, so drawing consecutive segments closes the outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    /// Generates the outline for `depth` refinement passes around the local origin.
    ///
    /// `scale` is the distance from the origin to each tip of the seed triangle and must be
    /// positive.
    pub fn koch(depth: u32, scale: f64) -> Self {
        let mut points = seed(scale);
        for _ in 0..depth {
            points = refine(&points);
        }
        Curve { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn seed(scale: f64) -> Vec<Point> {
    let half_base = scale * FRAC_PI_3.sin();
    vec![(0.0, -scale), (-half_base, scale / 2.0), (half_base, scale / 2.0), (0.0, -scale)]
}

/// Replaces the segment with `[p1, p3, p5, p4, p2]`, the middle third pushed out into a notch.
fn notch(p1: Point, p2: Point) -> [Point; 5] {
    let (dx, dy) = ((p2.0 - p1.0) / 3.0, (p2.1 - p1.1) / 3.0);
    let p3 = (p1.0 + dx, p1.1 + dy);
    let p4 = (p1.0 + 2.0 * dx, p1.1 + 2.0 * dy);
    let (sin, cos) = FRAC_PI_3.sin_cos();
    let p5 = (p3.0 + dx * cos - dy * sin, p3.1 + dx * sin + dy * cos);
    [p1, p3, p5, p4, p2]
}

fn refine(points: &[Point]) -> Vec<Point> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };

    let mut refined = Vec::with_capacity(points.len().saturating_sub(1) * 4 + 1);
    for pair in points.windows(2) {
        // Each notch ends where the next one starts
        refined.extend_from_slice(&notch(pair[0], pair[1])[..4]);
    }
    refined.push(last);
    refined
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!((a.0 - b.0).abs() < EPSILON && (a.1 - b.1).abs() < EPSILON, "{a:?} != {b:?}");
    }

    #[test]
    fn test_seed_shape() {
        let curve = Curve::koch(0, 100.0);
        let points = curve.points();

        assert_eq!(points.len(), 4);
        assert_eq!(points[0], (0.0, -100.0));
        assert_eq!(points.first(), points.last());
        assert_close(points[1], (-86.602_540_378_443_87, 50.0));
        assert_close(points[2], (86.602_540_378_443_87, 50.0));
    }

    #[test]
    fn test_seed_snapshot() {
        let rendered =
            Curve::koch(0, 100.0).points().iter().map(|(x, y)| format!("{x:.3}, {y:.3}")).collect::<Vec<_>>();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        0.000, -100.000
        -86.603, 50.000
        86.603, 50.000
        0.000, -100.000
        ");
    }

    #[test]
    fn test_deterministic() {
        let first = Curve::koch(2, 60.0);
        let second = Curve::koch(2, 60.0);

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert!(first.len() > Curve::koch(1, 60.0).len());
    }

    #[test]
    fn test_growth_per_pass() {
        for scale in [10.0, 37.0, 100.0] {
            let mut previous = Curve::koch(0, scale).len();
            for depth in 1..=5 {
                let len = Curve::koch(depth, scale).len();
                assert!(len > previous);
                assert_eq!(len, 4 * (previous - 1) + 1);
                previous = len;
            }
        }
    }

    #[test]
    fn test_notch_geometry() {
        let [p1, p3, p5, p4, p2] = notch((0.0, 0.0), (3.0, 0.0));

        assert_eq!(p1, (0.0, 0.0));
        assert_close(p3, (1.0, 0.0));
        assert_close(p5, (1.5, 3.0_f64.sqrt() / 2.0));
        assert_close(p4, (2.0, 0.0));
        assert_eq!(p2, (3.0, 0.0));
    }

    #[test]
    fn test_refined_curve_keeps_seed_vertices() {
        let seed = Curve::koch(0, 40.0);
        let refined = Curve::koch(1, 40.0);

        assert_eq!(refined.len(), 13);
        for (index, point) in seed.points().iter().enumerate() {
            assert_eq!(refined.points()[index * 4], *point);
        }
        assert_eq!(refined.points().first(), refined.points().last());
    }

    #[test]
    fn test_refine_empty() {
        assert!(refine(&[]).is_empty());
    }
}
