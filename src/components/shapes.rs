use ratatui::{
    style::Color,
    widgets::canvas::{Line as CanvasLine, Painter, Shape},
};

use crate::koch::Point;

// Vertical distance between fill scanlines, in viewport units
const SCANLINE_STEP: f64 = 1.0;

/// Converts a screen-space point (y down) into canvas space (y up).
pub fn flip(height: f64, (x, y): Point) -> Point {
    (x, height - y)
}

/// Horizontal spans inside `polygon` along the scanline at `y`, even-odd rule.
///
/// The polygon is implicitly closed. Spans are sorted left to right.
pub fn scanline_spans(polygon: &[Point], y: f64) -> Vec<(f64, f64)> {
    let mut crossings = Vec::new();
    for (index, &(x1, y1)) in polygon.iter().enumerate() {
        let (x2, y2) = polygon[(index + 1) % polygon.len()];
        // Half-open so a shared vertex is counted once
        if (y1 <= y && y < y2) || (y2 <= y && y < y1) {
            crossings.push(x1 + (y - y1) * (x2 - x1) / (y2 - y1));
        }
    }
    crossings.sort_by(f64::total_cmp);

    crossings.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Connected line segments, not closed.
#[derive(Debug)]
pub struct Polyline<'a> {
    points: &'a [Point],
    color: Color,
    height: f64,
}

impl<'a> Polyline<'a> {
    pub fn new(points: &'a [Point], color: Color, height: f64) -> Self {
        Self { points, color, height }
    }
}

impl Shape for Polyline<'_> {
    fn draw(&self, painter: &mut Painter) {
        for pair in self.points.windows(2) {
            let (x1, y1) = flip(self.height, pair[0]);
            let (x2, y2) = flip(self.height, pair[1]);
            CanvasLine::new(x1, y1, x2, y2, self.color).draw(painter);
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilledPolygon {
    points: Vec<Point>,
    color: Color,
    height: f64,
}

impl FilledPolygon {
    pub fn new(points: Vec<Point>, color: Color, height: f64) -> Self {
        Self { points, color, height }
    }

    pub fn rect((left, top): Point, width: f64, rect_height: f64, color: Color, height: f64) -> Self {
        let points =
            vec![(left, top), (left + width, top), (left + width, top + rect_height), (left, top + rect_height)];
        Self::new(points, color, height)
    }
}

impl Shape for FilledPolygon {
    fn draw(&self, painter: &mut Painter) {
        if self.points.len() < 3 {
            return;
        }
        let top = self.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let bottom = self.points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let mut y = top;
        while y <= bottom {
            for (left, right) in scanline_spans(&self.points, y) {
                let (x1, y1) = flip(self.height, (left, y));
                let (x2, y2) = flip(self.height, (right, y));
                CanvasLine::new(x1, y1, x2, y2, self.color).draw(painter);
            }
            y += SCANLINE_STEP;
        }
    }
}

/// A filled circle.
#[derive(Debug, Clone)]
pub struct Disc {
    center: Point,
    radius: f64,
    color: Color,
    height: f64,
}

impl Disc {
    pub fn new(center: Point, radius: f64, color: Color, height: f64) -> Self {
        Self { center, radius, color, height }
    }
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        let (cx, cy) = self.center;
        let mut dy = -self.radius;
        while dy <= self.radius {
            let half = (self.radius * self.radius - dy * dy).max(0.0).sqrt();
            let (x1, y1) = flip(self.height, (cx - half, cy + dy));
            let (x2, y2) = flip(self.height, (cx + half, cy + dy));
            CanvasLine::new(x1, y1, x2, y2, self.color).draw(painter);
            dy += SCANLINE_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(flip(600.0, (10.0, 0.0)), (10.0, 600.0));
        assert_eq!(flip(600.0, (10.0, 450.0)), (10.0, 150.0));
    }

    #[test]
    fn test_triangle_spans() {
        let triangle = [(0.0, 0.0), (-10.0, 10.0), (10.0, 10.0)];

        assert_eq!(scanline_spans(&triangle, 5.0), vec![(-5.0, 5.0)]);
        assert!(scanline_spans(&triangle, 10.5).is_empty());
        assert!(scanline_spans(&triangle, -1.0).is_empty());
    }

    #[test]
    fn test_concave_spans() {
        // A "U" shape opening upward
        let u = [(0.0, 0.0), (2.0, 0.0), (2.0, 4.0), (4.0, 4.0), (4.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)];

        assert_eq!(scanline_spans(&u, 2.0), vec![(0.0, 2.0), (4.0, 6.0)]);
        assert_eq!(scanline_spans(&u, 5.0), vec![(0.0, 6.0)]);
    }

    #[test]
    fn test_degenerate_polygons() {
        assert!(scanline_spans(&[], 0.0).is_empty());
        assert!(scanline_spans(&[(1.0, 1.0), (5.0, 1.0)], 1.0).is_empty());
    }
}
