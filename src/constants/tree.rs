// Offsets from the bottom center of the viewport, screen orientation (negative y is up).

pub const FOLIAGE: [[(f64, f64); 3]; 3] = [
    [(0.0, -240.0), (-50.0, -180.0), (50.0, -180.0)],
    [(0.0, -200.0), (-70.0, -120.0), (70.0, -120.0)],
    [(0.0, -180.0), (-100.0, -40.0), (100.0, -40.0)],
];

// Left, top, width, height
pub const TRUNK: (f64, f64, f64, f64) = (-20.0, -40.0, 40.0, 40.0);

pub const STAR: [(f64, f64); 10] = [
    (0.0, -263.0),
    (-10.0, -248.0),
    (-25.0, -245.0),
    (-15.0, -230.0),
    (-20.0, -210.0),
    (0.0, -220.0),
    (20.0, -210.0),
    (15.0, -230.0),
    (25.0, -245.0),
    (10.0, -248.0),
];

pub const ORNAMENT_RADIUS: f64 = 5.0;
pub const ORNAMENTS: [(f64, f64); 8] = [
    (-20.0, -195.0),
    (20.0, -195.0),
    (-35.0, -140.0),
    (35.0, -140.0),
    (-50.0, -80.0),
    (50.0, -80.0),
    (0.0, -120.0),
    (0.0, -60.0),
];
