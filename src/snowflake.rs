use rand::{seq::SliceRandom, Rng};
use ratatui::style::Color;

use crate::{
    config::SceneConfig,
    koch::{Curve, Point},
};

/// Per-tick motion of a snowflake. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub speed: f64,
    pub angle: f64,
    pub rotation_speed: f64,
}

impl Motion {
    fn sample<R: Rng + ?Sized>(rng: &mut R, scene: &SceneConfig) -> Self {
        Motion {
            speed: rng.gen_range(scene.speed_range.clone()),
            angle: rng.gen_range(scene.angle_range.clone()),
            rotation_speed: rng.gen_range(scene.rotation_speed_range.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snowflake {
    x: f64,
    y: f64,
    color: Color,
    depth: u32,
    scale: f64,
    curve: Curve,
    motion: Motion,
}

impl Snowflake {
    pub fn new(pos: Point, color: Color, depth: u32, scale: f64, motion: Motion) -> Self {
        Snowflake { x: pos.0, y: pos.1, color, depth, scale, curve: Curve::koch(depth, scale), motion }
    }

    /// A snowflake somewhere above or inside the viewport with every attribute drawn at random.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, scene: &SceneConfig) -> Self {
        let x = rng.gen_range(0..=scene.width as u32) as f64;
        let y = -(rng.gen_range(0..=scene.height as u32) as f64);
        let color = scene.palette.choose(rng).copied().unwrap_or(Color::White);
        let depth = rng.gen_range(scene.depth_range.clone());
        let scale = rng.gen_range(scene.spawn_scale_range.clone()) as f64;
        let motion = Motion::sample(rng, scene);

        Snowflake::new((x, y), color, depth, scale, motion)
    }

    pub fn pos(&self) -> Point {
        (self.x, self.y)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Advances one tick. Returns whether the snowflake was recycled.
    ///
    /// A snowflake that ended the previous tick below the bottom edge is sent back above the
    /// viewport instead of falling further.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, scene: &SceneConfig) -> bool {
        self.motion.angle += self.motion.rotation_speed;

        if self.y > scene.height {
            self.recycle(rng, scene);
            return true;
        }

        self.y += self.motion.speed;
        false
    }

    fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R, scene: &SceneConfig) {
        self.y = scene.recycle_offset;
        self.x = rng.gen_range(0..scene.width as u32) as f64;
        self.scale = rng.gen_range(scene.recycle_scale_range.clone()) as f64;
        self.curve = Curve::koch(self.depth, self.scale);
        self.motion.speed = rng.gen_range(scene.speed_range.clone());
        self.motion.rotation_speed = rng.gen_range(scene.rotation_speed_range.clone());
    }

    /// The curve rotated by the current angle and moved to the current position.
    pub fn project(&self) -> Vec<Point> {
        let (sin, cos) = self.motion.angle.to_radians().sin_cos();
        self.curve
            .points()
            .iter()
            .map(|&(px, py)| (self.x + px * cos - py * sin, self.y + px * sin + py * cos))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn still(speed: f64) -> Motion {
        Motion { speed, angle: 0.0, rotation_speed: 0.0 }
    }

    #[test]
    fn test_projection_at_zero_angle_is_translation() {
        let flake = Snowflake::new((120.0, 45.0), Color::Red, 2, 30.0, still(1.0));
        let expected = flake.curve().points().iter().map(|(x, y)| (x + 120.0, y + 45.0)).collect::<Vec<_>>();

        assert_eq!(flake.project(), expected);
    }

    #[test]
    fn test_projection_quarter_turn() {
        let motion = Motion { speed: 1.0, angle: 90.0, rotation_speed: 0.0 };
        let flake = Snowflake::new((10.0, 20.0), Color::Red, 0, 50.0, motion);
        let (x, y) = flake.project()[0];

        // The apex (0, -50) swings to (50, 0)
        assert!((x - 60.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_moves_and_rotates() {
        let scene = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let motion = Motion { speed: 1.5, angle: 10.0, rotation_speed: -2.0 };
        let mut flake = Snowflake::new((300.0, 0.0), Color::Green, 3, 20.0, motion);

        for _ in 0..4 {
            assert!(!flake.update(&mut rng, &scene));
        }

        assert_eq!(flake.pos(), (300.0, 6.0));
        assert_eq!(flake.motion().angle, 2.0);
    }

    #[test]
    fn test_recycle_on_the_tick_after_crossing() {
        let scene = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut flake = Snowflake::new((400.0, scene.height - 1.0), Color::Red, 2, 20.0, still(2.0));

        assert!(!flake.update(&mut rng, &scene));
        assert_eq!(flake.pos().1, scene.height + 1.0);

        assert!(flake.update(&mut rng, &scene));
        let (x, y) = flake.pos();
        assert_eq!(y, -100.0);
        assert!((0.0..scene.width).contains(&x));
    }

    #[test]
    fn test_recycle_keeps_depth_and_regenerates_curve() {
        let scene = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut flake = Snowflake::new((0.0, scene.height + 0.5), Color::Red, 4, 12.0, still(1.0));

        assert!(flake.update(&mut rng, &scene));

        assert_eq!(flake.depth(), 4);
        assert!(scene.recycle_scale_range.contains(&(flake.scale() as u32)));
        assert_eq!(flake.curve(), &Curve::koch(4, flake.scale()));
        assert_eq!(flake.curve().points()[0], (0.0, -flake.scale()));

        let motion = flake.motion();
        assert!(scene.speed_range.contains(&motion.speed));
        assert!(scene.rotation_speed_range.contains(&motion.rotation_speed));
    }

    #[test]
    fn test_recycle_bounds_over_many_ticks() {
        let scene = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut flakes = (0..scene.particle_count).map(|_| Snowflake::spawn(&mut rng, &scene)).collect::<Vec<_>>();
        let mut recycled = 0;

        for _ in 0..2_000 {
            for flake in flakes.iter_mut() {
                let was_below = flake.pos().1 > scene.height;
                let depth = flake.depth();
                let did_recycle = flake.update(&mut rng, &scene);

                assert_eq!(was_below, did_recycle);
                assert_eq!(flake.depth(), depth);
                if did_recycle {
                    recycled += 1;
                    let (x, y) = flake.pos();
                    assert_eq!(y, scene.recycle_offset);
                    assert!(x >= 0.0 && x < scene.width);
                }
            }
        }

        assert!(recycled > 0);
    }

    #[test]
    fn test_spawn_ranges() {
        let scene = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let flake = Snowflake::spawn(&mut rng, &scene);
            let (x, y) = flake.pos();

            assert!((0.0..=scene.width).contains(&x));
            assert!((-scene.height..=0.0).contains(&y));
            assert!(scene.palette.contains(&flake.color()));
            assert!(scene.depth_range.contains(&flake.depth()));
            assert!(scene.spawn_scale_range.contains(&(flake.scale() as u32)));
            assert!(scene.angle_range.contains(&flake.motion().angle));
        }
    }
}
