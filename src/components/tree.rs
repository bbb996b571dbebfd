use ratatui::widgets::canvas::{Painter, Shape};

use super::shapes::{Disc, FilledPolygon};
use crate::{
    constants::{scene, tree},
    koch::Point,
};

/// The decorated tree, anchored at the bottom center of the viewport.
#[derive(Debug, Clone)]
pub struct Tree {
    foliage: Vec<FilledPolygon>,
    trunk: FilledPolygon,
    star: FilledPolygon,
    ornaments: Vec<Disc>,
}

impl Tree {
    pub fn new(width: f64, height: f64) -> Self {
        let anchor = (width / 2.0, height);
        let place = |(dx, dy): Point| (anchor.0 + dx, anchor.1 + dy);

        let foliage = tree::FOLIAGE
            .iter()
            .map(|layer| FilledPolygon::new(layer.iter().copied().map(place).collect(), scene::GREEN, height))
            .collect();

        let (left, top, trunk_width, trunk_height) = tree::TRUNK;
        let trunk = FilledPolygon::rect(place((left, top)), trunk_width, trunk_height, scene::BROWN, height);

        let star = FilledPolygon::new(tree::STAR.iter().copied().map(place).collect(), scene::STAR_YELLOW, height);

        let ornaments = tree::ORNAMENTS
            .iter()
            .map(|&offset| Disc::new(place(offset), tree::ORNAMENT_RADIUS, scene::RED, height))
            .collect();

        Self { foliage, trunk, star, ornaments }
    }
}

impl Shape for Tree {
    fn draw(&self, painter: &mut Painter) {
        for layer in &self.foliage {
            layer.draw(painter);
        }
        self.trunk.draw(painter);
        self.star.draw(painter);
        for ornament in &self.ornaments {
            ornament.draw(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_parts() {
        let tree = Tree::new(800.0, 600.0);
        assert_eq!(tree.foliage.len(), 3);
        assert_eq!(tree.ornaments.len(), 8);
    }
}
