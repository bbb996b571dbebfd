use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{canvas::Canvas, StatefulWidget, Widget},
};

use super::{greeting::Greeting, snowfall::SnowfallState, tree::Tree};
use crate::{config::SceneConfig, constants::scene};

/// The whole card: tree, greeting and snowfall on a white canvas.
#[derive(Debug)]
pub struct Scene<'a> {
    config: &'a SceneConfig,
}

impl<'a> Scene<'a> {
    pub fn new(config: &'a SceneConfig) -> Self {
        Self { config }
    }
}

impl StatefulWidget for Scene<'_> {
    type State = SnowfallState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut SnowfallState) {
        let config = self.config;
        let tree = Tree::new(config.width, config.height);
        let greeting = Greeting::new(&config.greeting, &config.greeting_colors).line();
        let (greeting_x, greeting_y) = config.greeting_position;
        let snowfall: &SnowfallState = state;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(scene::WHITE)
            .x_bounds([0.0, config.width])
            .y_bounds([0.0, config.height])
            .paint(|ctx| {
                ctx.draw(&tree);
                ctx.layer();
                ctx.draw(snowfall);
                ctx.print(greeting_x, config.height - greeting_y, greeting.clone());
            })
            .render(area, buf);
    }
}
