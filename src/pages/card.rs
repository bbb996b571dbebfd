use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tracing::info;

use super::{Frame, Page};
use crate::{
    action::Action,
    components::{scene::Scene, snowfall::SnowfallState},
    config::SceneConfig,
};

/// The card itself: a fixed scene with snow falling over it.
pub struct CardPage {
    scene: SceneConfig,
    snowfall: SnowfallState,
}

impl CardPage {
    pub fn new(scene: SceneConfig) -> Self {
        let snowfall = SnowfallState::new(scene.clone());
        CardPage { scene, snowfall }
    }

    pub fn with_snowfall(scene: SceneConfig, snowfall: SnowfallState) -> Self {
        CardPage { scene, snowfall }
    }

    pub fn snowfall(&self) -> &SnowfallState {
        &self.snowfall
    }
}

impl Page for CardPage {
    fn init(&mut self) -> Result<()> {
        info!(
            width = self.scene.width,
            height = self.scene.height,
            snowflakes = self.snowfall.snowflakes().len(),
            "card ready"
        );
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.snowfall.update();
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_stateful_widget(Scene::new(&self.scene), area, &mut self.snowfall);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn page() -> CardPage {
        let scene = SceneConfig::default();
        let snowfall = SnowfallState::with_seed(scene.clone(), 12);
        CardPage::with_snowfall(scene, snowfall)
    }

    #[test]
    fn test_only_ticks_move_snow() -> Result<()> {
        let mut page = page();
        let before = page.snowfall().snowflakes().iter().map(|f| f.pos()).collect::<Vec<_>>();

        assert_eq!(page.update(Action::Render)?, None);
        assert_eq!(page.update(Action::Resize(10, 10))?, None);
        assert_eq!(page.snowfall().ticks(), 0);

        assert_eq!(page.update(Action::Tick)?, None);
        let after = page.snowfall().snowflakes().iter().map(|f| f.pos()).collect::<Vec<_>>();
        assert_eq!(page.snowfall().ticks(), 1);
        assert_ne!(before, after);
        Ok(())
    }

    #[test]
    fn test_draw() -> Result<()> {
        let mut page = page();
        page.init()?;
        let mut terminal = Terminal::new(TestBackend::new(100, 38))?;
        terminal.draw(|f| {
            let area = f.area();
            page.draw(f, area).unwrap();
        })?;

        let text = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect::<String>();
        assert!(text.contains("Christmas"));
        Ok(())
    }
}
