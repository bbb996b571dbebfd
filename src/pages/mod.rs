use color_eyre::eyre::Result;
use ratatui::layout::Rect;

use crate::{action::Action, tui::Frame};

pub mod card;

pub trait Page {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()>;
}
