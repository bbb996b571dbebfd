use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout, Margin},
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    action::Action,
    config::{key_event_to_string, Config, SceneConfig},
    constants::{HEIGHT, WIDTH},
    pages::{card::CardPage, Page},
    tui,
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    page: Box<dyn Page>,
}

impl App {
    pub fn new(scene: SceneConfig) -> Result<Self> {
        let config = Config::new()?;

        Ok(Self {
            tick_rate: scene.tick_rate,
            frame_rate: scene.frame_rate,
            should_quit: false,
            config,
            page: Box::new(CardPage::new(scene)),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?;
        tui.tick_rate(self.tick_rate);
        tui.frame_rate(self.frame_rate);
        tui.enter()?;

        self.page.init()?;

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Error => action_tx.send(Action::Error("Failed to read terminal event".into()))?,
                    tui::Event::Key(key) => {
                        if let Some(action) = self.config.keybindings.get(&key) {
                            log::info!("Got action {action} from {}", key_event_to_string(&key));
                            action_tx.send(action.clone())?;
                        }
                    },
                    tui::Event::Init => {},
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match &action {
                    Action::Quit => self.should_quit = true,
                    Action::Error(msg) => log::error!("{msg}"),
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui, &action_tx)?;
                    },
                    Action::Render => {
                        self.render(&mut tui, &action_tx)?;
                    },
                    Action::Tick => {},
                }
                if let Some(action) = self.page.update(action)? {
                    action_tx.send(action)?
                }
            }

            if self.should_quit {
                log::info!("Quitting");
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, tui: &mut tui::Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            let area = f.area();

            let [_, area, _] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(HEIGHT + 2), Constraint::Fill(1)])
                    .areas(area);
            let [_, area, _] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(WIDTH + 2), Constraint::Fill(1)])
                    .areas(area);

            let border = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Gray).bg(Color::Black));
            f.render_widget(border, area);

            let area = area.inner(Margin { horizontal: 1, vertical: 1 });

            if let Err(e) = self.page.draw(f, area) {
                // The receiver lives as long as the app loop
                let _ = action_tx.send(Action::Error(format!("Failed to draw: {:?}", e)));
            }
        })?;

        Ok(())
    }
}
