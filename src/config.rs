use std::{
    collections::HashMap,
    ops::{Range, RangeInclusive},
    path::PathBuf,
};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_builder::Builder;
use derive_deref::{Deref, DerefMut};
use ratatui::style::Color;
use serde::{de::Deserializer, Deserialize};

use crate::{
    action::Action,
    constants::{self, scene},
};

const CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    pub fn new() -> Result<Self> {
        let default_config: Config = serde_yaml::from_str(CONFIG)?;
        let data_dir = crate::utils::get_data_dir();
        let config_dir = crate::utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [("config.yaml", config::FileFormat::Yaml)];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(config::File::from(config_dir.join(file)).format(*format).required(false));
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!("No user configuration found in {}, using defaults", config_dir.display());
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert_with(|| action.clone());
        }

        Ok(cfg)
    }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_keybindings = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = raw_keybindings
            .into_iter()
            .map(|(key_str, action)| parse_key_event(&key_str).map(|event| (event, action)))
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(<D::Error as serde::de::Error>::custom)?;

        Ok(KeyBindings(keybindings))
    }
}

/// Everything that shapes the scene. The defaults are the compiled-in card.
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(default)]
pub struct SceneConfig {
    pub width: f64,
    pub height: f64,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub palette: Vec<Color>,
    pub particle_count: usize,
    pub depth_range: RangeInclusive<u32>,
    pub spawn_scale_range: RangeInclusive<u32>,
    pub recycle_scale_range: RangeInclusive<u32>,
    pub speed_range: Range<f64>,
    pub rotation_speed_range: Range<f64>,
    pub angle_range: Range<f64>,
    pub recycle_offset: f64,
    pub greeting: String,
    pub greeting_colors: Vec<Color>,
    pub greeting_position: (f64, f64),
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: scene::VIEWPORT_WIDTH,
            height: scene::VIEWPORT_HEIGHT,
            tick_rate: constants::TICK_RATE,
            frame_rate: constants::FRAME_RATE,
            palette: Vec::from(scene::SNOWFLAKE_COLORS),
            particle_count: scene::SNOWFLAKE_COUNT,
            depth_range: scene::DEPTH_RANGE,
            spawn_scale_range: scene::SPAWN_SCALE_RANGE,
            recycle_scale_range: scene::RECYCLE_SCALE_RANGE,
            speed_range: scene::SPEED_RANGE,
            rotation_speed_range: scene::ROTATION_SPEED_RANGE,
            angle_range: scene::ANGLE_RANGE,
            recycle_offset: scene::RECYCLE_OFFSET,
            greeting: scene::GREETING_TEXT.to_string(),
            greeting_colors: Vec::from(scene::GREETING_COLORS),
            greeting_position: (
                scene::VIEWPORT_WIDTH / 2.0 + scene::GREETING_OFFSET.0,
                scene::GREETING_OFFSET.1,
            ),
        }
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{}`", raw));
    }
    let raw = raw.trim_start_matches('<').trim_end_matches('>');

    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            },
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            },
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            },
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, modifiers: KeyModifiers) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "f1" => KeyCode::F(1),
        "f10" => KeyCode::F(10),
        "f12" => KeyCode::F(12),
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().unwrap_or_default();
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        },
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let char;
    let key_code = match key_event.code {
        KeyCode::Backspace => "backspace",
        KeyCode::Enter => "enter",
        KeyCode::Tab => "tab",
        KeyCode::Delete => "delete",
        KeyCode::Esc => "esc",
        KeyCode::F(c) => {
            char = format!("f{c}");
            &char
        },
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => {
            char = c.to_string();
            &char
        },
        _ => "",
    };

    let mut modifiers = Vec::with_capacity(3);

    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }

    if key_event.modifiers.intersects(KeyModifiers::SHIFT) {
        modifiers.push("shift");
    }

    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");

    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(key_code);

    key
}
