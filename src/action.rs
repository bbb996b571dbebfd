use serde::Deserialize;
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Error(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_from_name() {
        let action: Action = serde_yaml::from_str("Quit").unwrap();
        assert_eq!(action, Action::Quit);
        assert_eq!(action.to_string(), "Quit");
    }
}
