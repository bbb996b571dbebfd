use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Greeting text whose letters cycle through `colors`.
#[derive(Debug, Clone)]
pub struct Greeting<'a> {
    text: &'a str,
    colors: &'a [Color],
}

impl<'a> Greeting<'a> {
    pub fn new(text: &'a str, colors: &'a [Color]) -> Self {
        Self { text, colors }
    }

    pub fn line(&self) -> Line<'static> {
        let spans = self
            .text
            .chars()
            .enumerate()
            .map(|(index, letter)| {
                let style = match self.colors.len() {
                    0 => Style::default(),
                    len => Style::default().fg(self.colors[index % len]),
                };
                Span::styled(letter.to_string(), style.add_modifier(Modifier::BOLD))
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_alternating_colors() {
        let colors = [Color::Red, Color::Green];
        let line = Greeting::new("Merry", &colors).line();

        let letters = line.spans.iter().map(|span| span.content.to_string()).collect::<String>();
        let fgs = line.spans.iter().map(|span| span.style.fg).collect::<Vec<_>>();

        assert_eq!(letters, "Merry");
        assert_eq!(
            fgs,
            vec![Some(Color::Red), Some(Color::Green), Some(Color::Red), Some(Color::Green), Some(Color::Red)]
        );
    }

    #[test]
    fn test_no_colors() {
        let line = Greeting::new("Hi", &[]).line();
        assert!(line.spans.iter().all(|span| span.style.fg.is_none()));
    }
}
