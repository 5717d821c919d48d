use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::i18n::{Labels, Language};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TITLE_ACCENT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, labels: &Labels, language: Language) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(TITLE_ACCENT)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let language_tag = match language {
            Language::English => "EN",
            Language::Urdu => "UR",
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(labels.screen_title.to_string(), title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("[{language_tag}]"), text_style),
            Span::styled("  ", text_style),
            Span::styled(format!("Tab: {}", labels.change_language), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
