use crate::ui::nav::NavState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, nav: &NavState) -> Paragraph<'static> {
        let title = match nav {
            NavState::UserList => "JSONPlaceholder Users".to_string(),
            NavState::TodosFor { user_name, .. } => format!("{user_name}'s Todos"),
        };

        let line = Line::from(vec![
            Span::styled(
                "  todoview",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(title, Style::default().fg(HEADER_TEXT)),
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
