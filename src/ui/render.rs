//! Frame rendering: header, active screen, footer.

use crate::api::{Todo, TodoApi, User};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::nav::NavState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<A: TodoApi>(frame: &mut Frame<'_>, app: &App<A>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let nav = app.nav_state();

    frame.render_widget(Header::new().widget(&nav), header);
    frame.render_widget(Clear, body);

    match nav {
        NavState::UserList => draw_user_screen(frame, app, body),
        NavState::TodosFor { .. } => draw_todo_screen(frame, app, body),
    }

    frame.render_widget(Footer::new().widget(&nav, footer), footer);
}

fn draw_user_screen<A: TodoApi>(frame: &mut Frame<'_>, app: &App<A>, body: Rect) {
    use crate::ui::users::UserListState;

    match app.user_list_state() {
        UserListState::Loading => draw_loading(frame, body, "Loading users..."),
        UserListState::Failed(message) => draw_error(frame, body, &message),
        UserListState::Loaded(users) => {
            let items: Vec<ListItem> = users.iter().map(user_row).collect();
            let mut state = ListState::default();
            state.select(Some(app.selected_user().min(users.len().saturating_sub(1))));

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                )
                .highlight_style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("› ");

            frame.render_stateful_widget(list, body, &mut state);
        }
    }
}

fn draw_todo_screen<A: TodoApi>(frame: &mut Frame<'_>, app: &App<A>, body: Rect) {
    use crate::ui::todos::TodoListState;

    match app.todo_list_state() {
        TodoListState::Loading => draw_loading(frame, body, "Loading todos..."),
        TodoListState::Failed(message) => draw_error(frame, body, &message),
        TodoListState::Loaded(todos) => {
            let items: Vec<ListItem> = todos.iter().map(todo_row).collect();
            let mut state = ListState::default();
            state.select(Some(app.selected_todo().min(todos.len().saturating_sub(1))));

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                )
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
                .highlight_symbol("› ");

            frame.render_stateful_widget(list, body, &mut state);
        }
    }
}

fn user_row(user: &User) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(user.name.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("  {} · {}", user.email, user.company.name),
            Style::default().fg(DIM_TEXT),
        ),
    ]))
}

fn todo_row(todo: &Todo) -> ListItem<'static> {
    let (mark, mark_style) = if todo.completed {
        ("[x] ", Style::default().fg(STATUS_OK))
    } else {
        ("[ ] ", Style::default().fg(DIM_TEXT))
    };
    let title_style = if todo.completed {
        Style::default().fg(DIM_TEXT).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    ListItem::new(Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(todo.title.clone(), title_style),
    ]))
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(ACCENT),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, body);
}

fn draw_error(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let popup = centered_rect(60, 40, body);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(DIM_TEXT),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
