use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::catalog::FetchState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, SELECTED_HIGHLIGHT, STATUS_ERROR, TITLE_ACCENT,
};

/// Cover image placeholder shown in front of every title.
const COVER_GLYPH: &str = "▣";

/// Draw exactly one of the three modes the fetch state allows.
///
/// Loading and error modes take the whole frame (no list, no search box);
/// content mode lays out header, search box, list, and footer.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    match &app.catalog().fetch {
        FetchState::Pending => draw_loading(frame, app),
        FetchState::Failed { message } => draw_error(frame, app, message),
        FetchState::Loaded { .. } => draw_content(frame, app),
    }
}

fn draw_loading(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 20, frame.area());
    let text = Paragraph::new(app.labels().loading)
        .style(Style::default().fg(HEADER_TEXT))
        .alignment(Alignment::Center);
    frame.render_widget(text, area);
}

fn draw_error(frame: &mut Frame<'_>, app: &App, message: &str) {
    let area = centered_rect(70, 30, frame.area());
    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", app.labels().error_prefix),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
    ]);
    let text = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

fn draw_content(frame: &mut Frame<'_>, app: &App) {
    let (header_area, search_area, list_area, footer_area) = layout_regions(frame.area());
    let labels = app.labels();
    let state = app.catalog();

    let header = Header::new();
    frame.render_widget(header.widget(labels, state.language), header_area);

    draw_search_box(frame, app, search_area);

    if state.filtered.is_empty() {
        let empty = Paragraph::new(labels.no_results)
            .style(Style::default().fg(DIM_TEXT))
            .alignment(Alignment::Center);
        frame.render_widget(empty, list_area);
    } else {
        draw_book_list(frame, app, list_area);
    }

    let footer = Footer::new();
    frame.render_widget(footer.widget(footer_area), footer_area);
}

fn draw_search_box(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let labels = app.labels();
    let query = &app.catalog().query;

    let content = if query.is_empty() {
        Span::styled(labels.search_placeholder, Style::default().fg(DIM_TEXT))
    } else {
        Span::styled(query.clone(), Style::default().fg(HEADER_TEXT))
    };

    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(search, area);

    // Hardware cursor at the end of the typed query.
    if area.width > 2 && area.height > 2 {
        let cursor_x = area.x + 1 + (query.chars().count() as u16).min(area.width - 2);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_book_list(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let labels = app.labels();
    let state = app.catalog();

    let items: Vec<ListItem> = state
        .visible_books()
        .map(|book| {
            let title_line = Line::from(vec![
                Span::styled(format!("{COVER_GLYPH} "), Style::default().fg(DIM_TEXT)),
                Span::styled(
                    app.display_title(book),
                    Style::default()
                        .fg(TITLE_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            let author_line = Line::from(Span::styled(
                format!("  {}: {}", labels.author, book.author.name),
                Style::default().fg(HEADER_TEXT),
            ));
            let category_line = Line::from(Span::styled(
                format!("  {}: {}", labels.category, book.category.name),
                Style::default().fg(DIM_TEXT).add_modifier(Modifier::ITALIC),
            ));
            ListItem::new(Text::from(vec![
                title_line,
                author_line,
                category_line,
                Line::from(""),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(SELECTED_HIGHLIGHT));

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
