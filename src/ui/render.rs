use crate::app_state::{AppState, LoadingPhase};
use crate::ui::list::ListView;
use crate::ui::widgets::{
    content_style, render_error, render_footer, render_loading, render_menu, render_tabs,
};
use crate::utils::formatting::{align_columns, format_reading_count};
use ratatui::layout::Rect;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

pub fn ui(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);

    if app_state.loading == LoadingPhase::Loading {
        render_loading(f, chunks[0].union(chunks[1]));
    } else {
        render_tabs(f, chunks[0], app_state);
        render_entity_list(f, chunks[1], app_state);
    }

    if let Some(error_msg) = &app_state.error_message {
        render_error(f, chunks[1], error_msg);
    }

    render_footer(f, chunks[2], app_state);

    if let Some(menu) = &app_state.menu {
        render_menu(f, area, menu);
    }
}

pub fn render_entity_list(f: &mut Frame, area: Rect, app_state: &mut AppState) {
    let base = content_style(app_state);
    let block = Block::default().borders(Borders::ALL).title(format!(
        "{} ({})",
        app_state.active_tab.title(),
        format_reading_count(app_state.list.row_count())
    ));
    let row_width = block.inner(area).width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app_state
        .list
        .entities()
        .iter()
        .map(|entity| {
            ListItem::new(align_columns(&entity.title, &entity.subtitle, row_width))
                .style(base.fg(Color::White))
        })
        .collect();

    let list = List::new(items)
        .block(block.style(base))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, app_state.list.state_mut());
}
