use crate::app_state::{AppState, LoadingPhase, MenuItem, MenuState};
use crate::selection::Tab;
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::*;
use ratatui::Frame;

/// Base style for content that is still fading in after the first load.
pub fn content_style(app_state: &AppState) -> Style {
    match app_state.loading {
        LoadingPhase::FadingIn { .. } => Style::default().add_modifier(Modifier::DIM),
        _ => Style::default(),
    }
}

pub fn render_tabs(f: &mut Frame, area: Rect, app_state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("System Monitor"))
        .select(app_state.active_tab.index())
        .style(content_style(app_state).fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);
}

pub fn render_loading(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let paragraph = Paragraph::new("Loading system state...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, middle[1]);
}

pub fn render_footer(f: &mut Frame, area: Rect, app_state: &AppState) {
    let footer_text = if app_state.menu.is_some() {
        "↑↓ to choose | Enter to confirm | Esc to close"
    } else if app_state.is_interactive() {
        "1/2 or ←→ to switch tabs | ↑↓ to select | Space to toggle | m for menu | q to quit"
    } else {
        "q to quit"
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

pub fn render_error(f: &mut Frame, area: Rect, error_msg: &str) {
    if area.height < 3 || area.width < 4 {
        return;
    }
    let error_text = textwrap::wrap(error_msg, area.width as usize - 2);
    let error_paragraph = Paragraph::new(error_text.join("\n"))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title("Error"));
    let error_area = Rect {
        x: area.x,
        y: area.y + area.height - 3,
        width: area.width,
        height: 3,
    };
    f.render_widget(Clear, error_area);
    f.render_widget(error_paragraph, error_area);
}

pub fn render_menu(f: &mut Frame, area: Rect, menu: &MenuState) {
    let popup = centered_rect(24, MenuItem::ALL.len() as u16 + 2, area);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| {
            let style = match item {
                MenuItem::Logout => Style::default().fg(Color::Red),
                MenuItem::Cancel => Style::default(),
            };
            ListItem::new(item.label()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(menu.highlighted));

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut state);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
