use crate::page::models::Representation;
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Course list
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_search_box(frame, chunks[1], app);
    draw_course_list(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.session.page();
    let title = if page.title.is_empty() { "Courses" } else { page.title.as_str() };
    let header = Paragraph::new(format!("{} - {}", title, page.source_path))
        .block(Block::default().borders(Borders::ALL).title("Course Picker"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if app.search.search_mode {
        (
            format!("{}█", app.search.search_query),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else if app.search.search_query.is_empty() {
        ("Press / to search".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (app.search.search_query.clone(), Style::default().fg(Color::White))
    };

    let search = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Search"))
        .style(style);

    frame.render_widget(search, area);
}

fn draw_course_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .visible_rows()
        .into_iter()
        .map(|element| {
            let (checkbox, style) = match element.representation {
                Representation::Checked => (
                    "☑",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Representation::Unchecked => ("☐", Style::default().fg(Color::White)),
            };
            let line = Line::from(vec![
                Span::styled(format!("{} ", checkbox), style),
                Span::styled(
                    format!("{:<10}", element.row_id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(element.label.clone(), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Courses"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.search.search_mode {
        "SEARCH | type to filter | Enter: keep filter | Esc: clear".to_string()
    } else {
        let counts = format!(
            "Courses: {} | Selected: {} | Shown: {}",
            app.total_rows(),
            app.selected_rows(),
            app.visible_rows().len()
        );
        match &app.status {
            Some(status) => format!("{} | {}", counts, status),
            None => format!("{} | Space: toggle | s: save | ?: help | q: quit", counts),
        }
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Course Picker - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Navigate up/down",
        "",
        "SELECTION:",
        "  Enter / Space     Select or deselect the course",
        "  s                 Save selection (kept for a year)",
        "",
        "SEARCH:",
        "  /                 Type to filter courses by name",
        "  Enter             Keep the filter and return to the list",
        "  Esc               Clear the filter",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit (saves first when save_on_quit is set)",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
