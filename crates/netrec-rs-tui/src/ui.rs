//! Rendering routines for the lookup TUI.

use crate::app::App;
use crate::state::SearchOutcome;
use netrec_rs_core::{DatasetOrigin, RecommendationResult};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

// ── Theme colors ──────────────────────────────────────────────────────

const PRIMARY: Color = Color::Rgb(236, 91, 43); // #EC5B2B
const SECONDARY: Color = Color::Rgb(238, 121, 72); // #EE7948
const TEXT: Color = Color::Rgb(238, 238, 238); // #eeeeee
const TEXT_MUTED: Color = Color::Rgb(128, 128, 128); // #808080
const BORDER: Color = Color::Rgb(60, 60, 60); // #3c3c3c
const BORDER_ACTIVE: Color = Color::Rgb(238, 121, 72); // #EE7948
const YELLOW: Color = Color::Rgb(229, 192, 123); // #e5c07b

const HEADER_HEIGHT: u16 = 4; // 2 inner lines + 2 border lines
const FIND_BUTTON_WIDTH: u16 = 12;

pub(crate) const LOADING_TEXT: &str = "Loading networking data...";

/// Draw the entire TUI frame.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let advisory_height = u16::from(app.state.advisory.is_some());

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),   // header
            Constraint::Length(advisory_height), // advisory
            Constraint::Length(3),               // input + find button
            Constraint::Min(0),                  // results
            Constraint::Length(1),               // status bar
        ])
        .split(area);

    draw_header(frame, app, root[0]);
    if let Some(advisory) = &app.state.advisory {
        let line = Line::from(Span::styled(
            format!(" {advisory}"),
            Style::default().fg(YELLOW),
        ));
        frame.render_widget(Paragraph::new(line), root[1]);
    }
    draw_input_row(frame, app, root[2]);
    draw_results(frame, app, root[3]);
    draw_status_bar(frame, app, root[4]);
}

/// Draw the title and a one-line description of the dataset.
fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER));

    let label_style = Style::default().fg(TEXT_MUTED);
    let value_style = Style::default().fg(TEXT);

    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", app.title),
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
    ))];

    let dataset_line = match (app.state.origin, &app.state.source) {
        (Some(origin), Some(source)) => {
            let origin = match origin {
                DatasetOrigin::Primary => source.clone(),
                DatasetOrigin::Fallback => "sample data".to_string(),
            };
            Line::from(vec![
                Span::styled(" records ", label_style),
                Span::styled(app.state.dataset.len().to_string(), value_style),
                Span::styled("  from ", label_style),
                Span::styled(origin, value_style),
            ])
        }
        _ => Line::from(Span::styled(" dataset loading", label_style)),
    };
    lines.push(dataset_line);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the query input and the Find button, recording the button area.
fn draw_input_row(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(FIND_BUTTON_WIDTH)])
        .split(area);

    let is_active = !app.state.is_loading();
    let border_color = if is_active { BORDER_ACTIVE } else { BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Name ",
            Style::default().fg(if is_active { SECONDARY } else { TEXT_MUTED }),
        ));
    let inner = block.inner(cols[0]);

    let prompt_style = Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD);
    let query = app.state.query.as_str();
    let input_text = if query.is_empty() {
        Line::from(vec![
            Span::styled(" ", prompt_style),
            Span::styled(app.placeholder.as_str(), Style::default().fg(TEXT_MUTED)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ", prompt_style),
            Span::styled(query, Style::default().fg(TEXT)),
        ])
    };
    frame.render_widget(block, cols[0]);
    frame.render_widget(Paragraph::new(input_text), inner);

    let button_style = if is_active {
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    let button = Paragraph::new(Line::from(Span::styled("[ Find ]", button_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(button, cols[1]);
    app.find_button = cols[1];

    if is_active {
        let offset = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
        frame.set_cursor_position((
            inner.x.saturating_add(1).saturating_add(offset),
            inner.y,
        ));
    }
}

/// Build the text shown in the results panel.
pub(crate) fn result_lines(app: &App) -> Vec<Line<'static>> {
    if app.state.is_loading() {
        return vec![Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(TEXT_MUTED),
        ))];
    }
    let outcome = app.state.outcome();
    if let SearchOutcome::Matched(result) = outcome {
        return recommendation_lines(result);
    }
    outcome
        .message()
        .map(|message| vec![Line::from(Span::styled(message, Style::default().fg(YELLOW)))])
        .unwrap_or_default()
}

fn recommendation_lines(result: &RecommendationResult) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("Recommendations for ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            result.name.clone(),
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ])];
    for (idx, recommendation) in result.recommendations.iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", idx + 1), Style::default().fg(SECONDARY)),
            Span::styled(
                recommendation.name.clone(),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
        ]));
        if !recommendation.rationale.is_empty() {
            lines.push(Line::from(Span::styled(
                recommendation.rationale.clone(),
                Style::default().fg(TEXT),
            )));
        }
    }
    lines
}

fn draw_results(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let lines = result_lines(app);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(" Results ", Style::default().fg(TEXT_MUTED)));

    let inner = block.inner(area);
    let content_width = inner.width.saturating_sub(1); // -1 for scrollbar
    let content_height = inner.height as usize;

    let total_lines = Paragraph::new(lines.clone())
        .wrap(Wrap { trim: false })
        .line_count(content_width)
        .max(1);

    let max_scroll = u16::try_from(total_lines.saturating_sub(content_height)).unwrap_or(u16::MAX);
    app.update_scroll_bounds(max_scroll);
    let scroll = app.scroll;

    let results_inner = Rect {
        width: content_width,
        ..inner
    };
    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(block, area);
    frame.render_widget(results, results_inner);

    if total_lines > content_height {
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(total_lines)
            .position(scroll as usize)
            .viewport_content_length(content_height);
        let scrollbar_area = Rect {
            x: inner.x + inner.width.saturating_sub(1),
            y: inner.y,
            width: 1,
            height: inner.height,
        };
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(BORDER))
                .thumb_style(Style::default().fg(TEXT_MUTED)),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

/// Draw the status bar at the bottom.
fn draw_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_color = match app.status.as_str() {
        "ready" => TEXT_MUTED,
        "loading" => PRIMARY,
        _ => YELLOW,
    };

    let shortcuts = vec![
        Span::styled(" Esc", Style::default().fg(TEXT_MUTED)),
        Span::styled(" quit", Style::default().fg(BORDER)),
        Span::styled("  Enter", Style::default().fg(TEXT_MUTED)),
        Span::styled(" find", Style::default().fg(BORDER)),
        Span::styled("  PgUp/PgDn", Style::default().fg(TEXT_MUTED)),
        Span::styled(" scroll", Style::default().fg(BORDER)),
    ];

    let right_text = format!(" {} ", app.status);
    let right_len = u16::try_from(Span::raw(right_text.as_str()).width()).unwrap_or(u16::MAX);
    let left_area = Rect {
        width: area.width.saturating_sub(right_len),
        ..area
    };
    let right_area = Rect {
        x: area.x + area.width.saturating_sub(right_len),
        width: right_len.min(area.width),
        ..area
    };

    frame.render_widget(Paragraph::new(Line::from(shortcuts)), left_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            right_text,
            Style::default().fg(status_color),
        ))),
        right_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use netrec_rs_core::{Dataset, LoadOutcome, Record, fallback::sample_dataset};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_app(dataset: Dataset, origin: DatasetOrigin, advisory: Option<&str>) -> App {
        let mut app = App::new("Networking Recommendations", "Enter a name...");
        app.on_loaded(LoadOutcome {
            dataset: Arc::new(dataset),
            origin,
            advisory: advisory.map(str::to_string),
            source: "json data/networking_data.json".to_string(),
        });
        app
    }

    fn search(app: &mut App, query: &str) {
        for ch in query.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn loading_screen_shows_message() {
        let mut app = App::new("Networking Recommendations", "Enter a name...");
        let screen = render(&mut app, 70, 16);
        assert!(screen.contains(LOADING_TEXT));
        assert!(screen.contains("Networking Recommendations"));
    }

    #[test]
    fn ready_screen_shows_placeholder_and_button() {
        let mut app = loaded_app(sample_dataset(), DatasetOrigin::Primary, None);
        let screen = render(&mut app, 70, 16);
        assert!(screen.contains("Enter a name..."));
        assert!(screen.contains("[ Find ]"));
        assert!(screen.contains("records 3"));
        assert!(!screen.contains(LOADING_TEXT));
        assert_eq!(app.find_button.width, FIND_BUTTON_WIDTH);
    }

    #[test]
    fn fallback_advisory_is_rendered_with_the_input() {
        let mut app = loaded_app(
            sample_dataset(),
            DatasetOrigin::Fallback,
            Some("Using sample data. Spreadsheet could not be loaded."),
        );
        let screen = render(&mut app, 70, 16);
        assert!(screen.contains("Using sample data. Spreadsheet could not be loaded."));
        assert!(screen.contains("Enter a name..."));
        assert!(screen.contains("sample data"));
    }

    #[test]
    fn match_renders_both_recommendations() {
        let dataset = Dataset::new(vec![
            Record::named("Emily Daly")
                .with_first("Jennifer Cogliano", "shared cluster")
                .with_second("Rashmi Kapur", "shared cluster 2"),
        ]);
        let mut app = loaded_app(dataset, DatasetOrigin::Primary, None);
        search(&mut app, "emily");
        let screen = render(&mut app, 70, 20);
        assert!(screen.contains("Recommendations for Emily Daly"));
        assert!(screen.contains("1. Jennifer Cogliano"));
        assert!(screen.contains("2. Rashmi Kapur"));
        assert!(screen.contains("shared cluster 2"));
    }

    #[test]
    fn no_match_message_is_rendered() {
        let mut app = loaded_app(sample_dataset(), DatasetOrigin::Primary, None);
        search(&mut app, "zzz");
        let screen = render(&mut app, 70, 16);
        assert!(screen.contains("No matches found. Please try another name."));
    }

    #[test]
    fn long_results_become_scrollable() {
        let mut app = loaded_app(sample_dataset(), DatasetOrigin::Primary, None);
        search(&mut app, "emily");
        render(&mut app, 40, 12);
        assert!(app.max_scroll > 0);
    }

    #[test]
    fn oversized_status_fills_the_bar_instead_of_wrapping() {
        let mut app = loaded_app(sample_dataset(), DatasetOrigin::Primary, None);
        app.status = "x".repeat(usize::from(u16::MAX) + 4);
        let screen = render(&mut app, 70, 16);
        let status_row = screen.lines().last().expect("status row");
        assert!(!status_row.contains("quit"));
        assert_eq!(status_row, format!(" {}", "x".repeat(69)));
    }
}
