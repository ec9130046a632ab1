//! UI drawing - a pure function of `RenderState` to terminal widgets

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::render::PaginationView;
use crate::messages::ui_events::FilterField;
use crate::messages::{Presentation, RenderState};
use crate::models::Candidate;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let presentation = state.presentation();
    let pagination = state.pagination();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(if presentation == Presentation::Error { 3 } else { 0 }),
            Constraint::Min(3),    // Candidates
            Constraint::Length(if pagination.is_some() { 1 } else { 0 }),
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);

    if presentation == Presentation::Error {
        draw_error_banner(f, state, chunks[1]);
    }

    draw_candidates(f, state, presentation, chunks[2]);

    if let Some(view) = &pagination {
        draw_pagination(f, view, chunks[3]);
    }

    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.show_filter_input {
        draw_filter_popup(f, state, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut title = vec![
        Span::styled(" Candidate Management ", Style::default().fg(Color::Cyan).bold()),
    ];
    if !state.filters.is_empty() {
        title.push(Span::styled(
            format!("[{}] ", state.filters.describe()),
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(title))
        .title_bottom(Line::from(format!(" {} v{} ", APP_NAME, APP_VERSION)).right_aligned());

    let line = Line::from(vec![
        Span::styled(state.base_url.as_str(), Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled("c", Style::default().fg(Color::Yellow).bold()),
        Span::raw(": Create Sample Candidate"),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_error_banner(f: &mut Frame, state: &RenderState, area: Rect) {
    let message = state.error.as_deref().unwrap_or_default();
    let banner = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(banner, area);
}

fn draw_candidates(f: &mut Frame, state: &RenderState, presentation: Presentation, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Candidates ");

    if presentation == Presentation::Loading {
        let loading = Paragraph::new("Loading candidates...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    if state.records.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::raw("No candidates found. Press 'c' to create a sample candidate."),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = state
        .records
        .iter()
        .flat_map(|c| {
            let mut card = candidate_card(c);
            card.push(Line::raw(""));
            card
        })
        .collect();

    let list = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.list_scroll, 0));
    f.render_widget(list, area);
}

/// Lines for one candidate card
pub fn candidate_card(candidate: &Candidate) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let field = |name: &str, value: String| {
        Line::from(vec![Span::styled(format!("  {}: ", name), label), Span::raw(value)])
    };

    let mut lines = vec![
        Line::from(Span::styled(candidate.full_name(), Style::default().fg(Color::White).bold())),
        field("Email", candidate.email.clone()),
    ];
    if let Some(phone) = &candidate.phone {
        lines.push(field("Phone", phone.clone()));
    }
    if let Some(summary) = &candidate.summary {
        lines.push(field("Summary", summary.clone()));
    }
    if let Some(years) = candidate.experience {
        lines.push(field("Experience", format!("{} years", years)));
    }
    if let Some(skills) = candidate.skills_line() {
        lines.push(Line::from(vec![
            Span::styled("  Skills: ", label),
            Span::styled(skills, Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("  Created: {}", candidate.created_at.format("%Y-%m-%d")),
        label,
    )));
    lines
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_pagination(f: &mut Frame, view: &PaginationView, area: Rect) {
    let line = Line::from(vec![
        Span::styled("< Previous", control_style(view.prev_enabled)),
        Span::raw(format!("   {}   ", view.label)),
        Span::styled("Next >", control_style(view.next_enabled)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut status = if state.loading {
        String::from(" Loading... ")
    } else if state.show_filter_input {
        String::from(" Tab:next field | Enter:apply | Esc:cancel ")
    } else {
        String::from(" ←/→:page | c:create | r:refresh | /:filter | ?:help | q:quit ")
    };

    if state.creating {
        status.push_str("| creating... ");
    }
    if let Some(ms) = state.last_time_ms {
        status.push_str(&format!("| {}ms ", ms));
    }

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 PROFILEZ - Keyboard Shortcuts

 CANDIDATES
   ← / [              Previous page
   → / ]              Next page
   ↑ / ↓              Scroll list
   c                  Create sample candidate
   r                  Refresh current page

 FILTERS
   /                  Edit filters
   x                  Clear filters

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_filter_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 40, area);

    let fields = [
        FilterField::Search,
        FilterField::Skills,
        FilterField::Experience,
        FilterField::Location,
    ];
    let lines: Vec<Line> = fields
        .iter()
        .map(|&field| {
            let active = field == state.filter_field;
            let marker = if active { "> " } else { "  " };
            let style = if active {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{}{:<16}", marker, field.label()), style),
                Span::raw(state.filter_draft.field(field).to_string()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters (Enter to apply, Esc to cancel) ")
        .style(Style::default().bg(Color::Black));

    let input = Paragraph::new(lines).block(block);

    f.render_widget(Clear, popup_area);
    f.render_widget(input, popup_area);
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
