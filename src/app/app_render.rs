use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use super::event_log::EventLog;
use crate::provider::ToastContext;

const KEY_HELP: &[(&str, &str)] = &[
    ("e", "error"),
    ("i", "info"),
    ("s", "success"),
    ("w", "warn"),
    ("t", "set"),
    ("c", "chain"),
    ("r", "reset"),
    ("x", "clear"),
    ("q", "quit"),
];
impl App {
    pub fn render(&self, frame: &mut Frame) {
        self.provider.render(frame, frame.area());
    }
}

/// Body of the demo, rendered as the provider's children
pub(super) fn render_body(frame: &mut Frame, area: Rect, context: &ToastContext, log: &EventLog) {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    render_status(frame, layout[0], context);
    render_log(frame, layout[1], log);
    render_help_line(frame, layout[2]);
}

fn render_status(frame: &mut Frame, area: Rect, context: &ToastContext) {
    let state = context.snapshot();

    let visibility = if state.active {
        Span::styled("VISIBLE", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("HIDDEN", Style::default().fg(Color::DarkGray))
    };

    let mut spans = vec![Span::raw("Toast: "), visibility];
    if let Some(kind) = &state.kind {
        spans.push(Span::raw(format!("  kind={}", kind)));
    }
    if let Some(timeout) = &state.timeout {
        spans.push(Span::raw(format!("  timeout={}", timeout)));
    }

    let block = Block::default().borders(Borders::ALL).title(" toast-provider ");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_log(frame: &mut Frame, area: Rect, log: &EventLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = log.recent(visible).map(Line::from).collect();

    let block = Block::default().borders(Borders::ALL).title(" Events ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, label) in KEY_HELP {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {}  ", label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
