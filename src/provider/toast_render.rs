//! Default toast renderer
//!
//! A ready-made render function for `ToastProvider::component`: a bordered box
//! pinned to a corner of the frame, coloured by kind or by the style registered
//! for the toast's `class_name`.

use std::collections::HashMap;
use std::str::FromStr;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::toast_props::ToastProps;
use crate::config::{Config, ToastPosition};
use crate::toast::ToastKind;
use crate::widgets::popup;

/// Resolved styling for the default renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastTheme {
    pub position: ToastPosition,
    pub width: u16,
    pub margin: u16,
    /// Bottom-border hint, e.g. "Esc to dismiss"
    pub hint: Option<String>,
    pub classes: HashMap<String, ClassColors>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassColors {
    pub border: Option<Color>,
    pub text: Option<Color>,
}

impl ToastTheme {
    pub fn from_config(config: &Config) -> Self {
        let toast = &config.toast;

        let classes = toast
            .classes
            .iter()
            .map(|(name, style)| {
                let colors = ClassColors {
                    border: style.border.as_deref().and_then(parse_color),
                    text: style.text.as_deref().and_then(parse_color),
                };
                (name.clone(), colors)
            })
            .collect();

        let hint = toast
            .show_hint
            .then(|| format!("{} to dismiss", key_label(&config.keys.close)));

        Self {
            position: toast.position,
            width: toast.width,
            margin: toast.margin,
            hint,
            classes,
        }
    }

    fn class_colors(&self, class_name: Option<&str>) -> ClassColors {
        class_name
            .and_then(|name| self.classes.get(name))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for ToastTheme {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn parse_color(name: &str) -> Option<Color> {
    match Color::from_str(name) {
        Ok(color) => Some(color),
        Err(_) => {
            log::warn!("Ignoring unknown toast colour '{}'", name);
            None
        }
    }
}

fn key_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Area the toast occupies inside `frame_area`
pub fn toast_area(frame_area: Rect, props: &ToastProps, theme: &ToastTheme) -> Rect {
    let available = popup::inset_rect(frame_area, theme.margin, theme.margin);
    let width = theme.width.min(available.width);
    let inner_width = width.saturating_sub(2) as usize;
    let content_lines = build_body(props, inner_width, Style::default()).len().max(1);
    let height = (content_lines as u16).saturating_add(2);

    popup::anchored_popup(frame_area, width, height, theme.position, theme.margin)
}

/// Render function suitable for `ToastProvider::builder().component(..)`
pub fn render_toast(frame: &mut Frame, frame_area: Rect, props: &ToastProps, theme: &ToastTheme) {
    let area = toast_area(frame_area, props, theme);
    if area.width < 3 || area.height < 3 {
        return;
    }

    let kind = props.toast_kind().unwrap_or(ToastKind::Other);
    let class_colors = theme.class_colors(props.class_name.as_deref());
    let border_color = class_colors.border.unwrap_or_else(|| kind.color());
    let text_style = Style::default().fg(class_colors.text.unwrap_or(Color::White));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title_line(props, kind, border_color));

    if let Some(hint) = &theme.hint {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", hint),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let body = build_body(props, inner_width, text_style);

    popup::clear_area(frame, area);
    frame.render_widget(Paragraph::new(body).block(block), area);
}

fn title_line(props: &ToastProps, kind: ToastKind, color: Color) -> Line<'static> {
    let label = props
        .title
        .clone()
        .or_else(|| props.kind.clone())
        .unwrap_or_default();

    Line::from(vec![
        Span::raw(" "),
        Span::styled(kind.icon(), Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ])
}

fn build_body(props: &ToastProps, inner_width: usize, text_style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(subtitle) = &props.subtitle {
        for line in wrap_text(subtitle, inner_width) {
            lines.push(Line::from(Span::styled(
                line,
                text_style.add_modifier(Modifier::ITALIC),
            )));
        }
    }

    if let Some(caption) = &props.caption {
        for line in wrap_text(caption, inner_width) {
            lines.push(Line::from(Span::styled(line, text_style)));
        }
    }

    lines
}

/// Word-wrap `text` to `max_width` display columns
///
/// Words wider than the line are split by character. Explicit newlines start
/// a new line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
