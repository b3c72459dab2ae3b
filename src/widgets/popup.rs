use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::config::ToastPosition;

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Popup of the given size pinned to a corner of `frame_area`, `margin` cells
/// away from its edges
pub fn anchored_popup(
    frame_area: Rect,
    width: u16,
    height: u16,
    position: ToastPosition,
    margin: u16,
) -> Rect {
    let area = inset_rect(frame_area, margin, margin);
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let left = area.x;
    let right = area.x + area.width - popup_width;
    let top = area.y;
    let bottom = area.y + area.height - popup_height;

    let (x, y) = match position {
        ToastPosition::TopLeft => (left, top),
        ToastPosition::TopRight => (right, top),
        ToastPosition::BottomLeft => (left, bottom),
        ToastPosition::BottomRight => (right, bottom),
        ToastPosition::Center => return centered_popup(frame_area, width, height),
    };

    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    let horizontal_margin = horizontal_margin.min(area.width / 2);
    let vertical_margin = vertical_margin.min(area.height / 2);

    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
