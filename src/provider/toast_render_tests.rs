//! Tests for provider/toast_render

use std::collections::HashMap;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::config::ClassStyle;
use crate::toast::{CloseAction, Timeout};

const TEST_WIDTH: u16 = 50;
const TEST_HEIGHT: u16 = 10;

fn props(kind: &str, title: &str, caption: &str) -> ToastProps {
    ToastProps {
        kind: Some(kind.to_string()),
        title: Some(title.to_string()),
        subtitle: None,
        caption: Some(caption.to_string()),
        timeout: None,
        class_name: None,
        on_close_button_click: CloseAction::default(),
    }
}

fn render(props: &ToastProps, theme: &ToastTheme) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    terminal
        .draw(|f| render_toast(f, f.area(), props, theme))
        .unwrap();
    terminal
}

#[test]
fn test_render_shows_title_caption_and_hint() {
    let props = props("success", "Saved", "All files written");
    let terminal = render(&props, &ToastTheme::default());
    let output = terminal.backend().to_string();

    assert!(output.contains("Saved"));
    assert!(output.contains("All files written"));
    assert!(output.contains("Esc to dismiss"));
}

#[test]
fn test_render_border_uses_kind_color() {
    let theme = ToastTheme::default();
    let props = props("error", "Failed", "disk full");
    let terminal = render(&props, &theme);

    let area = toast_area(Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT), &props, &theme);
    let corner = &terminal.backend().buffer()[(area.x, area.y)];
    assert_eq!(corner.fg, Color::Red);
}

#[test]
fn test_render_class_style_overrides_kind_color() {
    let mut config = Config::default();
    config.toast.classes.insert(
        "loud".to_string(),
        ClassStyle {
            border: Some("magenta".to_string()),
            text: None,
        },
    );
    let theme = ToastTheme::from_config(&config);
    let mut props = props("error", "Failed", "disk full");
    props.class_name = Some("loud".to_string());

    let terminal = render(&props, &theme);

    let area = toast_area(Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT), &props, &theme);
    let corner = &terminal.backend().buffer()[(area.x, area.y)];
    assert_eq!(corner.fg, Color::Magenta);
}

#[test]
fn test_render_unknown_class_falls_back_to_kind() {
    let theme = ToastTheme::default();
    let mut props = props("warning", "Careful", "x");
    props.class_name = Some("missing".to_string());

    let terminal = render(&props, &theme);

    let area = toast_area(Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT), &props, &theme);
    let corner = &terminal.backend().buffer()[(area.x, area.y)];
    assert_eq!(corner.fg, Color::Yellow);
}

#[test]
fn test_render_without_title_uses_kind() {
    let mut props = props("info", "unused", "body text");
    props.title = None;

    let terminal = render(&props, &ToastTheme::default());

    assert!(terminal.backend().to_string().contains("info"));
}

#[test]
fn test_render_subtitle_line() {
    let mut props = props("info", "Title", "caption");
    props.subtitle = Some("the subtitle".to_string());
    props.timeout = Some(Timeout::Millis(100));

    let terminal = render(&props, &ToastTheme::default());
    let output = terminal.backend().to_string();

    assert!(output.contains("the subtitle"));
    assert!(output.contains("caption"));
}

#[test]
fn test_render_tiny_frame_does_not_panic() {
    let props = props("info", "Title", "caption");
    let mut terminal = Terminal::new(TestBackend::new(2, 2)).unwrap();
    terminal
        .draw(|f| render_toast(f, f.area(), &props, &ToastTheme::default()))
        .unwrap();
}

#[test]
fn test_toast_area_top_right_by_default() {
    let theme = ToastTheme::default();
    let props = props("info", "Title", "one line");

    let area = toast_area(Rect::new(0, 0, 100, 30), &props, &theme);

    assert_eq!(area.width, 40);
    assert_eq!(area.height, 3);
    assert_eq!(area.x, 59);
    assert_eq!(area.y, 1);
}

#[test]
fn test_toast_area_grows_with_wrapped_caption() {
    let theme = ToastTheme::default();
    let long_caption = "word ".repeat(30);
    let props = props("info", "Title", &long_caption);

    let area = toast_area(Rect::new(0, 0, 100, 30), &props, &theme);

    // 150 columns of caption wrapped into 38 columns
    assert!(area.height >= 6);
}

#[test]
fn test_toast_area_wraps_at_width_left_after_margins() {
    let caption = "aaaa bbbb cccc dddd eeee";
    let props = props("info", "Narrow", caption);
    let theme = ToastTheme {
        margin: 3,
        ..ToastTheme::default()
    };

    let area = toast_area(Rect::new(0, 0, 20, 30), &props, &theme);

    assert_eq!(area.width, 14);
    assert_eq!(wrap_text(caption, 12).len(), 3);
    assert_eq!(area.height, 5);
}

#[test]
fn test_narrow_frame_renders_whole_caption() {
    let props = props("info", "Narrow", "aaaa bbbb cccc dddd eeee");
    let theme = ToastTheme {
        margin: 3,
        ..ToastTheme::default()
    };
    let mut terminal = Terminal::new(TestBackend::new(20, 12)).unwrap();
    terminal
        .draw(|f| render_toast(f, f.area(), &props, &theme))
        .unwrap();

    let output = terminal.backend().to_string();
    assert!(output.contains("eeee"));
}

#[test]
fn test_theme_from_config() {
    let mut config = Config::default();
    config.toast.show_hint = false;
    config.toast.position = ToastPosition::BottomLeft;
    config.toast.classes = HashMap::from([(
        "quiet".to_string(),
        ClassStyle {
            border: Some("#102030".to_string()),
            text: Some("not-a-colour".to_string()),
        },
    )]);

    let theme = ToastTheme::from_config(&config);

    assert_eq!(theme.hint, None);
    assert_eq!(theme.position, ToastPosition::BottomLeft);
    assert_eq!(
        theme.classes.get("quiet"),
        Some(&ClassColors {
            border: Some(Color::Rgb(0x10, 0x20, 0x30)),
            text: None,
        })
    );
}

#[test]
fn test_theme_hint_follows_close_key() {
    let mut config = Config::default();
    config.keys.close = "q".to_string();

    let theme = ToastTheme::from_config(&config);

    assert_eq!(theme.hint.as_deref(), Some("Q to dismiss"));
}

#[test]
fn test_wrap_text_basic() {
    assert_eq!(
        wrap_text("hello world foo", 11),
        vec!["hello world".to_string(), "foo".to_string()]
    );
}

#[test]
fn test_wrap_text_splits_long_words() {
    assert_eq!(
        wrap_text("abcdefghij", 4),
        vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
    );
}

#[test]
fn test_wrap_text_long_word_starts_new_line() {
    assert_eq!(
        wrap_text("hi abcdefgh", 4),
        vec!["hi".to_string(), "abcd".to_string(), "efgh".to_string()]
    );
}

#[test]
fn test_wrap_text_keeps_blank_lines() {
    assert_eq!(
        wrap_text("a\n\nb", 10),
        vec!["a".to_string(), String::new(), "b".to_string()]
    );
}

#[test]
fn test_wrap_text_empty_and_zero_width() {
    assert!(wrap_text("", 10).is_empty());
    assert!(wrap_text("abc", 0).is_empty());
}

#[test]
fn test_wrap_text_wide_characters() {
    // Each CJK character is two columns wide
    assert_eq!(
        wrap_text("日本語テキスト", 6),
        vec!["日本語".to_string(), "テキス".to_string(), "ト".to_string()]
    );
}
