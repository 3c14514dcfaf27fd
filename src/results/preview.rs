use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::PreviewConfig;
use crate::search::Document;

const ELLIPSIS: char = '…';

/// Turns one document into the lines shown for it in the results pane
pub trait PreviewRenderer {
    fn render(&self, document: &Document, width: u16) -> Vec<Line<'static>>;
}

/// Default preview: bold title, dimmed link, then a few lines of body text
pub struct CardPreview {
    snippet_lines: usize,
    show_link: bool,
}

impl CardPreview {
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            snippet_lines: config.snippet_lines,
            show_link: config.show_link,
        }
    }
}

impl Default for CardPreview {
    fn default() -> Self {
        Self::new(&PreviewConfig::default())
    }
}

impl PreviewRenderer for CardPreview {
    fn render(&self, document: &Document, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut lines = vec![Line::from(Span::styled(
            truncate(document.display_title(), width),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        if self.show_link {
            lines.push(Line::from(Span::styled(
                truncate(&document.link, width),
                Style::default().fg(Color::DarkGray),
            )));
        }

        if let Some(text) = &document.text {
            lines.extend(
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .take(self.snippet_lines)
                    .map(|line| {
                        Line::from(Span::styled(
                            truncate(line, width),
                            Style::default().fg(Color::Gray),
                        ))
                    }),
            );
        }

        lines
    }
}

/// Cut `text` to at most `width` terminal columns, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut cut = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        cut.push(c);
    }
    cut.push(ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_card_with_title_link_and_text() {
        let doc = Document::new("https://example.com/cats")
            .with_title("Cats")
            .with_text("Cats sleep.\n\nThey also purr.\nAnd hunt.");

        let lines = CardPreview::default().render(&doc, 80);

        assert_eq!(
            plain(&lines),
            vec![
                "Cats",
                "https://example.com/cats",
                "Cats sleep.",
                "They also purr.",
            ]
        );
    }

    #[test]
    fn test_card_without_title_uses_link() {
        let doc = Document::new("a");
        let lines = CardPreview::default().render(&doc, 80);
        assert_eq!(plain(&lines), vec!["a", "a"]);
    }

    #[test]
    fn test_card_hides_link_when_configured() {
        let preview = CardPreview::new(&PreviewConfig {
            snippet_lines: 0,
            show_link: false,
        });
        let doc = Document::new("a").with_title("Cats").with_text("body");

        assert_eq!(plain(&preview.render(&doc, 80)), vec!["Cats"]);
    }

    #[test]
    fn test_card_title_is_bold() {
        let doc = Document::new("a").with_title("Cats");
        let lines = CardPreview::default().render(&doc, 80);
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let doc = Document::new("a").with_title("A very long title indeed");
        let lines = CardPreview::default().render(&doc, 10);
        insta::assert_snapshot!(lines[0].to_string(), @"A very lo…");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("cats", 4), "cats");
        assert_eq!(truncate("cats", 3), "ca…");
        assert_eq!(truncate("cats", 1), "…");
        assert_eq!(truncate("cats", 0), "");
        assert_eq!(truncate("", 0), "");
        assert_eq!(truncate("über", 3), "üb…");
    }

    #[test]
    fn test_truncate_counts_wide_characters_as_two_columns() {
        assert_eq!(truncate("猫と犬", 6), "猫と犬");
        assert_eq!(truncate("猫と犬の本", 6), "猫と…");
        // A wide char that would straddle the limit is dropped whole
        assert_eq!(truncate("a猫猫", 4), "a猫…");
        assert_eq!(truncate("猫猫", 2), "…");
    }

    #[test]
    fn test_wide_title_fits_pane_width() {
        let doc = Document::new("a").with_title("日本語のとても長いタイトル");
        let lines = CardPreview::default().render(&doc, 10);

        assert!(lines[0].width() <= 10);
        assert!(lines[0].to_string().ends_with(ELLIPSIS));
    }
}
