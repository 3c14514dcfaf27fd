use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::InputState;

pub const INPUT_TITLE: &str = " Query Documents ";
pub const LOADING_HINT: &str = " searching… ";

/// Render the query field
///
/// While `disabled` the field is dimmed, shows no cursor and carries a
/// "searching" marker on its border.
pub fn render_field(input: &mut InputState, disabled: bool, frame: &mut Frame, area: Rect) {
    let (border_color, text_style) = if disabled {
        (Color::DarkGray, Style::default().fg(Color::DarkGray))
    } else {
        (Color::Cyan, Style::default())
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(INPUT_TITLE)
        .border_style(Style::default().fg(border_color));

    if disabled {
        block = block.title_top(
            Line::from(Span::styled(LOADING_HINT, Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Right),
        );
    }

    let cursor_style = if disabled {
        text_style
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    input.textarea.set_block(block);
    input.textarea.set_style(text_style);
    input.textarea.set_cursor_line_style(Style::default());
    input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&input.textarea, area);
}
