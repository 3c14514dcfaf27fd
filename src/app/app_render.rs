use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::input_render;
use crate::results::results_render;

pub const HELP_LINE: &str = " Enter: search  ↑↓ PgUp/PgDn: scroll  Esc: quit ";

impl App {
    /// Draw the page from the current snapshot and draft
    ///
    /// Rendering the same state twice produces the same frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let disabled = self.input_disabled();
        input_render::render_field(&mut self.input, disabled, frame, layout[0]);

        results_render::render_pane(
            &self.snapshot.documents,
            self.preview.as_ref(),
            &mut self.results_scroll,
            frame,
            layout[1],
        );

        render_help_line(frame, layout[2]);
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let line = Line::styled(HELP_LINE, Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
