use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::preview::PreviewRenderer;
use crate::scroll::ScrollState;
use crate::search::Document;
use crate::widgets::scrollbar::render_vertical_scrollbar;

pub const RESULTS_TITLE: &str = " Results ";

/// Rendered preview of one document, identified by the document link
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewEntry {
    pub key: String,
    pub lines: Vec<Line<'static>>,
}

/// One entry per document, in document order
pub fn build_entries(
    documents: &[Document],
    renderer: &dyn PreviewRenderer,
    width: u16,
) -> Vec<PreviewEntry> {
    documents
        .iter()
        .map(|document| PreviewEntry {
            key: document.link.clone(),
            lines: renderer.render(document, width),
        })
        .collect()
}

/// Stack entries vertically with a blank line between neighbours
pub fn layout_entries(entries: Vec<PreviewEntry>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.extend(entry.lines);
    }
    lines
}

/// Render the results pane
///
/// An empty document list renders as an empty pane.
pub fn render_pane(
    documents: &[Document],
    renderer: &dyn PreviewRenderer,
    scroll: &mut ScrollState,
    frame: &mut Frame,
    area: Rect,
) {
    let viewport_height = area.height.saturating_sub(2);
    let viewport_width = area.width.saturating_sub(2);

    let lines = layout_entries(build_entries(documents, renderer, viewport_width));
    let line_count = lines.len() as u32;
    scroll.update_bounds(line_count, viewport_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(RESULTS_TITLE)
        .border_style(Style::default().fg(Color::DarkGray));

    let content = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((scroll.offset, 0));

    frame.render_widget(content, area);

    render_vertical_scrollbar(
        frame,
        area,
        line_count as usize,
        viewport_height as usize,
        scroll.offset as usize,
    );
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
