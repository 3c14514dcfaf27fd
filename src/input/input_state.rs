use ratatui::crossterm::event::KeyEvent;
use tui_textarea::{CursorMove, TextArea};

/// Query draft being edited
///
/// Single line. Values are sanitised the way a text input does it: line
/// breaks are stripped, everything else is kept verbatim.
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    /// Create an input pre-filled with `initial`, cursor at the end
    pub fn new(initial: &str) -> Self {
        let mut state = Self {
            textarea: TextArea::default(),
        };
        state.set_draft(initial);
        state
    }

    /// Current draft text
    pub fn draft(&self) -> &str {
        self.textarea.lines()[0].as_str()
    }

    /// Replace the whole draft
    pub fn set_draft(&mut self, text: &str) {
        let mut textarea = TextArea::new(vec![strip_line_breaks(text)]);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    /// Apply one key press, returning whether the draft changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let modified = self.textarea.input(key);

        // Keys like Ctrl+M split the line; fold it back into one
        if self.textarea.lines().len() > 1 {
            let (row, col) = self.textarea.cursor();
            let col: usize = self.textarea.lines()[..row]
                .iter()
                .map(|line| line.chars().count())
                .sum::<usize>()
                + col;
            let joined = self.textarea.lines().concat();
            self.set_draft(&joined);
            self.textarea
                .move_cursor(CursorMove::Jump(0, col.min(u16::MAX as usize) as u16));
        }

        modified
    }

    /// Insert text at the cursor, returning whether the draft changed
    pub fn insert_str(&mut self, text: &str) -> bool {
        self.textarea.insert_str(strip_line_breaks(text))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new("")
    }
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}
