/// Vertical scroll position of the results pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_down(half_page.max(1));
    }

    pub fn page_up(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_up(half_page.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scroll_state() {
        let scroll = ScrollState::new();
        assert_eq!(scroll.offset, 0);
        assert_eq!(scroll.max_offset, 0);
        assert_eq!(scroll.viewport_height, 0);
    }

    #[test]
    fn test_update_bounds_small_content() {
        let mut scroll = ScrollState::new();

        scroll.update_bounds(10, 20);
        assert_eq!(scroll.max_offset, 0);
        assert_eq!(scroll.viewport_height, 20);
    }

    #[test]
    fn test_update_bounds_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100, 20);
        scroll.offset = 80;

        // Fewer documents after a new result
        scroll.update_bounds(50, 20);
        assert_eq!(scroll.max_offset, 30);
        assert_eq!(scroll.offset, 30);
    }

    #[test]
    fn test_update_bounds_clamps_to_u16() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100_000, 10);
        assert_eq!(scroll.max_offset, u16::MAX);
    }

    #[test]
    fn test_scroll_down_stops_at_max() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(30, 10);

        scroll.scroll_down(15);
        assert_eq!(scroll.offset, 15);
        scroll.scroll_down(15);
        assert_eq!(scroll.offset, 20);
    }

    #[test]
    fn test_scroll_up_stops_at_zero() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(30, 10);
        scroll.offset = 3;

        scroll.scroll_up(5);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_page_moves_half_viewport() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100, 20);

        scroll.page_down();
        assert_eq!(scroll.offset, 10);
        scroll.page_up();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_page_on_tiny_viewport_moves_one_line() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(10, 1);

        scroll.page_down();
        assert_eq!(scroll.offset, 1);
    }
}
