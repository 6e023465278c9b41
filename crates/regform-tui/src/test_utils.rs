//! Rendering helpers shared by widget and view tests

use ratatui::{backend::TestBackend, layout::Rect, widgets::Widget, Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// A ratatui terminal backed by an in-memory buffer
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().buffer().area;
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn draw<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw");
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw(|frame| frame.render_widget(widget, area));
    }

    /// Every cell symbol, row after row, as one string
    pub fn content(&self) -> String {
        self.terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Text of a single row with trailing spaces trimmed
    pub fn line(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
