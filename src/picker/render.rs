use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Clear,
};
use unicode_width::UnicodeWidthStr;

use super::Picker;

/// Lines in the title block: border, title, border, blank separator
pub const TITLE_LINE_COUNT: usize = 4;

/// Top-left corner of the line list, relative to the frame
const ORIGIN_X: u16 = 1;
const ORIGIN_Y: u16 = 1;

/// Columns kept free at the right edge
const RIGHT_MARGIN: u16 = 2;

/// Indent of the query status line relative to the line list
const STATUS_INDENT: u16 = 2;

/// Rows below the line list: the gap before its last line, two spacer rows
/// and the query status line
const FOOTER_ROWS: u16 = 4;

impl<T, R> Picker<T, R> {
    /// Every line of the current frame before scrolling is applied
    pub fn lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default().fg(self.palette.heading.fg());
        let title = &self.config.title;
        let border = format!("  {}", "=".repeat(title.width()));

        let mut lines = Vec::with_capacity(TITLE_LINE_COUNT + self.state.len());
        lines.push(Line::styled(border.clone(), heading));
        lines.push(Line::styled(format!("  {}", title), heading));
        lines.push(Line::styled(border, heading));
        lines.push(Line::default());
        lines.extend(self.option_lines());
        lines
    }

    fn option_lines(&self) -> impl Iterator<Item = Line<'static>> + '_ {
        let indicator = self.config.indicator.as_str();
        let blank = " ".repeat(indicator.width());
        let highlight = Style::default().fg(self.palette.highlight.fg());
        let default = Style::default().fg(self.palette.default.fg());
        let cursor = self.state.cursor();

        self.state
            .display_texts()
            .iter()
            .enumerate()
            .map(move |(index, text)| {
                if index == cursor {
                    Line::styled(format!("{} {}", indicator, text), highlight)
                } else {
                    Line::styled(format!("{} {}", blank, text), default)
                }
            })
    }

    /// One-based line number of the cursor row within [`Self::lines`]
    pub fn current_line(&self) -> usize {
        self.state.cursor() + TITLE_LINE_COUNT + 1
    }

    /// Draw the picker, scrolling so the cursor row stays on screen
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);

        let max_rows = usize::from(area.height.saturating_sub(ORIGIN_Y + FOOTER_ROWS));
        let max_width = area.width.saturating_sub(RIGHT_MARGIN);

        let lines = self.lines();
        let current_line = self.current_line();
        self.state.scroll.follow(current_line, max_rows);
        let visible = &lines[self.state.scroll.visible_range(lines.len(), max_rows)];

        let buf = frame.buffer_mut();
        let x = area.x.saturating_add(ORIGIN_X);
        let mut y = area.y.saturating_add(ORIGIN_Y);
        for (n, line) in visible.iter().enumerate() {
            put_line(buf, area, x, y, line, max_width);
            y = y.saturating_add(1);

            // One-row gap before the last drawn line
            if n + 2 == visible.len() {
                y = y.saturating_add(1);
            }
        }

        let status = Line::styled(
            format!("{}{}", self.config.prompt, self.state.query()),
            Style::default().fg(self.palette.heading.fg()),
        );
        put_line(
            buf,
            area,
            x.saturating_add(STATUS_INDENT),
            y.saturating_add(2),
            &status,
            max_width,
        );
    }
}

/// Write `line` at (x, y), clipped to `max_width` and to `area`
fn put_line(buf: &mut Buffer, area: Rect, x: u16, y: u16, line: &Line, max_width: u16) {
    if y >= area.bottom() || x >= area.right() {
        return;
    }
    let width = max_width.min(area.right() - x);
    buf.set_line(x, y, line, width);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
