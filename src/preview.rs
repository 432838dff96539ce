//! Ratatui widget that draws an arrangement as titled boxes.
//!
//! Handy for eyeballing a layout or asserting it in tests against a
//! [`Buffer`]; it draws frames only, never window content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::dimensions::WindowDimensions;

/// Draws every visible window of an arrangement as a bordered block.
pub struct LayoutPreview<'a> {
    /// The arrangement to draw.
    windows: &'a WindowDimensions,
    /// Window drawn with the highlight style.
    highlighted: Option<&'a str>,
    /// Style for regular borders.
    border_style: Style,
    /// Style for the highlighted window's border.
    highlight_style: Style,
    /// Border line set.
    border_type: BorderType,
}

impl<'a> LayoutPreview<'a> {
    /// Create a new preview widget.
    #[must_use]
    pub fn new(windows: &'a WindowDimensions) -> Self {
        Self {
            windows,
            highlighted: None,
            border_style: Style::default(),
            highlight_style: Style::default().fg(Color::Green),
            border_type: BorderType::Plain,
        }
    }

    /// Highlight the named window.
    #[must_use]
    pub fn highlighted(mut self, name: &'a str) -> Self {
        self.highlighted = Some(name);
        self
    }

    /// Set the border style.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the highlight style.
    #[must_use]
    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// Set the border type.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }
}

impl Widget for LayoutPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut names: Vec<&String> = self.windows.keys().collect();
        names.sort();

        for name in names {
            let Some(rect) = self.windows[name].to_rect() else {
                continue;
            };
            let rect = rect.intersection(area);
            if rect.is_empty() {
                continue;
            }

            let style = if self.highlighted == Some(name.as_str()) {
                self.highlight_style
            } else {
                self.border_style
            };
            Block::default()
                .borders(Borders::ALL)
                .border_type(self.border_type)
                .border_style(style)
                .title(name.as_str())
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrange::arrange_windows;
    use crate::dimensions::Dimensions;
    use crate::layout::LayoutBox;

    #[test]
    fn test_renders_side_by_side() {
        let root = LayoutBox::column(vec![
            LayoutBox::window("a").weight(1),
            LayoutBox::window("b").weight(1),
        ]);
        let windows = arrange_windows(&root, 0, 0, 10, 3);
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);

        LayoutPreview::new(&windows).render(area, &mut buf);

        assert_eq!(
            buf,
            Buffer::with_lines(["┌a──┐┌b──┐", "│   ││   │", "└───┘└───┘"])
        );
    }

    #[test]
    fn test_hidden_window_not_drawn() {
        let mut windows = WindowDimensions::new();
        windows.insert("gone".to_string(), Dimensions::new(4, 0, 3, 2));
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);

        LayoutPreview::new(&windows).render(area, &mut buf);

        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_clipped_to_area() {
        let mut windows = WindowDimensions::new();
        windows.insert("big".to_string(), Dimensions::new(0, 0, 19, 9));
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);

        LayoutPreview::new(&windows).render(area, &mut buf);

        assert_eq!(buf, Buffer::with_lines(["┌big┐", "│   │", "└───┘"]));
    }

    #[test]
    fn test_overlap_drawn_in_name_order() {
        let mut windows = WindowDimensions::new();
        windows.insert("b".to_string(), Dimensions::new(2, 0, 6, 2));
        windows.insert("a".to_string(), Dimensions::new(0, 0, 4, 2));
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);

        LayoutPreview::new(&windows).render(area, &mut buf);

        assert_eq!(
            buf,
            Buffer::with_lines(["┌a┌b──┐", "│ │ │ │", "└─└───┘"])
        );
    }

    #[test]
    fn test_highlight_style() {
        let mut windows = WindowDimensions::new();
        windows.insert("files".to_string(), Dimensions::new(0, 0, 6, 2));
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);

        LayoutPreview::new(&windows)
            .highlighted("files")
            .highlight_style(Style::default().fg(Color::Red))
            .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, Color::Red);
        assert_eq!(buf[(6, 2)].fg, Color::Red);
    }
}
