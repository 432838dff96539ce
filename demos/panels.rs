//! Interactive preview of a responsive panel layout.
//!
//! Run with: cargo run --example panels
//!
//! Controls:
//! - q: Quit
//! - Tab: Highlight next window
//! - Resize the terminal to see the layout switch between shapes

use std::io::{self, stdout};
use std::time::Duration;

use boxlayout::{arrange_windows, Axis, LayoutBox, LayoutPreview};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::BorderType, Terminal};

const WINDOWS: [&str; 7] = [
    "status", "files", "branches", "commits", "stash", "main", "options",
];

fn main() -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Side panels: the stash window only appears when there is room for it.
fn side_panels(_width: i32, height: i32) -> Vec<LayoutBox> {
    let mut panels = vec![
        LayoutBox::window("status").size(3),
        LayoutBox::window("files").weight(1),
        LayoutBox::window("branches").weight(1),
        LayoutBox::window("commits").weight(1),
    ];
    if height >= 20 {
        panels.push(LayoutBox::window("stash").size(3));
    }
    panels
}

fn build_layout() -> LayoutBox {
    // Portrait terminals stack the side panels above the main view.
    let body = LayoutBox::empty()
        .weight(1)
        .conditional_axis(|width, height| {
            if width < 84 && height > 30 {
                Axis::Row
            } else {
                Axis::Column
            }
        })
        .children(vec![
            LayoutBox::empty()
                .weight(1)
                .axis(Axis::Row)
                .conditional_children(side_panels),
            LayoutBox::window("main").weight(2),
        ]);

    LayoutBox::row(vec![body, LayoutBox::window("options").size(1)])
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    let root = build_layout();
    let mut highlighted = 0;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let windows = arrange_windows(
                &root,
                i32::from(area.x),
                i32::from(area.y),
                i32::from(area.width),
                i32::from(area.height),
            );
            let widget = LayoutPreview::new(&windows)
                .border_type(BorderType::Rounded)
                .highlighted(WINDOWS[highlighted]);
            frame.render_widget(widget, area);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Tab => highlighted = (highlighted + 1) % WINDOWS.len(),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
