use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub sidebar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, sidebar_width: u16) -> AppLayout {
    // Main vertical split: panes | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Sidebar + section
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: animated sidebar | active section
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width.min(panes.width)),
            Constraint::Min(0),
        ])
        .split(panes);

    AppLayout {
        sidebar: h_chunks[0],
        content: h_chunks[1],
        status_bar,
    }
}

/// Split `area` into a title row, a gap, and the body below.
pub fn section_frame(area: Rect) -> (Rect, Rect) {
    let padded = Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(1),
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(padded);
    (chunks[0], chunks[2])
}
