//! Dashboard UI module
//!
//! Composes the header, the three panels and the footer.
//!
//! # Layout
//! ```text
//! +------------------------------------------------+
//! |            DevOps Learning Dashboard           |
//! | ! error banner (connected failures only)       |
//! +------------------------------------------------+
//! | API Status           | Users (n)               |
//! |  ● Connected         |  Ana   a@x.com          |
//! |  ...                 |  ...                    |
//! +----------------------+                         |
//! | Counter              |  [Name ]                |
//! |  3                   |  [Email]                |
//! +----------------------+-------------------------+
//! | key hints                        API URL: ...  |
//! +------------------------------------------------+
//! ```
//!
//! Narrow terminals stack the panels vertically.

pub mod banner;
pub mod context;
pub mod counter_panel;
pub mod footer;
pub mod header;
pub mod status_panel;
pub mod users_panel;

pub use context::RenderContext;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::COLOR_DIM;

/// Below this size only a resize message is drawn
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 18;

/// Side-by-side panels from this width up
pub const WIDE_WIDTH: u16 = 90;

const COUNTER_HEIGHT: u16 = 6;

/// Render the complete dashboard view into `area`
pub fn render_dashboard(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let [header_area, banner_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(banner::banner_height(ctx)),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render(frame, header_area);
    banner::render(frame, banner_area, ctx);

    // Panel body plus its borders
    let status_height = status_panel::connection_lines(ctx).len() as u16 + 2;

    if body_area.width >= WIDE_WIDTH {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body_area);
        let [status_area, counter_area] = Layout::vertical([
            Constraint::Min(status_height),
            Constraint::Length(COUNTER_HEIGHT),
        ])
        .areas(left);

        status_panel::render(frame, status_area, ctx);
        counter_panel::render(frame, counter_area, ctx);
        users_panel::render(frame, right, ctx);
    } else {
        let [status_area, counter_area, users_area] = Layout::vertical([
            Constraint::Length(status_height),
            Constraint::Length(COUNTER_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(body_area);

        status_panel::render(frame, status_area, ctx);
        counter_panel::render(frame, counter_area, ctx);
        users_panel::render(frame, users_area, ctx);
    }

    footer::render(frame, footer_area, ctx);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {}x{}", MIN_WIDTH, MIN_HEIGHT)),
    ])
    .style(Style::default().fg(COLOR_DIM))
    .alignment(Alignment::Center);

    let y = area.y + area.height.saturating_sub(2) / 2;
    let centered = Rect {
        y,
        height: area.height.min(2),
        ..area
    };
    frame.render_widget(message, centered);
}
