//! Users panel: list plus the add-user form
//!
//! While a fetch is in flight the list area shows only the loading
//! indicator, never rows and the indicator together.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::context::RenderContext;
use crate::app::Focus;
use crate::state::DraftField;
use crate::ui::components::{
    render_input_field, render_status_indicator, InputFieldConfig, StatusIndicatorType,
};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS};

pub const LOADING: &str = "Loading...";
pub const EMPTY: &str = "No users found";

/// Two bordered inputs plus the submit hint
const FORM_HEIGHT: u16 = 7;

pub fn title(ctx: &RenderContext) -> String {
    format!(" Users ({}) ", ctx.state.users.len())
}

pub fn user_lines(ctx: &RenderContext) -> Vec<Line<'static>> {
    let state = ctx.state;
    if state.loading {
        return vec![render_status_indicator(&StatusIndicatorType::spinner(
            LOADING,
            ctx.spinner_frame(),
        ))];
    }
    if state.users.is_empty() {
        return vec![render_status_indicator(&StatusIndicatorType::info(EMPTY))];
    }

    let name_width = state
        .users
        .iter()
        .map(|u| unicode_width::UnicodeWidthStr::width(u.name.as_str()))
        .max()
        .unwrap_or(0);

    state
        .users
        .iter()
        .map(|user| {
            let pad = name_width
                .saturating_sub(unicode_width::UnicodeWidthStr::width(user.name.as_str()));
            Line::from(vec![
                Span::styled(
                    user.name.clone(),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(pad + 2)),
                Span::styled(user.email.clone(), Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let border_color = if ctx.focus.is_form() {
        COLOR_FOCUS
    } else {
        COLOR_BORDER
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(title(ctx));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, form_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(FORM_HEIGHT)]).areas(inner);

    frame.render_widget(Paragraph::new(user_lines(ctx)), list_area);
    render_form(frame, form_area, ctx);
}

fn render_form(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let [name_area, email_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let draft = &ctx.state.draft;
    for (field, field_area, placeholder) in [
        (DraftField::Name, name_area, "Press a to add a user"),
        (DraftField::Email, email_area, "user@example.com"),
    ] {
        let config = InputFieldConfig::new(field.label(), draft.field(field))
            .focused(ctx.focus.draft_field() == Some(field))
            .placeholder(placeholder);
        render_input_field(frame, field_area, &config);
    }

    let hint = if ctx.focus == Focus::Panels {
        Span::styled("Add User", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled("Enter to add user", Style::default().fg(COLOR_FOCUS))
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), hint_area);
}
