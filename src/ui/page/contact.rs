//! Contact section: intro copy and the message form.
//!
//! The form is three fields over a send button, capped at a readable
//! width. Clicking a field focuses it; typing goes to whichever field
//! holds focus. The row under the button reports the submit status.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::app::form::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, SEND_BUTTON};
use crate::app::{ContactForm, FormField, SubmitStatus};
use crate::error::Result;
use crate::profile::Profile;
use crate::style::theme::{
    COLOR_ERROR, COLOR_FOCUS, COLOR_FOREGROUND, COLOR_MUTED, COLOR_MUTED_FG, COLOR_SUCCESS,
};
use crate::style::when;
use crate::ui::components::{render_button, ButtonConfig};
use crate::ui::interaction::ClickAction;
use crate::ui::text::{wrap_text, wrapped_height};
use crate::ui::transition::Transition;
use crate::ui::RenderContext;

use super::{dim_entering, entrance_area};

const INTRO: &str = "I'd love to hear about your next project. Send me a message, and \
                     let's build something great together.";

/// Widest the form gets, matching the page's readable measure.
const FORM_MAX_WIDTH: u16 = 44;
/// Rows of the multi line message field.
const MESSAGE_ROWS: u16 = 3;
/// Rows below the intro: three fields with gaps, the send button, and
/// the status line.
const FORM_ROWS: u16 = 1 + 1 + 1 + 1 + MESSAGE_ROWS + 1 + 1 + 1;

pub fn measure(profile: &Profile, width: u16) -> u16 {
    let _ = profile;
    2 + wrapped_height(INTRO, width) + 1 + FORM_ROWS
}

pub fn render(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    profile: &Profile,
    form: &ContactForm,
    transition: &Transition,
) -> Result<()> {
    let _ = profile;
    let area = entrance_area(area, transition, ctx.tick);
    if area.width < 8 || area.height < 4 {
        return Ok(());
    }

    buf.set_stringn(
        area.x,
        area.y,
        "Get in touch",
        area.width as usize,
        Style::default().add_modifier(Modifier::BOLD),
    );

    let mut y = area.y + 2;
    for line in wrap_text(INTRO, area.width) {
        if y >= area.bottom() {
            return Ok(());
        }
        buf.set_stringn(area.x, y, &line, area.width as usize, Style::default());
        y += 1;
    }
    y += 1;

    let form_width = area.width.min(FORM_MAX_WIDTH);
    for field in [FormField::Name, FormField::Email] {
        if y >= area.bottom() {
            return Ok(());
        }
        render_field(buf, ctx, Rect::new(area.x, y, form_width, 1), form, field);
        y += 2;
    }
    if y + MESSAGE_ROWS <= area.bottom() {
        render_field(
            buf,
            ctx,
            Rect::new(area.x, y, form_width, MESSAGE_ROWS),
            form,
            FormField::Message,
        );
    }
    y += MESSAGE_ROWS + 1;

    if y < area.bottom() {
        let send = ButtonConfig::new("Send")
            .class(when(form.is_sending(), "dim"))
            .focus(SEND_BUTTON)
            .on_press(ClickAction::SubmitForm);
        let width = send.measure()?.min(form_width);
        render_button(buf, ctx, Rect::new(area.x, y, width, 1), &send)?;
    }
    y += 1;

    if y < area.bottom() {
        render_status(buf, Rect::new(area.x, y, area.width, 1), &form.status);
    }

    dim_entering(buf, area, transition, ctx.tick);
    Ok(())
}

/// One form field: a filled strip showing the value, or the placeholder
/// while empty. The focused field gets a trailing cursor block.
fn render_field(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    area: Rect,
    form: &ContactForm,
    field: FormField,
) {
    let id = field.focus_id();
    let focused = ctx.focus.is_focused(id);
    let value = form.field(field);

    buf.set_style(area, Style::default().bg(COLOR_MUTED).fg(COLOR_FOREGROUND));

    let text_width = area.width.saturating_sub(2);
    if value.is_empty() {
        buf.set_stringn(
            area.x + 1,
            area.y,
            field.placeholder(),
            text_width as usize,
            Style::default().fg(COLOR_MUTED_FG),
        );
        if focused {
            set_cursor(buf, area.x + 1, area.y);
        }
    } else if area.height == 1 {
        let shown = tail_chars(value, text_width.saturating_sub(1) as usize);
        buf.set_stringn(area.x + 1, area.y, &shown, text_width as usize, Style::default());
        if focused {
            set_cursor(buf, area.x + 1 + shown.width() as u16, area.y);
        }
    } else {
        let lines = wrap_text(value, text_width);
        let skip = lines.len().saturating_sub(area.height as usize);
        let mut last_end = (area.x + 1, area.y);
        for (i, line) in lines.iter().skip(skip).enumerate() {
            let y = area.y + i as u16;
            buf.set_stringn(area.x + 1, y, line, text_width as usize, Style::default());
            last_end = (area.x + 1 + line.width() as u16, y);
        }
        if focused {
            set_cursor(buf, last_end.0.min(area.right() - 1), last_end.1);
        }
    }

    ctx.hits.register(
        area,
        ClickAction::FocusField(id),
        Some(Style::default().fg(COLOR_FOCUS)),
    );
    // Fields take keys through the typing context, not Enter activation
    ctx.focus.register(id, ctx.scope, None);
}

fn set_cursor(buf: &mut Buffer, x: u16, y: u16) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol("█");
        cell.set_style(Style::default().fg(COLOR_FOCUS));
    }
}

/// Keeps the end of the value visible while typing.
fn tail_chars(value: &str, max: usize) -> String {
    let count = value.chars().count();
    if count <= max {
        value.to_string()
    } else {
        value.chars().skip(count - max).collect()
    }
}

fn render_status(buf: &mut Buffer, area: Rect, status: &SubmitStatus) {
    let (text, style) = match status {
        SubmitStatus::Idle => return,
        SubmitStatus::Sending => (
            "Sending...".to_string(),
            Style::default()
                .fg(COLOR_MUTED_FG)
                .add_modifier(Modifier::DIM),
        ),
        SubmitStatus::Sent => (
            "Message sent. Thank you!".to_string(),
            Style::default().fg(COLOR_SUCCESS),
        ),
        SubmitStatus::Failed(reason) => (reason.clone(), Style::default().fg(COLOR_ERROR)),
    };
    buf.set_stringn(area.x, area.y, &text, area.width as usize, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::{FocusRegistry, FocusScope};
    use crate::ui::interaction::HitAreaRegistry;
    use crate::ui::layout::LayoutContext;
    use crate::ui::transition::TransitionKind;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    struct Fixture {
        hits: HitAreaRegistry,
        focus: FocusRegistry,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                hits: HitAreaRegistry::new(),
                focus: FocusRegistry::new(),
            }
        }

        fn ctx(&mut self, width: u16, height: u16) -> RenderContext<'_> {
            RenderContext {
                layout: LayoutContext::new(width, height),
                hits: &mut self.hits,
                focus: &mut self.focus,
                overlay: None,
                scope: FocusScope::Page,
                tick: 1_000,
            }
        }
    }

    fn render_with(form: &ContactForm, fx: &mut Fixture) -> Buffer {
        let profile = Profile::default();
        let width = 60;
        let height = measure(&profile, width);
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        let area = buf.area;
        let mut ctx = fx.ctx(width, 30);
        render(
            &mut buf,
            &mut ctx,
            area,
            &profile,
            form,
            &Transition::new(TransitionKind::Rise),
        )
        .unwrap();
        buf
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let mut fx = Fixture::new();
        let buf = render_with(&ContactForm::default(), &mut fx);

        let text = buffer_text(&buf);
        assert!(text.contains("Get in touch"));
        assert!(text.contains("I'd love to hear about your next project."));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Message"));
        assert!(text.contains("Send"));
    }

    #[test]
    fn test_typed_value_replaces_placeholder() {
        let mut form = ContactForm::default();
        for c in "Jane".chars() {
            form.type_char(FormField::Name, c);
        }
        let mut fx = Fixture::new();
        let buf = render_with(&form, &mut fx);

        let text = buffer_text(&buf);
        assert!(text.contains("Jane"));
    }

    #[test]
    fn test_focused_field_shows_cursor() {
        let mut fx = Fixture::new();
        fx.focus.set_focused(Some(FIELD_NAME));
        let buf = render_with(&ContactForm::default(), &mut fx);

        assert!(buffer_text(&buf).contains("█"));
    }

    #[test]
    fn test_fields_and_send_are_clickable() {
        let mut fx = Fixture::new();
        let buf = render_with(&ContactForm::default(), &mut fx);

        let mut actions = Vec::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(action) = fx.hits.hit_test(x, y) {
                    if !actions.contains(&action) {
                        actions.push(action);
                    }
                }
            }
        }
        assert!(actions.contains(&ClickAction::FocusField(FIELD_NAME)));
        assert!(actions.contains(&ClickAction::FocusField(FIELD_EMAIL)));
        assert!(actions.contains(&ClickAction::FocusField(FIELD_MESSAGE)));
        assert!(actions.contains(&ClickAction::SubmitForm));
    }

    #[test]
    fn test_tab_order_runs_fields_then_send() {
        let mut fx = Fixture::new();
        render_with(&ContactForm::default(), &mut fx);

        assert!(fx.focus.focus_next());
        assert_eq!(fx.focus.focused(), Some(FIELD_NAME));
        fx.focus.focus_next();
        assert_eq!(fx.focus.focused(), Some(FIELD_EMAIL));
        fx.focus.focus_next();
        assert_eq!(fx.focus.focused(), Some(FIELD_MESSAGE));
        fx.focus.focus_next();
        assert_eq!(fx.focus.focused(), Some(SEND_BUTTON));
    }

    #[test]
    fn test_status_line_reports_sent() {
        let mut form = ContactForm::default();
        form.status = SubmitStatus::Sent;
        let mut fx = Fixture::new();
        let buf = render_with(&form, &mut fx);

        assert!(buffer_text(&buf).contains("Message sent. Thank you!"));
    }

    #[test]
    fn test_status_line_reports_failure() {
        let mut form = ContactForm::default();
        form.status = SubmitStatus::Failed("All fields are required".to_string());
        let mut fx = Fixture::new();
        let buf = render_with(&form, &mut fx);

        assert!(buffer_text(&buf).contains("All fields are required"));
    }

    #[test]
    fn test_long_value_keeps_tail_visible() {
        let mut form = ContactForm::default();
        for c in "a very long name that cannot fit in the field at this width".chars() {
            form.type_char(FormField::Name, c);
        }
        let mut fx = Fixture::new();
        let buf = render_with(&form, &mut fx);

        let text = buffer_text(&buf);
        assert!(text.contains("at this width"));
    }
}
