//! The profile page itself.
//!
//! The page is laid out as a single centered column of three sections:
//!
//! - About: portrait beside the introduction and social links
//! - Projects: a responsive grid of project cards
//! - Contact: a message form posting to the profile's endpoint
//!
//! Sections are measured first (`layout_page`), then rendered into an
//! offscreen buffer tall enough for the whole page. The caller blits the
//! rows under the viewport and shifts the registered hit areas by the
//! scroll offset. Header and footer are chrome and render straight onto
//! the frame, outside this module's page coordinates.

mod about;
mod contact;
mod header;
mod projects;

pub use header::{render_footer, render_header};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::app::{ContactForm, Section, CONTACT_DIALOG_ID, SECTIONS};
use crate::error::Result;
use crate::profile::Profile;
use crate::ui::components::{
    queue_dialog, ButtonConfig, DialogContentConfig, DialogPart, DialogState,
};
use crate::ui::focus::FocusId;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::transition::{Transition, TransitionKind};
use crate::ui::RenderContext;

/// Blank rows above the first section.
pub const TOP_MARGIN: u16 = 1;
/// Blank rows between sections. Also absorbs the rise offset of an
/// entering section so it never overdraws its neighbour.
pub const SECTION_GAP: u16 = 3;
/// Blank rows after the last section.
pub const BOTTOM_MARGIN: u16 = 2;

/// Focus id of the copy button inside the contact dialog.
pub const COPY_EMAIL_BUTTON: FocusId = FocusId("dialog-copy-email");

// ============================================================================
// Entrance Transitions
// ============================================================================

/// One [`Transition`] per animated page element, entered the first time
/// the element scrolls into view.
#[derive(Debug, Clone)]
pub struct PageTransitions {
    pub about_portrait: Transition,
    pub about_text: Transition,
    pub projects: Transition,
    pub contact: Transition,
}

impl PageTransitions {
    pub fn new() -> Self {
        Self {
            about_portrait: Transition::new(TransitionKind::Rise),
            about_text: Transition::new(TransitionKind::Fade),
            projects: Transition::new(TransitionKind::Rise),
            contact: Transition::new(TransitionKind::Rise),
        }
    }

    /// True while any entrance is still animating, so the app keeps
    /// redrawing until everything has settled.
    pub fn any_running(&self, tick: u64) -> bool {
        self.about_portrait.is_running(tick)
            || self.about_text.is_running(tick)
            || self.projects.is_running(tick)
            || self.contact.is_running(tick)
    }
}

impl Default for PageTransitions {
    fn default() -> Self {
        Self::new()
    }
}

/// Shifts `area` down by the transition's current rise offset.
fn entrance_area(area: Rect, transition: &Transition, tick: u64) -> Rect {
    let rise = transition.offset_rows(tick);
    Rect {
        y: area.y + rise,
        height: area.height.saturating_sub(rise),
        ..area
    }
}

/// Dims `area` while the transition is still fading in. Call after the
/// content has been drawn.
fn dim_entering(buf: &mut Buffer, area: Rect, transition: &Transition, tick: u64) {
    if transition.is_dim(tick) {
        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
    }
}

// ============================================================================
// Page Measurement
// ============================================================================

/// Placement of one section in page coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SectionSlot {
    pub section: Section,
    /// Row of the section's first line, measured from the top of the page.
    pub offset: u16,
    pub height: u16,
}

/// The measured page: column placement plus one slot per section.
#[derive(Debug, Clone)]
pub struct PageLayout {
    /// Screen column the content column starts at.
    pub column_x: u16,
    /// Width of the content column.
    pub width: u16,
    pub slots: [SectionSlot; 3],
    /// Rows the whole page occupies, margins included.
    pub total_height: u16,
}

impl PageLayout {
    /// Page rect of the given slot.
    fn slot_area(&self, slot: &SectionSlot) -> Rect {
        Rect::new(self.column_x, slot.offset, self.width, slot.height)
    }

    /// Scroll offset of each section, in reading order.
    pub fn section_offsets(&self) -> [u16; 3] {
        [
            self.slots[0].offset,
            self.slots[1].offset,
            self.slots[2].offset,
        ]
    }
}

/// Measures every section at the current terminal size.
///
/// Section heights depend only on the profile content and the column
/// width, so the render pass can rely on the returned slots fitting
/// exactly.
pub fn layout_page(profile: &Profile, layout: &LayoutContext) -> PageLayout {
    let width = layout.content_column_width();
    let column_x = layout.width.saturating_sub(width) / 2;

    let heights = [
        about::measure(profile, width, layout),
        projects::measure(profile, width),
        contact::measure(profile, width),
    ];

    let mut slots = [SectionSlot {
        section: Section::About,
        offset: 0,
        height: 0,
    }; 3];
    let mut offset = TOP_MARGIN;
    for (slot, (section, height)) in slots.iter_mut().zip(SECTIONS.iter().zip(heights)) {
        *slot = SectionSlot {
            section: *section,
            offset,
            height,
        };
        offset += height + SECTION_GAP;
    }

    PageLayout {
        column_x,
        width,
        slots,
        total_height: offset - SECTION_GAP + BOTTOM_MARGIN,
    }
}

// ============================================================================
// Page Rendering
// ============================================================================

/// Read-only app state the sections render from.
pub struct PageState<'a> {
    pub profile: &'a Profile,
    pub form: &'a ContactForm,
    pub dialog: &'a DialogState,
}

/// Renders all three sections into the page buffer and queues the
/// contact dialog when it is open.
///
/// `scroll` is the rounded scroll offset; it only drives transition
/// entry, the caller decides which rows end up on screen.
pub fn render_page(
    buf: &mut Buffer,
    ctx: &mut RenderContext<'_>,
    page: &PageLayout,
    state: &PageState<'_>,
    transitions: &mut PageTransitions,
    scroll: u16,
) -> Result<()> {
    let view_top = scroll;
    let view_bottom = scroll.saturating_add(ctx.layout.content_height());

    for slot in &page.slots {
        let visible = slot.offset < view_bottom && slot.offset + slot.height > view_top;
        if visible {
            match slot.section {
                Section::About => {
                    transitions.about_portrait.enter(ctx.tick);
                    transitions.about_text.enter(ctx.tick);
                }
                Section::Projects => transitions.projects.enter(ctx.tick),
                Section::Contact => transitions.contact.enter(ctx.tick),
            }
        }

        let area = page.slot_area(slot);
        match slot.section {
            Section::About => about::render(
                buf,
                ctx,
                area,
                state.profile,
                &transitions.about_portrait,
                &transitions.about_text,
            )?,
            Section::Projects => {
                projects::render(buf, ctx, area, state.profile, &transitions.projects)?
            }
            Section::Contact => {
                contact::render(buf, ctx, area, state.profile, state.form, &transitions.contact)?
            }
        }
    }

    queue_dialog(ctx, state.dialog, contact_dialog_content(state.profile))?;
    Ok(())
}

/// Content of the contact dialog: the email address plus a button that
/// copies it to the clipboard.
pub fn contact_dialog_content(profile: &Profile) -> DialogContentConfig {
    DialogContentConfig::new(CONTACT_DIALOG_ID)
        .header(vec![
            DialogPart::Title("Contact me".to_string()),
            DialogPart::Paragraph("Reach me directly by email.".to_string()),
        ])
        .paragraph(profile.email.clone())
        .button(
            ButtonConfig::new("Copy email")
                .variant("secondary")
                .focus(COPY_EMAIL_BUTTON)
                .on_press(ClickAction::CopyEmail),
        )
        .hint("esc close · c copy")
}

// ============================================================================
// Tests
// ============================================================================
