//! Integration tests for the contact form flow.
//!
//! These tests drive the full pipeline a user would: clicking a field to
//! focus it, typing through the command registry, and submitting to a
//! wiremock endpoint over the app's message channel. They verify:
//! 1. Clicking a field focuses it and keystrokes land in that field
//! 2. Page keybindings stay inert while a field captures text
//! 3. Enter walks through the fields to the send button
//! 4. An accepted submission clears the draft and thanks the sender
//! 5. A send already in flight ignores further activations
//! 6. A rejected submission keeps the draft and reports the status
//! 7. Validation failures surface without touching the network

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio::app::form::{FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, SEND_BUTTON};
use folio::app::{App, Section, SubmitStatus};
use folio::input::CommandRegistry;
use folio::profile::Profile;
use folio::ui;
use folio::ui::focus::FocusId;
use folio::ui::interaction::ClickAction;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn test_app() -> App {
    App::new(Profile::default())
}

fn app_with_endpoint(endpoint: &str) -> App {
    let profile = Profile {
        contact_endpoint: endpoint.to_string(),
        ..Profile::default()
    };
    App::new(profile)
}

/// Render one frame and return the buffer.
fn draw(app: &mut App) -> Buffer {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| ui::render(frame, app).unwrap())
        .unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn press(app: &mut App, registry: &CommandRegistry, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(command) = registry.dispatch(key, &app.build_input_context()) {
        app.execute_command(command);
    }
}

/// Draw once to measure the page, jump to the contact section, settle
/// the scroll, and draw again so the form's hit areas are on screen.
fn scroll_to_contact(app: &mut App) {
    draw(app);
    app.scroll_to_section(Section::Contact);
    app.scroll = app.scroll_target;
    draw(app);
}

fn type_text(app: &mut App, registry: &CommandRegistry, field: FocusId, text: &str) {
    app.focus.set_focused(Some(field));
    for c in text.chars() {
        press(app, registry, KeyCode::Char(c));
    }
}

#[test]
fn test_click_focuses_field_and_typing_lands_there() {
    let mut app = test_app();
    let registry = CommandRegistry::new();
    scroll_to_contact(&mut app);

    // 1. The name field is clickable once scrolled into view
    let field = app
        .hits
        .iter()
        .find(|area| area.action == ClickAction::FocusField(FIELD_NAME))
        .expect("name field should be clickable")
        .rect;

    // 2. Clicking it takes focus
    let action = app
        .hits
        .hit_test(field.x + 1, field.y)
        .expect("click inside the field should hit it");
    app.handle_click_action(action);
    assert_eq!(app.focus.focused(), Some(FIELD_NAME));

    // 3. Keystrokes land in the focused field
    for c in "Jane".chars() {
        press(&mut app, &registry, KeyCode::Char(c));
    }
    assert_eq!(app.form.name, "Jane");

    press(&mut app, &registry, KeyCode::Backspace);
    assert_eq!(app.form.name, "Jan");

    // 4. The typed value renders in place of the placeholder
    assert!(buffer_text(&draw(&mut app)).contains("Jan"));
}

#[test]
fn test_page_bindings_stay_inert_while_typing() {
    let mut app = test_app();
    let registry = CommandRegistry::new();
    scroll_to_contact(&mut app);

    app.focus.set_focused(Some(FIELD_MESSAGE));
    let scroll_before = app.scroll_target;

    // q, j and g are all page bindings; while typing they are text
    for c in "qjg".chars() {
        press(&mut app, &registry, KeyCode::Char(c));
    }

    assert!(!app.should_quit, "q must type, not quit");
    assert_eq!(
        app.scroll_target, scroll_before,
        "j and g must type, not scroll"
    );
    assert_eq!(app.form.message, "qjg");
}

#[test]
fn test_enter_walks_fields_to_the_send_button() {
    let mut app = test_app();
    let registry = CommandRegistry::new();
    scroll_to_contact(&mut app);

    app.focus.set_focused(Some(FIELD_NAME));
    press(&mut app, &registry, KeyCode::Enter);
    assert_eq!(app.focus.focused(), Some(FIELD_EMAIL));
    press(&mut app, &registry, KeyCode::Enter);
    assert_eq!(app.focus.focused(), Some(FIELD_MESSAGE));
    press(&mut app, &registry, KeyCode::Enter);
    assert_eq!(app.focus.focused(), Some(SEND_BUTTON));
}

#[tokio::test]
async fn test_accepted_submission_clears_the_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f/profile"))
        .and(body_string_contains("name=Jane+Roe"))
        .and(body_string_contains("email=jane%40roe.dev"))
        .and(body_string_contains("message=Terminal+says+hi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_with_endpoint(&format!("{}/f/profile", server.uri()));
    let mut message_rx = app.message_rx.take().expect("channel receiver");
    let registry = CommandRegistry::new();
    scroll_to_contact(&mut app);

    // 1. Fill the form the way a user would
    type_text(&mut app, &registry, FIELD_NAME, "Jane Roe");
    type_text(&mut app, &registry, FIELD_EMAIL, "jane@roe.dev");
    type_text(&mut app, &registry, FIELD_MESSAGE, "Terminal says hi");

    // 2. Enter on the send button starts the submission
    app.focus.set_focused(Some(SEND_BUTTON));
    press(&mut app, &registry, KeyCode::Enter);
    assert_eq!(app.form.status, SubmitStatus::Sending);

    // 3. Another Enter while the send is in flight does nothing;
    //    the mock's expect(1) would catch a second request
    press(&mut app, &registry, KeyCode::Enter);
    assert_eq!(app.form.status, SubmitStatus::Sending);

    // 4. The spawned task reports back over the channel
    let message = message_rx.recv().await.expect("task should report back");
    app.handle_message(message);

    assert_eq!(app.form.status, SubmitStatus::Sent);
    assert!(app.form.name.is_empty(), "accepted send clears the draft");
    assert!(app.form.email.is_empty());
    assert!(app.form.message.is_empty());

    // 5. The thank-you note is on screen
    assert!(buffer_text(&draw(&mut app)).contains("Message sent. Thank you!"));
}

#[tokio::test]
async fn test_rejected_submission_keeps_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = app_with_endpoint(&server.uri());
    let mut message_rx = app.message_rx.take().expect("channel receiver");
    scroll_to_contact(&mut app);

    app.form.name = "Jane Roe".to_string();
    app.form.email = "jane@roe.dev".to_string();
    app.form.message = "Still here".to_string();
    app.submit_contact_form();

    let message = message_rx.recv().await.expect("task should report back");
    app.handle_message(message);

    assert!(matches!(app.form.status, SubmitStatus::Failed(_)));
    assert_eq!(app.form.name, "Jane Roe", "failed send keeps the draft");
    assert!(buffer_text(&draw(&mut app)).contains("form endpoint answered 500"));
}

#[test]
fn test_empty_form_fails_validation_in_place() {
    let mut app = test_app();
    let registry = CommandRegistry::new();
    scroll_to_contact(&mut app);

    // Enter on the send button with everything empty
    app.focus.set_focused(Some(SEND_BUTTON));
    press(&mut app, &registry, KeyCode::Enter);

    assert_eq!(
        app.form.status,
        SubmitStatus::Failed("All fields are required".to_string())
    );
    assert!(buffer_text(&draw(&mut app)).contains("All fields are required"));

    // Typing again clears the failure
    app.focus.set_focused(Some(FIELD_NAME));
    press(&mut app, &registry, KeyCode::Char('J'));
    assert_eq!(app.form.status, SubmitStatus::Idle);
}
