use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyEventKind, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use folio::app::{App, AppMessage};
use folio::cli;
use folio::error::FolioError;
use folio::input::CommandRegistry;
use folio::logging;
use folio::profile::Profile;
use folio::ui;

fn main() -> Result<()> {
    // Handle CLI flags before any terminal initialization
    let command = match cli::parse_args(std::env::args()) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{}", cli::USAGE);
            std::process::exit(2);
        }
    };
    let options = cli::run_cli_command(command);

    color_eyre::install()?;

    // Logs go to a file; the alternate screen owns stdout from here on
    if let Some(path) = options.log_file.clone().or_else(logging::default_log_path) {
        if let Err(e) = logging::init(&path) {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
        }
    }

    let profile = Profile::load_or_default(options.profile.clone())?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // Enter alternate screen, enable bracketed paste, and mouse capture for
    // clicks, hover, and scroll events
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(profile);

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    if let Err(report) = &result {
        if let Some(err) = report.downcast_ref::<FolioError>() {
            tracing::error!(code = err.error_code(), "exiting on error: {err}");
            eprintln!("{}", err.user_message());
        }
    }
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = execute!(io::stdout(), Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();

    // Create async event stream for terminal input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            let mut render_result = Ok(());
            terminal.draw(|f| {
                render_result = ui::render(f, &mut *app);
            })?;
            render_result?;
            app.needs_redraw = false;
        }

        // 16ms tick for smooth scrolling and entrance animation
        let timeout = tokio::time::sleep(Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            // Handle terminal events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            // Layout re-derives from the frame size on the next draw
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if let Some(command) =
                                registry.dispatch(key, &app.build_input_context())
                            {
                                app.execute_command(command);
                            }
                        }
                        Event::Mouse(mouse_event) => match mouse_event.kind {
                            MouseEventKind::Down(MouseButton::Left) => {
                                if let Some(action) =
                                    app.hits.hit_test(mouse_event.column, mouse_event.row)
                                {
                                    app.handle_click_action(action);
                                    app.mark_dirty();
                                }
                                // No hit: let the terminal handle text selection
                            }
                            MouseEventKind::Moved => {
                                if app.hits.update_hover(mouse_event.column, mouse_event.row) {
                                    app.mark_dirty();
                                }
                            }
                            // Wheel scrolls the page three rows; the page
                            // behind an open dialog stays put
                            MouseEventKind::ScrollDown => {
                                if !app.contact_dialog.is_open() {
                                    app.scroll_by(3);
                                }
                            }
                            MouseEventKind::ScrollUp => {
                                if !app.contact_dialog.is_open() {
                                    app.scroll_by(-3);
                                }
                            }
                            _ => {}
                        },
                        Event::Paste(text) => {
                            if let Some(field) = app.typing_field() {
                                for ch in text.chars() {
                                    app.form.type_char(field, ch);
                                }
                                app.mark_dirty();
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Handle async messages from the submit task
            message = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
