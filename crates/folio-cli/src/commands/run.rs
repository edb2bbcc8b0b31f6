use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::{info, warn};

use folio_core::{AppConfig, Portfolio};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    layout::{NAV_HEIGHT, STATUS_HEIGHT},
    widgets::{NavBarWidget, PageWidget, PopupWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>, portfolio: Portfolio) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Build app state before touching the terminal so content errors print normally
    let title = format!("{} · portfolio", portfolio.profile.name);
    let mut app = App::new(config.clone(), portfolio)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);
    info!(width = size.width, height = size.height, "starting portfolio view");

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.dispose();
    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        app.update_animations();

        let view: &App = app;
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(NAV_HEIGHT),
                    Constraint::Min(1),
                    Constraint::Length(STATUS_HEIGHT),
                ])
                .split(frame.area());

            NavBarWidget::render(frame, chunks[0], view);
            PageWidget::render(frame, chunks[1], view);
            StatusBarWidget::render(frame, chunks[2], view);

            if view.mode == Mode::Help {
                PopupWidget::render_help(frame, view);
            }
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action);
                }
                AppEvent::Resize(width, height) => {
                    app.resize(width, height);
                }
                AppEvent::Tick => {
                    app.tick(Instant::now());
                }
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::ScrollPageDown => app.scroll_page_down(),
        Action::ScrollPageUp => app.scroll_page_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::NextProject => app.next_project(),
        Action::PrevProject => app.prev_project(),
        Action::GoToProject(index) => app.go_to_project(index),
        Action::OpenLink => {
            if let Err(e) = app.open_link() {
                warn!("Failed to open link: {}", e);
                app.set_status(format!("Could not open link: {}", e));
            }
        }
        Action::ToggleTheme => app.toggle_theme(),
        Action::ShowHelp => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
        }
        Action::None => {}
    }
}
