mod app;
mod config;
mod keys;
mod log_buffer;
mod ui;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use app::{App, FocusedPanel};
use clap::Parser;
use config::Config;
use keys::Action;
use log_buffer::{LogBuffer, LogBufferLayer};
use spendview_core::{HomeEvent, Logic, config::RepositoryKind};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Terminal view of a credit-card statement.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the config file.
    #[arg(long, default_value = Config::FILENAME)]
    config: PathBuf,

    /// Read statements from this directory instead of the configured repository.
    #[arg(long)]
    statements: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to the in-app panel instead of stdout.
    let log_buffer = LogBuffer::new();

    let log_file = std::fs::File::create("spendview-tui.log")?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(LogBufferLayer::new(log_buffer.clone()))
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spendview=info")),
        )
        .init();

    if !args.config.exists() {
        Config::default().save(&args.config)?;
    }
    let mut config = Config::load(&args.config)?;
    if let Some(root) = args.statements {
        config.repository.kind = RepositoryKind::Local;
        config.repository.root = root;
    }

    let mut logic = Logic::from_config(&config.general, &config.repository);
    logic.load_statement();
    logic.refresh_statements();

    let mut app = App::new(config, logic, log_buffer);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(app.config.general.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.needs_redraw = false;
        }
        let term_size = terminal.size()?;
        let size = Rect::new(0, 0, term_size.width, term_size.height);

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let process_event = |evt: Event, app: &mut App| match evt {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    handle_key_event(app, &key);
                    app.needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    if handle_mouse_event(app, &mouse, size) {
                        app.needs_redraw = true;
                    }
                }
                Event::Resize(_, _) => {
                    app.needs_redraw = true;
                }
                _ => {}
            };

            process_event(event::read()?, app);
            while event::poll(Duration::ZERO)? {
                process_event(event::read()?, app);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: &event::KeyEvent) {
    // Any key dismisses the error popup.
    if app.logic.state().error.is_some() {
        app.logic.dispatch(HomeEvent::DismissError);
        return;
    }

    match app.focused_panel {
        FocusedPanel::Home => {
            if let Some(action) = keys::home_action(key) {
                handle_home_action(app, action);
            }
        }
        FocusedPanel::Import => {
            if let Some(action) = keys::import_action(key)
                && let Some(ia) = ui::import::handle_key(app, action)
            {
                match ia {
                    ui::import::ImportAction::Close => app.close_import(),
                }
            }
        }
        FocusedPanel::Logs => {
            if let Some(action) = keys::logs_action(key)
                && let Some(la) = ui::logs::handle_key(&mut app.logs, action)
            {
                match la {
                    ui::logs::LogsAction::Close => app.toggle_logs(),
                }
            }
        }
    }
}

fn handle_home_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::PreviousCategory => {
            app.logic.select_adjacent(-1);
            app.sheet_scroll = 0;
        }
        Action::NextCategory => {
            app.logic.select_adjacent(1);
            app.sheet_scroll = 0;
        }
        Action::ViewTotal => app.dispatch_sheet(HomeEvent::ViewTotal),
        Action::AddTransaction => app.dispatch_sheet(HomeEvent::AddTransaction),
        Action::Back => app.logic.dispatch(HomeEvent::DismissSheet),
        Action::Import => app.open_import(),
        Action::RefreshStatements => app.logic.refresh_statements(),
        Action::ReloadStatement => app.logic.load_statement(),
        Action::Logs => app.toggle_logs(),
        Action::MoveUp
        | Action::MoveDown
        | Action::PageUp
        | Action::PageDown
        | Action::GotoTop
        | Action::GotoBottom => ui::sheet::handle_scroll(app, action),
        _ => {}
    }
}

/// Returns whether the event changed anything on screen.
fn handle_mouse_event(app: &mut App, mouse: &MouseEvent, size: Rect) -> bool {
    let main = ui::layout::split_main(size);
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.logic.state().error.is_some() {
                app.logic.dispatch(HomeEvent::DismissError);
                return true;
            }
            let plot = ui::layout::chart_plot_area(main.chart);
            y >= plot.y && y < plot.y + plot.height && app.click_chart(main.chart, x)
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let down = mouse.kind == MouseEventKind::ScrollDown;
            let steps = ui::layout::SCROLL_WHEEL_STEPS;
            match app.focused_panel {
                FocusedPanel::Logs => {
                    let delta = steps as isize;
                    app.logs.scroll_by(if down { delta } else { -delta });
                }
                FocusedPanel::Home => {
                    let action = if down { Action::MoveDown } else { Action::MoveUp };
                    for _ in 0..steps {
                        ui::sheet::handle_scroll(app, action);
                    }
                }
                FocusedPanel::Import => return false,
            }
            true
        }
        _ => false,
    }
}
