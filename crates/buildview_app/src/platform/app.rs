use std::io;
use std::sync::mpsc;
use std::time::Duration;

use buildview_core::{update, Msg, ViewerState};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use viewer_logging::viewer_info;

use super::logging::{self, LogDestination};
use super::source::{spawn_source, SimulatedBuildSource};
use super::ui;

const SOURCE_POLL_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(builder_addr: String) -> io::Result<()> {
    logging::initialize(LogDestination::File);
    viewer_info!("starting progress viewer for builder {}", builder_addr);

    // Captured once at startup; every later title keeps this tail.
    let title_suffix = format!("{builder_addr} - Build progress");

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    spawn_source(SimulatedBuildSource::new(120), msg_tx, SOURCE_POLL_INTERVAL);

    // Placeholder content until the first populated snapshot arrives.
    let mut state = update(ViewerState::new(), Msg::WaitingRequested);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide, SetTitle(&title_suffix))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(
        &mut terminal,
        &mut state,
        &msg_rx,
        &builder_addr,
        &title_suffix,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ViewerState,
    msg_rx: &mpsc::Receiver<Msg>,
    builder_addr: &str,
    title_suffix: &str,
) -> io::Result<()> {
    loop {
        // Apply pending updates synchronously, in delivery order.
        while let Ok(msg) = msg_rx.try_recv() {
            *state = update(std::mem::take(state), msg);
        }

        if state.consume_dirty() {
            let title = ui::render::window_title(title_suffix, state.content());
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            terminal.draw(|frame| ui::render::draw(frame, builder_addr, state.content()))?;
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit(&key) {
                    viewer_info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
