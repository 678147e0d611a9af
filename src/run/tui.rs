use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Settings;
use crate::ledger::LedgerCache;
use crate::source::SheetSource;
use crate::ui::app::{App, Screen};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

type Cache = LedgerCache<Box<dyn SheetSource>>;

pub(crate) fn as_tui(settings: &Settings) -> Result<()> {
    let source = settings.open_source()?;
    let mut app = App::new(settings.balance_config()?, source.describe());
    let mut cache = LedgerCache::new(source, settings.load_settings());
    app.refresh(&mut cache);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut cache);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "dashboard exited with an error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cache: &mut Cache,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status bars, table borders, header row
            let content_height = f.area().height.saturating_sub(5) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            handle_input(key, app, cache);
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_input(key: event::KeyEvent, app: &mut App, cache: &mut Cache) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('r') => app.reload(cache),
        KeyCode::Char('h') | KeyCode::Left => app.select_prev_month(cache),
        KeyCode::Char('l') | KeyCode::Right => app.select_next_month(cache),
        KeyCode::Char('1') => app.screen = Screen::Dashboard,
        KeyCode::Char('2') => app.screen = Screen::Data,
        KeyCode::Tab | KeyCode::BackTab => {
            app.screen = match app.screen {
                Screen::Dashboard => Screen::Data,
                Screen::Data => Screen::Dashboard,
            };
        }
        KeyCode::Char('j') | KeyCode::Down if app.screen == Screen::Data => {
            let len = app.preview_len();
            scroll_down(
                &mut app.preview_index,
                &mut app.preview_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('k') | KeyCode::Up if app.screen == Screen::Data => {
            scroll_up(&mut app.preview_index, &mut app.preview_scroll);
        }
        KeyCode::Char('g') if app.screen == Screen::Data => {
            scroll_to_top(&mut app.preview_index, &mut app.preview_scroll);
        }
        KeyCode::Char('G') if app.screen == Screen::Data => {
            let len = app.preview_len();
            scroll_to_bottom(
                &mut app.preview_index,
                &mut app.preview_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}
