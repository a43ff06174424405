use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use dictregex_core::config::AppConfig;
use dictregex_core::dictionary::WordListProvider;
use dictregex_core::logging::init_file_logging;
use dictregex_core::presets::EXAMPLE_QUERIES;
use dictregex_core::render::result_segments;
use dictregex_core::{Result, SearchSession};
use std::io::{self, Stdout, Write};
use tracing::{info, warn};

const HEADER_LINES: u16 = 6;

struct App {
    session: SearchSession,
    provider: Box<dyn WordListProvider>,
    input: String,
    scroll: usize,
    status: Option<String>,
}

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    if let Err(e) = init_file_logging(&config.log_path) {
        eprintln!("[dictregex] could not open log file: {}", e);
    }
    info!("--- dictregex starting ---");

    let provider = config.word_provider();
    let words = provider.load(config.locale)?;
    let mut session = SearchSession::with_words(config.locale, config.dialect, words);
    session.set_colorize(config.colorize);

    let mut app = App {
        session,
        provider,
        input: String::new(),
        scroll: 0,
        status: None,
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run(&mut app, &mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    info!("shutting down");
    result
}

fn run(app: &mut App, stdout: &mut Stdout) -> Result<()> {
    loop {
        draw(app, stdout)?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if !handle_key(app, key) {
            return Ok(());
        }
    }
}

/// Returns `false` when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let page_rows = terminal::size()
        .map(|(_, rows)| rows.saturating_sub(HEADER_LINES) as usize)
        .unwrap_or(10)
        .max(1);

    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Char(c @ '1'..='5') if key.modifiers.contains(KeyModifiers::ALT) => {
            let index = c as usize - '1' as usize;
            app.input = EXAMPLE_QUERIES[index].pattern.to_string();
            search(app);
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            search(app);
        }
        KeyCode::Backspace => {
            app.input.pop();
            search(app);
        }
        KeyCode::Tab => {
            let colorize = !app.session.colorize();
            app.session.set_colorize(colorize);
        }
        KeyCode::Enter => app.session.load_remaining(),
        KeyCode::F(2) => app.session.show_all(),
        KeyCode::F(3) => {
            app.session.show_limited();
            app.scroll = 0;
        }
        KeyCode::F(5) => switch_language(app),
        KeyCode::Down => app.scroll += 1,
        KeyCode::Up => app.scroll = app.scroll.saturating_sub(1),
        KeyCode::PageDown => app.scroll += page_rows,
        KeyCode::PageUp => app.scroll = app.scroll.saturating_sub(page_rows),
        _ => {}
    }

    let shown = app.session.page().map_or(0, |p| p.displayed().len());
    app.scroll = app.scroll.min(shown.saturating_sub(1));
    true
}

fn search(app: &mut App) {
    app.scroll = 0;
    app.status = None;
    if app.input.is_empty() {
        app.session.clear();
        return;
    }
    if app.session.search(&app.input).is_err() {
        app.status = Some("Invalid regular expression".to_string());
    }
}

fn switch_language(app: &mut App) {
    let locale = app.session.locale().toggled();
    match app.provider.load(locale) {
        Ok(words) => {
            app.session.replace_words(locale, words);
            app.scroll = 0;
            app.status = None;
        }
        Err(e) => {
            warn!(locale = locale.code(), error = %e, "language switch failed");
            app.status = Some(format!("Could not load {}: {}", locale.word_file(), e));
        }
    }
}

fn draw(app: &App, out: &mut Stdout) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let session = &app.session;
    let view = session.view();

    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!(
            "Dictionary regex [{}{}] colorize:{}",
            session.locale().code(),
            if session.locale().is_rtl() { ", rtl" } else { "" },
            if session.colorize() { "on" } else { "off" }
        )),
        MoveTo(0, 1),
        Print("Tab colorize  F2 show all  F3 first 5,000  Enter load more  F5 language  Alt+1..5 examples  Esc quit"),
        MoveTo(0, 2),
        Print(format!("> {}", app.input)),
        MoveTo(0, 3),
    )?;

    match (&app.status, &view.warning_total) {
        (Some(status), _) => queue!(out, PrintStyledContent(status.as_str().red()))?,
        (None, Some(total)) => queue!(
            out,
            PrintStyledContent(format!("{} matches found; showing the first 5,000 (F2 shows all)", total).yellow())
        )?,
        (None, None) => {}
    }

    queue!(out, MoveTo(0, 4), Print(format!("Matches: {}", view.count_label)))?;
    if let Some(label) = &view.load_more_label {
        queue!(out, Print("  "), PrintStyledContent(format!("[Enter] {}", label).cyan()))?;
    }

    let visible = rows.saturating_sub(HEADER_LINES) as usize;
    let items = view.items.iter().enumerate().skip(app.scroll).take(visible);
    for (line, (index, item)) in (HEADER_LINES - 1..).zip(items) {
        queue!(out, MoveTo(0, line), Print(format!("{:>6}. ", index + 1)))?;
        let mut width = 8usize;
        for seg in result_segments(item) {
            width += seg.text.chars().count();
            if width > cols as usize {
                break;
            }
            if seg.highlighted {
                queue!(out, PrintStyledContent(seg.text.bold().yellow()))?;
            } else {
                queue!(out, Print(seg.text))?;
            }
        }
    }

    out.flush()
}
