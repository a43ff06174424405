// Line protocol front-end: one command per stdin line, one JSON object per
// stdout line. Logs go to the configured log file.
use dictregex_core::config::AppConfig;
use dictregex_core::dictionary::WordListProvider;
use dictregex_core::logging::init_file_logging;
use dictregex_core::presets::EXAMPLE_QUERIES;
use dictregex_core::{Locale, SearchSession};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

fn main() -> io::Result<()> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("[dictregex] falling back to default configuration: {}", e);
        AppConfig::default()
    });
    if let Err(e) = init_file_logging(&config.log_path) {
        eprintln!("[dictregex] could not open log file: {}", e);
    }
    info!("--- dictregex pipe starting ---");

    let provider = config.word_provider();
    let words = provider.load(config.locale).unwrap_or_else(|e| {
        warn!(error = %e, "starting with an empty word list");
        Vec::new()
    });
    let mut session = SearchSession::with_words(config.locale, config.dialect, words);
    session.set_colorize(config.colorize);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        debug!(command = %input, "<-");
        let Some(reply) = dispatch(&mut session, provider.as_ref(), &input) else {
            info!("received EXIT");
            break;
        };
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }

    info!("shutting down");
    Ok(())
}

/// Runs one protocol line against the session. `None` means EXIT.
fn dispatch(session: &mut SearchSession, provider: &dyn WordListProvider, input: &str) -> Option<Value> {
    let (command, arg) = input.split_once(' ').unwrap_or((input, ""));

    let reply = match command {
        "SEARCH" => match session.search(arg) {
            Ok(_) => view(session),
            Err(e) => json!({ "error": e.to_string() }),
        },
        "COLORIZE" => {
            session.set_colorize(matches!(arg.trim(), "on" | "true" | "1"));
            view(session)
        }
        "SHOW_ALL" => {
            session.show_all();
            view(session)
        }
        "LIMIT" => {
            session.show_limited();
            view(session)
        }
        "LOAD_MORE" => {
            session.load_remaining();
            view(session)
        }
        "DIALECT" => match arg.parse() {
            Ok(dialect) => {
                session.set_dialect(dialect);
                view(session)
            }
            Err(e) => json!({ "error": e.to_string() }),
        },
        "LANG" => {
            let locale = Locale::from_code(arg);
            match provider.load(locale) {
                Ok(words) => {
                    session.replace_words(locale, words);
                    json!({
                        "locale": locale.code(),
                        "rtl": locale.is_rtl(),
                        "words": session.words().len(),
                        "results": view(session),
                    })
                }
                Err(e) => json!({ "error": e.to_string() }),
            }
        }
        "EXAMPLES" => {
            let locale = session.locale();
            let examples: Vec<Value> = EXAMPLE_QUERIES
                .iter()
                .map(|q| json!({ "pattern": q.pattern, "description": q.description(locale) }))
                .collect();
            json!({ "examples": examples })
        }
        "EXIT" => return None,
        _ => {
            warn!(command, "unknown command");
            json!({ "error": format!("unknown command: {}", command) })
        }
    };
    Some(reply)
}

fn view(session: &SearchSession) -> Value {
    match session.last_error() {
        Some(e) => json!({ "error": e.to_string() }),
        None => serde_json::to_value(session.view()).unwrap_or(Value::Null),
    }
}
