use anyhow::Context;
use env_logger::Builder;
use log::LevelFilter;
use std::io::{self, BufRead, Write};

use mandas::constants::*;
use mandas::{
    Catalog, CategoryKey, Config, Envelope, Intent, Prompt, Reply, RoundRng, Screen, SecretCard,
    Session, SessionSnapshot,
};

// Terminal front end: one command per line, the current screen printed after each one.
// Lines starting with `{` are read as JSON envelopes and answered with JSON.

fn init_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .format_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = Config::from_env();
    let catalog = match &config.words_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading words from {}", path.display()))?,
        None => Catalog::embedded().context("loading embedded words")?,
    };
    let rng = match config.seed {
        Some(seed) => RoundRng::new(seed),
        None => RoundRng::from_entropy(),
    };
    log::info!(
        "{} ready: edition {:?}, {} categories, seed {}",
        GAME_NAME,
        config.edition,
        catalog.categories().len(),
        rng.seed()
    );

    let mut session = Session::new(catalog, config.edition, rng);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", render(&session.snapshot()))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "خروج" {
            break;
        }
        if line.starts_with('{') {
            let response = handle_json(&mut session, line);
            writeln!(out, "{}", response)?;
            continue;
        }
        match parse_command(line) {
            Some(intent) => match session.apply(intent) {
                Reply::Snapshot(snapshot) => writeln!(out, "{}", render(&snapshot))?,
                Reply::Error(err) => writeln!(out, "! {}", err)?,
            },
            None => writeln!(out, "! unknown command: {}", line)?,
        }
        out.flush()?;
    }
    Ok(())
}

const SERIALIZE_FAILED: &str = r#"{"type":"Error","data":"serialization failed"}"#;

fn handle_json(session: &mut Session, line: &str) -> String {
    let reply = match serde_json::from_str::<Envelope<Intent>>(line) {
        Ok(envelope) => Envelope {
            id: envelope.id,
            message: session.apply(envelope.message),
        },
        Err(e) => {
            log::warn!("invalid intent payload: {}", e);
            Envelope {
                id: None,
                message: Reply::Error(format!("invalid intent payload: {}", e)),
            }
        }
    };
    serde_json::to_string(&reply).unwrap_or_else(|e| {
        log::error!("failed to serialize reply: {}", e);
        SERIALIZE_FAILED.to_string()
    })
}

fn parse_command(line: &str) -> Option<Intent> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let intent = match command {
        "add" => Intent::AddPlayer {
            name: rest.to_string(),
        },
        // Positions are shown starting from 1.
        "remove" => Intent::RemovePlayer {
            index: rest.parse::<usize>().ok()?.checked_sub(1)?,
        },
        "toggle" => Intent::ToggleCategory {
            key: CategoryKey::parse(rest)?,
        },
        "start" | "again" => Intent::StartRound,
        "show" => Intent::ShowSecret,
        "next" => Intent::NextPlayer,
        "reveal" => Intent::RevealImpostor,
        "reset" => Intent::RequestReset,
        "yes" => Intent::ConfirmPrompt,
        "no" => Intent::CancelPrompt,
        "ok" => Intent::DismissPrompt,
        "look" => Intent::GetSnapshot,
        _ => return None,
    };
    Some(intent)
}

// Right-aligns each line with the RLM mark so terminals that honour bidi render it RTL.
fn rtl(text: &str) -> String {
    format!("\u{200F}{}", text)
}

fn render(snapshot: &SessionSnapshot) -> String {
    let mut lines = vec![rtl(&snapshot.title)];
    match &snapshot.screen {
        Screen::Setup {
            categories,
            players,
        } => {
            lines.push(rtl(GAME_TAGLINE));
            lines.push(rtl(HEADING_CATEGORIES));
            for c in categories {
                let mark = if c.enabled { "[x]" } else { "[ ]" };
                lines.push(rtl(&format!("{} {} ({})", mark, c.name, c.key.as_str())));
            }
            lines.push(rtl(HEADING_PLAYERS));
            for (i, p) in players.iter().enumerate() {
                lines.push(rtl(&format!("{}. {}", i + 1, p)));
            }
            lines.push(rtl(&format!(
                "[add] {}  [remove] {}  [start] {}",
                BUTTON_ADD, BUTTON_REMOVE, BUTTON_START
            )));
        }
        Screen::RevealName { player } => {
            lines.push(rtl(HEADING_REVEAL));
            lines.push(rtl(&format!("{}: {}", LABEL_TURN_OF, player)));
            lines.push(rtl(NOTE_HAND_OVER));
            lines.push(rtl(&format!(
                "[show] {}  [reset] {}",
                BUTTON_SHOW_WORD, BUTTON_END_ROUND
            )));
        }
        Screen::RevealSecret {
            player,
            category,
            card,
        } => {
            lines.push(rtl(HEADING_REVEAL));
            lines.push(rtl(&format!("{}: {}", LABEL_PLAYER, player)));
            lines.push(rtl(&format!("{}: {}", LABEL_CATEGORY, category)));
            let word = match card {
                SecretCard::Word(word) => word.as_str(),
                SecretCard::Impostor => IMPOSTOR_NOTICE,
            };
            lines.push(rtl(&format!("{}: {}", LABEL_WORD, word)));
            lines.push(rtl(NOTE_MEMORIZE));
            lines.push(rtl(&format!(
                "[next] {}  [reset] {}",
                BUTTON_NEXT, BUTTON_END_ROUND
            )));
        }
        Screen::Discussion { impostor } => {
            lines.push(rtl(HEADING_DISCUSSION));
            match impostor {
                None => {
                    lines.push(rtl(NOTE_DISCUSS));
                    lines.push(rtl(&format!("[reveal] {}", BUTTON_SHOW_IMPOSTOR)));
                }
                Some(name) => {
                    lines.push(rtl(&format!("{}: {}", HEADING_IMPOSTOR, name)));
                    lines.push(rtl(&format!(
                        "[again] {}  [reset] {}",
                        BUTTON_REPLAY, BUTTON_BACK_TO_SETUP
                    )));
                }
            }
        }
    }
    if let Some(prompt) = &snapshot.prompt {
        lines.push(String::new());
        match prompt {
            Prompt::Info { title, body } => {
                lines.push(rtl(&format!("== {} ==", title)));
                lines.push(rtl(body));
                lines.push(rtl(&format!("[ok] {}", BUTTON_DISMISS)));
            }
            Prompt::Confirm {
                title,
                body,
                confirm_label,
                cancel_label,
                ..
            } => {
                lines.push(rtl(&format!("== {} ==", title)));
                lines.push(rtl(body));
                lines.push(rtl(&format!(
                    "[yes] {}  [no] {}",
                    confirm_label, cancel_label
                )));
            }
        }
    }
    lines.join("\n")
}
