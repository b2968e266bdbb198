//! Interactive configuration: units, then default city, then API key.

use anyhow::Result;
use forecast_core::{Config, ConfigKey, ConfigStore, Units, config::FALLBACK_CITY};
use std::{io::Write, path::PathBuf};
use tracing::{debug, warn};

use crate::prompter::Prompter;

const EXIT_TOKEN: &str = "exit";

/// How many characters of an existing API key are echoed back.
const KEY_HINT_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    PromptUnits,
    PromptCity,
    PromptApiKey,
    Persist,
    Done,
    Exit,
}

/// Result of a completed or abandoned setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    Saved { config: Config, path: PathBuf },
    /// All prompts were answered but writing the file failed.
    Unsaved { config: Config, error: String },
    /// The user typed `exit`; nothing was written.
    Exited,
}

enum Answer {
    Exit,
    Empty,
    Value(String),
}

fn ask<P: Prompter>(prompter: &mut P, message: &str) -> Result<Answer> {
    let Some(raw) = prompter.ask(message)? else {
        return Ok(Answer::Exit);
    };

    let input = raw.trim();
    Ok(if input.eq_ignore_ascii_case(EXIT_TOKEN) {
        Answer::Exit
    } else if input.is_empty() {
        Answer::Empty
    } else {
        Answer::Value(input.to_string())
    })
}

fn key_hint(key: &str) -> String {
    key.chars().take(KEY_HINT_LEN).collect()
}

/// Walk the user through the three prompts starting from `current`, then
/// persist the result through `store`.
pub fn run<P, W>(
    store: &ConfigStore,
    current: &Config,
    prompter: &mut P,
    out: &mut W,
) -> Result<SetupOutcome>
where
    P: Prompter,
    W: Write,
{
    writeln!(
        out,
        "Let's set up your default configuration. You can exit at any time by typing 'exit'."
    )?;

    let mut draft = current.clone();
    let mut state = State::PromptUnits;

    loop {
        debug!(?state, "setup step");

        state = match state {
            State::PromptUnits => {
                let existing = current.units.unwrap_or_default();
                match ask(prompter, &format!("Choose units (metric/imperial) [{existing}]:"))? {
                    Answer::Exit => State::Exit,
                    Answer::Empty => {
                        draft.units = Some(existing);
                        State::PromptCity
                    }
                    Answer::Value(v) => match v.parse::<Units>() {
                        Ok(units) => {
                            draft.units = Some(units);
                            State::PromptCity
                        }
                        Err(_) => {
                            writeln!(out, "Invalid input. Please enter 'metric' or 'imperial'.")?;
                            State::PromptUnits
                        }
                    },
                }
            }

            State::PromptCity => {
                let existing = current.get(ConfigKey::DefaultCity);
                let existing = if existing.is_empty() {
                    FALLBACK_CITY.to_string()
                } else {
                    existing
                };
                match ask(prompter, &format!("Enter your default city [{existing}]:"))? {
                    Answer::Exit => State::Exit,
                    Answer::Empty => {
                        draft.set(ConfigKey::DefaultCity, &existing)?;
                        State::PromptApiKey
                    }
                    Answer::Value(city) => {
                        draft.set(ConfigKey::DefaultCity, &city)?;
                        State::PromptApiKey
                    }
                }
            }

            State::PromptApiKey => {
                let existing = current.get(ConfigKey::ApiKey);
                let message = if existing.is_empty() {
                    "Enter your OpenWeatherMap API key:".to_string()
                } else {
                    format!("Enter your OpenWeatherMap API key [{}....]:", key_hint(&existing))
                };

                match ask(prompter, &message)? {
                    Answer::Exit => State::Exit,
                    Answer::Empty if !existing.is_empty() => {
                        writeln!(out, "Re-using existing API key {}....", key_hint(&existing))?;
                        draft.set(ConfigKey::ApiKey, &existing)?;
                        State::Persist
                    }
                    Answer::Empty => {
                        writeln!(out, "API key cannot be empty. Please enter a valid API key.")?;
                        State::PromptApiKey
                    }
                    Answer::Value(key) => {
                        draft.set(ConfigKey::ApiKey, &key)?;
                        State::Persist
                    }
                }
            }

            State::Persist => match store.save(&draft) {
                Ok(()) => State::Done,
                Err(e) => {
                    warn!(error = %e, "could not persist config");
                    return Ok(SetupOutcome::Unsaved {
                        config: draft,
                        error: format!("{e:#}"),
                    });
                }
            },

            State::Done => {
                return Ok(SetupOutcome::Saved {
                    config: draft,
                    path: store.path().to_path_buf(),
                });
            }

            State::Exit => return Ok(SetupOutcome::Exited),
        };
    }
}

/// Report the outcome of a setup run the way `forecast setup` does.
fn report<W: Write>(outcome: &Result<SetupOutcome>, out: &mut W) -> Result<()> {
    match outcome {
        Ok(SetupOutcome::Saved { path, .. }) => {
            writeln!(out, "Configuration saved to {}", path.display())?
        }
        Ok(SetupOutcome::Unsaved { error, .. }) => {
            writeln!(out, "Error during configuration: {error}")?
        }
        Ok(SetupOutcome::Exited) => writeln!(out, "Setup exited.")?,
        Err(e) => writeln!(out, "Error during configuration: {e:#}")?,
    }
    Ok(())
}

/// Load the stored config, treating unreadable files as empty.
fn load_reporting<W: Write>(store: &ConfigStore, out: &mut W) -> Result<Option<Config>> {
    match store.load() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config unreadable, continuing with defaults");
            writeln!(out, "Error reading config file: {e:#}")?;
            Ok(Some(Config::default()))
        }
    }
}

/// `forecast setup`.
pub fn run_command<P, W>(store: &ConfigStore, prompter: &mut P, out: &mut W) -> Result<()>
where
    P: Prompter,
    W: Write,
{
    let current = load_reporting(store, out)?.unwrap_or_default();
    let outcome = run(store, &current, prompter, out);
    report(&outcome, out)
}

/// Config for `forecast get`. Runs setup on first use.
///
/// If the answers could not be written, the lookup still uses them.
/// Returns `None` when the user exited first-run setup or prompting failed.
pub fn load_or_init<P, W>(
    store: &ConfigStore,
    prompter: &mut P,
    out: &mut W,
) -> Result<Option<Config>>
where
    P: Prompter,
    W: Write,
{
    if let Some(cfg) = load_reporting(store, out)? {
        return Ok(Some(cfg));
    }

    match run(store, &Config::default(), prompter, out) {
        Ok(SetupOutcome::Saved { config, path }) => {
            writeln!(out, "Configuration saved to {}", path.display())?;
            Ok(Some(config))
        }
        Ok(SetupOutcome::Unsaved { config, error }) => {
            writeln!(out, "Error creating default config file: {error}")?;
            Ok(Some(config))
        }
        Ok(SetupOutcome::Exited) => {
            writeln!(out, "Setup exited.")?;
            Ok(None)
        }
        Err(e) => {
            writeln!(out, "Error during configuration: {e:#}")?;
            Ok(None)
        }
    }
}
