use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::app::{App, Flow, Prompt};

const COMMANDS: &[&str] = &[
    "add-arrest",
    "add-evidence",
    "add-history",
    "add-suspect",
    "delete",
    "exit",
    "filter",
    "granularity",
    "help",
    "home",
    "login",
    "logout",
    "officers",
    "open",
    "quit",
    "refresh",
    "retry",
    "search",
    "status",
    "submit",
    "theme",
    "verify",
    "whoami",
];

const PATHS: &[&str] = &[
    "/",
    "/officer/login",
    "/register-complainant",
    "/officer/dashboard",
    "/officer/dashboard/register-fir",
    "/officer/dashboard/all-fir",
    "/officer/dashboard/add-officer",
    "/officer/dashboard/add-complainant",
    "/officer/dashboard/all-complainant",
    "/officer/dashboard/add-station",
    "/officer/dashboard/all-officers",
    "/officer/dashboard/all-stations",
    "/officer/dashboard/profile",
    "/complainant/dashboard",
    "/complainant/dashboard/profile",
];

/// Completion for command names and for `open` targets.
#[derive(Clone, Default)]
struct CliHelper;

impl CliHelper {
    fn candidates(line: &str) -> (usize, Vec<&'static str>) {
        match line.split_once(' ') {
            Some(("open", target)) => (
                line.len() - target.len(),
                PATHS.iter().copied().filter(|p| p.starts_with(target)).collect(),
            ),
            Some(_) => (0, Vec::new()),
            None => (
                0,
                COMMANDS.iter().copied().filter(|c| c.starts_with(line)).collect(),
            ),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = Self::candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|m| Pair {
                display: m.to_string(),
                replacement: m.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let command = line.split_whitespace().next().unwrap_or_default();
        if line.starts_with(command) && COMMANDS.contains(&command) {
            Owned(format!("{}{}", command.bright_cyan(), &line[command.len()..]))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        let (start, matches) = Self::candidates(line);
        match matches.as_slice() {
            [only] if only.len() > line.len() - start => {
                Some(only[line.len() - start..].bright_black().to_string())
            }
            _ => None,
        }
    }
}

impl Validator for CliHelper {}

/// Field prompts share the REPL editor. Ctrl-C or Ctrl-D cancels the form.
struct EditorPrompt<'a> {
    editor: &'a mut Editor<CliHelper, DefaultHistory>,
}

impl Prompt for EditorPrompt<'_> {
    fn ask(&mut self, label: &str) -> Option<String> {
        match self.editor.readline(&format!("  {label}: ")) {
            Ok(value) => Some(value),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Form cancelled".bright_black());
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "Prompt failed");
                None
            }
        }
    }
}

pub async fn run(mut app: App) -> Result<()> {
    let mut editor: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(CliHelper));

    println!("{}", "=== CaseTrack ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for commands, 'open <path>' to navigate, or 'quit' to exit.".bright_black()
    );

    app.sync().await;

    loop {
        match editor.readline(&app.prompt_label()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);

                let mut prompt = EditorPrompt {
                    editor: &mut editor,
                };
                if app.execute(trimmed, &mut prompt).await == Flow::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_command_prefix() {
        let (start, matches) = CliHelper::candidates("add-");
        assert_eq!(start, 0);
        assert_eq!(
            matches,
            vec!["add-arrest", "add-evidence", "add-history", "add-suspect"]
        );
    }

    #[test]
    fn test_completes_open_target_after_command() {
        let (start, matches) = CliHelper::candidates("open /officer/dashboard/all-s");
        assert_eq!(start, 5);
        assert_eq!(matches, vec!["/officer/dashboard/all-stations"]);
    }

    #[test]
    fn test_no_completion_for_other_arguments() {
        let (_, matches) = CliHelper::candidates("search the");
        assert!(matches.is_empty());
    }
}
