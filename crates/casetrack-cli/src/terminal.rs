//! Terminal implementations of the UI seams.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use colored::Colorize;

use casetrack_core::ui::{Confirm, Notification, NotificationLevel, Notifier};

/// Prints notifications as coloured one-liners.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => println!("{}", format!("✔ {}", notification.message).green()),
            NotificationLevel::Info => println!("{}", format!("ℹ {}", notification.message).bright_blue()),
            NotificationLevel::Error => eprintln!("{}", format!("✘ {}", notification.message).red()),
        }
    }
}

/// Asks y/N on stdin.
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        print!("{} {} ", prompt.yellow(), "[y/N]".bright_black());
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}
