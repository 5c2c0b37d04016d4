//! Terminal implementations of the notice and confirmation seams, plus
//! the field-by-field form prompts.

use colored::Colorize;
use gigboard_core::job::JOB_CATEGORIES;
use gigboard_core::view::{ConfirmPrompt, Notice, NoticeKind, Notifier};
use std::io::{self, Write};

/// Prints transient notices as single colored lines.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => println!("{} {}", "✓".green(), notice.message.green()),
            NoticeKind::Error => println!("{} {}", "✗".red(), notice.message.red()),
            NoticeKind::Info => println!("{}", notice.message.bright_black()),
        }
    }
}

/// Interactive yes/no confirmation, defaulting to no.
pub struct TerminalConfirm;

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{} {} ", message.yellow(), "[y/N]".bright_black());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Reads one form field. Returns the trimmed input, which may be empty;
/// required-field checks happen in the views.
pub fn read_field(label: &str) -> String {
    print!("{}: ", label.bold());
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Reads one form field with a current value; empty input keeps it.
pub fn read_field_with_default(label: &str, current: &str) -> String {
    print!("{} [{}]: ", label.bold(), current.bright_black());
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return current.to_string();
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        current.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Presents the fixed category list and reads a selection by number.
/// Empty input yields an empty category (caught by the required check).
pub fn choose_category(current: Option<&str>) -> String {
    println!("{}", "Category:".bold());
    for (index, category) in JOB_CATEGORIES.iter().enumerate() {
        println!("  {}. {}", index + 1, category);
    }

    loop {
        match current {
            Some(current) => print!("Select 1-{} [{}]: ", JOB_CATEGORIES.len(), current),
            None => print!("Select 1-{}: ", JOB_CATEGORIES.len()),
        }
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return String::new();
        }
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return current.unwrap_or_default().to_string();
        }
        match trimmed.parse::<usize>() {
            Ok(n) if (1..=JOB_CATEGORIES.len()).contains(&n) => {
                return JOB_CATEGORIES[n - 1].to_string();
            }
            _ => println!("{}", "Enter a number from the list.".red()),
        }
    }
}
