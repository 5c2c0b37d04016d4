//! The rustyline REPL: command parsing, completion, and the main loop.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::app::App;

const COMMANDS: &[&str] = &[
    "home", "jobs", "job", "post", "edit", "mine", "tasks", "login", "signup", "logout", "whoami",
    "sort", "accept", "delete", "done", "cancel", "help", "quit",
];

/// One parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Jobs,
    Job(String),
    Post,
    Edit(String),
    Mine,
    Tasks,
    Login,
    Signup,
    Logout,
    Whoami,
    Sort,
    Accept,
    Delete(String),
    Done(String),
    Cancel(String),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. The error is a user-facing message.
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::to_string);

        let requires_id = |arg: Option<String>, usage: &str| -> Result<String, String> {
            arg.ok_or_else(|| format!("Usage: {}", usage))
        };

        match head {
            "home" => Ok(Command::Home),
            "jobs" => Ok(Command::Jobs),
            "job" => Ok(Command::Job(requires_id(arg, "job <id>")?)),
            "post" => Ok(Command::Post),
            "edit" => Ok(Command::Edit(requires_id(arg, "edit <id>")?)),
            "mine" => Ok(Command::Mine),
            "tasks" => Ok(Command::Tasks),
            "login" => Ok(Command::Login),
            "signup" => Ok(Command::Signup),
            "logout" => Ok(Command::Logout),
            "whoami" => Ok(Command::Whoami),
            "sort" => Ok(Command::Sort),
            "accept" => Ok(Command::Accept),
            "delete" => Ok(Command::Delete(requires_id(arg, "delete <id>")?)),
            "done" => Ok(Command::Done(requires_id(arg, "done <id>")?)),
            "cancel" => Ok(Command::Cancel(requires_id(arg, "cancel <id>")?)),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}'. Try 'help'.", other)),
        }
    }
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
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
        let line = &line[..pos];

        // Only the first word is a command
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let head = line.split_whitespace().next().unwrap_or_default();
        if self.commands.iter().any(|cmd| cmd == head) {
            Owned(line.bright_cyan().to_string())
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
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn print_help() {
    println!("{}", "Navigation".bold());
    println!("  home              latest jobs");
    println!("  jobs              all jobs (server-sorted)");
    println!("  job <id>          job details");
    println!("  post              post a new job");
    println!("  edit <id>         update one of your jobs");
    println!("  mine              your posted jobs");
    println!("  tasks             your accepted tasks");
    println!("{}", "Account".bold());
    println!("  login / signup / logout / whoami");
    println!("{}", "Actions".bold());
    println!("  sort              flip the jobs sort order");
    println!("  accept            accept the viewed job");
    println!("  delete <id>       delete one of your jobs");
    println!("  done <id>         mark an accepted task as done");
    println!("  cancel <id>       cancel an accepted task");
    println!("{}", "Other".bold());
    println!("  help, quit");
}

/// The main REPL loop.
pub async fn run(mut app: App) -> Result<()> {
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Gigboard ===".bright_magenta().bold());
    println!(
        "{}",
        "Browse and post freelance jobs. Type 'help' for commands, 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        let readline = rl.readline("gigboard> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match Command::parse(trimmed) {
                    Ok(Command::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(Command::Help) => print_help(),
                    Ok(command) => app.dispatch(command).await,
                    Err(message) => println!("{}", message.bright_black()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
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
