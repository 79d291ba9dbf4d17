//! Interactive REPL (Read-Eval-Print Loop) for the tracker.

use std::io::{self, Write};
use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;
use tracker_dnd::DropOutcome;
use tracker_models::{ProjectId, ProjectStatus};
use tracker_store::ProjectFilter;

use crate::app::App;
use crate::error::{CliError, Result};

/// Help information for a command.
pub struct CommandHelp {
    /// Command name (e.g., "add").
    pub name: &'static str,
    /// Command aliases (e.g., ["a"]).
    pub aliases: &'static [&'static str],
    /// Brief one-line description.
    pub brief: &'static str,
    /// Usage syntax.
    pub usage: &'static str,
}

/// Static help entries for all commands.
static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "add",
        aliases: &["a"],
        brief: "Create a project in the active bucket",
        usage: "/add <title> | <description> | <people>",
    },
    CommandHelp {
        name: "drag",
        aliases: &["d", "mv"],
        brief: "Drag a project onto a bucket",
        usage: "/drag <project-id> <active|finished>",
    },
    CommandHelp {
        name: "cancel",
        aliases: &[],
        brief: "Pick a project up and let go outside every bucket",
        usage: "/cancel <project-id>",
    },
    CommandHelp {
        name: "list",
        aliases: &["ls", "l"],
        brief: "List projects, optionally one bucket or a title match",
        usage: "/list [active|finished] [--json] [--title <text>]",
    },
    CommandHelp {
        name: "board",
        aliases: &["b"],
        brief: "Show both buckets",
        usage: "/board",
    },
    CommandHelp {
        name: "help",
        aliases: &["h", "?"],
        brief: "Show commands, or usage of one command",
        usage: "/help [command]",
    },
    CommandHelp {
        name: "quit",
        aliases: &["q", "exit"],
        brief: "Leave the REPL",
        usage: "/quit",
    },
];

/// Tab completion for slash commands.
struct CommandCompleter;

impl CommandCompleter {
    const COMMANDS: &'static [&'static str] = &[
        "/add", "/board", "/cancel", "/drag", "/help", "/list", "/quit",
    ];
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let prefix = &line[..pos];
        let matches: Vec<Pair> = Self::COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Slash commands available in the REPL and in scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Submit the input form. Fields are raw text; the form validates.
    Add {
        title: String,
        description: String,
        people: String,
    },
    /// Drag a project onto a bucket.
    Drag { id: ProjectId, to: ProjectStatus },
    /// Pick up and abort.
    Cancel(ProjectId),
    /// List projects.
    List {
        status: Option<ProjectStatus>,
        title: Option<String>,
        json: bool,
    },
    /// Show both buckets.
    Board,
    /// Show help (optionally for a specific command).
    Help(Option<String>),
    /// Quit the REPL.
    Quit,
    /// Blank line.
    Empty,
    /// Unknown or malformed command, with the reason.
    Unknown(String),
}

impl ReplCommand {
    /// Parses input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if input.is_empty() {
            return ReplCommand::Empty;
        }

        let Some(stripped) = input.strip_prefix('/') else {
            return ReplCommand::Unknown(format!(
                "not a command: '{}' (commands start with /, try /help)",
                input
            ));
        };

        let parts: Vec<&str> = stripped.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

        match cmd.as_str() {
            "add" | "a" => Self::parse_add(arg),
            "drag" | "d" | "mv" => Self::parse_drag(arg),
            "cancel" => match arg {
                Some(id) => ReplCommand::Cancel(ProjectId::from(id)),
                None => ReplCommand::Unknown("cancel requires a project id".to_string()),
            },
            "list" | "ls" | "l" => Self::parse_list(arg),
            "board" | "b" => ReplCommand::Board,
            "help" | "h" | "?" => ReplCommand::Help(arg.map(String::from)),
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(format!("unknown command: /{}", cmd)),
        }
    }

    /// `/add <title> | <description> | <people>`
    fn parse_add(arg: Option<&str>) -> Self {
        let usage = "add requires: /add <title> | <description> | <people>";
        let Some(arg) = arg else {
            return ReplCommand::Unknown(usage.to_string());
        };

        let fields: Vec<&str> = arg.split('|').map(str::trim).collect();
        match fields.as_slice() {
            [title, description, people] => ReplCommand::Add {
                title: title.to_string(),
                description: description.to_string(),
                people: people.to_string(),
            },
            _ => ReplCommand::Unknown(usage.to_string()),
        }
    }

    /// `/drag <project-id> <active|finished>`
    fn parse_drag(arg: Option<&str>) -> Self {
        let usage = "drag requires: /drag <project-id> <active|finished>";
        let parts: Vec<&str> = arg.map(|a| a.split_whitespace().collect()).unwrap_or_default();

        match parts.as_slice() {
            [id, bucket] => match bucket.parse::<ProjectStatus>() {
                Ok(to) => ReplCommand::Drag {
                    id: ProjectId::from(*id),
                    to,
                },
                Err(e) => ReplCommand::Unknown(e.to_string()),
            },
            _ => ReplCommand::Unknown(usage.to_string()),
        }
    }

    /// `/list [active|finished] [--json] [--title <text>]`
    ///
    /// `--title` takes the rest of the line.
    fn parse_list(arg: Option<&str>) -> Self {
        let mut status = None;
        let mut title = None;
        let mut json = false;

        let mut parts = arg.unwrap_or_default().split_whitespace();
        while let Some(part) = parts.next() {
            match part {
                "--json" => json = true,
                "--title" => {
                    let needle = parts.by_ref().collect::<Vec<_>>().join(" ");
                    if needle.is_empty() {
                        return ReplCommand::Unknown("--title requires text".to_string());
                    }
                    title = Some(needle);
                }
                other => match other.parse::<ProjectStatus>() {
                    Ok(s) => status = Some(s),
                    Err(e) => return ReplCommand::Unknown(e.to_string()),
                },
            }
        }

        ReplCommand::List {
            status,
            title,
            json,
        }
    }
}

/// Runs one command against the board, writing output to `out`.
///
/// Returns `Ok(true)` if the caller should stop.
pub fn handle_command(app: &mut App, cmd: ReplCommand, out: &mut impl Write) -> Result<bool> {
    match cmd {
        ReplCommand::Add {
            title,
            description,
            people,
        } => {
            let id = app.submit(title, description, people)?;
            writeln!(out, "Added project {}", id)?;
        }

        ReplCommand::Drag { id, to } => match app.drag(&id, to)? {
            DropOutcome::Delivered => {
                let status = app.store().get(&id).map(|p| p.status);
                if status == Some(to) {
                    writeln!(out, "Project {} is {}", id, to)?;
                } else {
                    writeln!(out, "Project {} is gone", id)?;
                }
            }
            DropOutcome::Rejected => writeln!(out, "The {} bucket did not accept the drop", to)?,
            DropOutcome::Cancelled => writeln!(out, "Drag cancelled")?,
        },

        ReplCommand::Cancel(id) => {
            app.cancel_drag(&id)?;
            writeln!(out, "Put {} back", id)?;
        }

        ReplCommand::List {
            status,
            title,
            json,
        } => {
            let mut filter = ProjectFilter::new();
            if let Some(s) = status {
                filter = filter.with_status(s);
            }
            if let Some(needle) = title {
                filter = filter.with_title_contains(needle);
            }
            let projects = app.store().list(&filter);

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&projects)?)?;
            } else if projects.is_empty() {
                writeln!(out, "No projects.")?;
            } else {
                for p in &projects {
                    writeln!(
                        out,
                        "{:<42}  {:<9}  {:<20}  {}",
                        p.id.as_str(),
                        p.status.as_str(),
                        truncate(&p.title, 20),
                        p.people_label()
                    )?;
                }
                writeln!(out, "\n{} project(s)", projects.len())?;
            }
        }

        ReplCommand::Board => write!(out, "{}", app.render())?,

        ReplCommand::Help(topic) => print_help(topic.as_deref(), out)?,

        ReplCommand::Quit => return Ok(true),

        ReplCommand::Empty => {}

        ReplCommand::Unknown(reason) => return Err(CliError::Usage(reason)),
    }

    Ok(false)
}

fn print_help(topic: Option<&str>, out: &mut impl Write) -> io::Result<()> {
    match topic {
        Some(topic) => {
            let topic = topic.trim_start_matches('/');
            match COMMAND_HELP
                .iter()
                .find(|h| h.name == topic || h.aliases.iter().any(|a| *a == topic))
            {
                Some(help) => {
                    writeln!(out, "/{} - {}", help.name, help.brief)?;
                    writeln!(out, "  usage: {}", help.usage)?;
                    if !help.aliases.is_empty() {
                        let aliases: Vec<String> =
                            help.aliases.iter().map(|a| format!("/{}", a)).collect();
                        writeln!(out, "  aliases: {}", aliases.join(", "))?;
                    }
                }
                None => writeln!(out, "No help for '{}'", topic)?,
            }
        }
        None => {
            writeln!(out, "Commands:")?;
            for help in COMMAND_HELP {
                writeln!(out, "  {:<44} {}", help.usage, help.brief)?;
            }
        }
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// REPL state
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    app: App,
    history_path: PathBuf,
}

impl Repl {
    /// Creates a new REPL around a fresh board.
    pub fn new(history_path: PathBuf) -> Result<Self> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CommandCompleter));

        if history_path.exists() {
            if let Err(e) = editor.load_history(&history_path) {
                debug!(error = %e, path = %history_path.display(), "Could not load history");
            }
        }

        Ok(Self {
            editor,
            app: App::new(),
            history_path,
        })
    }

    /// Runs the REPL loop.
    pub fn run(&mut self) -> Result<()> {
        println!("Tracker REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type /help for commands, /quit to exit");
        println!();

        let stdout = io::stdout();

        loop {
            match self.editor.readline("tracker> ") {
                Ok(line) => {
                    self.editor.add_history_entry(&line)?;

                    let cmd = ReplCommand::parse(&line);
                    debug!(?cmd, "Parsed command");

                    match handle_command(&mut self.app, cmd, &mut stdout.lock()) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            debug!(error = %e, path = %self.history_path.display(), "Could not save history");
        }

        println!("Goodbye!");
        Ok(())
    }
}
