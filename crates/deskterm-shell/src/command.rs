use deskterm_core::config::app_config::ShellConfig;
use tracing::debug;

/// The closed set of commands the shell understands. Unknown input is a
/// designed fallback branch, not a missing-key fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCommand {
    Help,
    Clear,
    Echo,
    Date,
    Ls,
    Whoami,
    About,
    Skills,
    Contact,
}

impl BuiltinCommand {
    pub const ALL: [BuiltinCommand; 9] = [
        BuiltinCommand::Help,
        BuiltinCommand::Clear,
        BuiltinCommand::Echo,
        BuiltinCommand::Date,
        BuiltinCommand::Ls,
        BuiltinCommand::Whoami,
        BuiltinCommand::About,
        BuiltinCommand::Skills,
        BuiltinCommand::Contact,
    ];

    /// Case-insensitive lookup of a command-name token. Only the name token
    /// is ever folded; argument text is matched nowhere and keeps its case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "help" => Some(BuiltinCommand::Help),
            "clear" => Some(BuiltinCommand::Clear),
            "echo" => Some(BuiltinCommand::Echo),
            "date" => Some(BuiltinCommand::Date),
            "ls" => Some(BuiltinCommand::Ls),
            "whoami" => Some(BuiltinCommand::Whoami),
            "about" => Some(BuiltinCommand::About),
            "skills" => Some(BuiltinCommand::Skills),
            "contact" => Some(BuiltinCommand::Contact),
            _ => None,
        }
    }

    /// The name as typed, plus an argument hint where one applies. Used by
    /// `help`.
    pub fn usage(self) -> &'static str {
        match self {
            BuiltinCommand::Help => "help",
            BuiltinCommand::Clear => "clear",
            BuiltinCommand::Echo => "echo [text]",
            BuiltinCommand::Date => "date",
            BuiltinCommand::Ls => "ls",
            BuiltinCommand::Whoami => "whoami",
            BuiltinCommand::About => "about",
            BuiltinCommand::Skills => "skills",
            BuiltinCommand::Contact => "contact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BuiltinCommand::Help => "Show this help message",
            BuiltinCommand::Clear => "Clear the terminal",
            BuiltinCommand::Echo => "Print text",
            BuiltinCommand::Date => "Show current date and time",
            BuiltinCommand::Ls => "List files",
            BuiltinCommand::Whoami => "Show current user",
            BuiltinCommand::About => "About this shell",
            BuiltinCommand::Skills => "What this shell demonstrates",
            BuiltinCommand::Contact => "Contact information",
        }
    }
}

/// What dispatch asks the session to do with the transcript. `clear` is the
/// one command that replaces the buffer instead of appending; it erases the
/// echoed prompt line that triggered it, so it cannot go through the
/// uniform append path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Append(Vec<String>),
    ClearScreen,
}

/// Result of executing one submitted line: the echoed prompt lines, then
/// the outcome to apply after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Echoed `prompt + raw input` line and its blank separator. Appended
    /// before the outcome unless the outcome is a screen clear.
    pub echo: Vec<String>,
    pub outcome: DispatchOutcome,
}

/// Routes submitted lines to built-in handlers. Built once per session and
/// immutable thereafter; handlers are pure and return immediately.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    username: String,
    hostname: String,
}

impl Dispatcher {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            username: config.username.clone(),
            hostname: config.hostname.clone(),
        }
    }

    /// The decorative prefix shown before each echoed command line.
    pub fn prompt(&self) -> String {
        format!("{}@{} ~ $", self.username, self.hostname)
    }

    /// Execute one submitted line. The caller guarantees `raw` is non-empty
    /// after trimming.
    ///
    /// Tokenization and case-folding are two distinct passes: the line is
    /// split on whitespace first, then only the leading name token is
    /// folded for lookup. Handlers that echo arguments see them verbatim.
    pub fn execute(&self, raw: &str) -> Dispatch {
        let echo = vec![format!("{} {}", self.prompt(), raw), String::new()];

        let mut tokens = raw.split_whitespace();
        let Some(name) = tokens.next() else {
            // Gated upstream; an all-whitespace line produces nothing.
            return Dispatch {
                echo: Vec::new(),
                outcome: DispatchOutcome::Append(Vec::new()),
            };
        };
        let args: Vec<&str> = tokens.collect();

        let outcome = match BuiltinCommand::parse(name) {
            Some(BuiltinCommand::Clear) => DispatchOutcome::ClearScreen,
            Some(command) => {
                debug!("dispatching {:?} with {} args", command, args.len());
                let mut lines = self.run(command, &args);
                lines.push(String::new());
                DispatchOutcome::Append(lines)
            }
            None => {
                let attempted = name.to_ascii_lowercase();
                debug!("unrecognized command: {}", attempted);
                DispatchOutcome::Append(vec![
                    format!("Command not found: {}", attempted),
                    "Type \"help\" to see available commands".to_string(),
                    String::new(),
                ])
            }
        };

        Dispatch { echo, outcome }
    }

    fn run(&self, command: BuiltinCommand, args: &[&str]) -> Vec<String> {
        match command {
            BuiltinCommand::Help => self.help(),
            // Handled by the session; reaching here would append nothing.
            BuiltinCommand::Clear => Vec::new(),
            BuiltinCommand::Echo => vec![args.join(" ")],
            BuiltinCommand::Date => {
                vec![chrono::Local::now().format("%a %b %e %H:%M:%S %Y").to_string()]
            }
            BuiltinCommand::Ls => [
                "Documents", "Projects", "Downloads", "Desktop", "Music", "Pictures", "Videos",
            ]
            .map(String::from)
            .to_vec(),
            BuiltinCommand::Whoami => vec![self.username.clone()],
            BuiltinCommand::About => ABOUT.map(String::from).to_vec(),
            BuiltinCommand::Skills => SKILLS.map(String::from).to_vec(),
            BuiltinCommand::Contact => CONTACT.map(String::from).to_vec(),
        }
    }

    fn help(&self) -> Vec<String> {
        let mut lines = vec!["Available commands:".to_string()];
        for command in BuiltinCommand::ALL {
            lines.push(format!("  {} - {}", command.usage(), command.description()));
        }
        lines
    }
}

const ABOUT: [&str; 10] = [
    "┌─────────────────────────┐",
    "│ DeskTerm                │",
    "│ Simulated desktop shell │",
    "└─────────────────────────┘",
    "",
    "DeskTerm imitates the command shell of a desktop environment: a",
    "scrollback transcript, arrow-key history recall, and a fixed set of",
    "built-in commands. Nothing here touches the real file system and no",
    "processes are spawned; every command is answered from data held",
    "inside the program.",
];

const SKILLS: [&str; 18] = [
    "┌────────────┐",
    "│   Skills   │",
    "└────────────┘",
    "",
    "Shell internals:",
    "• Append-only scrollback transcript",
    "• Bidirectional command history recall",
    "• Case-insensitive command dispatch",
    "• Verbatim argument echoing",
    "",
    "Session handling:",
    "• Per-session transcript and history",
    "• Configurable prompt identity",
    "• Optional scrollback retention cap",
    "",
    "Frontend:",
    "• Raw-mode terminal rendering",
    "• Keyboard-only interaction",
];

const CONTACT: [&str; 7] = [
    "┌─────────┐",
    "│ Contact │",
    "└─────────┘",
    "",
    "Email: hello@deskterm.dev",
    "GitHub: github.com/deskterm/deskterm",
    "Issues: github.com/deskterm/deskterm/issues",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(&ShellConfig::default())
    }

    fn appended(dispatch: &Dispatch) -> &[String] {
        match &dispatch.outcome {
            DispatchOutcome::Append(lines) => lines,
            DispatchOutcome::ClearScreen => panic!("expected append outcome"),
        }
    }

    #[test]
    fn test_echo_line_always_comes_first() {
        let d = dispatcher();
        for raw in ["help", "frobnicate", "echo hi", "LS"] {
            let dispatch = d.execute(raw);
            assert_eq!(dispatch.echo.len(), 2);
            assert!(dispatch.echo[0].contains(raw), "echo missing raw input: {}", raw);
            assert!(dispatch.echo[0].starts_with("guest@deskterm ~ $"));
            assert_eq!(dispatch.echo[1], "");
        }
    }

    #[test]
    fn test_echo_joins_args_with_single_spaces_preserving_case() {
        let d = dispatcher();
        let dispatch = d.execute("echo hello   World");
        assert_eq!(appended(&dispatch), &["hello World".to_string(), String::new()]);
    }

    #[test]
    fn test_echo_without_args_degrades_to_empty_line() {
        let d = dispatcher();
        let dispatch = d.execute("echo");
        assert_eq!(appended(&dispatch), &[String::new(), String::new()]);
    }

    #[test]
    fn test_command_name_matching_is_case_insensitive() {
        let d = dispatcher();
        let lower = d.execute("help");
        let upper = d.execute("HELP");
        let mixed = d.execute("Help");
        assert_eq!(lower.outcome, upper.outcome);
        assert_eq!(lower.outcome, mixed.outcome);
    }

    #[test]
    fn test_argument_case_is_never_folded() {
        let d = dispatcher();
        let dispatch = d.execute("echo HELP");
        assert_eq!(appended(&dispatch)[0], "HELP");
    }

    #[test]
    fn test_unrecognized_command_names_the_token() {
        let d = dispatcher();
        let dispatch = d.execute("frobnicate now");
        let lines = appended(&dispatch);
        assert_eq!(lines[0], "Command not found: frobnicate");
        assert!(lines[1].contains("help"));
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_clear_requests_screen_clear_not_append() {
        let d = dispatcher();
        let dispatch = d.execute("clear");
        assert_eq!(dispatch.outcome, DispatchOutcome::ClearScreen);

        // Case-insensitive like every other command.
        assert_eq!(d.execute("CLEAR").outcome, DispatchOutcome::ClearScreen);
    }

    #[test]
    fn test_help_lists_every_command() {
        let d = dispatcher();
        let dispatch = d.execute("help");
        let text = appended(&dispatch).join("\n");
        for command in BuiltinCommand::ALL {
            assert!(
                text.contains(command.usage()),
                "help output missing {}",
                command.usage()
            );
        }
    }

    #[test]
    fn test_whoami_uses_configured_username() {
        let config = ShellConfig {
            username: "ada".to_string(),
            ..ShellConfig::default()
        };
        let d = Dispatcher::new(&config);
        let dispatch = d.execute("whoami");
        assert_eq!(appended(&dispatch)[0], "ada");
        assert!(d.prompt().starts_with("ada@"));
    }

    #[test]
    fn test_handler_output_ends_with_separator() {
        let d = dispatcher();
        for raw in ["ls", "whoami", "about", "skills", "contact", "date", "help"] {
            let dispatch = d.execute(raw);
            let lines = appended(&dispatch);
            assert_eq!(lines.last().map(String::as_str), Some(""), "no separator after {}", raw);
            // And something substantive before it.
            assert!(lines.len() >= 2, "{} produced no output", raw);
        }
    }
}
