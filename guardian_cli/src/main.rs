//! # Phoenix Guardian CLI
//!
//! Line-oriented front end over the same [`Session`] the GUI drives. Useful
//! for scripted demos and for poking at the core without a window.
//!
//! Notifications are printed as `[level] message` once, right after the
//! command that raised them.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use clap::{ArgAction, Parser};

use guardian_core::contacts::{Contact, ContactField};
use guardian_core::home::{self, Helpline};
use guardian_core::logging::{init_logging, Verbosity};
use guardian_core::routes::RouteKind;
use guardian_core::safety::SafetySetting;
use guardian_core::sos::SosPhase;
use guardian_core::{GuardianConfig, GuardianError, GuardianResult, Session};

/// Granularity of the real-time SOS countdown loop
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "guardian_cli", version, about = "Phoenix Safety Guardian terminal front end")]
struct Cli {
    /// Config file to load instead of the platform default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Start with an empty contact list
    #[arg(long)]
    no_samples: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Contacts,
    Add,
    Edit(usize),
    Remove(usize),
    Sos,
    Route,
    Navigate(RouteKind),
    Settings,
    Toggle(SafetySetting),
    Shutdown,
    Call(Helpline),
    State,
    Quit,
}

impl Command {
    fn parse(line: &str) -> GuardianResult<Command> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();

        let command = match name.as_str() {
            "help" | "?" => Command::Help,
            "contacts" | "ls" => Command::Contacts,
            "add" => Command::Add,
            "edit" => Command::Edit(parse_index(arg)?),
            "remove" | "rm" => Command::Remove(parse_index(arg)?),
            "sos" => Command::Sos,
            "route" => Command::Route,
            "navigate" => {
                let kind = match arg.map(str::to_ascii_lowercase).as_deref() {
                    Some("safest") | None => RouteKind::Safest,
                    Some("fastest") => RouteKind::Fastest,
                    Some("balanced") => RouteKind::Balanced,
                    Some(other) => {
                        return Err(GuardianError::invalid_input(
                            "route",
                            other,
                            "expected safest, fastest or balanced",
                        ))
                    }
                };
                Command::Navigate(kind)
            }
            "settings" => Command::Settings,
            "toggle" => {
                let keys: Vec<&str> = SafetySetting::ALL.iter().map(|s| s.key()).collect();
                let expected = format!("expected one of {}", keys.join(", "));
                let key = arg.ok_or_else(|| GuardianError::invalid_input("setting", "", expected.clone()))?;
                let setting = SafetySetting::from_key(key)
                    .ok_or_else(|| GuardianError::invalid_input("setting", key, expected))?;
                Command::Toggle(setting)
            }
            "shutdown" => Command::Shutdown,
            "call" => {
                let number = arg.unwrap_or_default();
                let helpline = Helpline::ALL
                    .iter()
                    .copied()
                    .find(|h| h.number() == number)
                    .ok_or_else(|| GuardianError::invalid_input("helpline", number, "expected 1090 or 112"))?;
                Command::Call(helpline)
            }
            "state" => Command::State,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(GuardianError::invalid_input("command", other, "unknown command, try 'help'"))
            }
        };
        Ok(command)
    }
}

/// Contacts are numbered from 1 on screen
fn parse_index(arg: Option<&str>) -> GuardianResult<usize> {
    let raw = arg.unwrap_or_default();
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(GuardianError::invalid_input("contact", raw, "expected a contact number from 1")),
    }
}

fn nth_contact(session: &Session, index: usize) -> GuardianResult<&Contact> {
    session
        .contacts
        .nth(index)
        .ok_or_else(|| GuardianError::invalid_input("contact", (index + 1).to_string(), "no such contact"))
}

/// What a line typed during the SOS countdown means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SosReply {
    Cancel,
    SendNow,
    Unrecognized,
}

impl SosReply {
    fn from_line(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "cancel" => SosReply::Cancel,
            "send" => SosReply::SendNow,
            _ => SosReply::Unrecognized,
        }
    }
}

/// Stdin read on a background thread so the countdown can poll for input
struct Input {
    lines: Receiver<String>,
}

impl Input {
    fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Input { lines: rx }
    }

    /// Print a prompt and wait for a line. `None` on end of input.
    fn prompt(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        self.lines.recv().ok().map(|l| l.trim().to_string())
    }
}

fn print_help() {
    println!("Commands:");
    println!("  contacts            list emergency contacts");
    println!("  add                 add a contact");
    println!("  edit <n>            edit contact n");
    println!("  remove <n>          remove contact n");
    println!("  sos                 start the SOS countdown (Enter cancels, 'send' sends now)");
    println!("  route               find a safe route");
    println!("  navigate [kind]     start navigation (safest, fastest, balanced)");
    println!("  settings            show safety settings");
    println!("  toggle <setting>    flip a safety setting");
    println!("  shutdown            configure fake shutdown");
    println!("  call <number>       call a helpline (1090, 112)");
    println!("  state               dump the session as JSON");
    println!("  quit                exit");
}

/// Print every pending notification once, oldest first, then drop it
fn flush_toasts(session: &mut Session) {
    while !session.toasts.is_empty() {
        let batch: Vec<_> = session
            .toasts
            .visible()
            .into_iter()
            .rev()
            .map(|n| (n.id, n.to_string()))
            .collect();
        for (id, line) in batch {
            println!("{}", line);
            session.toasts.dismiss(id);
        }
    }
}

fn print_contacts(session: &Session) {
    if session.contacts.is_empty() {
        println!("No emergency contacts yet. Use 'add'.");
        return;
    }
    for (i, contact) in session.contacts.iter().enumerate() {
        if contact.relation.is_empty() {
            println!("  {}. {}  {}", i + 1, contact.name, contact.phone);
        } else {
            println!("  {}. {}  {}  ({})", i + 1, contact.name, contact.phone, contact.relation);
        }
    }
}

/// Fill the open editor field by field. Empty input keeps the current value.
fn fill_editor(session: &mut Session, input: &Input) -> bool {
    for &field in ContactField::ALL {
        let current = session.editor.draft().field(field).to_string();
        let prompt = if current.is_empty() {
            format!("{} ({}): ", field.label(), field.placeholder())
        } else {
            format!("{} [{}]: ", field.label(), current)
        };
        let Some(value) = input.prompt(&prompt) else {
            session.editor.close();
            return false;
        };
        if !value.is_empty() {
            session.editor.set_field(field, value);
        }
    }
    true
}

fn add_contact(session: &mut Session, input: &Input) {
    session.editor.open_add();
    if fill_editor(session, input) && !session.save_contact() {
        session.editor.close();
    }
}

fn edit_contact(session: &mut Session, input: &Input, index: usize) -> GuardianResult<()> {
    let id = nth_contact(session, index)?.id;
    session.edit_contact(id)?;
    if fill_editor(session, input) && !session.save_contact() {
        session.editor.close();
    }
    Ok(())
}

/// Run the countdown against the wall clock, polling stdin between steps
fn run_sos(session: &mut Session, input: &Input) {
    if !session.press_sos() {
        println!("SOS countdown already running");
        return;
    }
    println!("Emergency SOS. Press Enter to cancel or type 'send' to alert now.");

    let mut last = Instant::now();
    let mut shown = None;
    while let SosPhase::Counting { remaining } = session.sos.phase() {
        if shown != Some(remaining) {
            if let Some(message) = session.sos.dialog_message() {
                println!("  {}", message);
            }
            shown = Some(remaining);
        }

        match input.lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match SosReply::from_line(&line) {
                SosReply::Cancel => session.cancel_sos(),
                SosReply::SendNow => session.send_sos_now(),
                SosReply::Unrecognized => println!("  (press Enter to cancel or type 'send')"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // No more input: let the countdown run out
                thread::sleep(POLL_INTERVAL);
            }
        }

        let now = Instant::now();
        session.advance(now.duration_since(last));
        last = now;
    }

    if let Some(alert) = session.sos.history().last() {
        tracing::debug!(sequence = alert.sequence, "sos loop finished");
    }
}

fn find_route(session: &mut Session, input: &Input) {
    let Some(origin) = input.prompt("From: ") else { return };
    let Some(destination) = input.prompt("To: ") else { return };
    session.planner.origin = origin;
    session.planner.destination = destination;

    if !session.find_route() {
        return;
    }
    for &kind in RouteKind::ALL {
        let option = kind.option();
        println!(
            "  {:<15} {:>3} min  {:<12} {}",
            kind.tab_label(),
            option.duration_min,
            option.rating.label(),
            option.advisory
        );
    }
    for waypoint in session.planner.waypoints(session.planner.selected()) {
        println!("    - {}  {}", waypoint.name, waypoint.note);
    }
}

fn print_settings(session: &Session) {
    for &setting in SafetySetting::ALL {
        let state = if session.safety.get(setting) { "on" } else { "off" };
        println!("  {:<12} {:<3}  {}", setting.key(), state, setting.label());
    }
}

/// Apply one command. Returns `false` when the loop should stop.
fn execute(session: &mut Session, input: &Input, command: Command) -> GuardianResult<bool> {
    tracing::debug!(?command, "executing");
    match command {
        Command::Help => print_help(),
        Command::Contacts => print_contacts(session),
        Command::Add => add_contact(session, input),
        Command::Edit(index) => edit_contact(session, input, index)?,
        Command::Remove(index) => {
            let id = nth_contact(session, index)?.id;
            session.remove_contact(id);
        }
        Command::Sos => run_sos(session, input),
        Command::Route => find_route(session, input),
        Command::Navigate(kind) => {
            if !session.planner.is_found() {
                return Err(GuardianError::invalid_input(
                    "route",
                    kind.tab_label(),
                    "find a route first with 'route'",
                ));
            }
            session.planner.select(kind);
            session.navigate_route(kind);
        }
        Command::Settings => print_settings(session),
        Command::Toggle(setting) => {
            session.toggle_setting(setting);
            let state = if session.safety.get(setting) { "on" } else { "off" };
            println!("{} is now {}", setting.label(), state);
        }
        Command::Shutdown => session.configure_fake_shutdown(),
        Command::Call(helpline) => session.dial(helpline),
        Command::State => {
            let json = serde_json::to_string_pretty(session).map_err(|e| GuardianError::Internal {
                message: format!("cannot encode session: {}", e),
            })?;
            println!("{}", json);
        }
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// A `--config` path must load. The platform default falls back to
/// built-in defaults with a warning.
fn load_config(cli: &Cli) -> GuardianResult<GuardianConfig> {
    let mut config = match &cli.config {
        Some(path) => GuardianConfig::load_from(Some(path))?,
        None => GuardianConfig::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            eprintln!("warning: {} (using defaults)", e);
            GuardianConfig::default()
        }),
    };
    if cli.no_samples {
        config.contacts.load_samples = false;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_logging(Verbosity::from_occurrences(cli.verbose));

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    let mut session = Session::new(&config);
    let input = Input::spawn();

    println!("{}", home::TITLE);
    println!("{}", home::TAGLINE);
    println!("Type 'help' for commands.");
    println!();

    while let Some(line) = input.prompt("guardian> ") {
        if line.is_empty() {
            continue;
        }
        match Command::parse(&line).and_then(|cmd| execute(&mut session, &input, cmd)) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_recoverable() => eprintln!("error: {}", err),
            Err(err) => {
                tracing::error!(code = err.error_code(), error = %err, "command failed");
                eprintln!("error: {}", err);
            }
        }
        flush_toasts(&mut session);
    }

    tracing::info!(alerts = session.sos.history().len(), "session ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("  SOS "), Ok(Command::Sos));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_contact_numbers_are_one_based() {
        assert_eq!(Command::parse("edit 1"), Ok(Command::Edit(0)));
        assert_eq!(Command::parse("rm 3"), Ok(Command::Remove(2)));
        assert!(Command::parse("edit 0").is_err());
        assert!(Command::parse("remove").is_err());
        assert!(Command::parse("edit two").is_err());
    }

    #[test]
    fn test_parse_toggle_uses_setting_keys() {
        assert_eq!(
            Command::parse("toggle stealth"),
            Ok(Command::Toggle(SafetySetting::from_key("stealth").unwrap()))
        );
        let err = Command::parse("toggle wifi").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("stealth"));
        assert!(Command::parse("toggle").is_err());
    }

    #[test]
    fn test_parse_navigate_and_call() {
        assert_eq!(Command::parse("navigate"), Ok(Command::Navigate(RouteKind::Safest)));
        assert_eq!(Command::parse("navigate fastest"), Ok(Command::Navigate(RouteKind::Fastest)));
        assert_eq!(Command::parse("call 112"), Ok(Command::Call(Helpline::Emergency)));
        assert!(Command::parse("call 911").is_err());
        assert!(Command::parse("call").is_err());
        assert!(Command::parse("navigate scenic").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(Command::parse("fly").unwrap_err().to_string().contains("unknown command"));
    }

    #[test]
    fn test_missing_contact_number_is_invalid_input() {
        let session = Session::default();
        assert!(nth_contact(&session, 2).is_ok());
        let err = nth_contact(&session, 3).unwrap_err();
        assert!(matches!(err, GuardianError::InvalidInput { .. }));
    }

    #[test]
    fn test_sos_reply_only_cancels_on_enter() {
        assert_eq!(SosReply::from_line(""), SosReply::Cancel);
        assert_eq!(SosReply::from_line("  "), SosReply::Cancel);
        assert_eq!(SosReply::from_line("cancel"), SosReply::Cancel);
        assert_eq!(SosReply::from_line("SEND"), SosReply::SendNow);
        assert_eq!(SosReply::from_line("sned"), SosReply::Unrecognized);
    }

    #[test]
    fn test_flush_toasts_prints_each_once() {
        let mut session = Session::default();
        session.configure_fake_shutdown();
        session.dial(Helpline::Women);
        flush_toasts(&mut session);
        assert!(session.toasts.is_empty());
    }

    #[test]
    fn test_cli_flags_with_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("cli.toml", "[sos]\ncountdown_secs = 3\n")?;
            let cli = Cli::parse_from(["guardian_cli", "-vv", "--no-samples", "-c", "cli.toml"]);
            assert_eq!(cli.verbose, 2);
            assert!(cli.no_samples);

            let config = load_config(&cli).map_err(|e| e.to_string())?;
            assert!(!config.contacts.load_samples);
            assert_eq!(config.sos.countdown_secs, 3);
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_flag_is_an_error() {
        Jail::expect_with(|_jail| {
            let cli = Cli::parse_from(["guardian_cli", "--config", "missing.toml"]);
            let err = load_config(&cli).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONFIG");
            assert!(!err.is_recoverable());
            Ok(())
        });
    }
}
