//! Command line surface of the `abacus` binary.
//!
//! One-shot commands (`eval`, `operations`) run entirely here and never touch
//! the configuration file or the tracing subscriber; only `serve` needs them.

use std::process::ExitCode;

use abacus_calculator::{Calculator, render_outcome};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "abacus", version, about = "Four-operation arithmetic engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The selected command, `serve` when none was given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve { host: None, port: None })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve {
        /// Overrides the configured host
        #[arg(long)]
        host: Option<String>,
        /// Overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Evaluate a single calculation and print the result
    Eval {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// One of add, subtract, multiply, divide
        operation: String,
    },
    /// List the supported operation tags
    Operations,
}

/// Text printed by a one-shot command and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub success: bool,
}

impl CommandOutput {
    pub fn exit_code(&self) -> ExitCode {
        if self.success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }
}

/// What `main` has to do after dispatching a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Load configuration and run the server with these overrides.
    Serve { host: Option<String>, port: Option<u16> },
    /// The command already ran; print its output and exit.
    Done(CommandOutput),
}

pub fn dispatch(command: Command) -> Dispatch {
    match command {
        Command::Serve { host, port } => Dispatch::Serve { host, port },
        Command::Eval { a, b, operation } => Dispatch::Done(run_eval(&a, &b, &operation)),
        Command::Operations => Dispatch::Done(run_operations()),
    }
}

/// Evaluates once and renders the outcome the way the widget did.
pub fn run_eval(a: &str, b: &str, operation: &str) -> CommandOutput {
    let outcome = Calculator::new().evaluate(a, b, operation);
    CommandOutput { lines: vec![render_outcome(&outcome)], success: outcome.is_ok() }
}

pub fn run_operations() -> CommandOutput {
    let lines = Calculator::new().operations().iter().map(ToString::to_string).collect();
    CommandOutput { lines, success: true }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serial_test::serial;

    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args.iter().copied()).unwrap().into_command()
    }

    #[test]
    fn no_subcommand_means_serve() {
        assert_eq!(parse(&["abacus"]), Command::Serve { host: None, port: None });
    }

    #[test]
    fn serve_accepts_host_and_port() {
        assert_eq!(
            parse(&["abacus", "serve", "--host", "0.0.0.0", "--port", "8080"]),
            Command::Serve { host: Some("0.0.0.0".to_string()), port: Some(8080) }
        );
    }

    #[test]
    fn eval_accepts_negative_operands() {
        assert_eq!(
            parse(&["abacus", "eval", "-3", "-4.5", "add"]),
            Command::Eval { a: "-3".to_string(), b: "-4.5".to_string(), operation: "add".to_string() }
        );
    }

    #[test]
    fn eval_requires_three_arguments() {
        assert!(Cli::try_parse_from(["abacus", "eval", "3", "4"]).is_err());
    }

    #[test]
    fn eval_prints_rendered_result() {
        let output = run_eval("3", "4", "add");
        assert_eq!(output.lines, vec!["Result: 7"]);
        assert!(output.success);
        assert_eq!(format!("{:?}", output.exit_code()), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn eval_failures_print_the_message_and_fail() {
        let output = run_eval("10", "0", "divide");
        assert_eq!(output.lines, vec!["Division by zero is not allowed."]);
        assert!(!output.success);
        assert_eq!(format!("{:?}", output.exit_code()), format!("{:?}", ExitCode::FAILURE));

        assert_eq!(run_eval("abc", "4", "add").lines, vec!["Please enter valid numbers."]);
        assert_eq!(run_eval("3", "4", "modulo").lines, vec!["Invalid operation."]);
    }

    #[test]
    fn operations_lists_every_tag() {
        let output = run_operations();
        assert_eq!(output.lines, vec!["add", "subtract", "multiply", "divide"]);
        assert!(output.success);
    }

    #[test]
    fn serve_is_left_to_the_caller() {
        let dispatched = dispatch(parse(&["abacus", "serve", "--port", "9000"]));
        assert_eq!(dispatched, Dispatch::Serve { host: None, port: Some(9000) });
    }

    #[test]
    #[serial]
    fn one_shot_commands_ignore_a_malformed_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        // SAFETY: environment mutation is confined to tests marked `#[serial]`.
        unsafe {
            std::env::set_var("ABACUS_CONFIG_PATH", file.path());
        }

        let config = crate::config::AbacusConfig::load();
        let eval = dispatch(parse(&["abacus", "eval", "3", "4", "add"]));
        let operations = dispatch(parse(&["abacus", "operations"]));

        // SAFETY: restoring environment to original state (see reasoning above).
        unsafe {
            std::env::remove_var("ABACUS_CONFIG_PATH");
        }

        assert!(config.is_err());
        assert_eq!(
            eval,
            Dispatch::Done(CommandOutput { lines: vec!["Result: 7".to_string()], success: true })
        );
        assert!(matches!(operations, Dispatch::Done(output) if output.lines.len() == 4));
    }
}
