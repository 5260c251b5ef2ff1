//! `rnlay` - CLI for rnlayout
//!
//! This binary provides the command-line interface for scaffolding React
//! Native project layouts and linting them against the naming conventions.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use rnlayout::cli::{Cli, Command, ConfigCommand, LintCommand, OutputFormat, RulesCommand, ScaffoldCommand};
use rnlayout::rules::builtin_rules;
use rnlayout::scaffold::MaterializeOptions;
use rnlayout::{init_logging, Config, Error, Linter, Materializer};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Load configuration; CLI flags override it per invocation
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Scaffold(cmd) => handle_scaffold(&config, &cmd),
        Command::Lint(cmd) => handle_lint(&config, &cmd),
        Command::Rules(cmd) => handle_rules(&cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Map a failure to the documented exit codes: 1 for a non-empty target,
/// 2 for a permission error, 1 for everything else.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<Error>() {
        Some(Error::PermissionDenied { .. }) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn handle_scaffold(config: &Config, cmd: &ScaffoldCommand) -> anyhow::Result<ExitCode> {
    let options = MaterializeOptions {
        merge: cmd.merge || config.scaffold.merge,
        placeholder_files: !cmd.no_placeholders && config.scaffold.placeholder_files,
    };

    let report = Materializer::new(options).materialize(&cmd.target)?;

    if report.is_noop() {
        println!("Nothing to create, tree already present at {}", report.root.display());
    } else {
        println!("Scaffolded {}", report.root.display());
        println!("  Directories created:   {}", report.created_dirs);
        println!("  Placeholders created:  {}", report.created_files);
        if report.skipped > 0 {
            println!("  Existing entries kept: {}", report.skipped);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_lint(config: &Config, cmd: &LintCommand) -> anyhow::Result<ExitCode> {
    let strict = cmd.strict || config.lint.strict;
    let report = Linter::new(config.lint.clone()).run(&cmd.root)?;

    match cmd.format {
        OutputFormat::Plain => print!("{}", report.to_plain()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if report.has_failures(strict) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn handle_rules(cmd: &RulesCommand) -> anyhow::Result<ExitCode> {
    let rules = builtin_rules();

    if cmd.json {
        let entries: Vec<_> = rules
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "name": rule.name,
                    "role": rule.role,
                    "description": rule.description,
                    "pattern": rule.pattern,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for rule in &rules {
            println!("{} ({})", rule.name, rule.role);
            println!("  {}", rule.description);
            println!("  pattern: {}", rule.pattern);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Scaffold]");
                println!("  Merge by default:   {}", config.scaffold.merge);
                println!("  Placeholder files:  {}", config.scaffold.placeholder_files);
                println!();
                println!("[Lint]");
                println!("  Strict:             {}", config.lint.strict);
                println!("  Follow symlinks:    {}", config.lint.follow_symlinks);
                println!("  Excluded dirs:      {}", config.lint.excluded_dirs.join(", "));
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => {
                    println!("Configuration error: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
