use std::process::ExitCode;

use clap::Parser;
use refine::{Predicate, SymbolTable, Value, evaluate};
use tracing_subscriber::EnvFilter;

/// refine evaluates a predicate against a set of symbol bindings and exits
/// successfully when it holds.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The predicate to evaluate, for example `a > b && b >= 0`.
    predicate: String,

    /// Name used for the predicate in diagnostics.
    #[arg(short, long, default_value = "predicate")]
    name: String,

    /// Binds a symbol, as `name=expression`. The expression is evaluated on
    /// its own, so it may be any literal or constant expression.
    #[arg(short, long = "set", value_name = "NAME=EXPR", value_parser = parse_binding)]
    set: Vec<(String, String)>,

    /// Binds the placeholder `?` to the value of an expression.
    #[arg(long, value_name = "EXPR")]
    value: Option<String>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Splits a `name=expression` binding.
fn parse_binding(binding: &str) -> Result<(String, String), String> {
    binding.split_once('=')
           .map(|(name, expr)| (name.trim().to_string(), expr.to_string()))
           .filter(|(name, _)| !name.is_empty())
           .ok_or_else(|| format!("binding '{binding}' is not of the form name=expression"))
}

/// Evaluates a binding expression against an empty table.
fn bind(name: &str, expr: &str) -> Result<Value, String> {
    evaluate(name, expr, &SymbolTable::new()).map_err(|e| format!("{name}: {e}"))
}

fn run(args: &Args) -> Result<bool, String> {
    let mut symbols = SymbolTable::new();
    for (name, expr) in &args.set {
        symbols.insert(name.as_str(), bind(name, expr)?);
    }
    if let Some(expr) = &args.value {
        symbols.insert(refine::refine::PLACEHOLDER, bind(refine::refine::PLACEHOLDER, expr)?);
    }

    let predicate = Predicate::compile(&args.name, &args.predicate).map_err(|e| {
                                                                        format!("{}: {e}",
                                                                                args.name)
                                                                    })?;
    predicate.test(&symbols)
             .map_err(|e| format!("{}: could not be evaluated: {e}", args.name))
}

/// Initializes the tracing subscriber on stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `--log-level`.
fn init_tracing(log_level: &str) -> Result<(), String> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level).map_err(|e| {
                                         format!("invalid log level filter {log_level}: {e}")
                                     })?
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(true)
                             .with_writer(std::io::stderr)
                             .init();

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("{}: {:?} not met", args.name, args.predicate);
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
