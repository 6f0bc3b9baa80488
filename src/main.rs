use std::process::ExitCode;

use celform::{Environments, Expression, MapEnvironment, ParseOptions, Value, base, interpreter::environment::json_scalar};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// celform evaluates spreadsheet-style formulas and prints each result.
///
/// Every formula is evaluated against the base function library plus any
/// `--var` bindings. Text that does not start with `=` is a plain string.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a name for every formula, e.g. `--var total=12` or
    /// `--var name=Ada`. Values that parse as JSON numbers, booleans or
    /// strings take that kind; anything else is a string.
    #[arg(short = 'D', long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    vars: Vec<(String, Value)>,

    /// Maximum nesting depth accepted by the parser.
    #[arg(long, default_value_t = ParseOptions::default().max_depth)]
    max_depth: usize,

    /// Prints the canonical encoding of each formula instead of evaluating it.
    #[arg(short, long)]
    canonical: bool,

    /// Logs parser and evaluator events to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The formulas to evaluate.
    #[arg(required = true)]
    formulas: Vec<String>,
}

fn parse_var(arg: &str) -> Result<(String, Value), String> {
    let (name, raw) = arg.split_once('=')
                         .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))?;

    let value = serde_json::from_str(raw).ok()
                                         .and_then(|json| json_scalar(&json))
                                         .unwrap_or_else(|| Value::from(raw));
    Ok((name.to_string(), value))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "celform=debug" } else { "celform=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("string: {s}"),
        Value::Number(_) => format!("number: {value}"),
        Value::Bool(b) => format!("bool: {b}"),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = ParseOptions { max_depth: args.max_depth };
    let environment = Environments::new().with(args.vars.into_iter().collect::<MapEnvironment>())
                                         .with(base());

    let mut failed = false;
    for formula in &args.formulas {
        let result = Expression::parse_with(formula, &options).map_err(celform::Error::from)
                                                              .and_then(|expression| {
                                                                  if args.canonical {
                                                                      return Ok(expression.encode());
                                                                  }
                                                                  expression.evaluate(&environment)
                                                                            .map(|value| describe(&value))
                                                                            .map_err(celform::Error::from)
                                                              });

        match result {
            Ok(line) => println!("{line}"),
            Err(e) => {
                failed = true;
                println!("error: {e}");
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
