//! Command line front end: check one formulation for one ground set size.
use {
    chvatal::{check, ChvatalError, Config, FormulationResult, Variant},
    clap::Parser,
    std::{path::PathBuf, process::exit},
    tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(
    name = "chvatal",
    version,
    about = "Check Chvátal's conjecture on a ground set of size N"
)]
struct Cli {
    /// inf, inf_red, opt, opt_red, inf_sat or inf_sat_red
    formulation: String,
    /// size of the ground set
    #[arg(allow_hyphen_values = true)]
    n: i64,
    /// no narration on stdout, only the result
    #[arg(short, long)]
    quiet: bool,
    /// build the formulation without solving it
    #[arg(long)]
    no_solve: bool,
    /// write the clauses (SAT formulations only) to this file
    #[arg(long, value_name = "PATH")]
    dimacs: Option<PathBuf>,
    /// print the result as JSON
    #[arg(long)]
    json: bool,
    /// log level when RUST_LOG is unset (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
    let narrate = !cli.quiet && !cli.json;
    if narrate {
        println!(
            "Checking the conjecture for n={} using formulation {}",
            cli.n, cli.formulation
        );
    }
    let result = match run(&cli) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            exit(if e.is_user_error() { 2 } else { 1 });
        }
    };
    if narrate {
        report(&result);
    }
    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("{e}");
                exit(1);
            }
        }
    } else {
        println!("{result}");
    }
}

fn run(cli: &Cli) -> Result<FormulationResult, ChvatalError> {
    let formulation = cli.formulation.parse::<Variant>()?;
    let config = Config {
        formulation,
        n: cli.n,
        should_solve: !cli.no_solve,
        dimacs_file: cli.dimacs.clone(),
        extract_counterexample: cli.json,
    };
    check(&config)
}

fn report(result: &FormulationResult) {
    if !result.is_solved() {
        println!(
            "Built {} constraints; the solver was not run",
            result.constraint_count
        );
        return;
    }
    println!("Finished in {:.3} s", result.runtime);
    if result.does_conjecture_hold {
        println!("Conjecture holds");
    } else {
        println!("Conjecture fails");
    }
}
