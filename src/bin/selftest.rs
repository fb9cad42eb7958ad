use clap::Parser;
use mathtools::selftest::{random_cases, reference_cases, run, Summary};
use tracing_subscriber::{fmt, EnvFilter};

/// Run the reference cases of every function and print a pass/fail summary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of additional random cross-checks between variants
    #[arg(short, long, default_value_t = 0)]
    random_cases: usize,

    /// Random seed for the cross-checks (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Largest numeric argument drawn for the cross-checks
    #[arg(long, default_value_t = 120)]
    max_n: u64,

    /// Print one line per case instead of only failures
    #[arg(long)]
    all: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!();
    println!("testing mathtools");
    println!();

    let mut cases = reference_cases();
    if args.random_cases > 0 {
        let seed = args.seed.unwrap_or_else(rand::random);
        println!(
            "Adding {} random cross-checks (seed {}, max n {})",
            args.random_cases, seed, args.max_n
        );
        cases.extend(random_cases(args.random_cases, seed, args.max_n));
    }

    let start_time = std::time::Instant::now();
    let outcomes = run(&cases);
    let elapsed = start_time.elapsed();

    for outcome in &outcomes {
        if args.all || !outcome.passed {
            let status = if outcome.passed { "PASSED" } else { "***FAILED***" };
            println!(
                "\tTest Case: {} for {} {}",
                outcome.function, outcome.label, status
            );
        }
    }

    let summary = Summary::from_outcomes(&outcomes);
    println!();
    println!("{summary}");
    println!("Computation time: {:.3}s", elapsed.as_secs_f64());

    if !summary.all_passed() {
        std::process::exit(1);
    }
}
