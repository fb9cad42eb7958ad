use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use mathtools::{
    combinatorics::{combinations_fn, permutations},
    factorial::{factorial, factorial_countdown, factorial_fold, factorial_recursive},
    fibonacci::{fibonacci, fibonacci_recursive, fibonacci_sequence},
    parser::{parse_items, parse_row},
    pascal::{next_row, next_row_zipped, triangle, triangle_unfolded},
    permute::{permute_expr, permute_lazy, permute_recursive},
    powerset::{power_list, power_list_expr},
};
use std::fmt::Debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Evaluate factorials, Fibonacci numbers, Pascal rows and combinatorics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// n factorial
    Fact {
        n: u64,
        #[arg(long, value_enum, default_value_t = FactVariant::Loop)]
        variant: FactVariant,
    },
    /// The nth Fibonacci number
    Fib {
        n: u64,
        #[arg(long, value_enum, default_value_t = FibVariant::Iterative)]
        variant: FibVariant,
    },
    /// Fibonacci numbers fib(0) through fib(n), one per line
    Fibs {
        n: u64,
        /// Stop after printing this many values
        #[arg(short, long)]
        take: Option<usize>,
    },
    /// The Pascal row following the given one, e.g. `next-row 1 3 3 1`
    NextRow {
        #[arg(required = true)]
        row: Vec<String>,
        #[arg(long, value_enum, default_value_t = Style::Loop)]
        variant: Style,
    },
    /// Rows 0 through n of Pascal's triangle
    Triangle {
        n: usize,
        #[arg(long, value_enum, default_value_t = Style::Loop)]
        variant: Style,
    },
    /// Number of ways to choose k items from n
    Choose {
        n: u64,
        k: u64,
        /// Largest n the combinations function accepts
        #[arg(long, default_value_t = 1000)]
        max_n: u64,
    },
    /// Number of ways to order k items chosen from n
    Perm { n: u64, k: u64 },
    /// Every subset of the given items, in mask order
    Powerset {
        items: Vec<String>,
        #[arg(long, value_enum, default_value_t = Style::Loop)]
        variant: Style,
    },
    /// Every ordering of the given items
    Permute {
        items: Vec<String>,
        #[arg(long, value_enum, default_value_t = PermuteVariant::Recursive)]
        variant: PermuteVariant,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FactVariant {
    Loop,
    Countdown,
    Recursive,
    Fold,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FibVariant {
    Iterative,
    Recursive,
}

/// Imperative loop or single-expression form
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    Loop,
    Expr,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PermuteVariant {
    Recursive,
    Lazy,
    Expr,
}

fn print_all<T: Debug>(values: impl IntoIterator<Item = Vec<T>>) {
    for value in values {
        println!("({})", value.iter().map(|v| format!("{v:?}")).join(", "));
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Fact { n, variant } => {
            let value = match variant {
                FactVariant::Loop => factorial(n),
                FactVariant::Countdown => factorial_countdown(n),
                FactVariant::Recursive => factorial_recursive(n),
                FactVariant::Fold => factorial_fold(n),
            };
            println!("{value}");
        }
        Command::Fib { n, variant } => {
            let value = match variant {
                FibVariant::Iterative => fibonacci(n),
                FibVariant::Recursive => fibonacci_recursive(n),
            };
            println!("{value}");
        }
        Command::Fibs { n, take } => {
            for value in fibonacci_sequence(n).take(take.unwrap_or(usize::MAX)) {
                println!("{value}");
            }
        }
        Command::NextRow { row, variant } => {
            let row = parse_row(&row.join(" "))?;
            let next = match variant {
                Style::Loop => next_row(&row)?,
                Style::Expr => next_row_zipped(&row)?,
            };
            println!("{}", next.iter().join(" "));
        }
        Command::Triangle { n, variant } => {
            let table = match variant {
                Style::Loop => triangle(n),
                Style::Expr => triangle_unfolded(n),
            };
            for row in table {
                println!("{}", row.iter().join(" "));
            }
        }
        Command::Choose { n, k, max_n } => {
            let c = combinations_fn(max_n);
            println!("{}", c(n, k)?);
        }
        Command::Perm { n, k } => {
            println!("{}", permutations(n, k)?);
        }
        Command::Powerset { items, variant } => {
            let joined = items.join(" ");
            let items = parse_items(&joined)?;
            let subsets = match variant {
                Style::Loop => power_list(&items)?,
                Style::Expr => power_list_expr(&items)?,
            };
            print_all(subsets);
        }
        Command::Permute { items, variant } => {
            let joined = items.join(" ");
            let items = parse_items(&joined)?;
            match variant {
                PermuteVariant::Recursive => print_all(permute_recursive(&items)),
                PermuteVariant::Lazy => print_all(permute_lazy(&items)),
                PermuteVariant::Expr => print_all(permute_expr(&items)),
            }
        }
    }
    Ok(())
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

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
