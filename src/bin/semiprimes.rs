use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use num_semiprime::{
    find_semiprimes_in_range, generate_semiprime, is_prime, report, smallest_factor,
    RandSemiprime, SearchConfig, Semiprime,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "semiprimes")]
#[command(about = "Semiprime test numbers for integer factoring", long_about = None)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[arg(
        long,
        global = true,
        default_value = "1048576",
        help = "Maximum candidates tested by one prime search (0 for no limit)"
    )]
    max_steps: usize,
    #[arg(
        long,
        global = true,
        default_value = "1024",
        help = "Maximum corrections of the second factor (0 for no limit)"
    )]
    max_adjustments: usize,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print the curated table of test numbers (default)")]
    Report,
    #[command(about = "Build one semiprime for each requested digit count")]
    Generate {
        #[arg(required = true, help = "Decimal digit counts of the products")]
        digits: Vec<usize>,
    },
    #[command(about = "Find semiprimes inside a range with the digit count of its lower end")]
    Range {
        #[arg(help = "Lower end of the range (inclusive)")]
        min: BigUint,
        #[arg(help = "Upper end of the range (inclusive)")]
        max: BigUint,
        #[arg(short, long, default_value = "3", help = "Number of semiprimes to find")]
        count: usize,
    },
    #[command(about = "Draw random semiprimes with the given digit count")]
    Random {
        #[arg(help = "Decimal digit count of the products")]
        digits: usize,
        #[arg(short, long, default_value = "1", help = "Number of semiprimes to draw")]
        count: usize,
    },
    #[command(about = "Test whether a number is prime")]
    Check {
        #[arg(help = "The number to test")]
        number: BigUint,
    },
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("num_semiprime=debug,semiprimes=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("num_semiprime=info,semiprimes=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn print_entry<W: Write>(out: &mut W, entry: &Semiprime<BigUint>) -> io::Result<()> {
    writeln!(out, "  {}", entry)
}

fn run(command: Commands, config: SearchConfig) -> num_semiprime::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Report => report::write_report(&mut out, &report::test_numbers())?,
        Commands::Generate { digits } => {
            for d in digits {
                let s: Semiprime<BigUint> = generate_semiprime(d, Some(config))?;
                writeln!(out, "{} DIGITS:", d)?;
                print_entry(&mut out, &s)?;
            }
        }
        Commands::Range { min, max, count } => {
            let found = find_semiprimes_in_range(&min, &max, count, Some(config))?;
            if found.len() < count {
                info!(requested = count, found = found.len(), "range exhausted early");
            }
            for s in &found {
                print_entry(&mut out, s)?;
            }
        }
        Commands::Random { digits, count } => {
            let mut rng = rand::thread_rng();
            for _ in 0..count {
                let s: Semiprime<BigUint> = rng.gen_semiprime(digits, Some(config))?;
                print_entry(&mut out, &s)?;
            }
        }
        Commands::Check { number } => {
            if is_prime(&number) {
                writeln!(out, "{} is prime", number)?;
            } else {
                match smallest_factor(&number) {
                    Some(f) => writeln!(out, "{} is composite, divisible by {}", number, f)?,
                    None => writeln!(out, "{} is neither prime nor composite", number)?,
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = SearchConfig::from_limits(cli.max_steps, cli.max_adjustments);
    match run(cli.command.unwrap_or(Commands::Report), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
