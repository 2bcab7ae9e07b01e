//! CLI for vstar: compute the emergent signalling speed v_*.
//!
//! Three entry points share the core's `bootstrap::run` contract: the normal
//! run (JSON result record on stdout), `--bench` (machine info + timing
//! JSON), and `--test` (self-test battery). Errors go to stderr, never into
//! the structured output stream.

mod commands;

use clap::Parser;
use vstar_core::Parameters;

#[derive(Parser)]
#[command(name = "vstar")]
#[command(about = "Compute the emergent signalling speed v_* of an entropic lattice")]
#[command(version = vstar_core::VERSION)]
struct Cli {
    /// Lattice site count
    #[arg(long, default_value_t = vstar_core::DEFAULT_N)]
    n: usize,

    /// Code rate k/n
    #[arg(long, default_value_t = vstar_core::DEFAULT_KAPPA)]
    kappa: f64,

    /// Entropy density
    #[arg(long, default_value_t = vstar_core::DEFAULT_CHI)]
    chi: f64,

    /// LR tail cutoff
    #[arg(long, default_value_t = vstar_core::DEFAULT_EPS)]
    eps: f64,

    /// Bootstrap sample count
    #[arg(long, default_value_t = vstar_core::DEFAULT_TRIALS)]
    trials: usize,

    /// RNG seed (signed so a negative value reaches validation, not the
    /// flag parser)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    seed: i64,

    /// Print hardware info and timing as JSON, then exit
    #[arg(long)]
    bench: bool,

    /// Run the internal self-test battery, then exit
    #[arg(long)]
    test: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.test {
        std::process::exit(commands::selftest::run());
    }

    let params = match Parameters::from_raw_seed(
        cli.n, cli.kappa, cli.chi, cli.eps, cli.trials, cli.seed,
    ) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if cli.bench {
        commands::bench::run(params);
    } else {
        commands::run::run(params);
    }
}
