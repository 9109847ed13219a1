//! Command line front-end: prints the roots of the polynomial whose
//! coefficients are given on the command line, highest power first.

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use itertools::Itertools;
use laguerre_poly::{
    num::Zero,
    root_fmt,
    roots::{laguerre_deflate, Error, DEFAULT_EPSILON, DEFAULT_MAX_ITER},
    Poly64,
};

#[derive(Parser)]
#[command(version, about = "Find all complex roots of a polynomial")]
struct Cli {
    /// Coefficients, highest power first (`1 -8 -13 140` is x^3 - 8x^2 - 13x + 140)
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    coeffs: Vec<f64>,

    /// Seed for the starting points of the root search
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Magnitude below which residuals and corrections count as zero
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Iteration budget for each root refinement
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    let _ = simple_logger::init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(c) = cli.coeffs.iter().find(|c| !c.is_finite()) {
        bail!("coefficients must be finite, got {c}");
    }
    let poly = Poly64::from_descending(&cli.coeffs);
    if poly.degree() == 0 {
        bail!("a constant has no roots to find, give at least two coefficients");
    }
    if poly.last().is_zero() {
        bail!("the leading coefficient must not be zero");
    }

    println!("Your equation is:");
    println!("{poly}");

    let mut rng = fastrand::Rng::with_seed(cli.seed);
    let roots = match laguerre_deflate(&poly, Some(cli.epsilon), Some(cli.max_iter), &mut rng) {
        Ok(roots) => roots,
        Err(Error::NoConverge(roots)) => {
            log::warn!("some roots did not converge, these are best guesses");
            roots
        }
        Err(e) => return Err(e).context("could not find the roots"),
    };

    println!("The roots of the polynomial are:");
    println!("{}", roots.iter().map(root_fmt).join(" "));
    Ok(())
}
