//! Command line front end: reads expressions and prints their three-address code.

use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use log::LevelFilter;
use tacgen::{TacGenerator, TacResult, to_postfix};

#[derive(Debug, Parser)]
#[command(name = "tacgen", version, about = "Translate infix expressions to three-address code")]
struct Args {
    /// Expressions to translate, tokens separated by spaces. Read one per
    /// line from stdin when none are given.
    expressions: Vec<String>,

    /// Print the postfix form before the instructions.
    #[arg(long)]
    postfix: bool,

    /// Keep one generator for all expressions so temporaries keep counting.
    #[arg(long)]
    shared: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn translate(generator: &mut TacGenerator, expression: &str, show_postfix: bool) -> TacResult<()> {
    if show_postfix {
        println!("postfix: {}", to_postfix(expression)?);
    }
    let before = generator.instructions().len();
    generator.generate(expression)?;
    for instruction in &generator.instructions()[before..] {
        println!("{instruction}");
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let expressions = if args.expressions.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        args.expressions
    };

    let mut generator = TacGenerator::new();
    let mut failed = false;
    for (index, expression) in expressions.iter().enumerate() {
        if !args.shared {
            generator = TacGenerator::new();
        }
        if index > 0 {
            println!();
        }
        if let Err(err) = translate(&mut generator, expression, args.postfix) {
            eprintln!("error[{}]: {err}", err.kind());
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
    Ok(())
}
