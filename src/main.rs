use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use aoc2021::logging;

#[derive(Parser, Debug)]
#[command(name = "aoc2021", about = "Advent of Code 2021 solutions")]
struct Cli {
    /// Puzzle day, 1-16
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 16))]
    day: u8,

    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
    part: u8,

    /// Solve `day{DAY}test{N}.in` instead of the real input
    #[arg(short, long, value_name = "N")]
    test: Option<u32>,

    /// Input file, overriding the naming convention
    #[arg(short, long, conflicts_with = "test")]
    input: Option<PathBuf>,

    /// Directory holding the input files
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level(cli.verbose, cli.quiet));

    let day = cli.day as usize;
    let path = cli.input.unwrap_or_else(|| aoc2021::input_path(&cli.input_dir, day, cli.test));
    let time = std::time::Instant::now();
    println!("{}", aoc2021::run(day, cli.part, &path)?);
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
