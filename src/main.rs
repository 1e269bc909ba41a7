mod error;
mod grid;
mod input;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

/// Answers a part of a day's puzzle for the given input text.
type Solver = fn(u8, &str) -> Result<String>;

fn solver(day: u8) -> Option<Solver> {
    let solver: Solver = match day {
        1 => day01::solve, 2 => day02::solve, 3 => day03::solve,
        4 => day04::solve, 5 => day05::solve, 7 => day07::solve,
        8 => day08::solve, 9 => day09::solve, 10 => day10::solve,
        11 => day11::solve, 12 => day12::solve, 13 => day13::solve,
        14 => day14::solve, 15 => day15::solve,
        _ => return None
    };
    Some(solver)
}

#[derive(Parser)]
#[command(version, about = "Advent of Code 2024 solutions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one or both parts of a day
    Run {
        #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 25))]
        day: u8,
        /// Solve only this part
        #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
        part: Option<u8>,
        /// Read example input N (dayDtestN.in) instead of the full input
        #[arg(short, long, value_name = "N", num_args = 0 ..= 1, default_missing_value = "1")]
        test: Option<u32>,
        /// Directory holding the input files
        #[arg(short, long, env = "AOC_INPUTS", default_value = "inputs")]
        inputs: PathBuf,
    },
    /// Create empty input files for a day
    New {
        #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 25))]
        day: u8,
        /// Directory holding the input files
        #[arg(short, long, env = "AOC_INPUTS", default_value = "inputs")]
        inputs: PathBuf,
    },
}

fn run(day: u8, part: Option<u8>, test: Option<u32>, inputs: PathBuf) -> Result<()> {
    let solve = solver(day).with_context(|| format!("day {} is not solved", day))?;
    let path = input::path(&inputs, day, test);
    let text = input::read(&path)?;
    info!("solving day {} with {}", day, path.display());

    for part in part.map_or(1 ..= 2, |part| part ..= part) {
        let time = Instant::now();
        let answer = solve(part, &text).with_context(|| format!("day {} part {} failed", day, part))?;
        info!("part {} took {:?}", part, time.elapsed());
        println!("Part {}: {}", part, answer);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Run {day, part, test, inputs} => run(day, part, test, inputs),
        Command::New {day, inputs} => {
            let created = input::scaffold(&inputs, day)?;
            if created.is_empty() {
                println!("Inputs for day {} already exist in {}.", day, inputs.display());
            } else {
                println!("Created inputs for day {} in {}.", day, inputs.display());
            }
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_arguments() {
        let cli = Cli::try_parse_from(["aoc2024", "run", "7", "2", "--test"]).unwrap();
        let Command::Run {day, part, test, ..} = cli.command else {panic!("expected run")};
        assert_eq!((day, part, test), (7, Some(2), Some(1)));

        let cli = Cli::try_parse_from(["aoc2024", "run", "12", "-t", "3", "-i", "puzzles"]).unwrap();
        let Command::Run {day, part, test, inputs} = cli.command else {panic!("expected run")};
        assert_eq!((day, part, test), (12, None, Some(3)));
        assert_eq!(inputs, PathBuf::from("puzzles"));

        assert!(Cli::try_parse_from(["aoc2024", "run", "26"]).is_err());
        assert!(Cli::try_parse_from(["aoc2024", "run", "1", "3"]).is_err());
    }

    #[test]
    fn every_listed_day_has_a_solver() {
        let solved = (1 ..= 25).filter(|&day| solver(day).is_some()).collect::<Vec<_>>();
        assert_eq!(solved, vec![1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn runs_from_input_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("day1test1.in"), "3 4\n4 3\n").unwrap();
        run(1, None, Some(1), dir.path().to_owned()).unwrap();
        assert!(run(1, None, None, dir.path().to_owned()).is_err());
        assert!(run(6, None, Some(1), dir.path().to_owned()).is_err());
    }
}
