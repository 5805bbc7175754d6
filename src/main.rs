// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::Display, fs, path::PathBuf, time::Instant};
use anyhow::{bail, Context as _};
use clap::Parser;
use log::info;

mod grid;
mod parsing;
mod y2023;
mod y2024;
mod y2025;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part { One, Two }

impl Display for Part {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self { Part::One => "1", Part::Two => "2" })
	}
}

fn answer<T: Display>(result: Result<T, parsing::Error>) -> anyhow::Result<String> {
	Ok(result?.to_string())
}

macro_rules! puzzles {
	( $( $year:literal => [ $( $day:literal ),+ $(,)? ] ),+ $(,)? ) => { paste::paste! {
		fn has_puzzle(year: u16, day: u8) -> bool {
			matches!((year, day), $( $( ($year, $day) )|+ )|+)
		}

		/// `None` if there is no solution for that day.
		fn solve(year: u16, day: u8, part: Part, input: &str) -> Option<anyhow::Result<String>> {
			Some(match (year, day, part) {
				$( $(
					($year, $day, Part::One) => answer([<y $year>]::[<day $day>]::part1(input)),
					($year, $day, Part::Two) => answer([<y $year>]::[<day $day>]::part2(input)),
				)+ )+
				_ => return None,
			})
		}
	} }
}

puzzles! {
	2023 => [01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 21],
	2024 => [01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13],
	2025 => [01, 02, 03, 04],
}


/// Solves one day of the puzzle archive, printing one answer per line.
#[derive(Debug, Parser)]
#[command(name = "advent")]
struct Args {
	/// Edition of the event
	year: u16,

	/// Day of the puzzle
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	day: u8,

	/// Only solve this part (both if omitted)
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
	part: Option<u8>,

	/// Input file [default: inputs/<YEAR>/day<DAY>.txt]
	#[arg(short, long)]
	input: Option<PathBuf>,
}

impl Args {
	fn input_path(&self) -> PathBuf {
		self.input.clone().unwrap_or_else(||
			PathBuf::from(format!("inputs/{}/day{:02}.txt", self.year, self.day)))
	}

	fn parts(&self) -> &'static [Part] {
		match self.part {
			Some(1) => &[Part::One],
			Some(_) => &[Part::Two],
			None => &[Part::One, Part::Two],
		}
	}
}


fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();
	if !has_puzzle(args.year, args.day) {
		bail!("no solution for {}/{:02}", args.year, args.day)
	}

	let path = args.input_path();
	let input = fs::read_to_string(&path)
		.with_context(|| format!("reading input from {}", path.display()))?;

	for &part in args.parts() {
		info!("solving {}/{:02} part {part}", args.year, args.day);
		let start = Instant::now();
		let answer = solve(args.year, args.day, part, &input)
			.context("no solution")?
			.with_context(|| format!("solving {}/{:02} part {part}", args.year, args.day))?;
		info!("solved {}/{:02} part {part} in {:?}", args.year, args.day, start.elapsed());
		println!("{answer}");
	}

	Ok(())
}


#[test]
fn tests() {
	use clap::CommandFactory as _;
	Args::command().debug_assert();

	assert!(has_puzzle(2023, 21));
	assert!(!has_puzzle(2023, 20));
	assert!(solve(2024, 14, Part::One, "").is_none());
	assert_eq!(solve(2024, 1, Part::One, "1   4\n4   3\n").unwrap().unwrap(), "2");
	assert!(solve(2024, 1, Part::Two, "3 x").unwrap().is_err());

	let args = Args::parse_from(["advent", "2025", "4", "--part", "2"]);
	assert_eq!(args.input_path(), PathBuf::from("inputs/2025/day04.txt"));
	assert_eq!(args.parts(), [Part::Two]);
	assert!(Args::try_parse_from(["advent", "2025", "26"]).is_err());
}
