// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use clap::Parser;


/// Declares the day modules and maps day & part numbers to their solving
/// functions.
macro_rules! days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	fn solve(day: u8, part: u8, input: &str) -> Result<String, Error> {
		match (day, part) {
			$(
				($day, 1) => Ok([<day $day>]::part1(input).to_string()),
				($day, 2) => Ok([<day $day>]::part2(input).to_string()),
			)+
			_ => Err(Error::UnsolvedDay(day)),
		}
	}
} } }

days!(02, 04, 05, 06, 07, 08, 09, 13, 14, 15, 16, 17, 18, 20, 23, 24);


#[derive(Parser)]
#[command(version, about = "Advent of Code 2024 solutions")]
struct Args {
	/// The day of the challenge to run.
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
	day: u8,

	/// The part of the challenge to run.
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2),
		required_unless_present = "setup")]
	part: Option<u8>,

	/// Solve the day’s test fixture instead of the full puzzle input.
	#[arg(short, long)]
	test: bool,

	/// Create template files for the day instead of running it.
	#[arg(long, conflicts_with_all = ["part", "test"])]
	setup: bool,
}


#[derive(Debug)]
enum Error {
	UnsolvedDay(u8),
	Input { path: String, source: std::io::Error },
	DayExists(u8),
	Scaffold { path: String, source: std::io::Error },
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Error::*;
		match self {
			UnsolvedDay(day) => write!(f, "no solution for day {day}"),
			Input { path, source } => write!(f, "could not read input file {path} ({source})"),
			DayExists(day) => write!(f, "day {day} already exists"),
			Scaffold { path, source } => write!(f, "could not create {path} ({source})"),
		}
	}
}

impl std::error::Error for Error {}


fn input_path(day: u8, test: bool) -> String {
	format!("inputs/day_{day}_input{}.txt", if test { "_test" } else { "" })
}


const DAY_TEMPLATE: &str = r#"// Copyright (c) 2022 Bastiaan Marinus van de Weerd


pub(crate) fn part1(_input: &str) -> u64 {
	0
}


pub(crate) fn part2(_input: &str) -> u64 {
	0
}


#[test]
fn tests() {
}
"#;

fn setup_day(day: u8) -> Result<(), Error> {
	use std::{fs, path::Path};

	fn scaffold(path: String, contents: &str) -> Result<(), Error> {
		fs::write(&path, contents).map_err(|source| Error::Scaffold { path, source })
	}

	let module_path = format!("src/day{day:02}.rs");
	if Path::new(&module_path).exists() { return Err(Error::DayExists(day)) }

	scaffold(module_path, DAY_TEMPLATE)?;
	fs::create_dir_all("inputs")
		.map_err(|source| Error::Scaffold { path: "inputs".to_owned(), source })?;
	scaffold(input_path(day, false), "")?;
	scaffold(input_path(day, true), "")?;

	println!("Day {day} created; register day{day:02} in the `days!` list in src/main.rs.");
	Ok(())
}


fn run(args: Args) -> Result<(), Error> {
	if args.setup { return setup_day(args.day) }

	// Clap guarantees the part is present when not scaffolding
	let part = args.part.unwrap();
	let path = input_path(args.day, args.test);
	log::debug!("reading {path}");
	let input = std::fs::read_to_string(&path)
		.map_err(|source| Error::Input { path, source })?;

	let answer = solve(args.day, part, &input)?;
	println!("{answer}");
	Ok(())
}

fn main() {
	env_logger::init();

	if let Err(err) = run(Args::parse()) {
		eprintln!("Error: {err}");
		std::process::exit(1);
	}
}
