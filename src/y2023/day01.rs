// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{lines_with, Error, ErrorKind};


const SPELLED: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

fn digit_at(line: &str, idx: usize, spelled: bool) -> Option<u32> {
	let rest = &line[idx..];
	let first = rest.chars().next()?;
	if let Some(d) = first.to_digit(10) { return Some(d) }
	if !spelled { return None }
	// Spelled digits may overlap (e.g. “eightwo”), hence checking every index.
	SPELLED.iter().position(|s| rest.starts_with(s)).map(|i| i as u32 + 1)
}

fn calibration_value(line: &str, spelled: bool) -> Result<u32, ErrorKind> {
	let idxs = line.char_indices().map(|(i, _)| i);
	let first = idxs.clone().find_map(|i| digit_at(line, i, spelled));
	let last = idxs.rev().find_map(|i| digit_at(line, i, spelled));
	match (first, last) {
		(Some(first), Some(last)) => Ok(first * 10 + last),
		_ => Err(ErrorKind::Format("no digit")),
	}
}

fn sum_calibration_values(input: &str, spelled: bool) -> Result<u32, Error> {
	Ok(lines_with(input, |line| calibration_value(line, spelled))?.into_iter().sum())
}


pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	sum_calibration_values(input, false)
}


pub(crate) fn part2(input: &str) -> Result<u32, Error> {
	sum_calibration_values(input, true)
}


#[test]
fn tests() {
	use indoc::indoc;
	assert_eq!(part1(indoc! { "
		1abc2
		pqr3stu8vwx
		a1b2c3d4e5f
		treb7uchet
	" }).unwrap(), 142);
	assert_eq!(calibration_value("eightwo", true).unwrap(), 82);
	assert!(calibration_value("eightwo", false).is_err());
	assert_eq!(part2(indoc! { "
		two1nine
		eightwothree
		abcone2threexyz
		xtwone3four
		4nineeightseven2
		zoneight234
		7pqrstsixteen
	" }).unwrap(), 281);
}
