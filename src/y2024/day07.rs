// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{ints, lines_with, Error, ErrorKind};


struct Equation {
	test_value: u64,
	numbers: Vec<u64>,
}

/// Works backwards from `target`, undoing the last operator where possible.
fn can_make(target: u64, numbers: &[u64], concat: bool) -> bool {
	let Some((&last, rest)) = numbers.split_last() else { return false };
	if rest.is_empty() { return target == last }

	if target >= last && can_make(target - last, rest, concat) { return true }
	if last != 0 && target % last == 0 && can_make(target / last, rest, concat) { return true }
	if concat {
		let mut shift = 10;
		while shift <= last { shift *= 10 }
		if target % shift == last && can_make(target / shift, rest, concat) { return true }
	}
	false
}

fn total_calibration(input: &str, concat: bool) -> Result<u64, Error> {
	let equations = lines_with(input, |line| {
		let (test_value, numbers) = line.split_once(':').ok_or(ErrorKind::Format("expected `<value>: <numbers>`"))?;
		Ok(Equation { test_value: test_value.parse()?, numbers: ints(numbers)? })
	})?;
	Ok(equations.iter()
		.filter(|eq| can_make(eq.test_value, &eq.numbers, concat))
		.map(|eq| eq.test_value)
		.sum())
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	total_calibration(input, false)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	total_calibration(input, true)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		190: 10 19
		3267: 81 40 27
		83: 17 5
		156: 15 6
		7290: 6 8 6 15
		161011: 16 10 13
		192: 17 8 14
		21037: 9 7 18 13
		292: 11 6 16 20
	" };
	assert!(can_make(156, &[15, 6], true));
	assert!(!can_make(156, &[15, 6], false));
	assert_eq!(part1(INPUT).unwrap(), 3749);
	assert_eq!(part2(INPUT).unwrap(), 11387);
}
