// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::parsing::{ints, lines_with, Error};


fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
	let mut diffs = levels.tuple_windows().map(|(a, b)| b - a);
	diffs.clone().all(|d| (1..=3).contains(&d)) || diffs.all(|d| (-3..=-1).contains(&d))
}

fn is_safe_dampened(levels: &[i32]) -> bool {
	is_safe(levels.iter().copied()) || (0..levels.len()).any(|skip| is_safe(levels.iter()
		.enumerate()
		.filter(move |&(i, _)| i != skip)
		.map(|(_, &level)| level)))
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	Ok(lines_with(input, ints::<i32>)?.iter().filter(|levels| is_safe(levels.iter().copied())).count())
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	Ok(lines_with(input, ints::<i32>)?.iter().filter(|levels| is_safe_dampened(levels)).count())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		7 6 4 2 1
		1 2 7 8 9
		9 7 6 2 1
		1 3 2 4 5
		8 6 4 4 1
		1 3 6 7 9
	" };
	assert_eq!(part1(INPUT).unwrap(), 2);
	assert_eq!(part2(INPUT).unwrap(), 4);
	assert!(is_safe_dampened(&[10, 1, 2, 3]));
}
