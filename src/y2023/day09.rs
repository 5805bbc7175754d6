// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::parsing::{ints, lines_with, Error};


/// Extends `history` by one value, following its differences down to all zeroes.
fn extrapolate(history: &[i64]) -> i64 {
	if history.iter().all(|&v| v == 0) { return 0 }
	let diffs = history.iter().tuple_windows().map(|(a, b)| b - a).collect::<Vec<_>>();
	history.last().copied().unwrap_or_default() + extrapolate(&diffs)
}

fn sum_extrapolated(input: &str, backwards: bool) -> Result<i64, Error> {
	Ok(lines_with(input, ints::<i64>)?
		.into_iter()
		.map(|mut history| {
			if backwards { history.reverse() }
			extrapolate(&history)
		})
		.sum())
}


pub(crate) fn part1(input: &str) -> Result<i64, Error> {
	sum_extrapolated(input, false)
}


pub(crate) fn part2(input: &str) -> Result<i64, Error> {
	sum_extrapolated(input, true)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0 3 6 9 12 15
		1 3 6 10 15 21
		10 13 16 21 30 45
	" };
	assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
	assert_eq!(part1(INPUT).unwrap(), 114);
	assert_eq!(part2(INPUT).unwrap(), 2);
}
