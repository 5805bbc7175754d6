// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::parsing::{ints, lines_with, Error, ErrorKind};


fn lists_from_str(s: &str) -> Result<(Vec<u64>, Vec<u64>), Error> {
	Ok(lines_with(s, |line| match ints::<u64>(line)?[..] {
		[l, r] => Ok((l, r)),
		_ => Err(ErrorKind::Format("expected two numbers")),
	})?.into_iter().unzip())
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let (mut left, mut right) = lists_from_str(input)?;
	left.sort_unstable();
	right.sort_unstable();
	Ok(left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum())
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let (left, right) = lists_from_str(input)?;
	let mut counts = HashMap::<u64, u64>::new();
	for r in right { *counts.entry(r).or_default() += 1 }
	Ok(left.iter().map(|l| l * counts.get(l).copied().unwrap_or_default()).sum())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		3   4
		4   3
		2   5
		1   3
		3   9
		3   3
	" };
	assert_eq!(part1(INPUT).unwrap(), 11);
	assert_eq!(part2(INPUT).unwrap(), 31);
}
