// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;
use crate::parsing::{Error, ErrorKind};


fn ranges_from_str(s: &str) -> Result<Vec<RangeInclusive<u64>>, Error> {
	let s = s.trim();
	if s.is_empty() { return Err(Error::new(1, ErrorKind::Empty)) }
	let mut column = 1;
	s.split(',')
		.map(|range| {
			let at = column;
			column += range.len() + 1;
			let parse = || {
				let (first, last) = range.split_once('-').ok_or(ErrorKind::Format("expected `<first>-<last>`"))?;
				Ok::<_, ErrorKind>(first.parse::<u64>()?..=last.parse()?)
			};
			parse().map_err(|kind| Error::at(1, at, kind))
		})
		.collect()
}

/// Whether the digits of `id` are one sequence repeated exactly `times` times.
fn is_repeated(id: u64, times: usize) -> bool {
	let digits = id.to_string();
	let len = digits.len();
	if times < 2 || len % times != 0 { return false }
	let (seq, rest) = digits.as_bytes().split_at(len / times);
	rest.chunks(seq.len()).all(|chunk| chunk == seq)
}

fn is_repeating(id: u64) -> bool {
	is_repeated(id, 2)
}

fn is_repeating_any(id: u64) -> bool {
	let len = id.to_string().len();
	(2..=len).any(|times| is_repeated(id, times))
}

fn sum_invalid(input: &str, invalid: fn(u64) -> bool) -> Result<u64, Error> {
	Ok(ranges_from_str(input)?
		.into_iter()
		.flatten()
		.filter(|&id| invalid(id))
		.sum())
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	sum_invalid(input, is_repeating)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	sum_invalid(input, is_repeating_any)
}


#[test]
fn tests() {
	const INPUT: &str = concat!(
		"11-22,95-115,998-1012,1188511880-1188511890,222220-222224,",
		"1698522-1698528,446443-446449,38593856-38593862,565653-565659,",
		"824824821-824824827,2121212118-2121212124\n",
	);
	for id in [99, 1010, 1188511885, 222222, 38593859] { assert!(is_repeating(id), "{id}") }
	for id in [1, 101, 3330333] { assert!(!is_repeating(id), "{id}") }
	assert!(is_repeating_any(111) && is_repeating_any(824824824) && !is_repeating_any(1012));
	assert_eq!(part1(INPUT).unwrap(), 1227775554);
	assert_eq!(part2(INPUT).unwrap(), 4174379265);
	assert_eq!(part1("1-2,3:4").unwrap_err().column, Some(5));
}
