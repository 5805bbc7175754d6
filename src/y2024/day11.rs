// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::parsing::{ints, Error, ErrorKind};


fn blink(stone: u64) -> (u64, Option<u64>) {
	if stone == 0 { return (1, None) }
	let digits = stone.ilog10() + 1;
	if digits % 2 == 0 {
		let half = 10u64.pow(digits / 2);
		(stone / half, Some(stone % half))
	} else {
		(stone * 2024, None)
	}
}

/// Stone order never matters, so only the count per engraving is tracked.
fn stones_after(stones: &[u64], blinks: usize) -> u64 {
	let mut counts = HashMap::<u64, u64>::new();
	for &stone in stones { *counts.entry(stone).or_default() += 1 }
	for _ in 0..blinks {
		let mut next = HashMap::with_capacity(counts.len() * 2);
		for (stone, n) in counts {
			let (left, right) = blink(stone);
			*next.entry(left).or_default() += n;
			if let Some(right) = right { *next.entry(right).or_default() += n }
		}
		counts = next;
	}
	counts.values().sum()
}

fn part1_impl(input: &str, blinks: usize) -> Result<u64, Error> {
	let stones = ints(input).map_err(|kind| Error::new(1, kind))?;
	if stones.is_empty() { return Err(Error::new(1, ErrorKind::Empty)) }
	Ok(stones_after(&stones, blinks))
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl(input, 25)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part1_impl(input, 75)
}


#[test]
fn tests() {
	assert_eq!(blink(0), (1, None));
	assert_eq!(blink(1000), (10, Some(0)));
	assert_eq!(blink(99), (9, Some(9)));
	assert_eq!(blink(1), (2024, None));
	assert_eq!(part1_impl("0 1 10 99 999", 1).unwrap(), 7);
	assert_eq!(part1_impl("125 17", 6).unwrap(), 22);
	assert_eq!(part1("125 17\n").unwrap(), 55312);
}
