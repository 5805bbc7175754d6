// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use itertools::Itertools as _;
use crate::{grid::{Grid, Pos}, parsing::Error};


/// Antinodes from every antenna pair: one distance beyond each antenna, or, with
/// `resonant` harmonics, at every multiple of it (including the antennas themselves).
fn count_antinodes(input: &str, resonant: bool) -> Result<usize, Error> {
	let map = Grid::from_str_with(input, |chr| match chr {
		'.' => Ok(None),
		chr if chr.is_ascii_alphanumeric() => Ok(Some(chr)),
		invalid => Err(invalid),
	})?;
	let mut antennas = HashMap::<char, Vec<Pos>>::new();
	for (pos, &freq) in map.iter() {
		if let Some(freq) = freq { antennas.entry(freq).or_default().push(pos) }
	}

	let mut antinodes = map.map(|_| false);
	for positions in antennas.values() {
		for (&a, &b) in positions.iter().tuple_combinations() {
			for (from, to) in [(a, b), (b, a)] {
				let delta = [to[0] as isize - from[0] as isize, to[1] as isize - from[1] as isize];
				let (first, count) = if resonant { (0, usize::MAX) } else { (1, 1) };
				let nodes = (first..)
					.map(|k| map.offset(to, [delta[0] * k, delta[1] * k]))
					.take(count)
					.take_while(Option::is_some)
					.flatten();
				for pos in nodes { antinodes[pos] = true }
			}
		}
	}
	Ok(antinodes.iter().filter(|(_, &antinode)| antinode).count())
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	count_antinodes(input, false)
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	count_antinodes(input, true)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		............
		........0...
		.....0......
		.......0....
		....0.......
		......A.....
		............
		............
		........A...
		.........A..
		............
		............
	" };
	assert_eq!(part1(INPUT).unwrap(), 14);
	assert_eq!(part2(INPUT).unwrap(), 34);
}
