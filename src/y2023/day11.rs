// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::{grid::Grid, parsing::Error};


/// Maps every row (or column) index to its expanded coordinate.
fn expanded_coords(occupied: impl Iterator<Item = bool>, factor: u64) -> Vec<u64> {
	occupied
		.scan(0, |coord, occupied| {
			let this = *coord;
			*coord += if occupied { 1 } else { factor };
			Some(this)
		})
		.collect()
}

fn sum_distances(input: &str, factor: u64) -> Result<u64, Error> {
	let image = Grid::from_str_with(input, |chr| match chr {
		'#' => Ok(true),
		'.' => Ok(false),
		invalid => Err(invalid),
	})?;
	let rows = expanded_coords(image.rows().map(|row| row.contains(&true)), factor);
	let cols = expanded_coords((0..image.width()).map(|c| image.column(c).any(|&g| g)), factor);

	let galaxies = image.iter()
		.filter(|(_, &galaxy)| galaxy)
		.map(|([r, c], _)| [rows[r], cols[c]])
		.collect::<Vec<_>>();
	Ok(galaxies.iter()
		.tuple_combinations()
		.map(|(g0, g1)| g0[0].abs_diff(g1[0]) + g0[1].abs_diff(g1[1]))
		.sum())
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	sum_distances(input, 2)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	sum_distances(input, 1_000_000)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		...#......
		.......#..
		#.........
		..........
		......#...
		.#........
		.........#
		..........
		.......#..
		#...#.....
	" };
	assert_eq!(part1(INPUT).unwrap(), 374);
	assert_eq!(sum_distances(INPUT, 10).unwrap(), 1030);
	assert_eq!(sum_distances(INPUT, 100).unwrap(), 8410);
}
