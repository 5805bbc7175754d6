// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::Grid, parsing::Error};


/// Columns left of the vertical mirror line with exactly `smudges` mismatching cells.
fn mirror_column(pattern: &Grid<bool>, smudges: usize) -> Option<usize> {
	(1..pattern.width()).find(|&col| {
		let mut mismatches = 0;
		for row in pattern.rows() {
			let (left, right) = row.split_at(col);
			mismatches += left.iter().rev().zip(right).filter(|(l, r)| l != r).count();
			if mismatches > smudges { return false }
		}
		mismatches == smudges
	})
}

fn summarize(pattern: &Grid<bool>, smudges: usize) -> Option<usize> {
	mirror_column(pattern, smudges)
		.or_else(|| mirror_column(&pattern.transposed(), smudges).map(|rows| rows * 100))
}

fn sum_summaries(input: &str, smudges: usize) -> Result<usize, Error> {
	let mut line = 1;
	let mut sum = 0;
	for block in input.split("\n\n") {
		let pattern = Grid::from_str_at(block, line, |chr| match chr {
			'#' => Ok(true),
			'.' => Ok(false),
			invalid => Err(invalid),
		})?;
		sum += summarize(&pattern, smudges).ok_or(Error::format(line, "pattern without mirror"))?;
		line += block.lines().count() + 1;
	}
	Ok(sum)
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	sum_summaries(input, 0)
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	sum_summaries(input, 1)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#.##..##.
		..#.##.#.
		##......#
		##......#
		..#.##.#.
		..##..##.
		#.#.##.#.

		#...##..#
		#....#..#
		..##..###
		#####.##.
		#####.##.
		..##..###
		#....#..#
	" };
	assert_eq!(part1(INPUT).unwrap(), 405);
	assert_eq!(part2(INPUT).unwrap(), 400);
	assert_eq!(part1("#.\n##\n").unwrap_err().line, 1);
}
