// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Grid, Pos}, parsing::Error};


const DIRS: [[isize; 2]; 8] = [[-1, -1], [-1, 0], [-1, 1], [0, -1], [0, 1], [1, -1], [1, 0], [1, 1]];

fn spells(puzzle: &Grid<u8>, mut pos: Pos, delta: [isize; 2], word: &[u8]) -> bool {
	for (i, &letter) in word.iter().enumerate() {
		if i > 0 {
			let Some(next) = puzzle.offset(pos, delta) else { return false };
			pos = next;
		}
		if puzzle[pos] != letter { return false }
	}
	true
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	let puzzle = Grid::from_chars(input)?;
	Ok(puzzle.positions()
		.map(|pos| DIRS.iter().filter(|&&delta| spells(&puzzle, pos, delta, b"XMAS")).count())
		.sum())
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let puzzle = Grid::from_chars(input)?;
	let is_x_mas = |pos: Pos| -> Option<bool> {
		if puzzle[pos] != b'A' { return Some(false) }
		let corner = |delta| puzzle.offset(pos, delta).map(|p| puzzle[p]);
		let diag0 = [corner([-1, -1])?, corner([1, 1])?];
		let diag1 = [corner([-1, 1])?, corner([1, -1])?];
		let is_mas = |diag: [u8; 2]| diag == *b"MS" || diag == *b"SM";
		Some(is_mas(diag0) && is_mas(diag1))
	};
	Ok(puzzle.positions().filter(|&pos| is_x_mas(pos) == Some(true)).count())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		MMMSXXMASM
		MSAMXMSMSA
		AMXSXMAAMM
		MSAMASMSMX
		XMASAMXAMM
		XXAMMXXAMA
		SMSMSASXSS
		SAXAMASAAA
		MAMMMXMMMM
		MXMXAXMASX
	" };
	assert_eq!(part1(INPUT).unwrap(), 18);
	assert_eq!(part2(INPUT).unwrap(), 9);
}
