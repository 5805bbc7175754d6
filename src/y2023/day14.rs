// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use log::debug;
use crate::{grid::{Dir, Grid, Pos}, parsing::Error};


const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const EMPTY: u8 = b'.';

fn platform_from_str(s: &str) -> Result<Grid<u8>, Error> {
	Grid::from_str_with(s, |chr| match chr {
		'O' | '#' | '.' => Ok(chr as u8),
		invalid => Err(invalid),
	})
}

/// Rolls all round rocks as far as they go towards `dir`.
fn tilt(platform: &mut Grid<u8>, dir: Dir) {
	let (height, width) = (platform.height(), platform.width());
	let (lines, len) = if dir.is_vertical() { (width, height) } else { (height, width) };
	let pos = |line: usize, i: usize| -> Pos {
		match dir {
			Dir::Up => [i, line],
			Dir::Down => [height - 1 - i, line],
			Dir::Left => [line, i],
			Dir::Right => [line, width - 1 - i],
		}
	};
	for line in 0..lines {
		let mut free = 0;
		for i in 0..len {
			match platform[pos(line, i)] {
				ROUND => {
					platform[pos(line, i)] = EMPTY;
					platform[pos(line, free)] = ROUND;
					free += 1;
				}
				CUBE => free = i + 1,
				_ => {}
			}
		}
	}
}

fn spin_cycle(platform: &mut Grid<u8>) {
	for dir in [Dir::Up, Dir::Left, Dir::Down, Dir::Right] { tilt(platform, dir) }
}

fn north_load(platform: &Grid<u8>) -> usize {
	let height = platform.height();
	platform.iter()
		.filter(|&(_, &tile)| tile == ROUND)
		.map(|([r, _], _)| height - r)
		.sum()
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	let mut platform = platform_from_str(input)?;
	tilt(&mut platform, Dir::Up);
	Ok(north_load(&platform))
}


fn part2_impl(mut platform: Grid<u8>, cycles: usize) -> usize {
	let mut seen = HashMap::new();
	let mut loads = vec![];
	for done in 0..cycles {
		if let Some(first) = seen.insert(platform.clone(), done) {
			let period = done - first;
			debug!("spinning repeats every {period} cycles after {first}");
			return loads[first + (cycles - first) % period]
		}
		loads.push(north_load(&platform));
		spin_cycle(&mut platform);
	}
	north_load(&platform)
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	Ok(part2_impl(platform_from_str(input)?, 1_000_000_000))
}


#[test]
fn tests() {
	use indoc::indoc;
	const INPUT: &str = indoc! { "
		O....#....
		O.OO#....#
		.....##...
		OO.#O....O
		.O.....O#.
		O.#..O.#.#
		..O..#O..O
		.......O..
		#....###..
		#OO..#....
	" };
	assert_eq!(part1(INPUT).unwrap(), 136);

	let mut platform = platform_from_str(INPUT).unwrap();
	spin_cycle(&mut platform);
	assert_eq!(platform.to_string(), indoc! { "
		.....#....
		....#...O#
		...OO##...
		.OO#......
		.....OOO#.
		.O#...O#.#
		....O#....
		......OOOO
		#...O###..
		#..OO#....
	" }.trim_end());
	assert_eq!(part2_impl(platform_from_str(INPUT).unwrap(), 3), part2_impl(platform, 2));

	assert_eq!(part2(INPUT).unwrap(), 64);
}
