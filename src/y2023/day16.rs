// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Dir, Grid, Pos}, parsing::Error};


#[derive(Clone, Copy)]
enum Tile { Empty, MirrorSlash, MirrorBackslash, SplitterVertical, SplitterHorizontal }

fn contraption_from_str(s: &str) -> Result<Grid<Tile>, Error> {
	Grid::from_str_with(s, |chr| match chr {
		'.' => Ok(Tile::Empty),
		'/' => Ok(Tile::MirrorSlash),
		'\\' => Ok(Tile::MirrorBackslash),
		'|' => Ok(Tile::SplitterVertical),
		'-' => Ok(Tile::SplitterHorizontal),
		invalid => Err(invalid),
	})
}

/// The direction(s) a beam heading `dir` leaves `tile` in.
fn deflect(tile: Tile, dir: Dir) -> (Dir, Option<Dir>) {
	use {Dir::*, Tile::*};
	match (tile, dir) {
		(MirrorSlash, Right) | (MirrorBackslash, Left) => (Up, None),
		(MirrorSlash, Left) | (MirrorBackslash, Right) => (Down, None),
		(MirrorSlash, Up) | (MirrorBackslash, Down) => (Right, None),
		(MirrorSlash, Down) | (MirrorBackslash, Up) => (Left, None),
		(SplitterVertical, Left | Right) => (Up, Some(Down)),
		(SplitterHorizontal, Up | Down) => (Left, Some(Right)),
		(_, dir) => (dir, None),
	}
}

fn energized(contraption: &Grid<Tile>, start: Pos, dir: Dir) -> usize {
	let mut seen = contraption.map(|_| [false; 4]);
	let mut beams = vec![(start, dir)];
	while let Some((pos, dir)) = beams.pop() {
		let seen_dirs = &mut seen[pos];
		if std::mem::replace(&mut seen_dirs[dir as usize], true) { continue }
		let (out0, out1) = deflect(contraption[pos], dir);
		for out in std::iter::once(out0).chain(out1) {
			if let Some(next) = contraption.step(pos, out) { beams.push((next, out)) }
		}
	}
	seen.iter().filter(|(_, dirs)| dirs.contains(&true)).count()
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	Ok(energized(&contraption_from_str(input)?, [0, 0], Dir::Right))
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let contraption = contraption_from_str(input)?;
	let (height, width) = (contraption.height(), contraption.width());
	let entries = (0..height)
		.flat_map(|r| [([r, 0], Dir::Right), ([r, width - 1], Dir::Left)])
		.chain((0..width).flat_map(|c| [([0, c], Dir::Down), ([height - 1, c], Dir::Up)]));
	Ok(entries.map(|(pos, dir)| energized(&contraption, pos, dir)).max().unwrap_or_default())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { r"
		.|...\....
		|.-.\.....
		.....|-...
		........|.
		..........
		.........\
		..../.\\..
		.-.-/..|..
		.|....-|.\
		..//.|....
	" };
	assert_eq!(part1(INPUT).unwrap(), 46);
	assert_eq!(part2(INPUT).unwrap(), 51);
}
