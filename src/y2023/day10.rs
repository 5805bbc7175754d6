// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::{grid::{Dir, Grid, Pos}, parsing::Error};


/// The two directions a pipe connects, if any.
fn connections(tile: u8) -> Option<[Dir; 2]> {
	use Dir::*;
	match tile {
		b'|' => Some([Up, Down]),
		b'-' => Some([Left, Right]),
		b'L' => Some([Up, Right]),
		b'J' => Some([Up, Left]),
		b'7' => Some([Down, Left]),
		b'F' => Some([Down, Right]),
		_ => None,
	}
}

struct Maze {
	tiles: Grid<u8>,
	start: Pos,
	/// The pipe shape hidden under `S`.
	start_conns: [Dir; 2],
}

impl Maze {
	fn conns(&self, pos: Pos) -> Option<[Dir; 2]> {
		if pos == self.start { Some(self.start_conns) } else { connections(self.tiles[pos]) }
	}

	/// The positions along the loop, starting at `S`.
	fn main_loop(&self) -> Result<Vec<Pos>, Error> {
		let broken = || Error::unsolvable("broken loop");
		let mut path = vec![self.start];
		let mut pos = self.start;
		let mut dir = self.start_conns[0];
		loop {
			pos = self.tiles.step(pos, dir).ok_or_else(broken)?;
			if pos == self.start {
				return if self.start_conns.contains(&dir.inv()) { Ok(path) } else { Err(broken()) }
			}
			let [d0, d1] = self.conns(pos).ok_or_else(broken)?;
			dir = if d0 == dir.inv() { d1 } else if d1 == dir.inv() { d0 } else { return Err(broken()) };
			path.push(pos);
		}
	}
}

fn maze_from_str(s: &str) -> Result<Maze, Error> {
	let tiles = Grid::from_str_with(s, |chr| match chr {
		'|' | '-' | 'L' | 'J' | '7' | 'F' | '.' | 'S' => Ok(chr as u8),
		invalid => Err(invalid),
	})?;
	let start = tiles.find(|&t| t == b'S').ok_or(Error::unsolvable("no start"))?;
	let candidates = Dir::ALL.into_iter()
		.filter(|&dir| tiles.step(start, dir)
			.and_then(|pos| connections(tiles[pos]))
			.is_some_and(|conns| conns.contains(&dir.inv())))
		.collect::<Vec<_>>();

	// Pipes pointing at `S` need not be part of the loop; keep the pair that closes it.
	let mut maze = Maze { tiles, start, start_conns: [Dir::Up, Dir::Down] };
	for (d0, d1) in candidates.into_iter().tuple_combinations() {
		maze.start_conns = [d0, d1];
		if maze.main_loop().is_ok() { return Ok(maze) }
	}
	Err(Error::unsolvable("no loop through the start"))
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	Ok(maze_from_str(input)?.main_loop()?.len() / 2)
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let maze = maze_from_str(input)?;
	let mut on_loop = maze.tiles.map(|_| false);
	for pos in maze.main_loop()? { on_loop[pos] = true }

	// Scanning each row, crossing a loop tile that connects upwards flips inside & outside.
	let mut enclosed = 0;
	for r in 0..maze.tiles.height() {
		let mut inside = false;
		for c in 0..maze.tiles.width() {
			if !on_loop[[r, c]] {
				if inside { enclosed += 1 }
			} else if maze.conns([r, c]).is_some_and(|conns| conns.contains(&Dir::Up)) {
				inside = !inside;
			}
		}
	}
	Ok(enclosed)
}


#[test]
fn tests() {
	use indoc::indoc;
	assert_eq!(part1(indoc! { "
		-L|F7
		7S-7|
		L|7||
		-L-J|
		L|-JF
	" }).unwrap(), 4);
	assert_eq!(part1(indoc! { "
		..F7.
		.FJ|.
		SJ.L7
		|F--J
		LJ...
	" }).unwrap(), 8);
	const STRAY_PIPE: &str = indoc! { "
		-S-7
		.|.|
		.L-J
	" };
	assert_eq!(part1(STRAY_PIPE).unwrap(), 4);
	assert_eq!(part2(STRAY_PIPE).unwrap(), 1);
	assert!(part1("S-\n|.\n").is_err());
	assert_eq!(part2(indoc! { "
		...........
		.S-------7.
		.|F-----7|.
		.||.....||.
		.||.....||.
		.|L-7.F-J|.
		.|..|.|..|.
		.L--J.L--J.
		...........
	" }).unwrap(), 4);
	assert_eq!(part2(indoc! { "
		.F----7F7F7F7F-7....
		.|F--7||||||||FJ....
		.||.FJ||||||||L7....
		FJL7L7LJLJ||LJ.L-7..
		L--J.L7...LJS7F-7L7.
		....F-J..F7FJ|L7L7L7
		....L7.F7||L7|.L7L7|
		.....|FJLJ|FJ|F7|.LJ
		....FJL-7.||.||||...
		....L---J.LJ.LJLJ...
	" }).unwrap(), 8);
}
