// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashSet, VecDeque};
use log::debug;
use crate::{grid::{Dir, Grid, Pos}, parsing::Error};


struct Garden {
	rocks: Grid<bool>,
	start: Pos,
}

impl Garden {
	fn is_rock(&self, [r, c]: [isize; 2], tiled: bool) -> Option<bool> {
		let (height, width) = (self.rocks.height() as isize, self.rocks.width() as isize);
		if !tiled && !((0..height).contains(&r) && (0..width).contains(&c)) { return None }
		Some(self.rocks[[r.rem_euclid(height) as usize, c.rem_euclid(width) as usize]])
	}

	/// Garden plots reachable in exactly `steps` steps: those within reach whose
	/// distance has the same parity as `steps` (one can always step back & forth).
	fn reachable(&self, steps: usize, tiled: bool) -> usize {
		let start = [self.start[0] as isize, self.start[1] as isize];
		let mut seen = HashSet::from([start]);
		let mut queue = VecDeque::from([(start, 0)]);
		let mut reachable = 0;
		while let Some((pos, dist)) = queue.pop_front() {
			if dist % 2 == steps % 2 { reachable += 1 }
			if dist == steps { continue }
			for dir in Dir::ALL {
				let delta = dir.delta();
				let next = [pos[0] + delta[0], pos[1] + delta[1]];
				if self.is_rock(next, tiled) == Some(false) && seen.insert(next) {
					queue.push_back((next, dist + 1));
				}
			}
		}
		reachable
	}
}

/// The value at `k` of the quadratic through `(0, f[0])`, `(1, f[1])` & `(2, f[2])`.
fn extrapolate_quadratic(f: [usize; 3], k: usize) -> usize {
	let [f0, f1, f2] = f.map(|v| v as i128);
	let k = k as i128;
	let (d1, d2) = (f1 - f0, f2 - 2 * f1 + f0);
	(f0 + k * d1 + k * (k - 1) / 2 * d2) as usize
}

fn garden_from_str(s: &str) -> Result<Garden, Error> {
	let tiles = Grid::from_str_with(s, |chr| match chr {
		'.' | '#' | 'S' => Ok(chr),
		invalid => Err(invalid),
	})?;
	let start = tiles.find(|&t| t == 'S').ok_or(Error::unsolvable("no start"))?;
	Ok(Garden { rocks: tiles.map(|&t| t == '#'), start })
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	Ok(garden_from_str(input)?.reachable(64, false))
}


fn part2_impl(garden: &Garden, steps: usize) -> Result<usize, Error> {
	let size = garden.rocks.width();
	let rem = steps % size;
	if steps <= rem + 2 * size { return Ok(garden.reachable(steps, true)) }

	// Past the first few tiles, the reachable area grows quadratically in whole tiles walked
	// (given a square garden with a clear row & column through the start).
	if garden.rocks.height() != size {
		return Err(Error::unsolvable("extrapolating requires a square garden"))
	}
	let samples = [0, 1, 2].map(|k| garden.reachable(rem + k * size, true));
	debug!("reachable after {rem} + k × {size} steps: {samples:?}");
	Ok(extrapolate_quadratic(samples, steps / size))
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	part2_impl(&garden_from_str(input)?, 26_501_365)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		...........
		.....###.#.
		.###.##..#.
		..#.#...#..
		....#.#....
		.##..S####.
		.##..#...#.
		.......##..
		.##.#.####.
		.##..##.##.
		...........
	" };
	let garden = garden_from_str(INPUT).unwrap();
	assert_eq!(garden.reachable(6, false), 16);
	assert_eq!(part2_impl(&garden, 6).unwrap(), 16);
	assert_eq!(part2_impl(&garden, 10).unwrap(), 50);
	assert_eq!(garden.reachable(50, true), 1594);
	assert_eq!(garden.reachable(100, true), 6536);
	assert_eq!(extrapolate_quadratic([1, 6, 17], 5), 86);

	let open = garden_from_str(".....\n.....\n..S..\n.....\n.....\n").unwrap();
	for steps in [17, 22, 27, 32] {
		assert_eq!(part2_impl(&open, steps).unwrap(), open.reachable(steps, true), "{steps}");
		assert_eq!(open.reachable(steps, true), (steps + 1) * (steps + 1));
	}
	assert!(part2_impl(&garden_from_str("...\n.S.\n").unwrap(), 20).is_err());
}
