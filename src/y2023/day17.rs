// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{cmp::Ordering, collections::BinaryHeap, ops::RangeInclusive};
use crate::{grid::{Dir, Grid, Pos}, parsing::Error};


#[derive(PartialEq, Eq)]
struct State {
	heat_loss: u32,
	pos: Pos,
	/// Whether the crucible last moved up or down.
	vertical: bool,
}

impl Ord for State {
	fn cmp(&self, other: &Self) -> Ordering {
		other.heat_loss.cmp(&self.heat_loss)
			.then_with(|| self.pos.cmp(&other.pos))
			.then_with(|| self.vertical.cmp(&other.vertical))
	}
}

impl PartialOrd for State {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Dijkstra over (position, axis), where every edge is a straight run
/// of `runs` blocks followed by a turn.
fn least_heat_loss(city: &Grid<u32>, runs: RangeInclusive<usize>) -> Option<u32> {
	let target = [city.height() - 1, city.width() - 1];
	let mut best = city.map(|_| [u32::MAX; 2]);
	let mut heap = BinaryHeap::new();
	for vertical in [false, true] {
		best[[0, 0]][vertical as usize] = 0;
		heap.push(State { heat_loss: 0, pos: [0, 0], vertical });
	}

	while let Some(State { heat_loss, pos, vertical }) = heap.pop() {
		if pos == target { return Some(heat_loss) }
		if heat_loss > best[pos][vertical as usize] { continue }

		let turns = if vertical { [Dir::Left, Dir::Right] } else { [Dir::Up, Dir::Down] };
		for dir in turns {
			let mut next = pos;
			let mut next_heat_loss = heat_loss;
			for run in 1..=*runs.end() {
				let Some(step) = city.step(next, dir) else { break };
				next = step;
				next_heat_loss += city[next];
				if run < *runs.start() { continue }
				let best = &mut best[next][dir.is_vertical() as usize];
				if next_heat_loss < *best {
					*best = next_heat_loss;
					heap.push(State { heat_loss: next_heat_loss, pos: next, vertical: dir.is_vertical() });
				}
			}
		}
	}
	None
}

fn city_from_str(s: &str) -> Result<Grid<u32>, Error> {
	Grid::from_str_with(s, |chr| chr.to_digit(10).ok_or(chr))
}


pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	least_heat_loss(&city_from_str(input)?, 1..=3).ok_or(Error::unsolvable("no way to the factory"))
}


pub(crate) fn part2(input: &str) -> Result<u32, Error> {
	least_heat_loss(&city_from_str(input)?, 4..=10).ok_or(Error::unsolvable("no way to the factory"))
}


#[test]
fn tests() {
	use indoc::indoc;
	const INPUT: &str = indoc! { "
		2413432311323
		3215453535623
		3255245654254
		3446585845452
		4546657867536
		1438598798454
		4457876987766
		3637877979653
		4654967986887
		4564679986453
		1224686865563
		2546548887735
		4322674655533
	" };
	assert_eq!(part1(INPUT).unwrap(), 102);
	assert_eq!(part2(INPUT).unwrap(), 94);
	assert_eq!(part2(indoc! { "
		111111111111
		999999999991
		999999999991
		999999999991
		999999999991
	" }).unwrap(), 71);
}
