// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::{grid::{Grid, Pos}, parsing::Error};


fn map_from_str(s: &str) -> Result<Grid<u8>, Error> {
	Grid::from_str_with(s, |chr| chr.to_digit(10).map(|h| h as u8).ok_or(chr))
}

/// Walks every gently uphill trail from `trailhead`, calling `on_peak` for each height-9 end.
fn hike(map: &Grid<u8>, trailhead: Pos, mut on_peak: impl FnMut(Pos)) {
	let mut stack = vec![trailhead];
	while let Some(pos) = stack.pop() {
		let height = map[pos];
		if height == 9 { on_peak(pos); continue }
		stack.extend(map.neighbors4(pos).filter(|&next| map[next] == height + 1));
	}
}

fn trailheads(map: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
	map.iter().filter(|(_, &h)| h == 0).map(|(pos, _)| pos)
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	let map = map_from_str(input)?;
	Ok(trailheads(&map)
		.map(|trailhead| {
			let mut peaks = HashSet::new();
			hike(&map, trailhead, |peak| { peaks.insert(peak); });
			peaks.len()
		})
		.sum())
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let map = map_from_str(input)?;
	Ok(trailheads(&map)
		.map(|trailhead| {
			let mut rating = 0;
			hike(&map, trailhead, |_| rating += 1);
			rating
		})
		.sum())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		89010123
		78121874
		87430965
		96549874
		45678903
		32019012
		01329801
		10456732
	" };
	assert_eq!(part1(INPUT).unwrap(), 36);
	assert_eq!(part2(INPUT).unwrap(), 81);
	assert_eq!(part1("0123\n1234\n8765\n9876\n").unwrap(), 1);
}
