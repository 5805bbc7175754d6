// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Dir, Grid, Pos}, parsing::Error};


struct Region {
	area: usize,
	perimeter: usize,
	/// Equal to the number of corners.
	sides: usize,
}

fn same_plant(map: &Grid<u8>, pos: Pos, delta: [isize; 2]) -> bool {
	map.offset(pos, delta).is_some_and(|other| map[other] == map[pos])
}

fn corners(map: &Grid<u8>, pos: Pos) -> usize {
	Dir::ALL.iter()
		.filter(|&&dir| {
			let (a, b) = (dir.delta(), dir.turn_right().delta());
			let (along_a, along_b) = (same_plant(map, pos, a), same_plant(map, pos, b));
			let diagonal = same_plant(map, pos, [a[0] + b[0], a[1] + b[1]]);
			!along_a && !along_b || along_a && along_b && !diagonal
		})
		.count()
}

fn regions(map: &Grid<u8>) -> Vec<Region> {
	let mut seen = map.map(|_| false);
	let mut regions = vec![];
	for start in map.positions() {
		if seen[start] { continue }
		seen[start] = true;
		let mut region = Region { area: 0, perimeter: 0, sides: 0 };
		let mut stack = vec![start];
		while let Some(pos) = stack.pop() {
			region.area += 1;
			region.sides += corners(map, pos);
			let mut fences = 4;
			for next in map.neighbors4(pos).filter(|&next| map[next] == map[pos]) {
				fences -= 1;
				if !seen[next] {
					seen[next] = true;
					stack.push(next);
				}
			}
			region.perimeter += fences;
		}
		regions.push(region);
	}
	regions
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	let map = Grid::from_chars(input)?;
	Ok(regions(&map).iter().map(|r| r.area * r.perimeter).sum())
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let map = Grid::from_chars(input)?;
	Ok(regions(&map).iter().map(|r| r.area * r.sides).sum())
}


#[test]
fn tests() {
	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			AAAA
			BBCD
			BBCC
			EEEC
		" },
		indoc::indoc! { "
			OOOOO
			OXOXO
			OOOOO
			OXOXO
			OOOOO
		" },
		indoc::indoc! { "
			RRRRIICCFF
			RRRRIICCCF
			VVRRRCCFFF
			VVRCCCJFFF
			VVVVCJJCFE
			VVIVCCJJEE
			VVIIICJJEE
			MIIIIIJJEE
			MIIISIJEEE
			MMMISSJEEE
		" },
	];
	assert_eq!(INPUTS.map(|input| part1(input).unwrap()), [140, 772, 1930]);
	assert_eq!(INPUTS.map(|input| part2(input).unwrap()), [80, 436, 1206]);
	assert_eq!(part2(indoc::indoc! { "
		EEEEE
		EXXXX
		EEEEE
		EXXXX
		EEEEE
	" }).unwrap(), 236);
}
