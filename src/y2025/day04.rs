// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Grid, Pos}, parsing::Error};


fn rolls_from_str(s: &str) -> Result<Grid<bool>, Error> {
	Grid::from_str_with(s, |chr| match chr {
		'@' => Ok(true),
		'.' => Ok(false),
		invalid => Err(invalid),
	})
}

fn neighbor_rolls(rolls: &Grid<bool>, pos: Pos) -> usize {
	rolls.neighbors8(pos).filter(|&n| rolls[n]).count()
}

fn accessible(rolls: &Grid<bool>) -> Vec<Pos> {
	rolls.iter()
		.filter(|&(pos, &roll)| roll && neighbor_rolls(rolls, pos) < 4)
		.map(|(pos, _)| pos)
		.collect()
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	Ok(accessible(&rolls_from_str(input)?).len())
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let mut rolls = rolls_from_str(input)?;
	let mut removed = 0;
	loop {
		let batch = accessible(&rolls);
		if batch.is_empty() { return Ok(removed) }
		removed += batch.len();
		for pos in batch { rolls[pos] = false }
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		..@@.@@@@.
		@@@.@@@.@.
		@@@@@.@.@@
		@.@@@@..@.
		@@.@@@@.@@
		.@@@@@@@.@
		.@.@.@.@@@
		@.@@@.@@@@
		.@@@@@@@@.
		@.@.@@@.@.
	" };
	let rolls = rolls_from_str("..@\n@..\n.@@\n").unwrap();
	assert_eq!([[0, 0], [0, 1], [1, 1]].map(|pos| neighbor_rolls(&rolls, pos)), [1, 2, 4]);
	assert_eq!(part1(INPUT).unwrap(), 13);
	assert_eq!(part2(INPUT).unwrap(), 43);
}
