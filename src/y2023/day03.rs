// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{BTreeSet, HashMap};
use crate::{grid::{Grid, Pos}, parsing::Error};


struct PartNumber {
	value: u32,
	/// Symbols adjacent to any of the number’s digits.
	symbols: BTreeSet<Pos>,
}

fn is_symbol(b: u8) -> bool {
	!b.is_ascii_digit() && b != b'.'
}

fn part_numbers(schematic: &Grid<u8>) -> Vec<PartNumber> {
	let mut numbers = vec![];
	for (r, row) in schematic.rows().enumerate() {
		let mut c = 0;
		while c < row.len() {
			if !row[c].is_ascii_digit() { c += 1; continue }
			let mut number = PartNumber { value: 0, symbols: BTreeSet::new() };
			while c < row.len() && row[c].is_ascii_digit() {
				number.value = number.value * 10 + u32::from(row[c] - b'0');
				number.symbols.extend(schematic.neighbors8([r, c])
					.filter(|&pos| is_symbol(schematic[pos])));
				c += 1;
			}
			numbers.push(number);
		}
	}
	numbers
}


pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	let schematic = Grid::from_chars(input)?;
	Ok(part_numbers(&schematic)
		.into_iter()
		.filter(|number| !number.symbols.is_empty())
		.map(|number| number.value)
		.sum())
}


pub(crate) fn part2(input: &str) -> Result<u32, Error> {
	let schematic = Grid::from_chars(input)?;
	let mut gears = HashMap::<Pos, Vec<u32>>::new();
	for number in part_numbers(&schematic) {
		for pos in number.symbols {
			if schematic[pos] == b'*' { gears.entry(pos).or_default().push(number.value) }
		}
	}
	Ok(gears.values()
		.filter_map(|numbers| match numbers[..] {
			[n0, n1] => Some(n0 * n1),
			_ => None,
		})
		.sum())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		467..114..
		...*......
		..35..633.
		......#...
		617*......
		.....+.58.
		..592.....
		......755.
		...$.*....
		.664.598..
	" };
	assert_eq!(part1(INPUT).unwrap(), 4361);
	assert_eq!(part2(INPUT).unwrap(), 467835);
	assert!(part1("12\n3").is_err());
}
