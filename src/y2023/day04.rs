// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{ints, lines_with, Error, ErrorKind};


struct Card {
	winning: Vec<u32>,
	have: Vec<u32>,
}

impl Card {
	fn matches(&self) -> usize {
		self.have.iter().filter(|n| self.winning.contains(n)).count()
	}
}

fn cards_from_str(s: &str) -> Result<Vec<Card>, Error> {
	lines_with(s, |line| {
		let (_, numbers) = line.split_once(':').ok_or(ErrorKind::Format("expected `Card <id>:`"))?;
		let (winning, have) = numbers.split_once('|').ok_or(ErrorKind::Format("expected `|`"))?;
		Ok(Card { winning: ints(winning)?, have: ints(have)? })
	})
}


pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	Ok(cards_from_str(input)?
		.iter()
		.map(|card| match card.matches() {
			0 => 0,
			n => 1 << (n - 1),
		})
		.sum())
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let cards = cards_from_str(input)?;
	let mut copies = vec![1u64; cards.len()];
	for (i, card) in cards.iter().enumerate() {
		// Copies past the last card don’t exist.
		let won = i + 1..(i + 1 + card.matches()).min(cards.len());
		let n = copies[i];
		for copy in &mut copies[won] { *copy += n }
	}
	Ok(copies.iter().sum())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
		Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
		Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
		Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
		Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
		Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
	" };
	assert_eq!(part1(INPUT).unwrap(), 13);
	assert_eq!(part2(INPUT).unwrap(), 30);
}
