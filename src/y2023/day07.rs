// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{lines_with, Error, ErrorKind};


/// Card strengths, `2` through `A` as 2 through 14; jokers are 1.
type Hand = [u8; 5];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum HandType { HighCard, OnePair, TwoPair, ThreeOfAKind, FullHouse, FourOfAKind, FiveOfAKind }

const JOKER: u8 = 1;

fn hand_type(hand: &Hand) -> HandType {
	use HandType::*;
	let mut counts = [0u8; 15];
	for &card in hand { counts[card as usize] += 1 }
	let jokers = std::mem::take(&mut counts[JOKER as usize]);
	counts.sort_unstable_by(|l, r| r.cmp(l));
	// Jokers are always best spent on the largest group.
	match (counts[0] + jokers, counts[1]) {
		(5, _) => FiveOfAKind,
		(4, _) => FourOfAKind,
		(3, 2) => FullHouse,
		(3, _) => ThreeOfAKind,
		(2, 2) => TwoPair,
		(2, _) => OnePair,
		_ => HighCard,
	}
}

fn total_winnings(input: &str, jokers: bool) -> Result<u64, Error> {
	let mut hands = lines_with(input, |line| {
		let (cards, bid) = line.split_once(' ').ok_or(ErrorKind::Format("expected `<hand> <bid>`"))?;
		let cards = cards.as_bytes();
		if cards.len() != 5 { return Err(ErrorKind::Format("expected five cards")) }
		let mut hand = Hand::default();
		for (card, &b) in hand.iter_mut().zip(cards) {
			*card = match b {
				b'2'..=b'9' => b - b'0',
				b'T' => 10,
				b'J' if jokers => JOKER,
				b'J' => 11,
				b'Q' => 12,
				b'K' => 13,
				b'A' => 14,
				invalid => return Err(ErrorKind::Char(invalid as char)),
			};
		}
		Ok(((hand_type(&hand), hand), bid.parse::<u64>()?))
	})?;
	hands.sort_unstable_by_key(|&(key, _)| key);
	Ok(hands.iter().zip(1..).map(|(&(_, bid), rank)| rank * bid).sum())
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	total_winnings(input, false)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	total_winnings(input, true)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		32T3K 765
		T55J5 684
		KK677 28
		KTJJT 220
		QQQJA 483
	" };
	assert_eq!(hand_type(&[JOKER; 5]), HandType::FiveOfAKind);
	assert_eq!(hand_type(&[2, 2, 3, 3, JOKER]), HandType::FullHouse);
	assert_eq!(part1(INPUT).unwrap(), 6440);
	assert_eq!(part2(INPUT).unwrap(), 5905);
}
