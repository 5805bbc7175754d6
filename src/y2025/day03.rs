// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{lines_with, Error, ErrorKind};


fn banks_from_str(s: &str) -> Result<Vec<Vec<u8>>, Error> {
	lines_with(s, |line| line.chars()
		.map(|chr| chr.to_digit(10).map(|d| d as u8).ok_or(ErrorKind::Char(chr)))
		.collect())
}

/// Picks the leftmost largest digit that still leaves room for the rest.
fn max_joltage(bank: &[u8], batteries: usize) -> Option<u64> {
	if bank.len() < batteries { return None }
	let mut start = 0;
	let mut joltage = 0;
	for left in (0..batteries).rev() {
		let (idx, &digit) = bank[start..bank.len() - left]
			.iter()
			.enumerate()
			.rev()
			.max_by_key(|&(_, &digit)| digit)?;
		joltage = joltage * 10 + u64::from(digit);
		start += idx + 1;
	}
	Some(joltage)
}

fn total_joltage(input: &str, batteries: usize) -> Result<u64, Error> {
	banks_from_str(input)?
		.iter()
		.enumerate()
		.map(|(l, bank)| max_joltage(bank, batteries)
			.ok_or(Error::format(l + 1, "too few batteries")))
		.sum()
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	total_joltage(input, 2)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	total_joltage(input, 12)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		987654321111111
		811111111111119
		234234234234278
		818181911112111
	" };
	let banks = banks_from_str(INPUT).unwrap();
	assert_eq!(banks.iter().map(|bank| max_joltage(bank, 2).unwrap()).collect::<Vec<_>>(), [98, 89, 78, 92]);
	assert_eq!(
		banks.iter().map(|bank| max_joltage(bank, 12).unwrap()).collect::<Vec<_>>(),
		[987654321111, 811111111119, 434234234278, 888911112111],
	);
	assert_eq!(part1(INPUT).unwrap(), 357);
	assert_eq!(part2(INPUT).unwrap(), 3121910778619);
	assert_eq!(part1("12\n3\n").unwrap_err().line, 2);
}
