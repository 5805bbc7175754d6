// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{lines_with, Error, ErrorKind};


const DIAL_SIZE: i32 = 100;
const START: i32 = 50;

/// Signed click counts; left is negative.
fn rotations_from_str(s: &str) -> Result<Vec<i32>, Error> {
	lines_with(s, |line| {
		let sign = match line.chars().next() {
			Some('L') => -1,
			Some('R') => 1,
			Some(invalid) => return Err(ErrorKind::Char(invalid)),
			None => return Err(ErrorKind::Empty),
		};
		Ok(sign * line[1..].parse::<i32>()?)
	})
}

/// Times the dial points at 0 during `clicks` from `pos`, including where it ends.
fn zero_passes(pos: i32, clicks: i32) -> i32 {
	if clicks >= 0 {
		(pos + clicks).div_euclid(DIAL_SIZE)
	} else {
		// Mirror the dial so that left turns count like right ones.
		let mirrored = (DIAL_SIZE - pos) % DIAL_SIZE;
		(mirrored - clicks).div_euclid(DIAL_SIZE)
	}
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	let mut pos = START;
	Ok(rotations_from_str(input)?
		.into_iter()
		.filter(|&clicks| {
			pos = (pos + clicks).rem_euclid(DIAL_SIZE);
			pos == 0
		})
		.count())
}


pub(crate) fn part2(input: &str) -> Result<i32, Error> {
	let mut pos = START;
	let mut zeros = 0;
	for clicks in rotations_from_str(input)? {
		zeros += zero_passes(pos, clicks);
		pos = (pos + clicks).rem_euclid(DIAL_SIZE);
	}
	Ok(zeros)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		L68
		L30
		R48
		L5
		R60
		L55
		L1
		L99
		R14
		L82
	" };
	assert_eq!(part1(INPUT).unwrap(), 3);
	assert_eq!(part2(INPUT).unwrap(), 6);
	assert_eq!(part2("R1000\n").unwrap(), 10);
	assert_eq!(zero_passes(0, -5), 0);
	assert_eq!(zero_passes(5, -5), 1);
	assert!(part1("X5\n").is_err());
}
