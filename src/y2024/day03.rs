// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use once_cell::sync::Lazy;
use regex::Regex;
use crate::parsing::{Error, ErrorKind};


static INSTRUCTION: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"mul\(([0-9]{1,3}),([0-9]{1,3})\)|do\(\)|don't\(\)").expect("valid regex")
});

fn sum_products(input: &str, conditionals: bool) -> Result<u64, Error> {
	let mut enabled = true;
	let mut sum = 0;
	for caps in INSTRUCTION.captures_iter(input) {
		match &caps[0] {
			"do()" => enabled = true,
			"don't()" => enabled = !conditionals,
			_ if enabled => {
				let arg = |i: usize| caps[i].parse::<u64>().map_err(|e| Error::new(1, ErrorKind::Int(e)));
				sum += arg(1)? * arg(2)?;
			}
			_ => {}
		}
	}
	Ok(sum)
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	sum_products(input, false)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	sum_products(input, true)
}


#[test]
fn tests() {
	assert_eq!(part1("xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))").unwrap(), 161);
	assert_eq!(part2("xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))").unwrap(), 48);
	assert_eq!(part1("mul(1234,5)mul(4,5)").unwrap(), 20);
	assert_eq!(part1("mul(\u{663},4)mul(2,3)").unwrap(), 6);
}
