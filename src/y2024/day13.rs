// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_integer::Integer as _;
use crate::parsing::{Error, ErrorKind};


#[cfg_attr(test, derive(Debug))]
struct Machine {
	a: [i64; 2],
	b: [i64; 2],
	prize: [i64; 2],
}

impl Machine {
	/// Solves `a·A + b·B = prize` by Cramer’s rule. Machines with parallel
	/// buttons are treated as unwinnable.
	fn tokens(&self, max_presses: i64) -> Option<i64> {
		let Machine { a, b, prize: p } = self;
		let det = a[0] * b[1] - a[1] * b[0];
		if det == 0 { return None }
		let (presses_a, rem_a) = (p[0] * b[1] - p[1] * b[0]).div_rem(&det);
		let (presses_b, rem_b) = (a[0] * p[1] - a[1] * p[0]).div_rem(&det);
		if rem_a != 0 || rem_b != 0 || presses_a < 0 || presses_b < 0 { return None }
		if presses_a > max_presses || presses_b > max_presses { return None }
		Some(3 * presses_a + presses_b)
	}
}

fn total_tokens(input: &str, offset: i64, max_presses: i64) -> Result<i64, Error> {
	Ok(parsing::machines_from_str(input)?
		.into_iter()
		.filter_map(|mut machine| {
			machine.prize = machine.prize.map(|p| p + offset);
			machine.tokens(max_presses)
		})
		.sum())
}


pub(crate) fn part1(input: &str) -> Result<i64, Error> {
	total_tokens(input, 0, 100)
}


pub(crate) fn part2(input: &str) -> Result<i64, Error> {
	total_tokens(input, 10_000_000_000_000, i64::MAX)
}


mod parsing {
	use super::*;

	/// Parses `<label>X<sep><x>, Y<sep><y>`.
	fn coords(line: &str, label: &str, sep: char) -> Result<[i64; 2], ErrorKind> {
		const FORMAT: ErrorKind = ErrorKind::Format("expected `<label>: X<n>, Y<n>`");
		let rest = line.strip_prefix(label).and_then(|r| r.strip_prefix(": X")).ok_or(FORMAT)?;
		let (x, y) = rest.split_once(", Y").ok_or(FORMAT)?;
		let (x, y) = (x.strip_prefix(sep).ok_or(FORMAT)?, y.strip_prefix(sep).ok_or(FORMAT)?);
		Ok([x.parse()?, y.parse()?])
	}

	pub(super) fn machines_from_str(s: &str) -> Result<Vec<Machine>, Error> {
		let mut machines = vec![];
		let end = s.lines().count() + 1;
		let mut lines = s.lines().enumerate().map(|(l, line)| (l + 1, line));
		loop {
			let mut next = |label, sep| {
				let (l, line) = lines.next().ok_or(Error::format(end, "incomplete machine"))?;
				coords(line, label, sep).map_err(|kind| Error::new(l, kind))
			};
			let (a, b, prize) = (next("Button A", '+')?, next("Button B", '+')?, next("Prize", '=')?);
			machines.push(Machine { a, b, prize });
			match lines.next() {
				None => return Ok(machines),
				Some((_, "")) => (),
				Some((l, _)) => return Err(Error::format(l, "expected a blank line")),
			}
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Button A: X+94, Y+34
		Button B: X+22, Y+67
		Prize: X=8400, Y=5400

		Button A: X+26, Y+66
		Button B: X+67, Y+21
		Prize: X=12748, Y=12176

		Button A: X+17, Y+86
		Button B: X+84, Y+37
		Prize: X=7870, Y=6450

		Button A: X+69, Y+23
		Button B: X+27, Y+71
		Prize: X=18641, Y=10279
	" };
	assert_eq!(part1(INPUT).unwrap(), 480);

	let winnable = parsing::machines_from_str(INPUT).unwrap()
		.into_iter()
		.map(|mut machine| {
			machine.prize = machine.prize.map(|p| p + 10_000_000_000_000);
			machine.tokens(i64::MAX).is_some()
		})
		.collect::<Vec<_>>();
	assert_eq!(winnable, [false, true, false, true]);

	assert_eq!(parsing::machines_from_str("Button A: X+1, Y+2\nButton B: X-1, Y+2\n").unwrap_err().line, 2);
	assert!(parsing::machines_from_str("Button A: X+1, Y+2\n").is_err());
}
