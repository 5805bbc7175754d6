// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{ints, Error};


#[derive(Clone, Copy)]
struct Race { time: u64, record: u64 }

impl Race {
	fn distance(&self, hold: u64) -> u64 {
		hold * (self.time - hold)
	}

	/// Counts the hold times `t` for which `t * (time - t) > record`, i.e. the
	/// integers strictly between the roots of `-t² + time·t - record`.
	fn ways_to_win(&self) -> u64 {
		let (time, record) = (self.time as f64, self.record as f64);
		let det = time * time - 4.0 * record;
		if det < 0.0 { return 0 }
		let sqrt_det = det.sqrt();

		// Floats only get close; settle the exact bounds with integer arithmetic.
		let mut lo = (((time - sqrt_det) / 2.0).floor().max(0.0) as u64).min(self.time);
		let mut hi = (((time + sqrt_det) / 2.0).ceil() as u64).min(self.time);
		while lo > 0 && self.distance(lo - 1) > self.record { lo -= 1 }
		while lo <= hi && self.distance(lo) <= self.record { lo += 1 }
		while hi < self.time && self.distance(hi + 1) > self.record { hi += 1 }
		while hi >= lo && self.distance(hi) <= self.record { hi -= 1 }

		if lo > hi { 0 } else { hi - lo + 1 }
	}
}

fn races_from_str(s: &str) -> Result<(Vec<u64>, Vec<u64>), Error> {
	let mut lines = s.lines();
	let mut numbers = |l: usize, prefix: &'static str| {
		lines.next()
			.and_then(|line| line.strip_prefix(prefix))
			.ok_or(Error::format(l, prefix))
			.and_then(|ns| ints(ns).map_err(|e| Error::new(l, e)))
	};
	let times = numbers(1, "Time:")?;
	let records = numbers(2, "Distance:")?;
	if times.len() != records.len() { return Err(Error::format(2, "expected a distance per time")) }
	Ok((times, records))
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let (times, records) = races_from_str(input)?;
	Ok(times.into_iter()
		.zip(records)
		.map(|(time, record)| Race { time, record }.ways_to_win())
		.product())
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let (times, records) = races_from_str(input)?;
	let concat = |ns: Vec<u64>| ns.into_iter().fold(0, |acc, n| {
		let mut shift = 10;
		while shift <= n { shift *= 10 }
		acc * shift + n
	});
	Ok(Race { time: concat(times), record: concat(records) }.ways_to_win())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Time:      7  15   30
		Distance:  9  40  200
	" };
	assert_eq!(Race { time: 7, record: 9 }.ways_to_win(), 4);
	assert_eq!(Race { time: 30, record: 200 }.ways_to_win(), 9);
	assert_eq!(Race { time: 3, record: 5 }.ways_to_win(), 0);
	assert_eq!(part1(INPUT).unwrap(), 288);
	assert_eq!(part2(INPUT).unwrap(), 71503);
}
