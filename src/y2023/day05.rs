// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::Range;
use crate::parsing::Error;


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct MapRange {
	src: Range<u64>,
	dst_start: u64,
}

/// Ranges sorted by source start; values outside any range map to themselves.
struct Map(Vec<MapRange>);

impl Map {
	fn convert(&self, value: u64) -> u64 {
		self.0.iter()
			.find(|r| r.src.contains(&value))
			.map_or(value, |r| value - r.src.start + r.dst_start)
	}

	/// Splits `range` along this map’s source ranges, returning the converted pieces.
	fn convert_range(&self, mut range: Range<u64>, out: &mut Vec<Range<u64>>) {
		for r in &self.0 {
			if range.is_empty() { return }
			if r.src.end <= range.start { continue }
			if r.src.start >= range.end { break }
			if range.start < r.src.start {
				out.push(range.start..r.src.start);
				range.start = r.src.start;
			}
			let end = range.end.min(r.src.end);
			out.push(range.start - r.src.start + r.dst_start..end - r.src.start + r.dst_start);
			range.start = end;
		}
		if !range.is_empty() { out.push(range) }
	}
}

struct Almanac {
	seeds: Vec<u64>,
	maps: Vec<Map>,
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let Almanac { seeds, maps } = parsing::almanac_from_str(input)?;
	seeds.into_iter()
		.map(|seed| maps.iter().fold(seed, |value, map| map.convert(value)))
		.min()
		.ok_or(Error::unsolvable("no seeds"))
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let Almanac { seeds, maps } = parsing::almanac_from_str(input)?;
	if seeds.len() % 2 != 0 { return Err(Error::format(1, "expected seed ranges in pairs")) }

	let mut ranges = seeds.chunks(2).map(|pair| pair[0]..pair[0] + pair[1]).collect::<Vec<_>>();
	let mut next = Vec::with_capacity(ranges.len());
	for map in &maps {
		for range in ranges.drain(..) { map.convert_range(range, &mut next) }
		std::mem::swap(&mut ranges, &mut next);
	}
	ranges.iter()
		.filter(|range| !range.is_empty())
		.map(|range| range.start)
		.min()
		.ok_or(Error::unsolvable("no seeds"))
}


mod parsing {
	use crate::parsing::{ints, Error, ErrorKind};
	use super::{Almanac, Map, MapRange};

	pub(super) fn almanac_from_str(s: &str) -> Result<Almanac, Error> {
		let mut blocks = s.split("\n\n");
		let seeds = blocks.next()
			.and_then(|line| line.strip_prefix("seeds:"))
			.ok_or(Error::format(1, "expected `seeds:`"))?;
		let seeds = ints(seeds).map_err(|e| Error::new(1, e))?;

		let mut line = 3;
		let mut maps = vec![];
		for block in blocks {
			let mut lines = block.lines();
			if !lines.next().is_some_and(|l| l.ends_with("map:")) {
				return Err(Error::format(line, "expected `<a>-to-<b> map:`"))
			}
			let mut ranges = lines
				.enumerate()
				.map(|(l, s)| match ints::<u64>(s) {
					Ok(ns) if ns.len() == 3 => Ok(MapRange { src: ns[1]..ns[1] + ns[2], dst_start: ns[0] }),
					Ok(_) => Err(Error::format(line + l + 1, "expected three numbers")),
					Err(e) => Err(Error::new(line + l + 1, e)),
				})
				.collect::<Result<Vec<_>, _>>()?;
			ranges.sort_by_key(|r| r.src.start);
			if ranges.windows(2).any(|w| w[0].src.end > w[1].src.start) {
				return Err(Error::new(line, ErrorKind::Format("overlapping source ranges")))
			}
			line += block.lines().count() + 1;
			maps.push(Map(ranges));
		}
		Ok(Almanac { seeds, maps })
	}

	#[test]
	fn tests() {
		let almanac = almanac_from_str(super::tests::INPUT).unwrap();
		assert_eq!(almanac.seeds, [79, 14, 55, 13]);
		assert_eq!(almanac.maps.len(), 7);
		assert_eq!(almanac.maps[0].0[0], MapRange { src: 50..98, dst_start: 52 });
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	pub(super) const INPUT: &str = indoc::indoc! { "
		seeds: 79 14 55 13

		seed-to-soil map:
		50 98 2
		52 50 48

		soil-to-fertilizer map:
		0 15 37
		37 52 2
		39 0 15

		fertilizer-to-water map:
		49 53 8
		0 11 42
		42 0 7
		57 7 4

		water-to-light map:
		88 18 7
		18 25 70

		light-to-temperature map:
		45 77 23
		81 45 19
		68 64 13

		temperature-to-humidity map:
		0 69 1
		1 0 69

		humidity-to-location map:
		60 56 37
		56 93 4
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 35);
		assert_eq!(part2(INPUT).unwrap(), 46);

		let map = Map(vec![MapRange { src: 10..20, dst_start: 100 }]);
		let mut out = vec![];
		map.convert_range(5..15, &mut out);
		assert_eq!(out, [5..10, 100..105]);
	}
}
