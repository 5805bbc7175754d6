// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::parsing::{lines_with, Error, ErrorKind};


#[derive(Clone, Copy, PartialEq, Eq)]
enum Spring { Operational, Damaged, Unknown }

struct Record {
	springs: Vec<Spring>,
	groups: Vec<usize>,
}

impl Record {
	fn unfolded(&self, times: usize) -> Self {
		let mut springs = Vec::with_capacity(self.springs.len() * times + times);
		for i in 0..times {
			if i > 0 { springs.push(Spring::Unknown) }
			springs.extend_from_slice(&self.springs);
		}
		Record { springs, groups: self.groups.repeat(times) }
	}

	fn arrangements(&self) -> u64 {
		let mut memo = HashMap::new();
		count(&self.springs, &self.groups, &mut memo)
	}
}

/// Counts the ways to fit `groups` into `springs`, memoized on the remaining lengths.
fn count(springs: &[Spring], groups: &[usize], memo: &mut HashMap<(usize, usize), u64>) -> u64 {
	use Spring::*;

	let Some((&group, rest_groups)) = groups.split_first() else {
		return u64::from(!springs.contains(&Damaged))
	};
	if springs.len() < groups.iter().sum::<usize>() + groups.len() - 1 { return 0 }

	let key = (springs.len(), groups.len());
	if let Some(&n) = memo.get(&key) { return n }

	let mut n = 0;
	if springs[0] != Damaged {
		n += count(&springs[1..], groups, memo);
	}
	if springs[0] != Operational
		&& !springs[..group].contains(&Operational)
		&& springs.get(group) != Some(&Damaged)
	{
		n += count(springs.get(group + 1..).unwrap_or_default(), rest_groups, memo);
	}

	memo.insert(key, n);
	n
}

fn records_from_str(s: &str) -> Result<Vec<Record>, Error> {
	lines_with(s, |line| {
		let (springs, groups) = line.split_once(' ').ok_or(ErrorKind::Format("expected `<springs> <groups>`"))?;
		let springs = springs.chars()
			.map(|chr| match chr {
				'.' => Ok(Spring::Operational),
				'#' => Ok(Spring::Damaged),
				'?' => Ok(Spring::Unknown),
				invalid => Err(ErrorKind::Char(invalid)),
			})
			.collect::<Result<_, _>>()?;
		let groups = groups.split(',').map(str::parse::<usize>).collect::<Result<Vec<_>, _>>()?;
		if groups.contains(&0) { return Err(ErrorKind::Format("empty group")) }
		Ok(Record { springs, groups })
	})
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	Ok(records_from_str(input)?.iter().map(Record::arrangements).sum())
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	Ok(records_from_str(input)?.iter().map(|record| record.unfolded(5).arrangements()).sum())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		???.### 1,1,3
		.??..??...?##. 1,1,3
		?#?#?#?#?#?#?#? 1,3,1,6
		????.#...#... 4,1,1
		????.######..#####. 1,6,5
		?###???????? 3,2,1
	" };
	let arrangements = records_from_str(INPUT).unwrap().iter().map(Record::arrangements).collect::<Vec<_>>();
	assert_eq!(arrangements, [1, 4, 1, 1, 4, 10]);
	assert_eq!(part1(INPUT).unwrap(), 21);
	assert_eq!(part2(INPUT).unwrap(), 525152);
}
