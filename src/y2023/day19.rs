// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{collections::HashMap, ops::Range};
use crate::parsing::Error;


/// Ratings for `x`, `m`, `a` & `s`.
type Part = [u64; 4];

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Target<'a> { Accept, Reject, Workflow(&'a str) }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Cond { category: usize, less: bool, value: u64 }

impl Cond {
	fn holds(&self, part: &Part) -> bool {
		let rating = part[self.category];
		if self.less { rating < self.value } else { rating > self.value }
	}

	/// Splits `range` into its matching & non-matching parts.
	fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
		let clamp = |v: u64| v.clamp(range.start, range.end);
		if self.less {
			let at = clamp(self.value);
			(range.start..at, at..range.end)
		} else {
			let at = clamp(self.value + 1);
			(at..range.end, range.start..at)
		}
	}
}

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Rule<'a> { cond: Option<Cond>, target: Target<'a> }

type Workflows<'a> = HashMap<&'a str, Vec<Rule<'a>>>;

const START: Target<'static> = Target::Workflow("in");

fn accepts(workflows: &Workflows, part: &Part) -> Result<bool, Error> {
	let mut target = START;
	for _ in 0..=workflows.len() {
		let name = match target {
			Target::Accept => return Ok(true),
			Target::Reject => return Ok(false),
			Target::Workflow(name) => name,
		};
		let rules = workflows.get(name).ok_or(Error::unsolvable("unknown workflow"))?;
		target = rules.iter()
			.find(|rule| rule.cond.map_or(true, |cond| cond.holds(part)))
			.ok_or(Error::unsolvable("workflow without fallback"))?
			.target;
	}
	Err(Error::unsolvable("workflows loop"))
}

fn count_accepted(workflows: &Workflows, target: Target, mut ranges: [Range<u64>; 4], depth: usize) -> Result<u64, Error> {
	let name = match target {
		Target::Accept => return Ok(ranges.iter().map(|r| r.end - r.start).product()),
		Target::Reject => return Ok(0),
		Target::Workflow(name) => name,
	};
	if depth > workflows.len() { return Err(Error::unsolvable("workflows loop")) }
	let rules = workflows.get(name).ok_or(Error::unsolvable("unknown workflow"))?;

	let mut accepted = 0;
	for rule in rules {
		if ranges.iter().any(|r| r.is_empty()) { break }
		let Some(cond) = rule.cond else {
			return Ok(accepted + count_accepted(workflows, rule.target, ranges, depth + 1)?)
		};
		let (matching, rest) = cond.split(&ranges[cond.category]);
		let mut matching_ranges = ranges.clone();
		matching_ranges[cond.category] = matching;
		if !matching_ranges[cond.category].is_empty() {
			accepted += count_accepted(workflows, rule.target, matching_ranges, depth + 1)?;
		}
		ranges[cond.category] = rest;
	}
	Ok(accepted)
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let (workflows, parts) = parsing::system_from_str(input)?;
	let mut sum = 0;
	for part in &parts {
		if accepts(&workflows, part)? { sum += part.iter().sum::<u64>() }
	}
	Ok(sum)
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let (workflows, _) = parsing::system_from_str(input)?;
	count_accepted(&workflows, START, std::array::from_fn(|_| 1..4001), 0)
}


mod parsing {
	use crate::parsing::{lines_with, sections, Error, ErrorKind};
	use super::{Cond, Part, Rule, Target, Workflows};

	fn category(chr: char) -> Result<usize, ErrorKind> {
		"xmas".find(chr).ok_or(ErrorKind::Char(chr))
	}

	fn target_from_str(s: &str) -> Target<'_> {
		match s {
			"A" => Target::Accept,
			"R" => Target::Reject,
			name => Target::Workflow(name),
		}
	}

	fn rule_from_str(s: &str) -> Result<Rule<'_>, ErrorKind> {
		let Some((cond, target)) = s.split_once(':') else {
			return Ok(Rule { cond: None, target: target_from_str(s) })
		};
		let mut chars = cond.chars();
		let category = category(chars.next().ok_or(ErrorKind::Format("expected a category"))?)?;
		let less = match chars.next() {
			Some('<') => true,
			Some('>') => false,
			_ => return Err(ErrorKind::Format("expected `<` or `>`")),
		};
		let value = chars.as_str().parse::<u64>()?;
		Ok(Rule { cond: Some(Cond { category, less, value }), target: target_from_str(target) })
	}

	pub(super) fn system_from_str(s: &str) -> Result<(Workflows<'_>, Vec<Part>), Error> {
		let (workflows, parts, parts_line) = sections(s)?;
		let workflows = lines_with(workflows, |line| {
			let (name, rules) = line.strip_suffix('}')
				.and_then(|line| line.split_once('{'))
				.ok_or(ErrorKind::Format("expected `<name>{<rules>}`"))?;
			let rules = rules.split(',').map(rule_from_str).collect::<Result<Vec<_>, _>>()?;
			if rules.last().map_or(true, |rule| rule.cond.is_some()) {
				return Err(ErrorKind::Format("expected a fallback rule last"))
			}
			Ok((name, rules))
		})?.into_iter().collect();

		let parts = lines_with(parts, |line| {
			let ratings = line.strip_prefix('{')
				.and_then(|line| line.strip_suffix('}'))
				.ok_or(ErrorKind::Format("expected `{<ratings>}`"))?;
			let mut part = Part::default();
			for rating in ratings.split(',') {
				let (cat, value) = rating.split_once('=').ok_or(ErrorKind::Format("expected `<category>=<rating>`"))?;
				let mut cat = cat.chars();
				match (cat.next(), cat.next()) {
					(Some(chr), None) => part[category(chr)?] = value.parse()?,
					_ => return Err(ErrorKind::Format("expected a single-letter category")),
				}
			}
			Ok(part)
		}).map_err(|e| Error { line: e.line + parts_line - 1, ..e })?;

		Ok((workflows, parts))
	}

	#[test]
	fn tests() {
		let (workflows, parts) = system_from_str(super::tests::INPUT).unwrap();
		assert_eq!(workflows.len(), 11);
		assert_eq!(workflows["pv"], [
			Rule { cond: Some(Cond { category: 2, less: false, value: 1716 }), target: Target::Reject },
			Rule { cond: None, target: Target::Accept },
		]);
		assert_eq!(parts[0], [787, 2655, 1222, 2876]);
		assert_eq!(system_from_str("in{x<1:A}\n\n{x=1}\n").unwrap_err().line, 1);
		assert_eq!(system_from_str("in{A}\n\n{q=1}\n").unwrap_err().line, 3);
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	pub(super) const INPUT: &str = indoc::indoc! { "
		px{a<2006:qkq,m>2090:A,rfg}
		pv{a>1716:R,A}
		lnx{m>1548:A,A}
		rfg{s<537:gd,x>2440:R,A}
		qs{s>3448:A,lnx}
		qkq{x<1416:A,crn}
		crn{x>2662:A,R}
		in{s<1351:px,qqz}
		qqz{s>2770:qs,m<1801:hdj,R}
		gd{a>3333:R,R}
		hdj{m>838:A,pv}

		{x=787,m=2655,a=1222,s=2876}
		{x=1679,m=44,a=2067,s=496}
		{x=2036,m=264,a=79,s=2244}
		{x=2461,m=1339,a=466,s=291}
		{x=2127,m=1623,a=2188,s=1013}
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 19114);
		assert_eq!(part2(INPUT).unwrap(), 167409079868000);
	}
}
