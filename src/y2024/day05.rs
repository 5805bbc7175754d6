// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{cmp::Ordering, collections::HashSet};
use crate::parsing::{lines_with, sections, Error, ErrorKind};


/// Pairs `(before, after)`.
type Rules = HashSet<(u32, u32)>;

fn order(rules: &Rules, l: u32, r: u32) -> Ordering {
	if rules.contains(&(l, r)) { Ordering::Less }
	else if rules.contains(&(r, l)) { Ordering::Greater }
	else { Ordering::Equal }
}

fn is_ordered(rules: &Rules, update: &[u32]) -> bool {
	update.iter().enumerate().all(|(i, &l)| update[i + 1..].iter().all(|&r| !rules.contains(&(r, l))))
}

fn middle(update: &[u32]) -> u32 {
	update[update.len() / 2]
}

fn manual_from_str(s: &str) -> Result<(Rules, Vec<Vec<u32>>), Error> {
	let (rules, updates, updates_line) = sections(s)?;
	let rules = lines_with(rules, |line| {
		let (l, r) = line.split_once('|').ok_or(ErrorKind::Format("expected `<page>|<page>`"))?;
		Ok((l.parse::<u32>()?, r.parse::<u32>()?))
	})?.into_iter().collect();
	let updates = lines_with(updates, |line| {
		let update = line.split(',').map(str::parse::<u32>).collect::<Result<Vec<_>, _>>()?;
		Ok(update)
	}).map_err(|e| Error { line: e.line + updates_line - 1, ..e })?;
	Ok((rules, updates))
}


pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	let (rules, updates) = manual_from_str(input)?;
	Ok(updates.iter().filter(|update| is_ordered(&rules, update)).map(|update| middle(update)).sum())
}


pub(crate) fn part2(input: &str) -> Result<u32, Error> {
	let (rules, updates) = manual_from_str(input)?;
	Ok(updates.into_iter()
		.filter(|update| !is_ordered(&rules, update))
		.map(|mut update| {
			update.sort_by(|&l, &r| order(&rules, l, r));
			middle(&update)
		})
		.sum())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		47|53
		97|13
		97|61
		97|47
		75|29
		61|13
		75|53
		29|13
		97|29
		53|29
		61|53
		97|53
		61|29
		47|13
		75|47
		97|75
		47|61
		75|61
		47|29
		75|13
		53|13

		75,47,61,53,29
		97,61,53,29,13
		75,29,13
		75,97,47,61,53
		61,13,29
		97,13,75,29,47
	" };
	assert_eq!(part1(INPUT).unwrap(), 143);
	assert_eq!(part2(INPUT).unwrap(), 123);
	assert_eq!(part1("1|2\n\n1,x\n").unwrap_err().line, 3);
}
