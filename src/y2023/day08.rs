// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use log::debug;
use crate::parsing::Error;


type Node = [u8; 3];

struct Network {
	/// `true` for left.
	instrs: Vec<bool>,
	nodes: HashMap<Node, [Node; 2]>,
}

impl Network {
	fn steps(&self, from: Node, is_end: impl Fn(&Node) -> bool) -> Result<u64, Error> {
		// Past this many steps, some (node, instruction) state must have repeated.
		let limit = self.instrs.len() * self.nodes.len();
		let mut node = from;
		let mut steps = 0;
		loop {
			if steps > 0 && is_end(&node) { return Ok(steps as u64) }
			if steps > limit { return Err(Error::unsolvable("walking in circles")) }
			let [l, r] = self.nodes.get(&node).ok_or(Error::unsolvable("walked onto an unknown node"))?;
			node = if self.instrs[steps % self.instrs.len()] { *l } else { *r };
			steps += 1;
		}
	}
}


pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	let network = parsing::network_from_str(input)?;
	network.steps(*b"AAA", |node| node == b"ZZZ")
}


pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	let network = parsing::network_from_str(input)?;
	// Every ghost ends up looping with the period in which it first hits a `..Z` node.
	let mut starts = network.nodes.keys().filter(|node| node[2] == b'A').copied().collect::<Vec<_>>();
	starts.sort_unstable();
	starts.into_iter().try_fold(1, |acc, start| {
		let period = network.steps(start, |node| node[2] == b'Z')?;
		debug!("ghost from {} loops every {period} steps", String::from_utf8_lossy(&start));
		Ok(num_integer::lcm(acc, period))
	})
}


mod parsing {
	use std::collections::HashMap;
	use crate::parsing::{lines_with, sections, Error, ErrorKind};
	use super::{Network, Node};

	fn node_from_str(s: &str) -> Result<Node, ErrorKind> {
		s.as_bytes().try_into().map_err(|_| ErrorKind::Format("expected a three-letter node"))
	}

	pub(super) fn network_from_str(s: &str) -> Result<Network, Error> {
		let (instrs, nodes, nodes_line) = sections(s)?;
		let instrs = instrs.trim().chars()
			.enumerate()
			.map(|(c, chr)| match chr {
				'L' => Ok(true),
				'R' => Ok(false),
				invalid => Err(Error::at(1, c + 1, ErrorKind::Char(invalid))),
			})
			.collect::<Result<Vec<_>, _>>()?;
		if instrs.is_empty() { return Err(Error::new(1, ErrorKind::Empty)) }

		let nodes = lines_with(nodes, |line| {
			let (node, next) = line.split_once(" = ").ok_or(ErrorKind::Format("expected `=`"))?;
			let (l, r) = next.strip_prefix('(')
				.and_then(|next| next.strip_suffix(')'))
				.and_then(|next| next.split_once(", "))
				.ok_or(ErrorKind::Format("expected `(<left>, <right>)`"))?;
			Ok((node_from_str(node)?, [node_from_str(l)?, node_from_str(r)?]))
		}).map_err(|e| Error { line: e.line + nodes_line - 1, ..e })?;
		Ok(Network { instrs, nodes: HashMap::from_iter(nodes) })
	}
}


#[test]
fn tests() {
	use indoc::indoc;
	assert_eq!(part1(indoc! { "
		RL

		AAA = (BBB, CCC)
		BBB = (DDD, EEE)
		CCC = (ZZZ, GGG)
		DDD = (DDD, DDD)
		EEE = (EEE, EEE)
		GGG = (GGG, GGG)
		ZZZ = (ZZZ, ZZZ)
	" }).unwrap(), 2);
	assert_eq!(part1(indoc! { "
		LLR

		AAA = (BBB, BBB)
		BBB = (AAA, ZZZ)
		ZZZ = (ZZZ, ZZZ)
	" }).unwrap(), 6);
	assert_eq!(part2(indoc! { "
		LR

		11A = (11B, XXX)
		11B = (XXX, 11Z)
		11Z = (11B, XXX)
		22A = (22B, XXX)
		22B = (22C, 22C)
		22C = (22Z, 22Z)
		22Z = (22B, 22B)
		XXX = (XXX, XXX)
	" }).unwrap(), 6);
	assert!(part1("LX\n\nAAA = (AAA, AAA)\n").is_err());
	assert!(part1("L\n\nAAA = (AAA, AAA)\n").is_err());
}
