// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{Error, ErrorKind};


fn hash(s: &str) -> u8 {
	s.bytes().fold(0u8, |acc, b| acc.wrapping_add(b).wrapping_mul(17))
}

fn steps(input: &str) -> impl Iterator<Item = &str> {
	input.trim_end_matches('\n').split(',')
}


pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	if input.trim().is_empty() { return Err(Error::new(1, ErrorKind::Empty)) }
	Ok(steps(input).map(|step| u32::from(hash(step))).sum())
}


enum Op<'a> {
	Remove(&'a str),
	Insert(&'a str, u8),
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let mut boxes: [Vec<(&str, u8)>; 256] = std::array::from_fn(|_| vec![]);

	for step in steps(input) {
		let op = if let Some(label) = step.strip_suffix('-') {
			Op::Remove(label)
		} else if let Some((label, focal)) = step.split_once('=') {
			match focal.parse() {
				Ok(focal @ 1..=9) => Op::Insert(label, focal),
				Ok(_) => return Err(Error::format(1, "focal length out of range")),
				Err(e) => return Err(Error::new(1, ErrorKind::Int(e))),
			}
		} else {
			return Err(Error::format(1, "expected `<label>-` or `<label>=<focal length>`"))
		};

		match op {
			Op::Remove(label) => boxes[hash(label) as usize].retain(|&(l, _)| l != label),
			Op::Insert(label, focal) => {
				let lenses = &mut boxes[hash(label) as usize];
				match lenses.iter_mut().find(|(l, _)| *l == label) {
					Some(lens) => lens.1 = focal,
					None => lenses.push((label, focal)),
				}
			}
		}
	}

	Ok(boxes.iter()
		.zip(1..)
		.flat_map(|(lenses, b)| lenses.iter()
			.zip(1..)
			.map(move |(&(_, focal), slot)| b * slot * usize::from(focal)))
		.sum())
}


#[test]
fn tests() {
	const INPUT: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";
	assert_eq!(hash("HASH"), 52);
	assert_eq!(
		INPUT.trim_end().split(',').map(hash).collect::<Vec<_>>(),
		[30, 253, 97, 47, 14, 180, 9, 197, 48, 214, 231],
	);
	assert_eq!(hash("rn"), 0);
	assert_eq!(hash("qp"), 1);
	assert_eq!(part1(INPUT).unwrap(), 1320);
	assert_eq!(part2(INPUT).unwrap(), 145);
	assert!(part2("rn=x").is_err());
}
