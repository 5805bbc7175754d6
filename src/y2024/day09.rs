// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{Error, ErrorKind};


/// Alternating file & free-space lengths.
fn disk_map_from_str(s: &str) -> Result<Vec<usize>, Error> {
	let s = s.trim_end();
	if s.is_empty() { return Err(Error::new(1, ErrorKind::Empty)) }
	s.chars()
		.enumerate()
		.map(|(c, chr)| chr.to_digit(10)
			.map(|d| d as usize)
			.ok_or(Error::at(1, c + 1, ErrorKind::Char(chr))))
		.collect()
}

fn checksum(id: usize, start: usize, len: usize) -> usize {
	id * (start..start + len).sum::<usize>()
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	let disk_map = disk_map_from_str(input)?;
	let mut blocks = disk_map.iter()
		.enumerate()
		.flat_map(|(i, &len)| std::iter::repeat((i % 2 == 0).then_some(i / 2)).take(len))
		.collect::<Vec<_>>();

	let (mut free, mut last) = (0, blocks.len());
	loop {
		while free < last && blocks[free].is_some() { free += 1 }
		while last > free && blocks[last - 1].is_none() { last -= 1 }
		if free + 1 >= last { break }
		blocks.swap(free, last - 1);
	}

	Ok(blocks.iter()
		.enumerate()
		.map(|(pos, id)| id.map_or(0, |id| pos * id))
		.sum())
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let disk_map = disk_map_from_str(input)?;
	let mut files = vec![];
	let mut spans = vec![];
	let mut pos = 0;
	for (i, &len) in disk_map.iter().enumerate() {
		if i % 2 == 0 { files.push((pos, len)) } else { spans.push((pos, len)) }
		pos += len;
	}

	// Files only ever move left, so the space they leave behind is never of use.
	for file in files.iter_mut().rev() {
		let Some(span) = spans.iter_mut()
			.take_while(|span| span.0 < file.0)
			.find(|span| span.1 >= file.1)
		else { continue };
		file.0 = span.0;
		span.0 += file.1;
		span.1 -= file.1;
	}

	Ok(files.iter()
		.enumerate()
		.map(|(id, &(start, len))| checksum(id, start, len))
		.sum())
}


#[test]
fn tests() {
	const INPUT: &str = "2333133121414131402\n";
	assert_eq!(part1(INPUT).unwrap(), 1928);
	assert_eq!(part2(INPUT).unwrap(), 2858);
	assert_eq!(part1("12345").unwrap(), 60);
	assert_eq!(part1("12a").unwrap_err().column, Some(3));
}
