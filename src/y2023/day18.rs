// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::Dir, parsing::{lines_with, Error, ErrorKind}};


struct Instr {
	dir: Dir,
	len: i64,
	/// The “color”, which really encodes another instruction.
	color: (Dir, i64),
}

/// Cubic meters dug out: the polygon’s interior (Pick’s theorem on the shoelace area) plus its trench.
fn lagoon_size(plan: impl Iterator<Item = (Dir, i64)>) -> i64 {
	let mut pos = [0i64; 2];
	let mut twice_area = 0;
	let mut trench = 0;
	for (dir, len) in plan {
		let delta = dir.delta();
		let next = [pos[0] + delta[0] as i64 * len, pos[1] + delta[1] as i64 * len];
		twice_area += pos[1] * next[0] - next[1] * pos[0];
		trench += len;
		pos = next;
	}
	twice_area.abs() / 2 + trench / 2 + 1
}

fn plan_from_str(s: &str) -> Result<Vec<Instr>, Error> {
	lines_with(s, |line| {
		let mut parts = line.split(' ');
		let (Some(dir), Some(len), Some(color), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
			return Err(ErrorKind::Format("expected `<dir> <len> (#<color>)`"))
		};
		let dir = match dir {
			"U" => Dir::Up,
			"D" => Dir::Down,
			"L" => Dir::Left,
			"R" => Dir::Right,
			_ => return Err(ErrorKind::Format("expected `U`, `D`, `L` or `R`")),
		};
		let color = color.strip_prefix("(#")
			.and_then(|c| c.strip_suffix(')'))
			.filter(|c| c.len() == 6 && c.is_ascii())
			.ok_or(ErrorKind::Format("expected `(#<six hex digits>)`"))?;
		let color_dir = match color.as_bytes()[5] {
			b'0' => Dir::Right,
			b'1' => Dir::Down,
			b'2' => Dir::Left,
			b'3' => Dir::Up,
			invalid => return Err(ErrorKind::Char(invalid as char)),
		};
		let color_len = i64::from_str_radix(&color[..5], 16)?;
		Ok(Instr { dir, len: len.parse()?, color: (color_dir, color_len) })
	})
}


pub(crate) fn part1(input: &str) -> Result<i64, Error> {
	Ok(lagoon_size(plan_from_str(input)?.iter().map(|instr| (instr.dir, instr.len))))
}


pub(crate) fn part2(input: &str) -> Result<i64, Error> {
	Ok(lagoon_size(plan_from_str(input)?.iter().map(|instr| instr.color)))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		R 6 (#70c710)
		D 5 (#0dc571)
		L 2 (#5713f0)
		D 2 (#d2c081)
		R 2 (#59c680)
		D 2 (#411b91)
		L 5 (#8ceee2)
		U 2 (#caa173)
		L 1 (#1b58a2)
		U 2 (#caa171)
		R 2 (#7807d2)
		U 3 (#a77fa3)
		L 2 (#015232)
		U 2 (#7a21e3)
	" };
	assert_eq!(part1(INPUT).unwrap(), 62);
	assert_eq!(part2(INPUT).unwrap(), 952408144115);
}
