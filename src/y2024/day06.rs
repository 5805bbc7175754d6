// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Dir, Grid, Pos}, parsing::Error};


struct Lab {
	obstructed: Grid<bool>,
	guard: (Pos, Dir),
}

enum Patrol {
	/// Every tile visited before walking off the map.
	Leaves(Grid<bool>),
	Loops,
}

impl Lab {
	fn patrol(&self, extra_obstruction: Option<Pos>) -> Patrol {
		let mut visited = self.obstructed.map(|_| 0u8);
		let (mut pos, mut dir) = self.guard;
		loop {
			let seen = &mut visited[pos];
			if *seen & 1 << dir as u8 != 0 { return Patrol::Loops }
			*seen |= 1 << dir as u8;

			let Some(next) = self.obstructed.step(pos, dir) else {
				return Patrol::Leaves(visited.map(|&dirs| dirs != 0))
			};
			if self.obstructed[next] || extra_obstruction == Some(next) {
				dir = dir.turn_right();
			} else {
				pos = next;
			}
		}
	}

	fn visited(&self) -> Result<Grid<bool>, Error> {
		match self.patrol(None) {
			Patrol::Leaves(visited) => Ok(visited),
			Patrol::Loops => Err(Error::unsolvable("guard never leaves")),
		}
	}
}

fn lab_from_str(s: &str) -> Result<Lab, Error> {
	let tiles = Grid::from_str_with(s, |chr| match chr {
		'.' | '#' | '^' | '>' | 'v' | '<' => Ok(chr),
		invalid => Err(invalid),
	})?;
	let mut guards = tiles.iter().filter_map(|(pos, &chr)| Dir::try_from(chr).ok().map(|dir| (pos, dir)));
	let (Some(guard), None) = (guards.next(), guards.next()) else {
		return Err(Error::unsolvable("expected exactly one guard"))
	};
	Ok(Lab { obstructed: tiles.map(|&chr| chr == '#'), guard })
}


pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	Ok(lab_from_str(input)?.visited()?.iter().filter(|(_, &visited)| visited).count())
}


pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	let lab = lab_from_str(input)?;
	// Only obstructions on the guard’s original route can change anything.
	Ok(lab.visited()?
		.iter()
		.filter(|&(pos, &visited)| visited && pos != lab.guard.0)
		.filter(|&(pos, _)| matches!(lab.patrol(Some(pos)), Patrol::Loops))
		.count())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		....#.....
		.........#
		..........
		..#.......
		.......#..
		..........
		.#..^.....
		........#.
		#.........
		......#...
	" };
	assert_eq!(part1(INPUT).unwrap(), 41);
	assert_eq!(part2(INPUT).unwrap(), 6);
	assert!(part1("^#\n").is_ok());
	assert!(part1(".#.\n#^#\n.#.\n").is_err());
}
