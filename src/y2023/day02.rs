// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::Error;


/// Red, green & blue counts.
#[derive(Clone, Copy, Default)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct CubeSet([u32; 3]);

impl CubeSet {
	fn max(self, other: Self) -> Self {
		CubeSet(std::array::from_fn(|i| self.0[i].max(other.0[i])))
	}

	fn fits_in(&self, bag: &Self) -> bool {
		self.0.iter().zip(bag.0).all(|(&n, max)| n <= max)
	}

	fn power(&self) -> u32 {
		self.0.iter().product()
	}
}

struct Game {
	id: u32,
	draws: Vec<CubeSet>,
}

impl Game {
	fn minimal_bag(&self) -> CubeSet {
		self.draws.iter().fold(CubeSet::default(), |acc, &draw| acc.max(draw))
	}
}


pub(crate) fn part1(input: &str) -> Result<u32, Error> {
	const BAG: CubeSet = CubeSet([12, 13, 14]);
	Ok(parsing::games_from_str(input)?
		.into_iter()
		.filter(|game| game.draws.iter().all(|draw| draw.fits_in(&BAG)))
		.map(|game| game.id)
		.sum())
}


pub(crate) fn part2(input: &str) -> Result<u32, Error> {
	Ok(parsing::games_from_str(input)?
		.iter()
		.map(|game| game.minimal_bag().power())
		.sum())
}


mod parsing {
	use crate::parsing::{lines_with, Error, ErrorKind};
	use super::{CubeSet, Game};

	fn cube_set_from_str(s: &str) -> Result<CubeSet, ErrorKind> {
		let mut set = CubeSet::default();
		for count in s.split(", ") {
			let (n, color) = count.trim().split_once(' ').ok_or(ErrorKind::Format("expected count & color"))?;
			let idx = match color {
				"red" => 0,
				"green" => 1,
				"blue" => 2,
				_ => return Err(ErrorKind::Format("invalid color")),
			};
			set.0[idx] = n.parse()?;
		}
		Ok(set)
	}

	pub(super) fn games_from_str(s: &str) -> Result<Vec<Game>, Error> {
		lines_with(s, |line| {
			let (game, draws) = line.split_once(": ").ok_or(ErrorKind::Format("expected `Game <id>: …`"))?;
			let id = game.strip_prefix("Game ").ok_or(ErrorKind::Format("expected `Game <id>`"))?.parse::<u32>()?;
			let draws = draws.split("; ").map(cube_set_from_str).collect::<Result<_, _>>()?;
			Ok(Game { id, draws })
		})
	}

	#[test]
	fn tests() {
		let games = games_from_str(super::tests::INPUT).unwrap();
		assert_eq!(games.len(), 5);
		assert_eq!(games[2].draws[0], CubeSet([20, 8, 6]));
		assert!(games_from_str("Game 1: 3 purple").is_err());
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	pub(super) const INPUT: &str = indoc::indoc! { "
		Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
		Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
		Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
		Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
		Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 8);
		assert_eq!(part2(INPUT).unwrap(), 2286);
	}
}
