// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::parsing::{Error, ErrorKind};


/// `[row, col]`, with rows growing downwards.
pub(crate) type Pos = [usize; 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Dir { Up, Right, Down, Left }

impl Dir {
	/// Clockwise, starting up.
	pub(crate) const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

	pub(crate) fn turn_right(self) -> Self {
		Self::ALL[(self as usize + 1) % 4]
	}

	pub(crate) fn inv(self) -> Self {
		Self::ALL[(self as usize + 2) % 4]
	}

	pub(crate) fn is_vertical(self) -> bool {
		matches!(self, Dir::Up | Dir::Down)
	}

	pub(crate) fn delta(self) -> [isize; 2] {
		use Dir::*;
		match self { Up => [-1, 0], Right => [0, 1], Down => [1, 0], Left => [0, -1] }
	}
}

impl TryFrom<char> for Dir {
	type Error = char;
	fn try_from(value: char) -> Result<Self, Self::Error> {
		match value {
			'U' | '^' | 'N' => Ok(Dir::Up),
			'R' | '>' | 'E' => Ok(Dir::Right),
			'D' | 'v' | 'S' => Ok(Dir::Down),
			'L' | '<' | 'W' => Ok(Dir::Left),
			invalid => Err(invalid),
		}
	}
}


/// A rectangular map, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Grid<T> {
	cells: Vec<T>,
	width: usize,
}

impl<T> Grid<T> {
	pub(crate) fn width(&self) -> usize {
		self.width
	}

	pub(crate) fn height(&self) -> usize {
		if self.width == 0 { 0 } else { self.cells.len() / self.width }
	}

	pub(crate) fn contains(&self, pos: Pos) -> bool {
		pos[0] < self.height() && pos[1] < self.width
	}

	/// The position `delta` away, if still on the map.
	pub(crate) fn offset(&self, pos: Pos, delta: [isize; 2]) -> Option<Pos> {
		let row = pos[0].checked_add_signed(delta[0])?;
		let col = pos[1].checked_add_signed(delta[1])?;
		self.contains([row, col]).then_some([row, col])
	}

	pub(crate) fn step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
		self.offset(pos, dir.delta())
	}

	pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
		let width = self.width;
		(0..self.height()).flat_map(move |r| (0..width).map(move |c| [r, c]))
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
		self.positions().zip(self.cells.iter())
	}

	pub(crate) fn neighbors4(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
		Dir::ALL.into_iter().filter_map(move |dir| self.step(pos, dir))
	}

	/// Including diagonals.
	pub(crate) fn neighbors8(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
		const DELTAS: [[isize; 2]; 8] = [
			[-1, -1], [-1, 0], [-1, 1],
			[0, -1], [0, 1],
			[1, -1], [1, 0], [1, 1],
		];
		DELTAS.into_iter().filter_map(move |delta| self.offset(pos, delta))
	}

	pub(crate) fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Pos> {
		self.iter().find_map(|(pos, t)| pred(t).then_some(pos))
	}

	pub(crate) fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
		Grid { cells: self.cells.iter().map(f).collect(), width: self.width }
	}

	pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> {
		// `max(1)` keeps `chunks` happy on empty grids (which have no cells anyway)
		self.cells.chunks(self.width.max(1))
	}

	pub(crate) fn column(&self, col: usize) -> impl Iterator<Item = &T> {
		self.cells.iter().skip(col).step_by(self.width.max(1))
	}

	pub(crate) fn transposed(&self) -> Self where T: Clone {
		let height = self.height();
		Grid {
			cells: (0..self.width).flat_map(|c| self.column(c).cloned()).collect(),
			width: height,
		}
	}
}

impl<T> std::ops::Index<Pos> for Grid<T> {
	type Output = T;
	fn index(&self, pos: Pos) -> &Self::Output {
		assert!(self.contains(pos), "{pos:?} out of bounds");
		&self.cells[pos[0] * self.width + pos[1]]
	}
}

impl<T> std::ops::IndexMut<Pos> for Grid<T> {
	fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
		assert!(self.contains(pos), "{pos:?} out of bounds");
		&mut self.cells[pos[0] * self.width + pos[1]]
	}
}


impl<T> Grid<T> {
	/// Parses a character map starting at (1-based) `first_line`, rejecting
	/// ragged rows and any character `f` refuses.
	pub(crate) fn from_str_at(
		s: &str,
		first_line: usize,
		mut f: impl FnMut(char) -> Result<T, char>,
	) -> Result<Self, Error> {
		let mut lines = s.lines().enumerate().peekable();
		let Some(width) = lines.peek().map(|(_, line)| line.chars().count()) else {
			return Err(Error::new(first_line, ErrorKind::Empty))
		};
		let mut cells = Vec::with_capacity(width * s.len() / (width + 1).max(1));
		for (l, line) in lines {
			let mut len = 0;
			for (c, chr) in line.chars().enumerate() {
				cells.push(f(chr).map_err(|chr| Error::at(first_line + l, c + 1, ErrorKind::Char(chr)))?);
				len += 1;
			}
			if len != width {
				return Err(Error::at(first_line + l, len + 1, ErrorKind::Format("ragged row")))
			}
		}
		if width == 0 { return Err(Error::new(first_line, ErrorKind::Empty)) }
		Ok(Grid { cells, width })
	}

	pub(crate) fn from_str_with(s: &str, f: impl FnMut(char) -> Result<T, char>) -> Result<Self, Error> {
		Self::from_str_at(s, 1, f)
	}
}

impl Grid<u8> {
	/// Keeps every (ASCII) character as is.
	pub(crate) fn from_chars(s: &str) -> Result<Self, Error> {
		Self::from_str_with(s, |chr| if chr.is_ascii() { Ok(chr as u8) } else { Err(chr) })
	}
}

impl std::fmt::Display for Grid<u8> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for (r, row) in self.rows().enumerate() {
			if r > 0 { f.write_char('\n')?; }
			for &b in row { f.write_char(b as char)?; }
		}
		Ok(())
	}
}


#[cfg(test)]
mod tests {
	use indoc::indoc;
	use super::*;

	#[test]
	fn tests() {
		let grid = Grid::from_chars(indoc! { "
			ab.
			.#c
		" }).unwrap();
		assert_eq!((grid.width(), grid.height()), (3, 2));
		assert_eq!(grid[[1, 2]], b'c');
		assert!(grid.contains([1, 2]) && !grid.contains([2, 0]));
		assert_eq!(grid.offset([1, 0], [-1, 2]), Some([0, 2]));
		assert_eq!(grid.offset([0, 0], [0, -1]), None);
		assert_eq!(grid.find(|&b| b == b'#'), Some([1, 1]));
		assert_eq!(grid.neighbors4([0, 0]).collect::<Vec<_>>(), [[0, 1], [1, 0]]);
		assert_eq!(grid.neighbors8([1, 1]).count(), 5);
		assert_eq!(grid.step([0, 2], Dir::Right), None);
		assert_eq!(grid.step([0, 2], Dir::Down), Some([1, 2]));
		assert_eq!(grid.transposed().to_string(), "a.\nb#\n.c");
		assert_eq!(grid.column(1).copied().collect::<Vec<_>>(), b"b#");

		assert_eq!(Grid::from_chars("ab\nc").unwrap_err().column, Some(2));
		assert_eq!(Grid::from_str_with("a?", |c| if c == '?' { Err(c) } else { Ok(()) })
			.unwrap_err().to_string(), "1:2: unexpected character '?'");

		assert_eq!(Dir::Up.turn_right(), Dir::Right);
		assert_eq!(Dir::Left.inv(), Dir::Right);
		assert_eq!(Dir::try_from('v'), Ok(Dir::Down));
	}
}
