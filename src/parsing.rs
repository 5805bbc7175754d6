// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt, num::ParseIntError, str::FromStr};


#[derive(Debug)]
pub(crate) enum ErrorKind {
	Empty,
	Format(&'static str),
	Char(char),
	Int(ParseIntError),
}

/// Where (1-based) and why some puzzle input could not be used.
#[derive(Debug)]
pub(crate) struct Error {
	pub(crate) line: usize,
	pub(crate) column: Option<usize>,
	pub(crate) kind: ErrorKind,
}

impl Error {
	pub(crate) fn new(line: usize, kind: ErrorKind) -> Self {
		Error { line, column: None, kind }
	}

	pub(crate) fn at(line: usize, column: usize, kind: ErrorKind) -> Self {
		Error { line, column: Some(column), kind }
	}

	pub(crate) fn format(line: usize, what: &'static str) -> Self {
		Error::new(line, ErrorKind::Format(what))
	}

	/// For inputs that parse fine but admit no answer.
	pub(crate) fn unsolvable(what: &'static str) -> Self {
		Error::new(0, ErrorKind::Format(what))
	}
}

impl From<ParseIntError> for ErrorKind {
	fn from(err: ParseIntError) -> Self {
		ErrorKind::Int(err)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use ErrorKind::*;
		match self.line {
			0 => {},
			line => match self.column {
				Some(column) => write!(f, "{line}:{column}: ")?,
				None => write!(f, "line {line}: ")?,
			}
		}
		match &self.kind {
			Empty => f.write_str("unexpected empty input"),
			Format(what) => f.write_str(what),
			Char(chr) => write!(f, "unexpected character {chr:?}"),
			Int(err) => write!(f, "invalid number ({err})"),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match &self.kind {
			ErrorKind::Int(err) => Some(err),
			_ => None,
		}
	}
}


/// Parses every line, attaching the (1-based) line number to errors.
pub(crate) fn lines_with<'a, T>(
	s: &'a str,
	mut f: impl FnMut(&'a str) -> Result<T, ErrorKind>,
) -> Result<Vec<T>, Error> {
	let lines = s.lines()
		.enumerate()
		.map(|(l, line)| f(line).map_err(|kind| Error::new(l + 1, kind)))
		.collect::<Result<Vec<_>, _>>()?;
	if lines.is_empty() { return Err(Error::new(1, ErrorKind::Empty)) }
	Ok(lines)
}

/// Whitespace-separated numbers.
pub(crate) fn ints<T: FromStr<Err = ParseIntError>>(s: &str) -> Result<Vec<T>, ErrorKind> {
	s.split_ascii_whitespace()
		.map(|n| n.parse().map_err(ErrorKind::Int))
		.collect()
}

/// Splits on the first blank line.
pub(crate) fn sections(s: &str) -> Result<(&str, &str, usize), Error> {
	let s = s.trim_start_matches('\n');
	let (head, tail) = s.split_once("\n\n")
		.ok_or(Error::format(s.lines().count() + 1, "expected a blank line"))?;
	Ok((head, tail, head.lines().count() + 2))
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(ints::<i32>(" 1 -2  30 ").unwrap(), [1, -2, 30]);
		assert!(matches!(ints::<u8>("1 x"), Err(ErrorKind::Int(_))));

		let err = lines_with("1\n2\nx", |l| l.parse::<u8>().map_err(ErrorKind::from)).unwrap_err();
		assert_eq!(err.line, 3);
		assert!(err.to_string().starts_with("line 3: invalid number"));
		assert!(matches!(lines_with("", |_| Ok(())), Err(Error { kind: ErrorKind::Empty, .. })));

		let (head, tail, tail_line) = sections("a\nb\n\nc\n").unwrap();
		assert_eq!((head, tail, tail_line), ("a\nb", "c\n", 4));
		assert_eq!(sections("a\nb").unwrap_err().line, 3);

		assert_eq!(Error::at(2, 5, ErrorKind::Char('?')).to_string(), "2:5: unexpected character '?'");
		assert_eq!(Error::unsolvable("no loop").to_string(), "no loop");
	}
}
