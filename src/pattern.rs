//! Named target patterns to solve a cube into.

use std::{fmt, str::FromStr};

use crate::{error::ParseError, facelet::FaceCube};



#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
	PlusMinus,
	Cross4,
	CubeInCube,
	CubeInCubeInCube,
}

impl Pattern {
	pub const ALL: [Pattern; 4] = [
		Pattern::PlusMinus,
		Pattern::Cross4,
		Pattern::CubeInCube,
		Pattern::CubeInCubeInCube,
	];

	pub fn name(self) -> &'static str {
		match self {
			Pattern::PlusMinus => "plus-minus",
			Pattern::Cross4 => "4-cross",
			Pattern::CubeInCube => "cube-in-cube",
			Pattern::CubeInCubeInCube => "cube-in-cube-in-cube",
		}
	}

	pub fn face_cube(self) -> FaceCube {
		const PLUS_MINUS: FaceCube = FaceCube::from_ascii(b"UUUUUUUUULLLRRRLLLBFBFFFBFBDDDDDDDDDRRRLLLRRRFBFBBBFBF");
		const CROSS_4: FaceCube = FaceCube::from_ascii(b"UUUUUUUUULRLRRRLRLBFBFFFBFBDDDDDDDDDRLRLLLRLRFBFBBBFBF");
		const CUBE_IN_CUBE: FaceCube = FaceCube::from_ascii(b"FFFFUUFUURRURRUUUURFFRFFRRRBBBDDBDDBDDDLLDLLDLLLLBBLBB");
		const CUBE_IN_CUBE_IN_CUBE: FaceCube = FaceCube::from_ascii(b"RRRRUURUFURFRRFFFFUFRUFFUUULLLDDLBDLBBBLLBDLBDDDDBBDBL");
		match self {
			Pattern::PlusMinus => PLUS_MINUS,
			Pattern::Cross4 => CROSS_4,
			Pattern::CubeInCube => CUBE_IN_CUBE,
			Pattern::CubeInCubeInCube => CUBE_IN_CUBE_IN_CUBE,
		}
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Pattern {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Pattern::ALL
			.into_iter()
			.find(|pattern| pattern.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ParseError::Pattern(s.to_string()))
	}
}
