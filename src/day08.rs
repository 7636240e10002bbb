// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


struct AntennaMap {
	antennas: Vec<(u8, [isize; 2])>,
	width: isize,
	height: isize,
}

impl AntennaMap {
	fn contains(&self, [x, y]: [isize; 2]) -> bool {
		(0..self.width).contains(&x) && (0..self.height).contains(&y)
	}

	fn frequency_pairs(&self) -> impl Iterator<Item = ([isize; 2], [isize; 2])> + '_ {
		use itertools::Itertools as _;
		self.antennas.iter()
			.tuple_combinations()
			.filter(|((freq0, _), (freq1, _))| freq0 == freq1)
			.flat_map(|(&(_, pos0), &(_, pos1))| [(pos0, pos1), (pos1, pos0)])
	}
}


fn part1_impl(map: &AntennaMap) -> usize {
	map.frequency_pairs()
		.filter_map(|(from, to)| {
			let antinode = [2 * to[0] - from[0], 2 * to[1] - from[1]];
			map.contains(antinode).then_some(antinode)
		})
		.collect::<HashSet<_>>()
		.len()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(&input_antenna_map_from_str(input))
}


fn part2_impl(map: &AntennaMap) -> usize {
	let mut antinodes = HashSet::new();
	for (from, to) in map.frequency_pairs() {
		let delta = [to[0] - from[0], to[1] - from[1]];
		let mut pos = to;
		while map.contains(pos) {
			antinodes.insert(pos);
			pos = [pos[0] + delta[0], pos[1] + delta[1]];
		}
	}
	antinodes.len()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(&input_antenna_map_from_str(input))
}


fn input_antenna_map_from_str(s: &str) -> AntennaMap {
	parsing::try_antenna_map_from_str(s).unwrap()
}

mod parsing {
	use super::AntennaMap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum AntennaMapError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Frequency { line: usize, column: usize, found: char },
	}

	pub(super) fn try_antenna_map_from_str(s: &str) -> Result<AntennaMap, AntennaMapError> {
		let width = s.lines().next().ok_or(AntennaMapError::Empty)?.len() as isize;
		let mut antennas = Vec::new();
		let mut height = 0;
		for (y, line) in s.lines().enumerate() {
			if line.len() as isize != width {
				return Err(AntennaMapError::Width {
					line: y + 1, found: line.len(), expected: width as usize })
			}
			for (x, c) in line.bytes().enumerate() {
				match c {
					b'.' => (),
					c if c.is_ascii_alphanumeric() =>
						antennas.push((c, [x as isize, y as isize])),
					found => return Err(AntennaMapError::Frequency {
						line: y + 1, column: x + 1, found: found as char }),
				}
			}
			height += 1;
		}
		Ok(AntennaMap { antennas, width, height })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		............
		........0...
		.....0......
		.......0....
		....0.......
		......A.....
		............
		............
		........A...
		.........A..
		............
		............
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 14);
		assert_eq!(part2(INPUT), 34);
	}
}
