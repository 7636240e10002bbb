// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


struct Racetrack {
	open: Vec<bool>,
	width: usize,
	start: [isize; 2],
	end: [isize; 2],
}

impl Racetrack {
	fn is_open(&self, [x, y]: [isize; 2]) -> bool {
		x >= 0 && x < self.width as isize && y >= 0
			&& self.open.get(x as usize + y as usize * self.width) == Some(&true)
	}

	/// Picoseconds from the start to every reachable position.
	fn times(&self) -> HashMap<[isize; 2], i64> {
		use std::collections::VecDeque;

		let mut times = HashMap::from([(self.start, 0)]);
		let mut queue = VecDeque::from([(self.start, 0)]);
		while let Some(([x, y], time)) = queue.pop_front() {
			for pos in [[x + 1, y], [x - 1, y], [x, y + 1], [x, y - 1]] {
				if !self.is_open(pos) || times.contains_key(&pos) { continue }
				times.insert(pos, time + 1);
				queue.push_back((pos, time + 1));
			}
		}
		assert!(times.contains_key(&self.end));
		times
	}
}


/// Counts cheats of up to `cheat_time` picoseconds that each save at least
/// `min_saving` picoseconds.
fn cheats_impl(track: &Racetrack, cheat_time: i64, min_saving: i64) -> usize {
	let times = track.times();

	let mut cheats = 0;
	for (&[x, y], &time) in &times {
		for dx in -cheat_time..=cheat_time {
			for dy in -(cheat_time - dx.abs())..=cheat_time - dx.abs() {
				let cheat = dx.abs() + dy.abs();
				if cheat < 2 { continue }
				let Some(&cheated_time) = times.get(&[x + dx as isize, y + dy as isize]) else { continue };
				if cheated_time - time - cheat >= min_saving { cheats += 1 }
			}
		}
	}
	cheats
}


pub(crate) fn part1(input: &str) -> usize {
	cheats_impl(&input_racetrack_from_str(input), 2, 100)
}

pub(crate) fn part2(input: &str) -> usize {
	cheats_impl(&input_racetrack_from_str(input), 20, 100)
}


fn input_racetrack_from_str(s: &str) -> Racetrack {
	parsing::try_racetrack_from_str(s).unwrap()
}

mod parsing {
	use super::Racetrack;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RacetrackError {
		Empty,
		Width { line: usize, found: usize, expected: usize },
		Tile { line: usize, column: usize, found: char },
		NoStart,
		NoEnd,
	}

	pub(super) fn try_racetrack_from_str(s: &str) -> Result<Racetrack, RacetrackError> {
		let width = s.lines().next().ok_or(RacetrackError::Empty)?.len();
		let mut open = Vec::with_capacity(s.len());
		let (mut start, mut end) = (None, None);
		for (y, line) in s.lines().enumerate() {
			if line.len() != width {
				return Err(RacetrackError::Width { line: y + 1, found: line.len(), expected: width })
			}
			for (x, c) in line.chars().enumerate() {
				open.push(match c {
					'#' => false,
					'.' => true,
					'S' => { start = Some([x as isize, y as isize]); true }
					'E' => { end = Some([x as isize, y as isize]); true }
					found => return Err(RacetrackError::Tile { line: y + 1, column: x + 1, found }),
				});
			}
		}
		Ok(Racetrack {
			open,
			width,
			start: start.ok_or(RacetrackError::NoStart)?,
			end: end.ok_or(RacetrackError::NoEnd)?,
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		###############
		#...#...#.....#
		#.#.#.#.#.###.#
		#S#...#.#.#...#
		#######.#.#.###
		#######.#.#...#
		#######.#.###.#
		###..E#...#...#
		###.#######.###
		#...###...#...#
		#.#####.#.###.#
		#.#...#.#.#...#
		#.#.#.#.#.#.###
		#...#...#...###
		###############
	" };

	#[test]
	fn tests() {
		let track = input_racetrack_from_str(INPUT);
		assert_eq!(cheats_impl(&track, 2, 2), 44);
		assert_eq!(cheats_impl(&track, 2, 20), 5);
		assert_eq!(cheats_impl(&track, 20, 50), 285);
	}
}
