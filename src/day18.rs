// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


struct MemorySpace {
	corrupted: Vec<bool>,
	size: usize,
}

impl MemorySpace {
	fn new(size: usize) -> Self {
		MemorySpace { corrupted: vec![false; size * size], size }
	}

	fn corrupt(&mut self, [x, y]: [usize; 2]) {
		self.corrupted[x + y * self.size] = true;
	}

	/// Steps taken & positions visited on a shortest path from the
	/// top-left to the bottom-right corner, if one exists.
	fn shortest_path(&self) -> Option<(usize, HashSet<[usize; 2]>)> {
		use std::collections::{HashMap, VecDeque};

		let end = [self.size - 1; 2];
		let mut prev = HashMap::from([([0; 2], [0; 2])]);
		let mut queue = VecDeque::from([([0usize; 2], 0)]);
		while let Some(([x, y], steps)) = queue.pop_front() {
			if [x, y] == end {
				let mut path = HashSet::from([end]);
				let mut pos = end;
				while pos != [0; 2] {
					pos = prev[&pos];
					path.insert(pos);
				}
				return Some((steps, path))
			}

			let adjacent = [
				(x > 0).then(|| [x - 1, y]),
				(y > 0).then(|| [x, y - 1]),
				(x < self.size - 1).then(|| [x + 1, y]),
				(y < self.size - 1).then(|| [x, y + 1]),
			];
			for pos in adjacent.into_iter().flatten() {
				if self.corrupted[pos[0] + pos[1] * self.size] { continue }
				if let std::collections::hash_map::Entry::Vacant(entry) = prev.entry(pos) {
					entry.insert([x, y]);
					queue.push_back((pos, steps + 1));
				}
			}
		}
		None
	}
}

fn space_size(bytes: &[[usize; 2]]) -> usize {
	bytes.iter().flatten().max().unwrap() + 1
}


fn part1_impl(bytes: &[[usize; 2]], fallen: usize) -> usize {
	let mut memory = MemorySpace::new(space_size(bytes));
	for &byte in &bytes[..fallen.min(bytes.len())] {
		memory.corrupt(byte);
	}
	memory.shortest_path().unwrap().0
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(&input_bytes_from_str(input), 1024)
}


fn part2_impl(bytes: &[[usize; 2]]) -> String {
	let mut memory = MemorySpace::new(space_size(bytes));
	let (_, mut path) = memory.shortest_path().unwrap();
	for &byte in bytes {
		memory.corrupt(byte);
		// The route only needs rechecking once a byte lands on it
		if !path.contains(&byte) { continue }
		log::debug!("byte {byte:?} fell on the path; rerouting");
		match memory.shortest_path() {
			Some((_, new_path)) => path = new_path,
			None => return format!("{},{}", byte[0], byte[1]),
		}
	}
	panic!("The exit is never cut off")
}

pub(crate) fn part2(input: &str) -> String {
	part2_impl(&input_bytes_from_str(input))
}


fn input_bytes_from_str(s: &str) -> Vec<[usize; 2]> {
	parsing::try_bytes_from_str(s).unwrap()
}

mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ByteError {
		Format,
		Coordinate(ParseIntError),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct BytesError {
		line: usize,
		source: ByteError,
	}

	pub(super) fn try_bytes_from_str(s: &str) -> Result<Vec<[usize; 2]>, BytesError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.split_once(',')
				.ok_or(ByteError::Format)
				.and_then(|(x, y)| x.parse()
					.and_then(|x| Ok([x, y.parse()?]))
					.map_err(ByteError::Coordinate))
				.map_err(|e| BytesError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		5,4
		4,2
		4,5
		3,0
		2,1
		6,3
		2,4
		1,5
		0,6
		3,3
		2,6
		5,1
		1,2
		5,5
		2,5
		6,5
		1,4
		0,4
		6,4
		1,1
		6,1
		1,0
		0,5
		1,6
		2,0
	" };

	#[test]
	fn tests() {
		let bytes = input_bytes_from_str(INPUT);
		assert_eq!(space_size(&bytes), 7);
		assert_eq!(part1_impl(&bytes, 12), 22);
		assert_eq!(part2(INPUT), "6,1");
	}
}
