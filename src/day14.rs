// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use num_integer::Integer as _;


#[derive(Clone, Copy)]
struct Robot {
	pos: [i64; 2],
	vel: [i64; 2],
}

impl Robot {
	fn pos_at(&self, t: i64, space: [i64; 2]) -> [i64; 2] {
		[
			(self.pos[0] + t * self.vel[0]).mod_floor(&space[0]),
			(self.pos[1] + t * self.vel[1]).mod_floor(&space[1]),
		]
	}
}

const SPACE: [i64; 2] = [101, 103];


fn part1_impl(robots: &[Robot], space: [i64; 2]) -> u64 {
	let mut quadrants = [0; 4];
	for robot in robots {
		let [x, y] = robot.pos_at(100, space);
		// Robots on the middle row or column belong to no quadrant
		if x == space[0] / 2 || y == space[1] / 2 { continue }
		quadrants[(x > space[0] / 2) as usize + 2 * (y > space[1] / 2) as usize] += 1;
	}
	quadrants.iter().product()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(&input_robots_from_str(input), SPACE)
}


/// Sum of squared deviations along one axis, scaled by the robot count
/// (monotonic in the variance, but stays integral).
fn axis_spread(robots: &[Robot], t: i64, axis: usize, space: [i64; 2]) -> i64 {
	let (sum, sum_sq) = robots.iter()
		.map(|robot| robot.pos_at(t, space)[axis])
		.fold((0, 0), |(sum, sum_sq), p| (sum + p, sum_sq + p * p));
	robots.len() as i64 * sum_sq - sum * sum
}

fn part2_impl(robots: &[Robot], space: [i64; 2]) -> i64 {
	use num_modular::ModularPow as _;

	// The x positions repeat every `space[0]` seconds and the y positions
	// every `space[1]`, so the picture’s time is determined by the times of
	// minimal spread along each axis within one period…
	let tx = (0..space[0]).min_by_key(|&t| axis_spread(robots, t, 0, space)).unwrap();
	let ty = (0..space[1]).min_by_key(|&t| axis_spread(robots, t, 1, space)).unwrap();
	log::debug!("minimal spread at t = {tx} (mod {}) & t = {ty} (mod {})", space[0], space[1]);

	// …combined into t = tx + k * space[0] with k ≡ (ty - tx) / space[0]
	// (mod space[1]), the division being a modular inverse (the periods
	// are prime)
	let inv = (space[0] as usize).powm(space[1] as usize - 2, &(space[1] as usize)) as i64;
	let k = ((ty - tx) * inv).mod_floor(&space[1]);
	tx + k * space[0]
}

pub(crate) fn part2(input: &str) -> i64 {
	part2_impl(&input_robots_from_str(input), SPACE)
}


fn input_robots_from_str(s: &str) -> Vec<Robot> {
	parsing::try_robots_from_str(s).unwrap()
}

mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, super::Robot};

	#[derive(Debug)]
	pub(super) enum RobotError {
		Format,
		Number(ParseIntError),
	}

	fn try_xy_from_str(s: &str, label: &str) -> Option<Result<[i64; 2], ParseIntError>> {
		let s = s.strip_prefix(label)?.strip_prefix('=')?;
		let (x, y) = s.split_once(',')?;
		Some(x.parse().and_then(|x| Ok([x, y.parse()?])))
	}

	impl FromStr for Robot {
		type Err = RobotError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (pos, vel) = s.split_once(' ').ok_or(RobotError::Format)?;
			let pos = try_xy_from_str(pos, "p").ok_or(RobotError::Format)?
				.map_err(RobotError::Number)?;
			let vel = try_xy_from_str(vel, "v").ok_or(RobotError::Format)?
				.map_err(RobotError::Number)?;
			Ok(Robot { pos, vel })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RobotsError {
		line: usize,
		source: RobotError,
	}

	pub(super) fn try_robots_from_str(s: &str) -> Result<Vec<Robot>, RobotsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RobotsError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		p=0,4 v=3,-3
		p=6,3 v=-1,-3
		p=10,3 v=-1,2
		p=2,0 v=2,-1
		p=0,0 v=1,3
		p=3,0 v=-2,-2
		p=7,6 v=-1,-3
		p=3,0 v=-1,-2
		p=9,3 v=2,3
		p=7,3 v=-1,2
		p=2,4 v=2,-3
		p=9,5 v=-3,-3
	" };

	// Five robots converging on x = 5 at t ≡ 5 (mod 11) and on y = 3 at
	// t ≡ 3 (mod 7), so the cluster first forms at t = 38
	const CLUSTERED: &str = indoc::indoc! { "
		p=0,0 v=1,1
		p=6,4 v=2,2
		p=1,1 v=3,3
		p=7,5 v=4,4
		p=2,2 v=5,5
	" };

	#[test]
	fn tests() {
		let robot = "p=2,4 v=2,-3".parse::<Robot>().unwrap();
		assert_eq!(robot.pos_at(1, [11, 7]), [4, 1]);
		assert_eq!(robot.pos_at(5, [11, 7]), [1, 3]);
		assert_eq!(part1_impl(&input_robots_from_str(INPUT), [11, 7]), 12);
		assert_eq!(part2_impl(&input_robots_from_str(CLUSTERED), [11, 7]), 38);
	}
}
