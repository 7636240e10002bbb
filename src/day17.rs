// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
enum Op { Adv, Bxl, Bst, Jnz, Bxc, Out, Bdv, Cdv }

impl TryFrom<u8> for Op {
	type Error = u8;
	fn try_from(value: u8) -> Result<Self, Self::Error> {
		use Op::*;
		match value {
			0 => Ok(Adv),
			1 => Ok(Bxl),
			2 => Ok(Bst),
			3 => Ok(Jnz),
			4 => Ok(Bxc),
			5 => Ok(Out),
			6 => Ok(Bdv),
			7 => Ok(Cdv),
			invalid => Err(invalid),
		}
	}
}


#[derive(Clone)]
struct Computer {
	/// Registers A, B & C.
	registers: [u64; 3],
	program: Vec<u8>,
}

impl Computer {
	fn combo(&self, operand: u8) -> u64 {
		match operand {
			0..=3 => operand as u64,
			4 => self.registers[0],
			5 => self.registers[1],
			6 => self.registers[2],
			invalid => panic!("Invalid combo operand {invalid}"),
		}
	}

	/// Register A shifted down by a combo amount (the division
	/// instructions’ shared operation).
	fn dv(&self, operand: u8) -> u64 {
		self.registers[0].checked_shr(self.combo(operand) as u32).unwrap_or(0)
	}

	fn run(&mut self) -> Vec<u8> {
		use Op::*;

		let mut output = Vec::new();
		let mut ip = 0;
		while ip + 1 < self.program.len() {
			let op = Op::try_from(self.program[ip]).unwrap();
			let operand = self.program[ip + 1];
			ip += 2;
			match op {
				Adv => self.registers[0] = self.dv(operand),
				Bxl => self.registers[1] ^= operand as u64,
				Bst => self.registers[1] = self.combo(operand) % 8,
				Jnz => if self.registers[0] != 0 { ip = operand as usize },
				Bxc => self.registers[1] ^= self.registers[2],
				Out => output.push((self.combo(operand) % 8) as u8),
				Bdv => self.registers[1] = self.dv(operand),
				Cdv => self.registers[2] = self.dv(operand),
			}
		}
		output
	}

	fn output_with(&self, a: u64) -> Vec<u8> {
		let mut computer = self.clone();
		computer.registers[0] = a;
		computer.run()
	}
}


fn part1_impl(computer: &Computer) -> String {
	use itertools::Itertools as _;
	computer.clone().run().iter().join(",")
}

pub(crate) fn part1(input: &str) -> String {
	part1_impl(&input_computer_from_str(input))
}


fn part2_impl(computer: &Computer) -> u64 {
	// The program consumes A three bits at a time, so extend candidate
	// values of A by three bits for each further trailing output digit
	// matched, lowest candidate first
	fn search(computer: &Computer, matched_from: usize, a: u64) -> Option<u64> {
		if matched_from == 0 { return Some(a) }
		let matched_from = matched_from - 1;
		(0..8).find_map(|low_bits| {
			let a = a << 3 | low_bits;
			if computer.output_with(a)[..] != computer.program[matched_from..] { return None }
			search(computer, matched_from, a)
		})
	}

	search(computer, computer.program.len(), 0)
		.expect("Some initial value of A should output a copy of the program")
}

pub(crate) fn part2(input: &str) -> u64 {
	part2_impl(&input_computer_from_str(input))
}


fn input_computer_from_str(s: &str) -> Computer {
	parsing::try_computer_from_str(s).unwrap()
}

mod parsing {
	use {std::num::ParseIntError, super::Computer};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ComputerError {
		Register(char),
		Program,
		Number(ParseIntError),
	}

	pub(super) fn try_computer_from_str(s: &str) -> Result<Computer, ComputerError> {
		use ComputerError as E;

		let mut lines = s.lines();
		let mut registers = [0; 3];
		for (i, name) in ['A', 'B', 'C'].into_iter().enumerate() {
			registers[i] = lines.next()
				.and_then(|line| line.strip_prefix("Register ")?
					.strip_prefix(name)?
					.strip_prefix(": "))
				.ok_or(E::Register(name))?
				.parse().map_err(E::Number)?;
		}

		let program = lines
			.find(|line| !line.is_empty())
			.and_then(|line| line.strip_prefix("Program: "))
			.ok_or(E::Program)?
			.split(',')
			.map(|num| num.parse().map_err(E::Number))
			.collect::<Result<_, _>>()?;

		Ok(Computer { registers, program })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Register A: 729
		Register B: 0
		Register C: 0

		Program: 0,1,5,4,3,0
	" };

	const QUINE_INPUT: &str = indoc::indoc! { "
		Register A: 2024
		Register B: 0
		Register C: 0

		Program: 0,3,5,4,3,0
	" };

	fn computer(registers: [u64; 3], program: &[u8]) -> Computer {
		Computer { registers, program: Vec::from(program) }
	}

	#[test]
	fn instructions() {
		let mut c = computer([0, 0, 9], &[2, 6]);
		c.run();
		assert_eq!(c.registers[1], 1);

		let mut c = computer([10, 0, 0], &[5, 0, 5, 1, 5, 4]);
		assert_eq!(c.run(), [0, 1, 2]);

		let mut c = computer([2024, 0, 0], &[0, 1, 5, 4, 3, 0]);
		assert_eq!(c.run(), [4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
		assert_eq!(c.registers[0], 0);

		let mut c = computer([0, 29, 0], &[1, 7]);
		c.run();
		assert_eq!(c.registers[1], 26);

		let mut c = computer([0, 2024, 43690], &[4, 0]);
		c.run();
		assert_eq!(c.registers[1], 44354);
	}

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), "4,6,3,5,6,3,5,2,1,0");
		assert_eq!(part2(QUINE_INPUT), 117440);
	}
}
