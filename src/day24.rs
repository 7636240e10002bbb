// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


#[derive(Clone, Copy, PartialEq, Eq)]
enum Op { And, Or, Xor }

struct Device<'a> {
	inputs: HashMap<&'a str, bool>,
	/// Gates keyed by output wire.
	gates: HashMap<&'a str, (&'a str, Op, &'a str)>,
}


fn part1_impl(device: &Device) -> u64 {
	fn value<'a>(
		gates: &HashMap<&'a str, (&'a str, Op, &'a str)>,
		values: &mut HashMap<&'a str, bool>,
		wire: &'a str,
	) -> bool {
		if let Some(&value) = values.get(wire) { return value }
		let (left, op, right) = gates[wire];
		let (left, right) = (value(gates, values, left), value(gates, values, right));
		let value = match op {
			Op::And => left & right,
			Op::Or => left | right,
			Op::Xor => left ^ right,
		};
		values.insert(wire, value);
		value
	}

	use itertools::Itertools as _;
	let mut values = device.inputs.clone();
	device.gates.keys()
		.filter(|wire| wire.starts_with('z'))
		.sorted_unstable()
		.rev()
		.fold(0, |acc, &wire| acc << 1 | value(&device.gates, &mut values, wire) as u64)
}

pub(crate) fn part1(input: &str) -> u64 {
	part1_impl(&input_device_from_str(input))
}


/// The gates should form a ripple-carry adder; wires breaking its
/// structure are the swapped ones.
fn part2_impl(device: &Device) -> String {
	use {std::collections::BTreeSet, itertools::Itertools as _};

	let highest_z = device.gates.keys()
		.filter(|wire| wire.starts_with('z'))
		.max()
		.copied()
		.unwrap();
	let is_input = |wire: &str| wire.starts_with('x') || wire.starts_with('y');
	let feeds = |wire: &str, op: Op| device.gates.values()
		.any(|&(left, other_op, right)| other_op == op && (left == wire || right == wire));

	let mut wrong = BTreeSet::new();
	for (&out, &(left, op, right)) in &device.gates {
		// Every sum bit comes from an XOR, except the final carry
		if out.starts_with('z') && op != Op::Xor && out != highest_z {
			wrong.insert(out);
		}
		// XORs either combine input bits or produce a sum bit
		if op == Op::Xor && !out.starts_with('z') && !is_input(left) && !is_input(right) {
			wrong.insert(out);
		}
		// Carry halves (ANDs beyond bit zero) feed only ORs
		if op == Op::And && left != "x00" && right != "x00" {
			if device.gates.values().any(|&(l, other_op, r)|
				other_op != Op::Or && (l == out || r == out)) {
				wrong.insert(out);
			}
		}
		// Sum bits (XORs) never feed an OR
		if op == Op::Xor && feeds(out, Op::Or) {
			wrong.insert(out);
		}
	}

	wrong.iter().join(",")
}

pub(crate) fn part2(input: &str) -> String {
	part2_impl(&input_device_from_str(input))
}


fn input_device_from_str(s: &str) -> Device {
	parsing::try_device_from_str(s).unwrap()
}

mod parsing {
	use {itertools::Itertools as _, super::{Device, Op}};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum DeviceError {
		MissingGates,
		Input { line: usize },
		Gate { line: usize },
	}

	pub(super) fn try_device_from_str(s: &str) -> Result<Device, DeviceError> {
		let (inputs, gates) = s.split_once("\n\n").ok_or(DeviceError::MissingGates)?;
		let input_lines = inputs.lines().count();

		let inputs = inputs.lines()
			.enumerate()
			.map(|(l, line)| {
				let err = || DeviceError::Input { line: l + 1 };
				let (wire, value) = line.split_once(": ").ok_or_else(err)?;
				let value = match value {
					"0" => false,
					"1" => true,
					_ => return Err(err()),
				};
				Ok((wire, value))
			})
			.collect::<Result<_, _>>()?;

		let gates = gates.lines()
			.enumerate()
			.map(|(l, line)| {
				let err = || DeviceError::Gate { line: input_lines + 2 + l };
				let (gate, out) = line.split_once(" -> ").ok_or_else(err)?;
				let (left, op, right) = gate.split(' ').collect_tuple().ok_or_else(err)?;
				let op = match op {
					"AND" => Op::And,
					"OR" => Op::Or,
					"XOR" => Op::Xor,
					_ => return Err(err()),
				};
				Ok((out, (left, op, right)))
			})
			.collect::<Result<_, _>>()?;

		Ok(Device { inputs, gates })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		x00: 1
		x01: 1
		x02: 1
		y00: 0
		y01: 1
		y02: 0

		x00 AND y00 -> z00
		x01 XOR y01 -> z01
		x02 OR y02 -> z02
	" };

	// A two-bit ripple-carry adder with its z01 & b01 outputs swapped
	const SWAPPED_ADDER: &str = indoc::indoc! { "
		x00: 1
		x01: 0
		y00: 1
		y01: 1

		x00 XOR y00 -> z00
		x00 AND y00 -> c01
		x01 XOR y01 -> s01
		s01 XOR c01 -> b01
		x01 AND y01 -> a01
		s01 AND c01 -> z01
		a01 OR b01 -> z02
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 4);
		assert_eq!(part2(SWAPPED_ADDER), "b01,z01");
	}
}
