// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};


/// Adjacency sets; every connection is held in both directions.
type Network<'a> = HashMap<&'a str, HashSet<&'a str>>;


fn part1_impl(network: &Network) -> usize {
	use itertools::Itertools as _;

	let mut parties = HashSet::new();
	for (&computer, connected) in network {
		for (&other, &third) in connected.iter().tuple_combinations() {
			if !network[other].contains(third) { continue }
			if ![computer, other, third].iter().any(|name| name.starts_with('t')) { continue }
			let mut party = [computer, other, third];
			party.sort_unstable();
			parties.insert(party);
		}
	}
	parties.len()
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(&input_network_from_str(input))
}


fn part2_impl(network: &Network) -> String {
	// Bron–Kerbosch with pivoting
	fn largest_clique<'a>(
		network: &Network<'a>,
		clique: &mut Vec<&'a str>,
		mut candidates: HashSet<&'a str>,
		mut excluded: HashSet<&'a str>,
		largest: &mut Vec<&'a str>,
	) {
		if candidates.is_empty() && excluded.is_empty() {
			if clique.len() > largest.len() { *largest = clique.clone() }
			return
		}

		let &pivot = candidates.union(&excluded)
			.max_by_key(|&&computer| network[computer].len())
			.unwrap();
		for computer in candidates.clone() {
			if network[pivot].contains(computer) { continue }
			clique.push(computer);
			largest_clique(
				network,
				clique,
				candidates.intersection(&network[computer]).copied().collect(),
				excluded.intersection(&network[computer]).copied().collect(),
				largest,
			);
			clique.pop();
			candidates.remove(computer);
			excluded.insert(computer);
		}
	}

	let mut largest = Vec::new();
	largest_clique(
		network,
		&mut Vec::new(),
		network.keys().copied().collect(),
		HashSet::new(),
		&mut largest,
	);
	largest.sort_unstable();
	largest.join(",")
}

pub(crate) fn part2(input: &str) -> String {
	part2_impl(&input_network_from_str(input))
}


fn input_network_from_str(s: &str) -> Network {
	parsing::try_network_from_str(s).unwrap()
}

mod parsing {
	use super::Network;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct ConnectionError {
		line: usize,
	}

	pub(super) fn try_network_from_str(s: &str) -> Result<Network, ConnectionError> {
		let mut network = Network::new();
		for (l, line) in s.lines().enumerate() {
			let (from, to) = line.split_once('-').ok_or(ConnectionError { line: l + 1 })?;
			network.entry(from).or_default().insert(to);
			network.entry(to).or_default().insert(from);
		}
		Ok(network)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		kh-tc
		qp-kh
		de-cg
		ka-co
		yn-aq
		qp-ub
		cg-tb
		vc-aq
		tb-ka
		wh-tc
		yn-cg
		kh-ub
		ta-co
		de-co
		tc-td
		tb-wq
		wh-td
		ta-ka
		td-qp
		aq-cg
		wq-ub
		ub-vc
		de-ta
		wq-aq
		wq-vc
		wh-yn
		ka-de
		kh-ta
		co-tc
		wh-qp
		tb-vc
		td-yn
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT), 7);
		assert_eq!(part2(INPUT), "co,de,ka,ta");
	}
}
