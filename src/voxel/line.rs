use crate::voxel::extent::Point3i;
use crate::voxel::region::BinaryRegion;

/// Rasterize the digital voxel path between two endpoints, inclusive.
///
/// The driving axis is the axis of greatest coordinate delta; the other two
/// axes accumulate fractional error and step by one when it reaches half the
/// driving delta, emitting the intermediate voxel on each side step. The
/// path is therefore 6-connected and its length is the Manhattan distance
/// plus one. Endpoints are canonicalized first, so the produced voxel set
/// does not depend on argument order. Total over all finite inputs.
pub fn rasterize_line(a: Point3i, b: Point3i) -> BinaryRegion {
	BinaryRegion::from_voxels(line_voxels(a, b))
		.expect("a line always contains at least its endpoints")
}

/// The voxel path as explicit coordinates, in traversal order.
pub fn line_voxels(a: Point3i, b: Point3i) -> Vec<Point3i> {
	// Canonical endpoint order makes the voxel set argument-order independent.
	let (p, q) = if b < a { (b, a) } else { (a, b) };

	let delta = [
		(q.x - p.x).abs(),
		(q.y - p.y).abs(),
		(q.z - p.z).abs(),
	];
	let step = [
		(q.x - p.x).signum(),
		(q.y - p.y).signum(),
		(q.z - p.z).signum(),
	];

	// Driving axis: greatest delta, ties resolved x, then y, then z.
	let mut drive = 0usize;
	for axis in 1..3 {
		if delta[axis] > delta[drive] {
			drive = axis;
		}
	}
	let da = delta[drive];

	let mut cur = [p.x, p.y, p.z];
	let mut out = vec![Point3i::new(cur[0], cur[1], cur[2])];
	if da == 0 {
		// Identical endpoints: a single voxel.
		return out;
	}

	let others: [usize; 2] = match drive {
		0 => [1, 2],
		1 => [0, 2],
		_ => [0, 1],
	};
	let mut err = [da / 2, da / 2];

	for _ in 0..da {
		for (slot, &axis) in others.iter().enumerate() {
			err[slot] -= delta[axis];
			if err[slot] < 0 {
				cur[axis] += step[axis];
				err[slot] += da;
				out.push(Point3i::new(cur[0], cur[1], cur[2]));
			}
		}
		cur[drive] += step[drive];
		out.push(Point3i::new(cur[0], cur[1], cur[2]));
	}
	out
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn voxel_set(region: &BinaryRegion) -> HashSet<Point3i> {
		region.iter_voxels().collect()
	}

	#[test]
	fn fixed_scenario_yields_24_voxels_with_both_endpoints() {
		let a = Point3i::new(4, 19, 0);
		let b = Point3i::new(11, 3, 0);
		let region = rasterize_line(a, b);
		assert_eq!(region.count(), 24);
		assert!(region.contains(a));
		assert!(region.contains(b));
	}

	#[test]
	fn voxel_set_is_independent_of_argument_order() {
		let pairs = [
			(Point3i::new(4, 19, 0), Point3i::new(11, 3, 0)),
			(Point3i::new(-5, 2, 9), Point3i::new(7, -1, 0)),
			(Point3i::new(0, 0, 0), Point3i::new(3, 3, 3)),
		];
		for (a, b) in pairs {
			assert_eq!(
				voxel_set(&rasterize_line(a, b)),
				voxel_set(&rasterize_line(b, a)),
				"set differs for {a} <-> {b}"
			);
		}
	}

	#[test]
	fn identical_endpoints_yield_single_voxel() {
		let p = Point3i::new(7, -2, 5);
		let region = rasterize_line(p, p);
		assert_eq!(region.count(), 1);
		assert!(region.contains(p));
	}

	#[test]
	fn axis_aligned_line_is_a_straight_run() {
		let region = rasterize_line(Point3i::new(1, 2, 3), Point3i::new(1, 2, 10));
		assert_eq!(region.count(), 8);
		for z in 3..=10 {
			assert!(region.contains(Point3i::new(1, 2, z)));
		}
	}

	#[test]
	fn path_length_is_manhattan_distance_plus_one() {
		let a = Point3i::new(0, 0, 0);
		let b = Point3i::new(5, 3, 2);
		assert_eq!(rasterize_line(a, b).count(), 5 + 3 + 2 + 1);
	}
}
