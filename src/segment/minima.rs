use bitvec::vec::BitVec;

use crate::segment::watershed::Connectivity;
use crate::voxel::volume::VoxelVolume;

/// Find seed plateaus for unseeded flooding.
///
/// A plateau is a connected component of equal-intensity eligible voxels;
/// it seeds a region only when no member has an eligible neighbor of
/// strictly lower intensity. Components are discovered in voxel-index
/// order, which fixes the label order of the resulting seeds.
pub(crate) fn minima_plateaus(
	volume: &VoxelVolume,
	eligible: &BitVec,
	connectivity: Connectivity,
) -> Vec<Vec<usize>> {
	let extent = volume.extent();
	let total = volume.total_voxels();
	let mut visited: BitVec = BitVec::repeat(false, total);
	let mut plateaus = Vec::new();

	for start in 0..total {
		if visited[start] || !eligible[start] {
			continue;
		}
		let level = volume.intensity_at_index(start);
		let mut component = vec![start];
		visited.set(start, true);
		let mut is_minimum = true;

		// Breadth-first walk over the equal-intensity component.
		let mut head = 0usize;
		while head < component.len() {
			let idx = component[head];
			head += 1;
			connectivity.for_each_neighbor(extent, idx, |nidx| {
				if !eligible[nidx] {
					return;
				}
				let neighbor = volume.intensity_at_index(nidx);
				if neighbor < level {
					is_minimum = false;
				} else if neighbor == level && !visited[nidx] {
					visited.set(nidx, true);
					component.push(nidx);
				}
			});
		}

		if is_minimum {
			plateaus.push(component);
		}
	}
	plateaus
}
