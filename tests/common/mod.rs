use std::collections::HashSet;

use voxseg::voxel::collection::ObjectCollection;
use voxseg::voxel::extent::{Extent, Point3i};
use voxseg::voxel::region::BinaryRegion;
use voxseg::voxel::volume::VoxelVolume;

/// 7x3x1 volume with basins at x=1 and x=5: intensity = min(|x-1|, |x-5|).
pub fn two_basin_volume() -> VoxelVolume {
	VoxelVolume::from_fn(Extent::new(7, 3, 1), |x, _, _| {
		let x = x as i32;
		((x - 1).abs().min((x - 5).abs())) as f32
	})
}

/// Two euclidean-distance wells inside a proper 3-D extent.
pub fn two_well_volume_3d() -> VoxelVolume {
	let wells = [(2.0f32, 2.0f32, 1.0f32), (6.0, 2.0, 1.0)];
	VoxelVolume::from_fn(Extent::new(9, 5, 3), |x, y, z| {
		wells
			.iter()
			.map(|&(cx, cy, cz)| {
				let dx = x as f32 - cx;
				let dy = y as f32 - cy;
				let dz = z as f32 - cz;
				(dx * dx + dy * dy + dz * dz).sqrt()
			})
			.fold(f32::INFINITY, f32::min)
	})
}

pub fn uniform_volume(extent: Extent, level: f32) -> VoxelVolume {
	VoxelVolume::from_fn(extent, |_, _, _| level)
}

/// Monotone ramp along x: a single basin draining to x=0.
pub fn uniform_ramp() -> VoxelVolume {
	VoxelVolume::from_fn(Extent::new(6, 2, 2), |x, _, _| x as f32)
}

/// Fully set axis-aligned block, used to build expected regions and masks.
pub fn block(corner: Point3i, w: i32, h: i32, d: i32) -> BinaryRegion {
	let mut voxels = Vec::new();
	for z in 0..d {
		for y in 0..h {
			for x in 0..w {
				voxels.push(Point3i::new(corner.x + x, corner.y + y, corner.z + z));
			}
		}
	}
	BinaryRegion::from_voxels(voxels).expect("block is never empty")
}

pub fn voxel_set(region: &BinaryRegion) -> HashSet<Point3i> {
	region.iter_voxels().collect()
}

/// Panic if any voxel belongs to two regions of the collection.
pub fn assert_pairwise_disjoint(objects: &ObjectCollection) {
	let mut seen: HashSet<Point3i> = HashSet::new();
	for (which, region) in objects.iter().enumerate() {
		for voxel in region.iter_voxels() {
			assert!(
				seen.insert(voxel),
				"voxel {voxel} appears in more than one region (second hit in region {which})"
			);
		}
	}
}
