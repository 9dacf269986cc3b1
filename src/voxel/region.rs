use bitvec::vec::BitVec;

use crate::error::SegmentError;
use crate::voxel::extent::{Extent, Point3i};

/// A 3-D binary object mask: a bounding box plus bit-packed voxel storage.
///
/// The bounding box is always tight (every face touches at least one set
/// voxel) and never empty. An empty segmentation result is represented by
/// the absence of a region, not by a degenerate one.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryRegion {
	corner: Point3i, // Minimum corner of the bounding box
	extent: Extent,
	bits: BitVec, // 1 bit per voxel, addressed relative to `corner`
}

impl BinaryRegion {
	/// Build a region from raw parts, enforcing every invariant.
	///
	/// Intended for external layers reconstructing a persisted region;
	/// a loose box or empty bitset is a precondition violation.
	pub fn try_new(corner: Point3i, extent: Extent, bits: BitVec) -> Result<Self, SegmentError> {
		let expected = extent.volume();
		if bits.len() != expected {
			return Err(SegmentError::BitLengthMismatch {
				extent,
				expected,
				actual: bits.len(),
			});
		}
		if bits.not_any() {
			return Err(SegmentError::EmptyRegion);
		}
		let region = Self {
			corner,
			extent,
			bits,
		};
		region.check_tight()?;
		Ok(region)
	}

	/// Build the tightest region containing all given voxels.
	///
	/// Returns `None` when the iterator yields nothing.
	pub fn from_voxels(voxels: impl IntoIterator<Item = Point3i>) -> Option<Self> {
		let mut min = Point3i::new(i32::MAX, i32::MAX, i32::MAX);
		let mut max = Point3i::new(i32::MIN, i32::MIN, i32::MIN);
		let collected: Vec<Point3i> = voxels.into_iter().collect();
		if collected.is_empty() {
			return None;
		}
		for p in &collected {
			min.x = min.x.min(p.x);
			min.y = min.y.min(p.y);
			min.z = min.z.min(p.z);
			max.x = max.x.max(p.x);
			max.y = max.y.max(p.y);
			max.z = max.z.max(p.z);
		}

		let extent = Extent::new(
			(max.x - min.x + 1) as usize,
			(max.y - min.y + 1) as usize,
			(max.z - min.z + 1) as usize,
		);
		let mut bits = BitVec::repeat(false, extent.volume());
		for p in &collected {
			let local = extent.index_of(
				(p.x - min.x) as usize,
				(p.y - min.y) as usize,
				(p.z - min.z) as usize,
			);
			bits.set(local, true);
		}
		Some(Self {
			corner: min,
			extent,
			bits,
		})
	}

	#[inline]
	pub fn corner(&self) -> Point3i {
		self.corner
	}

	#[inline]
	pub fn extent(&self) -> Extent {
		self.extent
	}

	/// Number of set voxels.
	#[inline]
	pub fn count(&self) -> usize {
		self.bits.count_ones()
	}

	/// True when the absolute point is a set voxel of this region.
	pub fn contains(&self, p: Point3i) -> bool {
		let dx = p.x - self.corner.x;
		let dy = p.y - self.corner.y;
		let dz = p.z - self.corner.z;
		if dx < 0 || dy < 0 || dz < 0 {
			return false;
		}
		let (dx, dy, dz) = (dx as usize, dy as usize, dz as usize);
		if dx >= self.extent.width || dy >= self.extent.height || dz >= self.extent.depth {
			return false;
		}
		self.bits[self.extent.index_of(dx, dy, dz)]
	}

	/// Count voxels set in both regions.
	///
	/// Only the bounding-box overlap is scanned, so disjoint boxes cost
	/// nothing beyond the box comparison.
	pub fn intersecting_voxels(&self, other: &BinaryRegion) -> usize {
		let lo = Point3i::new(
			self.corner.x.max(other.corner.x),
			self.corner.y.max(other.corner.y),
			self.corner.z.max(other.corner.z),
		);
		let hi = Point3i::new(
			(self.corner.x + self.extent.width as i32).min(other.corner.x + other.extent.width as i32),
			(self.corner.y + self.extent.height as i32).min(other.corner.y + other.extent.height as i32),
			(self.corner.z + self.extent.depth as i32).min(other.corner.z + other.extent.depth as i32),
		);
		if lo.x >= hi.x || lo.y >= hi.y || lo.z >= hi.z {
			return 0;
		}

		let mut shared = 0usize;
		for z in lo.z..hi.z {
			for y in lo.y..hi.y {
				for x in lo.x..hi.x {
					let p = Point3i::new(x, y, z);
					if self.contains(p) && other.contains(p) {
						shared += 1;
					}
				}
			}
		}
		shared
	}

	/// Iterate over the absolute coordinates of all set voxels.
	pub fn iter_voxels(&self) -> impl Iterator<Item = Point3i> + '_ {
		self.bits.iter_ones().map(move |local| {
			let (x, y, z) = self.extent.index_to_xyz(local);
			Point3i::new(
				self.corner.x + x as i32,
				self.corner.y + y as i32,
				self.corner.z + z as i32,
			)
		})
	}

	/// Verify every face of the bounding box carries at least one voxel.
	fn check_tight(&self) -> Result<(), SegmentError> {
		let e = self.extent;
		let face_has_voxel = |fixed_axis: usize, at: usize| -> bool {
			match fixed_axis {
				0 => (0..e.height)
					.any(|y| (0..e.depth).any(|z| self.bits[e.index_of(at, y, z)])),
				1 => (0..e.width)
					.any(|x| (0..e.depth).any(|z| self.bits[e.index_of(x, at, z)])),
				_ => (0..e.width)
					.any(|x| (0..e.height).any(|y| self.bits[e.index_of(x, y, at)])),
			}
		};

		let faces = [
			(0usize, 0usize, "x-min"),
			(0, e.width - 1, "x-max"),
			(1, 0, "y-min"),
			(1, e.height - 1, "y-max"),
			(2, 0, "z-min"),
			(2, e.depth - 1, "z-max"),
		];
		for (axis, at, name) in faces {
			if !face_has_voxel(axis, at) {
				return Err(SegmentError::LooseBoundingBox { face: name });
			}
		}
		Ok(())
	}
}
