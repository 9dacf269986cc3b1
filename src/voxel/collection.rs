use crate::voxel::region::BinaryRegion;

/// Ordered sequence of disjoint binary regions from one segmentation run.
///
/// Disjointness is a watershed invariant; the collection itself only
/// preserves order and ownership.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectCollection {
	regions: Vec<BinaryRegion>,
}

impl ObjectCollection {
	pub fn new(regions: Vec<BinaryRegion>) -> Self {
		Self { regions }
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.regions.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.regions.is_empty()
	}

	#[inline]
	pub fn get(&self, index: usize) -> Option<&BinaryRegion> {
		self.regions.get(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &BinaryRegion> {
		self.regions.iter()
	}

	/// Sum of voxel counts over all regions.
	pub fn total_voxels(&self) -> usize {
		self.regions.iter().map(BinaryRegion::count).sum()
	}
}

impl IntoIterator for ObjectCollection {
	type Item = BinaryRegion;
	type IntoIter = std::vec::IntoIter<BinaryRegion>;

	fn into_iter(self) -> Self::IntoIter {
		self.regions.into_iter()
	}
}

impl<'a> IntoIterator for &'a ObjectCollection {
	type Item = &'a BinaryRegion;
	type IntoIter = std::slice::Iter<'a, BinaryRegion>;

	fn into_iter(self) -> Self::IntoIter {
		self.regions.iter()
	}
}
