use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use bitvec::vec::BitVec;
use log::debug;

use crate::error::SegmentError;
use crate::segment::minima::minima_plateaus;
use crate::voxel::collection::ObjectCollection;
use crate::voxel::extent::{Extent, Point3i};
use crate::voxel::region::BinaryRegion;
use crate::voxel::volume::VoxelVolume;

const UNLABELED: u32 = 0;
const BOUNDARY: u32 = u32::MAX;

/// Neighborhood used for flooding and minima detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
	/// Face neighbors only.
	#[default]
	Six,
	/// Face, edge and corner neighbors.
	TwentySix,
}

impl Connectivity {
	/// Invoke `f` with the linear index of every in-bounds neighbor.
	pub(crate) fn for_each_neighbor(
		self,
		extent: Extent,
		index: usize,
		mut f: impl FnMut(usize),
	) {
		let (x, y, z) = extent.index_to_xyz(index);
		let (x, y, z) = (x as i64, y as i64, z as i64);
		let mut visit = |nx: i64, ny: i64, nz: i64| {
			if nx < 0 || ny < 0 || nz < 0 {
				return;
			}
			let (nx, ny, nz) = (nx as usize, ny as usize, nz as usize);
			if nx >= extent.width || ny >= extent.height || nz >= extent.depth {
				return;
			}
			f(extent.index_of(nx, ny, nz));
		};

		match self {
			Self::Six => {
				visit(x - 1, y, z);
				visit(x + 1, y, z);
				visit(x, y - 1, z);
				visit(x, y + 1, z);
				visit(x, y, z - 1);
				visit(x, y, z + 1);
			}
			Self::TwentySix => {
				for dz in -1..=1 {
					for dy in -1..=1 {
						for dx in -1..=1 {
							if dx == 0 && dy == 0 && dz == 0 {
								continue;
							}
							visit(x + dx, y + dy, z + dz);
						}
					}
				}
			}
		}
	}
}

/// Tuning knobs for one segmentation call.
#[derive(Debug, Clone, Default)]
pub struct WatershedConfig {
	pub connectivity: Connectivity,
}

/// A single flooding origin: a marker point or a small pre-shaped region.
#[derive(Debug, Clone)]
pub enum Seed {
	Point(Point3i),
	Region(BinaryRegion),
}

/// Ordered flooding origins; a seed's position determines its label.
#[derive(Debug, Clone, Default)]
pub struct SeedSet {
	seeds: Vec<Seed>,
}

impl SeedSet {
	pub fn new(seeds: Vec<Seed>) -> Self {
		Self { seeds }
	}

	pub fn from_points(points: impl IntoIterator<Item = Point3i>) -> Self {
		Self {
			seeds: points.into_iter().map(Seed::Point).collect(),
		}
	}

	pub fn push(&mut self, seed: Seed) {
		self.seeds.push(seed);
	}

	pub fn len(&self) -> usize {
		self.seeds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.seeds.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Seed> {
		self.seeds.iter()
	}
}

/// Queue entry ordered by intensity, ties by insertion sequence.
#[derive(Debug)]
struct QueueEntry {
	intensity: f32,
	seq: u64,
	index: usize,
}

impl PartialEq for QueueEntry {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for QueueEntry {
	fn cmp(&self, other: &Self) -> Ordering {
		self.intensity
			.total_cmp(&other.intensity)
			.then_with(|| self.seq.cmp(&other.seq))
	}
}

/// Flood a voxel volume into disjoint object masks by ascending intensity.
///
/// Without seeds, plateau-merged local minima start the flood; with seeds,
/// flooding originates exactly there and never falls back to minima. An
/// optional mask restricts which voxels may ever be labeled. Voxels bordered
/// by more than one label become permanent watershed boundaries and are
/// assigned to no region. All working state is local to the call.
pub fn watershed(
	volume: &VoxelVolume,
	config: &WatershedConfig,
	mask: Option<&BinaryRegion>,
	seeds: Option<&SeedSet>,
) -> Result<ObjectCollection, SegmentError> {
	let extent = volume.extent();
	let total = volume.total_voxels();
	if total == 0 {
		return Err(SegmentError::EmptyVolume);
	}

	// Eligibility map: inside the mask, or everything when no mask is given.
	let eligible = match mask {
		None => BitVec::repeat(true, total),
		Some(mask) => {
			let mut bits = BitVec::repeat(false, total);
			for index in 0..total {
				let (x, y, z) = extent.index_to_xyz(index);
				if mask.contains(Point3i::new(x as i32, y as i32, z as i32)) {
					bits.set(index, true);
				}
			}
			bits
		}
	};

	// Per-label voxel lists that start the flood.
	let seed_voxels: Vec<Vec<usize>> = match seeds {
		Some(seed_set) => resolve_seeds(seed_set, extent, &eligible, mask.is_some())?,
		None => {
			let plateaus = minima_plateaus(volume, &eligible, config.connectivity);
			if plateaus.is_empty() {
				return Err(SegmentError::NoMinimaFound);
			}
			plateaus
		}
	};
	debug!(
		"watershed: {} seeds over {} eligible voxels ({} total)",
		seed_voxels.len(),
		eligible.count_ones(),
		total
	);

	let mut labels = vec![UNLABELED; total];
	for (which, voxels) in seed_voxels.iter().enumerate() {
		let label = (which + 1) as u32;
		for &index in voxels {
			if labels[index] == UNLABELED {
				labels[index] = label;
			}
		}
	}

	// Stable min-heap: intensity first, insertion order second.
	let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
	let mut seq = 0u64;
	let push = |heap: &mut BinaryHeap<Reverse<QueueEntry>>, seq: &mut u64, index: usize| {
		heap.push(Reverse(QueueEntry {
			intensity: volume.intensity_at_index(index),
			seq: *seq,
			index,
		}));
		*seq += 1;
	};

	for voxels in &seed_voxels {
		for &index in voxels {
			config.connectivity.for_each_neighbor(extent, index, |nidx| {
				if eligible[nidx] && labels[nidx] == UNLABELED {
					push(&mut heap, &mut seq, nidx);
				}
			});
		}
	}

	while let Some(Reverse(entry)) = heap.pop() {
		let index = entry.index;
		if labels[index] != UNLABELED {
			continue; // Already claimed or declared boundary
		}

		let mut first = UNLABELED;
		let mut contested = false;
		config.connectivity.for_each_neighbor(extent, index, |nidx| {
			let label = labels[nidx];
			if label == UNLABELED || label == BOUNDARY {
				return;
			}
			if first == UNLABELED {
				first = label;
			} else if label != first {
				contested = true;
			}
		});

		if contested {
			labels[index] = BOUNDARY;
			continue;
		}
		if first == UNLABELED {
			continue; // Stale entry; a fresh one carries the current border
		}
		labels[index] = first;
		config.connectivity.for_each_neighbor(extent, index, |nidx| {
			if eligible[nidx] && labels[nidx] == UNLABELED {
				push(&mut heap, &mut seq, nidx);
			}
		});
	}

	// One region per surviving label, in label order; empty labels drop out.
	let mut buckets: Vec<Vec<Point3i>> = vec![Vec::new(); seed_voxels.len()];
	for (index, &label) in labels.iter().enumerate() {
		if label != UNLABELED && label != BOUNDARY {
			let (x, y, z) = extent.index_to_xyz(index);
			buckets[(label - 1) as usize].push(Point3i::new(x as i32, y as i32, z as i32));
		}
	}
	let regions: Vec<BinaryRegion> = buckets
		.into_iter()
		.filter_map(BinaryRegion::from_voxels)
		.collect();
	debug!("watershed: materialized {} regions", regions.len());
	Ok(ObjectCollection::new(regions))
}

/// Turn a seed set into per-label voxel-index lists, applying the mask.
fn resolve_seeds(
	seed_set: &SeedSet,
	extent: Extent,
	eligible: &BitVec,
	masked: bool,
) -> Result<Vec<Vec<usize>>, SegmentError> {
	let mut resolved = Vec::new();
	let mut any_survivor = false;

	for seed in seed_set.iter() {
		let mut voxels = Vec::new();
		let mut keep = |p: Point3i| -> Result<(), SegmentError> {
			if !extent.contains(p) {
				return Err(SegmentError::SeedOutsideVolume { seed: p, extent });
			}
			let index = extent.index_of(p.x as usize, p.y as usize, p.z as usize);
			if eligible[index] {
				voxels.push(index);
			}
			Ok(())
		};
		match seed {
			Seed::Point(p) => keep(*p)?,
			Seed::Region(region) => {
				for p in region.iter_voxels() {
					keep(p)?;
				}
			}
		}
		if !voxels.is_empty() {
			any_survivor = true;
			resolved.push(voxels);
		}
	}

	if !any_survivor {
		if masked {
			return Err(SegmentError::MaskExcludesSeeds);
		}
		return Err(SegmentError::NoMinimaFound);
	}
	Ok(resolved)
}
