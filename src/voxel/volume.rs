use std::mem::size_of;

use log::info;

use crate::error::SegmentError;
use crate::voxel::extent::{Extent, Point3i};

/// Dense 3-D intensity buffer, read-only once constructed.
///
/// Built by the I/O layer and borrowed by the watershed engine for the
/// duration of one segmentation call.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelVolume {
	extent: Extent,
	data: Vec<f32>,
}

impl VoxelVolume {
	/// Wrap an intensity buffer; the buffer length must match the extent.
	pub fn new(extent: Extent, data: Vec<f32>) -> Result<Self, SegmentError> {
		let expected = extent.volume();
		if data.len() != expected {
			return Err(SegmentError::ExtentMismatch {
				extent,
				expected,
				actual: data.len(),
			});
		}
		Ok(Self { extent, data })
	}

	/// Build a volume by evaluating `f` at every coordinate, in index order.
	pub fn from_fn(extent: Extent, mut f: impl FnMut(usize, usize, usize) -> f32) -> Self {
		let mut data = Vec::with_capacity(extent.volume());
		for z in 0..extent.depth {
			for y in 0..extent.height {
				for x in 0..extent.width {
					data.push(f(x, y, z));
				}
			}
		}
		Self { extent, data }
	}

	#[inline]
	pub fn extent(&self) -> Extent {
		self.extent
	}

	#[inline]
	pub fn total_voxels(&self) -> usize {
		self.data.len()
	}

	/// Intensity at a linear index (panics if out of bounds).
	#[inline]
	pub fn intensity_at_index(&self, index: usize) -> f32 {
		self.data[index]
	}

	/// Intensity at (x, y, z) coordinates.
	#[inline]
	pub fn intensity_at(&self, x: usize, y: usize, z: usize) -> f32 {
		self.data[self.extent.index_of(x, y, z)]
	}

	/// True when the point addresses a voxel of this volume.
	#[inline]
	pub fn in_bounds(&self, p: Point3i) -> bool {
		self.extent.contains(p)
	}

	/// Log a memory usage breakdown for this volume.
	pub fn report_memory(&self) {
		let struct_overhead = size_of::<Self>();
		let buffer_bytes = self.data.capacity() * size_of::<f32>();

		info!("VoxelVolume memory report:");
		info!("  Dimensions: {}", self.extent);
		info!("  Total voxels: {:e}", self.total_voxels() as f64);
		info!("  Struct overhead: {}", format_bytes(struct_overhead));
		info!("  Intensity buffer: {}", format_bytes(buffer_bytes));
		info!(
			"  Total: {}",
			format_bytes(struct_overhead + buffer_bytes)
		);
	}
}

/// Format byte counts with KB, MB, GB, TB suffixes.
pub(crate) fn format_bytes(bytes: usize) -> String {
	const KB: usize = 1024;
	const MB: usize = KB * 1024;
	const GB: usize = MB * 1024;
	const TB: usize = GB * 1024;

	if bytes >= TB {
		format!("{:.2} TB", bytes as f64 / TB as f64)
	} else if bytes >= GB {
		format!("{:.2} GB", bytes as f64 / GB as f64)
	} else if bytes >= MB {
		format!("{:.2} MB", bytes as f64 / MB as f64)
	} else if bytes >= KB {
		format!("{:.2} KB", bytes as f64 / KB as f64)
	} else {
		format!("{} bytes", bytes)
	}
}
