use std::fmt;

/// Size of a 3-D voxel box along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
	pub width: usize,  // Number of voxels along X
	pub height: usize, // Number of voxels along Y
	pub depth: usize,  // Number of voxels along Z
}

impl Extent {
	pub fn new(width: usize, height: usize, depth: usize) -> Self {
		Self {
			width,
			height,
			depth,
		}
	}

	/// Total number of voxels addressed by this extent.
	#[inline]
	pub fn volume(&self) -> usize {
		self.width * self.height * self.depth
	}

	/// Convert (x, y, z) to a linear index.
	#[inline]
	pub fn index_of(&self, x: usize, y: usize, z: usize) -> usize {
		x + y * self.width + z * self.width * self.height
	}

	/// Convert a linear index back to (x, y, z).
	#[inline]
	pub fn index_to_xyz(&self, index: usize) -> (usize, usize, usize) {
		let z = index / (self.width * self.height);
		let y = (index % (self.width * self.height)) / self.width;
		let x = index % self.width;
		(x, y, z)
	}

	/// True when the point falls inside [0, extent) on every axis.
	#[inline]
	pub fn contains(&self, p: Point3i) -> bool {
		p.x >= 0
			&& p.y >= 0
			&& p.z >= 0
			&& (p.x as usize) < self.width
			&& (p.y as usize) < self.height
			&& (p.z as usize) < self.depth
	}
}

impl fmt::Display for Extent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}x{}", self.width, self.height, self.depth)
	}
}

/// Integer 3-D coordinate, used for seeds and rasterization endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point3i {
	pub x: i32,
	pub y: i32,
	pub z: i32,
}

impl Point3i {
	pub fn new(x: i32, y: i32, z: i32) -> Self {
		Self { x, y, z }
	}
}

impl fmt::Display for Point3i {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}, {})", self.x, self.y, self.z)
	}
}
