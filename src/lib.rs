pub mod voxel {
	pub mod extent;
	pub mod volume;
	pub mod region;
	pub mod collection;
	pub mod line;
}
pub mod segment {
	pub mod minima;
	pub mod watershed;
}
pub mod score {
	pub mod overlap;
	pub mod reward;
	pub mod features;
}
pub mod error;
pub mod info;
