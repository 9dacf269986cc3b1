use thiserror::Error;

use crate::voxel::extent::{Extent, Point3i};

/// Broad failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Caller handed us something malformed (empty volume, bad seed, bad std-dev).
	InvalidInput,
	/// A segmentation attempt could not produce any region.
	SegmentationFailed,
	/// A data-structure invariant was violated (e.g. loose bounding box).
	PreconditionViolation,
}

/// All failures of the segmentation and scoring core.
///
/// Every error is reported synchronously as part of the failing call's
/// result; nothing is retried or recovered internally.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SegmentError {
	#[error("volume has no voxels")]
	EmptyVolume,

	#[error("intensity buffer holds {actual} values but extent {extent} addresses {expected}")]
	ExtentMismatch {
		extent: Extent,
		expected: usize,
		actual: usize,
	},

	#[error("seed {seed} lies outside volume extent {extent}")]
	SeedOutsideVolume { seed: Point3i, extent: Extent },

	#[error("standard deviation must be strictly positive, got {0}")]
	NonPositiveStdDev(f64),

	#[error("fixed reference volume must be non-zero")]
	ZeroReferenceVolume,

	#[error("mask excludes every seed")]
	MaskExcludesSeeds,

	#[error("no local minima found and no seeds supplied")]
	NoMinimaFound,

	#[error("a binary region must contain at least one voxel")]
	EmptyRegion,

	#[error("bitset holds {actual} bits but extent {extent} addresses {expected}")]
	BitLengthMismatch {
		extent: Extent,
		expected: usize,
		actual: usize,
	},

	#[error("bounding box is not tight: face {face} carries no voxel")]
	LooseBoundingBox { face: &'static str },
}

impl SegmentError {
	/// Map each concrete failure onto its broad category.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::EmptyVolume
			| Self::ExtentMismatch { .. }
			| Self::SeedOutsideVolume { .. }
			| Self::NonPositiveStdDev(_)
			| Self::ZeroReferenceVolume => ErrorKind::InvalidInput,
			Self::MaskExcludesSeeds | Self::NoMinimaFound => ErrorKind::SegmentationFailed,
			Self::EmptyRegion | Self::BitLengthMismatch { .. } | Self::LooseBoundingBox { .. } => {
				ErrorKind::PreconditionViolation
			}
		}
	}
}
