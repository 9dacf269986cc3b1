use crate::error::SegmentError;
use crate::score::overlap::{overlap_ratio, DenominatorPolicy};
use crate::score::reward::{reward_score, RewardPolicy};
use crate::voxel::collection::ObjectCollection;
use crate::voxel::region::BinaryRegion;

/// Named evaluations over a whole object collection.
///
/// Each variant is a pure function of the collection; nothing is mutated
/// or memoized. The returned scalar is handed to external optimization
/// logic (mark proposal/acceptance) that this crate knows nothing about.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionFeature {
	/// Number of objects.
	Count,
	/// Sum of voxel counts over all objects.
	TotalVoxels,
	/// Object count pushed through the Gaussian reward scorer.
	RewardedCount {
		mean: f64,
		std_dev: f64,
		policy: RewardPolicy,
	},
}

impl CollectionFeature {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Count => "object-count",
			Self::TotalVoxels => "total-voxels",
			Self::RewardedCount { .. } => "rewarded-object-count",
		}
	}

	pub fn evaluate(&self, objects: &ObjectCollection) -> Result<f64, SegmentError> {
		match self {
			Self::Count => Ok(objects.len() as f64),
			Self::TotalVoxels => Ok(objects.total_voxels() as f64),
			Self::RewardedCount {
				mean,
				std_dev,
				policy,
			} => reward_score(*mean, *std_dev, objects.len() as f64, *policy),
		}
	}
}

/// Named evaluations over a pair of object masks.
#[derive(Debug, Clone, PartialEq)]
pub enum PairFeature {
	/// Plain intersection ratio under the given denominator policy.
	OverlapRatio(DenominatorPolicy),
	/// Intersection ratio pushed through the Gaussian reward scorer.
	RewardedOverlap {
		denominator: DenominatorPolicy,
		mean: f64,
		std_dev: f64,
		reward: RewardPolicy,
	},
}

impl PairFeature {
	pub fn name(&self) -> &'static str {
		match self {
			Self::OverlapRatio(_) => "overlap-ratio",
			Self::RewardedOverlap { .. } => "rewarded-overlap",
		}
	}

	pub fn evaluate(&self, a: &BinaryRegion, b: &BinaryRegion) -> Result<f64, SegmentError> {
		match self {
			Self::OverlapRatio(policy) => overlap_ratio(a, b, *policy),
			Self::RewardedOverlap {
				denominator,
				mean,
				std_dev,
				reward,
			} => {
				let ratio = overlap_ratio(a, b, *denominator)?;
				reward_score(*mean, *std_dev, ratio, *reward)
			}
		}
	}
}
