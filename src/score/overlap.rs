use crate::error::SegmentError;
use crate::voxel::region::BinaryRegion;

/// How the intersection count is normalized into a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenominatorPolicy {
	/// Divide by the larger of the two regions' voxel counts (the standard policy).
	MaxVolume,
	/// Divide by the size of the union of both regions.
	UnionVolume,
	/// Divide by a fixed reference volume; must be non-zero.
	FixedReference(usize),
}

/// Intersection-over-denominator ratio of two object masks, in [0, 1].
///
/// A zero intersection short-circuits to 0 before any division. Pure
/// function of its two regions and the policy.
pub fn overlap_ratio(
	a: &BinaryRegion,
	b: &BinaryRegion,
	policy: DenominatorPolicy,
) -> Result<f64, SegmentError> {
	if policy == DenominatorPolicy::FixedReference(0) {
		return Err(SegmentError::ZeroReferenceVolume);
	}

	let shared = a.intersecting_voxels(b);
	if shared == 0 {
		return Ok(0.0);
	}

	let denominator = match policy {
		DenominatorPolicy::MaxVolume => a.count().max(b.count()),
		DenominatorPolicy::UnionVolume => a.count() + b.count() - shared,
		DenominatorPolicy::FixedReference(reference) => reference,
	};
	Ok((shared as f64 / denominator as f64).min(1.0))
}
