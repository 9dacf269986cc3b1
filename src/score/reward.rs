use crate::error::SegmentError;

/// Which side of the target mean earns reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardPolicy {
	/// Values above the mean score high: the CDF itself.
	HigherSide,
	/// Values below the mean score high: one minus the CDF.
	LowerSide,
	/// Proximity to the mean scores high from either side.
	TwoSided,
}

impl RewardPolicy {
	/// Resolve the original flag pair: higher-side wins over lower-side,
	/// and with neither set the two-sided policy applies.
	pub fn from_flags(reward_higher_side: bool, reward_lower_side: bool) -> Self {
		if reward_higher_side {
			Self::HigherSide
		} else if reward_lower_side {
			Self::LowerSide
		} else {
			Self::TwoSided
		}
	}
}

/// Map a feature value to a [0, 1] score via the Gaussian CDF.
///
/// The two-sided policy returns `2*(1-CDF)` above the mean and `2*CDF` at
/// or below it; both expressions agree at the mean itself. A non-positive
/// standard deviation is rejected, never clamped.
pub fn reward_score(
	mean: f64,
	std_dev: f64,
	value: f64,
	policy: RewardPolicy,
) -> Result<f64, SegmentError> {
	if !(std_dev > 0.0) {
		return Err(SegmentError::NonPositiveStdDev(std_dev));
	}
	let cdf = normal_cdf(mean, std_dev, value);
	Ok(match policy {
		RewardPolicy::HigherSide => cdf,
		RewardPolicy::LowerSide => 1.0 - cdf,
		RewardPolicy::TwoSided => {
			// Saturates at 1.0; the erf approximation can leave the CDF a
			// hair above one half at the mean itself.
			let doubled = if value > mean {
				2.0 * (1.0 - cdf)
			} else {
				2.0 * cdf
			};
			doubled.min(1.0)
		}
	})
}

/// Cumulative distribution of N(mean, std_dev) at `x`.
pub fn normal_cdf(mean: f64, std_dev: f64, x: f64) -> f64 {
	0.5 * (1.0 + erf((x - mean) / (std_dev * std::f64::consts::SQRT_2)))
}

/// Error function, Abramowitz & Stegun 7.1.26 (|error| < 1.5e-7).
fn erf(x: f64) -> f64 {
	const P: f64 = 0.327_591_1;
	const A1: f64 = 0.254_829_592;
	const A2: f64 = -0.284_496_736;
	const A3: f64 = 1.421_413_741;
	const A4: f64 = -1.453_152_027;
	const A5: f64 = 1.061_405_429;

	let sign = if x < 0.0 { -1.0 } else { 1.0 };
	let x = x.abs();
	let t = 1.0 / (1.0 + P * x);
	let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
	sign * (1.0 - poly * (-x * x).exp())
}
