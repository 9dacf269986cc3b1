mod common;

use common::{
	assert_pairwise_disjoint, block, two_basin_volume, two_well_volume_3d, uniform_volume,
	voxel_set,
};
use voxseg::error::{ErrorKind, SegmentError};
use voxseg::score::features::{CollectionFeature, PairFeature};
use voxseg::score::overlap::DenominatorPolicy;
use voxseg::score::reward::RewardPolicy;
use voxseg::segment::watershed::{watershed, Connectivity, Seed, SeedSet, WatershedConfig};
use voxseg::voxel::collection::ObjectCollection;
use voxseg::voxel::extent::{Extent, Point3i};

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn unseeded_two_basin_volume_matches_reference_collection() {
	init_logging();
	let volume = two_basin_volume();
	let objects = watershed(&volume, &WatershedConfig::default(), None, None).unwrap();

	// Reference captured by hand for this fixture: the basins claim three
	// columns each and the ridge column at x=3 belongs to nobody.
	let expected = ObjectCollection::new(vec![
		block(Point3i::new(0, 0, 0), 3, 3, 1),
		block(Point3i::new(4, 0, 0), 3, 3, 1),
	]);
	assert_eq!(objects, expected);
}

#[test]
fn output_regions_are_pairwise_disjoint() {
	init_logging();
	let volume = two_well_volume_3d();
	let objects = watershed(&volume, &WatershedConfig::default(), None, None).unwrap();
	assert!(objects.len() >= 2);
	assert_pairwise_disjoint(&objects);
	assert!(objects.total_voxels() <= volume.total_voxels());
}

#[test]
fn repeated_runs_are_identical() {
	init_logging();
	let volume = two_well_volume_3d();
	let config = WatershedConfig {
		connectivity: Connectivity::TwentySix,
	};
	let seeds = SeedSet::from_points([Point3i::new(2, 2, 1), Point3i::new(6, 2, 1)]);

	let first = watershed(&volume, &config, None, Some(&seeds)).unwrap();
	let second = watershed(&volume, &config, None, Some(&seeds)).unwrap();
	assert_eq!(first.len(), second.len());
	for (a, b) in first.iter().zip(second.iter()) {
		assert_eq!(voxel_set(a), voxel_set(b));
	}
	assert_eq!(first, second);
}

#[test]
fn uniform_volume_without_seeds_yields_one_region_covering_everything() {
	init_logging();
	let extent = Extent::new(4, 3, 2);
	let volume = uniform_volume(extent, 7.5);
	let objects = watershed(&volume, &WatershedConfig::default(), None, None).unwrap();

	assert_eq!(objects.len(), 1);
	let region = objects.get(0).unwrap();
	assert_eq!(region.count(), extent.volume());
	assert_eq!(region.corner(), Point3i::new(0, 0, 0));
	assert_eq!(region.extent(), extent);
}

#[test]
fn seeded_flooding_splits_at_the_ridge() {
	init_logging();
	let volume = two_basin_volume();
	// Seeds deliberately off the minima; there is no fallback to minima.
	let seeds = SeedSet::from_points([Point3i::new(0, 0, 0), Point3i::new(6, 0, 0)]);
	let objects = watershed(&volume, &WatershedConfig::default(), None, Some(&seeds)).unwrap();

	assert_eq!(objects.len(), 2);
	assert_pairwise_disjoint(&objects);
	assert_eq!(
		voxel_set(objects.get(0).unwrap()),
		voxel_set(&block(Point3i::new(0, 0, 0), 3, 3, 1))
	);
	assert_eq!(
		voxel_set(objects.get(1).unwrap()),
		voxel_set(&block(Point3i::new(4, 0, 0), 3, 3, 1))
	);
}

#[test]
fn mask_restricts_flooding_to_its_voxels() {
	init_logging();
	let volume = two_basin_volume();
	let mask = block(Point3i::new(0, 0, 0), 3, 3, 1);
	let objects =
		watershed(&volume, &WatershedConfig::default(), Some(&mask), None).unwrap();

	assert_eq!(objects.len(), 1);
	let region = objects.get(0).unwrap();
	assert_eq!(voxel_set(region), voxel_set(&mask));
	assert!(!region.contains(Point3i::new(3, 0, 0)));
}

#[test]
fn mask_excluding_every_seed_is_a_segmentation_failure() {
	init_logging();
	let volume = two_basin_volume();
	let mask = block(Point3i::new(0, 0, 0), 3, 3, 1);
	let seeds = SeedSet::from_points([Point3i::new(5, 0, 0), Point3i::new(6, 1, 0)]);
	let err =
		watershed(&volume, &WatershedConfig::default(), Some(&mask), Some(&seeds)).unwrap_err();
	assert_eq!(err, SegmentError::MaskExcludesSeeds);
	assert_eq!(err.kind(), ErrorKind::SegmentationFailed);
}

#[test]
fn seed_partially_inside_the_mask_keeps_its_inside_voxels() {
	init_logging();
	let volume = two_basin_volume();
	let mask = block(Point3i::new(0, 0, 0), 3, 3, 1);
	// Region seed straddling the mask edge: x=2 kept, x=3 and x=4 dropped.
	let seed_region = block(Point3i::new(2, 0, 0), 3, 1, 1);
	let seeds = SeedSet::new(vec![Seed::Region(seed_region)]);
	let objects =
		watershed(&volume, &WatershedConfig::default(), Some(&mask), Some(&seeds)).unwrap();

	assert_eq!(objects.len(), 1);
	assert_eq!(voxel_set(objects.get(0).unwrap()), voxel_set(&mask));
}

#[test]
fn feature_layer_scores_a_fresh_segmentation() {
	init_logging();
	let volume = two_basin_volume();
	let objects = watershed(&volume, &WatershedConfig::default(), None, None).unwrap();

	// Watershed regions are disjoint, so every pairwise overlap is zero.
	let overlap = PairFeature::OverlapRatio(DenominatorPolicy::MaxVolume);
	let ratio = overlap
		.evaluate(objects.get(0).unwrap(), objects.get(1).unwrap())
		.unwrap();
	assert_eq!(ratio, 0.0);

	let rewarded = CollectionFeature::RewardedCount {
		mean: 2.0,
		std_dev: 0.5,
		policy: RewardPolicy::TwoSided,
	};
	let score = rewarded.evaluate(&objects).unwrap();
	assert!(score > 0.99, "two objects against mean two should score high, got {score}");
}

#[test]
fn flooding_never_descends_below_its_seed_basin() {
	init_logging();
	// Monotone ramp: one minimum at x=0, single region covers everything.
	let volume = common::uniform_ramp();
	let objects = watershed(&volume, &WatershedConfig::default(), None, None).unwrap();
	assert_eq!(objects.len(), 1);
	assert_eq!(objects.get(0).unwrap().count(), volume.total_voxels());
}
