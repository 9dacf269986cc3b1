use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use voxseg::info;
use voxseg::score::features::{CollectionFeature, PairFeature};
use voxseg::score::overlap::DenominatorPolicy;
use voxseg::score::reward::RewardPolicy;
use voxseg::segment::watershed::{watershed, Connectivity, WatershedConfig};
use voxseg::voxel::extent::Extent;
use voxseg::voxel::volume::VoxelVolume;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConnectivityArg {
	Six,
	TwentySix,
}

impl From<ConnectivityArg> for Connectivity {
	fn from(arg: ConnectivityArg) -> Self {
		match arg {
			ConnectivityArg::Six => Connectivity::Six,
			ConnectivityArg::TwentySix => Connectivity::TwentySix,
		}
	}
}

/// Segment a synthetic multi-well intensity volume and score the result.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
	/// Volume width in voxels
	#[arg(long, default_value_t = 64)]
	width: usize,
	/// Volume height in voxels
	#[arg(long, default_value_t = 64)]
	height: usize,
	/// Volume depth in voxels
	#[arg(long, default_value_t = 64)]
	depth: usize,
	/// Number of intensity wells placed along the main diagonal
	#[arg(long, default_value_t = 3)]
	wells: usize,
	/// Flooding neighborhood
	#[arg(long, value_enum, default_value_t = ConnectivityArg::Six)]
	connectivity: ConnectivityArg,
}

/// Smooth synthetic volume: intensity is the distance to the nearest well.
fn synthesize_volume(extent: Extent, wells: usize) -> Result<VoxelVolume> {
	let centers: Vec<(f32, f32, f32)> = (0..wells)
		.map(|w| {
			let t = (w as f32 + 0.5) / wells as f32;
			(
				t * extent.width as f32,
				t * extent.height as f32,
				t * extent.depth as f32,
			)
		})
		.collect();

	let pb = ProgressBar::new(extent.depth as u64);
	pb.set_style(
		ProgressStyle::default_bar()
			.template("Synthesizing volume: [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
			.expect("static progress template")
			.progress_chars("#>-"),
	);

	let mut data = Vec::with_capacity(extent.volume());
	for z in 0..extent.depth {
		for y in 0..extent.height {
			for x in 0..extent.width {
				let intensity = centers
					.iter()
					.map(|&(cx, cy, cz)| {
						let dx = x as f32 - cx;
						let dy = y as f32 - cy;
						let dz = z as f32 - cz;
						(dx * dx + dy * dy + dz * dz).sqrt()
					})
					.fold(f32::INFINITY, f32::min);
				data.push(intensity);
			}
		}
		pb.inc(1);
	}
	pb.finish_with_message("volume ready");

	Ok(VoxelVolume::new(extent, data)?)
}

fn main() -> Result<()> {
	env_logger::init();
	info::print_compile_info();

	let args = Args::parse();
	let extent = Extent::new(args.width, args.height, args.depth);
	let volume = synthesize_volume(extent, args.wells)?;
	volume.report_memory();

	let config = WatershedConfig {
		connectivity: args.connectivity.into(),
	};
	let objects = watershed(&volume, &config, None, None)?;

	println!("Segmented {} objects from {} voxels", objects.len(), volume.total_voxels());
	for (which, region) in objects.iter().enumerate() {
		println!(
			"  object {:>3}: corner {} extent {} voxels {}",
			which,
			region.corner(),
			region.extent(),
			region.count()
		);
	}

	let overlap = PairFeature::OverlapRatio(DenominatorPolicy::MaxVolume);
	for i in 0..objects.len() {
		for j in (i + 1)..objects.len() {
			let ratio = overlap.evaluate(
				objects.get(i).expect("index within collection"),
				objects.get(j).expect("index within collection"),
			)?;
			if ratio > 0.0 {
				println!("  {} for objects ({i}, {j}): {ratio:.4}", overlap.name());
			}
		}
	}

	let rewarded = CollectionFeature::RewardedCount {
		mean: args.wells as f64,
		std_dev: 1.0,
		policy: RewardPolicy::TwoSided,
	};
	println!(
		"  {}: {:.4}",
		rewarded.name(),
		rewarded.evaluate(&objects)?
	);
	Ok(())
}
