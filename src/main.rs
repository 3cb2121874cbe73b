#[macro_use]
extern crate log;

use clap::{App, Arg};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::fs;
use std::path::Path;
use vrp_bench::constants::{CUSTOMER_COUNTS, NUM_INSTANCES};
use vrp_bench::dataset::generate_dataset;
use vrp_bench::io::save_dataset;
use vrp_bench::travel_time::TravelTimeModel;

fn main() {
  env_logger::init();

  let matches = App::new("vrp-bench")
    .version("1.0")
    .about("Benchmark instance generator for the time-window CVRP")
    .arg(
      Arg::with_name("seed")
        .long("seed")
        .help("Seed for rng")
        .takes_value(true)
        .required(true),
    )
    .arg(
      Arg::with_name("output")
        .long("output")
        .help("Output directory for the generated datasets")
        .takes_value(true)
        .default_value("data/real_twcvrp"),
    )
    .arg(
      Arg::with_name("num-instances")
        .long("num-instances")
        .help("Instances to generate per customer count")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("num-depots")
        .long("num-depots")
        .help("Depots per instance")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("dynamic")
        .long("dynamic")
        .help("Generate dynamic instances with customer appear times"),
    )
    .get_matches();

  let seed: u64 = matches
    .value_of("seed")
    .and_then(|m| m.parse().ok())
    .expect("Invalid seed");
  let output = matches.value_of("output").expect("Missing output");
  let num_instances: usize = matches
    .value_of("num-instances")
    .map(|m| m.parse().expect("Invalid num-instances"))
    .unwrap_or(NUM_INSTANCES);
  let num_depots: usize = matches
    .value_of("num-depots")
    .map(|m| m.parse().expect("Invalid num-depots"))
    .unwrap_or(1);
  let is_dynamic = matches.is_present("dynamic");

  fs::create_dir_all(output).expect("Error creating output directory");

  let model = TravelTimeModel::default();
  let mut rng = ChaChaRng::seed_from_u64(seed);
  for &num_customers in CUSTOMER_COUNTS.iter() {
    let dataset = generate_dataset::<u16, _>(
      num_customers,
      None,
      num_depots,
      num_instances,
      is_dynamic,
      &model,
      &mut rng,
    );

    let path = Path::new(output).join(format!("twvrp_{}.npz", num_customers));
    save_dataset(&dataset, &path).expect("Error saving dataset");
    info!("Saved {}", path.display());
  }
}
