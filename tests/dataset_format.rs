use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use vrp_bench::dataset::generate_dataset;
use vrp_bench::travel_time::TravelTimeModel;

#[test]
fn dataset_format_matches_the_benchmark_layout() {
  let num_customers = 10;
  let num_depots = 1;
  let num_instances = 8;
  let num_locations = num_customers + num_depots;

  let model = TravelTimeModel::default();
  let mut rng = ChaChaRng::seed_from_u64(1);
  let dataset = generate_dataset::<u16, _>(
    num_customers,
    None,
    num_depots,
    num_instances,
    false,
    &model,
    &mut rng,
  );

  assert_eq!(dataset.num_instances(), num_instances);
  assert_eq!(
    dataset.locations.dim(),
    (num_instances, num_locations, 2)
  );
  assert_eq!(dataset.demands.dim(), (num_instances, num_locations));
  assert_eq!(
    dataset.travel_times.dim(),
    (num_instances, num_locations, num_locations)
  );
  assert_eq!(
    dataset.time_windows.dim(),
    (num_instances, num_locations, 2)
  );
  assert_eq!(dataset.num_depots, num_depots);
  assert_eq!(dataset.num_cities, 1);

  for n in 0..num_instances {
    for i in 0..num_locations {
      assert_eq!(dataset.travel_times[[n, i, i]], 0.0);
      for j in 0..num_locations {
        assert!(dataset.travel_times[[n, i, j]] >= 0.0);
      }
    }
  }
}
