use crate::constants::{DAY_MINUTES, DEMAND_RANGE, MAP_SIZE};
use crate::data::{Dataset, Instance, Precision};
use crate::distance::get_distances;
use crate::generator::generate_base_instance;
use crate::travel_time::{generate_time_window, TravelTimeModel};
use itertools::iproduct;
use log::{debug, info};
use ndarray::{Array2, Array3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use std::cmp;

/// One city per 50 customers, at least one.
pub fn default_num_cities(num_customers: usize) -> usize {
  return cmp::max(1, num_customers / 50);
}

/// Assembles one complete instance: spatial layout, distances, a travel
/// time for every ordered pair (with a fresh random departure minute per
/// pair), and a service window per location over the full day.
pub fn generate_instance<R: Rng>(
  num_customers: usize,
  num_cities: Option<usize>,
  num_depots: usize,
  is_dynamic: bool,
  model: &TravelTimeModel,
  rng: &mut R,
) -> Instance {
  let num_cities = num_cities.unwrap_or_else(|| default_num_cities(num_customers));
  let base = generate_base_instance(
    num_customers,
    MAP_SIZE,
    num_cities,
    num_depots,
    DEMAND_RANGE,
    is_dynamic,
    rng,
  );

  let distances = get_distances(&base.locations);

  let num_locations = base.num_locations();
  let mut travel_times = Array2::<f64>::zeros((num_locations, num_locations));
  for (i, j) in iproduct!(0..num_locations, 0..num_locations) {
    if i != j {
      // Fresh departure time for every trip
      let minute = rng.gen_range(0..DAY_MINUTES) as f64;
      travel_times[[i, j]] = model.sample(i, j, &distances, minute, rng);
    }
  }

  let mut time_windows = Array2::<u32>::zeros((num_locations, 2));
  for i in 0..num_locations {
    let (start, end) = generate_time_window(0, DAY_MINUTES, rng);
    time_windows[[i, 0]] = start;
    time_windows[[i, 1]] = end;
  }

  return Instance {
    base: base,
    travel_times: travel_times,
    time_windows: time_windows,
  };
}

/// Generates `num_instances` independent instances and stacks them into
/// columnar form. Locations, demands and time windows are down-cast to the
/// storage precision `P`; travel times are rounded to 2 decimals. Each
/// instance runs on its own ChaCha stream seeded from the master rng.
pub fn generate_dataset<P: Precision, R: Rng>(
  num_customers: usize,
  num_cities: Option<usize>,
  num_depots: usize,
  num_instances: usize,
  is_dynamic: bool,
  model: &TravelTimeModel,
  rng: &mut R,
) -> Dataset<P> {
  let num_cities = num_cities.unwrap_or_else(|| default_num_cities(num_customers));
  let num_locations = num_customers + num_depots;

  let zero = P::from_u32(0);
  let mut locations = Array3::<P>::from_elem((num_instances, num_locations, 2), zero);
  let mut demands = Array2::<P>::from_elem((num_instances, num_locations), zero);
  let mut travel_times = Array3::<f64>::zeros((num_instances, num_locations, num_locations));
  let mut time_windows = Array3::<P>::from_elem((num_instances, num_locations, 2), zero);
  let mut appear_times = if is_dynamic {
    Some(Array2::<P>::from_elem((num_instances, num_locations), zero))
  } else {
    None
  };

  info!(
    "Generating {} instances with {} customers",
    num_instances, num_customers
  );
  for n in 0..num_instances {
    let mut instance_rng = ChaChaRng::seed_from_u64(rng.gen::<u64>());
    let instance = generate_instance(
      num_customers,
      Some(num_cities),
      num_depots,
      is_dynamic,
      model,
      &mut instance_rng,
    );

    for i in 0..num_locations {
      locations[[n, i, 0]] = P::from_u32(instance.base.locations[[i, 0]]);
      locations[[n, i, 1]] = P::from_u32(instance.base.locations[[i, 1]]);
      demands[[n, i]] = P::from_u32(instance.base.demands[i]);
      time_windows[[n, i, 0]] = P::from_u32(instance.time_windows[[i, 0]]);
      time_windows[[n, i, 1]] = P::from_u32(instance.time_windows[[i, 1]]);
    }
    for (i, j) in iproduct!(0..num_locations, 0..num_locations) {
      travel_times[[n, i, j]] = round2(instance.travel_times[[i, j]]);
    }
    if let Some(appear) = appear_times.as_mut() {
      let instance_appear = instance
        .base
        .appear_times
        .as_ref()
        .expect("Dynamic instance without appear times");
      for i in 0..num_locations {
        appear[[n, i]] = P::from_u32(instance_appear[i]);
      }
    }

    debug!("Generated instance {}/{}", n + 1, num_instances);
  }

  return Dataset {
    locations: locations,
    demands: demands,
    travel_times: travel_times,
    time_windows: time_windows,
    appear_times: appear_times,
    map_size: MAP_SIZE,
    num_cities: num_cities,
    num_depots: num_depots,
  };
}

fn round2(value: f64) -> f64 {
  return (value * 100.0).round() / 100.0;
}
