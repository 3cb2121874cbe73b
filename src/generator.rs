use crate::constants::DAY_MINUTES;
use crate::data::BaseInstance;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

// Standard deviation of the scatter around a city center, as a fraction of
// the map side length.
const CITY_SPREAD: f64 = 1.0 / 16.0;

// Share of customers placed uniformly over the whole map instead of around
// a city.
const OUTLIER_SHARE: f64 = 0.3;

/// Generates the spatial layout and demands for one instance.
///
/// City centers are drawn uniformly over the map. Each depot sits on a city
/// center; each customer is either scattered normally around a random city
/// or, with probability `OUTLIER_SHARE`, placed uniformly anywhere.
/// Demands are uniform over `demand_range` (inclusive) with depots at 0.
/// Dynamic instances additionally get a uniform appear time per customer.
pub fn generate_base_instance<R: Rng>(
  num_customers: usize,
  map_size: u32,
  num_cities: usize,
  num_depots: usize,
  demand_range: (u32, u32),
  is_dynamic: bool,
  rng: &mut R,
) -> BaseInstance {
  let num_locations = num_customers + num_depots;

  let city_centers: Vec<(f64, f64)> = (0..num_cities)
    .map(|_| {
      (
        rng.gen_range(0..=map_size) as f64,
        rng.gen_range(0..=map_size) as f64,
      )
    })
    .collect();

  let mut locations = Array2::<u32>::zeros((num_locations, 2));

  // Depots first, each on a city center
  for d in 0..num_depots {
    let (cx, cy) = city_centers[d % num_cities];
    locations[[d, 0]] = cx.round() as u32;
    locations[[d, 1]] = cy.round() as u32;
  }

  let spread = map_size as f64 * CITY_SPREAD;
  for c in 0..num_customers {
    let i = num_depots + c;
    let (x, y) = if rng.gen::<f64>() < OUTLIER_SHARE {
      (
        rng.gen_range(0..=map_size) as f64,
        rng.gen_range(0..=map_size) as f64,
      )
    } else {
      let (cx, cy) = city_centers[rng.gen_range(0..num_cities)];
      let sample_x = Normal::new(cx, spread).expect("Invalid spread").sample(rng);
      let sample_y = Normal::new(cy, spread).expect("Invalid spread").sample(rng);
      (sample_x, sample_y)
    };
    locations[[i, 0]] = clamp_to_map(x, map_size);
    locations[[i, 1]] = clamp_to_map(y, map_size);
  }

  let (demand_min, demand_max) = demand_range;
  let mut demands = Array1::<u32>::zeros(num_locations);
  for c in 0..num_customers {
    demands[num_depots + c] = rng.gen_range(demand_min..=demand_max);
  }

  let appear_times = if is_dynamic {
    let mut appear = Array1::<u32>::zeros(num_locations);
    for c in 0..num_customers {
      appear[num_depots + c] = rng.gen_range(0..DAY_MINUTES);
    }
    Some(appear)
  } else {
    None
  };

  return BaseInstance {
    num_customers: num_customers,
    num_depots: num_depots,
    num_cities: num_cities,
    map_size: map_size,
    locations: locations,
    demands: demands,
    appear_times: appear_times,
  };
}

fn clamp_to_map(coordinate: f64, map_size: u32) -> u32 {
  return coordinate.max(0.0).min(map_size as f64).round() as u32;
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand_chacha::ChaChaRng;

  fn generate(is_dynamic: bool) -> BaseInstance {
    let mut rng = ChaChaRng::seed_from_u64(7);
    generate_base_instance(50, 1000, 2, 2, (1, 35), is_dynamic, &mut rng)
  }

  #[test]
  fn layout_has_expected_shapes() {
    let base = generate(false);

    assert_eq!(base.num_locations(), 52);
    assert_eq!(base.locations.dim(), (52, 2));
    assert_eq!(base.demands.len(), 52);
    assert!(base.appear_times.is_none());
  }

  #[test]
  fn coordinates_stay_on_the_map() {
    let base = generate(false);

    for &coordinate in base.locations.iter() {
      assert!(coordinate <= base.map_size);
    }
  }

  #[test]
  fn depots_have_zero_demand_and_customers_are_in_range() {
    let base = generate(false);

    for d in 0..base.num_depots {
      assert_eq!(base.demands[d], 0);
    }
    for c in base.num_depots..base.num_locations() {
      assert!(base.demands[c] >= 1 && base.demands[c] <= 35);
    }
  }

  #[test]
  fn dynamic_instances_carry_appear_times() {
    let base = generate(true);

    let appear = base.appear_times.as_ref().expect("Missing appear times");
    for d in 0..base.num_depots {
      assert_eq!(appear[d], 0);
    }
    for c in base.num_depots..base.num_locations() {
      assert!(appear[c] < DAY_MINUTES);
    }
  }
}
