use crate::constants::MIN_WINDOW;
use crate::data::{LocationId, Minute};
use ndarray::Array2;
use rand::Rng;

/// One congestion peak: the multiplier rises linearly from the off-peak
/// level to `1.0 + height` at `center` and falls back off within `width`
/// minutes on either side.
#[derive(Debug, Clone, Copy)]
pub struct Peak {
  pub center: Minute,
  pub width: Minute,
  pub height: f64,
}

/// Stochastic time-of-day travel time model.
///
/// A trip's nominal duration is distance / base_speed; the congestion curve
/// and a multiplicative noise factor are applied on top. The curve shape is
/// a model parameter, only non-negativity and monotone scaling with
/// distance are contractual.
#[derive(Debug, Clone)]
pub struct TravelTimeModel {
  /// Map units per minute at free flow.
  pub base_speed: f64,
  pub peaks: Vec<Peak>,
  /// Inclusive-exclusive range of the multiplicative noise factor.
  pub noise: (f64, f64),
  /// Lower clamp on any sampled duration, in minutes.
  pub min_duration: Minute,
}

impl Default for TravelTimeModel {
  fn default() -> Self {
    Self {
      base_speed: 10.0,
      peaks: vec![
        // Morning commute
        Peak {
          center: 8.0 * 60.0,
          width: 90.0,
          height: 0.9,
        },
        // Evening commute
        Peak {
          center: 17.5 * 60.0,
          width: 90.0,
          height: 0.7,
        },
      ],
      noise: (0.85, 1.25),
      min_duration: 0.01,
    }
  }
}

impl TravelTimeModel {
  /// Congestion multiplier at the given minute of day; 1.0 off peak.
  pub fn congestion_factor(&self, minute_of_day: Minute) -> f64 {
    let mut factor = 1.0;
    for peak in &self.peaks {
      let offset = (minute_of_day - peak.center).abs();
      if offset < peak.width {
        factor += peak.height * (1.0 - offset / peak.width);
      }
    }

    return factor;
  }

  /// Samples the duration in minutes of a trip from `from` to `to`
  /// departing at `minute_of_day`. Requires `from != to`; every call
  /// draws fresh noise and no state is kept between calls.
  pub fn sample<R: Rng>(
    &self,
    from: LocationId,
    to: LocationId,
    distances: &Array2<f64>,
    minute_of_day: Minute,
    rng: &mut R,
  ) -> Minute {
    debug_assert_ne!(from, to);

    let nominal = distances[[from, to]] / self.base_speed;
    let congestion = self.congestion_factor(minute_of_day);
    let noise = rng.gen_range(self.noise.0..self.noise.1);

    return (nominal * congestion * noise).max(self.min_duration);
  }
}

/// Draws a service window within `[earliest, latest]` that is at least
/// `MIN_WINDOW` minutes long: start uniform over `[earliest, latest - 60]`,
/// end uniform over `[start + 60, latest]`. Requires a span of at least
/// `MIN_WINDOW` minutes.
pub fn generate_time_window<R: Rng>(earliest: u32, latest: u32, rng: &mut R) -> (u32, u32) {
  debug_assert!(latest - earliest >= MIN_WINDOW);

  let start = rng.gen_range(earliest..=latest - MIN_WINDOW);
  let end = rng.gen_range(start + MIN_WINDOW..=latest);

  return (start, end);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::DAY_MINUTES;
  use ndarray::arr2;
  use rand::SeedableRng;
  use rand_chacha::ChaChaRng;

  fn fixed_distances() -> Array2<f64> {
    arr2(&[[0.0, 100.0, 500.0], [100.0, 0.0, 1000.0], [500.0, 1000.0, 0.0]])
  }

  #[test]
  fn windows_satisfy_the_invariants() {
    let mut rng = ChaChaRng::seed_from_u64(11);

    for _ in 0..1000 {
      let (start, end) = generate_time_window(0, DAY_MINUTES, &mut rng);
      assert!(start + MIN_WINDOW <= end);
      assert!(end <= DAY_MINUTES);
    }
  }

  #[test]
  fn windows_respect_a_narrow_span() {
    let mut rng = ChaChaRng::seed_from_u64(13);

    for _ in 0..1000 {
      let (start, end) = generate_time_window(600, 660, &mut rng);
      assert_eq!((start, end), (600, 660));
    }
  }

  #[test]
  fn congestion_peaks_during_commutes() {
    let model = TravelTimeModel::default();

    let off_peak = model.congestion_factor(3.0 * 60.0);
    let morning = model.congestion_factor(8.0 * 60.0);
    let evening = model.congestion_factor(17.5 * 60.0);

    assert_eq!(off_peak, 1.0);
    assert!(morning > off_peak);
    assert!(evening > off_peak);
  }

  #[test]
  fn samples_are_never_negative() {
    let model = TravelTimeModel::default();
    let distances = fixed_distances();
    let mut rng = ChaChaRng::seed_from_u64(17);

    for _ in 0..1000 {
      let minute = rng.gen_range(0..DAY_MINUTES) as f64;
      let duration = model.sample(0, 1, &distances, minute, &mut rng);
      assert!(duration >= model.min_duration);
    }
  }

  #[test]
  fn zero_distance_clamps_to_the_floor() {
    let model = TravelTimeModel::default();
    let distances = arr2(&[[0.0, 0.0], [0.0, 0.0]]);
    let mut rng = ChaChaRng::seed_from_u64(19);

    let duration = model.sample(0, 1, &distances, 720.0, &mut rng);
    assert_eq!(duration, model.min_duration);
  }

  #[test]
  fn mean_duration_scales_with_distance() {
    let model = TravelTimeModel::default();
    let distances = fixed_distances();
    let mut rng = ChaChaRng::seed_from_u64(23);

    let trials = 500;
    let minute = 12.0 * 60.0;
    let mean = |from: usize, to: usize, rng: &mut ChaChaRng| -> f64 {
      let total: f64 = (0..trials)
        .map(|_| model.sample(from, to, &distances, minute, rng))
        .sum();
      total / trials as f64
    };

    let short = mean(0, 1, &mut rng);
    let medium = mean(0, 2, &mut rng);
    let long = mean(1, 2, &mut rng);

    assert!(short < medium);
    assert!(medium < long);
  }

  #[test]
  fn repeated_queries_are_sampled_independently() {
    let model = TravelTimeModel::default();
    let distances = fixed_distances();
    let mut rng = ChaChaRng::seed_from_u64(29);

    let samples: Vec<f64> = (0..100)
      .map(|_| model.sample(0, 2, &distances, 480.0, &mut rng))
      .collect();

    let distinct = samples
      .iter()
      .filter(|&&duration| duration != samples[0])
      .count();
    assert!(distinct > 0);
  }
}
