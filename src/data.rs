use ndarray::{Array1, Array2, Array3};

pub type LocationId = usize;
pub type Minute = f64;

/// Spatial layout and demands produced by the base generator.
///
/// Index contract: depots occupy `[0, num_depots)`, customers occupy
/// `[num_depots, num_locations())`. Time windows and travel times use the
/// same indices.
#[derive(Debug, Clone)]
pub struct BaseInstance {
  pub num_customers: usize,
  pub num_depots: usize,
  pub num_cities: usize,
  pub map_size: u32,

  /// Grid coordinates, shape (L, 2), each component in [0, map_size].
  pub locations: Array2<u32>,
  /// Per-location demand, depots fixed at 0.
  pub demands: Array1<u32>,
  /// Minute of day each customer becomes known; dynamic instances only.
  pub appear_times: Option<Array1<u32>>,
}

impl BaseInstance {
  pub fn num_locations(&self) -> usize {
    return self.num_customers + self.num_depots;
  }
}

/// One fully assembled problem instance. Immutable once built.
#[derive(Debug, Clone)]
pub struct Instance {
  pub base: BaseInstance,

  /// Dense (L, L) matrix of sampled trip durations in minutes. The
  /// diagonal is fixed at 0; every off-diagonal entry was sampled with
  /// its own random departure time.
  pub travel_times: Array2<f64>,
  /// (L, 2) matrix of [start, end] service windows in minutes.
  pub time_windows: Array2<u32>,
}

impl Instance {
  pub fn num_locations(&self) -> usize {
    return self.base.num_locations();
  }
}

/// Fixed-width unsigned storage type for down-cast dataset columns.
pub trait Precision: Copy {
  fn from_u32(value: u32) -> Self;
}

impl Precision for u8 {
  fn from_u32(value: u32) -> u8 {
    return value as u8;
  }
}

impl Precision for u16 {
  fn from_u32(value: u32) -> u16 {
    return value as u16;
  }
}

impl Precision for u32 {
  fn from_u32(value: u32) -> u32 {
    return value;
  }
}

/// Columnar batch of independently generated instances. Every per-instance
/// array has the batch index as its leading dimension.
#[derive(Debug, Clone)]
pub struct Dataset<P: Precision> {
  /// (N, L, 2)
  pub locations: Array3<P>,
  /// (N, L)
  pub demands: Array2<P>,
  /// (N, L, L), rounded to 2 decimals.
  pub travel_times: Array3<f64>,
  /// (N, L, 2)
  pub time_windows: Array3<P>,
  /// (N, L), dynamic datasets only.
  pub appear_times: Option<Array2<P>>,

  pub map_size: u32,
  pub num_cities: usize,
  pub num_depots: usize,
}

impl<P: Precision> Dataset<P> {
  pub fn num_instances(&self) -> usize {
    return self.locations.dim().0;
  }

  pub fn num_locations(&self) -> usize {
    return self.locations.dim().1;
  }
}
