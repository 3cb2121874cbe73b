use itertools::iproduct;
use ndarray::Array2;

/// Computes the dense Euclidean distance matrix for a (L, 2) coordinate
/// array. The diagonal is 0 by construction. Callers may substitute any
/// other non-negative matrix (road distances need not be symmetric).
pub fn get_distances(locations: &Array2<u32>) -> Array2<f64> {
  let num_locations = locations.nrows();
  let mut distances = Array2::<f64>::zeros((num_locations, num_locations));

  for (i, j) in iproduct!(0..num_locations, 0..num_locations) {
    let dx = locations[[i, 0]] as f64 - locations[[j, 0]] as f64;
    let dy = locations[[i, 1]] as f64 - locations[[j, 1]] as f64;
    distances[[i, j]] = dx.hypot(dy);
  }

  return distances;
}
