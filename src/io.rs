use crate::data::{Dataset, Precision};
use ndarray::{arr0, Array0};
use ndarray_npy::{NpzReader, NpzWriter, ReadableElement, WritableElement};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Persists a dataset as an npz archive of named arrays. Metadata scalars
/// are stored as 0-dimensional arrays.
pub fn save_dataset<P>(dataset: &Dataset<P>, path: &Path) -> Result<(), Box<dyn Error>>
where
  P: Precision + WritableElement,
{
  let mut npz = NpzWriter::new(File::create(path)?);

  npz.add_array("locations", &dataset.locations)?;
  npz.add_array("demands", &dataset.demands)?;
  npz.add_array("travel_times", &dataset.travel_times)?;
  npz.add_array("time_windows", &dataset.time_windows)?;
  if let Some(appear_times) = &dataset.appear_times {
    npz.add_array("appear_times", appear_times)?;
  }
  npz.add_array("map_size", &arr0(dataset.map_size))?;
  npz.add_array("num_cities", &arr0(dataset.num_cities as u64))?;
  npz.add_array("num_depots", &arr0(dataset.num_depots as u64))?;

  npz.finish()?;
  Ok(())
}

/// Loads a dataset previously written by `save_dataset`.
pub fn load_dataset<P>(path: &Path) -> Result<Dataset<P>, Box<dyn Error>>
where
  P: Precision + ReadableElement,
{
  let mut npz = NpzReader::new(File::open(path)?)?;
  let names = npz.names()?;

  let locations = npz.by_name("locations")?;
  let demands = npz.by_name("demands")?;
  let travel_times = npz.by_name("travel_times")?;
  let time_windows = npz.by_name("time_windows")?;
  let appear_times = if names.iter().any(|name| name == "appear_times") {
    Some(npz.by_name("appear_times")?)
  } else {
    None
  };
  let map_size: Array0<u32> = npz.by_name("map_size")?;
  let num_cities: Array0<u64> = npz.by_name("num_cities")?;
  let num_depots: Array0<u64> = npz.by_name("num_depots")?;

  Ok(Dataset {
    locations: locations,
    demands: demands,
    travel_times: travel_times,
    time_windows: time_windows,
    appear_times: appear_times,
    map_size: map_size.into_scalar(),
    num_cities: num_cities.into_scalar() as usize,
    num_depots: num_depots.into_scalar() as usize,
  })
}
