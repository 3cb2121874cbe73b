pub mod constants;
pub mod data;
pub mod dataset;
pub mod distance;
pub mod generator;
pub mod io;
pub mod travel_time;
