/// Instances generated per customer count.
pub const NUM_INSTANCES: usize = 100;

/// Side length of the square map. Must fit the storage precision of the
/// dataset (65535 for u16) so that down-casting never wraps.
pub const MAP_SIZE: u32 = 1000;

/// Inclusive range for customer demands. Depots have demand 0.
pub const DEMAND_RANGE: (u32, u32) = (1, 35);

/// Minutes in one simulated day.
pub const DAY_MINUTES: u32 = 1440;

/// Minimum service window length in minutes.
pub const MIN_WINDOW: u32 = 60;

/// Customer count presets driven by the CLI.
pub const CUSTOMER_COUNTS: [usize; 7] = [10, 20, 50, 100, 200, 500, 1000];
