pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const MICROS_PER_SECOND: i64 = 1_000_000;

pub const DEFAULT_STEP_RATE_HZ: f64 = 30.0; // Fixed simulation steps per second
pub const DEFAULT_MAX_CATCHUP_STEPS: u32 = 30; // Steps run per update before excess time is dropped
pub const DEFAULT_PUBLISH_RATE_HZ: f64 = 30.0; // Interface refresh rate
pub const DEFAULT_STATS_INTERVAL: f64 = 1.0; // Diagnostic counter window (s)
pub const MAX_STEP_DURATION_US: i64 = 60 * MICROS_PER_SECOND; // Longest fixed step accepted by config

pub const SUBMARINE_DEFAULT_NAME: &str = "Sub";

pub const SONAR_SCAN_DURATION: f64 = 5.0; // Simulated seconds before a scan image is ready
pub const SONAR_DEFAULT_RANGE: u32 = 5; // Metres
pub const SONAR_DEFAULT_NUM_BINS: u32 = 100;
pub const SONAR_DEFAULT_GAIN: f64 = 0.1;
pub const SONAR_MAX_RANGE: u32 = 1024; // Keeps the scan image at most 2048x2048
