use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const FETCH_WORKERS: usize = 1;
pub const LOG_LEVEL: &str = "info";
