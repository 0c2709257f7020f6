pub const ENDPOINT: &str = "REDFISH_ENDPOINT";
pub const USERNAME: &str = "REDFISH_USERNAME";
pub const PASSWORD: &str = "REDFISH_PASSWORD";
pub const INSECURE: &str = "REDFISH_INSECURE";
pub const TIMEOUT_SECS: &str = "REDFISH_TIMEOUT_SECS";
pub const FETCH_WORKERS: &str = "REDFISH_FETCH_WORKERS";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
