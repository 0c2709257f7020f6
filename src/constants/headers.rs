pub const AUTH_TOKEN: &str = "X-Auth-Token";
pub const LOCATION: &str = "Location";
pub const ODATA_VERSION: &str = "OData-Version";
pub const ODATA_VERSION_VALUE: &str = "4.0";
pub const JSON_CONTENT_TYPE: &str = "application/json";
