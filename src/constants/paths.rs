pub const SESSIONS: &str = "/redfish/v1/SessionService/Sessions";
