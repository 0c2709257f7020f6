use redfish_power::common::IndicatorLed;

pub struct GetPowerArgs {
    pub uri: String,
}

pub struct ListPowersArgs {
    pub uri: String,
}

pub struct SetPsuLedArgs {
    pub uri: String,
    pub index: usize,
    pub state: IndicatorLed,
}
