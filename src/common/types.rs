use serde::{Deserialize, Serialize};

use super::decode::nullable;

/// Reference to another resource
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    #[serde(rename = "@odata.id", default, deserialize_with = "nullable")]
    pub odata_id: String,
}

impl Link {
    pub fn is_empty(&self) -> bool {
        self.odata_id.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Health {
    #[serde(rename = "OK")]
    Ok,
    Warning,
    Critical,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum State {
    Enabled,
    Disabled,
    StandbyOffline,
    StandbySpare,
    InTest,
    Starting,
    Absent,
    UnavailableOffline,
    Deferring,
    Quiesced,
    Updating,
    Qualified,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    #[serde(default)]
    pub health: Option<Health>,
    #[serde(default)]
    pub health_rollup: Option<Health>,
    #[serde(default)]
    pub state: Option<State>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum IndicatorLed {
    Lit,
    Blinking,
    Off,
    #[serde(other)]
    Unknown,
}

impl std::str::FromStr for IndicatorLed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lit" => Ok(IndicatorLed::Lit),
            "Blinking" => Ok(IndicatorLed::Blinking),
            "Off" => Ok(IndicatorLed::Off),
            _ => Err(format!("'{s}' is not one of Lit, Blinking, Off")),
        }
    }
}

/// Area or device to which a measurement or control applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum PhysicalContext {
    Room,
    Intake,
    Exhaust,
    Front,
    Back,
    Upper,
    Lower,
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    Backplane,
    SystemBoard,
    PowerSupply,
    PowerSubsystem,
    VoltageRegulator,
    Rectifier,
    StorageDevice,
    NetworkingDevice,
    ComputeBay,
    StorageBay,
    NetworkBay,
    ExpansionBay,
    PowerSupplyBay,
    Memory,
    Chassis,
    Fan,
    #[serde(rename = "ACUtilityInput")]
    AcUtilityInput,
    #[serde(rename = "ACInput")]
    AcInput,
    #[serde(rename = "ACOutput")]
    AcOutput,
    #[serde(rename = "DCBus")]
    DcBus,
    Battery,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartLocation {
    #[serde(default, deserialize_with = "nullable")]
    pub service_label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub location_type: String,
    #[serde(default)]
    pub location_ordinal_value: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub orientation: String,
    #[serde(default, deserialize_with = "nullable")]
    pub reference: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Placement {
    #[serde(default, deserialize_with = "nullable")]
    pub rack: String,
    #[serde(default)]
    pub rack_offset: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub rack_offset_units: String,
    #[serde(default, deserialize_with = "nullable")]
    pub row: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    #[serde(default, deserialize_with = "nullable")]
    pub info: String,
    #[serde(default, deserialize_with = "nullable")]
    pub info_format: String,
    #[serde(default, deserialize_with = "nullable")]
    pub part_location: PartLocation,
    #[serde(default, deserialize_with = "nullable")]
    pub placement: Placement,
}
