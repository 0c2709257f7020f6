//! Power metrics resource: power control and limiting, power supplies,
//! voltage sensors and redundancy groups of a chassis.

use serde::{Deserialize, Serialize};

use crate::common::decode::nullable;
use crate::common::{
    CollectionResult, Divergence, Entity, IndicatorLed, Link, Location, PhysicalContext,
    Resource, Schema, Status, WritableField,
};
use crate::error::Error;
use crate::interfaces::RemoteClient;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum InputType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum LineInputVoltageType {
    /// 100-127V AC input
    #[serde(rename = "ACLowLine")]
    AcLowLine,
    /// 200-240V AC input
    #[serde(rename = "ACMidLine")]
    AcMidLine,
    /// 277V AC input
    #[serde(rename = "ACHighLine")]
    AcHighLine,
    #[serde(rename = "DCNeg48V")]
    DcNeg48V,
    #[serde(rename = "DC380V")]
    Dc380V,
    #[serde(rename = "AC120V")]
    Ac120V,
    #[serde(rename = "AC240V")]
    Ac240V,
    #[serde(rename = "AC277V")]
    Ac277V,
    #[serde(rename = "ACandDCWideRange")]
    AcAndDcWideRange,
    #[serde(rename = "ACWideRange")]
    AcWideRange,
    #[serde(rename = "DC240V")]
    Dc240V,
    #[serde(other)]
    Unknown,
}

/// Action taken when consumption cannot be limited below the limit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum PowerLimitException {
    NoAction,
    HardPowerOff,
    LogEventOnly,
    Oem,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum PowerSupplyType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "ACorDC")]
    AcOrDc,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum RedundancyMode {
    Failover,
    #[serde(rename = "N+m")]
    NPlusM,
    Sharing,
    Sparing,
    NotRedundant,
    #[serde(other)]
    Unknown,
}

/// Input range the associated power supply can use
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputRange {
    #[serde(default)]
    pub input_type: Option<InputType>,
    #[serde(default)]
    pub maximum_frequency_hz: Option<f64>,
    #[serde(default)]
    pub maximum_voltage: Option<f64>,
    #[serde(default)]
    pub minimum_frequency_hz: Option<f64>,
    #[serde(default)]
    pub minimum_voltage: Option<f64>,
    /// Maximum power, in Watts, deliverable in this range
    #[serde(default)]
    pub output_wattage: Option<f64>,
}

/// Power limit status and configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerLimit {
    /// Time for the limiting process to bring consumption below the limit
    #[serde(default)]
    pub correction_in_ms: Option<i64>,
    #[serde(default)]
    pub limit_exception: Option<PowerLimitException>,
    /// Power cap in Watts. `None` disables capping.
    #[serde(default)]
    pub limit_in_watts: Option<f64>,
}

/// Consumption statistics over the last `interval_in_min` minutes
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerMetric {
    #[serde(default)]
    pub average_consumed_watts: Option<f64>,
    // Should be an integer, but some implementations return a float
    #[serde(default)]
    pub interval_in_min: Option<f64>,
    #[serde(default)]
    pub max_consumed_watts: Option<f64>,
    #[serde(default)]
    pub min_consumed_watts: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerControl {
    #[serde(default)]
    pub physical_context: Option<PhysicalContext>,
    #[serde(default)]
    pub power_allocated_watts: Option<f64>,
    /// Capacity not yet allocated (capacity minus allocated)
    #[serde(default)]
    pub power_available_watts: Option<f64>,
    #[serde(default)]
    pub power_capacity_watts: Option<f64>,
    #[serde(default)]
    pub power_consumed_watts: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub power_limit: PowerLimit,
    #[serde(default, deserialize_with = "nullable")]
    pub power_metrics: PowerMetric,
    #[serde(default)]
    pub power_requested_watts: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: Status,
}

impl Schema for PowerControl {}

impl Resource for PowerControl {
    const WRITABLE_FIELDS: &'static [WritableField<Self>] = &[WritableField {
        name: "PowerLimit",
        value: |c: &PowerControl| serde_json::to_value(&c.power_limit),
    }];
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Redundancy {
    #[serde(default)]
    pub mode: Option<RedundancyMode>,
    #[serde(default)]
    pub max_num_supported: Option<u32>,
    #[serde(default)]
    pub min_num_needed: Option<u32>,
    #[serde(default)]
    pub redundancy_enabled: Option<bool>,
    /// Members of this redundancy group
    #[serde(default, deserialize_with = "nullable")]
    pub redundancy_set: Vec<Link>,
    #[serde(
        rename = "RedundancySet@odata.count",
        default,
        deserialize_with = "nullable"
    )]
    pub redundancy_set_count: usize,
    #[serde(default, deserialize_with = "nullable")]
    pub status: Status,
}

impl Schema for Redundancy {}
impl Resource for Redundancy {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerSupply {
    #[serde(rename = "Assembly", default, deserialize_with = "nullable")]
    assembly: Link,
    #[serde(default)]
    pub efficiency_percent: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub firmware_version: String,
    #[serde(default, deserialize_with = "nullable")]
    pub hot_pluggable: bool,
    #[serde(rename = "IndicatorLED", default)]
    pub indicator_led: Option<IndicatorLed>,
    #[serde(default, deserialize_with = "nullable")]
    pub input_ranges: Vec<InputRange>,
    #[serde(default)]
    pub last_power_output_watts: Option<f64>,
    #[serde(default)]
    pub line_input_voltage: Option<f64>,
    #[serde(default)]
    pub line_input_voltage_type: Option<LineInputVoltageType>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Location,
    #[serde(default, deserialize_with = "nullable")]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "nullable")]
    pub model: String,
    #[serde(default, deserialize_with = "nullable")]
    pub part_number: String,
    #[serde(default)]
    pub power_capacity_watts: Option<f64>,
    #[serde(default)]
    pub power_input_watts: Option<f64>,
    #[serde(default)]
    pub power_output_watts: Option<f64>,
    #[serde(default)]
    pub power_supply_type: Option<PowerSupplyType>,
    #[serde(default, deserialize_with = "nullable")]
    pub redundancy: Vec<Entity<Redundancy>>,
    #[serde(
        rename = "Redundancy@odata.count",
        default,
        deserialize_with = "nullable"
    )]
    pub redundancy_count: usize,
    #[serde(default, deserialize_with = "nullable")]
    pub serial_number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub spare_part_number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: Status,
}

impl PowerSupply {
    /// URI of the Assembly resource for this supply, if any
    pub fn assembly(&self) -> &str {
        &self.assembly.odata_id
    }
}

impl Schema for PowerSupply {}

impl Resource for PowerSupply {
    const WRITABLE_FIELDS: &'static [WritableField<Self>] = &[WritableField {
        name: "IndicatorLED",
        value: |s: &PowerSupply| serde_json::to_value(s.indicator_led),
    }];
}

/// A voltage sensor. Thresholds use the units of `reading_volts`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voltage {
    #[serde(default)]
    pub lower_threshold_critical: Option<f64>,
    #[serde(default)]
    pub lower_threshold_fatal: Option<f64>,
    #[serde(default)]
    pub lower_threshold_non_critical: Option<f64>,
    #[serde(default)]
    pub max_reading_range: Option<f64>,
    #[serde(default)]
    pub min_reading_range: Option<f64>,
    #[serde(default)]
    pub physical_context: Option<PhysicalContext>,
    #[serde(default)]
    pub reading_volts: Option<f64>,
    #[serde(default)]
    pub sensor_number: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: Status,
    #[serde(default)]
    pub upper_threshold_critical: Option<f64>,
    #[serde(default)]
    pub upper_threshold_fatal: Option<f64>,
    #[serde(default)]
    pub upper_threshold_non_critical: Option<f64>,
}

impl Schema for Voltage {}
impl Resource for Voltage {}

/// Power metrics of a chassis or system
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Power {
    #[serde(rename = "@odata.context", default, deserialize_with = "nullable")]
    pub odata_context: String,
    #[serde(rename = "@odata.type", default, deserialize_with = "nullable")]
    pub odata_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "IndicatorLED", default)]
    pub indicator_led: Option<IndicatorLed>,
    #[serde(default, deserialize_with = "nullable")]
    pub power_control: Vec<Entity<PowerControl>>,
    #[serde(
        rename = "PowerControl@odata.count",
        default,
        deserialize_with = "nullable"
    )]
    pub power_control_count: usize,
    #[serde(default, deserialize_with = "nullable")]
    pub power_supplies: Vec<Entity<PowerSupply>>,
    #[serde(
        rename = "PowerSupplies@odata.count",
        default,
        deserialize_with = "nullable"
    )]
    pub power_supplies_count: usize,
    #[serde(default, deserialize_with = "nullable")]
    pub redundancy: Vec<Entity<Redundancy>>,
    #[serde(
        rename = "Redundancy@odata.count",
        default,
        deserialize_with = "nullable"
    )]
    pub redundancy_count: usize,
    #[serde(default, deserialize_with = "nullable")]
    pub voltages: Vec<Entity<Voltage>>,
    #[serde(
        rename = "Voltages@odata.count",
        default,
        deserialize_with = "nullable"
    )]
    pub voltages_count: usize,
}

impl Schema for Power {
    // Some firmware reports a single PowerControl object instead of an array
    const DIVERGENCES: &'static [Divergence] = &[Divergence::OneOrMany("PowerControl")];
}

impl Resource for Power {}

pub fn get_power<C: RemoteClient + ?Sized>(client: &C, uri: &str) -> Result<Entity<Power>, Error> {
    Entity::fetch(client, uri)
}

/// All Power resources of the collection at `link`
pub fn list_referenced_powers<C: RemoteClient + ?Sized>(
    client: &C,
    link: &str,
) -> Result<CollectionResult<Power>, Error> {
    crate::common::list_referenced(client, link)
}
