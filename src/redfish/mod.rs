pub mod power;

pub use power::{
    get_power, list_referenced_powers, InputRange, InputType, LineInputVoltageType, Power,
    PowerControl, PowerLimit, PowerLimitException, PowerMetric, PowerSupply, PowerSupplyType,
    Redundancy, RedundancyMode, Voltage,
};
