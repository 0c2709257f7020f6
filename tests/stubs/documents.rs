#![allow(dead_code)]
// Not every test binary uses every fixture

pub const POWERS: &str = "/redfish/v1/Chassis/1/Powers";
pub const POWER_1: &str = "/redfish/v1/Chassis/1/Power";
pub const POWER_2: &str = "/redfish/v1/Chassis/2/Power";
pub const POWER_3: &str = "/redfish/v1/Chassis/3/Power";
pub const PSU_1_0: &str = "/redfish/v1/Chassis/1/Power/PowerSupplies/0";

pub const POWER_COLLECTION: &str = r##"
{
    "@odata.id": "/redfish/v1/Chassis/1/Powers",
    "@odata.type": "#PowerCollection.PowerCollection",
    "Name": "Power Collection",
    "Members": [
        {"@odata.id": "/redfish/v1/Chassis/1/Power"},
        {"@odata.id": "/redfish/v1/Chassis/2/Power"},
        {"@odata.id": "/redfish/v1/Chassis/3/Power"}
    ],
    "Members@odata.count": 3
}
"##;

/// Supply identifiers as strings
pub const POWER_STRING_IDS: &str = r##"
{
    "@odata.context": "/redfish/v1/$metadata#Power.Power",
    "@odata.type": "#Power.v1_5_0.Power",
    "@odata.id": "/redfish/v1/Chassis/1/Power",
    "Id": "Power",
    "Name": "Power",
    "PowerSupplies": [
        {
            "@odata.id": "/redfish/v1/Chassis/1/Power/PowerSupplies/0",
            "MemberId": "0",
            "Name": "PSU 1",
            "IndicatorLED": "Off",
            "PowerSupplyType": "AC",
            "LineInputVoltage": 230,
            "LastPowerOutputWatts": 212,
            "Status": {"State": "Enabled", "Health": "OK"}
        }
    ],
    "PowerSupplies@odata.count": 1,
    "Voltages": [
        {
            "@odata.id": "/redfish/v1/Chassis/1/Power#/Voltages/0",
            "MemberId": "0",
            "Name": "12V",
            "ReadingVolts": 12.1,
            "SensorNumber": 4
        }
    ],
    "Voltages@odata.count": 1
}
"##;

/// The same document as served by firmware that emits numeric identifiers
pub const POWER_NUMERIC_IDS: &str = r##"
{
    "@odata.context": "/redfish/v1/$metadata#Power.Power",
    "@odata.type": "#Power.v1_5_0.Power",
    "@odata.id": "/redfish/v1/Chassis/1/Power",
    "Id": "Power",
    "Name": "Power",
    "PowerSupplies": [
        {
            "@odata.id": "/redfish/v1/Chassis/1/Power/PowerSupplies/0",
            "MemberId": 0,
            "Name": "PSU 1",
            "IndicatorLED": "Off",
            "PowerSupplyType": "AC",
            "LineInputVoltage": 230,
            "LastPowerOutputWatts": 212,
            "Status": {"State": "Enabled", "Health": "OK"}
        }
    ],
    "PowerSupplies@odata.count": 1,
    "Voltages": [
        {
            "@odata.id": "/redfish/v1/Chassis/1/Power#/Voltages/0",
            "MemberId": 0,
            "Name": "12V",
            "ReadingVolts": 12.1,
            "SensorNumber": 4
        }
    ],
    "Voltages@odata.count": 1
}
"##;

/// Minimal document: no supplies, sensors or controls
pub const POWER_MINIMAL: &str = r##"
{
    "@odata.id": "/redfish/v1/Chassis/3/Power",
    "Id": "Power",
    "Name": "Power"
}
"##;
