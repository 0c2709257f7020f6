mod power;

pub use power::{get_power, list_powers, set_psu_led};
