mod argsets;
mod command;
mod helpers;

use anyhow::{anyhow, Result};
use env_logger::Env;

use redfish_power::constants::{defaults, envvars};

const CMD_GET_POWER: &str = "get-power";
const CMD_LIST_POWERS: &str = "list-powers";
const CMD_SET_PSU_LED: &str = "set-psu-led";

fn main() -> Result<()> {
    let dotenv_path = helpers::load_dotenv();
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_GET_POWER) => command::get_power(argsets::GetPowerArgs {
            uri: args.free_from_str()?,
        }),
        Some(CMD_LIST_POWERS) => command::list_powers(argsets::ListPowersArgs {
            uri: args.free_from_str()?,
        }),
        Some(CMD_SET_PSU_LED) => command::set_psu_led(argsets::SetPsuLedArgs {
            uri: args.free_from_str()?,
            index: args.free_from_str()?,
            state: args.free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'get-power', 'list-powers', 'set-psu-led'"
        )),
    }
}
