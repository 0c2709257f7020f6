use anyhow::{anyhow, Result};

use redfish_power::redfish::{self, Power};
use redfish_power::{ClientConfig, CollectionFetcher, HttpClient};

use crate::argsets::{GetPowerArgs, ListPowersArgs, SetPsuLedArgs};

fn with_client<T>(f: impl FnOnce(&HttpClient, &ClientConfig) -> Result<T>) -> Result<T> {
    let config = ClientConfig::from_env()?;
    let client = HttpClient::connect(&config)?;
    let res = f(&client, &config);
    if let Err(e) = client.logout() {
        log::warn!("Could not close session: {e}");
    }
    res
}

pub fn get_power(args: GetPowerArgs) -> Result<()> {
    with_client(|client, _| {
        let power = redfish::get_power(client, &args.uri)?;
        println!("{}", serde_json::to_string_pretty(&power)?);
        Ok(())
    })
}

pub fn list_powers(args: ListPowersArgs) -> Result<()> {
    with_client(|client, config| {
        let (powers, error) = CollectionFetcher::new(client)
            .with_workers(config.fetch_workers)
            .fetch_all::<Power>(&args.uri)?
            .into_parts();
        log::info!("Fetched {} power resource(s) from {}", powers.len(), args.uri);
        if let Some(error) = error {
            for (uri, err) in error.failures() {
                log::error!("Could not fetch {uri}: {err}");
            }
        }
        println!("{}", serde_json::to_string_pretty(&powers)?);
        Ok(())
    })
}

/// Set the indicator of the supply at `args.index` in the Power document.
///
/// Supplies embedded in the Power document usually have a fragment URI
/// (`.../Power#/PowerSupplies/0`). The fragment is not sent over HTTP, so the
/// service receives the PATCH on the Power document itself.
pub fn set_psu_led(args: SetPsuLedArgs) -> Result<()> {
    with_client(|client, _| {
        let mut power = redfish::get_power(client, &args.uri)?;
        let supply = power.power_supplies.get_mut(args.index).ok_or_else(|| {
            anyhow!(
                "{} has no power supply at index {}",
                args.uri,
                args.index
            )
        })?;
        supply.indicator_led = Some(args.state);
        if let Some((parent, _)) = supply.uri().split_once('#') {
            log::warn!(
                "{} is embedded in {parent}; the update is sent to the parent document",
                supply.uri()
            );
        }
        supply.update(client)?;
        log::info!("Indicator of {} set to {:?}", supply.uri(), args.state);
        Ok(())
    })
}
