//! IP interface resource - layer 3 addressing on an interface
//!
//! Identity is the interface name. A switched interface has no IP
//! configuration and reads as absent; the device rejects `show ip interface`
//! for it outright, which the fetch routine also maps to absent. Creating
//! the resource moves the interface into routed mode.

use eapi::EosApi;
use reconcile::{Desired, Error, Observed, ResourceKind, Result};
use std::net::Ipv4Addr;

/// Build the IP interface capability table.
pub fn kind<C: EosApi>(strict: bool) -> Result<ResourceKind<C>> {
    let builder = ResourceKind::build("ipinterface", "name", fetch::<C>)
        .lifecycle(create::<C>, remove::<C>)
        .validator("name", super::interface::validate_name)
        .validator("address", validate_address)
        .validator("mtu", validate_mtu)
        .setter("address", set_address::<C>)
        .setter("mtu", set_mtu::<C>);
    let builder = if strict { builder.require_setters() } else { builder };
    builder.finish()
}

fn fetch<C: EosApi>(api: &C, desired: &Desired) -> Result<Observed> {
    let name = desired.require("name")?;
    let output = match api.show(&format!("show ip interface {name}")) {
        Ok(output) => output,
        // The CLI rejects the command for a switched interface.
        Err(eapi::Error::Command { .. }) => return Ok(Observed::absent()),
        Err(err) => return Err(Error::transport(err)),
    };

    let Some(entry) = output["interfaces"].get(name) else {
        return Ok(Observed::absent());
    };

    let primary = &entry["interfaceAddress"]["primaryIp"];
    let address = primary["address"].as_str().unwrap_or("0.0.0.0");
    let mask_len = primary["maskLen"].as_i64().unwrap_or(0);
    if address == "0.0.0.0" && mask_len == 0 {
        return Ok(Observed::absent());
    }

    let mut observed = Observed::present(Default::default());
    observed.set("name", name);
    observed.set("address", format!("{address}/{mask_len}"));
    if let Some(mtu) = entry["mtu"].as_i64() {
        observed.set("mtu", mtu.to_string());
    }
    Ok(observed)
}

fn create<C: EosApi>(api: &C, desired: &Desired) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[format!("interface {name}"), "no switchport".to_string()])
        .map_err(Error::transport)
}

fn remove<C: EosApi>(api: &C, desired: &Desired) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[
        format!("interface {name}"),
        "no ip address".to_string(),
        "switchport".to_string(),
    ])
    .map_err(Error::transport)
}

fn set_address<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[format!("interface {name}"), format!("ip address {value}")])
        .map_err(Error::transport)
}

fn set_mtu<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[format!("interface {name}"), format!("mtu {value}")])
        .map_err(Error::transport)
}

fn validate_address(value: &str) -> std::result::Result<(), String> {
    let Some((addr, len)) = value.split_once('/') else {
        return Err("must be CIDR notation such as 10.0.0.1/24".to_string());
    };
    if addr.parse::<Ipv4Addr>().is_err() {
        return Err(format!("'{addr}' is not a valid IPv4 address"));
    }
    match len.parse::<u8>() {
        Ok(1..=32) => Ok(()),
        _ => Err(format!("'{len}' is not a valid prefix length")),
    }
}

fn validate_mtu(value: &str) -> std::result::Result<(), String> {
    match value.parse::<u32>() {
        Ok(68..=65535) => Ok(()),
        _ => Err("must be an integer between 68 and 65535".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::mock::MockApi;
    use reconcile::{Param, Reconciler, State, mapper};
    use serde_json::json;

    fn desired(pairs: Vec<(&str, Param)>) -> Desired {
        let raw = pairs.into_iter().map(|(k, v)| (k.to_string(), v));
        mapper::map_params(raw, &[]).unwrap()
    }

    fn show_ip_interface(address: &str, mask_len: i64, mtu: i64) -> serde_json::Value {
        json!({
            "interfaces": {
                "Ethernet1": {
                    "interfaceAddress": {
                        "primaryIp": {"address": address, "maskLen": mask_len}
                    },
                    "mtu": mtu
                }
            }
        })
    }

    #[test]
    fn test_fetch_present() {
        let api = MockApi::default()
            .with_show("show ip interface Ethernet1", show_ip_interface("10.1.1.1", 24, 1500));
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        let observed = fetch(&api, &d).unwrap();
        assert_eq!(observed.state, State::Present);
        assert_eq!(observed.get("address"), Some("10.1.1.1/24"));
        assert_eq!(observed.get("mtu"), Some("1500"));
    }

    #[test]
    fn test_unaddressed_interface_reads_absent() {
        let api = MockApi::default()
            .with_show("show ip interface Ethernet1", show_ip_interface("0.0.0.0", 0, 1500));
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        let observed = fetch(&api, &d).unwrap();
        assert_eq!(observed.state, State::Absent);
    }

    #[test]
    fn test_cli_rejection_reads_absent() {
        // No canned response: the mock answers with a command error, the
        // way the device refuses the command for a switched interface.
        let api = MockApi::default();
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        let observed = fetch(&api, &d).unwrap();
        assert_eq!(observed.state, State::Absent);
    }

    #[test]
    fn test_reconcile_readdress() {
        let api = MockApi::default()
            .with_show("show ip interface Ethernet1", show_ip_interface("10.1.1.1", 24, 1500));
        let kind = kind::<MockApi>(false).unwrap();
        let d = desired(vec![
            ("name", Param::from("Ethernet1")),
            ("address", Param::from("172.16.10.1/24")),
            ("mtu", Param::from(1500i64)),
        ]);

        let report = Reconciler::new(&kind, &api).run(&d).unwrap();

        assert!(report.changed);
        assert_eq!(report.changes.len(), 1);
        assert_eq!(report.changes["address"], "172.16.10.1/24");
        assert_eq!(
            api.configs(),
            vec![vec![
                "interface Ethernet1".to_string(),
                "ip address 172.16.10.1/24".to_string()
            ]]
        );
    }

    #[test]
    fn test_remove_returns_to_switched() {
        let api = MockApi::default()
            .with_show("show ip interface Ethernet1", show_ip_interface("10.1.1.1", 24, 1500));
        let kind = kind::<MockApi>(false).unwrap();
        let d = desired(vec![
            ("name", Param::from("Ethernet1")),
            ("state", Param::from("absent")),
        ]);

        let report = Reconciler::new(&kind, &api).run(&d).unwrap();

        assert!(report.removed);
        assert_eq!(
            api.configs(),
            vec![vec![
                "interface Ethernet1".to_string(),
                "no ip address".to_string(),
                "switchport".to_string(),
            ]]
        );
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("10.0.0.1/24").is_ok());
        assert!(validate_address("10.0.0.1").is_err());
        assert!(validate_address("300.0.0.1/24").is_err());
        assert!(validate_address("10.0.0.1/40").is_err());
    }

    #[test]
    fn test_validate_mtu() {
        assert!(validate_mtu("1500").is_ok());
        assert!(validate_mtu("67").is_err());
        assert!(validate_mtu("jumbo").is_err());
    }
}
