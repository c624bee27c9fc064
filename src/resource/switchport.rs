//! Switchport resource - layer 2 interface configuration
//!
//! Identity is the interface name. A routed interface (switchport disabled)
//! reads as absent; creating the resource puts the interface back into
//! switched mode with defaults.

use eapi::EosApi;
use reconcile::{Desired, Error, Observed, ResourceKind, Result};

/// Build the switchport capability table.
pub fn kind<C: EosApi>(strict: bool) -> Result<ResourceKind<C>> {
    let builder = ResourceKind::build("switchport", "name", fetch::<C>)
        .lifecycle(create::<C>, remove::<C>)
        .validator("name", super::interface::validate_name)
        .validator("mode", validate_mode)
        .validator("access_vlan", validate_vlan_id)
        .validator("trunk_native_vlan", validate_vlan_id)
        .validator("trunk_allowed_vlans", validate_vlan_list)
        .setter("mode", set_mode::<C>)
        .setter("access_vlan", set_access_vlan::<C>)
        .setter("trunk_native_vlan", set_trunk_native_vlan::<C>)
        .setter("trunk_allowed_vlans", set_trunk_allowed_vlans::<C>);
    let builder = if strict { builder.require_setters() } else { builder };
    builder.finish()
}

fn fetch<C: EosApi>(api: &C, desired: &Desired) -> Result<Observed> {
    let name = desired.require("name")?;
    let output = api
        .show(&format!("show interfaces {name} switchport"))
        .map_err(Error::transport)?;

    let entry = &output["switchports"][name];
    if entry["enabled"].as_bool() != Some(true) {
        return Ok(Observed::absent());
    }

    let info = &entry["switchportInfo"];
    let mut observed = Observed::present(Default::default());
    observed.set("name", name);
    if let Some(mode) = info["mode"].as_str() {
        observed.set("mode", mode);
    }
    if let Some(vlan) = info["accessVlanId"].as_i64() {
        observed.set("access_vlan", vlan.to_string());
    }
    if let Some(vlan) = info["trunkingNativeVlanId"].as_i64() {
        observed.set("trunk_native_vlan", vlan.to_string());
    }
    if let Some(vlans) = info["trunkAllowedVlans"].as_str() {
        observed.set("trunk_allowed_vlans", vlans);
    }
    Ok(observed)
}

fn create<C: EosApi>(api: &C, desired: &Desired) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[format!("interface {name}"), "switchport".to_string()])
        .map_err(Error::transport)
}

fn remove<C: EosApi>(api: &C, desired: &Desired) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[format!("interface {name}"), "no switchport".to_string()])
        .map_err(Error::transport)
}

fn set_mode<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    interface_config(api, desired, format!("switchport mode {value}"))
}

fn set_access_vlan<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    interface_config(api, desired, format!("switchport access vlan {value}"))
}

fn set_trunk_native_vlan<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    interface_config(api, desired, format!("switchport trunk native vlan {value}"))
}

fn set_trunk_allowed_vlans<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    interface_config(api, desired, format!("switchport trunk allowed vlan {value}"))
}

fn interface_config<C: EosApi>(api: &C, desired: &Desired, command: String) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[format!("interface {name}"), command])
        .map_err(Error::transport)
}

fn validate_mode(value: &str) -> std::result::Result<(), String> {
    match value {
        "access" | "trunk" => Ok(()),
        other => Err(format!("expected 'access' or 'trunk', got '{other}'")),
    }
}

fn validate_vlan_id(value: &str) -> std::result::Result<(), String> {
    match value.parse::<u16>() {
        Ok(1..=4094) => Ok(()),
        _ => Err("must be an integer between 1 and 4094".to_string()),
    }
}

fn validate_vlan_list(value: &str) -> std::result::Result<(), String> {
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '-')
    {
        Ok(())
    } else {
        Err("must be a VLAN range list such as 1,10-20".to_string())
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

    fn show_switchport(mode: &str, access_vlan: i64) -> serde_json::Value {
        json!({
            "switchports": {
                "Ethernet1": {
                    "enabled": true,
                    "switchportInfo": {
                        "mode": mode,
                        "accessVlanId": access_vlan,
                        "trunkingNativeVlanId": 1,
                        "trunkAllowedVlans": "1-4094"
                    }
                }
            }
        })
    }

    #[test]
    fn test_fetch_present() {
        let api = MockApi::default()
            .with_show("show interfaces Ethernet1 switchport", show_switchport("trunk", 1));
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        let observed = fetch(&api, &d).unwrap();
        assert_eq!(observed.state, State::Present);
        assert_eq!(observed.get("mode"), Some("trunk"));
        assert_eq!(observed.get("access_vlan"), Some("1"));
        assert_eq!(observed.get("trunk_allowed_vlans"), Some("1-4094"));
    }

    #[test]
    fn test_routed_interface_reads_absent() {
        let api = MockApi::default().with_show(
            "show interfaces Ethernet1 switchport",
            json!({"switchports": {"Ethernet1": {"enabled": false}}}),
        );
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        let observed = fetch(&api, &d).unwrap();
        assert_eq!(observed.state, State::Absent);
    }

    #[test]
    fn test_reconcile_trunk_to_access() {
        // Move a trunk port carrying the default VLAN to access/10.
        let api = MockApi::default()
            .with_show("show interfaces Ethernet1 switchport", show_switchport("trunk", 1));
        let kind = kind::<MockApi>(false).unwrap();
        let d = desired(vec![
            ("name", Param::from("Ethernet1")),
            ("mode", Param::from("access")),
            ("access_vlan", Param::from("10")),
            ("state", Param::from("present")),
        ]);

        let report = Reconciler::new(&kind, &api).run(&d).unwrap();

        assert!(report.changed);
        assert_eq!(report.changes.len(), 2);
        assert_eq!(report.changes["mode"], "access");
        assert_eq!(report.changes["access_vlan"], "10");
        let configs = api.configs();
        assert!(configs.contains(&vec![
            "interface Ethernet1".to_string(),
            "switchport mode access".to_string()
        ]));
        assert!(configs.contains(&vec![
            "interface Ethernet1".to_string(),
            "switchport access vlan 10".to_string()
        ]));
    }

    #[test]
    fn test_remove_goes_routed() {
        let api = MockApi::default()
            .with_show("show interfaces Ethernet1 switchport", show_switchport("access", 10));
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
                "no switchport".to_string()
            ]]
        );
    }

    #[test]
    fn test_validators() {
        assert!(validate_mode("access").is_ok());
        assert!(validate_mode("ring").is_err());
        assert!(validate_vlan_list("1,10-20").is_ok());
        assert!(validate_vlan_list("all").is_err());
    }
}
