//! Generic interface resource - physical interface settings
//!
//! Physical interfaces always exist on the device, so this kind carries no
//! lifecycle: whatever the desired `state`, the engine only configures.

use eapi::EosApi;
use reconcile::{Desired, Error, Observed, ResourceKind, Result};
use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z-]*[0-9]+(/[0-9]+)*$").unwrap());

/// Build the generic interface capability table.
pub fn kind<C: EosApi>(strict: bool) -> Result<ResourceKind<C>> {
    let builder = ResourceKind::build("interface", "name", fetch::<C>)
        .validator("name", validate_name)
        .validator("enable", validate_enable)
        .setter("description", set_description::<C>)
        .setter("enable", set_enable::<C>);
    let builder = if strict { builder.require_setters() } else { builder };
    builder.finish()
}

fn fetch<C: EosApi>(api: &C, desired: &Desired) -> Result<Observed> {
    let name = desired.require("name")?;
    let output = api
        .show(&format!("show interfaces {name}"))
        .map_err(Error::transport)?;

    let Some(entry) = output["interfaces"].get(name) else {
        return Ok(Observed::absent());
    };

    let mut observed = Observed::present(Default::default());
    observed.set("name", name);
    if let Some(description) = entry["description"].as_str() {
        observed.set("description", description);
    }
    let enabled = entry["interfaceStatus"].as_str() != Some("disabled");
    observed.set("enable", enabled.to_string());
    Ok(observed)
}

fn set_description<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    let name = desired.require("name")?;
    api.config(&[format!("interface {name}"), format!("description {value}")])
        .map_err(Error::transport)
}

fn set_enable<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    let name = desired.require("name")?;
    let command = if value == "true" { "no shutdown" } else { "shutdown" };
    api.config(&[format!("interface {name}"), command.to_string()])
        .map_err(Error::transport)
}

pub(super) fn validate_name(value: &str) -> std::result::Result<(), String> {
    if NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err("must be an interface name such as Ethernet1 or Port-Channel10/1".to_string())
    }
}

fn validate_enable(value: &str) -> std::result::Result<(), String> {
    match value {
        "true" | "false" => Ok(()),
        other => Err(format!("expected 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::mock::MockApi;
    use reconcile::{Param, Reconciler, mapper};
    use serde_json::json;

    fn desired(pairs: Vec<(&str, Param)>) -> Desired {
        let raw = pairs.into_iter().map(|(k, v)| (k.to_string(), v));
        mapper::map_params(raw, &[]).unwrap()
    }

    fn show_interface(status: &str, description: &str) -> serde_json::Value {
        json!({
            "interfaces": {
                "Ethernet1": {
                    "description": description,
                    "interfaceStatus": status,
                    "lineProtocolStatus": "up"
                }
            }
        })
    }

    #[test]
    fn test_fetch_reads_enable_and_description() {
        let api = MockApi::default()
            .with_show("show interfaces Ethernet1", show_interface("connected", "uplink"));
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        let observed = fetch(&api, &d).unwrap();
        assert_eq!(observed.get("enable"), Some("true"));
        assert_eq!(observed.get("description"), Some("uplink"));
    }

    #[test]
    fn test_fetch_disabled_interface() {
        let api = MockApi::default()
            .with_show("show interfaces Ethernet1", show_interface("disabled", ""));
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        let observed = fetch(&api, &d).unwrap();
        assert_eq!(observed.get("enable"), Some("false"));
    }

    #[test]
    fn test_desired_absent_still_configures() {
        // No lifecycle on this kind: absent collapses to configure.
        let api = MockApi::default()
            .with_show("show interfaces Ethernet1", show_interface("connected", ""));
        let kind = kind::<MockApi>(false).unwrap();
        let d = desired(vec![
            ("name", Param::from("Ethernet1")),
            ("description", Param::from("server rack 3")),
            ("state", Param::from("absent")),
        ]);

        let report = Reconciler::new(&kind, &api).run(&d).unwrap();

        assert!(report.changed);
        assert!(!report.removed);
        assert_eq!(
            api.configs(),
            vec![vec![
                "interface Ethernet1".to_string(),
                "description server rack 3".to_string()
            ]]
        );
    }

    #[test]
    fn test_shutdown_commands() {
        let api = MockApi::default();
        let d = desired(vec![("name", Param::from("Ethernet1"))]);

        set_enable(&api, &d, "false").unwrap();
        set_enable(&api, &d, "true").unwrap();

        assert_eq!(
            api.configs(),
            vec![
                vec!["interface Ethernet1".to_string(), "shutdown".to_string()],
                vec!["interface Ethernet1".to_string(), "no shutdown".to_string()],
            ]
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ethernet1").is_ok());
        assert!(validate_name("Ethernet3/1").is_ok());
        assert!(validate_name("Port-Channel10").is_ok());
        assert!(validate_name("Management1").is_ok());
        assert!(validate_name("eth0; reload").is_err());
        assert!(validate_name("1Ethernet").is_err());
    }
}
