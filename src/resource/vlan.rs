//! VLAN resource - layer 2 VLAN database entries
//!
//! Identity is the VLAN id. Observed state comes from `show vlan`; the full
//! table is fetched so a missing id reads as absent instead of a CLI error.

use eapi::EosApi;
use reconcile::{Desired, Error, Observed, ResourceKind, Result};

/// Build the VLAN capability table.
pub fn kind<C: EosApi>(strict: bool) -> Result<ResourceKind<C>> {
    let builder = ResourceKind::build("vlan", "vlanid", fetch::<C>)
        .lifecycle(create::<C>, remove::<C>)
        .validator("vlanid", validate_vlanid)
        .validator("name", validate_name)
        .validator("enable", validate_enable)
        .setter("name", set_name::<C>)
        .setter("enable", set_enable::<C>);
    let builder = if strict { builder.require_setters() } else { builder };
    builder.finish()
}

fn fetch<C: EosApi>(api: &C, desired: &Desired) -> Result<Observed> {
    let vlanid = desired.require("vlanid")?;
    let output = api.show("show vlan").map_err(Error::transport)?;

    let Some(entry) = output["vlans"].get(vlanid) else {
        return Ok(Observed::absent());
    };

    let mut observed = Observed::present(Default::default());
    observed.set("vlanid", vlanid);
    if let Some(name) = entry["name"].as_str() {
        observed.set("name", name);
    }
    // The VLAN database reports "active" or "suspended".
    let enabled = entry["status"].as_str() == Some("active");
    observed.set("enable", enabled.to_string());
    Ok(observed)
}

fn create<C: EosApi>(api: &C, desired: &Desired) -> Result<()> {
    let vlanid = desired.require("vlanid")?;
    api.config(&[format!("vlan {vlanid}")])
        .map_err(Error::transport)
}

fn remove<C: EosApi>(api: &C, desired: &Desired) -> Result<()> {
    let vlanid = desired.require("vlanid")?;
    api.config(&[format!("no vlan {vlanid}")])
        .map_err(Error::transport)
}

fn set_name<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    let vlanid = desired.require("vlanid")?;
    api.config(&[format!("vlan {vlanid}"), format!("name {value}")])
        .map_err(Error::transport)
}

fn set_enable<C: EosApi>(api: &C, desired: &Desired, value: &str) -> Result<()> {
    let vlanid = desired.require("vlanid")?;
    let state = if value == "true" { "active" } else { "suspend" };
    api.config(&[format!("vlan {vlanid}"), format!("state {state}")])
        .map_err(Error::transport)
}

fn validate_vlanid(value: &str) -> std::result::Result<(), String> {
    match value.parse::<u16>() {
        Ok(1..=4094) => Ok(()),
        _ => Err("must be an integer between 1 and 4094".to_string()),
    }
}

fn validate_name(value: &str) -> std::result::Result<(), String> {
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        Ok(())
    } else {
        Err("must contain only letters, digits, underscores and hyphens".to_string())
    }
}

fn validate_enable(value: &str) -> std::result::Result<(), String> {
    match value {
        "true" | "false" => Ok(()),
        other => Err(format!("expected 'true' or 'false', got '{other}'")),
    }
}
