//! Attribute mapper - raw input parameters to a canonical desired set
//!
//! Every key present in the raw input appears in the output with its value
//! normalized but otherwise untouched: no filtering, no defaulting beyond
//! what the caller already supplied. The one synthesized entry is `state`,
//! which defaults to `present` when the caller omitted it.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::types::{Desired, Param, State};

/// Build the desired attribute set for one run from raw parameters.
///
/// `meta` names the keys that are carried along but excluded from diffing,
/// typically the connection parameters. An explicit `state` parameter must
/// parse as `present` or `absent`; anything else is a validation error.
pub fn map_params(
    raw: impl IntoIterator<Item = (String, Param)>,
    meta: &[&str],
) -> Result<Desired> {
    let mut attrs: BTreeMap<String, Option<String>> = BTreeMap::new();
    for (key, value) in raw {
        attrs.insert(key, value.normalize());
    }

    let state = match attrs.get("state").and_then(Option::as_deref) {
        Some(value) => value.parse::<State>()?,
        None => {
            attrs.insert("state".to_string(), Some(State::Present.to_string()));
            State::Present
        }
    };

    let meta = meta.iter().map(ToString::to_string).collect();
    Ok(Desired::new(attrs, meta, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_input_key_survives() {
        let raw = vec![
            ("vlanid".to_string(), Param::from(100i64)),
            ("name".to_string(), Param::from("engineering")),
            ("enable".to_string(), Param::from(true)),
            ("host".to_string(), Param::from("sw1.example.net")),
        ];
        let desired = map_params(raw, &["host"]).unwrap();

        assert_eq!(desired.get("vlanid"), Some("100"));
        assert_eq!(desired.get("name"), Some("engineering"));
        assert_eq!(desired.get("enable"), Some("true"));
        assert_eq!(desired.get("host"), Some("sw1.example.net"));
    }

    #[test]
    fn test_state_defaults_to_present() {
        let desired = map_params(vec![("name".to_string(), Param::from("x"))], &[]).unwrap();
        assert_eq!(desired.state(), State::Present);
        assert_eq!(desired.get("state"), Some("present"));
    }

    #[test]
    fn test_explicit_absent_state() {
        let raw = vec![("state".to_string(), Param::from("absent"))];
        let desired = map_params(raw, &[]).unwrap();
        assert_eq!(desired.state(), State::Absent);
    }

    #[test]
    fn test_invalid_state_rejected() {
        let raw = vec![("state".to_string(), Param::from("gone"))];
        let err = map_params(raw, &[]).unwrap_err();
        assert!(err.to_string().contains("state"));
    }

    #[test]
    fn test_null_values_carried_as_unmanaged() {
        let raw = vec![("description".to_string(), Param::Null)];
        let desired = map_params(raw, &[]).unwrap();
        assert_eq!(desired.get("description"), None);
        assert!(desired.managed().all(|(k, _)| k != "description"));
    }
}
