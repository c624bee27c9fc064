//! Validator dispatch
//!
//! For each non-null attribute in the desired set, the kind's validator
//! table is consulted. A key with no registered validator is implicitly
//! valid; kinds opt into exactly the constraints they need.

use crate::error::{Error, Result};
use crate::kind::ResourceKind;
use crate::types::Desired;

/// Run every applicable validator against the desired set.
///
/// Fail-fast: the first rejection aborts the run before any device
/// mutation, and remaining validators are not attempted.
pub fn validate<C>(kind: &ResourceKind<C>, desired: &Desired) -> Result<()> {
    for (attr, value) in desired.values() {
        if let Some(validate) = kind.validator_for(attr) {
            validate(value).map_err(|message| Error::validation(attr, message))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper;
    use crate::types::{Observed, Param};

    struct NoConn;

    fn fetch(_: &NoConn, _: &Desired) -> Result<Observed> {
        Ok(Observed::absent())
    }

    fn reject_all(_: &str) -> std::result::Result<(), String> {
        Err("always rejected".to_string())
    }

    fn accept_all(_: &str) -> std::result::Result<(), String> {
        Ok(())
    }

    fn kind_with(validators: &[(&'static str, crate::kind::ValidateFn)]) -> ResourceKind<NoConn> {
        let mut builder = ResourceKind::build("test", "name", fetch);
        for (attr, v) in validators {
            builder = builder.validator(attr, *v);
        }
        builder.finish().unwrap()
    }

    fn desired(pairs: Vec<(&str, Param)>) -> Desired {
        let raw = pairs.into_iter().map(|(k, v)| (k.to_string(), v));
        mapper::map_params(raw, &[]).unwrap()
    }

    #[test]
    fn test_unregistered_attributes_implicitly_valid() {
        let kind = kind_with(&[]);
        let d = desired(vec![("name", Param::from("x")), ("mtu", Param::from(9000i64))]);
        assert!(validate(&kind, &d).is_ok());
    }

    #[test]
    fn test_null_values_skip_validation() {
        let kind = kind_with(&[("mtu", reject_all)]);
        let d = desired(vec![("name", Param::from("x")), ("mtu", Param::Null)]);
        assert!(validate(&kind, &d).is_ok());
    }

    #[test]
    fn test_fail_fast_surfaces_first_failure() {
        // Both attributes reject; iteration is in key order, so the error
        // must name the first key.
        let kind = kind_with(&[("access_vlan", reject_all), ("mode", reject_all)]);
        let d = desired(vec![
            ("mode", Param::from("ring")),
            ("access_vlan", Param::from(9999i64)),
        ]);
        let err = validate(&kind, &d).unwrap_err();
        assert!(matches!(err, Error::Validation { ref attr, .. } if attr == "access_vlan"));
    }

    #[test]
    fn test_passing_validator() {
        let kind = kind_with(&[("mode", accept_all)]);
        let d = desired(vec![("mode", Param::from("access"))]);
        assert!(validate(&kind, &d).is_ok());
    }
}
