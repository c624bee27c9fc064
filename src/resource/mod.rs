//! Resource kind definitions
//!
//! Each module defines one kind of EOS resource as a capability table over
//! the shared engine: identity attribute, lifecycle routines, validators and
//! setters expressed as eAPI command sequences. No kind carries its own
//! reconciliation logic; the engine owns the state machine.

pub mod interface;
pub mod ipinterface;
pub mod switchport;
pub mod vlan;

/// Keys carried in the desired set but excluded from diffing.
pub const CONNECTION_PARAMS: &[&str] =
    &["host", "username", "password", "port", "transport", "profile"];

#[cfg(test)]
pub mod mock {
    //! Recording mock device for resource kind tests.

    use eapi::EosApi;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// Serves canned `show` responses and records every config call.
    #[derive(Default)]
    pub struct MockApi {
        shows: RefCell<BTreeMap<String, Value>>,
        configs: RefCell<Vec<Vec<String>>>,
    }

    impl MockApi {
        pub fn with_show(self, command: &str, response: Value) -> Self {
            self.shows
                .borrow_mut()
                .insert(command.to_string(), response);
            self
        }

        pub fn configs(&self) -> Vec<Vec<String>> {
            self.configs.borrow().clone()
        }
    }

    impl EosApi for MockApi {
        fn show(&self, command: &str) -> eapi::Result<Value> {
            self.shows
                .borrow()
                .get(command)
                .cloned()
                .ok_or_else(|| eapi::Error::Command {
                    code: 1002,
                    message: format!("CLI command '{command}' failed: invalid command"),
                })
        }

        fn config(&self, commands: &[String]) -> eapi::Result<()> {
            self.configs.borrow_mut().push(commands.to_vec());
            Ok(())
        }
    }
}
