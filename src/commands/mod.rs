//! Subcommand runners
//!
//! Each runner assembles the raw parameter mapping for its resource kind
//! and hands off to [`execute`], which owns connection resolution, the
//! reconciliation run, and report printing.

pub mod interface;
pub mod ipinterface;
pub mod switchport;
pub mod vlan;

use anyhow::{Context as AnyhowContext, Result};
use eapi::{Connection, EapiClient, Profiles};
use reconcile::{Param, Reconciler, ResourceKind, mapper};

use crate::Context;
use crate::cli::ConnectionArgs;
use crate::resource;

/// Run one reconciliation and print the report as JSON.
pub fn execute(
    ctx: &Context,
    kind: ResourceKind<EapiClient>,
    mut params: Vec<(String, Param)>,
) -> Result<()> {
    let conn = resolve_connection(&ctx.connection)?;

    // Connection parameters ride along in the desired set as meta keys;
    // they never reach the changeset.
    params.push(("host".to_string(), Param::from(conn.host.clone())));
    params.push(("username".to_string(), Param::from(conn.username.clone())));
    params.push(("password".to_string(), Param::from(conn.password.clone())));
    params.push(("port".to_string(), Param::from(conn.port)));
    params.push((
        "transport".to_string(),
        Param::from(conn.transport.scheme()),
    ));
    params.push((
        "profile".to_string(),
        Param::from(ctx.connection.profile.clone()),
    ));

    let desired = mapper::map_params(params, resource::CONNECTION_PARAMS)?;
    let client = EapiClient::new(&conn);

    log::info!(
        "reconciling {} against {} (check={})",
        kind.name(),
        conn.host,
        ctx.check
    );
    let report = Reconciler::new(&kind, &client)
        .dry_run(ctx.check)
        .run(&desired)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Resolve connection parameters from the profile file and flag overrides.
fn resolve_connection(args: &ConnectionArgs) -> Result<Connection> {
    let mut conn = match &args.profile {
        Some(name) => Profiles::load()?
            .find(name)
            .with_context(|| format!("profile '{name}' not found in config file"))?
            .clone(),
        None => Connection {
            host: args
                .host
                .clone()
                .context("either --host or --profile is required")?,
            username: "admin".to_string(),
            password: String::new(),
            port: None,
            transport: eapi::Transport::default(),
        },
    };

    if let Some(host) = &args.host {
        conn.host = host.clone();
    }
    if let Some(username) = &args.username {
        conn.username = username.clone();
    }
    if let Some(password) = &args.password {
        conn.password = password.clone();
    }
    if let Some(port) = args.port {
        conn.port = Some(port);
    }
    if let Some(transport) = args.transport {
        conn.transport = transport.into();
    }
    Ok(conn)
}
