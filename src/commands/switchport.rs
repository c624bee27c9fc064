use anyhow::Result;
use eapi::EapiClient;
use reconcile::Param;

use crate::Context;
use crate::cli::SwitchportArgs;
use crate::resource;

pub fn run(ctx: &Context, args: SwitchportArgs) -> Result<()> {
    let params = vec![
        ("name".to_string(), Param::from(args.name)),
        ("mode".to_string(), Param::from(args.mode)),
        ("access_vlan".to_string(), Param::from(args.access_vlan)),
        (
            "trunk_native_vlan".to_string(),
            Param::from(args.trunk_native_vlan),
        ),
        (
            "trunk_allowed_vlans".to_string(),
            Param::from(args.trunk_allowed_vlans),
        ),
        ("state".to_string(), Param::from(args.state.as_str())),
    ];
    let kind = resource::switchport::kind::<EapiClient>(ctx.strict)?;
    super::execute(ctx, kind, params)
}
