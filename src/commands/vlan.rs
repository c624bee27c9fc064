use anyhow::Result;
use eapi::EapiClient;
use reconcile::Param;

use crate::Context;
use crate::cli::VlanArgs;
use crate::resource;

pub fn run(ctx: &Context, args: VlanArgs) -> Result<()> {
    let params = vec![
        ("vlanid".to_string(), Param::from(args.vlanid)),
        ("name".to_string(), Param::from(args.name)),
        ("enable".to_string(), Param::from(args.enable)),
        ("state".to_string(), Param::from(args.state.as_str())),
    ];
    let kind = resource::vlan::kind::<EapiClient>(ctx.strict)?;
    super::execute(ctx, kind, params)
}
