use anyhow::Result;
use eapi::EapiClient;
use reconcile::Param;

use crate::Context;
use crate::cli::IpInterfaceArgs;
use crate::resource;

pub fn run(ctx: &Context, args: IpInterfaceArgs) -> Result<()> {
    let params = vec![
        ("name".to_string(), Param::from(args.name)),
        ("address".to_string(), Param::from(args.address)),
        ("mtu".to_string(), Param::from(args.mtu)),
        ("state".to_string(), Param::from(args.state.as_str())),
    ];
    let kind = resource::ipinterface::kind::<EapiClient>(ctx.strict)?;
    super::execute(ctx, kind, params)
}
