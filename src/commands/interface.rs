use anyhow::Result;
use eapi::EapiClient;
use reconcile::Param;

use crate::Context;
use crate::cli::InterfaceArgs;
use crate::resource;

pub fn run(ctx: &Context, args: InterfaceArgs) -> Result<()> {
    // No state flag: physical interfaces carry no lifecycle.
    let params = vec![
        ("name".to_string(), Param::from(args.name)),
        ("description".to_string(), Param::from(args.description)),
        ("enable".to_string(), Param::from(args.enable)),
    ];
    let kind = resource::interface::kind::<EapiClient>(ctx.strict)?;
    super::execute(ctx, kind, params)
}
