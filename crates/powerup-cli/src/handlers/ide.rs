use crate::cli::IdeAction;
use crate::context::CliContext;
use crate::output;
use serde_json::json;

pub async fn handle(ctx: &CliContext, action: IdeAction) -> anyhow::Result<()> {
    match action {
        IdeAction::List => {
            let groups: Vec<Vec<&str>> = ctx
                .registry
                .groups()
                .into_iter()
                .map(|group| group.iter().map(|record| record.moniker).collect())
                .collect();
            output::output_success(json!({
                "items": ctx.registry.all(),
                "count": ctx.registry.all().len(),
                "default": ctx.registry.default_record().moniker,
                "groups": groups,
            }));
        }
        IdeAction::Get { moniker } => match ctx.registry.lookup(&moniker) {
            Some(record) => output::output_success(record),
            None => return output::output_error(&format!("IDE not found: {}", moniker)),
        },
    }
    Ok(())
}
