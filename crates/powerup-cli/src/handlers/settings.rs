use crate::cli::SettingsArgs;
use crate::context::CliContext;
use crate::host::CliHost;
use crate::output;
use powerup_domain::SettingsController;
use serde_json::json;

pub async fn handle(ctx: &CliContext, args: SettingsArgs) -> anyhow::Result<()> {
    let host = CliHost::new(false);
    let mut controller = SettingsController::open(&ctx.registry, &ctx.store, args.board).await;

    if let Some(moniker) = args.select {
        if let Err(e) = controller.select(&moniker) {
            return output::output_error(&e.to_string());
        }
        if let Err(e) = controller.save(&host).await {
            return output::output_error(&e.to_string());
        }
    }

    output::output_success(json!({
        "board": controller.board_id(),
        "state": controller.state(),
        "selected": controller.selected().moniker,
        "options": controller.options(),
    }));
    Ok(())
}
