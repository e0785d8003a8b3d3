use crate::cli::PrefAction;
use crate::context::CliContext;
use crate::output;
use powerup_domain::PreferenceStore;
use serde_json::json;

pub async fn handle(ctx: &CliContext, action: PrefAction) -> anyhow::Result<()> {
    let prefs = PreferenceStore::new(&ctx.store);
    match action {
        PrefAction::Get { board } => {
            let moniker = prefs.load(&board).await;
            let known = moniker
                .as_deref()
                .is_some_and(|m| ctx.registry.lookup(m).is_some());
            output::output_success(json!({
                "board": board,
                "moniker": moniker,
                "known": known,
            }));
        }
        PrefAction::Set { board, moniker } => {
            let known = ctx.registry.lookup(&moniker).is_some();
            if !known {
                tracing::warn!("Saving unknown IDE moniker '{}' for board {}", moniker, board);
            }
            if let Err(e) = prefs.save(&board, &moniker).await {
                return output::output_error(&e.to_string());
            }
            output::output_success(json!({
                "board": board,
                "moniker": moniker,
                "known": known,
            }));
        }
    }
    Ok(())
}
