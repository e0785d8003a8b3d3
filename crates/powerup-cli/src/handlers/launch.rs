use crate::cli::LaunchArgs;
use crate::context::CliContext;
use crate::host::CliHost;
use crate::output;
use powerup_core::CardHandle;
use powerup_domain::capabilities::{self, ButtonAction};
use powerup_domain::Launcher;
use powerup_persistence::JsonCardSource;

pub async fn handle(ctx: &CliContext, args: LaunchArgs) -> anyhow::Result<()> {
    let cards = JsonCardSource::new(&args.cards);
    let host = CliHost::new(args.open);
    let launcher = Launcher::new(&ctx.registry, &ctx.store, &cards, &host);

    let card = CardHandle::new(args.card);
    match capabilities::press_button(ButtonAction::StartWork, &launcher, &args.board, &card).await
    {
        Ok(outcome) => output::output_success(&outcome),
        Err(e) => return output::output_error(&e.to_string()),
    }
    Ok(())
}
