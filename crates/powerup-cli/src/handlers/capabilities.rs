use crate::host::CliHost;
use crate::output;
use powerup_domain::capabilities::{self, Capability};
use serde_json::json;

pub async fn handle(name: Option<String>) -> anyhow::Result<()> {
    let Some(name) = name else {
        let names: Vec<&str> = Capability::ALL.iter().map(|cap| cap.host_name()).collect();
        output::output_list(names);
        return Ok(());
    };

    let capability = match name.parse::<Capability>() {
        Ok(capability) => capability,
        Err(e) => return output::output_error(&e.to_string()),
    };

    match capability {
        Capability::CardButtons => {
            output::output_success(json!({
                "capability": capability.host_name(),
                "buttons": capabilities::card_buttons(),
            }));
        }
        Capability::ShowSettings => {
            let host = CliHost::new(false);
            match capabilities::show_settings(&host) {
                Ok(popup) => output::output_success(json!({
                    "capability": capability.host_name(),
                    "popup": popup,
                })),
                Err(e) => return output::output_error(&e.to_string()),
            }
        }
    }
    Ok(())
}
