use powerup_core::{HostUi, Notice, Popup, PowerUpError, PowerUpResult};
use std::process::Command;

/// Terminal stand-in for the board's UI surfaces
pub struct CliHost {
    open_links: bool,
}

impl CliHost {
    pub fn new(open_links: bool) -> Self {
        Self { open_links }
    }
}

fn opener_command(uri: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(uri);
        cmd
    } else if cfg!(target_os = "windows") {
        // `cmd /C start` would split the link at every `&`
        let mut cmd = Command::new("rundll32");
        cmd.args(["url.dll,FileProtocolHandler", uri]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(uri);
        cmd
    }
}

impl HostUi for CliHost {
    fn popup(&self, popup: &Popup) -> PowerUpResult<()> {
        tracing::info!(
            "Popup '{}' -> {} ({}px)",
            popup.title,
            popup.url,
            popup.height
        );
        Ok(())
    }

    fn close_popup(&self) {
        tracing::debug!("Popup closed");
    }

    fn notify(&self, notice: &Notice) {
        match serde_json::to_string(&serde_json::json!({ "notice": notice })) {
            Ok(line) => eprintln!("{}", line),
            Err(_) => eprintln!("{}", notice.message),
        }
    }

    fn navigate(&self, uri: &str) -> PowerUpResult<()> {
        if !self.open_links {
            tracing::debug!("Not opening {}", uri);
            return Ok(());
        }

        let status = opener_command(uri).status().map_err(|e| {
            PowerUpError::Navigation(format!("could not run the system URL opener: {}", e))
        })?;
        if !status.success() {
            return Err(PowerUpError::Navigation(format!(
                "URL opener exited with {}",
                status
            )));
        }
        Ok(())
    }
}
