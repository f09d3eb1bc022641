//! Format command: build a composite id from its parts.

use anyhow::Result;
use clap::Args;
use selcal_id::{ExternalId, Integration, OwnerId, SelectedCalendarKey};
use tracing::debug;

use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Format command.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Owner (user) id.
    #[arg(long)]
    user_id: u32,

    /// Integration key, e.g. google_calendar.
    #[arg(long)]
    integration: String,

    /// Provider calendar id.
    #[arg(long)]
    external_id: String,
}

impl FormatCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let key = build_key(self.user_id, &self.integration, &self.external_id)?;
        let composite = key.to_string();
        debug!(id = %composite, "Built composite id");

        match ctx.format {
            OutputFormat::Json => {
                let out = serde_json::json!({
                    "id": composite,
                    "key": key,
                });
                print_single(&out);
            }
            OutputFormat::Table => {
                print_success(&composite);
            }
        }
        Ok(())
    }
}

fn build_key(
    user_id: u32,
    integration: &str,
    external_id: &str,
) -> Result<SelectedCalendarKey, selcal_id::KeyError> {
    Ok(SelectedCalendarKey::new(
        OwnerId::new(user_id),
        Integration::new(integration)?,
        ExternalId::new(external_id)?,
    ))
}
