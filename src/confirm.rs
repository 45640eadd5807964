//! Confirmation gate for mutating operations.
//!
//! Runs once, before any request building or invocation. Declining aborts
//! the whole invocation with no call made and no output; `--force` bypasses
//! the prompt. Without a terminal on stdin the gate refuses rather than
//! guessing.

use crate::error::{Error, Result, ValidationError};
use crate::params::Invocation;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use is_terminal::IsTerminal;

/// Gates a mutating invocation behind a yes/no prompt.
///
/// Read-only operations pass straight through. Returns [`Error::Aborted`]
/// when the user declines, and a validation error when confirmation is
/// needed but stdin is not interactive.
pub fn confirm_mutation(invocation: &Invocation) -> Result<()> {
    let spec = invocation.spec;
    if !spec.mutating || invocation.force {
        return Ok(());
    }

    if !std::io::stdin().is_terminal() {
        return Err(ValidationError::ConfirmationRequired(spec.qualified_name()).into());
    }

    let prompt = format!(
        "{} ({}). Proceed?",
        spec.action,
        invocation.describe_target()
    );
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(Error::Aborted)
    }
}
