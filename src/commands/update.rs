//! Update command - Confirms with the operator, then rewrites logo paths.

use std::io::{self, BufRead, Write};

use crate::cli::confirm;
use crate::config::Config;
use crate::context::AppContext;
use crate::domain::default_logo_mapping;
use crate::errors::AppResult;
use crate::services::LogoMaintainer;

const BANNER: &str = "PARTY LOGO UPDATE";
const QUESTION: &str = "Do you want to update the logo paths?";

/// Execute the update command
pub async fn execute(config: Config) -> AppResult<()> {
    let proceed = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        ask_confirmation(&mut input, &mut io::stdout())?
    };

    if !proceed {
        tracing::debug!("Update cancelled by operator");
        return Ok(());
    }

    let mapping = default_logo_mapping();
    tracing::debug!(entries = mapping.len(), "Using built-in logo mapping");

    let summary = AppContext::scope(config, |parties| async move {
        let service = LogoMaintainer::new(parties, mapping);
        let mut out = io::stdout();
        let result = service.update_logo_paths(&mut out).await;
        result
    })
    .await?;

    if !summary.unmatched.is_empty() {
        tracing::warn!(
            unmatched = ?summary.unmatched,
            "Some parties have no logo mapping"
        );
    }
    Ok(())
}

/// Print the banner and ask whether to proceed.
///
/// On refusal, explains how to list the current logos instead.
pub fn ask_confirmation<R, W>(input: &mut R, out: &mut W) -> AppResult<bool>
where
    R: BufRead,
    W: Write,
{
    let rule = "=".repeat(70);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}\n", rule)?;

    if confirm(input, out, QUESTION)? {
        return Ok(true);
    }

    writeln!(out, "\nOperation cancelled.\n")?;
    writeln!(out, "To see the current logos, run:")?;
    writeln!(out, "  update-logos --show\n")?;
    Ok(false)
}
