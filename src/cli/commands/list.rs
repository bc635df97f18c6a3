//! List command - show identifiers the database provides

use crate::cli::args::ListArgs;
use crate::config::Config;
use crate::error::TzMemoResult;
use crate::tzdb::available_identifiers;
use crate::ui::{self, UiContext};

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config) -> TzMemoResult<()> {
    let db = super::database(config)?;
    let names = available_identifiers(&db, args.filter.as_deref());

    if names.is_empty() {
        let ctx = UiContext::detect();
        match args.filter {
            Some(filter) => ui::step_warn_hint(
                &ctx,
                &format!("No identifiers match {:?}", filter),
                "Matching is a case-insensitive substring search",
            ),
            None => ui::step_warn_hint(
                &ctx,
                &format!("The {} database is empty", config.tzdb.source),
                "Try: --tzdb bundled",
            ),
        }
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
