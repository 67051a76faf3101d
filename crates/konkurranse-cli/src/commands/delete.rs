//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use konkurranse_domain::CompetitionStore;
use konkurranse_store::JsonFileStore;
use std::io::{self, Write};
use std::path::Path;

/// Execute the delete command.
pub async fn execute_delete(
    args: DeleteArgs,
    data_file: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let store = JsonFileStore::open(data_file).await?;

    // Confirm deletion unless --yes is specified
    if !args.yes {
        let records = store.load_all().await?;
        let record = records
            .iter()
            .find(|r| r.id == args.id)
            .ok_or(CliError::NotFound(args.id))?;

        print!("Delete \"{}\" ({})? [y/N] ", record.title, record.organizer);
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    if !store.delete(args.id).await? {
        return Err(CliError::NotFound(args.id));
    }

    println!("{}", formatter.success(&format!("Deleted competition {}", args.id)));
    Ok(())
}
