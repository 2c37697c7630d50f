//! CLI runner - executes the pipeline end to end

use crate::cli::commands::Cli;
use crate::collect::collect_database;
use crate::error::Result;
use crate::output::write_database;
use crate::postprocess::postprocess;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline: collect, post-process, write, summarize.
    ///
    /// A missing input directory is not fatal here; the pipeline degrades
    /// to an empty-but-valid document. Only a failed write errors out.
    pub fn run(&self) -> Result<()> {
        info!(input = %self.cli.input_dir.display(), "building JSON database");

        let mut database = collect_database(&self.cli.input_dir);
        postprocess(&mut database);
        write_database(&database, &self.cli.output)?;

        info!(
            output = %self.cli.output.display(),
            listings = database.total_listings(),
            users = database.users.len(),
            "database written"
        );
        println!("Wrote {}", self.cli.output.display());
        println!(
            "  listing records (all snapshots): {}",
            database.total_listings()
        );
        println!("  unique users: {}", database.users.len());

        Ok(())
    }
}
