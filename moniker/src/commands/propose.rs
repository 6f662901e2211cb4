use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use moniker_engine::{NameProposer, ProposalOptions};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ProposeCommand {
    /// Type name at the declaration site, e.g. CancellationTokenSource
    type_name: String,

    /// Pascal-case the candidates (property or public field site)
    #[arg(long)]
    upper: bool,

    /// Pluralize the candidates (collection element site)
    #[arg(long)]
    plural: bool,

    /// Token already typed at the site; enables suffix proposals like FooId
    #[arg(short, long)]
    prefix: Option<String>,

    /// Path to a moniker.toml extending the built-in mappings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ProposeCommand {
    /// Run the propose command
    pub fn run(&self) -> Result<()> {
        let table = moniker_config::load_table(self.config.as_deref()).unwrap_or_exit();
        let proposer = NameProposer::new(table);

        let options = ProposalOptions {
            uppercase: self.upper,
            plural: self.plural,
            prefix: self.prefix.clone(),
        };
        let candidates = proposer.propose(&self.type_name, &options)?;

        // The token the user already typed is never a useful proposal.
        for candidate in &candidates {
            if self.prefix.as_deref() == Some(candidate.as_str()) {
                continue;
            }
            println!("{candidate}");
        }

        Ok(())
    }
}
