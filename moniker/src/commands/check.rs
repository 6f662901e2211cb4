use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use moniker_config::MonikerToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to moniker.toml (defaults to ./moniker.toml)
    #[arg(short, long, default_value = "moniker.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = MonikerToml::open(&self.config).unwrap_or_exit();
        let table = file.table();

        println!("✓ {} is valid\n", self.config.display());
        println!(
            "  {} common name{}, {} suffix mapping{}, {} filtered type{}",
            table.names.len(),
            if table.names.len() == 1 { "" } else { "s" },
            table.suffixes.len(),
            if table.suffixes.len() == 1 { "" } else { "s" },
            table.filtered.len(),
            if table.filtered.len() == 1 { "" } else { "s" },
        );

        Ok(())
    }
}
