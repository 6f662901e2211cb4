use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct TableCommand {
    /// Path to a moniker.toml extending the built-in mappings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dump the table as TOML, ready to paste into a moniker.toml
    #[arg(long)]
    toml: bool,
}

impl TableCommand {
    /// Run the table command
    pub fn run(&self) -> Result<()> {
        let table = moniker_config::load_table(self.config.as_deref()).unwrap_or_exit();

        if self.toml {
            print!("{}", toml::to_string(&table)?);
            return Ok(());
        }

        println!(
            "{} common name{}:",
            table.names.len(),
            if table.names.len() == 1 { "" } else { "s" }
        );
        for (type_name, name) in &table.names {
            println!("  {} -> {}", type_name, name);
        }

        println!(
            "\n{} suffix mapping{}:",
            table.suffixes.len(),
            if table.suffixes.len() == 1 { "" } else { "s" }
        );
        for (type_name, suffixes) in &table.suffixes {
            println!("  {} -> {}", type_name, suffixes.join(", "));
        }

        if !table.filtered.is_empty() {
            println!(
                "\n{} filtered type{}:",
                table.filtered.len(),
                if table.filtered.len() == 1 { "" } else { "s" }
            );
            for type_name in &table.filtered {
                println!("  {}", type_name);
            }
        }

        Ok(())
    }
}
