use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
    /// Write the script to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    match args.output {
        Some(path) => {
            let mut file =
                File::create(&path).with_context(|| format!("create {}", path.display()))?;
            generate(args.shell, &mut cmd, name, &mut file);
        }
        None => {
            let mut stdout = io::stdout().lock();
            generate(args.shell, &mut cmd, name, &mut stdout);
        }
    }
    Ok(())
}
