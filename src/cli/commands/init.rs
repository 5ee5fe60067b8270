use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the data directory holding the JSON records
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.dir.as_deref().map(expand_tilde);
    let data_dir = Config::init_all(custom, cli.test)?;

    println!("⚙️  Initializing MoveUp…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data dir    : {}", data_dir.display());

    println!("🎉 MoveUp initialization completed!");
    Ok(())
}
