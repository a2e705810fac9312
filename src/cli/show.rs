use camino::Utf8PathBuf;
use eyre::Context;

use crate::config;

#[derive(clap::Args)]
pub struct ShowCommand {
    /// Path to the configuration file (e.g., "Site.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,
}

/// Print the effective configuration, defaults filled in, as the engine
/// will see it.
pub fn show(command: &ShowCommand) -> eyre::Result<()> {
    let toml_file = config::find_config(Utf8PathBuf::from(&command.config))?;
    let toml = std::fs::read_to_string(&toml_file)
        .wrap_err_with(|| eyre::eyre!("failed to read `{}`", toml_file))?;
    let config = config::parse_config(&toml)?;

    let rendered = toml::to_string(&config).wrap_err("failed to render effective config")?;
    color_print::cprintln!("<green># effective configuration from {}</>", toml_file);
    print!("{}", rendered);
    Ok(())
}
