// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use eyre::eyre;

use crate::{config, environment, slug::Slug};

#[derive(clap::Args)]
pub struct ResolveCommand {
    /// Article date, `YYYY-MM-DD`.
    #[arg(short, long)]
    pub date: String,

    /// Article slug. Exactly one of `--slug` and `--title` is required.
    #[arg(short, long, conflicts_with = "title")]
    pub slug: Option<String>,

    /// Article title the slug is derived from.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Path to the configuration file (e.g., "Site.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,
}

/// Print where an article lands under the configured permalink templates.
pub fn resolve(command: &ResolveCommand) -> eyre::Result<()> {
    environment::init_environment(Utf8PathBuf::from(&command.config))?;

    let date = NaiveDate::parse_from_str(&command.date, "%Y-%m-%d")
        .map_err(|e| eyre!("bad article date `{}`: {}", command.date, e))?;

    let slug = match (&command.slug, &command.title) {
        (Some(slug), _) => Slug::new(slug),
        (None, Some(title)) => Slug::from_title(title),
        (None, None) => return Err(eyre!("either --slug or --title is required")),
    };

    color_print::cprintln!(
        "<bold>url:</>     {}",
        environment::article_url(date, &slug)?
    );
    color_print::cprintln!(
        "<bold>save as:</> {}",
        environment::article_save_as(date, &slug)?
    );
    if let Some(full) = environment::full_article_url(date, &slug)? {
        color_print::cprintln!("<bold>full:</>    {}", full);
    }
    Ok(())
}
