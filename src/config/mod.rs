// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod content;
pub mod feeds;
pub mod markdown;
pub mod menu;
pub mod permalinks;
pub mod site;
pub mod theme;

use camino::Utf8PathBuf;
use content::Content;
use feeds::Feeds;
use markdown::Markdown;
use menu::MenuItem;
use permalinks::Permalinks;
use serde::{Deserialize, Serialize};
use site::Site;
use theme::Theme;

pub const DEFAULT_CONFIG_PATH: &str = "./Site.toml";

/// The full settings record handed to the generation engine. Every section
/// falls back to its documented defaults, so an empty file is a valid
/// configuration.
#[derive(Deserialize, Debug, Default, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub site: Site,

    #[serde(default)]
    pub menu: Vec<MenuItem>,

    #[serde(default)]
    pub content: Content,

    #[serde(default)]
    pub permalinks: Permalinks,

    #[serde(default)]
    pub markdown: Markdown,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub feeds: Feeds,
}

/// Try to find toml file in the current directory or the parent directory.
pub fn find_config(mut toml_file: Utf8PathBuf) -> eyre::Result<Utf8PathBuf> {
    if !toml_file.exists() {
        let parent = toml_file.parent().unwrap().canonicalize_utf8()?;
        let parent = parent.parent().unwrap();

        toml_file = parent.join(DEFAULT_CONFIG_PATH);
        if !toml_file.exists() {
            return Err(eyre::eyre!("cannot find configuration file: {}", toml_file));
        }
    }
    Ok(toml_file)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre::eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}

mod test {

    #[test]
    fn test_empty_toml() {
        let config = crate::config::parse_config("").unwrap();

        assert_eq!(config.site.author, "");
        assert_eq!(config.site.timezone, "UTC");
        assert_eq!(config.site.default_lang, "en");
        assert!(config.menu.is_empty());
        assert_eq!(config.content.path, "content");
        assert_eq!(config.content.static_paths, ["images"]);
        assert!(config.content.article_paths.is_empty());
        assert!(!config.content.pagination.is_enabled());
        assert_eq!(config.permalinks.article_url, "{slug}.html");
        assert_eq!(config.permalinks.article_save_as, "{slug}.html");
        assert_eq!(config.theme.path, "./theme");
        assert!(!config.theme.show_article_author);
        assert!(!config.feeds.any_enabled());
    }

    #[test]
    fn test_simple_toml() {
        let config = crate::config::parse_config(
            r#"
            [site]
            author = "Someone"
            url = "https://example.org"

            [content]
            pagination = 5

            [feeds]
            all-atom = "feeds/all.atom.xml"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.author, "Someone");
        assert_eq!(config.site.url.unwrap().as_str(), "https://example.org/");
        assert_eq!(config.content.pagination.page_size(), Some(5));
        assert!(config.feeds.any_enabled());
        assert_eq!(config.feeds.all_atom.as_deref(), Some("feeds/all.atom.xml"));
        assert_eq!(config.feeds.author_rss, None);
    }

    #[test]
    fn test_site_toml() {
        let config = crate::config::parse_config(include_str!("../../Site.toml")).unwrap();

        assert_eq!(config.site.author, "Chris Foster");
        assert_eq!(config.site.name, "Chris Foster");
        assert_eq!(
            config.site.subtitle.as_deref(),
            Some("Yup, that's a blog alright")
        );
        assert_eq!(
            config.site.profile_image.as_deref(),
            Some("/images/chris.jpg")
        );
        assert_eq!(config.site.timezone, "Australia/Brisbane");
        assert_eq!(config.site.default_lang, "en");
        assert_eq!(config.site.license_name.as_deref(), Some("CC BY-SA"));

        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu[0].label, "blog");
        assert_eq!(config.menu[0].path, "/");

        assert_eq!(config.content.path, "content");
        assert_eq!(config.content.static_paths, ["images", "blog"]);
        assert_eq!(config.content.article_paths, ["blog"]);
        assert!(!config.content.pagination.is_enabled());

        assert_eq!(config.theme.path, "./theme_crowsfoot");
        assert!(!config.theme.show_article_author);
        assert!(!config.feeds.any_enabled());

        let extensions: Vec<_> = config
            .markdown
            .extensions
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(extensions, ["codehilite", "extra", "meta", "tilde", "math"]);
        let codehilite = &config.markdown.extensions["codehilite"];
        assert_eq!(codehilite["css-class"].as_str(), Some("highlight"));
        assert!(config.markdown.extensions["math"].is_empty());
    }

    #[test]
    fn test_site_toml_article_paths() {
        let config = crate::config::parse_config(include_str!("../../Site.toml")).unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2020, 3, 14).unwrap();
        let slug = crate::slug::Slug::new("hello-world");

        let url = crate::permalink::expand(&config.permalinks.article_url, date, &slug).unwrap();
        let save_as =
            crate::permalink::expand(&config.permalinks.article_save_as, date, &slug).unwrap();
        assert_eq!(url, "2020/03/14/hello-world.html");
        assert_eq!(save_as, url);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let toml = include_str!("../../Site.toml");
        let first = crate::config::parse_config(toml).unwrap();
        let second = crate::config::parse_config(toml).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_config_reparses() {
        let config = crate::config::Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert_eq!(crate::config::parse_config(&toml).unwrap(), config);
    }
}
