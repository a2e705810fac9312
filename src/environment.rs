// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::sync::OnceLock;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use url::Url;

use crate::{
    config::{self, content::Pagination, feeds::Feeds, markdown::Markdown, menu::MenuItem, Config},
    permalink,
    slug::Slug,
};

pub struct Environment {
    /// Specifies the project root path.
    ///
    /// Please note that this value should always be automatically derived
    /// from the location of the toml configuration file.
    pub root: Utf8PathBuf,
    pub config: Config,
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

fn get_environment() -> &'static Environment {
    ENVIRONMENT.get().expect("environment must be initialized")
}

fn get_config() -> &'static Config {
    &get_environment().config
}

/// Load the configuration once for the rest of the process. A second call
/// leaves the already-installed record untouched.
pub fn init_environment(toml_file: Utf8PathBuf) -> eyre::Result<()> {
    let toml_file = config::find_config(toml_file)?;

    let root = toml_file.parent().expect("path cannot be empty");
    let toml = std::fs::read_to_string(&toml_file)?;

    _ = ENVIRONMENT.set(Environment {
        root: root.to_owned(),
        config: config::parse_config(&toml)?,
    });
    Ok(())
}

/// Mock environment for testing purposes.
#[allow(dead_code)]
pub fn mock_environment() -> eyre::Result<()> {
    _ = ENVIRONMENT.set(Environment {
        root: "./".into(),
        config: Config::default(),
    });
    Ok(())
}

pub fn root_dir() -> &'static Utf8Path {
    &get_environment().root
}

pub fn author() -> &'static str {
    &get_config().site.author
}

pub fn site_name() -> &'static str {
    &get_config().site.name
}

pub fn site_url() -> Option<&'static Url> {
    get_config().site.url.as_ref()
}

pub fn subtitle() -> Option<&'static str> {
    get_config().site.subtitle.as_deref()
}

pub fn profile_image() -> Option<&'static str> {
    get_config().site.profile_image.as_deref()
}

pub fn email() -> Option<&'static str> {
    get_config().site.email.as_deref()
}

pub fn github() -> Option<&'static Url> {
    get_config().site.github.as_ref()
}

pub fn timezone() -> &'static str {
    &get_config().site.timezone
}

pub fn default_lang() -> &'static str {
    &get_config().site.default_lang
}

pub fn license_name() -> Option<&'static str> {
    get_config().site.license_name.as_deref()
}

pub fn license_url() -> Option<&'static Url> {
    get_config().site.license_url.as_ref()
}

pub fn menu() -> &'static [MenuItem] {
    &get_config().menu
}

pub fn content_dir() -> Utf8PathBuf {
    root_dir().join(&get_config().content.path)
}

/// Directories copied through verbatim, resolved against the content root.
pub fn static_dirs() -> Vec<Utf8PathBuf> {
    let content = &get_config().content;
    content
        .static_paths
        .iter()
        .map(|path| content_dir().join(path))
        .collect()
}

/// Directories searched for articles, resolved against the content root.
pub fn article_dirs() -> Vec<Utf8PathBuf> {
    let content = &get_config().content;
    if content.article_paths.is_empty() {
        return vec![content_dir()];
    }
    content
        .article_paths
        .iter()
        .map(|path| content_dir().join(path))
        .collect()
}

pub fn pagination() -> Pagination {
    get_config().content.pagination
}

pub fn markdown() -> &'static Markdown {
    &get_config().markdown
}

pub fn theme_dir() -> Utf8PathBuf {
    root_dir().join(&get_config().theme.path)
}

pub fn show_article_author() -> bool {
    get_config().theme.show_article_author
}

pub fn feeds() -> &'static Feeds {
    &get_config().feeds
}

/// URL path of an article under the configured template, relative to the
/// site root.
pub fn article_url(date: NaiveDate, slug: &Slug) -> eyre::Result<String> {
    permalink::expand(&get_config().permalinks.article_url, date, slug)
}

/// Output file an article is written to, relative to the output root.
pub fn article_save_as(date: NaiveDate, slug: &Slug) -> eyre::Result<Utf8PathBuf> {
    let path = permalink::expand(&get_config().permalinks.article_save_as, date, slug)?;
    Ok(path.into())
}

/// Absolute URL of an article, when the site root URL is configured.
pub fn full_article_url(date: NaiveDate, slug: &Slug) -> eyre::Result<Option<Url>> {
    let Some(base) = site_url() else {
        return Ok(None);
    };
    let path = article_url(date, slug)?;
    let url = base
        .join(&path)
        .map_err(|e| eyre::eyre!("cannot join `{}` to the site url: {}", path, e))?;
    Ok(Some(url))
}

mod test {

    #[test]
    fn test_environment_defaults() {
        use crate::slug::Slug;

        crate::environment::mock_environment().unwrap();
        // A repeated set is a no-op; the first record stays in place.
        crate::environment::mock_environment().unwrap();

        assert_eq!(crate::environment::author(), "");
        assert_eq!(crate::environment::site_name(), "");
        assert!(crate::environment::site_url().is_none());
        assert!(crate::environment::subtitle().is_none());
        assert!(crate::environment::profile_image().is_none());
        assert!(crate::environment::email().is_none());
        assert!(crate::environment::github().is_none());
        assert!(crate::environment::license_name().is_none());
        assert!(crate::environment::license_url().is_none());
        assert_eq!(crate::environment::timezone(), "UTC");
        assert_eq!(crate::environment::default_lang(), "en");
        assert!(crate::environment::menu().is_empty());
        assert!(!crate::environment::feeds().any_enabled());
        assert!(!crate::environment::pagination().is_enabled());
        assert!(!crate::environment::show_article_author());
        assert!(crate::environment::markdown().extensions.is_empty());
        assert_eq!(
            crate::environment::content_dir(),
            crate::environment::root_dir().join("content")
        );
        assert_eq!(
            crate::environment::theme_dir(),
            crate::environment::root_dir().join("./theme")
        );
        assert_eq!(
            crate::environment::static_dirs(),
            [crate::environment::content_dir().join("images")]
        );
        assert_eq!(
            crate::environment::article_dirs(),
            [crate::environment::content_dir()]
        );

        let date = chrono::NaiveDate::from_ymd_opt(2020, 3, 14).unwrap();
        let slug = Slug::new("hello-world");
        let url = crate::environment::article_url(date, &slug).unwrap();
        assert_eq!(url, "hello-world.html");
        assert!(crate::environment::full_article_url(date, &slug)
            .unwrap()
            .is_none());
    }
}
