// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

/// Output paths of the syndication documents, relative to the output root.
/// A feed that is left unset is not generated; every toggle is independent
/// of the others, and all of them are off by default.
#[derive(Deserialize, Debug, Default, Serialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Feeds {
    pub all_atom: Option<String>,
    pub category_atom: Option<String>,
    pub translation_atom: Option<String>,
    pub author_atom: Option<String>,
    pub author_rss: Option<String>,
}

impl Feeds {
    pub fn any_enabled(&self) -> bool {
        self.all_atom.is_some()
            || self.category_atom.is_some()
            || self.translation_atom.is_some()
            || self.author_atom.is_some()
            || self.author_rss.is_some()
    }
}

mod test {

    #[test]
    fn test_feeds_disabled_by_default() {
        let feeds = crate::config::feeds::Feeds::default();
        assert!(!feeds.any_enabled());
    }

    #[test]
    fn test_feed_toggles_are_independent() {
        let config = crate::config::parse_config(
            r#"
            [feeds]
            author-rss = "feeds/author.rss.xml"
            "#,
        )
        .unwrap();

        assert!(config.feeds.any_enabled());
        assert_eq!(
            config.feeds.author_rss.as_deref(),
            Some("feeds/author.rss.xml")
        );
        assert_eq!(config.feeds.all_atom, None);
        assert_eq!(config.feeds.category_atom, None);
        assert_eq!(config.feeds.translation_atom, None);
        assert_eq!(config.feeds.author_atom, None);
    }
}
