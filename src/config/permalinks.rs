// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ARTICLE_URL: &str = "{slug}.html";

/// Placeholder templates for per-article paths. `{date:FMT}` takes a
/// strftime format applied to the article date, `{slug}` the article slug;
/// expansion lives in [`crate::permalink`].
#[derive(Deserialize, Debug, Serialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Permalinks {
    /// URL path of a published article, relative to the site root.
    pub article_url: String,

    /// Output file an article is written to. Usually mirrors
    /// `article-url`.
    pub article_save_as: String,
}

impl Default for Permalinks {
    fn default() -> Self {
        Self {
            article_url: DEFAULT_ARTICLE_URL.to_string(),
            article_save_as: DEFAULT_ARTICLE_URL.to_string(),
        }
    }
}
