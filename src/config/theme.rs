// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_DIR: &str = "./theme";

#[derive(Deserialize, Debug, Serialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Theme {
    /// Directory of the presentation templates, relative to the project
    /// root.
    pub path: String,

    /// Show the author byline on articles. Off for single-author sites.
    pub show_article_author: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            path: DEFAULT_THEME_DIR.to_string(),
            show_article_author: false,
        }
    }
}
