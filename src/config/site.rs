// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LANG: &str = "en";

/// Identity, contact and licensing settings for the site as a whole.
#[derive(Deserialize, Debug, Serialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Site {
    pub author: String,
    pub name: String,

    /// Absolute root URL of the published site. Left unset, generated
    /// links stay site-relative.
    pub url: Option<Url>,

    pub subtitle: Option<String>,

    /// Site-relative path of the author picture shown by the theme.
    pub profile_image: Option<String>,

    pub email: Option<String>,
    pub github: Option<Url>,

    /// IANA zone name applied to article dates. Opaque here; the engine
    /// interprets it.
    pub timezone: String,

    pub default_lang: String,

    pub license_name: Option<String>,
    pub license_url: Option<Url>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            author: String::new(),
            name: String::new(),
            url: None,
            subtitle: None,
            profile_image: None,
            email: None,
            github: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
            default_lang: DEFAULT_LANG.to_string(),
            license_name: None,
            license_url: None,
        }
    }
}
