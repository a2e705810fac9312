// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

/// One entry of the navigation menu. Entries keep the order they are
/// written in the configuration file.
#[derive(Deserialize, Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MenuItem {
    pub label: String,
    pub path: String,
}

mod test {

    #[test]
    fn test_menu_order_preserved() {
        let config = crate::config::parse_config(
            r#"
            [[menu]]
            label = "blog"
            path = "/"

            [[menu]]
            label = "about"
            path = "/about.html"
            "#,
        )
        .unwrap();

        let labels: Vec<_> = config.menu.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["blog", "about"]);
    }
}
