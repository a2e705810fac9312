// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Options of one renderer extension, opaque to this crate.
pub type ExtensionOptions = IndexMap<String, toml::Value>;

#[derive(Deserialize, Debug, Default, Serialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Markdown {
    pub output_format: OutputFormat,

    /// Renderer extensions to enable, in declaration order. An empty table
    /// enables an extension with its stock options.
    pub extensions: IndexMap<String, ExtensionOptions>,
}

#[derive(Debug, Copy, Clone, Default, Deserialize, Serialize, PartialEq)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "html5")]
    Html5,

    #[serde(rename = "xhtml")]
    Xhtml,

    #[serde(rename = "html")]
    Html,
}

#[derive(Debug)]
pub struct ParseOutputFormatError;

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html5" => Ok(OutputFormat::Html5),
            "xhtml" => Ok(OutputFormat::Xhtml),
            "html" => Ok(OutputFormat::Html),
            _ => Err(ParseOutputFormatError),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html5 => write!(f, "html5"),
            OutputFormat::Xhtml => write!(f, "xhtml"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

mod test {

    #[test]
    fn test_extension_options() {
        let config = crate::config::parse_config(
            r#"
            [markdown]
            output-format = "xhtml"

            [markdown.extensions.codehilite]
            css-class = "highlight"
            linenums = true
            "#,
        )
        .unwrap();

        assert_eq!(
            config.markdown.output_format,
            crate::config::markdown::OutputFormat::Xhtml
        );
        let codehilite = &config.markdown.extensions["codehilite"];
        assert_eq!(codehilite["css-class"].as_str(), Some("highlight"));
        assert_eq!(codehilite["linenums"].as_bool(), Some(true));
    }

    #[test]
    fn test_output_format_from_str() {
        use std::str::FromStr;

        use crate::config::markdown::OutputFormat;

        assert!(matches!(
            OutputFormat::from_str("html5"),
            Ok(OutputFormat::Html5)
        ));
        assert!(OutputFormat::from_str("markdown").is_err());
        assert_eq!(OutputFormat::Xhtml.to_string(), "xhtml");
    }
}
