// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::fmt::Display;

/// URL-safe identifier of an article, as substituted for `{slug}` in the
/// permalink templates.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    /// Derive a slug from an article title.
    pub fn from_title<S: AsRef<str>>(title: S) -> Self {
        Self(slug::slugify(title.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Slug> for &str {
    fn eq(&self, other: &Slug) -> bool {
        *self == other.as_str()
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

mod test {

    #[test]
    fn test_slug_from_title() {
        use crate::slug::Slug;

        assert_eq!(Slug::from_title("Hello, World!"), "hello-world");
        assert_eq!(Slug::from_title("Inverting a hash"), "inverting-a-hash");
        assert_eq!(Slug::from_title("  C++ & Rust  "), "c-rust");
    }
}
