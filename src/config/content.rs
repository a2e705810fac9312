use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTENT_DIR: &str = "content";
pub const DEFAULT_STATIC_DIR: &str = "images";
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Deserialize, Debug, Serialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Content {
    /// Directory all content is read from, relative to the project root.
    pub path: String,

    /// Subdirectories of the content root copied through verbatim.
    pub static_paths: Vec<String>,

    /// Subdirectories searched for articles. Empty means the content root
    /// itself.
    pub article_paths: Vec<String>,

    /// `false` disables pagination of listings, an integer sets the page
    /// size, `true` enables it at [`DEFAULT_PAGE_SIZE`].
    pub pagination: Pagination,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            path: DEFAULT_CONTENT_DIR.to_string(),
            static_paths: vec![DEFAULT_STATIC_DIR.to_string()],
            article_paths: vec![],
            pagination: Pagination::default(),
        }
    }
}

#[derive(Deserialize, Debug, Copy, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Pagination {
    Toggle(bool),
    Size(usize),
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::Toggle(false)
    }
}

impl Pagination {
    pub fn is_enabled(&self) -> bool {
        match self {
            Pagination::Toggle(enabled) => *enabled,
            Pagination::Size(_) => true,
        }
    }

    pub fn page_size(&self) -> Option<usize> {
        match self {
            Pagination::Toggle(false) => None,
            Pagination::Toggle(true) => Some(DEFAULT_PAGE_SIZE),
            Pagination::Size(size) => Some(*size),
        }
    }
}

mod test {

    #[test]
    fn test_pagination_disabled() {
        let config = crate::config::parse_config("[content]\npagination = false").unwrap();
        assert!(!config.content.pagination.is_enabled());
        assert_eq!(config.content.pagination.page_size(), None);
    }

    #[test]
    fn test_pagination_toggle() {
        use crate::config::content::DEFAULT_PAGE_SIZE;

        let config = crate::config::parse_config("[content]\npagination = true").unwrap();
        assert!(config.content.pagination.is_enabled());
        assert_eq!(
            config.content.pagination.page_size(),
            Some(DEFAULT_PAGE_SIZE)
        );
    }

    #[test]
    fn test_pagination_size() {
        let config = crate::config::parse_config("[content]\npagination = 25").unwrap();
        assert!(config.content.pagination.is_enabled());
        assert_eq!(config.content.pagination.page_size(), Some(25));
    }
}
