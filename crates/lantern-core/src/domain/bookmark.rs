use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub url: String,
    pub tags: Vec<String>,
    pub description: String,
}

impl Bookmark {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        tags: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            tags,
            description: description.into(),
        }
    }

    /// Splits a comma-separated tag field, as stored in one CSV column.
    pub fn parse_tags(field: &str) -> Vec<String> {
        field.split(',').map(str::to_string).collect()
    }

    /// Case-insensitive substring search over name, url and description.
    ///
    /// The three fields are searched as one concatenated string, so a search
    /// may straddle a field boundary.
    pub fn matches(&self, search: &str) -> bool {
        let haystack = format!("{}{}{}", self.name, self.url, self.description).to_lowercase();
        haystack.contains(&search.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rust_book() -> Bookmark {
        Bookmark::new(
            "1",
            "The Rust Book",
            "https://doc.rust-lang.org/book/",
            vec!["rust".to_string(), "docs".to_string()],
            "Official guide",
        )
    }

    #[test]
    fn matches_name_case_insensitively() {
        assert!(rust_book().matches("rust book"));
        assert!(rust_book().matches("RUST"));
    }

    #[test]
    fn matches_url_and_description() {
        assert!(rust_book().matches("doc.rust-lang"));
        assert!(rust_book().matches("official"));
    }

    #[test]
    fn does_not_match_tags() {
        let bookmark = Bookmark::new("2", "Site", "https://example.com", vec!["hidden".to_string()], "");

        assert!(!bookmark.matches("hidden"));
    }

    #[test]
    fn search_may_span_adjacent_fields() {
        let bookmark = Bookmark::new("3", "abc", "def", Vec::new(), "");

        assert!(bookmark.matches("cd"));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(rust_book().matches(""));
    }

    #[test]
    fn parse_tags_splits_on_commas() {
        assert_eq!(Bookmark::parse_tags("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(Bookmark::parse_tags(""), vec![""]);
    }
}
