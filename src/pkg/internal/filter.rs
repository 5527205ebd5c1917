/// Case-insensitive substring blocklist over job titles.
#[derive(Debug, Clone, Default)]
pub struct TitleFilter {
    fragments: Vec<String>,
}

impl TitleFilter {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TitleFilter {
            fragments: fragments
                .into_iter()
                .filter(|f| !f.as_ref().trim().is_empty())
                .map(|f| f.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// A missing title is never excluded.
    pub fn is_excluded(&self, title: Option<&str>) -> bool {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            return false;
        };
        let title = title.to_lowercase();
        self.fragments.iter().any(|f| title.contains(f.as_str()))
    }
}
