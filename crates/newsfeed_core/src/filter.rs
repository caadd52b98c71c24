use crate::{Article, Category};

/// The active view constraint. At most one of category or search is active;
/// "general", the empty category and the empty query all collapse to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    None,
    Category(String),
    Search(String),
}

impl Filter {
    pub fn category(name: &str) -> Self {
        if name.is_empty() || name == Category::General.as_str() {
            Filter::None
        } else {
            Filter::Category(name.to_owned())
        }
    }

    pub fn search(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            Filter::None
        } else {
            Filter::Search(query.to_owned())
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Filter::None => true,
            Filter::Category(name) => article.category.as_str() == name,
            Filter::Search(query) => {
                let needle = query.to_lowercase();
                [
                    article.title.as_str(),
                    article.description.as_str(),
                    article.category.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }

    pub fn search_query(&self) -> Option<&str> {
        match self {
            Filter::Search(query) => Some(query),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_and_empty_category_mean_unfiltered() {
        assert_eq!(Filter::category("general"), Filter::None);
        assert_eq!(Filter::category(""), Filter::None);
        assert_eq!(
            Filter::category("sports"),
            Filter::Category("sports".to_string())
        );
    }

    #[test]
    fn search_is_trimmed_and_blank_means_unfiltered() {
        assert_eq!(Filter::search("  \t "), Filter::None);
        assert_eq!(Filter::search("  Mars "), Filter::Search("Mars".to_string()));
        assert_eq!(Filter::search(" Mars ").search_query(), Some("Mars"));
        assert_eq!(Filter::category("sports").search_query(), None);
    }
}
