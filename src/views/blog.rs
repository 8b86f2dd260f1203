use crate::api::{BackendClient, BlogPost};
use crate::i18n::{keys, Translator};
use crate::views::LoadState;
use std::collections::BTreeSet;
use tracing::error;

const FEATURED_COUNT: usize = 3;

/// Category tab selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

#[derive(Default)]
pub struct BlogPage {
    posts: LoadState<Vec<BlogPost>>,
    search: String,
    category: CategoryFilter,
}

impl BlogPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, backend: &BackendClient, translator: &Translator<'_>) {
        self.posts = LoadState::Loading;
        self.posts = match backend.list_blogs().await {
            Ok(posts) => LoadState::Ready(posts),
            Err(e) => {
                error!("Failed to load blogs: {}", e);
                LoadState::Failed(translator.resolve(keys::FAILED_TO_LOAD_BLOGS).to_string())
            }
        };
    }

    /// Page over an already fetched list.
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: LoadState::Ready(posts),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &LoadState<Vec<BlogPost>> {
        &self.posts
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    fn all(&self) -> &[BlogPost] {
        self.posts.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Unique non-empty categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.all()
            .iter()
            .filter_map(|p| p.category.as_deref())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Posts matching the search text (title, category, content or excerpt,
    /// case-insensitive) and the selected category.
    pub fn visible(&self) -> Vec<&BlogPost> {
        let query = self.search.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&query))
        };

        self.all()
            .iter()
            .filter(|p| {
                query.is_empty()
                    || contains(&p.title)
                    || contains(&p.category)
                    || contains(&p.content)
                    || contains(&p.excerpt)
            })
            .filter(|p| match &self.category {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => p.category.as_deref() == Some(category.as_str()),
            })
            .collect()
    }

    /// The three most recent posts; undated posts sort last.
    pub fn featured(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.all().iter().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(FEATURED_COUNT);
        posts
    }
}
