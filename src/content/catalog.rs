//! Ordered post list

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

use super::post::{Post, PostError};

/// The site's posts, kept in declaration order
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: Vec<Post>,
}

impl PostCatalog {
    /// Validate every post and reject duplicate slugs
    ///
    /// Distinct category names must also map to distinct category pages.
    pub fn new(posts: Vec<Post>) -> Result<Self, PostError> {
        let mut seen = HashSet::new();
        let mut category_pages: HashMap<String, &str> = HashMap::new();
        for (i, post) in posts.iter().enumerate() {
            post.validate(i)?;
            if !seen.insert(post.slug.as_str()) {
                return Err(PostError::DuplicateSlug(post.slug.clone()));
            }

            let category_slug = post.category_slug();
            match category_pages.get(&category_slug) {
                Some(first) if *first != post.category => {
                    return Err(PostError::CategorySlugCollision {
                        first: first.to_string(),
                        second: post.category.clone(),
                        slug: category_slug,
                    });
                }
                Some(_) => {}
                None => {
                    category_pages.insert(category_slug, post.category.as_str());
                }
            }
        }
        Ok(Self { posts })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    /// Mutable access for attaching bodies after loading
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Post> {
        self.posts.iter_mut()
    }

    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Category name to post count, in first-appearance order
    pub fn categories(&self) -> IndexMap<String, usize> {
        let mut categories = IndexMap::new();
        for post in &self.posts {
            *categories.entry(post.category.clone()).or_insert(0) += 1;
        }
        categories
    }

    /// Posts whose category slugifies to `category_slug`, in list order
    pub fn in_category(&self, category_slug: &str) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.category_slug() == category_slug)
            .collect()
    }

    /// Date-descending view; ties keep list order
    pub fn newest_first(&self) -> Vec<&Post> {
        let mut sorted: Vec<&Post> = self.posts.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

impl<'a> IntoIterator for &'a PostCatalog {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults;

    #[test]
    fn test_preserves_declaration_order() {
        let catalog = PostCatalog::new(defaults::posts()).unwrap();
        let slugs: Vec<_> = catalog.iter().map(|p| p.slug.as_str()).collect();
        let expected: Vec<_> = defaults::posts().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, expected);
        assert_eq!(
            catalog.get(0).map(|p| p.slug.as_str()),
            Some("python-3-12-new-features-and-performance-boosts")
        );
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut posts = defaults::posts();
        let dup = posts[0].clone();
        posts.push(dup);
        let err = PostCatalog::new(posts).unwrap_err();
        assert_eq!(
            err,
            PostError::DuplicateSlug("python-3-12-new-features-and-performance-boosts".into())
        );
    }

    #[test]
    fn test_category_slug_collision_rejected() {
        let mut posts = defaults::posts();
        posts[0].category = "C++".to_string();
        posts[1].category = "C#".to_string();
        let err = PostCatalog::new(posts).unwrap_err();
        assert_eq!(
            err,
            PostError::CategorySlugCollision {
                first: "C++".into(),
                second: "C#".into(),
                slug: "c".into(),
            }
        );
    }

    #[test]
    fn test_same_category_name_shares_page() {
        let mut posts = defaults::posts();
        posts[0].category = "C++".to_string();
        posts[1].category = "C++".to_string();
        let catalog = PostCatalog::new(posts).unwrap();
        assert_eq!(catalog.categories()["C++"], 2);
        assert_eq!(catalog.in_category("c").len(), 2);
    }

    #[test]
    fn test_empty_category_slug_rejected() {
        let mut posts = defaults::posts();
        posts[2].category = "???".to_string();
        assert!(matches!(
            PostCatalog::new(posts),
            Err(PostError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = PostCatalog::new(defaults::posts()).unwrap();
        let categories = catalog.categories();
        let names: Vec<_> = categories.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Python",
                "Django",
                "React",
                "Tailwind CSS",
                "AI/ML",
                "DevOps",
                "Web Development",
                "TypeScript"
            ]
        );
        assert_eq!(categories["Python"], 3);
        assert_eq!(categories["Django"], 2);
    }

    #[test]
    fn test_in_category() {
        let catalog = PostCatalog::new(defaults::posts()).unwrap();
        let react = catalog.in_category("react");
        assert_eq!(react.len(), 2);
        assert_eq!(
            react[0].slug,
            "advanced-react-patterns-elevate-your-frontend-development"
        );
        assert!(catalog.in_category("rust").is_empty());
    }

    #[test]
    fn test_newest_first() {
        let catalog = PostCatalog::new(defaults::posts()).unwrap();
        let sorted = catalog.newest_first();
        assert_eq!(sorted[0].slug, "mastering-python-pattern-matching");
        assert_eq!(
            sorted.last().map(|p| p.slug.as_str()),
            Some("typescript-for-python-developers-a-beginners-guide")
        );
        // The catalog itself is untouched
        assert_eq!(
            catalog.get(0).map(|p| p.category.as_str()),
            Some("Python")
        );
    }

    #[test]
    fn test_find() {
        let catalog = PostCatalog::new(defaults::posts()).unwrap();
        assert_eq!(
            catalog
                .find("deploying-django-apps-with-docker-and-kubernetes")
                .map(|p| p.category.as_str()),
            Some("DevOps")
        );
        assert!(catalog.find("missing").is_none());
    }
}
