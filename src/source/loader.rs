//! Run a source, apply the record filter and time the load

use std::time::Instant;

use crate::core::{Blog, BlogFilter};
use crate::error::LoadError;
use crate::source::Source;

/// Loading result with statistics
#[derive(Debug, Default)]
pub(crate) struct LoadResult {
    pub(crate) blogs: Vec<Blog>,
    /// Malformed records dropped while parsing
    pub(crate) skipped: usize,
    /// Well-formed records removed by the filter
    pub(crate) filtered_out: usize,
    pub(crate) inputs: usize,
    pub(crate) elapsed_ms: f64,
}

pub(crate) fn load_blogs(source: &dyn Source, filter: &BlogFilter) -> Result<LoadResult, LoadError> {
    let start = Instant::now();
    let fetched = source.fetch()?;

    let total = fetched.blogs.len();
    let blogs: Vec<Blog> = if filter.is_empty() {
        fetched.blogs
    } else {
        fetched
            .blogs
            .into_iter()
            .filter(|b| filter.matches(b))
            .collect()
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        source = %source.display_name(),
        inputs = fetched.inputs,
        records = total,
        kept = blogs.len(),
        skipped = fetched.skipped,
        "loaded blogs in {elapsed_ms:.2}ms"
    );
    if fetched.skipped > 0 {
        tracing::warn!(
            "{} malformed blog records skipped from {}",
            fetched.skipped,
            source.display_name()
        );
    }

    Ok(LoadResult {
        filtered_out: total - blogs.len(),
        blogs,
        skipped: fetched.skipped,
        inputs: fetched.inputs,
        elapsed_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Fetched;

    struct StaticSource(Vec<Blog>, usize);

    impl Source for StaticSource {
        fn display_name(&self) -> String {
            "static".to_string()
        }

        fn fetch(&self) -> Result<Fetched, LoadError> {
            Ok(Fetched {
                blogs: self.0.clone(),
                skipped: self.1,
                inputs: 1,
            })
        }
    }

    struct FailingSource;

    impl Source for FailingSource {
        fn display_name(&self) -> String {
            "failing".to_string()
        }

        fn fetch(&self) -> Result<Fetched, LoadError> {
            Err(LoadError::NoMatch {
                input: "nothing".to_string(),
            })
        }
    }

    #[test]
    fn load_without_filter_keeps_everything_in_order() {
        let source = StaticSource(vec![Blog::new("B", 1), Blog::new("A", 2)], 3);
        let result = load_blogs(&source, &BlogFilter::default()).unwrap();
        assert_eq!(result.blogs, vec![Blog::new("B", 1), Blog::new("A", 2)]);
        assert_eq!(result.skipped, 3);
        assert_eq!(result.filtered_out, 0);
        assert_eq!(result.inputs, 1);
    }

    #[test]
    fn load_applies_filter() {
        let source = StaticSource(
            vec![Blog::new("A", 1), Blog::new("B", 10), Blog::new("A", 20)],
            0,
        );
        let filter = BlogFilter {
            author: Some("A".to_string()),
            min_likes: Some(5),
            ..BlogFilter::default()
        };
        let result = load_blogs(&source, &filter).unwrap();
        assert_eq!(result.blogs, vec![Blog::new("A", 20)]);
        assert_eq!(result.filtered_out, 2);
    }

    #[test]
    fn load_propagates_source_errors() {
        assert!(load_blogs(&FailingSource, &BlogFilter::default()).is_err());
    }
}
