//! URL recognition in message bodies.

use linkify::{LinkFinder, LinkKind};

/// Finds URLs in free text.
pub trait UrlFinder {
    /// Returns every URL found in `text`, in order.
    fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// Returns how many URLs `text` contains.
    fn count_urls(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

/// [`UrlFinder`] backed by `linkify`.
///
/// Scheme-less links such as `example.com/page` are recognized as well.
///
/// ```
/// use chatstats::stats::{LinkifyUrlFinder, UrlFinder};
///
/// let finder = LinkifyUrlFinder::new();
/// let urls = finder.find_urls("see https://example.com and http://rust-lang.org/learn");
/// assert_eq!(urls, vec!["https://example.com", "http://rust-lang.org/learn"]);
/// ```
#[derive(Debug)]
pub struct LinkifyUrlFinder {
    finder: LinkFinder,
}

impl LinkifyUrlFinder {
    pub fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]).url_must_have_scheme(false);
        Self { finder }
    }
}

impl Default for LinkifyUrlFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlFinder for LinkifyUrlFinder {
    fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.finder.links(text).map(|link| link.as_str()).collect()
    }
}
