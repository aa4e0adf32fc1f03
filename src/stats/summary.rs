//! Headline counts for a selection.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::stats::links::UrlFinder;
use crate::table::TableView;

/// Message, word, media and link totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    pub messages: usize,
    /// Whitespace-delimited tokens over every body that is not a media placeholder.
    pub words: usize,
    /// Bodies equal to the media placeholder.
    pub media: usize,
    /// URLs found in every body.
    pub links: usize,
}

/// Computes the summary for `view`.
pub fn summarize(view: &TableView<'_>, config: &AnalysisConfig, urls: &dyn UrlFinder) -> MessageSummary {
    view.iter().fold(MessageSummary::default(), |mut acc, entry| {
        acc.messages += 1;
        if config.is_media(entry.body()) {
            acc.media += 1;
        } else {
            acc.words += entry.word_count();
        }
        acc.links += urls.count_urls(entry.body());
        acc
    })
}
