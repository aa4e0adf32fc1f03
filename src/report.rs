//! Every statistic for one selection.

use serde::Serialize;

use crate::core::filter::Selector;
use crate::stats::{
    BusyUsers, DailyPoint, FrequencyTable, Heatmap, MessageSummary, MonthlyPoint, Outcome,
    StatsEngine,
};
use crate::table::ChatTable;

/// The full analysis of one selection.
///
/// Each part is computed independently, so one failed statistic leaves the
/// rest intact.
#[derive(Debug, Serialize)]
pub struct Report {
    pub selection: Selector,
    pub summary: Outcome<MessageSummary>,
    pub monthly_timeline: Outcome<Vec<MonthlyPoint>>,
    pub daily_timeline: Outcome<Vec<DailyPoint>>,
    pub week_activity: Outcome<FrequencyTable>,
    pub month_activity: Outcome<FrequencyTable>,
    pub heatmap: Outcome<Heatmap>,
    /// Only computed for [`Selector::Overall`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<Outcome<BusyUsers>>,
    pub wordcloud: Outcome<String>,
    pub common_words: Outcome<FrequencyTable>,
    pub emojis: Outcome<FrequencyTable>,
}

impl Report {
    /// Runs every statistic of `engine` on the selection.
    pub fn build(engine: &StatsEngine, selector: &Selector, table: &ChatTable) -> Self {
        log::info!("Building report for {selector}");
        Self {
            selection: selector.clone(),
            summary: engine.fetch_stats(selector, table),
            monthly_timeline: engine.monthly_timeline(selector, table),
            daily_timeline: engine.daily_timeline(selector, table),
            week_activity: engine.week_activity_map(selector, table),
            month_activity: engine.month_activity_map(selector, table),
            heatmap: engine.activity_heatmap(selector, table),
            busy_users: selector
                .is_overall()
                .then(|| engine.most_busy_users(selector, table)),
            wordcloud: engine.wordcloud_text(selector, table),
            common_words: engine.most_common_words(selector, table),
            emojis: engine.emoji_helper(selector, table),
        }
    }

    /// Number of statistics that failed.
    pub fn failures(&self) -> usize {
        [
            self.summary.is_failed(),
            self.monthly_timeline.is_failed(),
            self.daily_timeline.is_failed(),
            self.week_activity.is_failed(),
            self.month_activity.is_failed(),
            self.heatmap.is_failed(),
            self.busy_users.as_ref().is_some_and(Outcome::is_failed),
            self.wordcloud.is_failed(),
            self.common_words.is_failed(),
            self.emojis.is_failed(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}
