use crate::data::filter::{derive_ranking, derive_time_series};
use crate::data::metrics::summarize;
use crate::data::model::{
    Dataset, EntityChoice, RankingSnapshot, Selection, SummaryMetrics, TimeSeriesSlice,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// Current entity / year-range selection.
    pub selection: Selection,

    /// Rows for the selected entity and interval (cached).
    pub series: TimeSeriesSlice,

    /// Top emitters for the selection's end year (cached).
    pub ranking: RankingSnapshot,

    /// Scalar summary of `series`; None means "no data".
    pub summary: Option<SummaryMetrics>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: Selection {
                entity: EntityChoice::Global,
                start_year: 0,
                end_year: 0,
            },
            series: Vec::new(),
            ranking: Vec::new(),
            summary: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the selection to the default.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = Selection::default_for(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// One full derivation pass: filter both views, then summarize.
    pub fn recompute(&mut self) {
        match &self.dataset {
            Some(ds) => {
                self.series = derive_time_series(ds, &self.selection);
                self.ranking = derive_ranking(ds, self.selection.end_year);
                self.summary = summarize(&self.series);
            }
            None => {
                self.series.clear();
                self.ranking.clear();
                self.summary = None;
            }
        }
    }

    /// Switch the plotted entity.
    pub fn set_entity(&mut self, entity: EntityChoice) {
        self.selection.entity = entity;
        self.recompute();
    }

    /// Move the year interval, keeping it ordered and inside the dataset.
    pub fn set_year_range(&mut self, start_year: i32, end_year: i32) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let start = start_year.clamp(ds.min_year, ds.max_year);
        let end = end_year.clamp(ds.min_year, ds.max_year);
        self.selection.start_year = start.min(end);
        self.selection.end_year = end.max(start);
        self.recompute();
    }
}
