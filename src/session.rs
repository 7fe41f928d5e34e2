use crate::models::ModelRecord;

/// Cards get an ad slot after every Nth result; purely presentational,
/// never part of the result data or its indices.
const AD_SLOT_INTERVAL: usize = 4;

/// Active pricing filter over the current result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingFilter {
    All,
    Tier(String),
}

impl PricingFilter {
    /// Parses the filter control's value; "all" (any case) selects everything.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Tier(value.to_string())
        }
    }

    fn matches(&self, record: &ModelRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tier(tier) => record.pricing_model.eq_ignore_ascii_case(tier),
        }
    }
}

/// Two-state list/detail navigation. Detail always carries the selected
/// record, so "detail open with nothing selected" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    List,
    Detail(ModelRecord),
}

/// Owns one search's results, the pricing filter, and the view state.
///
/// Searches are sequenced: `begin_search` hands out a monotonically
/// increasing ticket and marks it latest, and only the latest ticket may
/// land results. A slow response from a superseded search is discarded
/// instead of overwriting newer state.
#[derive(Debug)]
pub struct SearchSession {
    results: Vec<ModelRecord>,
    filter: PricingFilter,
    view: ViewState,
    latest_seq: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            filter: PricingFilter::All,
            view: ViewState::List,
            latest_seq: 0,
        }
    }

    pub fn results(&self) -> &[ModelRecord] {
        &self.results
    }

    pub fn filter(&self) -> &PricingFilter {
        &self.filter
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Starts a new search, superseding any search still in flight.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Lands the results of search `seq`. Stale tickets are discarded and
    /// reported as false. Landing replaces the previous result set, resets
    /// the filter, and returns to the list view.
    pub fn finish_search(&mut self, seq: u64, results: Vec<ModelRecord>) -> bool {
        if !self.is_latest(seq) {
            tracing::debug!(
                "Discarding stale search response (seq {} < latest {})",
                seq,
                self.latest_seq
            );
            return false;
        }
        self.results = results;
        self.filter = PricingFilter::All;
        self.view = ViewState::List;
        true
    }

    /// Error path for search `seq`, with the same staleness rule. A failed
    /// search still replaces old state: the previous results are dropped so
    /// the UI shows only the error message.
    pub fn fail_search(&mut self, seq: u64) -> bool {
        if !self.is_latest(seq) {
            return false;
        }
        self.results.clear();
        self.filter = PricingFilter::All;
        self.view = ViewState::List;
        true
    }

    /// Changes the pricing filter without touching the view state.
    pub fn set_filter(&mut self, filter: PricingFilter) {
        self.filter = filter;
    }

    /// The derived view: a pure function of `(results, filter)`, recomputed
    /// on demand. Identity under `All`, stable subsequence otherwise.
    pub fn visible(&self) -> Vec<&ModelRecord> {
        self.results
            .iter()
            .filter(|r| self.filter.matches(r))
            .collect()
    }

    /// Opens the detail view for the activated card. The record travels by
    /// value, not by index, so a filter change cannot redirect a selection.
    pub fn select(&mut self, record: ModelRecord) {
        self.view = ViewState::Detail(record);
    }

    /// Returns to the list view; the filtered list is still valid as-is.
    pub fn deselect(&mut self) {
        self.view = ViewState::List;
    }
}

/// Whether the presentation layer should place an ad slot after the card
/// at `index` in the rendered (filtered) list.
pub fn ad_slot_after(index: usize) -> bool {
    (index + 1) % AD_SLOT_INTERVAL == 0
}
