//! Composer for aggregation-only summary queries.

use std::collections::BTreeMap;

use crate::query::common::DateRange;
use crate::query::dsl::{Agg, Filter, SearchBody};
use crate::query::fields;

/// Builds the summary request body: zero (or, in sample mode, one) returned
/// documents, an exact total, and the three base aggregations every summary
/// endpoint reads.
///
/// The base aggregation names are reserved. Extra aggregations merge in
/// around them; a colliding extra is replaced by the base definition rather
/// than the other way around.
pub struct SummaryQuery {
    range: DateRange,
    filters: Vec<Filter>,
    extra_aggs: BTreeMap<String, Agg>,
    sample: bool,
}

impl SummaryQuery {
    pub fn new(range: DateRange) -> Self {
        SummaryQuery {
            range,
            filters: Vec::new(),
            extra_aggs: BTreeMap::new(),
            sample: false,
        }
    }

    /// Appends scope filters, ANDed after the date-range clause.
    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Merges in scope-specific aggregations (see [`crate::query::aggs`]).
    pub fn with_extra_aggs(mut self, aggs: BTreeMap<String, Agg>) -> Self {
        self.extra_aggs.extend(aggs);
        self
    }

    /// Requests one matched document alongside the aggregations, so the
    /// response carries a representative document's embedded entity data.
    pub fn with_sample(mut self) -> Self {
        self.sample = true;
        self
    }

    pub fn build(self) -> SearchBody {
        let mut filters = Vec::with_capacity(self.filters.len() + 1);
        filters.push(Filter::date_range(
            fields::CONTRIBUTION_DATE,
            self.range.start,
            self.range.end,
        ));
        filters.extend(self.filters);

        let mut aggs = self.extra_aggs;
        aggs.insert("contribution_stats".to_string(), Agg::stats(fields::AMOUNT));
        aggs.insert(
            "contribution_by_type".to_string(),
            Agg::terms(fields::CONTRIBUTION_TYPE, 5).with_sub("1", Agg::stats(fields::AMOUNT)),
        );
        aggs.insert(
            "latest_contribution".to_string(),
            Agg::max(fields::CONTRIBUTION_DATE),
        );

        let mut body = SearchBody::filtered(filters);
        body.aggs = aggs;
        body.size = if self.sample { 1 } else { 0 };
        body
    }
}
