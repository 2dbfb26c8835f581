//! Composer for sorted, paginated record-list queries.

use crate::query::common::{DateRange, Page};
use crate::query::dsl::{Filter, SearchBody, SortClause};
use crate::query::fields;

/// Builds the record-list request body: newest records first, offset-based
/// pagination, exact totals.
///
/// Contribution and report lists share the shape; they differ only in which
/// date field the range clause and sort key target. Records with equal dates
/// fall back to the engine's natural order.
pub struct RecordsQuery {
    date_field: &'static str,
    range: DateRange,
    page: Page,
    filters: Vec<Filter>,
}

impl RecordsQuery {
    /// List query over contribution documents.
    pub fn contributions(range: DateRange, page: Page) -> Self {
        Self::over(fields::CONTRIBUTION_DATE, range, page)
    }

    /// List query over report documents, windowed and sorted by the date
    /// the report was received.
    pub fn reports(range: DateRange, page: Page) -> Self {
        Self::over(fields::RECEIVED_DATE, range, page)
    }

    fn over(date_field: &'static str, range: DateRange, page: Page) -> Self {
        RecordsQuery {
            date_field,
            range,
            page,
            filters: Vec::new(),
        }
    }

    /// Appends scope filters, ANDed after the date-range clause.
    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn build(self) -> SearchBody {
        let mut filters = Vec::with_capacity(self.filters.len() + 1);
        filters.push(Filter::date_range(
            self.date_field,
            self.range.start,
            self.range.end,
        ));
        filters.extend(self.filters);

        let mut body = SearchBody::filtered(filters);
        body.sort = vec![SortClause::desc(self.date_field)];
        body.size = self.page.limit;
        body.from = Some(self.page.offset);
        body
    }
}
