//! Per-endpoint operations: each resolves its parameters, composes the
//! query, runs it against the right index, and serializes the result.

use crate::{
    client::EsClient,
    index::{self, IndexFamily},
    query::{
        aggs, candidate_filter_set, district_filter_set, filer_filter_set, DateParams,
        RecordParams, RecordsQuery, SummaryQuery,
    },
    response::{RecordsResponse, SummaryResponse},
    serialize,
    types::{
        CandidateSummary, Contribution, Contributions, DistrictSummary, FilerSummary, Report,
        Reports, StateCode, StateSummary, Summary,
    },
    Error,
};

/// The campaign-finance query service.
///
/// Stateless beyond the search client's connection pool and the deployment
/// environment the index names are suffixed with. Cheap to share behind an
/// `Arc`.
pub struct FinanceService {
    es: EsClient,
    env: String,
}

impl FinanceService {
    pub fn new(es: EsClient, env: &str) -> Self {
        Self {
            es,
            env: env.to_string(),
        }
    }

    /// Contribution summary across every state.
    pub async fn global_summary(&self, dates: DateParams) -> Result<Summary, Error> {
        let range = dates.resolve();
        let body = SummaryQuery::new(range).build();
        let index = index::wildcard_index(IndexFamily::Contributions, &self.env);
        let raw: SummaryResponse = self.es.search(&index, &body).await?;
        Ok(serialize::summary(&raw, range))
    }

    /// Contribution summary for one state, with its per-house district lists.
    pub async fn state_summary(
        &self,
        state: &str,
        dates: DateParams,
    ) -> Result<StateSummary, Error> {
        let state: StateCode = state.parse()?;
        let range = dates.resolve();
        let body = SummaryQuery::new(range)
            .with_extra_aggs(aggs::available_districts())
            .build();
        let index = index::state_index(state, IndexFamily::Contributions, &self.env);
        let raw: SummaryResponse = self.es.search(&index, &body).await?;
        Ok(StateSummary {
            summary: serialize::summary(&raw, range),
            districts: serialize::state_districts(&raw),
        })
    }

    /// Contribution summary for one filer. Not-found when no document in the
    /// window matches the filer, even though an all-zero summary would also
    /// be representable.
    pub async fn filer_summary(
        &self,
        state: &str,
        filer_id: &str,
        dates: DateParams,
    ) -> Result<FilerSummary, Error> {
        let state: StateCode = state.parse()?;
        let range = dates.resolve();
        let body = SummaryQuery::new(range)
            .with_filters(filer_filter_set(filer_id)?)
            .with_sample()
            .build();
        let index = index::state_index(state, IndexFamily::Contributions, &self.env);
        let raw: SummaryResponse = self.es.search(&index, &body).await?;
        let (filer, candidate) =
            serialize::sampled_filer(&raw).ok_or(Error::NotFound { entity: "filer" })?;
        Ok(FilerSummary {
            filer,
            summary: serialize::summary(&raw, range),
            candidate,
        })
    }

    /// Contribution summary for one candidate, with the filers contributing
    /// to them. Not-found when no document in the window matches.
    pub async fn candidate_summary(
        &self,
        state: &str,
        candidate_id: &str,
        dates: DateParams,
    ) -> Result<CandidateSummary, Error> {
        let state: StateCode = state.parse()?;
        let range = dates.resolve();
        let body = SummaryQuery::new(range)
            .with_filters(candidate_filter_set(candidate_id))
            .with_extra_aggs(aggs::associated_filers())
            .with_sample()
            .build();
        let index = index::state_index(state, IndexFamily::Contributions, &self.env);
        let raw: SummaryResponse = self.es.search(&index, &body).await?;
        let candidate =
            serialize::sampled_candidate(&raw).ok_or(Error::NotFound { entity: "candidate" })?;
        Ok(CandidateSummary {
            candidate,
            summary: serialize::summary(&raw, range),
            associated_filers: serialize::associated_filers(&raw),
        })
    }

    /// Contribution summary for one legislative seat, with a per-candidate
    /// breakdown.
    pub async fn seat_summary(
        &self,
        state: &str,
        house: &str,
        district: &str,
        dates: DateParams,
    ) -> Result<DistrictSummary, Error> {
        let state: StateCode = state.parse()?;
        let range = dates.resolve();
        let body = SummaryQuery::new(range)
            .with_filters(district_filter_set(house, district)?)
            .with_extra_aggs(aggs::candidates_for_district())
            .build();
        let index = index::state_index(state, IndexFamily::Contributions, &self.env);
        let raw: SummaryResponse = self.es.search(&index, &body).await?;
        Ok(DistrictSummary {
            summary: serialize::summary(&raw, range),
            candidates: serialize::candidates_for_district(&raw),
        })
    }

    /// Newest-first contribution list across every state.
    pub async fn contributions(&self, params: RecordParams) -> Result<Contributions, Error> {
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::contributions(range, page).build();
        let index = index::wildcard_index(IndexFamily::Contributions, &self.env);
        let raw: RecordsResponse<Contribution> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }

    /// Newest-first contribution list for one filer.
    pub async fn filer_contributions(
        &self,
        state: &str,
        filer_id: &str,
        params: RecordParams,
    ) -> Result<Contributions, Error> {
        let state: StateCode = state.parse()?;
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::contributions(range, page)
            .with_filters(filer_filter_set(filer_id)?)
            .build();
        let index = index::state_index(state, IndexFamily::Contributions, &self.env);
        let raw: RecordsResponse<Contribution> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }

    /// Newest-first contribution list for one candidate.
    pub async fn candidate_contributions(
        &self,
        state: &str,
        candidate_id: &str,
        params: RecordParams,
    ) -> Result<Contributions, Error> {
        let state: StateCode = state.parse()?;
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::contributions(range, page)
            .with_filters(candidate_filter_set(candidate_id))
            .build();
        let index = index::state_index(state, IndexFamily::Contributions, &self.env);
        let raw: RecordsResponse<Contribution> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }

    /// Newest-first contribution list for one legislative seat.
    pub async fn seat_contributions(
        &self,
        state: &str,
        house: &str,
        district: &str,
        params: RecordParams,
    ) -> Result<Contributions, Error> {
        let state: StateCode = state.parse()?;
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::contributions(range, page)
            .with_filters(district_filter_set(house, district)?)
            .build();
        let index = index::state_index(state, IndexFamily::Contributions, &self.env);
        let raw: RecordsResponse<Contribution> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }

    /// Report list across every state, newest received first.
    pub async fn reports(&self, params: RecordParams) -> Result<Reports, Error> {
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::reports(range, page).build();
        let index = index::wildcard_index(IndexFamily::Reports, &self.env);
        let raw: RecordsResponse<Report> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }

    /// Report list for one filer, newest received first.
    pub async fn filer_reports(
        &self,
        state: &str,
        filer_id: &str,
        params: RecordParams,
    ) -> Result<Reports, Error> {
        let state: StateCode = state.parse()?;
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::reports(range, page)
            .with_filters(filer_filter_set(filer_id)?)
            .build();
        let index = index::state_index(state, IndexFamily::Reports, &self.env);
        let raw: RecordsResponse<Report> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }

    /// Report list for one candidate, newest received first.
    pub async fn candidate_reports(
        &self,
        state: &str,
        candidate_id: &str,
        params: RecordParams,
    ) -> Result<Reports, Error> {
        let state: StateCode = state.parse()?;
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::reports(range, page)
            .with_filters(candidate_filter_set(candidate_id))
            .build();
        let index = index::state_index(state, IndexFamily::Reports, &self.env);
        let raw: RecordsResponse<Report> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }

    /// Report list for one legislative seat, newest received first.
    pub async fn seat_reports(
        &self,
        state: &str,
        house: &str,
        district: &str,
        params: RecordParams,
    ) -> Result<Reports, Error> {
        let state: StateCode = state.parse()?;
        let range = params.resolve_range();
        let page = params.resolve_page()?;
        let body = RecordsQuery::reports(range, page)
            .with_filters(district_filter_set(house, district)?)
            .build();
        let index = index::state_index(state, IndexFamily::Reports, &self.env);
        let raw: RecordsResponse<Report> = self.es.search(&index, &body).await?;
        Ok(serialize::records(raw, range, page))
    }
}
