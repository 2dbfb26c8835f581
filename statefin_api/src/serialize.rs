//! Result serializers: typed raw responses in, stable API payloads out.
//!
//! Every function is pure. They assume the response shape matches the query
//! that produced it (the typed tree in [`crate::response`] enforces the
//! hard failures); in-bucket contract violations trip a debug assertion and
//! degrade to defaults in release builds.

use std::collections::BTreeMap;

use crate::query::{DateRange, Page};
use crate::response::{KeyBucket, RecordsResponse, SummaryResponse, TermsAgg};
use crate::types::{
    Candidate, ContributionByType, Filer, NamedStats, QueryDesc, Records, RecordsQueryDesc,
    StateDistricts, Stats, Summary,
};

/// Builds the summary payload embedded by every summary-shaped endpoint.
///
/// The fixed three-way classification breakdown is filled by lower-cased
/// bucket key; classifications without a bucket stay at zero. `latest_at`
/// is null when the window held no documents.
pub fn summary(raw: &SummaryResponse, range: DateRange) -> Summary {
    let mut by_type = ContributionByType::default();
    for bucket in &raw.aggregations.contribution_by_type.buckets {
        let stats = Stats::from(&bucket.stats);
        match bucket.key.to_lowercase().as_str() {
            "individual" => by_type.individual = stats,
            "entity" => by_type.entity = stats,
            "unknown" => by_type.unknown = stats,
            _ => {}
        }
    }

    Summary {
        stats: Stats::from(&raw.aggregations.contribution_stats),
        latest_at: raw.aggregations.latest_contribution.value_as_string,
        contribution_by_type: by_type,
        query: query_desc(raw.took, raw.timed_out, range),
    }
}

/// Builds a record-list payload: the returned documents in engine order
/// (newest first, as queried) plus the pagination descriptor.
pub fn records<T>(raw: RecordsResponse<T>, range: DateRange, page: Page) -> Records<T> {
    let total = raw.hits.total.value;
    let query = query_desc(raw.took, raw.timed_out, range);
    let records: Vec<T> = raw.hits.hits.into_iter().map(|h| h.source).collect();
    let hits = records.len() as i64;

    Records {
        records,
        query: RecordsQueryDesc {
            query,
            offset: page.offset,
            limit: page.limit,
            total,
            hits,
        },
    }
}

/// Extracts the embedded filer, and its candidate when linked, from a
/// sample-mode response. `None` means no document matched the filer scope
/// at all; the caller surfaces that as not-found rather than an empty
/// summary.
pub fn sampled_filer(raw: &SummaryResponse) -> Option<(Filer, Option<Candidate>)> {
    let sample = raw.hits.hits.first()?;
    debug_assert!(
        sample.source.filer.is_some(),
        "filer-scoped sample document carries no filer"
    );
    let filer = sample.source.filer.clone()?;
    Some((filer, sample.source.candidate.clone()))
}

/// Candidate counterpart of [`sampled_filer`].
pub fn sampled_candidate(raw: &SummaryResponse) -> Option<Candidate> {
    let sample = raw.hits.hits.first()?;
    debug_assert!(
        sample.source.candidate.is_some(),
        "candidate-scoped sample document carries no candidate"
    );
    sample.source.candidate.clone()
}

/// Keyed breakdown of the filers contributing within the current scope,
/// labelled with each filer's top name bucket.
pub fn associated_filers(raw: &SummaryResponse) -> BTreeMap<String, NamedStats> {
    debug_assert!(
        raw.aggregations.associated_filers.is_some(),
        "response carries no associated_filers aggregation"
    );
    let mut filers = BTreeMap::new();
    if let Some(agg) = &raw.aggregations.associated_filers {
        for bucket in &agg.buckets {
            filers.insert(
                bucket.key.clone(),
                NamedStats {
                    name: top_name(&bucket.filer_name),
                    stats: Stats::from(&bucket.filer_stats),
                },
            );
        }
    }
    filers
}

/// Keyed breakdown of the candidates funded within the current scope.
pub fn candidates_for_district(raw: &SummaryResponse) -> BTreeMap<String, NamedStats> {
    debug_assert!(
        raw.aggregations.candidates.is_some(),
        "response carries no candidates aggregation"
    );
    let mut candidates = BTreeMap::new();
    if let Some(agg) = &raw.aggregations.candidates {
        for bucket in &agg.buckets {
            candidates.insert(
                bucket.key.clone(),
                NamedStats {
                    name: top_name(&bucket.candidate_name),
                    stats: Stats::from(&bucket.candidate_stats),
                },
            );
        }
    }
    candidates
}

/// District lists per house, ascending as ordered by the query. A house
/// with no bucket yields an empty list; bucket keys outside the two houses
/// are dropped.
pub fn state_districts(raw: &SummaryResponse) -> StateDistricts {
    debug_assert!(
        raw.aggregations.districts_by_house.is_some(),
        "response carries no districts_by_house aggregation"
    );
    let mut districts = StateDistricts::default();
    if let Some(agg) = &raw.aggregations.districts_by_house {
        for bucket in &agg.buckets {
            let keys: Vec<String> = bucket
                .districts
                .buckets
                .iter()
                .map(|d| d.key.to_string())
                .collect();
            match bucket.key.as_str() {
                "lower" => districts.lower = keys,
                "upper" => districts.upper = keys,
                _ => {}
            }
        }
    }
    districts
}

fn query_desc(took: i64, timed_out: bool, range: DateRange) -> QueryDesc {
    QueryDesc {
        start_date: range.start,
        end_date: range.end,
        timed_out,
        took,
    }
}

fn top_name(names: &TermsAgg<KeyBucket>) -> String {
    debug_assert!(!names.buckets.is_empty(), "name sub-aggregation is empty");
    names
        .buckets
        .first()
        .map(|b| b.key.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::response::{
        CandidateBucket, DistrictBucket, FilerBucket, Hit, Hits, HouseBucket, MaxDateAgg,
        SampledEntities, StatsAgg, SummaryAggs, TotalHits, TypeBucket,
    };
    use crate::types::HouseLevel;

    fn range() -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    fn stats_agg(count: i64, sum: f64, avg: Option<f64>) -> StatsAgg {
        StatsAgg {
            count,
            min: None,
            max: None,
            avg,
            sum,
        }
    }

    fn empty_response() -> SummaryResponse {
        SummaryResponse {
            took: 3,
            timed_out: false,
            hits: Hits {
                total: TotalHits {
                    value: 0,
                    relation: "eq".to_string(),
                },
                hits: vec![],
            },
            aggregations: SummaryAggs {
                contribution_stats: stats_agg(0, 0.0, None),
                contribution_by_type: TermsAgg { buckets: vec![] },
                latest_contribution: MaxDateAgg {
                    value: None,
                    value_as_string: None,
                },
                districts_by_house: None,
                candidates: None,
                associated_filers: None,
            },
        }
    }

    fn sample_filer() -> Filer {
        Filer {
            filer_id: "00088088".to_string(),
            filer_type: "committee".to_string(),
            name: "Future PAC".to_string(),
        }
    }

    fn sample_candidate() -> Candidate {
        Candidate {
            candidate_id: "C3100".to_string(),
            name: "Jane Fields".to_string(),
            party: "np".to_string(),
            house: HouseLevel::Lower,
            district: 45,
        }
    }

    // -- summary --

    #[test]
    fn empty_window_yields_zeroed_summary() {
        let summary = summary(&empty_response(), range());
        assert_eq!(summary.stats, Stats::default());
        assert_eq!(summary.latest_at, None);
        assert_eq!(summary.contribution_by_type.individual, Stats::default());
        assert_eq!(summary.contribution_by_type.entity, Stats::default());
        assert_eq!(summary.contribution_by_type.unknown, Stats::default());
        assert_eq!(summary.query.took, 3);
        assert!(!summary.query.timed_out);
    }

    #[test]
    fn classification_buckets_fill_by_lowercased_key() {
        let mut raw = empty_response();
        raw.aggregations.contribution_stats = stats_agg(5, 1500.0, Some(300.0));
        raw.aggregations.contribution_by_type.buckets = vec![
            TypeBucket {
                key: "Individual".to_string(),
                doc_count: 3,
                stats: stats_agg(3, 900.0, Some(300.0)),
            },
            TypeBucket {
                key: "entity".to_string(),
                doc_count: 2,
                stats: stats_agg(2, 600.0, Some(300.0)),
            },
        ];

        let summary = summary(&raw, range());
        assert_eq!(summary.stats.count, 5);
        assert_eq!(summary.contribution_by_type.individual.count, 3);
        assert_eq!(summary.contribution_by_type.individual.total_amount, 900.0);
        assert_eq!(summary.contribution_by_type.entity.count, 2);
        assert_eq!(summary.contribution_by_type.unknown, Stats::default());
    }

    #[test]
    fn unexpected_classification_keys_are_dropped() {
        let mut raw = empty_response();
        raw.aggregations.contribution_by_type.buckets = vec![TypeBucket {
            key: "corporate".to_string(),
            doc_count: 9,
            stats: stats_agg(9, 9000.0, Some(1000.0)),
        }];

        let summary = summary(&raw, range());
        assert_eq!(summary.contribution_by_type.individual, Stats::default());
        assert_eq!(summary.contribution_by_type.entity, Stats::default());
        assert_eq!(summary.contribution_by_type.unknown, Stats::default());
    }

    #[test]
    fn summary_echoes_effective_dates() {
        let summary = summary(&empty_response(), range());
        assert_eq!(
            summary.query.start_date,
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
        );
        assert_eq!(
            summary.query.end_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn summary_is_deterministic_over_one_response() {
        let raw = empty_response();
        let first = serde_json::to_value(summary(&raw, range())).unwrap();
        let second = serde_json::to_value(summary(&raw, range())).unwrap();
        assert_eq!(first, second);
    }

    // -- records --

    #[test]
    fn records_keep_hit_order_and_account_hits() {
        let raw = RecordsResponse {
            took: 2,
            timed_out: false,
            hits: Hits {
                total: TotalHits {
                    value: 42,
                    relation: "eq".to_string(),
                },
                hits: vec![Hit { source: "newest" }, Hit { source: "older" }],
            },
        };

        let page = Page {
            offset: 10,
            limit: 2,
        };
        let out = records(raw, range(), page);
        assert_eq!(out.records, vec!["newest", "older"]);
        assert_eq!(out.query.offset, 10);
        assert_eq!(out.query.limit, 2);
        assert_eq!(out.query.total, 42);
        assert_eq!(out.query.hits, 2);
    }

    #[test]
    fn zero_limit_keeps_total_with_no_records() {
        let raw: RecordsResponse<String> = RecordsResponse {
            took: 1,
            timed_out: false,
            hits: Hits {
                total: TotalHits {
                    value: 817,
                    relation: "eq".to_string(),
                },
                hits: vec![],
            },
        };

        let page = Page {
            offset: 0,
            limit: 0,
        };
        let out = records(raw, range(), page);
        assert!(out.records.is_empty());
        assert_eq!(out.query.hits, 0);
        assert_eq!(out.query.total, 817);
    }

    // -- sampled entities --

    #[test]
    fn sampled_filer_not_found_on_zero_hits() {
        assert!(sampled_filer(&empty_response()).is_none());
    }

    #[test]
    fn sampled_filer_returns_filer_and_candidate() {
        let mut raw = empty_response();
        raw.hits.hits = vec![Hit {
            source: SampledEntities {
                filer: Some(sample_filer()),
                candidate: Some(sample_candidate()),
            },
        }];

        let (filer, candidate) = sampled_filer(&raw).unwrap();
        assert_eq!(filer.filer_id, "00088088");
        assert_eq!(candidate.unwrap().candidate_id, "C3100");
    }

    #[test]
    fn sampled_filer_without_linked_candidate() {
        let mut raw = empty_response();
        raw.hits.hits = vec![Hit {
            source: SampledEntities {
                filer: Some(sample_filer()),
                candidate: None,
            },
        }];

        let (_, candidate) = sampled_filer(&raw).unwrap();
        assert!(candidate.is_none());
    }

    #[test]
    fn sampled_candidate_not_found_on_zero_hits() {
        assert!(sampled_candidate(&empty_response()).is_none());
    }

    #[test]
    fn sampled_candidate_returns_candidate() {
        let mut raw = empty_response();
        raw.hits.hits = vec![Hit {
            source: SampledEntities {
                filer: None,
                candidate: Some(sample_candidate()),
            },
        }];

        assert_eq!(sampled_candidate(&raw).unwrap().district, 45);
    }

    // -- keyed breakdowns --

    #[test]
    fn associated_filers_keyed_with_top_name() {
        let mut raw = empty_response();
        raw.aggregations.associated_filers = Some(TermsAgg {
            buckets: vec![FilerBucket {
                key: "00088088".to_string(),
                doc_count: 12,
                filer_stats: stats_agg(12, 2400.0, Some(200.0)),
                filer_name: TermsAgg {
                    buckets: vec![
                        KeyBucket {
                            key: "Future PAC".to_string(),
                            doc_count: 11,
                        },
                        KeyBucket {
                            key: "Future PAC (old name)".to_string(),
                            doc_count: 1,
                        },
                    ],
                },
            }],
        });

        let filers = associated_filers(&raw);
        let entry = &filers["00088088"];
        assert_eq!(entry.name, "Future PAC");
        assert_eq!(entry.stats.count, 12);
        assert_eq!(entry.stats.total_amount, 2400.0);
        assert_eq!(entry.stats.avg_amount, 200.0);
    }

    #[test]
    fn candidates_for_district_keyed_by_candidate_id() {
        let mut raw = empty_response();
        raw.aggregations.candidates = Some(TermsAgg {
            buckets: vec![
                CandidateBucket {
                    key: "C3100".to_string(),
                    doc_count: 4,
                    candidate_stats: stats_agg(4, 400.0, Some(100.0)),
                    candidate_name: TermsAgg {
                        buckets: vec![KeyBucket {
                            key: "Jane Fields".to_string(),
                            doc_count: 4,
                        }],
                    },
                },
                CandidateBucket {
                    key: "C3200".to_string(),
                    doc_count: 2,
                    candidate_stats: stats_agg(2, 900.0, Some(450.0)),
                    candidate_name: TermsAgg {
                        buckets: vec![KeyBucket {
                            key: "John Rivers".to_string(),
                            doc_count: 2,
                        }],
                    },
                },
            ],
        });

        let candidates = candidates_for_district(&raw);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates["C3100"].name, "Jane Fields");
        assert_eq!(candidates["C3200"].stats.total_amount, 900.0);
    }

    // -- state districts --

    #[test]
    fn state_districts_split_by_house() {
        let mut raw = empty_response();
        raw.aggregations.districts_by_house = Some(TermsAgg {
            buckets: vec![
                HouseBucket {
                    key: "lower".to_string(),
                    doc_count: 30,
                    districts: TermsAgg {
                        buckets: vec![
                            DistrictBucket {
                                key: 1,
                                doc_count: 10,
                            },
                            DistrictBucket {
                                key: 45,
                                doc_count: 20,
                            },
                        ],
                    },
                },
                HouseBucket {
                    key: "upper".to_string(),
                    doc_count: 5,
                    districts: TermsAgg {
                        buckets: vec![DistrictBucket {
                            key: 3,
                            doc_count: 5,
                        }],
                    },
                },
            ],
        });

        let districts = state_districts(&raw);
        assert_eq!(districts.lower, vec!["1", "45"]);
        assert_eq!(districts.upper, vec!["3"]);
    }

    #[test]
    fn absent_house_yields_empty_list() {
        let mut raw = empty_response();
        raw.aggregations.districts_by_house = Some(TermsAgg {
            buckets: vec![HouseBucket {
                key: "lower".to_string(),
                doc_count: 1,
                districts: TermsAgg {
                    buckets: vec![DistrictBucket {
                        key: 7,
                        doc_count: 1,
                    }],
                },
            }],
        });

        let districts = state_districts(&raw);
        assert_eq!(districts.lower, vec!["7"]);
        assert!(districts.upper.is_empty());
    }

    #[test]
    fn unexpected_house_keys_are_dropped() {
        let mut raw = empty_response();
        raw.aggregations.districts_by_house = Some(TermsAgg {
            buckets: vec![HouseBucket {
                key: "senate".to_string(),
                doc_count: 2,
                districts: TermsAgg {
                    buckets: vec![DistrictBucket {
                        key: 12,
                        doc_count: 2,
                    }],
                },
            }],
        });

        let districts = state_districts(&raw);
        assert!(districts.lower.is_empty());
        assert!(districts.upper.is_empty());
    }
}
