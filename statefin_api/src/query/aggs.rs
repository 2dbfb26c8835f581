//! Scope-specific extra aggregations merged into summary queries.
//!
//! Bucket sizes are sized to the data: a state has at most 150 districts
//! per house, a district at most 150 funded candidates, and the associated
//! filer rollup keeps the top 10 by document count.

use std::collections::BTreeMap;

use crate::query::dsl::Agg;
use crate::query::fields;

/// Two-level house -> district rollup for the jurisdiction summary, district
/// keys ascending within each house.
pub fn available_districts() -> BTreeMap<String, Agg> {
    let mut aggs = BTreeMap::new();
    aggs.insert(
        "districts_by_house".to_string(),
        Agg::terms(fields::CANDIDATE_HOUSE, 150).with_sub(
            "districts",
            Agg::terms_by_key(fields::CANDIDATE_DISTRICT, 150),
        ),
    );
    aggs
}

/// Per-candidate stats for a seat summary, with a top-1 name bucket so the
/// serializer can label each candidate id.
pub fn candidates_for_district() -> BTreeMap<String, Agg> {
    let mut aggs = BTreeMap::new();
    aggs.insert(
        "candidates".to_string(),
        Agg::terms(fields::CANDIDATE_ID, 150)
            .with_sub("candidate_stats", Agg::stats(fields::AMOUNT))
            .with_sub("candidate_name", Agg::terms(fields::CANDIDATE_NAME, 1)),
    );
    aggs
}

/// Per-filer stats for a candidate summary, keyed by filer id.
pub fn associated_filers() -> BTreeMap<String, Agg> {
    let mut aggs = BTreeMap::new();
    aggs.insert(
        "associated_filers".to_string(),
        Agg::terms(fields::FILER_ID, 10)
            .with_sub("filer_stats", Agg::stats(fields::AMOUNT))
            .with_sub("filer_name", Agg::terms(fields::FILER_NAME, 10)),
    );
    aggs
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn available_districts_shape() {
        let aggs = available_districts();
        assert_eq!(
            serde_json::to_value(&aggs).unwrap(),
            json!({
                "districts_by_house": {
                    "terms": {"field": "candidate.house.keyword", "size": 150},
                    "aggs": {
                        "districts": {
                            "terms": {
                                "field": "candidate.district",
                                "size": 150,
                                "order": {"_key": "asc"}
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn candidates_for_district_shape() {
        let aggs = candidates_for_district();
        assert_eq!(
            serde_json::to_value(&aggs).unwrap(),
            json!({
                "candidates": {
                    "terms": {"field": "candidate.candidate_id.keyword", "size": 150},
                    "aggs": {
                        "candidate_stats": {"stats": {"field": "amount"}},
                        "candidate_name": {
                            "terms": {"field": "candidate.name.keyword", "size": 1}
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn associated_filers_shape() {
        let aggs = associated_filers();
        assert_eq!(
            serde_json::to_value(&aggs).unwrap(),
            json!({
                "associated_filers": {
                    "terms": {"field": "filer.filer_id.keyword", "size": 10},
                    "aggs": {
                        "filer_stats": {"stats": {"field": "amount"}},
                        "filer_name": {"terms": {"field": "filer.name.keyword", "size": 10}}
                    }
                }
            })
        );
    }
}
