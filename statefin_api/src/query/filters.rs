//! Filter-set builders, one per entity scope.
//!
//! Each returns the ordered clauses that narrow a query to its scope; the
//! composers AND them onto the mandatory date-range clause.

use crate::query::dsl::Filter;
use crate::query::fields;
use crate::types::HouseLevel;
use crate::Error;

/// Clauses restricting a query to a single filer.
pub fn filer_filter_set(filer_id: &str) -> Result<Vec<Filter>, Error> {
    let trimmed = filer_id.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("filer id is empty".to_string()));
    }
    Ok(vec![Filter::term(fields::FILER_ID, trimmed)])
}

/// Clauses restricting a query to a single candidate.
pub fn candidate_filter_set(candidate_id: &str) -> Vec<Filter> {
    vec![Filter::term(fields::CANDIDATE_ID, candidate_id)]
}

/// Clauses restricting a query to one legislative seat.
///
/// `district` arrives as a path segment and must parse as a positive
/// integer; `house` must be one of the two chamber values.
pub fn district_filter_set(house: &str, district: &str) -> Result<Vec<Filter>, Error> {
    let house: HouseLevel = house.parse()?;
    let district: i64 = district.trim().parse().map_err(|_| {
        Error::InvalidInput(format!("district '{}' is not an integer", district))
    })?;
    if district <= 0 {
        return Err(Error::InvalidInput(format!(
            "district must be a positive integer, got {}",
            district
        )));
    }
    Ok(vec![
        Filter::term(fields::CANDIDATE_HOUSE, house.as_str()),
        Filter::matches(fields::CANDIDATE_DISTRICT, district),
    ])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_json(filters: &[Filter]) -> serde_json::Value {
        serde_json::to_value(filters).unwrap()
    }

    // -- Filer scope --

    #[test]
    fn filer_filter_single_term_clause() {
        let filters = filer_filter_set("00088088").unwrap();
        assert_eq!(
            to_json(&filters),
            json!([{"term": {"filer.filer_id.keyword": "00088088"}}])
        );
    }

    #[test]
    fn filer_filter_trims_whitespace() {
        let filters = filer_filter_set("  00088088 ").unwrap();
        assert_eq!(
            to_json(&filters),
            json!([{"term": {"filer.filer_id.keyword": "00088088"}}])
        );
    }

    #[test]
    fn filer_filter_rejects_empty_id() {
        assert!(matches!(
            filer_filter_set("   "),
            Err(Error::InvalidInput(_))
        ));
    }

    // -- Candidate scope --

    #[test]
    fn candidate_filter_single_term_clause() {
        let filters = candidate_filter_set("C3100");
        assert_eq!(
            to_json(&filters),
            json!([{"term": {"candidate.candidate_id.keyword": "C3100"}}])
        );
    }

    // -- District scope --

    #[test]
    fn district_filter_house_then_district() {
        let filters = district_filter_set("lower", "45").unwrap();
        assert_eq!(
            to_json(&filters),
            json!([
                {"term": {"candidate.house.keyword": "lower"}},
                {"match": {"candidate.district": 45}}
            ])
        );
    }

    #[test]
    fn district_filter_house_case_insensitive() {
        let filters = district_filter_set("Upper", "3").unwrap();
        assert_eq!(
            to_json(&filters)[0],
            json!({"term": {"candidate.house.keyword": "upper"}})
        );
    }

    #[test]
    fn district_filter_rejects_unknown_house() {
        assert!(matches!(
            district_filter_set("senate", "45"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn district_filter_rejects_non_integer() {
        assert!(matches!(
            district_filter_set("lower", "forty-five"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn district_filter_rejects_zero_and_negative() {
        assert!(district_filter_set("lower", "0").is_err());
        assert!(district_filter_set("lower", "-45").is_err());
    }
}
