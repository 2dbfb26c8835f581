//! Index field names referenced by filter and aggregation builders.
//!
//! Multiword fields that queries touch are indexed snake_case; identifier
//! and name fields carry a `.keyword` sub-field for exact matching.

pub const AMOUNT: &str = "amount";
pub const CONTRIBUTION_DATE: &str = "contribution_date";
pub const CONTRIBUTION_TYPE: &str = "type";
pub const RECEIVED_DATE: &str = "received_date";

pub const FILER_ID: &str = "filer.filer_id.keyword";
pub const FILER_NAME: &str = "filer.name.keyword";

pub const CANDIDATE_ID: &str = "candidate.candidate_id.keyword";
pub const CANDIDATE_NAME: &str = "candidate.name.keyword";
pub const CANDIDATE_HOUSE: &str = "candidate.house.keyword";
pub const CANDIDATE_DISTRICT: &str = "candidate.district";
