//! Index-name construction.
//!
//! Contribution and report documents live in one index per state and record
//! family, suffixed with the deployment environment: `tx_contribs_prod`,
//! `mi_reports_dev`, and so on. Queries that span every state use a `*`
//! wildcard in place of the state code.

use crate::types::StateCode;

/// The two record families, each stored in its own index series.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IndexFamily {
    Contributions,
    Reports,
}

impl IndexFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexFamily::Contributions => "contribs",
            IndexFamily::Reports => "reports",
        }
    }
}

/// Returns the index name for a single state, e.g. `tx_contribs_prod`.
pub fn state_index(state: StateCode, family: IndexFamily, env: &str) -> String {
    format!("{}_{}_{}", state, family.as_str(), env)
}

/// Returns the wildcard pattern matching every state's index for the given
/// family, e.g. `*_contribs_prod`.
pub fn wildcard_index(family: IndexFamily, env: &str) -> String {
    format!("*_{}_{}", family.as_str(), env)
}
