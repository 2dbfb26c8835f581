mod candidate;
pub use self::candidate::{Candidate, HouseLevel};

mod contribution;
pub use self::contribution::{Contribution, EntityType};

mod filer;
pub use self::filer::Filer;

mod meta;
pub use self::meta::{
    Contributions, NamedStats, QueryDesc, Records, RecordsQueryDesc, Reports, Stats,
};

mod report;
pub use self::report::Report;

mod state;
pub use self::state::StateCode;

mod summary;
pub use self::summary::{
    CandidateSummary, ContributionByType, DistrictSummary, FilerSummary, StateDistricts,
    StateSummary, Summary,
};
