pub mod aggs;
pub mod dsl;
pub mod fields;

mod common;
pub use self::common::{
    default_start_date, DateParams, DateRange, Page, RecordParams, DEFAULT_LIMIT,
};

mod filters;
pub use self::filters::{candidate_filter_set, district_filter_set, filer_filter_set};

mod records;
pub use self::records::RecordsQuery;

mod summary;
pub use self::summary::SummaryQuery;
