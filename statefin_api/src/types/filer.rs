use serde::{Deserialize, Serialize};

/// A filing committee or entity as embedded in indexed documents.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Filer {
    pub filer_id: String,
    #[serde(rename = "type")]
    pub filer_type: String,
    pub name: String,
}
