use serde::{Deserialize, Serialize};

use super::common::scalar_string;

/// Response to an `a` or `ptr` lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupReport {
    /// Resolved records
    #[serde(rename = "Information")]
    pub information: Vec<DnsAnswer>,
}

/// One resolved DNS record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsAnswer {
    /// Owner name of the record
    #[serde(rename = "Domain Name", deserialize_with = "scalar_string")]
    pub domain_name: String,

    /// Address (or pointer target) of the record
    #[serde(rename = "IP Address", deserialize_with = "scalar_string")]
    pub ip_address: String,

    /// Record type (A, PTR, ...)
    #[serde(rename = "Type", deserialize_with = "scalar_string")]
    pub record_type: String,
}
