//! Entity kind tag

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four entity collections tracked by the CRM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customer,
    Domain,
    Hosting,
    Vps,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Customer => "Customer",
            Self::Domain => "Domain",
            Self::Hosting => "Hosting package",
            Self::Vps => "VPS",
        };
        f.write_str(label)
    }
}
