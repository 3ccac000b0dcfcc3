//! Resource and operation kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Remote resource collections mirrored on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Products,
    Supplies,
    ProductMovements,
    SupplyMovements,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        Self::Products,
        Self::Supplies,
        Self::ProductMovements,
        Self::SupplyMovements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Supplies => "supplies",
            Self::ProductMovements => "product-movements",
            Self::SupplyMovements => "supply-movements",
        }
    }

    /// Parse a kebab-case resource name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Where create/update/delete failures of this resource are reported.
    ///
    /// Movement forms are retried often and render their own errors, so
    /// their write failures stay out of the shared error. New kinds must
    /// pick a policy explicitly.
    pub fn error_policy(&self) -> ErrorPolicy {
        match self {
            Self::Products | Self::Supplies => ErrorPolicy::Surface,
            Self::ProductMovements | Self::SupplyMovements => ErrorPolicy::Local,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reporting policy for write failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Record the reason on the operation and in the shared error.
    Surface,
    /// Record only the failed status; the caller renders the reason.
    Local,
}

/// Operations that can be requested against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    Load,
    Create,
    Update,
    Delete,
    FindById,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        Self::Load,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::FindById,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::FindById => "find-by-id",
        }
    }

    /// Writes follow the resource's [`ErrorPolicy`]; reads always surface.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
