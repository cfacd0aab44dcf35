//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of the account making a purchase.
///
/// Wraps the raw integer handed to the front desk. Construction is permissive
/// on purpose: positivity is a *purchase validation* rule, checked when a
/// purchase is attempted, not at the type boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Whether this identifier can belong to a real account (strictly positive).
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = i64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("AccountId: {e}")))?;
        Ok(Self(id))
    }
}

/// Correlation identifier of a single purchase attempt.
///
/// Minted per attempt (UUIDv7, time-ordered) for receipts and log
/// correlation. Never participates in rule evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(Uuid);

impl PurchaseId {
    /// Create a new identifier. Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PurchaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PurchaseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<PurchaseId> for Uuid {
    fn from(value: PurchaseId) -> Self {
        value.0
    }
}

impl FromStr for PurchaseId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("PurchaseId: {e}")))?;
        Ok(Self(uuid))
    }
}
