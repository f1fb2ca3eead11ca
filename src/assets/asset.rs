//! Classified document record and its enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{AssetId, ClearanceLevel, PersonId, UnitId};

/// Document category. Classification is never drawn independently of the
/// category; see [`AssetCategory::classification_pool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    /// Contracts with customers and partners
    Contracts,
    /// Financial reports and statements
    FinancialReports,
    /// Personnel records
    PersonnelRecords,
    /// Technical specifications
    TechnicalSpecifications,
    /// Strategic plans
    StrategicPlans,
    /// Compliance documents
    ComplianceDocuments,
    /// Research and development material
    ResearchDevelopment,
    /// Customer records
    CustomerRecords,
    /// Supplier contracts
    SupplierContracts,
    /// Security policies
    SecurityPolicies,
}

impl AssetCategory {
    /// All categories.
    pub const ALL: [AssetCategory; 10] = [
        AssetCategory::Contracts,
        AssetCategory::FinancialReports,
        AssetCategory::PersonnelRecords,
        AssetCategory::TechnicalSpecifications,
        AssetCategory::StrategicPlans,
        AssetCategory::ComplianceDocuments,
        AssetCategory::ResearchDevelopment,
        AssetCategory::CustomerRecords,
        AssetCategory::SupplierContracts,
        AssetCategory::SecurityPolicies,
    ];

    /// The classification subset permitted for this category.
    pub fn classification_pool(self) -> &'static [ClearanceLevel] {
        match self {
            AssetCategory::PersonnelRecords
            | AssetCategory::FinancialReports
            | AssetCategory::StrategicPlans => {
                &[ClearanceLevel::Secret, ClearanceLevel::TopSecret]
            }
            AssetCategory::Contracts
            | AssetCategory::ComplianceDocuments
            | AssetCategory::SecurityPolicies => {
                &[ClearanceLevel::Confidential, ClearanceLevel::Secret]
            }
            AssetCategory::TechnicalSpecifications | AssetCategory::ResearchDevelopment => &[
                ClearanceLevel::Confidential,
                ClearanceLevel::Secret,
                ClearanceLevel::TopSecret,
            ],
            AssetCategory::CustomerRecords | AssetCategory::SupplierContracts => {
                &[ClearanceLevel::Internal, ClearanceLevel::Confidential]
            }
        }
    }

    /// Human-readable category name used in document titles.
    pub fn display_name(self) -> &'static str {
        match self {
            AssetCategory::Contracts => "Contracts",
            AssetCategory::FinancialReports => "Financial Reports",
            AssetCategory::PersonnelRecords => "Personnel Records",
            AssetCategory::TechnicalSpecifications => "Technical Specifications",
            AssetCategory::StrategicPlans => "Strategic Plans",
            AssetCategory::ComplianceDocuments => "Compliance Documents",
            AssetCategory::ResearchDevelopment => "Research Development",
            AssetCategory::CustomerRecords => "Customer Records",
            AssetCategory::SupplierContracts => "Supplier Contracts",
            AssetCategory::SecurityPolicies => "Security Policies",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Review status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// Still being written
    Draft,
    /// Under review
    Review,
    /// Approved for use
    Approved,
    /// Archived
    Archived,
}

impl AssetStatus {
    /// All statuses.
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Draft,
        AssetStatus::Review,
        AssetStatus::Approved,
        AssetStatus::Archived,
    ];
}

/// Encryption applied to the stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncryptionLevel {
    /// AES-128, for material below `SECRET`
    #[serde(rename = "AES128")]
    Aes128,
    /// AES-256, for `SECRET` and above
    #[serde(rename = "AES256")]
    Aes256,
}

/// Structured metadata attached to every document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Project code the document belongs to
    pub project_code: String,
    /// Whether the document is subject to compliance review
    pub compliance_required: bool,
    /// Encryption level derived from the classification
    pub encryption_level: EncryptionLevel,
}

/// A classified document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Document identifier
    pub id: AssetId,
    /// Document title
    pub title: String,
    /// Document category
    #[serde(rename = "document_type")]
    pub category: AssetCategory,
    /// Classification drawn from the category's permitted subset
    #[serde(rename = "security_classification")]
    pub classification: ClearanceLevel,
    /// Owning unit
    #[serde(rename = "owner_department_id")]
    pub owner_unit_id: UnitId,
    /// Creating person
    #[serde(rename = "creator_employee_id")]
    pub creator_id: PersonId,
    /// Stored file name
    pub file_name: String,
    /// File size in bytes
    pub file_size_bytes: u64,
    /// Content digest (hex)
    pub file_hash: String,
    /// Version string (`major.minor`)
    pub version: String,
    /// Review status
    pub status: AssetStatus,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Retention period in years
    pub retention_period_years: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
    /// Expiry timestamp
    pub expires_at: DateTime<Utc>,
    /// Structured metadata
    pub metadata: AssetMetadata,
}
