//! Fixed catalogs used by the generators
//!
//! Name tables and small string pools the generators sample from. The unit
//! name catalog and its classification rule are deterministic: the same
//! names always receive the same classification tier, independent of the
//! RNG, so that reruns keep governance-sensitive units at the top level.

use crate::types::ClearanceLevel;

/// Catalog of organizational unit names, one per generated unit.
///
/// A generation run may request at most this many units; the list order is
/// part of the deterministic classification rule below.
pub const UNIT_NAMES: [&str; 25] = [
    "Executive_Board",
    "Finance_Controlling",
    "Human_Resources",
    "IT_Digitalization",
    "Research_Development",
    "Production",
    "Quality_Assurance",
    "Sales",
    "Marketing",
    "Procurement",
    "Logistics",
    "Customer_Service",
    "Legal_Compliance",
    "Security",
    "Facility_Management",
    "Business_Intelligence",
    "Project_Management",
    "Risk_Management",
    "Internal_Audit",
    "Communications_PR",
    "Environment_Sustainability",
    "Innovation_Lab",
    "Data_Analytics",
    "Cybersecurity",
    "Change_Management",
];

/// Name of the unit whose members handle security incidents.
pub const SECURITY_UNIT_NAME: &str = "Security";

/// Deterministic part of the unit classification rule.
///
/// Governance, security, and legal functions always receive `TopSecret`;
/// two further tiers are pinned below them. Returns `None` for names whose
/// classification is drawn at random from [`UNIT_RANDOM_LEVELS`].
pub fn pinned_unit_classification(name: &str) -> Option<ClearanceLevel> {
    match name {
        "Executive_Board" | "Security" | "Cybersecurity" | "Legal_Compliance" => {
            Some(ClearanceLevel::TopSecret)
        }
        "Finance_Controlling" | "Human_Resources" | "Internal_Audit" => {
            Some(ClearanceLevel::Secret)
        }
        "IT_Digitalization" | "Research_Development" | "Risk_Management" => {
            Some(ClearanceLevel::Confidential)
        }
        _ => None,
    }
}

/// Restricted pool for units without a pinned classification.
pub const UNIT_RANDOM_LEVELS: [ClearanceLevel; 2] =
    [ClearanceLevel::Internal, ClearanceLevel::Confidential];

/// Office locations for units and their members.
pub const CITY_LOCATIONS: [&str; 5] = ["Berlin", "Munich", "Hamburg", "Frankfurt", "Cologne"];

/// First names for generated people.
pub const FIRST_NAMES: [&str; 24] = [
    "Anna", "Ben", "Clara", "David", "Elena", "Felix", "Greta", "Henrik", "Ida", "Jonas",
    "Katrin", "Lukas", "Marie", "Niklas", "Olivia", "Paul", "Quentin", "Rosa", "Stefan",
    "Tessa", "Ulrich", "Vera", "Wim", "Yvonne",
];

/// Last names for generated people.
pub const LAST_NAMES: [&str; 24] = [
    "Albrecht", "Bauer", "Conrad", "Dietrich", "Eckert", "Fischer", "Graf", "Hoffmann",
    "Irmer", "Jansen", "Keller", "Lang", "Maurer", "Neumann", "Otte", "Pfeiffer", "Quast",
    "Richter", "Schuster", "Thiel", "Ullmann", "Vogel", "Wagner", "Ziegler",
];

/// Role title for unit leads.
pub const LEAD_TITLE: &str = "Department_Head";

/// Role titles for senior-tier people.
pub const SENIOR_TITLES: [&str; 3] = ["Senior_Specialist", "Team_Lead", "Project_Lead"];

/// Role titles for staff-tier people.
pub const STAFF_TITLES: [&str; 4] = ["Specialist", "Clerk", "Analyst", "Coordinator"];

/// Tag pool for generated documents.
pub const ASSET_TAGS: [&str; 8] = [
    "important",
    "deadline",
    "review_required",
    "confidential",
    "legal",
    "financial",
    "technical",
    "strategic",
];

/// Retention period options in years.
pub const RETENTION_YEARS: [u32; 5] = [3, 5, 7, 10, 25];

/// Topic phrases combined with the document category to form titles.
pub const TITLE_PHRASES: [&str; 12] = [
    "Quarterly Consolidation",
    "Vendor Assessment",
    "Audit Trail Review",
    "Capacity Planning",
    "Incident Postmortem",
    "Market Expansion",
    "Process Redesign",
    "Regulatory Filing",
    "Platform Migration",
    "Budget Forecast",
    "Onboarding Revision",
    "Risk Register Update",
];

/// File name stems for generated documents.
pub const FILE_STEMS: [&str; 6] = ["report", "summary", "draft", "analysis", "minutes", "proposal"];

/// Browser identification strings attached to access events.
pub const USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 16_5 like Mac OS X) AppleWebKit/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/117.0",
];
