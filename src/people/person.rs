//! Person record

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ClearanceLevel, PersonId, RoleTier, UnitId};

/// An employee of the simulated enterprise.
///
/// Invariant: `security_clearance` never exceeds the classification of the
/// unit referenced by `unit_id`; the generator enforces this by derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Person identifier
    pub id: PersonId,
    /// Formatted employee number (`EN000001`)
    pub employee_number: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Corporate email address
    pub email: String,
    /// The unit this person belongs to
    #[serde(rename = "department_id")]
    pub unit_id: UnitId,
    /// Human-readable role title; presentation only, all logic gates on
    /// `role_tier`
    pub role: String,
    /// Generation-order-derived standing (lead / senior / staff)
    pub role_tier: RoleTier,
    /// Security clearance, bounded by the unit classification
    pub security_clearance: ClearanceLevel,
    /// Hire date
    pub hire_date: NaiveDate,
    /// Annual salary in whole currency units
    pub salary: u32,
    /// Office phone number
    pub phone: String,
    /// Office city, inherited from the unit
    pub office_location: String,
    /// Office room code
    pub office_room: String,
    /// The unit lead this person reports to; `None` for the lead themselves
    pub manager_id: Option<PersonId>,
    /// Whether the account is active
    pub active: bool,
    /// Last login timestamp
    pub last_login: DateTime<Utc>,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let person = Person {
            id: PersonId::new(3),
            employee_number: "EN000003".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Vogel".to_string(),
            email: "emp_0003@corp.example".to_string(),
            unit_id: UnitId::new(2),
            role: "Analyst".to_string(),
            role_tier: RoleTier::Staff,
            security_clearance: ClearanceLevel::Internal,
            hire_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            salary: 52_000,
            phone: "+49-30-5551234".to_string(),
            office_location: "Berlin".to_string(),
            office_room: "B214".to_string(),
            manager_id: Some(PersonId::new(2)),
            active: true,
            last_login: Utc::now(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["id"], "EMP_0003");
        assert_eq!(json["department_id"], "DEPT_002");
        assert_eq!(json["security_clearance"], "INTERNAL");
        assert_eq!(json["role_tier"], "STAFF");
        assert_eq!(json["hire_date"], "2020-03-01");
        assert_eq!(person.full_name(), "Anna Vogel");
    }
}
