//! In-memory repository implementation.
//!
//! Backs the repository traits with `RwLock`-guarded vectors. This is
//! the storage used by the API layer and tests; a database-backed
//! implementation would slot in behind the same traits.

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Booking, BookingStatus, BookingWindow, Lead, LeadStatus, Quotation, QuotationInputs,
};
use crate::pricing::calculate_total_rent;
use crate::scheduling::find_conflicts;

use super::{BookingRepository, LeadRepository, NewBooking, NewLead, QuotationRepository};

/// In-memory store implementing all repository traits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    leads: RwLock<Vec<Lead>>,
    quotations: RwLock<Vec<Quotation>>,
    jobs: RwLock<Vec<Booking>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadRepository for InMemoryStore {
    fn get_lead(&self, id: &str) -> EngineResult<Lead> {
        self.leads
            .read()
            .expect("lead lock poisoned")
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| EngineError::LeadNotFound { id: id.to_string() })
    }

    fn list_leads(&self) -> EngineResult<Vec<Lead>> {
        Ok(self.leads.read().expect("lead lock poisoned").clone())
    }

    fn create_lead(&self, new: NewLead) -> EngineResult<Lead> {
        let now = Utc::now();
        let lead = Lead {
            id: Uuid::new_v4().to_string(),
            customer_name: new.customer_name,
            service_needed: new.service_needed,
            site_location: new.site_location,
            status: LeadStatus::New,
            assigned_to: new.assigned_to,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        self.leads
            .write()
            .expect("lead lock poisoned")
            .push(lead.clone());
        Ok(lead)
    }

    fn update_lead_status(&self, id: &str, status: LeadStatus) -> EngineResult<Lead> {
        let mut leads = self.leads.write().expect("lead lock poisoned");
        let lead = leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| EngineError::LeadNotFound { id: id.to_string() })?;
        lead.status = status;
        lead.updated_at = Utc::now();
        Ok(lead.clone())
    }
}

impl QuotationRepository for InMemoryStore {
    fn get_quotation(&self, id: &str) -> EngineResult<Quotation> {
        self.quotations
            .read()
            .expect("quotation lock poisoned")
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| EngineError::QuotationNotFound { id: id.to_string() })
    }

    fn list_quotations_for_lead(&self, lead_id: &str) -> EngineResult<Vec<Quotation>> {
        let mut quotations: Vec<Quotation> = self
            .quotations
            .read()
            .expect("quotation lock poisoned")
            .iter()
            .filter(|q| q.lead_id == lead_id)
            .cloned()
            .collect();
        quotations.sort_by_key(|q| q.version);
        Ok(quotations)
    }

    fn create_quotation(
        &self,
        lead_id: &str,
        inputs: QuotationInputs,
        created_by: &str,
    ) -> EngineResult<Quotation> {
        // Also rejects invalid inputs before any version is consumed.
        let total_rent = calculate_total_rent(&inputs)?;
        self.get_lead(lead_id)?;

        let mut quotations = self.quotations.write().expect("quotation lock poisoned");
        let next_version = quotations
            .iter()
            .filter(|q| q.lead_id == lead_id)
            .map(|q| q.version)
            .max()
            .unwrap_or(0)
            + 1;

        let now = Utc::now();
        let quotation = Quotation {
            id: Uuid::new_v4().to_string(),
            lead_id: lead_id.to_string(),
            inputs,
            total_rent,
            version: next_version,
            created_at: now,
            updated_at: now,
            created_by: created_by.to_string(),
        };
        quotations.push(quotation.clone());
        Ok(quotation)
    }
}

impl BookingRepository for InMemoryStore {
    fn get_job(&self, id: &str) -> EngineResult<Booking> {
        self.jobs
            .read()
            .expect("job lock poisoned")
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| EngineError::JobNotFound { id: id.to_string() })
    }

    fn list_jobs(&self) -> EngineResult<Vec<Booking>> {
        Ok(self.jobs.read().expect("job lock poisoned").clone())
    }

    fn create_job(&self, new: NewBooking) -> EngineResult<Booking> {
        if new.start_date >= new.end_date {
            return Err(EngineError::InvalidWindow {
                message: "end must be after start".to_string(),
            });
        }
        let lead = self.get_lead(&new.lead_id)?;

        let mut jobs = self.jobs.write().expect("job lock poisoned");
        let window = BookingWindow {
            equipment_id: new.equipment_id.clone(),
            operator_id: new.operator_id.clone(),
            start_date: new.start_date,
            end_date: new.end_date,
        };
        let conflicts = find_conflicts(&window, &jobs);
        if !conflicts.is_empty() {
            return Err(EngineError::ScheduleConflict {
                conflicting_job_ids: conflicts.into_iter().map(|b| b.id).collect(),
            });
        }

        let now = Utc::now();
        let job = Booking {
            id: Uuid::new_v4().to_string(),
            lead_id: new.lead_id,
            customer_name: lead.customer_name,
            equipment_id: new.equipment_id,
            operator_id: new.operator_id,
            start_date: new.start_date,
            end_date: new.end_date,
            location: new.location,
            status: BookingStatus::Scheduled,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        jobs.push(job.clone());
        Ok(job)
    }

    fn update_job_status(&self, id: &str, status: BookingStatus) -> EngineResult<Booking> {
        let mut jobs = self.jobs.write().expect("job lock poisoned");
        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| EngineError::JobNotFound { id: id.to_string() })?;
        job.status = status;
        job.updated_at = Utc::now();
        Ok(job.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn seed_lead(store: &InMemoryStore) -> Lead {
        store
            .create_lead(NewLead {
                customer_name: "BuildRight Inc".to_string(),
                service_needed: "Tower crane for high-rise".to_string(),
                site_location: "456 Construction Ave".to_string(),
                assigned_to: "user_001".to_string(),
                notes: None,
            })
            .unwrap()
    }

    fn reference_inputs() -> QuotationInputs {
        QuotationInputs {
            base_rate: dec("5000"),
            working_hours: dec("8"),
            rental_days: dec("30"),
            food_charge: dec("500"),
            accom_charge: dec("1200"),
            num_resources: dec("3"),
            usage_percent: dec("80"),
            elongation_percent: dec("10"),
            commercial_charge: dec("2000"),
            risk_percent: dec("5"),
            incidental_charge: dec("800"),
            other_charge: dec("300"),
        }
    }

    fn new_booking(lead_id: &str, equipment: &str, operator: &str) -> NewBooking {
        NewBooking {
            lead_id: lead_id.to_string(),
            equipment_id: equipment.to_string(),
            operator_id: operator.to_string(),
            start_date: ts("2023-11-01T08:00:00Z"),
            end_date: ts("2023-11-30T17:00:00Z"),
            location: "789 Highrise Blvd".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_create_and_get_lead() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let fetched = store.get_lead(&lead.id).unwrap();
        assert_eq!(fetched.customer_name, "BuildRight Inc");
        assert_eq!(fetched.status, LeadStatus::New);
    }

    #[test]
    fn test_get_unknown_lead_returns_error() {
        let store = InMemoryStore::new();
        let result = store.get_lead("missing");
        assert!(matches!(result, Err(EngineError::LeadNotFound { .. })));
    }

    #[test]
    fn test_update_lead_status() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let updated = store
            .update_lead_status(&lead.id, LeadStatus::Negotiation)
            .unwrap();
        assert_eq!(updated.status, LeadStatus::Negotiation);
    }

    #[test]
    fn test_quotation_versions_are_monotonic_per_lead() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);
        let other = seed_lead(&store);

        let q1 = store
            .create_quotation(&lead.id, reference_inputs(), "user_001")
            .unwrap();
        let q2 = store
            .create_quotation(&lead.id, reference_inputs(), "user_001")
            .unwrap();
        let q_other = store
            .create_quotation(&other.id, reference_inputs(), "user_001")
            .unwrap();

        assert_eq!(q1.version, 1);
        assert_eq!(q2.version, 2);
        // Versions are per lead, not global.
        assert_eq!(q_other.version, 1);
    }

    #[test]
    fn test_quotation_total_is_derived_from_inputs() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let quotation = store
            .create_quotation(&lead.id, reference_inputs(), "user_001")
            .unwrap();
        assert_eq!(quotation.total_rent, dec("2592100"));
    }

    #[test]
    fn test_quotation_history_is_append_only() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let q1 = store
            .create_quotation(&lead.id, reference_inputs(), "user_001")
            .unwrap();
        let cheaper = QuotationInputs {
            commercial_charge: dec("1800"),
            ..reference_inputs()
        };
        store
            .create_quotation(&lead.id, cheaper, "user_001")
            .unwrap();

        let history = store.list_quotations_for_lead(&lead.id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, q1.id);
        assert_eq!(history[0].total_rent, q1.total_rent);
        assert_eq!(history[1].version, 2);
    }

    #[test]
    fn test_quotation_for_unknown_lead_fails() {
        let store = InMemoryStore::new();
        let result = store.create_quotation("missing", reference_inputs(), "user_001");
        assert!(matches!(result, Err(EngineError::LeadNotFound { .. })));
    }

    #[test]
    fn test_invalid_inputs_do_not_consume_a_version() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let bad = QuotationInputs {
            base_rate: dec("-1"),
            ..Default::default()
        };
        assert!(store.create_quotation(&lead.id, bad, "user_001").is_err());

        let quotation = store
            .create_quotation(&lead.id, reference_inputs(), "user_001")
            .unwrap();
        assert_eq!(quotation.version, 1);
    }

    #[test]
    fn test_create_job_denormalizes_customer_name() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let job = store
            .create_job(new_booking(&lead.id, "eq_tc_80", "op_sarah"))
            .unwrap();
        assert_eq!(job.customer_name, "BuildRight Inc");
        assert_eq!(job.status, BookingStatus::Scheduled);
    }

    #[test]
    fn test_create_job_refuses_conflicting_window() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let first = store
            .create_job(new_booking(&lead.id, "eq_tc_80", "op_sarah"))
            .unwrap();
        let result = store.create_job(new_booking(&lead.id, "eq_tc_80", "op_mike"));

        match result.unwrap_err() {
            EngineError::ScheduleConflict {
                conflicting_job_ids,
            } => assert_eq!(conflicting_job_ids, vec![first.id]),
            other => panic!("Expected ScheduleConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_create_job_allows_disjoint_resources() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        store
            .create_job(new_booking(&lead.id, "eq_tc_80", "op_sarah"))
            .unwrap();
        // Same window, different crane and operator.
        let result = store.create_job(new_booking(&lead.id, "eq_mc_30", "op_lisa"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_completing_a_job_frees_its_resources() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let job = store
            .create_job(new_booking(&lead.id, "eq_tc_80", "op_sarah"))
            .unwrap();
        store
            .update_job_status(&job.id, BookingStatus::Completed)
            .unwrap();

        let result = store.create_job(new_booking(&lead.id, "eq_tc_80", "op_sarah"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_job_rejects_inverted_window() {
        let store = InMemoryStore::new();
        let lead = seed_lead(&store);

        let mut booking = new_booking(&lead.id, "eq_tc_80", "op_sarah");
        std::mem::swap(&mut booking.start_date, &mut booking.end_date);

        let result = store.create_job(booking);
        assert!(matches!(result, Err(EngineError::InvalidWindow { .. })));
    }
}
