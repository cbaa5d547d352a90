//! Mock implementations for the repository traits
//!
//! In-memory implementations used by unit tests that should not depend on a
//! real database. They enforce the same constraints as the SQLite
//! repositories: reserve() is a compare-and-set on availability and
//! create() on assignments rejects a second record for the same emergency.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use respond_domain::entities::{Assignment, EmergencyReport, Responder};
use respond_domain::errors::{DispatchError, DispatchResult};
use respond_domain::repositories::{
    AssignmentRepository, ReportRepository, ResponderRepository,
};

/// Mock implementation of ResponderRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockResponderRepository {
    responders: Arc<Mutex<HashMap<i64, Responder>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockResponderRepository {
    pub fn new() -> Self {
        Self {
            responders: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    pub fn with_responders(responders: Vec<Responder>) -> Self {
        let mut map = HashMap::new();
        let mut max_id = 0;
        for responder in responders {
            max_id = max_id.max(responder.id);
            map.insert(responder.id, responder);
        }
        Self {
            responders: Arc::new(Mutex::new(map)),
            next_id: Arc::new(Mutex::new(max_id + 1)),
        }
    }

    pub fn count(&self) -> usize {
        self.responders.lock().unwrap().len()
    }

    pub fn remove(&self, id: i64) {
        self.responders.lock().unwrap().remove(&id);
    }
}

#[async_trait]
impl ResponderRepository for MockResponderRepository {
    async fn create(&self, responder: &Responder) -> DispatchResult<Responder> {
        let mut responders = self.responders.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();

        let mut created = responder.clone();
        created.id = *next_id;
        *next_id += 1;

        responders.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<Responder>> {
        Ok(self.responders.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> DispatchResult<Vec<Responder>> {
        let mut all: Vec<Responder> =
            self.responders.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn list_available(&self) -> DispatchResult<Vec<Responder>> {
        let mut available: Vec<Responder> = self
            .responders
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.availability)
            .cloned()
            .collect();
        available.sort_by_key(|r| r.id);
        Ok(available)
    }

    async fn update_location(&self, id: i64, lat: f64, lng: f64) -> DispatchResult<Responder> {
        let mut responders = self.responders.lock().unwrap();
        match responders.get_mut(&id) {
            Some(responder) => {
                responder.current_lat = Some(lat);
                responder.current_lng = Some(lng);
                Ok(responder.clone())
            }
            None => Err(DispatchError::responder_not_found(id)),
        }
    }

    async fn reserve(&self, id: i64) -> DispatchResult<bool> {
        let mut responders = self.responders.lock().unwrap();
        match responders.get_mut(&id) {
            Some(responder) if responder.availability => {
                responder.availability = false;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(DispatchError::responder_not_found(id)),
        }
    }

    async fn release(&self, id: i64) -> DispatchResult<()> {
        let mut responders = self.responders.lock().unwrap();
        if let Some(responder) = responders.get_mut(&id) {
            responder.availability = true;
        }
        Ok(())
    }
}

/// Mock implementation of ReportRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockReportRepository {
    reports: Arc<Mutex<HashMap<i64, EmergencyReport>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockReportRepository {
    pub fn new() -> Self {
        Self {
            reports: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    pub fn with_reports(reports: Vec<EmergencyReport>) -> Self {
        let mut map = HashMap::new();
        let mut max_id = 0;
        for report in reports {
            max_id = max_id.max(report.id);
            map.insert(report.id, report);
        }
        Self {
            reports: Arc::new(Mutex::new(map)),
            next_id: Arc::new(Mutex::new(max_id + 1)),
        }
    }

    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportRepository for MockReportRepository {
    async fn create(&self, report: &EmergencyReport) -> DispatchResult<EmergencyReport> {
        let mut reports = self.reports.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();

        let mut created = report.clone();
        created.id = *next_id;
        *next_id += 1;

        reports.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<EmergencyReport>> {
        Ok(self.reports.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_reporter(&self, reporter_id: &str) -> DispatchResult<Vec<EmergencyReport>> {
        let mut matching: Vec<EmergencyReport> = self
            .reports
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.reporter_id == reporter_id)
            .cloned()
            .collect();
        matching.sort_by_key(|r| r.id);
        Ok(matching)
    }
}

/// Mock implementation of AssignmentRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockAssignmentRepository {
    assignments: Arc<Mutex<HashMap<i64, Assignment>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockAssignmentRepository {
    pub fn new() -> Self {
        Self {
            assignments: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    pub fn count(&self) -> usize {
        self.assignments.lock().unwrap().len()
    }
}

#[async_trait]
impl AssignmentRepository for MockAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> DispatchResult<Assignment> {
        let mut assignments = self.assignments.lock().unwrap();
        if assignments
            .values()
            .any(|a| a.emergency_id == assignment.emergency_id)
        {
            return Err(DispatchError::AlreadyAssigned {
                emergency_id: assignment.emergency_id,
            });
        }

        let mut next_id = self.next_id.lock().unwrap();
        let mut created = assignment.clone();
        created.id = *next_id;
        *next_id += 1;

        assignments.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<Assignment>> {
        Ok(self.assignments.lock().unwrap().get(&id).cloned())
    }

    async fn get_by_emergency(&self, emergency_id: i64) -> DispatchResult<Option<Assignment>> {
        Ok(self
            .assignments
            .lock()
            .unwrap()
            .values()
            .find(|a| a.emergency_id == emergency_id)
            .cloned())
    }
}
