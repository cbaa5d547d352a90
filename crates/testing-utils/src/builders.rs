//! Test data builders for creating test entities
//!
//! Builder patterns for test data with sensible defaults and easy
//! customization.

use chrono::Utc;

use respond_domain::entities::{
    EmergencyReport, Responder, ResponderRole, REPORT_STATUS_NEW,
};

/// Builder for creating test Responder entities
pub struct ResponderBuilder {
    responder: Responder,
}

impl ResponderBuilder {
    pub fn new() -> Self {
        Self {
            responder: Responder {
                id: 1,
                name: "test_responder".to_string(),
                role: ResponderRole::Medic,
                current_lat: Some(-1.2921),
                current_lng: Some(36.8219),
                availability: true,
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.responder.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.responder.name = name.to_string();
        self
    }

    pub fn with_role(mut self, role: ResponderRole) -> Self {
        self.responder.role = role;
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.responder.current_lat = Some(lat);
        self.responder.current_lng = Some(lng);
        self
    }

    pub fn without_location(mut self) -> Self {
        self.responder.current_lat = None;
        self.responder.current_lng = None;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.responder.availability = false;
        self
    }

    pub fn build(self) -> Responder {
        self.responder
    }
}

impl Default for ResponderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test EmergencyReport entities
pub struct ReportBuilder {
    report: EmergencyReport,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            report: EmergencyReport {
                id: 1,
                kind: "ACCIDENT".to_string(),
                description: "test report".to_string(),
                location_lat: Some(-1.30),
                location_lng: Some(36.83),
                reported_at: Utc::now(),
                status: REPORT_STATUS_NEW.to_string(),
                reporter_id: "reporter-001".to_string(),
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.report.id = id;
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.report.kind = kind.to_string();
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.report.location_lat = Some(lat);
        self.report.location_lng = Some(lng);
        self
    }

    pub fn without_location(mut self) -> Self {
        self.report.location_lat = None;
        self.report.location_lng = None;
        self
    }

    pub fn with_reporter(mut self, reporter_id: &str) -> Self {
        self.report.reporter_id = reporter_id.to_string();
        self
    }

    pub fn build(self) -> EmergencyReport {
        self.report
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
