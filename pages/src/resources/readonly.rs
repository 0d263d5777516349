// pages/src/resources/readonly.rs
//
// The pages that only list and view: messages, lab results, medication
// samples, medical records. Same controller and filters, no drafts.

use models::medical::{
    LabResult, LabStatus, MedSample, MedicalRecord, Message, MessageStatus, MessageType,
    RecordStatus, RecordType, SampleStatus,
};

use crate::list_controller::{FilterSet, Searchable};
use crate::page::ReadOnlyPage;

impl Searchable for Message {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.sender.clone(), self.subject.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageFilters {
    pub status: Option<MessageStatus>,
    pub message_type: Option<MessageType>,
}

impl FilterSet<Message> for MessageFilters {
    fn matches(&self, item: &Message) -> bool {
        self.status.map_or(true, |s| item.status == s)
            && self.message_type.map_or(true, |t| item.message_type == t)
    }

    fn is_neutral(&self) -> bool {
        self.status.is_none() && self.message_type.is_none()
    }
}

pub type MessagesPage = ReadOnlyPage<Message, MessageFilters>;

impl Searchable for LabResult {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.test_name.clone(), self.value.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabFilters {
    pub status: Option<LabStatus>,
    /// Only rows with an abnormal flag set.
    pub abnormal_only: bool,
}

impl FilterSet<LabResult> for LabFilters {
    fn matches(&self, item: &LabResult) -> bool {
        self.status.map_or(true, |s| item.status == s)
            && (!self.abnormal_only
                || item
                    .abnormal_flag
                    .as_deref()
                    .map_or(false, |f| f != "Normal"))
    }

    fn is_neutral(&self) -> bool {
        self.status.is_none() && !self.abnormal_only
    }
}

pub type LabResultsPage = ReadOnlyPage<LabResult, LabFilters>;

impl Searchable for MedSample {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.medication_name.clone(),
            self.manufacturer.clone(),
            self.lot_number.clone(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleFilters {
    pub status: Option<SampleStatus>,
}

impl FilterSet<MedSample> for SampleFilters {
    fn matches(&self, item: &MedSample) -> bool {
        self.status.map_or(true, |s| item.status == s)
    }

    fn is_neutral(&self) -> bool {
        self.status.is_none()
    }
}

pub type SamplesPage = ReadOnlyPage<MedSample, SampleFilters>;

impl Searchable for MedicalRecord {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.title.clone(), self.summary.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordFilters {
    pub record_type: Option<RecordType>,
    pub status: Option<RecordStatus>,
}

impl FilterSet<MedicalRecord> for RecordFilters {
    fn matches(&self, item: &MedicalRecord) -> bool {
        self.record_type.map_or(true, |t| item.record_type == t)
            && self.status.map_or(true, |s| item.status == s)
    }

    fn is_neutral(&self) -> bool {
        self.record_type.is_none() && self.status.is_none()
    }
}

pub type RecordsPage = ReadOnlyPage<MedicalRecord, RecordFilters>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abnormal_only_filter_checks_the_flag() {
        let result = LabResult {
            id: 1,
            patient_id: 1,
            test_name: "CBC".into(),
            value: "5.1".into(),
            unit: Some("x10^9/L".into()),
            reference_range: None,
            abnormal_flag: Some("H".into()),
            status: LabStatus::Completed,
            resulted_at: "2026-08-01T12:00:00Z".parse().unwrap(),
        };
        let filters = LabFilters {
            abnormal_only: true,
            ..LabFilters::default()
        };
        assert!(filters.matches(&result));
        let normal = LabResult {
            abnormal_flag: Some("Normal".into()),
            ..result
        };
        assert!(!filters.matches(&normal));
    }
}
