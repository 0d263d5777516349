// pages/src/fixtures.rs
//
// Seed data treated as if supplied by the external data service. Rooms are
// the one resource the source application never persisted, so the console
// seeds them from here; the rest are demo rows for the read-only pages.

use models::medical::{
    LabResult, LabStatus, MedSample, Message, MessageStatus, MessageType, Room, RoomStatus,
    RoomType, SampleStatus,
};

pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            name: "Consult A".into(),
            room_type: RoomType::Consultation,
            capacity: 3,
            status: RoomStatus::Available,
            equipment: vec!["otoscope".into(), "blood pressure monitor".into()],
        },
        Room {
            id: 2,
            name: "Exam 1".into(),
            room_type: RoomType::Examination,
            capacity: 2,
            status: RoomStatus::Occupied,
            equipment: vec!["examination table".into(), "scale".into()],
        },
        Room {
            id: 3,
            name: "OR-1".into(),
            room_type: RoomType::Operating,
            capacity: 6,
            status: RoomStatus::Cleaning,
            equipment: vec!["anesthesia cart".into(), "surgical lights".into()],
        },
        Room {
            id: 4,
            name: "Recovery 1".into(),
            room_type: RoomType::Recovery,
            capacity: 4,
            status: RoomStatus::Available,
            equipment: vec!["patient monitor".into()],
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            sender: "Dr. Patel".into(),
            subject: "Referral for review".into(),
            body: "Please review the attached cardiology referral.".into(),
            message_type: MessageType::Referral,
            status: MessageStatus::Unread,
            received_at: "2026-08-28T14:05:00Z".parse().unwrap(),
        },
        Message {
            id: 2,
            sender: "Front Desk".into(),
            subject: "Lab results ready".into(),
            body: "CBC panel for patient 12 is back.".into(),
            message_type: MessageType::LabUpdate,
            status: MessageStatus::Read,
            received_at: "2026-08-27T09:30:00Z".parse().unwrap(),
        },
    ]
}

pub fn lab_results() -> Vec<LabResult> {
    vec![
        LabResult {
            id: 1,
            patient_id: 12,
            test_name: "CBC".into(),
            value: "11.2".into(),
            unit: Some("x10^9/L".into()),
            reference_range: Some("4.0-10.0".into()),
            abnormal_flag: Some("H".into()),
            status: LabStatus::Completed,
            resulted_at: "2026-08-27T08:00:00Z".parse().unwrap(),
        },
        LabResult {
            id: 2,
            patient_id: 7,
            test_name: "A1C".into(),
            value: "5.4".into(),
            unit: Some("%".into()),
            reference_range: Some("4.0-5.6".into()),
            abnormal_flag: Some("Normal".into()),
            status: LabStatus::Completed,
            resulted_at: "2026-08-26T10:15:00Z".parse().unwrap(),
        },
    ]
}

pub fn med_samples() -> Vec<MedSample> {
    vec![
        MedSample {
            id: 1,
            medication_name: "Lisinopril 10mg".into(),
            manufacturer: "Generix".into(),
            lot_number: "LX-2231".into(),
            quantity: 40,
            expires_on: "2027-03-01".parse().unwrap(),
            status: SampleStatus::InStock,
        },
        MedSample {
            id: 2,
            medication_name: "Atorvastatin 20mg".into(),
            manufacturer: "Helix Pharma".into(),
            lot_number: "HP-0907".into(),
            quantity: 3,
            expires_on: "2026-10-15".parse().unwrap(),
            status: SampleStatus::Low,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_unique_per_collection() {
        let rooms = rooms();
        let mut ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), rooms.len());
    }
}
