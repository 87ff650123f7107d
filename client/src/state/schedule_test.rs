use time::macros::datetime;
use uuid::Uuid;

use super::*;

// =============================================================
// Helpers
// =============================================================

const NOW: OffsetDateTime = datetime!(2026-03-14 08:00:00 UTC);

fn appointment(subject: &str, starts_at: OffsetDateTime) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        case_id: None,
        contact_id: None,
        subject: subject.to_owned(),
        starts_at,
        location: String::new(),
    }
}

fn hearing(case_id: RecordId, starts_at: OffsetDateTime) -> Hearing {
    Hearing {
        id: Uuid::new_v4(),
        case_id,
        starts_at,
        purpose: "Evidence".to_owned(),
        court_room: String::new(),
    }
}

// =============================================================
// Upcoming window
// =============================================================

#[test]
fn upcoming_merges_and_filters_to_the_window() {
    let case_id = Uuid::new_v4();
    let s = ScheduleState {
        appointments: vec![
            appointment("Inside window", datetime!(2026-03-15 11:00:00 UTC)),
            appointment("Past", datetime!(2026-03-13 11:00:00 UTC)),
            appointment("Too far out", datetime!(2026-04-02 11:00:00 UTC)),
        ],
        hearings: vec![hearing(case_id, datetime!(2026-03-16 10:30:00 UTC))],
        loading: false,
    };

    let upcoming = s.upcoming(NOW, 7);
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].label(), "Inside window");
    assert_eq!(upcoming[1].case_id(), Some(case_id));
}

#[test]
fn an_empty_schedule_has_no_upcoming_items() {
    assert!(ScheduleState::default().upcoming(NOW, 7).is_empty());
}

// =============================================================
// Next hearing per case
// =============================================================

#[test]
fn next_hearing_picks_the_earliest_future_listing() {
    let case_id = Uuid::new_v4();
    let s = ScheduleState {
        appointments: vec![],
        hearings: vec![
            hearing(case_id, datetime!(2026-05-01 10:00:00 UTC)),
            hearing(case_id, datetime!(2026-03-20 10:00:00 UTC)),
            hearing(case_id, datetime!(2026-03-01 10:00:00 UTC)), // already held
            hearing(Uuid::new_v4(), datetime!(2026-03-15 10:00:00 UTC)), // other case
        ],
        loading: false,
    };

    let next = s.next_hearing(case_id, NOW).unwrap();
    assert_eq!(next.starts_at, datetime!(2026-03-20 10:00:00 UTC));
}

#[test]
fn cases_without_future_listings_have_no_next_hearing() {
    let case_id = Uuid::new_v4();
    let s = ScheduleState {
        appointments: vec![],
        hearings: vec![hearing(case_id, datetime!(2026-03-01 10:00:00 UTC))],
        loading: false,
    };
    assert!(s.next_hearing(case_id, NOW).is_none());
}
