//! End-to-end engine tests: derivation, presentation, and click dispatch
//! against a live (mutable) calendar dataset.

mod support;

use std::sync::Arc;

use chrono::NaiveDate;
use fixwise_core::{
    resolve, Action, ClickHandler, RenderPolicy, StaticRoles, SystemClock,
};
use fixwise_domain::{AppointmentStatus, FixwiseError, Role, RoleContext, SlotState, TimeSlot};
use support::calendar::ScriptedCalendar;
use support::collaborators::{sample_detail, FormEvent, RecordingForms, StubReader};

const BOOKING_HOUR_OFFSET: i64 = 4;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn handler(
    calendar: Arc<ScriptedCalendar>,
    reader: StubReader,
    forms: Arc<RecordingForms>,
    ctx: RoleContext,
) -> ClickHandler {
    ClickHandler::new(
        calendar,
        Arc::new(reader),
        forms,
        Arc::new(StaticRoles(ctx)),
        BOOKING_HOUR_OFFSET,
    )
}

#[tokio::test]
async fn requester_books_an_open_slot() {
    let slot_date = date(2025, 6, 10);
    let calendar = Arc::new(ScriptedCalendar::new());
    calendar.enable(slot_date, 14);

    let ctx = RoleContext::requester("fixer-1", "req-1");
    let state = resolve(slot_date, 14, ctx.viewer_requester(), calendar.as_ref());
    assert_eq!(state, SlotState::Available);

    let forms = Arc::new(RecordingForms::new());
    let handler = handler(
        Arc::clone(&calendar),
        StubReader::err(FixwiseError::Internal("fetch must not run".into())),
        Arc::clone(&forms),
        ctx,
    );

    let action = handler.handle_click(TimeSlot::new(slot_date, 14)).await.unwrap();
    let Action::CreateAppointment { start } = action else {
        panic!("expected create, got {action:?}");
    };
    assert_eq!(
        start.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "2025-06-10T18:00:00.000Z"
    );
    assert_eq!(forms.events(), vec![FormEvent::Create(start)]);
}

#[tokio::test]
async fn fixer_views_a_slot_occupied_by_another_requester() {
    let slot_date = date(2025, 6, 10);
    let calendar = Arc::new(ScriptedCalendar::new());
    calendar.enable(slot_date, 9);
    calendar.book(slot_date, 9, "req-2");

    // The fixer has no requester identity, so a foreign booking surfaces as
    // booked-by-other and renders as an occupied cell.
    let ctx = RoleContext::fixer("fixer-1");
    let state = resolve(slot_date, 9, ctx.viewer_requester(), calendar.as_ref());
    assert_eq!(state, SlotState::BookedByOther);

    let policy = RenderPolicy::default();
    let cell = policy.present(state, Some(Role::Fixer), false);
    assert!(cell.visible);
    assert_eq!(cell.label, "Ocupado");

    let forms = Arc::new(RecordingForms::new());
    let handler = handler(
        Arc::clone(&calendar),
        StubReader::err(FixwiseError::Internal("fetch must not run".into())),
        Arc::clone(&forms),
        ctx,
    );

    let action = handler.handle_click(TimeSlot::new(slot_date, 9)).await.unwrap();
    assert_eq!(action, Action::ViewReadOnlyDetails { date: slot_date, hour: 9 });
    assert_eq!(forms.events(), vec![FormEvent::Details(slot_date, 9)]);
}

#[tokio::test]
async fn click_re_resolves_when_snapshot_changed_after_render() {
    let slot_date = date(2025, 6, 10);
    let calendar = Arc::new(ScriptedCalendar::new());
    calendar.enable(slot_date, 14);

    let ctx = RoleContext::requester("fixer-1", "req-1");
    let render_state = resolve(slot_date, 14, ctx.viewer_requester(), calendar.as_ref());
    assert_eq!(render_state, SlotState::Available);

    // Another requester takes the slot between render and click.
    calendar.book(slot_date, 14, "req-2");

    let forms = Arc::new(RecordingForms::new());
    let handler = handler(
        Arc::clone(&calendar),
        StubReader::err(FixwiseError::Internal("fetch must not run".into())),
        Arc::clone(&forms),
        ctx,
    );

    let action = handler.handle_click(TimeSlot::new(slot_date, 14)).await.unwrap();
    assert_eq!(action, Action::Noop);
    assert!(forms.events().is_empty(), "no form may open for a stolen slot");
}

#[tokio::test]
async fn requester_edits_their_own_booking() {
    let slot_date = date(2025, 6, 10);
    let calendar = Arc::new(ScriptedCalendar::new());
    calendar.enable(slot_date, 14);
    calendar.book(slot_date, 14, "req-1");

    let detail = sample_detail("fixer-1", "req-1", slot_date, 14);
    let detail_id = detail.id;

    let forms = Arc::new(RecordingForms::new());
    let handler = handler(
        Arc::clone(&calendar),
        StubReader::ok(detail),
        Arc::clone(&forms),
        RoleContext::requester("fixer-1", "req-1"),
    );

    let action = handler.handle_click(TimeSlot::new(slot_date, 14)).await.unwrap();
    assert!(matches!(action, Action::FetchAndEditAppointment { .. }));
    assert_eq!(forms.events(), vec![FormEvent::Edit(detail_id)]);
}

#[tokio::test]
async fn failed_fetch_aborts_the_edit_without_opening_a_form() {
    let slot_date = date(2025, 6, 10);
    let calendar = Arc::new(ScriptedCalendar::new());
    calendar.enable(slot_date, 14);
    calendar.book(slot_date, 14, "req-1");

    let forms = Arc::new(RecordingForms::new());
    let handler = handler(
        Arc::clone(&calendar),
        StubReader::err(FixwiseError::Api { status: 404, body: "gone".into() }),
        Arc::clone(&forms),
        RoleContext::requester("fixer-1", "req-1"),
    );

    let err = handler.handle_click(TimeSlot::new(slot_date, 14)).await.unwrap_err();
    assert!(matches!(err, FixwiseError::Api { status: 404, .. }));
    assert!(forms.events().is_empty());
}

#[tokio::test]
async fn a_failed_click_does_not_corrupt_sibling_cells() {
    let slot_date = date(2025, 6, 10);
    let calendar = Arc::new(ScriptedCalendar::new());
    calendar.enable(slot_date, 14);
    calendar.enable(slot_date, 15);
    calendar.book(slot_date, 14, "req-1");

    let ctx = RoleContext::requester("fixer-1", "req-1");

    // Click on the booked slot fails its fetch.
    let failing_forms = Arc::new(RecordingForms::new());
    let failing = handler(
        Arc::clone(&calendar),
        StubReader::err(FixwiseError::Network("connection reset".into())),
        Arc::clone(&failing_forms),
        ctx.clone(),
    );
    assert!(failing.handle_click(TimeSlot::new(slot_date, 14)).await.is_err());

    // The neighbouring cell still derives and dispatches from the same data.
    assert_eq!(
        resolve(slot_date, 15, ctx.viewer_requester(), calendar.as_ref()),
        SlotState::Available
    );
    let forms = Arc::new(RecordingForms::new());
    let working = handler(
        Arc::clone(&calendar),
        StubReader::err(FixwiseError::Internal("fetch must not run".into())),
        Arc::clone(&forms),
        ctx,
    );
    let action = working.handle_click(TimeSlot::new(slot_date, 15)).await.unwrap();
    assert!(matches!(action, Action::CreateAppointment { .. }));
}

#[tokio::test]
async fn cancellation_residue_only_unblocks_foreign_requester_cancellations() {
    let slot_date = date(2025, 6, 10);
    let calendar = Arc::new(ScriptedCalendar::new());
    calendar.enable(slot_date, 10);
    calendar.enable(slot_date, 11);
    calendar.cancel(slot_date, 10, AppointmentStatus::CancelledByRequester, "req-2");
    calendar.cancel(slot_date, 11, AppointmentStatus::CancelledByFixer, "req-1");

    let ctx = RoleContext::requester("fixer-1", "req-1");
    assert_eq!(
        resolve(slot_date, 10, ctx.viewer_requester(), calendar.as_ref()),
        SlotState::CancelledByOtherRequester
    );
    assert_eq!(
        resolve(slot_date, 11, ctx.viewer_requester(), calendar.as_ref()),
        SlotState::CancelledByFixer
    );

    let forms = Arc::new(RecordingForms::new());
    let handler = handler(
        Arc::clone(&calendar),
        StubReader::err(FixwiseError::Internal("fetch must not run".into())),
        Arc::clone(&forms),
        ctx,
    );

    // Rebooking is allowed where another requester cancelled...
    let action = handler.handle_click(TimeSlot::new(slot_date, 10)).await.unwrap();
    assert!(matches!(action, Action::CreateAppointment { .. }));
    // ...but not where the fixer cancelled the viewer's own booking.
    let action = handler.handle_click(TimeSlot::new(slot_date, 11)).await.unwrap();
    assert_eq!(action, Action::Noop);
}

#[test]
fn grid_and_clock_wiring_compiles_with_system_clock() {
    // SystemClock is the production time source; the grid tests use a fixed
    // clock, so at least pin the default wiring here.
    let composer = fixwise_core::GridComposer::new(
        RenderPolicy::default(),
        Arc::new(SystemClock),
        chrono::Weekday::Mon,
    );
    let anchor = composer.week_anchor(date(2025, 6, 10));
    assert_eq!(anchor, date(2025, 6, 9));
}
