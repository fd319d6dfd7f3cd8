use std::time::{Duration, Instant};

use chrono::NaiveDate;
use weekstrip_core::adapter::{ContinuousAdapter, DateNavigator, DiscreteAdapter, ScrollPhase};
use weekstrip_core::grid::resolver;
use weekstrip_core::nav::{EventLog, NavEvent, NavigatorOptions, PageDirection, PageKind};
use weekstrip_core::{GridSpec, PagingSurface, RecordingSurface, ScrollSyncController, WeekGridModel, WeekStart};

const EXTENT: f64 = 350.0;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Monday weeks, pivot Wednesday 2024-05-15
fn controller(width: usize, options: NavigatorOptions) -> ScrollSyncController {
    let spec = GridSpec::new(date(2024, 5, 15), 1, 1, WeekStart::Monday, width);
    let grid = WeekGridModel::build(spec).unwrap();
    ScrollSyncController::new(grid, options, date(2024, 5, 15))
}

fn continuous(width: usize) -> ContinuousAdapter<RecordingSurface, EventLog> {
    let mut adapter = ContinuousAdapter::new(
        controller(width, NavigatorOptions::immediate()),
        RecordingSurface::new(EXTENT),
        EventLog::new(),
    );
    adapter.present(Instant::now());
    adapter
}

fn discrete(width: usize) -> DiscreteAdapter<RecordingSurface, EventLog> {
    let mut adapter = DiscreteAdapter::new(
        controller(width, NavigatorOptions::immediate()),
        RecordingSurface::new(EXTENT),
        EventLog::new(),
    );
    adapter.present(Instant::now());
    adapter
}

#[derive(Debug, Clone, Copy)]
enum Input {
    SetDate(NaiveDate),
    /// Drag by a number of page extents and release there
    Drag(f64),
    Tap(usize),
    Step(PageDirection),
}

fn drive_continuous(adapter: &mut ContinuousAdapter<RecordingSurface, EventLog>, input: Input) {
    let now = Instant::now();
    match input {
        Input::SetDate(d) => adapter.set_date_at(d, now),
        Input::Drag(pages) => {
            let start = adapter.surface().content_offset();
            let end = start + pages * EXTENT;
            let mid = start + pages * EXTENT / 2.0;
            adapter.offset_changed(start, now);
            adapter.scroll_phase_changed(ScrollPhase::Interacting, now);
            adapter.surface_mut().drag_content_to(mid);
            adapter.offset_changed(mid, now);
            adapter.scroll_phase_changed(ScrollPhase::Decelerating, now);
            adapter.surface_mut().drag_content_to(end);
            adapter.offset_changed(end, now);
            let extent = adapter.surface().page_extent();
            adapter.target_settled((end / extent).round() as usize, now);
        }
        Input::Tap(slot) => {
            let page = adapter.current_index();
            adapter.select_day(page, slot, now);
        }
        Input::Step(direction) => adapter.step(direction, now),
    }
}

fn drive_discrete(adapter: &mut DiscreteAdapter<RecordingSurface, EventLog>, input: Input) {
    let now = Instant::now();
    match input {
        Input::SetDate(d) => adapter.set_date_at(d, now),
        Input::Drag(pages) => {
            let start = adapter.surface().content_offset();
            let mid = start + pages * EXTENT / 2.0;
            let end = start + pages * EXTENT;
            adapter.will_begin_dragging(start, now);
            adapter.surface_mut().drag_content_to(mid);
            adapter.did_scroll(mid, now);
            adapter.surface_mut().drag_content_to(end);
            adapter.will_end_dragging(end, now);
        }
        Input::Tap(slot) => {
            let page = adapter.current_index();
            adapter.did_select_item(page, slot, now);
        }
        Input::Step(direction) => adapter.step(direction, now),
    }
}

#[test]
fn test_monday_week_scenario() {
    let mut nav = discrete(7);
    let start = nav.current_index();

    nav.set_date(date(2024, 5, 13));
    assert_eq!(nav.current_index(), start);
    assert!(nav.listener().events().is_empty());

    drive_discrete(&mut nav, Input::Drag(1.0));
    assert_eq!(nav.current_index(), start + 1);
    nav.listener_mut().clear();

    drive_discrete(&mut nav, Input::Tap(2));
    assert_eq!(nav.selected_date(), date(2024, 5, 22));
    assert_eq!(
        nav.listener().events(),
        &[NavEvent::DateSelected {
            date: date(2024, 5, 22),
            kind: PageKind::Week
        }]
    );
}

#[test]
fn test_adapters_agree() {
    let script = [
        Input::Drag(1.0),
        Input::Drag(-1.0),
        Input::Drag(0.0),
        Input::Tap(5),
        Input::SetDate(date(2024, 11, 28)),
        Input::Drag(2.0),
        Input::Step(PageDirection::Previous),
        Input::Tap(0),
        Input::SetDate(date(2024, 11, 29)),
        Input::Drag(-1.0),
    ];

    for width in [7, 3, 1] {
        let mut cont = continuous(width);
        let mut disc = discrete(width);
        for input in script {
            drive_continuous(&mut cont, input);
            drive_discrete(&mut disc, input);
            assert_eq!(cont.state(), disc.state(), "width {width} after {input:?}");
        }
        assert_eq!(cont.listener(), disc.listener(), "width {width}");
        assert!(!cont.listener().events().is_empty());
    }
}

#[test]
fn test_set_date_twice_is_idempotent() {
    let mut nav = continuous(7);
    nav.surface_mut().take_calls();

    nav.set_date(date(2024, 9, 11));
    nav.set_date(date(2024, 9, 11));

    assert_eq!(nav.surface().scroll_targets().len(), 1);
    assert!(nav.listener().events().is_empty());
}

#[test]
fn test_external_assignment_never_echoes() {
    let mut nav = discrete(7);
    for day in 0..60 {
        nav.set_date(date(2024, 3, 1) + chrono::Days::new(day * 3));
    }
    assert!(nav.listener().selected_dates().is_empty());
    assert!(nav.listener().crossings().is_empty());
}

#[test]
fn test_user_crossing_reports_once() {
    let mut nav = continuous(7);
    drive_continuous(&mut nav, Input::Drag(-1.0));
    assert_eq!(nav.listener().selected_dates(), vec![date(2024, 5, 8)]);
    assert_eq!(nav.listener().crossings(), vec![PageDirection::Previous]);
}

#[test]
fn test_superseded_scroll_never_issued() {
    let options = NavigatorOptions {
        scroll_delay: Duration::from_millis(100),
        ..NavigatorOptions::immediate()
    };
    let mut nav = DiscreteAdapter::new(
        controller(7, options),
        RecordingSurface::new(EXTENT),
        EventLog::new(),
    );
    let t0 = Instant::now();
    nav.present(t0);
    nav.surface_mut().take_calls();

    nav.set_date_at(date(2024, 7, 3), t0);
    nav.set_date_at(date(2024, 10, 9), t0 + Duration::from_millis(10));
    assert!(nav.surface().scroll_targets().is_empty());

    nav.layout_settled(t0 + Duration::from_millis(20));
    let expected = resolver::index_for_normalized(nav.grid(), date(2024, 10, 9)).unwrap();
    assert_eq!(nav.surface().scroll_targets(), vec![expected]);

    nav.tick(t0 + Duration::from_secs(1));
    assert_eq!(nav.surface().scroll_targets(), vec![expected]);
}

#[test]
fn test_delayed_scroll_waits_for_tick() {
    let options = NavigatorOptions {
        scroll_delay: Duration::from_millis(100),
        baseline_settle: Duration::from_millis(500),
        ..NavigatorOptions::immediate()
    };
    let mut nav = ContinuousAdapter::new(
        controller(7, options),
        RecordingSurface::new(EXTENT),
        EventLog::new(),
    );
    let t0 = Instant::now();
    nav.present(t0);
    nav.surface_mut().take_calls();

    nav.set_date_at(date(2024, 6, 5), t0);
    let index = nav.current_index();
    assert_eq!(nav.next_deadline(), Some(t0 + Duration::from_millis(100)));

    nav.tick(t0 + Duration::from_millis(50));
    assert!(nav.surface().scroll_targets().is_empty());
    nav.tick(t0 + Duration::from_millis(100));
    assert_eq!(nav.surface().scroll_targets(), vec![index]);

    nav.tick(t0 + Duration::from_millis(600));
    assert_eq!(nav.state().baseline_offset, index as f64 * EXTENT);
}

#[test]
fn test_resize_replaces_committed_page() {
    let mut nav = discrete(7);
    let index = nav.current_index();
    nav.reload_frame(500.0);
    assert_eq!(nav.surface().content_offset(), index as f64 * 500.0);
    assert_eq!(nav.state().baseline_offset, index as f64 * 500.0);

    // A drag one new-size page forward still pages once
    drive_discrete(&mut nav, Input::Drag(500.0 / EXTENT));
    assert_eq!(nav.current_index(), index + 1);
}

#[test]
fn test_date_at_point() {
    let nav = continuous(7);
    // 50 points per cell; the visible page is Monday 13 to Sunday 19
    assert_eq!(nav.date_at_point(0.0), Some(date(2024, 5, 13)));
    assert_eq!(nav.date_at_point(125.0), Some(date(2024, 5, 15)));
    assert_eq!(nav.date_at_point(349.0), Some(date(2024, 5, 19)));
    assert_eq!(nav.date_at_point(f64::NAN), None);
}

#[test]
fn test_days_for_date() {
    let nav = discrete(7);
    let page = nav.days_for_date(date(2024, 5, 17)).unwrap();
    assert_eq!(page.first_date(), Some(date(2024, 5, 13)));
    assert!(nav.days_for_date(date(2031, 1, 1)).is_none());
}

#[test]
fn test_tracking_and_linked_transform() {
    let options = NavigatorOptions::immediate().with_tracking(true);
    let mut nav = ContinuousAdapter::new(
        controller(7, options),
        RecordingSurface::new(EXTENT),
        EventLog::new(),
    );
    let now = Instant::now();
    nav.present(now);
    let baseline = nav.state().baseline_offset;
    nav.offset_changed(baseline, now);

    nav.track_transform(Some(40.0), now);
    assert_eq!(nav.surface().content_offset(), baseline - 40.0);
    nav.track_transform(None, now);
    assert_eq!(nav.surface().content_offset(), baseline);

    nav.scroll_phase_changed(ScrollPhase::Interacting, now);
    nav.offset_changed(baseline + 30.0, now);
    nav.offset_changed(baseline, now);
    nav.scroll_phase_changed(ScrollPhase::Idle, now);

    assert_eq!(
        nav.listener().events(),
        &[
            NavEvent::ScrollOffsetTracked { translation: 0.0, ended: false },
            NavEvent::ScrollOffsetTracked { translation: -30.0, ended: false },
            NavEvent::ScrollOffsetTracked { translation: 0.0, ended: false },
            NavEvent::ScrollOffsetTracked { translation: 0.0, ended: true },
        ]
    );
}

#[test]
fn test_rebuild_keeps_selection() {
    let mut nav = continuous(7);
    let now = Instant::now();
    nav.set_date(date(2024, 8, 14));
    let spec = GridSpec::new(date(2024, 5, 15), 1, 1, WeekStart::Sunday, 3);
    nav.rebuild(spec, now).unwrap();

    assert_eq!(nav.grid().page_width(), 3);
    assert_eq!(nav.selected_date(), date(2024, 8, 14));
    assert_eq!(
        resolver::index_for_normalized(nav.grid(), date(2024, 8, 14)),
        Some(nav.current_index())
    );
}

#[test]
fn test_overscroll_at_first_page_springs_back() {
    let first = date(2023, 5, 15);
    let spec = GridSpec::new(date(2024, 5, 15), 1, 1, WeekStart::Monday, 7);
    let grid = WeekGridModel::build(spec).unwrap();
    let mut nav = DiscreteAdapter::new(
        ScrollSyncController::new(grid, NavigatorOptions::immediate(), first),
        RecordingSurface::new(EXTENT),
        EventLog::new(),
    );
    let now = Instant::now();
    nav.present(now);
    assert_eq!(nav.current_index(), 0);

    // Pull past the first page and let go
    nav.will_begin_dragging(0.0, now);
    nav.surface_mut().drag_content_to(-EXTENT);
    nav.did_scroll(-EXTENT, now);
    nav.will_end_dragging(-EXTENT, now);
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.state().baseline_offset, 0.0);

    // The next gesture rests on the first page again
    nav.surface_mut().drag_content_to(0.0);
    nav.will_begin_dragging(0.0, now);
    nav.did_scroll(-20.0, now);
    nav.will_end_dragging(0.0, now);

    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.selected_date(), first);
    assert!(nav.listener().events().is_empty());
}
