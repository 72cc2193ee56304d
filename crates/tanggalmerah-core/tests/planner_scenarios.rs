//! End-to-end planner scenarios over constructed holiday calendars.
//!
//! All dates are in 2026: Jan 1 falls on a Thursday, so weekday positions
//! used below are fixed and easy to check against a calendar.

use chrono::NaiveDate;
use tanggalmerah_core::{Holiday, HolidayIndex, HolidayKind, LeavePlanner, PlannerPolicy};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn national(m: u32, d: u32, name: &str) -> Holiday {
    Holiday::new(
        date(m, d),
        name,
        HolidayKind::National,
        "Official National Holiday (Tanggal Merah).",
    )
}

fn cuti(m: u32, d: u32, name: &str) -> Holiday {
    Holiday::new(
        date(m, d),
        name,
        HolidayKind::CutiBersama,
        "Joint Leave Holiday (Cuti Bersama) - Government offices closed.",
    )
}

fn planner(max_bridge_length: u32, min_total_off: u32) -> LeavePlanner {
    LeavePlanner::with_policy(PlannerPolicy {
        max_bridge_length,
        min_total_off,
        ..PlannerPolicy::default()
    })
}

#[test]
fn thursday_holiday_recommends_the_friday() {
    // 2026-03-05 is a Thursday in an otherwise normal work week
    let index: HolidayIndex = vec![national(3, 5, "Hari Raya Nyepi")].into_iter().collect();

    let recs = planner(1, 4).plan(2026, &index, date(1, 1));

    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert_eq!(rec.leave_start, date(3, 6));
    assert_eq!(rec.leave_end, date(3, 6));
    assert_eq!(rec.vacation_start, date(3, 5));
    assert_eq!(rec.vacation_end, date(3, 8));
    assert_eq!(rec.cost, 1);
    assert_eq!(rec.reward, 4);
    assert_eq!(rec.efficiency, 4.0);
    assert_eq!(rec.reason, "Bridge 1 day(s)");
}

#[test]
fn unobserved_cuti_does_not_close_a_bridge() {
    // 2026-03-06 is the Friday before a weekend; the only holiday is a
    // cuti bersama there. When the company does not observe it, the day
    // stays a workday and the Mon-Fri run is five days long.
    let index: HolidayIndex = vec![cuti(3, 6, "Cuti Bersama Nyepi")].into_iter().collect();

    let observed = LeavePlanner::with_policy(PlannerPolicy {
        observe_cuti: true,
        max_bridge_length: 4,
        min_total_off: 7,
        month_filter: None,
    })
    .plan(2026, &index, date(1, 1));
    assert_eq!(observed.len(), 1);
    assert_eq!(observed[0].leave_start, date(3, 2));
    assert_eq!(observed[0].leave_end, date(3, 5));
    assert_eq!(observed[0].reward, 9);

    let unobserved = LeavePlanner::with_policy(PlannerPolicy {
        observe_cuti: false,
        max_bridge_length: 4,
        min_total_off: 7,
        month_filter: None,
    })
    .plan(2026, &index, date(1, 1));
    assert!(unobserved.is_empty());
}

#[test]
fn reference_date_past_every_bridge_yields_nothing() {
    let index: HolidayIndex = vec![national(3, 5, "Hari Raya Nyepi")].into_iter().collect();
    let recs = planner(1, 4).plan(2026, &index, date(12, 31));
    assert!(recs.is_empty());
}

#[test]
fn month_filter_keeps_only_matching_leave_starts() {
    // Tuesday 2026-06-02 and Thursday 2026-07-09 each create a one-day
    // bridge (Monday June 1, Friday July 10)
    let index: HolidayIndex = vec![
        national(6, 2, "Hari Lahir Pancasila"),
        national(7, 9, "Tahun Baru Islam"),
    ]
    .into_iter()
    .collect();

    let all = planner(1, 4).plan(2026, &index, date(1, 1));
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].leave_start, date(6, 1));
    assert_eq!(all[1].leave_start, date(7, 10));

    let june_only = LeavePlanner::with_policy(PlannerPolicy {
        max_bridge_length: 1,
        min_total_off: 4,
        month_filter: Some(5),
        ..PlannerPolicy::default()
    })
    .plan(2026, &index, date(1, 1));
    assert_eq!(june_only.len(), 1);
    assert_eq!(june_only[0].leave_start, date(6, 1));
}

#[test]
fn adjacent_bridges_share_a_cluster_but_not_leave_days() {
    // Thursday 2026-03-05 and Tuesday 2026-03-10: the Friday and the
    // Monday around the weekend are independent one-day bridges
    let index: HolidayIndex = vec![
        national(3, 5, "Hari Raya Nyepi"),
        national(3, 10, "Hari Raya Idul Fitri"),
    ]
    .into_iter()
    .collect();

    let recs = planner(1, 4).plan(2026, &index, date(1, 1));

    assert_eq!(recs.len(), 2);
    let friday = &recs[0];
    let monday = &recs[1];
    assert_eq!(friday.leave_start, date(3, 6));
    assert_eq!(monday.leave_start, date(3, 9));

    // vacation windows overlap on the shared weekend
    assert_eq!(friday.vacation_end, date(3, 8));
    assert_eq!(monday.vacation_start, date(3, 7));
    // leave spans stay disjoint
    assert!(friday.leave_end < monday.leave_start);
}

#[test]
fn empty_holiday_index_degrades_to_weekends_only() {
    // with no holiday data only weekends are off; past the short
    // year-opening run, no workday run fits a two-day bridge
    let recs = planner(2, 4).plan(2026, &HolidayIndex::new(), date(2, 1));
    assert!(recs.is_empty());
}

#[test]
fn year_opening_run_has_no_leading_cluster_but_still_qualifies() {
    // 2026 opens on a Thursday: bridging Thu-Fri buys the first weekend
    // even with no holidays at all
    let recs = planner(2, 4).plan(2026, &HolidayIndex::new(), date(1, 1));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].leave_start, date(1, 1));
    assert_eq!(recs[0].leave_end, date(1, 2));
    assert_eq!(recs[0].vacation_start, date(1, 1));
    assert_eq!(recs[0].vacation_end, date(1, 4));
    assert_eq!(recs[0].cost, 2);
    assert_eq!(recs[0].reward, 4);
    assert_eq!(recs[0].efficiency, 2.0);
}

#[test]
fn recommendations_rank_best_efficiency_first() {
    // Thursday 2026-03-05 gives a Friday bridge worth 4/1 = 4.0;
    // Tuesday 2026-11-10 plus Thursday 2026-11-12 sandwich a Wednesday
    // bridge worth only 3/1 = 3.0
    let index: HolidayIndex = vec![
        national(3, 5, "Hari Raya Nyepi"),
        national(11, 10, "Hari Pahlawan"),
        national(11, 12, "Hari Ayah"),
    ]
    .into_iter()
    .collect();

    let recs = planner(1, 3).plan(2026, &index, date(1, 1));

    assert!(recs.len() >= 2);
    assert_eq!(recs[0].efficiency, 4.0);
    assert_eq!(recs[0].leave_start, date(3, 6));
    let wednesday = recs
        .iter()
        .find(|r| r.leave_start == date(11, 11))
        .expect("Wednesday bridge present");
    assert_eq!(wednesday.efficiency, 3.0);
    assert!(recs[0].efficiency >= wednesday.efficiency);
}
