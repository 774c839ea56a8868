mod common;

use chrono::Month;
use rink_projection::{
    domain::{month_index, DayType, PriceTierKind, ScenarioSnapshot, Season, MONTHS},
    ProjectionService,
};

use common::france_scenario;

#[test]
fn france_scenario_breaks_down_by_season() {
    let result = ProjectionService::project(&france_scenario(), Month::November).unwrap();

    let january = result.month(Month::January).unwrap();
    assert_eq!(january.season, Season::High);
    assert_eq!(january.weekday.days, 21);
    assert_eq!(january.weekend.days, 9);
    assert_eq!(january.weekday.visitors_per_session, 80);
    assert_eq!(january.weekend.visitors_per_session, 90);
    assert_eq!(january.weekday.tickets(), 4 * 21 * 80);
    assert_eq!(january.total, 116_316);

    let april = result.month(Month::April).unwrap();
    assert_eq!(april.season, Season::Mid);
    assert_eq!(april.total, 88_452);

    let july = result.month(Month::July).unwrap();
    assert_eq!(july.season, Season::Low);
    assert_eq!(july.total, 60_588);

    assert_eq!(result.monthly.revenue, 116_316);
    assert_eq!(result.yearly.revenue, 1_061_424);
}

#[test]
fn tier_split_sums_to_day_revenue() {
    let result = ProjectionService::project(&france_scenario(), Month::January).unwrap();
    let january = result.month(Month::January).unwrap();
    let weekday = january.for_day(DayType::Weekday);
    // 6720 tickets: 70% at 12 and 30% at 8
    assert!((weekday.tiers.standard - 56_448.0).abs() < 1e-6);
    assert!((weekday.tiers.discounted - 16_128.0).abs() < 1e-6);
    let split = january.tier_total(PriceTierKind::Standard)
        + january.tier_total(PriceTierKind::Discounted);
    assert_eq!(split.round() as i64, january.total);
}

#[test]
fn higher_seasons_never_earn_less() {
    let result = ProjectionService::project(&france_scenario(), Month::May).unwrap();
    let by_season = |season: Season| {
        result
            .months
            .iter()
            .find(|month| month.season == season)
            .map(|month| month.total)
            .unwrap()
    };
    assert!(by_season(Season::High) > by_season(Season::Mid));
    assert!(by_season(Season::Mid) > by_season(Season::Low));
}

#[test]
fn default_scenario_projects_every_month() {
    let scenario = ScenarioSnapshot::default();
    for month in MONTHS {
        let result = ProjectionService::project(&scenario, month).unwrap();
        assert_eq!(result.as_of, month);
        assert_eq!(result.months.len(), 12);
        assert_eq!(
            result.monthly.revenue,
            result.yearly.per_month_revenue[month_index(month)]
        );
        assert_eq!(result.yearly.expenses, 850_000);
        assert_eq!(result.monthly.expenses, 70_833);
        assert_eq!(
            result.yearly.revenue,
            result.yearly.per_month_revenue.iter().sum::<i64>()
        );
    }
}

#[test]
fn zero_capacity_yields_zero_revenue() {
    let mut scenario = france_scenario();
    scenario.capacity.max_capacity = 0;
    let result = ProjectionService::project(&scenario, Month::March).unwrap();
    assert_eq!(result.monthly.revenue, 0);
    assert_eq!(result.yearly.revenue, 0);
    assert_eq!(result.yearly.profit, 0);
}

#[test]
fn session_longer_than_opening_hours_yields_zero_sessions() {
    let mut scenario = france_scenario();
    scenario.hours.weekday.session_duration_minutes = 13 * 60;
    let result = ProjectionService::project(&scenario, Month::January).unwrap();
    let january = result.month(Month::January).unwrap();
    assert_eq!(january.weekday.sessions_per_day, 0);
    assert_eq!(january.weekday.tickets(), 0);
    assert!(january.total > 0);
}
