//! Editable scenario state that keeps its projection current.

use chrono::Month;
use tracing::{debug, info};
use uuid::Uuid;

use rink_config::Config;
use rink_core::{public_api::api_country, Clock, CoreError, ExpenseService, ProjectionService};
use rink_domain::{
    month_from_number, DayType, Expense, ExpenseCategory, ExpenseUpdate, OperatingSchedule,
    Percent, PriceTierKind, ProjectionResult, ScenarioSnapshot, Season,
};

use crate::errors::Result;

/// Facade that owns the scenario being edited and re-derives the full projection
/// after every change.
///
/// Edits are applied to a draft first; a draft that fails to project is discarded
/// and the previous scenario and projection stay in place.
pub struct ScenarioManager {
    scenario: ScenarioSnapshot,
    config: Config,
    clock: Box<dyn Clock>,
    projection: ProjectionResult,
}

impl ScenarioManager {
    pub fn new(scenario: ScenarioSnapshot, config: Config, clock: Box<dyn Clock>) -> Result<Self> {
        let as_of = resolve_as_of(&config, clock.as_ref())?;
        let projection = ProjectionService::project(&scenario, as_of)?;
        info!(
            country = %scenario.calendar.code,
            as_of = ?as_of,
            "scenario loaded"
        );
        Ok(Self {
            scenario,
            config,
            clock,
            projection,
        })
    }

    /// Starts from the default scenario using the configured country calendar.
    pub fn from_config(config: Config, clock: Box<dyn Clock>) -> Result<Self> {
        let calendar = api_country(&config.country_code)?;
        let scenario = ScenarioSnapshot::default().with_calendar(calendar);
        Self::new(scenario, config, clock)
    }

    /// Accepts a snapshot serialized by a presentation layer.
    pub fn from_json(json: &str, config: Config, clock: Box<dyn Clock>) -> Result<Self> {
        let scenario: ScenarioSnapshot = serde_json::from_str(json)?;
        Self::new(scenario, config, clock)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.scenario)?)
    }

    pub fn scenario(&self) -> &ScenarioSnapshot {
        &self.scenario
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn projection(&self) -> &ProjectionResult {
        &self.projection
    }

    /// The pinned month from the config, otherwise the clock's current month.
    pub fn as_of_month(&self) -> Result<Month> {
        resolve_as_of(&self.config, self.clock.as_ref())
    }

    /// Re-derives the projection, picking up a new month from the clock.
    pub fn recalculate(&mut self) -> Result<&ProjectionResult> {
        let as_of = self.as_of_month()?;
        self.projection = ProjectionService::project(&self.scenario, as_of)?;
        Ok(&self.projection)
    }

    /// Replaces the config; the as-of month may change with it.
    pub fn set_config(&mut self, config: Config) -> Result<&ProjectionResult> {
        let as_of = resolve_as_of(&config, self.clock.as_ref())?;
        self.projection = ProjectionService::project(&self.scenario, as_of)?;
        self.config = config;
        Ok(&self.projection)
    }

    /// Applies an arbitrary edit to the scenario.
    pub fn update<F>(&mut self, edit: F) -> Result<&ProjectionResult>
    where
        F: FnOnce(&mut ScenarioSnapshot),
    {
        self.try_edit("scenario", |draft| {
            edit(draft);
            Ok(())
        })?;
        Ok(&self.projection)
    }

    pub fn select_country(&mut self, code: &str) -> Result<&ProjectionResult> {
        let calendar = api_country(code)?;
        self.try_edit("country", move |draft| {
            draft.calendar = calendar;
            Ok(())
        })?;
        Ok(&self.projection)
    }

    pub fn set_schedule(
        &mut self,
        day: DayType,
        schedule: OperatingSchedule,
    ) -> Result<&ProjectionResult> {
        self.try_edit("schedule", move |draft| {
            *draft.hours.for_day_mut(day) = schedule;
            Ok(())
        })?;
        Ok(&self.projection)
    }

    /// Sets one side of a tier split; input is clamped to 0-100 and the other
    /// side becomes its complement.
    pub fn set_distribution(
        &mut self,
        day: DayType,
        tier: PriceTierKind,
        percent: i64,
    ) -> Result<&ProjectionResult> {
        self.try_edit("distribution", move |draft| {
            draft
                .pricing
                .for_day_mut(day)
                .distribution
                .set_share(tier, percent);
            Ok(())
        })?;
        Ok(&self.projection)
    }

    /// Sets one ticket price; negative and non-finite prices are rejected.
    pub fn set_price(
        &mut self,
        day: DayType,
        tier: PriceTierKind,
        price: f64,
    ) -> Result<&ProjectionResult> {
        self.try_edit("price", move |draft| {
            let prices = draft.pricing.for_day_mut(day);
            match tier {
                PriceTierKind::Standard => prices.standard_price = price,
                PriceTierKind::Discounted => prices.discounted_price = price,
            }
            Ok(())
        })?;
        Ok(&self.projection)
    }

    pub fn set_max_capacity(&mut self, max_capacity: u32) -> Result<&ProjectionResult> {
        self.try_edit("max capacity", move |draft| {
            draft.capacity.max_capacity = max_capacity;
            Ok(())
        })?;
        Ok(&self.projection)
    }

    /// Sets a seasonal utilisation; values outside 0-100 are rejected.
    pub fn set_capacity(
        &mut self,
        season: Season,
        day: DayType,
        percent: u8,
    ) -> Result<&ProjectionResult> {
        let percent = Percent::new(percent)?;
        self.try_edit("capacity", move |draft| {
            let seasonal = draft.capacity.season_mut(season);
            match day {
                DayType::Weekday => seasonal.weekday = percent,
                DayType::Weekend => seasonal.weekend = percent,
            }
            Ok(())
        })?;
        Ok(&self.projection)
    }

    pub fn add_category(&mut self, name: &str) -> Result<Uuid> {
        self.try_edit("add category", |draft| ExpenseService::add_category(draft, name))
    }

    pub fn rename_category(&mut self, category_id: Uuid, name: &str) -> Result<()> {
        self.try_edit("rename category", |draft| {
            ExpenseService::rename_category(draft, category_id, name)
        })
    }

    pub fn remove_category(&mut self, category_id: Uuid) -> Result<ExpenseCategory> {
        self.try_edit("remove category", |draft| {
            ExpenseService::remove_category(draft, category_id)
        })
    }

    pub fn add_expense(
        &mut self,
        category_id: Uuid,
        name: &str,
        amount: f64,
        description: &str,
    ) -> Result<Uuid> {
        self.try_edit("add expense", |draft| {
            ExpenseService::add_expense(draft, category_id, name, amount, description)
        })
    }

    pub fn update_expense(
        &mut self,
        category_id: Uuid,
        expense_id: Uuid,
        update: ExpenseUpdate,
    ) -> Result<()> {
        self.try_edit("update expense", |draft| {
            ExpenseService::update_expense(draft, category_id, expense_id, update)
        })
    }

    pub fn remove_expense(&mut self, category_id: Uuid, expense_id: Uuid) -> Result<Expense> {
        self.try_edit("remove expense", |draft| {
            ExpenseService::remove_expense(draft, category_id, expense_id)
        })
    }

    fn try_edit<T, F>(&mut self, label: &str, edit: F) -> Result<T>
    where
        F: FnOnce(&mut ScenarioSnapshot) -> std::result::Result<T, CoreError>,
    {
        let as_of = self.as_of_month()?;
        let mut draft = self.scenario.clone();
        let outcome = edit(&mut draft)?;
        let projection = ProjectionService::project(&draft, as_of)?;
        debug!(
            edit = label,
            monthly_revenue = projection.monthly.revenue,
            yearly_profit = projection.yearly.profit,
            "scenario updated"
        );
        self.scenario = draft;
        self.projection = projection;
        Ok(outcome)
    }
}

fn resolve_as_of(config: &Config, clock: &dyn Clock) -> Result<Month> {
    match config.pinned_month {
        Some(number) => Ok(month_from_number(number)?),
        None => Ok(clock.current_month()),
    }
}
