//! Day, week, and month grid composition.
//!
//! The composer enumerates (date, hour) cells for a view and runs the
//! resolver + render policy over each one against the shared snapshot.
//! All date arithmetic is done on `NaiveDate`, so every generated date is
//! already at midnight and week anchoring cannot drift across an hour
//! boundary.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use fixwise_domain::constants::{DAYS_PER_WEEK, HOURS_PER_DAY};
use fixwise_domain::{RoleContext, SlotState, TimeSlot};
use serde::{Deserialize, Serialize};

use super::policy::{CellPresentation, RenderPolicy};
use super::ports::{Clock, SlotQueries};
use super::resolver::resolve;

/// One fully-derived calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// The slot this cell addresses.
    pub slot: TimeSlot,
    /// State derived at composition time. Clicks re-resolve against the
    /// live snapshot instead of trusting this value.
    pub state: SlotState,
    /// Role-dependent presentation.
    pub presentation: CellPresentation,
}

/// The 24 hourly cells of one day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    /// The column's date.
    pub date: NaiveDate,
    /// Hourly cells, ordered 0-23.
    pub cells: Vec<GridCell>,
}

/// Seven day columns anchored to the configured week start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    /// Columns in week order, each with 24 cells.
    pub columns: Vec<DayColumn>,
}

/// Enumerates grid cells and derives state + presentation per cell.
pub struct GridComposer {
    policy: RenderPolicy,
    clock: Arc<dyn Clock>,
    week_start: Weekday,
}

impl GridComposer {
    /// Compose grids with the given policy, time source, and week start.
    pub fn new(policy: RenderPolicy, clock: Arc<dyn Clock>, week_start: Weekday) -> Self {
        Self { policy, clock, week_start }
    }

    /// The 24 hourly cells for a single date.
    pub fn day_column(
        &self,
        date: NaiveDate,
        ctx: &RoleContext,
        queries: &dyn SlotQueries,
    ) -> DayColumn {
        let now = self.clock.now();
        let cells = (0..HOURS_PER_DAY)
            .map(|hour| {
                let slot = TimeSlot::new(date, hour);
                let state = resolve(date, hour, ctx.viewer_requester(), queries);
                let presentation = self.policy.present(state, ctx.role, slot.is_past(now));
                GridCell { slot, state, presentation }
            })
            .collect();
        DayColumn { date, cells }
    }

    /// Seven day columns for the week containing `reference`.
    pub fn week(
        &self,
        reference: NaiveDate,
        ctx: &RoleContext,
        queries: &dyn SlotQueries,
    ) -> WeekGrid {
        let anchor = self.week_anchor(reference);
        let columns = (0..DAYS_PER_WEEK)
            .map(|offset| self.day_column(anchor + Duration::days(i64::from(offset)), ctx, queries))
            .collect();
        WeekGrid { columns }
    }

    /// First day of the week containing `reference`, per the configured
    /// week start.
    pub fn week_anchor(&self, reference: NaiveDate) -> NaiveDate {
        let lead = (reference.weekday().num_days_from_monday() + DAYS_PER_WEEK
            - self.week_start.num_days_from_monday())
            % DAYS_PER_WEEK;
        reference - Duration::days(i64::from(lead))
    }
}

/// Dates shown in a month grid for (year, month), padded with leading and
/// trailing days to complete weeks. Returns an empty vector for an invalid
/// month.
pub fn month_days(year: i32, month: u32, week_start: Weekday) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let Some(next_first) = next_first else {
        return Vec::new();
    };

    let lead = (first.weekday().num_days_from_monday() + DAYS_PER_WEEK
        - week_start.num_days_from_monday())
        % DAYS_PER_WEEK;
    let mut day = first - Duration::days(i64::from(lead));

    let mut days = Vec::new();
    while day < next_first || days.len() % DAYS_PER_WEEK as usize != 0 {
        days.push(day);
        day = day + Duration::days(1);
    }
    days
}
