//! Weekly calorie cycling ("zigzag") plans
//!
//! Each plan varies daily intake around the TDEE instead of eating the same
//! amount every day. Two plan variants are produced per goal.

use crate::targets::HealthGoal;
use serde::{Deserialize, Serialize};

/// Day offsets from TDEE for the gradual ramp, Monday first
const RAMP_OFFSETS: [f64; 7] = [-100.0, -50.0, 0.0, 50.0, 100.0, 150.0, -50.0];
const WEEKDAY_OFFSET: f64 = -150.0;
const WEEKEND_OFFSET: f64 = 250.0;
const LOSS_ADJUSTMENT: f64 = -250.0;
const GAIN_ADJUSTMENT: f64 = 200.0;

/// Calorie layout of a plan across the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZigzagSchedule {
    /// Five weekdays at one level, two weekend days at another
    #[serde(rename_all = "camelCase")]
    WeekdayWeekend { weekdays: i32, weekends: i32 },
    /// A distinct value for every day of the week
    #[serde(rename_all = "camelCase")]
    DailyRamp {
        monday: i32,
        tuesday: i32,
        wednesday: i32,
        thursday: i32,
        friday: i32,
        saturday: i32,
        sunday: i32,
    },
    /// Three high days and four adjusted days, not pinned to dates
    #[serde(rename_all = "camelCase")]
    HighLow { high_days: i32, low_days: i32 },
    /// Repeating high/adjusted pattern
    #[serde(rename_all = "camelCase")]
    Alternating { day_pattern: [i32; 4] },
}

/// A named weekly variation plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZigzagPlan {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub schedule: ZigzagSchedule,
}

impl ZigzagPlan {
    fn new(name: &str, description: &str, schedule: ZigzagSchedule) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule,
        }
    }

    /// Calories for each day of a Monday-first week
    pub fn week(&self) -> [i32; 7] {
        match &self.schedule {
            ZigzagSchedule::WeekdayWeekend { weekdays, weekends } => {
                let (d, e) = (*weekdays, *weekends);
                [d, d, d, d, d, e, e]
            }
            ZigzagSchedule::DailyRamp {
                monday,
                tuesday,
                wednesday,
                thursday,
                friday,
                saturday,
                sunday,
            } => [*monday, *tuesday, *wednesday, *thursday, *friday, *saturday, *sunday],
            ZigzagSchedule::HighLow { high_days, low_days } => {
                let (h, l) = (*high_days, *low_days);
                [h, l, h, l, h, l, l]
            }
            ZigzagSchedule::Alternating { day_pattern } => {
                std::array::from_fn(|day| day_pattern[day % day_pattern.len()])
            }
        }
    }

    /// Total calories over one week of the plan
    pub fn weekly_total(&self) -> i32 {
        self.week().iter().sum()
    }
}

/// The two plan variants offered for a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZigzagOptions {
    pub plan1: ZigzagPlan,
    pub plan2: ZigzagPlan,
}

fn kcal(value: f64) -> i32 {
    value.round() as i32
}

/// Daily offset from TDEE on adjusted days for non-maintenance goals
pub fn cycling_adjustment(goal: HealthGoal) -> f64 {
    if goal.is_loss() {
        LOSS_ADJUSTMENT
    } else {
        GAIN_ADJUSTMENT
    }
}

/// Build the weekly variation plans for a TDEE and goal
pub fn zigzag_options(tdee: f64, goal: HealthGoal) -> ZigzagOptions {
    if goal == HealthGoal::Maintain {
        let ramp = RAMP_OFFSETS.map(|offset| kcal(tdee + offset));
        return ZigzagOptions {
            plan1: ZigzagPlan::new(
                "Weekend Higher",
                "Higher calories on weekends, lower on weekdays",
                ZigzagSchedule::WeekdayWeekend {
                    weekdays: kcal(tdee + WEEKDAY_OFFSET),
                    weekends: kcal(tdee + WEEKEND_OFFSET),
                },
            ),
            plan2: ZigzagPlan::new(
                "Gradual Variation",
                "Gradual increase and decrease throughout the week",
                ZigzagSchedule::DailyRamp {
                    monday: ramp[0],
                    tuesday: ramp[1],
                    wednesday: ramp[2],
                    thursday: ramp[3],
                    friday: ramp[4],
                    saturday: ramp[5],
                    sunday: ramp[6],
                },
            ),
        };
    }

    let high = kcal(tdee);
    let adjusted = kcal(tdee + cycling_adjustment(goal));
    ZigzagOptions {
        plan1: ZigzagPlan::new(
            "3 High, 4 Low Days",
            "Three days at maintenance, four days at target",
            ZigzagSchedule::HighLow {
                high_days: high,
                low_days: adjusted,
            },
        ),
        plan2: ZigzagPlan::new(
            "Alternating Pattern",
            "Alternate between high and low calorie days",
            ZigzagSchedule::Alternating {
                day_pattern: [high, adjusted, high, adjusted],
            },
        ),
    }
}
