//! Configuration types shared by the service facade and transports.

use serde::{Deserialize, Serialize};

use crate::Value;

/// Endpoint and service the session connects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Backend host name.
    pub host: String,
    /// Backend port.
    pub port: u16,
    /// Name of the service opened once the session has started.
    pub service: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8194,
            service: "//blp/refdata".to_string(),
        }
    }
}

/// How the periodicity of a historical request is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PeriodicityAdjustment {
    /// Anchor periods on the requested end date.
    #[default]
    Actual,
    /// Anchor periods on calendar boundaries.
    Calendar,
    /// Anchor periods on the issuer's fiscal calendar.
    Fiscal,
}

impl PeriodicityAdjustment {
    /// Wire name of the option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actual => "ACTUAL",
            Self::Calendar => "CALENDAR",
            Self::Fiscal => "FISCAL",
        }
    }
}

/// Sampling frequency of a historical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PeriodicitySelection {
    /// One row per trading day.
    #[default]
    Daily,
    /// One row per week.
    Weekly,
    /// One row per month.
    Monthly,
    /// One row per quarter.
    Quarterly,
    /// One row per half year.
    SemiAnnually,
    /// One row per year.
    Yearly,
}

impl PeriodicitySelection {
    /// Wire name of the option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::SemiAnnually => "SEMI_ANNUALLY",
            Self::Yearly => "YEARLY",
        }
    }
}

/// Which non-trading days appear in a historical response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NonTradingDayFill {
    /// Only days the security traded.
    #[default]
    ActiveDaysOnly,
    /// Every calendar day.
    AllCalendarDays,
    /// Every weekday, traded or not.
    NonTradingWeekdays,
}

impl NonTradingDayFill {
    /// Wire name of the option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActiveDaysOnly => "ACTIVE_DAYS_ONLY",
            Self::AllCalendarDays => "ALL_CALENDAR_DAYS",
            Self::NonTradingWeekdays => "NON_TRADING_WEEKDAYS",
        }
    }
}

/// Parameters applied to every historical request before caller options.
///
/// Caller-supplied options with the same name replace these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalDefaults {
    /// `periodicityAdjustment` parameter.
    pub periodicity_adjustment: PeriodicityAdjustment,
    /// `periodicitySelection` parameter.
    pub periodicity_selection: PeriodicitySelection,
    /// `nonTradingDayFillOption` parameter.
    pub non_trading_day_fill: NonTradingDayFill,
    /// `adjustmentNormal` parameter.
    pub adjustment_normal: bool,
    /// `adjustmentAbnormal` parameter.
    pub adjustment_abnormal: bool,
    /// `adjustmentSplit` parameter.
    pub adjustment_split: bool,
    /// `adjustmentFollowDPDF` parameter.
    pub adjustment_follow_dpdf: bool,
}

impl Default for HistoricalDefaults {
    fn default() -> Self {
        Self {
            periodicity_adjustment: PeriodicityAdjustment::Actual,
            periodicity_selection: PeriodicitySelection::Daily,
            non_trading_day_fill: NonTradingDayFill::ActiveDaysOnly,
            adjustment_normal: false,
            adjustment_abnormal: false,
            adjustment_split: true,
            adjustment_follow_dpdf: false,
        }
    }
}

impl HistoricalDefaults {
    /// Ordered request parameters for these defaults.
    #[must_use]
    pub fn to_parameters(&self) -> Vec<(String, Value)> {
        vec![
            (
                "periodicityAdjustment".to_string(),
                self.periodicity_adjustment.as_str().into(),
            ),
            (
                "periodicitySelection".to_string(),
                self.periodicity_selection.as_str().into(),
            ),
            (
                "nonTradingDayFillOption".to_string(),
                self.non_trading_day_fill.as_str().into(),
            ),
            ("adjustmentNormal".to_string(), self.adjustment_normal.into()),
            (
                "adjustmentAbnormal".to_string(),
                self.adjustment_abnormal.into(),
            ),
            ("adjustmentSplit".to_string(), self.adjustment_split.into()),
            (
                "adjustmentFollowDPDF".to_string(),
                self.adjustment_follow_dpdf.into(),
            ),
        ]
    }
}
