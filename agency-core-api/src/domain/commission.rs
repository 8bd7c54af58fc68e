use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::CommissionConfig;
use crate::error::{ApiError, ApiResult};

/// Number of decimal places commission amounts are rounded to (minor currency unit)
pub const MONEY_SCALE: u32 = 2;

/// Commission rates keyed by hierarchy level.
///
/// Rates are fractions of the premium (0.15 == 15%). Levels outside 1..=3
/// earn nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CommissionConfig", into = "CommissionConfig")]
pub struct CommissionTable {
    level_1: Decimal,
    level_2: Decimal,
    level_3: Decimal,
}

impl CommissionTable {
    /// Builds a table, rejecting rates outside `[0, 1]`
    pub fn new(level_1: Decimal, level_2: Decimal, level_3: Decimal) -> ApiResult<Self> {
        for (level, rate) in [(1, level_1), (2, level_2), (3, level_3)] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ApiError::ConfigError(format!(
                    "Commission rate for level {level} must be between 0 and 1, got {rate}"
                )));
            }
        }
        Ok(Self {
            level_1,
            level_2,
            level_3,
        })
    }

    pub fn rate_for_level(&self, level: u8) -> Decimal {
        match level {
            1 => self.level_1,
            2 => self.level_2,
            3 => self.level_3,
            _ => Decimal::ZERO,
        }
    }

    /// `premium * rate`, rounded half away from zero to the minor currency unit
    pub fn commission_for_level(&self, premium: Decimal, level: u8) -> Decimal {
        round_money(premium * self.rate_for_level(level))
    }
}

impl Default for CommissionTable {
    fn default() -> Self {
        Self {
            level_1: Decimal::new(15, 2),
            level_2: Decimal::new(10, 2),
            level_3: Decimal::new(5, 2),
        }
    }
}

impl TryFrom<&CommissionConfig> for CommissionTable {
    type Error = ApiError;

    fn try_from(config: &CommissionConfig) -> Result<Self, Self::Error> {
        CommissionTable::new(config.level_1_rate, config.level_2_rate, config.level_3_rate)
    }
}

impl TryFrom<CommissionConfig> for CommissionTable {
    type Error = ApiError;

    fn try_from(config: CommissionConfig) -> Result<Self, Self::Error> {
        CommissionTable::try_from(&config)
    }
}

impl From<CommissionTable> for CommissionConfig {
    fn from(table: CommissionTable) -> Self {
        Self {
            level_1_rate: table.level_1,
            level_2_rate: table.level_2,
            level_3_rate: table.level_3,
        }
    }
}

/// Rate of the standard commission table
pub fn rate_for_level(level: u8) -> Decimal {
    CommissionTable::default().rate_for_level(level)
}

/// Commission of the standard commission table
pub fn commission_for_level(premium: Decimal, level: u8) -> Decimal {
    CommissionTable::default().commission_for_level(premium, level)
}

pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
