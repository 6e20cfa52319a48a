use serde::{Deserialize, Serialize};

/// 전력 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
}

impl PowerUnit {
    pub fn label(&self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
        }
    }

    pub fn to_w(&self, value: f64) -> f64 {
        match self {
            PowerUnit::Watt => value,
            PowerUnit::Kilowatt => value * 1000.0,
        }
    }

    pub fn from_w(&self, value: f64) -> f64 {
        match self {
            PowerUnit::Watt => value,
            PowerUnit::Kilowatt => value / 1000.0,
        }
    }
}

/// 전력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    to.from_w(from.to_w(value))
}
