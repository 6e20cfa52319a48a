use serde::{Deserialize, Serialize};

/// 해시레이트 단위. 내부 기준은 TH/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashrateUnit {
    TeraHashPerSecond,
    PetaHashPerSecond,
    ExaHashPerSecond,
}

impl HashrateUnit {
    pub fn label(&self) -> &'static str {
        match self {
            HashrateUnit::TeraHashPerSecond => "TH/s",
            HashrateUnit::PetaHashPerSecond => "PH/s",
            HashrateUnit::ExaHashPerSecond => "EH/s",
        }
    }

    /// 이 단위의 값을 TH/s로 환산한다.
    pub fn to_th(&self, value: f64) -> f64 {
        match self {
            HashrateUnit::TeraHashPerSecond => value,
            HashrateUnit::PetaHashPerSecond => value * 1_000.0,
            HashrateUnit::ExaHashPerSecond => value * 1_000_000.0,
        }
    }

    /// TH/s 값을 이 단위로 환산한다.
    pub fn from_th(&self, value: f64) -> f64 {
        match self {
            HashrateUnit::TeraHashPerSecond => value,
            HashrateUnit::PetaHashPerSecond => value / 1_000.0,
            HashrateUnit::ExaHashPerSecond => value / 1_000_000.0,
        }
    }
}

/// 해시레이트를 변환한다.
pub fn convert_hashrate(value: f64, from: HashrateUnit, to: HashrateUnit) -> f64 {
    to.from_th(from.to_th(value))
}
