//! 단위 정의 및 변환 모듈 모음.

pub mod hashrate;
pub mod power;

pub use hashrate::{convert_hashrate, HashrateUnit};
pub use power::{convert_power, PowerUnit};
