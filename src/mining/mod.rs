//! 채굴 수익성 계산 모듈 모음.

pub mod profitability;

pub use profitability::{estimate, ProfitInput, ProfitResult, YearPoint};
