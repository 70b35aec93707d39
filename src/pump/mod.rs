//! 정량펌프 관련 계산 모듈 모음.
//! 단일 펌프 주파수/스트로크 보정과 다중 펌프 부하 분배로 구성한다.

pub mod calibration;
pub mod group;

pub use calibration::{solve, PumpCalibrationResult, PumpCalibrationSample};
pub use group::{CalibrationReference, MultiPumpResult, Pump, PumpGroup, PumpGroupConfig};
