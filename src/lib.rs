//! 약품 주입량·펌프 보정 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 HMI 연동도 쉽게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod dosing;
pub mod pump;
pub mod ui_cli;
