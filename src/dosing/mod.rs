//! 약품 주입량 계산 모듈 모음.
//! 단일 약품(철염 응집제, 가성소다) 충전시간 계산과 3단 염소 주입 계산으로 구성한다.

pub mod chemical;
pub mod chlorine;

pub use chemical::{ChemicalDosing, DosageInput, FillTimeResult};
