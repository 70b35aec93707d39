//! 정량펌프 주파수/스트로크 보정 계산.
//!
//! 기존 검정값(충전시간, 주파수, 스트로크)과 새 목표 충전시간에서
//! 새 주파수·스트로크 조합을 푼다. 주파수 조정을 우선하고,
//! 조작이 번거로운 스트로크는 주파수가 상한에 걸렸을 때만 바꾼다.

/// 인버터 주파수 상한 [Hz].
pub const MAX_HZ: f64 = 50.0;
/// 스트로크 개도 상한 [%].
pub const MAX_APERTURE_PERCENT: f64 = 100.0;

/// 50 Hz × 100 % 한계로도 목표를 달성할 수 없을 때의 경고 메시지.
pub const INSUFFICIENT_CAPACITY_MSG: &str =
    "펌프 용량 부족: 50 Hz × 100 % 한계로는 목표 주입량을 달성할 수 없습니다.";

/// 보정 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct PumpCalibrationSample {
    /// 기존 검정 충전시간 [s]
    pub old_time_s: f64,
    /// 기존 운전 주파수 [Hz]
    pub old_hz: f64,
    /// 기존 스트로크 개도 [%]
    pub old_aperture_percent: f64,
    /// 목표 충전시간 [s]
    pub target_time_s: f64,
}

/// 보정 계산 결과. 항상 0~50 Hz, 0~100 % 범위 안의 값만 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCalibrationResult {
    /// 새 운전 주파수 [Hz], 소수 첫째 자리 반올림
    pub hz: f32,
    /// 새 스트로크 개도 [%], 소수 첫째 자리 반올림
    pub aperture_percent: f32,
    /// 스트로크가 100 %로 클램프되었는지 여부
    pub limit_reached: bool,
    /// 물리 한계 초과 시에만 채워지는 경고
    pub warning: Option<String>,
}

impl PumpCalibrationResult {
    fn zero() -> Self {
        Self {
            hz: 0.0,
            aperture_percent: 0.0,
            limit_reached: false,
            warning: None,
        }
    }
}

/// 새 주파수/스트로크 조합을 푼다.
///
/// Hz×스트로크 곱을 일정 토출량에 대응하는 일량으로 보고,
/// 목표 시간 배율만큼 곱을 키운 뒤 다음 순서로 배분한다.
///
/// 1. 스트로크를 고정한 채 주파수만 올린다.
/// 2. 주파수가 50 Hz를 넘으면 50 Hz로 고정하고 스트로크를 키운다.
/// 3. 스트로크도 100 %를 넘으면 100 %로 고정하고 주파수를 재계산하며,
///    그래도 50 Hz를 넘으면 용량 부족 경고를 낸다.
///
/// 시간·주파수·스트로크가 0 이하인 입력은 계산 불가로 보고 0 결과를 반환한다.
pub fn solve(sample: &PumpCalibrationSample) -> PumpCalibrationResult {
    if sample.old_time_s <= 0.0
        || sample.target_time_s <= 0.0
        || sample.old_hz <= 0.0
        || sample.old_aperture_percent <= 0.0
    {
        return PumpCalibrationResult::zero();
    }

    let ratio = sample.old_time_s / sample.target_time_s;
    let target_product = sample.old_hz * sample.old_aperture_percent * ratio;

    let mut hz = target_product / sample.old_aperture_percent;
    let mut aperture = sample.old_aperture_percent;
    let mut limit_reached = false;
    let mut warning = None;

    if hz > MAX_HZ {
        hz = MAX_HZ;
        aperture = target_product / MAX_HZ;
    }
    if aperture > MAX_APERTURE_PERCENT {
        aperture = MAX_APERTURE_PERCENT;
        limit_reached = true;
        hz = target_product / MAX_APERTURE_PERCENT;
        if hz > MAX_HZ {
            hz = MAX_HZ;
            warning = Some(INSUFFICIENT_CAPACITY_MSG.to_string());
        }
    }

    PumpCalibrationResult {
        hz: round1(hz),
        aperture_percent: round1(aperture),
        limit_reached,
        warning,
    }
}

fn round1(value: f64) -> f32 {
    ((value * 10.0).round() / 10.0) as f32
}
