//! 약품 주입 기준 공식 모음.
//!
//! 현장에서 통용되는 환산식과 약품별 기본 주입량 공식을 순수 함수로 제공한다.
//! 각 계산 화면은 이 공식을 그대로 쓰지 않고 자체 특화 공식을 두지만,
//! 교차 검증용 기준식으로 이 모듈을 유지한다.
//! 0으로 나누게 되는 입력은 오류 대신 0.0을 반환한다.

/// 가성소다(NaOH) 용액의 기본 농도 [%].
pub const DEFAULT_NAOH_CONCENTRATION_PERCENT: f64 = 48.0;

/// 유량을 L/s에서 m³/h로 환산한다.
pub fn flow_lps_to_m3_per_h(flow_lps: f64) -> f64 {
    flow_lps * 3.6
}

/// 염화제이철(FeCl₃) 주입량 [kg/h].
///
/// `calibration_constant`는 약품 검정에서 얻는 환산 상수이며 0이면 0.0을 반환한다.
pub fn iron_trichloride_dosage(flow_m3_per_h: f64, ppm: f64, calibration_constant: f64) -> f64 {
    if calibration_constant != 0.0 {
        flow_m3_per_h * ppm / calibration_constant
    } else {
        0.0
    }
}

/// 가성소다 주입량 [L/h].
///
/// `density`는 용액 밀도 [kg/L], `concentration_percent`는 용액 농도 [%].
pub fn caustic_soda_dosage(
    flow_m3_per_h: f64,
    ppm: f64,
    density: f64,
    concentration_percent: f64,
) -> f64 {
    let denominator = density * concentration_percent * 10.0;
    if denominator != 0.0 {
        flow_m3_per_h * ppm / denominator
    } else {
        0.0
    }
}

/// 염소 가스 주입량 [kg/h].
pub fn chlorine_gas_dosage(flow_m3_per_h: f64, ppm: f64) -> f64 {
    flow_m3_per_h * ppm / 1000.0
}

/// 폴리머(고분자 응집제) 주입량 [L/h].
pub fn polyelectrolyte_dosage(flow_m3_per_h: f64, ppm: f64, concentration_percent: f64) -> f64 {
    let denominator = concentration_percent * 10.0;
    if denominator != 0.0 {
        flow_m3_per_h * ppm / denominator
    } else {
        0.0
    }
}

/// 검정 계수(Hz당 토출량)로 펌프 주파수를 구한다.
///
/// `liters_per_hz`는 1 Hz당 토출량 [L/h/Hz].
pub fn hz_from_calibration_factor(liters_per_hour: f64, liters_per_hz: f64) -> f64 {
    if liters_per_hz != 0.0 {
        liters_per_hour / liters_per_hz
    } else {
        0.0
    }
}

/// 최대 토출량 대비 비율로 펌프 주파수를 구한다.
///
/// 펌프 정격(50 Hz)에서의 최대 토출량 `max_capacity_lph` [L/h]를 기준으로 한다.
pub fn hz_from_max_capacity(liters_per_hour: f64, max_capacity_lph: f64) -> f64 {
    if max_capacity_lph != 0.0 {
        (liters_per_hour / max_capacity_lph) * 50.0
    } else {
        0.0
    }
}
