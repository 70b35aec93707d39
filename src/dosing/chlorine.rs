//! 3단 염소 주입 계산: 전염소, 접촉조(중염소), 후염소(송수).
//!
//! 세 지점은 상태를 공유하지 않고 동일한 환산 상수만 공유한다.
//! 접촉조와 후염소는 현재 잔류 농도와 목표 농도의 부족분만 보충한다.

/// 유량[L/s] × 주입률[ppm] × K = 주입량[kg/h] 환산 상수.
///
/// mg/L → kg 환산(10⁻⁶)과 초당 → 시간당 환산(3600)을 합친 값이다.
pub const KG_PER_H_FACTOR: f64 = 0.0036;

/// 주입량에서 실제 적용 주입률 [ppm]을 역산한다.
///
/// 유량이 0 이하이면 0.0을 반환한다. 소수 둘째 자리까지 버림 처리한다.
pub fn applied_ppm(flow: f64, dosage_kg_per_h: f64) -> f64 {
    if flow <= 0.0 {
        return 0.0;
    }
    let ppm = dosage_kg_per_h / (flow * KG_PER_H_FACTOR);
    (ppm * 100.0).trunc() / 100.0
}

/// 금일 목표 주입률을 결정한다.
///
/// 근무자가 직접 입력한 값이 있으면(양수) 그대로 쓰고,
/// 없으면 전일 근무조의 유량·주입량에서 실제 적용 주입률을 역산해 쓴다.
pub fn determine_target_ppm(manual_target: Option<f64>, prev_flow: f64, prev_dosage: f64) -> f64 {
    match manual_target {
        Some(target) if target > 0.0 => target,
        _ => applied_ppm(prev_flow, prev_dosage),
    }
}

/// 전염소 주입량 [kg/h].
pub fn pre_chlorine_dosage(flow: f64, target_ppm: f64) -> f64 {
    if flow <= 0.0 {
        return 0.0;
    }
    flow * target_ppm * KG_PER_H_FACTOR
}

/// 접촉조(중염소) 주입량 [kg/h].
///
/// 여과지 잔류 농도 대비 접촉조 목표 농도의 부족분만 보충한다.
/// 잔류가 목표를 이미 넘었으면 0이다.
pub fn contact_tank_dosage(flow: f64, current_filter_ppm: f64, target_tank_ppm: f64) -> f64 {
    deficit_dosage(flow, current_filter_ppm, target_tank_ppm)
}

/// 후염소(송수) 주입량 [kg/h].
///
/// 정수지 잔류 농도 대비 관망 목표 농도의 부족분만 보충한다.
pub fn final_chlorine_dosage(flow: f64, current_tank_ppm: f64, target_network_ppm: f64) -> f64 {
    deficit_dosage(flow, current_tank_ppm, target_network_ppm)
}

fn deficit_dosage(flow: f64, current_ppm: f64, target_ppm: f64) -> f64 {
    if flow <= 0.0 {
        return 0.0;
    }
    flow * (target_ppm - current_ppm).max(0.0) * KG_PER_H_FACTOR
}
