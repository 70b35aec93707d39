//! 다중 펌프 부하 분배 회귀 테스트.
use dosing_engineering_toolbox::pump::calibration::INSUFFICIENT_CAPACITY_MSG;
use dosing_engineering_toolbox::pump::group::{
    CalibrationReference, PumpGroup, PumpGroupConfig, AT_CAPACITY_MSG, NO_ACTIVE_PUMP_MSG,
};

/// 검정값: 100 mL 컬럼, 30초, 40 Hz, 50 %.
/// 대당 유량 f [L/min] → 목표 시간 6000/f 초 → 필요 주파수 0.2×f Hz.
fn reference() -> CalibrationReference {
    CalibrationReference::new(30.0, 40.0, 50.0)
}

fn group_of(count: u32) -> PumpGroup {
    PumpGroup::new(PumpGroupConfig::new("전염소 주입 계열", count))
}

#[test]
fn roster_starts_with_first_pump_active() {
    let group = group_of(3);
    let states: Vec<bool> = group.pumps().iter().map(|p| p.is_active).collect();
    assert_eq!(states, vec![true, false, false]);
    assert_eq!(group.pumps()[0].id, "P1");
    assert_eq!(group.pumps()[2].name, "3호기");
}

#[test]
fn toggle_reports_whether_id_was_found() {
    let mut group = group_of(2);
    assert!(group.toggle_pump("P2", true));
    assert!(group.pumps()[1].is_active);
    assert!(group.toggle_pump("P2", false));
    assert!(!group.pumps()[1].is_active);
    assert!(!group.toggle_pump("P9", true));
}

#[test]
fn no_active_pump_returns_zero_result_with_message() {
    let mut group = group_of(2);
    assert!(group.toggle_pump("P1", false));
    let res = group.calculate_load(120.0, &reference());
    assert_eq!(res.active_pump_count, 0);
    assert_eq!(res.hz_per_pump, 0.0);
    assert_eq!(res.aperture_per_pump, 0.0);
    assert_eq!(res.total_flow, 0.0);
    assert_eq!(res.estimated_flow_per_pump, 0.0);
    assert_eq!(res.load_percentage, 0.0);
    assert_eq!(res.warning.as_deref(), Some(NO_ACTIVE_PUMP_MSG));
}

#[test]
fn flow_splits_evenly_across_active_pumps() {
    let mut group = group_of(3);
    group.toggle_pump("P2", true);
    let res = group.calculate_load(240.0, &reference());
    assert_eq!(res.active_pump_count, 2);
    assert!((res.estimated_flow_per_pump - 120.0).abs() < 1e-9);
    assert!(
        (res.estimated_flow_per_pump * f64::from(res.active_pump_count) - res.total_flow).abs()
            < 1e-9
    );
    // 대당 120 L/min → 24 Hz, 스트로크 변경 없음
    assert!((res.hz_per_pump - 24.0).abs() < 1e-4);
    assert_eq!(res.aperture_per_pump, 50.0);
    assert!((res.load_percentage - 0.48).abs() < 1e-4);
    assert!(res.warning.is_none());
}

#[test]
fn load_over_threshold_suggests_next_pump() {
    let group = group_of(3);
    // 1대 가동, 200 L/min → 40 Hz → 부하율 0.8 > 0.7
    let res = group.calculate_load(200.0, &reference());
    assert_eq!(res.active_pump_count, 1);
    assert!((res.load_percentage - 0.8).abs() < 1e-4);
    let warning = res.warning.expect("추가 가동 제안이 있어야 한다");
    assert!(warning.contains("2호기"), "warning={warning}");
}

#[test]
fn all_pumps_active_over_threshold_reports_capacity() {
    let mut group = group_of(2);
    group.toggle_pump("P2", true);
    // 대당 400 L/min → 80 Hz 요구 → 50 Hz 고정 + 스트로크 80 %, 부하율 1.0
    let res = group.calculate_load(800.0, &reference());
    assert_eq!(res.active_pump_count, 2);
    assert_eq!(res.hz_per_pump, 50.0);
    assert_eq!(res.aperture_per_pump, 80.0);
    assert!((res.load_percentage - 1.0).abs() < 1e-9);
    assert_eq!(res.warning.as_deref(), Some(AT_CAPACITY_MSG));
}

#[test]
fn solver_warning_propagates_unchanged() {
    let group = group_of(3);
    // 1대에 600 L/min: 50 Hz × 100 %로도 부족한 요구
    let res = group.calculate_load(600.0, &reference());
    assert_eq!(res.hz_per_pump, 50.0);
    assert_eq!(res.aperture_per_pump, 100.0);
    assert_eq!(res.warning.as_deref(), Some(INSUFFICIENT_CAPACITY_MSG));
}

#[test]
fn zero_target_flow_degrades_to_zero_load() {
    let group = group_of(3);
    let res = group.calculate_load(0.0, &reference());
    assert_eq!(res.active_pump_count, 1);
    assert_eq!(res.estimated_flow_per_pump, 0.0);
    assert_eq!(res.hz_per_pump, 0.0);
    assert_eq!(res.load_percentage, 0.0);
    assert!(res.warning.is_none());
}
