//! 기준 공식·약품 충전시간·염소 주입 계산 회귀 테스트.
use dosing_engineering_toolbox::conversion;
use dosing_engineering_toolbox::dosing::chemical::{ChemicalDosing, DosageInput};
use dosing_engineering_toolbox::dosing::chlorine;

#[test]
fn flow_conversion_and_reference_formulas() {
    assert!((conversion::flow_lps_to_m3_per_h(100.0) - 360.0).abs() < 1e-9);
    assert!((conversion::chlorine_gas_dosage(1000.0, 3.0) - 3.0).abs() < 1e-9);
    // 500 L/h는 최대 1000 L/h 펌프의 절반 → 25 Hz
    assert!((conversion::hz_from_max_capacity(500.0, 1000.0) - 25.0).abs() < 1e-9);
    assert!((conversion::hz_from_calibration_factor(120.0, 4.0) - 30.0).abs() < 1e-9);
}

#[test]
fn reference_formulas_guard_division_by_zero() {
    assert_eq!(conversion::iron_trichloride_dosage(500.0, 20.0, 0.0), 0.0);
    assert_eq!(conversion::caustic_soda_dosage(500.0, 10.0, 0.0, 48.0), 0.0);
    assert_eq!(conversion::polyelectrolyte_dosage(500.0, 1.0, 0.0), 0.0);
    assert_eq!(conversion::hz_from_calibration_factor(120.0, 0.0), 0.0);
    assert_eq!(conversion::hz_from_max_capacity(500.0, 0.0), 0.0);
}

#[test]
fn iron_fill_time_reference_case() {
    // 유량 700 L/s, 21 ppm, 계수 594 g/L → 약 40.41초
    let iron = ChemicalDosing::iron();
    let fill = iron.fill_time_seconds(&DosageInput {
        flow: 700.0,
        target_ppm: 21.0,
        factor_g_per_l: 594.0,
    });
    assert!((fill - 40.41).abs() < 0.01, "fill={fill}");
}

#[test]
fn fill_time_round_trip() {
    let iron = ChemicalDosing::iron();
    for &(flow, ppm, factor) in &[(700.0, 21.0, 594.0), (1500.0, 5.0, 480.0), (601.0, 1.1, 0.5)] {
        let fill = iron.fill_time_seconds(&DosageInput {
            flow,
            target_ppm: ppm,
            factor_g_per_l: factor,
        });
        assert!(fill > 0.0);
        assert!((fill * flow * ppm - factor * 1000.0).abs() < 1e-6);
    }
}

#[test]
fn fill_time_below_validity_thresholds_is_zero() {
    let soda = ChemicalDosing::caustic_soda();
    // 경계값(600 L/s, 1 ppm)은 초과가 아니므로 계산하지 않는다
    let base = DosageInput {
        flow: 600.0,
        target_ppm: 10.0,
        factor_g_per_l: 480.0,
    };
    assert_eq!(soda.fill_time_seconds(&base), 0.0);
    assert_eq!(
        soda.fill_time_seconds(&DosageInput {
            flow: 700.0,
            target_ppm: 1.0,
            ..base
        }),
        0.0
    );
    assert_eq!(
        soda.fill_time_seconds(&DosageInput {
            flow: 700.0,
            factor_g_per_l: 0.0,
            ..base
        }),
        0.0
    );
}

#[test]
fn hourly_amount_guards_differ_per_chemical() {
    let iron = ChemicalDosing::iron();
    let soda = ChemicalDosing::caustic_soda();
    // 철염은 1초 이하 충전시간을 검정 실패로 본다
    assert_eq!(iron.hourly_amount_kg_per_h(0.9), 0.0);
    assert_eq!(iron.hourly_amount_kg_per_h(1.0), 0.0);
    assert!((iron.hourly_amount_kg_per_h(40.0) - 90.0).abs() < 1e-9);
    // 가성소다는 양수이기만 하면 환산한다
    assert!((soda.hourly_amount_kg_per_h(0.9) - 4000.0).abs() < 1e-9);
    assert_eq!(soda.hourly_amount_kg_per_h(0.0), 0.0);
    assert_eq!(soda.hourly_amount_kg_per_h(-5.0), 0.0);
}

#[test]
fn applied_ppm_truncates_to_two_decimals() {
    // 30 kg/h ÷ (1700 × 0.0036) = 4.9019... → 4.90
    let ppm = chlorine::applied_ppm(1700.0, 30.0);
    assert!((ppm - 4.90).abs() < 1e-12, "ppm={ppm}");
    assert_eq!(chlorine::applied_ppm(0.0, 30.0), 0.0);
    assert_eq!(chlorine::applied_ppm(-10.0, 30.0), 0.0);
}

#[test]
fn target_ppm_prefers_manual_then_falls_back_to_previous_shift() {
    assert_eq!(chlorine::determine_target_ppm(Some(2.5), 1700.0, 30.0), 2.5);
    // 0 이하 수동 입력은 없는 것으로 취급한다
    let fallback = chlorine::determine_target_ppm(Some(0.0), 1700.0, 30.0);
    assert!((fallback - chlorine::applied_ppm(1700.0, 30.0)).abs() < 1e-12);
    let fallback = chlorine::determine_target_ppm(None, 1700.0, 30.0);
    assert!((fallback - 4.90).abs() < 1e-12);
}

#[test]
fn chlorine_dosage_formulas() {
    assert!((chlorine::pre_chlorine_dosage(1000.0, 3.0) - 10.8).abs() < 1e-9);
    assert_eq!(chlorine::pre_chlorine_dosage(0.0, 3.0), 0.0);
    // 부족분만 보충: 0.3 ppm 모자람
    let dose = chlorine::contact_tank_dosage(1000.0, 0.2, 0.5);
    assert!((dose - 1.08).abs() < 1e-9);
}

#[test]
fn deficit_dosage_never_negative() {
    // 잔류가 목표를 넘어도 음수 주입은 없다
    assert_eq!(chlorine::contact_tank_dosage(1000.0, 1.5, 1.0), 0.0);
    assert_eq!(chlorine::final_chlorine_dosage(1000.0, 0.9, 0.5), 0.0);
    assert!(chlorine::final_chlorine_dosage(1000.0, 0.3, 0.5) > 0.0);
}
