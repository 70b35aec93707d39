use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::dosing::chemical::{ChemicalDosing, DosageInput};
use crate::dosing::chlorine;
use crate::pump::calibration::{self, PumpCalibrationSample};
use crate::pump::group::{CalibrationReference, PumpGroup, PumpGroupConfig};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Conversion,
    ChemicalDosing,
    Chlorine,
    PumpCalibration,
    PumpGroup,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== 약품 주입·펌프 보정 Toolbox ===");
    println!("1) 기준 공식 환산");
    println!("2) 약품 충전시간 계산 (철염/가성소다)");
    println!("3) 염소 주입 계산 (전/중/후)");
    println!("4) 펌프 주파수·스트로크 보정");
    println!("5) 다중 펌프 부하 분배");
    println!("6) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Conversion),
            "2" => return Ok(MenuChoice::ChemicalDosing),
            "3" => return Ok(MenuChoice::Chlorine),
            "4" => return Ok(MenuChoice::PumpCalibration),
            "5" => return Ok(MenuChoice::PumpGroup),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 기준 공식 환산 메뉴를 처리한다.
pub fn handle_conversion(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 기준 공식 환산 --");
    println!("1) 유량 L/s → m³/h");
    println!("2) 염화제이철 주입량");
    println!("3) 가성소다 주입량");
    println!("4) 염소 가스 주입량");
    println!("5) 폴리머 주입량");
    println!("6) 검정 계수로 주파수");
    println!("7) 최대 토출량으로 주파수");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let flow = read_f64("유량 [L/s]: ")?;
            println!("환산 유량: {:.2} m³/h", conversion::flow_lps_to_m3_per_h(flow));
        }
        "2" => {
            let flow = read_f64("유량 [m³/h]: ")?;
            let ppm = read_f64("주입률 [ppm]: ")?;
            let c = read_f64("검정 환산 상수: ")?;
            println!(
                "주입량: {:.3} kg/h",
                conversion::iron_trichloride_dosage(flow, ppm, c)
            );
        }
        "3" => {
            let flow = read_f64("유량 [m³/h]: ")?;
            let ppm = read_f64("주입률 [ppm]: ")?;
            let density = read_f64("용액 밀도 [kg/L]: ")?;
            println!(
                "주입량: {:.3} L/h",
                conversion::caustic_soda_dosage(
                    flow,
                    ppm,
                    density,
                    conversion::DEFAULT_NAOH_CONCENTRATION_PERCENT,
                )
            );
        }
        "4" => {
            let flow = read_f64("유량 [m³/h]: ")?;
            let ppm = read_f64("주입률 [ppm]: ")?;
            println!("주입량: {:.3} kg/h", conversion::chlorine_gas_dosage(flow, ppm));
        }
        "5" => {
            let flow = read_f64("유량 [m³/h]: ")?;
            let ppm = read_f64("주입률 [ppm]: ")?;
            let conc = read_f64("용액 농도 [%]: ")?;
            println!(
                "주입량: {:.3} L/h",
                conversion::polyelectrolyte_dosage(flow, ppm, conc)
            );
        }
        "6" => {
            let lph = read_f64("필요 토출량 [L/h]: ")?;
            let per_hz = read_f64("검정 계수 [L/h/Hz]: ")?;
            println!(
                "필요 주파수: {:.1} Hz",
                conversion::hz_from_calibration_factor(lph, per_hz)
            );
        }
        "7" => {
            let lph = read_f64("필요 토출량 [L/h]: ")?;
            let max = read_f64("50 Hz 최대 토출량 [L/h]: ")?;
            println!(
                "필요 주파수: {:.1} Hz",
                conversion::hz_from_max_capacity(lph, max)
            );
        }
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

/// 약품 충전시간 계산 메뉴를 처리한다.
pub fn handle_chemical_dosing(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 약품 충전시간 계산 --");
    println!("1) 철염 응집제  2) 가성소다");
    let sel = read_line("약품 선택: ")?;
    let (calc, settings) = match sel.trim() {
        "1" => (ChemicalDosing::iron(), &mut cfg.iron),
        "2" => (ChemicalDosing::caustic_soda(), &mut cfg.caustic_soda),
        _ => {
            println!("잘못된 선택입니다.");
            return Ok(());
        }
    };
    let flow = read_f64_default("유량 [L/s]", cfg.last_flow)?;
    let ppm = read_f64_default("목표 주입률 [ppm]", settings.target_ppm)?;
    let factor = read_f64_default("환산계수 [g/L]", settings.factor_g_per_l)?;

    let result = calc.compute(&DosageInput {
        flow,
        target_ppm: ppm,
        factor_g_per_l: factor,
    });
    if result.fill_time_s > 0.0 {
        println!("{} 충전시간: {:.2} s", calc.name, result.fill_time_s);
        println!("시간당 소모량: {:.2} kg/h", result.hourly_kg_per_h);
        // 확정된 입력만 설정에 되써 넣는다
        cfg.last_flow = flow;
        settings.target_ppm = ppm;
        settings.factor_g_per_l = factor;
        cfg.save()?;
    } else {
        println!(
            "계산 불가: 유량 > {} L/s, 주입률 > {} ppm 조건을 확인하세요.",
            calc.min_flow, calc.min_ppm
        );
    }
    Ok(())
}

/// 염소 주입 계산 메뉴를 처리한다.
pub fn handle_chlorine(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 염소 주입 계산 --");
    let flow = read_f64_default("유량 [L/s]", cfg.last_flow)?;

    println!("전염소 목표 주입률 [ppm] (0 입력 시 전일 실적에서 역산):");
    let manual = read_f64("값: ")?;
    let manual = if manual > 0.0 { Some(manual) } else { None };
    let target = chlorine::determine_target_ppm(
        manual,
        cfg.previous_shift.flow,
        cfg.previous_shift.dosage_kg_per_h,
    );
    let pre = chlorine::pre_chlorine_dosage(flow, target);
    println!("전염소: 목표 {target:.2} ppm → {pre:.3} kg/h");

    let filter_ppm = read_f64("여과지 잔류 염소 [ppm]: ")?;
    let tank_target = read_f64("접촉조 목표 염소 [ppm]: ")?;
    let contact = chlorine::contact_tank_dosage(flow, filter_ppm, tank_target);
    println!("접촉조: {contact:.3} kg/h");

    let tank_ppm = read_f64("정수지 잔류 염소 [ppm]: ")?;
    let network_target = read_f64("관망 목표 염소 [ppm]: ")?;
    let final_dose = chlorine::final_chlorine_dosage(flow, tank_ppm, network_target);
    println!("후염소: {final_dose:.3} kg/h");

    // 금일 실적을 다음 근무조의 역산 기준으로 남긴다
    cfg.last_flow = flow;
    cfg.previous_shift.flow = flow;
    cfg.previous_shift.dosage_kg_per_h = pre;
    cfg.save()?;
    Ok(())
}

/// 펌프 보정 메뉴를 처리한다.
pub fn handle_pump_calibration(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 펌프 주파수·스트로크 보정 --");
    let old_time = read_f64("기존 충전시간 [s]: ")?;
    let old_hz = read_f64("기존 주파수 [Hz]: ")?;
    let old_aperture = read_f64("기존 스트로크 [%]: ")?;
    let target_time = read_f64("목표 충전시간 [s]: ")?;
    let result = calibration::solve(&PumpCalibrationSample {
        old_time_s: old_time,
        old_hz,
        old_aperture_percent: old_aperture,
        target_time_s: target_time,
    });
    println!(
        "보정값: {:.1} Hz, 스트로크 {:.1} %",
        result.hz, result.aperture_percent
    );
    if result.limit_reached {
        println!("스트로크가 상한(100 %)에 도달했습니다.");
    }
    if let Some(warning) = &result.warning {
        println!("경고: {warning}");
    }
    Ok(())
}

/// 다중 펌프 부하 분배 메뉴를 처리한다.
pub fn handle_pump_group(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 다중 펌프 부하 분배 --");
    let mut group = PumpGroup::new(PumpGroupConfig {
        group_name: cfg.pump_group.group_name.clone(),
        total_pump_count: cfg.pump_group.total_pump_count,
        split_threshold_fraction: cfg.pump_group.split_threshold_fraction,
        max_hz: cfg.pump_group.max_hz,
    });
    println!("[{}] 펌프 {}대", group.config().group_name, group.pumps().len());
    loop {
        for pump in group.pumps() {
            let state = if pump.is_active { "가동" } else { "정지" };
            println!("  {} ({}): {}", pump.name, pump.id, state);
        }
        let sel = read_line("가동 상태를 바꿀 펌프 id (계속하려면 엔터): ")?;
        let id = sel.trim();
        if id.is_empty() {
            break;
        }
        let active = read_line("가동이면 1, 정지면 0: ")?;
        let active = active.trim() == "1";
        if !group.toggle_pump(id, active) {
            println!("해당 id의 펌프가 없습니다: {id}");
        }
    }

    let total_flow = read_f64("총 목표 유량 [L/min]: ")?;
    let old_time = read_f64("기존 충전시간 [s]: ")?;
    let old_hz = read_f64("기존 주파수 [Hz]: ")?;
    let old_aperture = read_f64("기존 스트로크 [%]: ")?;
    let result = group.calculate_load(
        total_flow,
        &CalibrationReference::new(old_time, old_hz, old_aperture),
    );
    println!(
        "가동 {}대, 대당 {:.2} L/min → {:.1} Hz, 스트로크 {:.1} %",
        result.active_pump_count,
        result.estimated_flow_per_pump,
        result.hz_per_pump,
        result.aperture_per_pump
    );
    println!("부하율: {:.0} %", result.load_percentage * 100.0);
    if let Some(warning) = &result.warning {
        println!("경고: {warning}");
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 계열: {} ({}대)", cfg.pump_group.group_name, cfg.pump_group.total_pump_count);
    println!(
        "부하율 기준: {:.0} %, 주파수 상한: {:.0} Hz",
        cfg.pump_group.split_threshold_fraction * 100.0,
        cfg.pump_group.max_hz
    );
    let sel = read_line("펌프 대수를 변경하려면 숫자, 취소하려면 엔터: ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim().parse::<u32>() {
        Ok(n) if n > 0 => {
            cfg.pump_group.total_pump_count = n;
            println!("펌프 대수가 {n}대로 설정되었습니다.");
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 엔터만 누르면 저장된 기본값을 쓰는 숫자 입력.
fn read_f64_default(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} (엔터 = {default}): "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
