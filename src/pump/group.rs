//! 다중 펌프 부하 분배 계산.
//!
//! 동일 사양 펌프 여러 대로 구성된 주입 계열에서, 가동 중인 펌프들에
//! 총 목표 유량을 균등 분배하고 대당 주파수/스트로크를 보정 계산한다.
//! 부하율이 기준을 넘으면 추가 가동을 제안하는 경고를 단계적으로 낸다.

use crate::pump::calibration::{self, PumpCalibrationSample};

/// 가동 펌프가 한 대도 없을 때의 경고 메시지.
pub const NO_ACTIVE_PUMP_MSG: &str = "가동할 펌프를 1대 이상 선택하세요.";
/// 전 펌프 가동 중에도 부하율 기준을 넘었을 때의 경고 메시지.
pub const AT_CAPACITY_MSG: &str = "전 펌프 가동 중입니다. 시스템이 용량 한계에 근접했습니다.";
/// 보정 계산이 유효한 수치를 내지 못했을 때의 메시지.
pub const CALC_FAILURE_MSG: &str = "보정 계산에 실패했습니다. 입력값을 확인하세요.";

/// 주입 계열에 속한 펌프 한 대.
#[derive(Debug, Clone)]
pub struct Pump {
    /// 계열 내 식별자 (예: "P1")
    pub id: String,
    /// 표시용 이름 (예: "1호기")
    pub name: String,
    /// 가동 여부. 생성 이후 유일하게 바뀌는 필드다
    pub is_active: bool,
}

/// 주입 계열 구성. 생성 이후 변경하지 않는다.
#[derive(Debug, Clone)]
pub struct PumpGroupConfig {
    /// 계열 이름 (예: "전염소 주입 계열")
    pub group_name: String,
    /// 계열의 전체 펌프 대수
    pub total_pump_count: u32,
    /// 추가 가동을 제안하는 부하율 기준 (0~1)
    pub split_threshold_fraction: f64,
    /// 부하율 분모로 쓰는 주파수 상한 [Hz]
    pub max_hz: f64,
}

impl PumpGroupConfig {
    /// 기준 부하율 70 %, 상한 50 Hz의 기본 구성을 만든다.
    pub fn new(group_name: impl Into<String>, total_pump_count: u32) -> Self {
        Self {
            group_name: group_name.into(),
            total_pump_count,
            split_threshold_fraction: 0.70,
            max_hz: 50.0,
        }
    }
}

/// 보정 계산의 기준이 되는 기존 검정값.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationReference {
    /// 검정컬럼 용량 [mL]
    pub tube_volume: f64,
    /// 기존 검정 충전시간 [s]
    pub old_time_s: f64,
    /// 기존 운전 주파수 [Hz]
    pub old_hz: f64,
    /// 기존 스트로크 개도 [%]
    pub old_aperture_percent: f64,
}

impl CalibrationReference {
    /// 표준 100 mL 검정컬럼 기준값을 만든다.
    pub fn new(old_time_s: f64, old_hz: f64, old_aperture_percent: f64) -> Self {
        Self {
            tube_volume: 100.0,
            old_time_s,
            old_hz,
            old_aperture_percent,
        }
    }
}

/// 부하 분배 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPumpResult {
    /// 대당 운전 주파수 [Hz]
    pub hz_per_pump: f32,
    /// 대당 스트로크 개도 [%]
    pub aperture_per_pump: f32,
    /// 요청한 총 목표 유량
    pub total_flow: f64,
    /// 대당 분배 유량
    pub estimated_flow_per_pump: f64,
    /// 가동 펌프 대수
    pub active_pump_count: u32,
    /// 부하율 (0~1): 대당 주파수 / 주파수 상한
    pub load_percentage: f64,
    /// 용량 부족·추가 가동 제안 등의 경고
    pub warning: Option<String>,
}

impl MultiPumpResult {
    fn zero(warning: &str) -> Self {
        Self {
            hz_per_pump: 0.0,
            aperture_per_pump: 0.0,
            total_flow: 0.0,
            estimated_flow_per_pump: 0.0,
            active_pump_count: 0,
            load_percentage: 0.0,
            warning: Some(warning.to_string()),
        }
    }
}

/// 주입 계열의 펌프 명부와 부하 분배 계산을 담당한다.
///
/// 명부는 이 타입이 단독 소유하는 가변 상태이므로, `toggle_pump`와
/// `calculate_load` 호출은 단일 쓰기 주체(UI 디스패치 스레드 또는 뮤텍스)
/// 뒤에서 직렬화해야 한다.
#[derive(Debug)]
pub struct PumpGroup {
    config: PumpGroupConfig,
    pumps: Vec<Pump>,
}

impl PumpGroup {
    /// 구성대로 명부를 만든다. 1호기만 가동 상태로 시작한다.
    pub fn new(config: PumpGroupConfig) -> Self {
        let pumps = (1..=config.total_pump_count)
            .map(|n| Pump {
                id: format!("P{n}"),
                name: format!("{n}호기"),
                is_active: n == 1,
            })
            .collect();
        Self { config, pumps }
    }

    /// 계열 구성을 돌려준다.
    pub fn config(&self) -> &PumpGroupConfig {
        &self.config
    }

    /// 펌프 명부를 돌려준다.
    pub fn pumps(&self) -> &[Pump] {
        &self.pumps
    }

    /// 해당 id 펌프의 가동 여부를 바꾼다. id를 찾았는지 여부를 반환한다.
    pub fn toggle_pump(&mut self, id: &str, is_active: bool) -> bool {
        match self.pumps.iter_mut().find(|p| p.id == id) {
            Some(pump) => {
                pump.is_active = is_active;
                true
            }
            None => false,
        }
    }

    /// 총 목표 유량을 가동 펌프에 균등 분배하고 대당 보정값을 계산한다.
    ///
    /// 분배 유량을 검정컬럼 충전시간으로 환산해 보정 계산에 넘기고,
    /// 그 결과 주파수로 부하율을 구한다. 경고는 다음 우선순위로 구성한다:
    /// 보정 계산의 용량 부족 경고 → 부하율 기준 초과 시 추가 가동 제안
    /// (여유 펌프가 없으면 용량 한계 경고).
    pub fn calculate_load(
        &self,
        target_total_flow: f64,
        reference: &CalibrationReference,
    ) -> MultiPumpResult {
        let active_count = self.pumps.iter().filter(|p| p.is_active).count() as u32;
        if active_count == 0 {
            return MultiPumpResult::zero(NO_ACTIVE_PUMP_MSG);
        }

        let per_pump_flow = target_total_flow / f64::from(active_count);
        // 목표 유량 0 입력 시 0으로 나누지 않도록 하한을 둔다
        let safe_flow = per_pump_flow.max(0.1);
        let per_pump_target_time_s = (reference.tube_volume / safe_flow) * 60.0;

        let solved = calibration::solve(&PumpCalibrationSample {
            old_time_s: reference.old_time_s,
            old_hz: reference.old_hz,
            old_aperture_percent: reference.old_aperture_percent,
            target_time_s: per_pump_target_time_s,
        });
        if !solved.hz.is_finite() || !solved.aperture_percent.is_finite() {
            return MultiPumpResult::zero(CALC_FAILURE_MSG);
        }

        let load = f64::from(solved.hz) / self.config.max_hz;
        let warning = if solved.warning.is_some() {
            solved.warning
        } else if load > self.config.split_threshold_fraction {
            if active_count < self.config.total_pump_count {
                Some(format!(
                    "부하율 {:.0} % 초과: {}호기 추가 가동을 권장합니다.",
                    load * 100.0,
                    active_count + 1
                ))
            } else {
                Some(AT_CAPACITY_MSG.to_string())
            }
        } else {
            None
        };

        MultiPumpResult {
            hz_per_pump: solved.hz,
            aperture_per_pump: solved.aperture_percent,
            total_flow: target_total_flow,
            estimated_flow_per_pump: per_pump_flow,
            active_pump_count: active_count,
            load_percentage: load,
            warning,
        }
    }
}
