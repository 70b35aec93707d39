use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dosing::chemical::ChemicalDosing;

/// 약품별 최근 저장 설정.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChemicalSettings {
    /// 목표 주입률 [ppm]
    pub target_ppm: f64,
    /// 약품 환산계수 [g/L]
    pub factor_g_per_l: f64,
}

/// 전일 근무조의 염소 주입 실적. 수동 목표가 없을 때 역산 기준이 된다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PreviousShiftSample {
    /// 전일 유량 [L/s]
    pub flow: f64,
    /// 전일 주입량 [kg/h]
    pub dosage_kg_per_h: f64,
}

impl Default for PreviousShiftSample {
    fn default() -> Self {
        Self {
            flow: 0.0,
            dosage_kg_per_h: 0.0,
        }
    }
}

/// 주입 계열 펌프 구성 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PumpGroupSettings {
    /// 계열 이름
    pub group_name: String,
    /// 전체 펌프 대수
    pub total_pump_count: u32,
    /// 추가 가동 제안 부하율 기준 (0~1)
    pub split_threshold_fraction: f64,
    /// 주파수 상한 [Hz]
    pub max_hz: f64,
}

impl Default for PumpGroupSettings {
    fn default() -> Self {
        Self {
            group_name: "염소 주입 계열".to_string(),
            total_pump_count: 3,
            split_threshold_fraction: 0.70,
            max_hz: 50.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
///
/// 계산 엔진이 직접 읽고 쓰지는 않으며, UI 계층이 여기서 값을 꺼내
/// 계산에 넘기고 확정된 결과를 되써 넣는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 마지막으로 입력한 원수 유량 [L/s]
    pub last_flow: f64,
    /// 철염 응집제 설정
    pub iron: ChemicalSettings,
    /// 가성소다 설정
    pub caustic_soda: ChemicalSettings,
    /// 전일 염소 주입 실적
    pub previous_shift: PreviousShiftSample,
    /// 주입 계열 펌프 구성
    pub pump_group: PumpGroupSettings,
}

impl Default for Config {
    fn default() -> Self {
        let iron = ChemicalDosing::iron();
        let soda = ChemicalDosing::caustic_soda();
        Self {
            last_flow: 0.0,
            iron: ChemicalSettings {
                target_ppm: iron.default_target_ppm,
                factor_g_per_l: iron.default_factor_g_per_l,
            },
            caustic_soda: ChemicalSettings {
                target_ppm: soda.default_target_ppm,
                factor_g_per_l: soda.default_factor_g_per_l,
            },
            previous_shift: PreviousShiftSample::default(),
            pump_group: PumpGroupSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
