//! 실행 환경 및 서버 설정 모듈
//!
//! 실행 환경 감지, 비밀번호 해싱 비용, 서버 바인딩 주소를 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
///
/// 쿠키 Secure 플래그와 bcrypt 비용 등 환경에 따라 달라지는
/// 동작의 기준이 됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 로컬 개발 (Secure 쿠키 해제, 낮은 해싱 비용)
    Development,
    /// 자동화 테스트 (낮은 해싱 비용)
    Test,
    /// 운영 (기본값)
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경변수를 우선 확인하고, 없으면 부트스트랩이
    /// .env 파일 선택에 쓰는 `PROFILE`을 따릅니다. 둘 다 없으면
    /// 안전한 쪽인 `Production`으로 동작합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("PROFILE"))
            .unwrap_or_default();

        Self::from_name(&name)
    }

    fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경의 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경변수(4-15 범위)가 있으면 우선 적용하고,
    /// 없으면 환경별 기본값(Development/Test 4, Production 12)을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_name_mapping() {
        assert_eq!(Environment::from_name("dev"), Environment::Development);
        assert_eq!(
            Environment::from_name("Development"),
            Environment::Development
        );
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("prod"), Environment::Production);
        // 알 수 없는 값은 보수적으로 Production 취급
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
        assert_eq!(Environment::from_name(""), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
