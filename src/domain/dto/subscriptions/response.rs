//! 구독 응답 DTO

use crate::domain::dto::common::{OwnerResponse, OwnerView};
use serde::{Deserialize, Serialize};

/// 구독 토글 결과
///
/// 토글 후의 최종 상태를 반환합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusResponse {
    /// 토글 후 구독 상태
    pub is_subscribed: bool,
}

/// 구독자/채널 목록 집계 결과
///
/// subscriptions 컬렉션에서 `$lookup`으로 상대방 사용자 프로필을
/// 조인한 결과입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionUserView {
    /// 조인된 사용자 프로필
    pub user: OwnerView,
}

/// 구독자/채널 목록 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUserResponse {
    pub user: OwnerResponse,
}

impl From<SubscriptionUserView> for SubscriptionUserResponse {
    fn from(view: SubscriptionUserView) -> Self {
        Self {
            user: OwnerResponse::from(view.user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_status_serializes_camel_case() {
        let json = serde_json::to_value(SubscriptionStatusResponse {
            is_subscribed: false,
        })
        .unwrap();
        assert_eq!(json["isSubscribed"], false);
    }
}
