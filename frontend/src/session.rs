//! 会话状态管理
//!
//! 进程级会话状态的唯一访问点：两把令牌的存储键只在这里出现，
//! 生命周期为 未初始化 -> 已认证 <-> 已清除。
//! 守卫只做令牌存在性检查——过期但仍在存储里的令牌同样算已认证，
//! 直到某个受保护请求失败为止（当前没有 401 拦截器处理这种情况）。

use crate::api::{self, ApiError, InventoryApi};
use crate::web::LocalStorage;
use inventory_shared::{LoginRequest, TokenPair};
use leptos::prelude::*;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// 会话生命周期状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// 启动后尚未从存储加载
    #[default]
    Uninitialized,
    /// 存储中存在访问令牌；API 句柄仅在此状态下存在
    Authenticated { api: InventoryApi },
    /// 无令牌（从未登录或已注销）
    Cleared,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn api(&self) -> Option<InventoryApi> {
        match self {
            SessionState::Authenticated { api } => Some(api.clone()),
            _ => None,
        }
    }

    /// 由存储中的令牌推导状态（纯函数，存在性检查而非有效性检查）
    pub fn from_stored(token: Option<String>) -> Self {
        match token {
            Some(token) => SessionState::Authenticated {
                api: InventoryApi::new(token),
            },
            None => SessionState::Cleared,
        }
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（注入路由服务实现守卫，与路由解耦）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// 当前 API 句柄；未认证时为 None
    pub fn api(&self) -> Option<InventoryApi> {
        self.state.with_untracked(|s| s.api())
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话：对存储做一次令牌存在性检查
pub fn init_session(ctx: &SessionContext) {
    ctx.set_state
        .set(SessionState::from_stored(LocalStorage::get(ACCESS_TOKEN_KEY)));
}

/// 登录：换取令牌对，写入存储并转入已认证状态
///
/// 导航不在这里发生，路由服务监听认证信号后自动重定向。
pub async fn login(ctx: SessionContext, username: String, password: String) -> Result<(), ApiError> {
    let pair: TokenPair = api::login(&LoginRequest { username, password }).await?;
    LocalStorage::set(ACCESS_TOKEN_KEY, &pair.access);
    LocalStorage::set(REFRESH_TOKEN_KEY, &pair.refresh);
    ctx.set_state.set(SessionState::Authenticated {
        api: InventoryApi::new(pair.access),
    });
    Ok(())
}

/// 注销：清除两把令牌并转入已清除状态
pub fn logout(ctx: SessionContext) {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
    LocalStorage::delete(REFRESH_TOKEN_KEY);
    ctx.set_state.set(SessionState::Cleared);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_token_counts_as_authenticated() {
        let state = SessionState::from_stored(Some("token-123".to_string()));
        assert!(state.is_authenticated());
        assert!(state.api().is_some());
    }

    #[test]
    fn missing_token_is_cleared() {
        let state = SessionState::from_stored(None);
        assert_eq!(state, SessionState::Cleared);
        assert!(state.api().is_none());
    }

    #[test]
    fn uninitialized_is_not_authenticated() {
        assert!(!SessionState::default().is_authenticated());
    }
}
