//! 渲染门控状态机
//!
//! 每次渲染都由认证会话的两个字段重新推导，不单独存储。
//! 优先级：未认证 > 加载中 > 就绪。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthGate {
    /// 只渲染登录视图
    Unauthenticated,
    /// 只渲染加载指示
    Authenticating,
    /// 渲染完整外壳
    Ready,
}

impl AuthGate {
    pub fn evaluate(is_authenticated: bool, loading: bool) -> Self {
        match (is_authenticated, loading) {
            (false, _) => AuthGate::Unauthenticated,
            (true, true) => AuthGate::Authenticating,
            (true, false) => AuthGate::Ready,
        }
    }
}
