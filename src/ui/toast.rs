//! Toast 通知面
//!
//! 通知的渲染由外部承担，这里只定义"显示一条短暂通知"的能力。

use tracing::{info, warn};

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Toast 通知能力
pub trait Toast: Send + Sync {
    /// 显示一条短暂的用户可见通知
    fn show_toast(&self, message: &str, kind: ToastKind);
}

/// 终端 Toast 实现，把通知打到日志上
pub struct TerminalToast;

impl Toast for TerminalToast {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Success => info!("✅ {}", message),
            ToastKind::Error => warn!("❌ {}", message),
        }
    }
}
