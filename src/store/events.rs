//! 偏好存储事件系统
//!
//! 每次提交后广播，宿主据此刷新界面；没有订阅者时事件直接丢弃。

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// 事件通道容量
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// 偏好存储事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    Hydrated {
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    Updated {
        timestamp: chrono::DateTime<chrono::Utc>,
        field: String,
    },
    Reset {
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    Persisted {
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    PersistFailed {
        timestamp: chrono::DateTime<chrono::Utc>,
        error: String,
    },
}

impl StoreEvent {
    /// 更新事件对应的字段名
    pub fn field(&self) -> Option<&str> {
        match self {
            StoreEvent::Updated { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// 偏好存储事件发送器
#[derive(Debug)]
pub struct StoreEventSender {
    sender: broadcast::Sender<StoreEvent>,
}

impl StoreEventSender {
    /// 创建新的事件发送器，通过 `subscribe` 获取接收端
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn send_hydrated(&self) {
        let _ = self.sender.send(StoreEvent::Hydrated {
            timestamp: chrono::Utc::now(),
        });
    }

    pub fn send_updated(&self, field: impl Into<String>) {
        let _ = self.sender.send(StoreEvent::Updated {
            timestamp: chrono::Utc::now(),
            field: field.into(),
        });
    }

    pub fn send_reset(&self) {
        let _ = self.sender.send(StoreEvent::Reset {
            timestamp: chrono::Utc::now(),
        });
    }

    pub fn send_persisted(&self) {
        let _ = self.sender.send(StoreEvent::Persisted {
            timestamp: chrono::Utc::now(),
        });
    }

    pub fn send_persist_failed(&self, error: impl Into<String>) {
        let _ = self.sender.send(StoreEvent::PersistFailed {
            timestamp: chrono::Utc::now(),
            error: error.into(),
        });
    }

    /// 订阅事件
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for StoreEventSender {
    fn default() -> Self {
        Self::new()
    }
}
