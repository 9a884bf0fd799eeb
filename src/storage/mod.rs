/*!
 * 持久化存储模块
 *
 * 偏好存储按"键 -> 序列化字符串"的方式持久化（与浏览器 localStorage 语义一致），
 * 具体介质由 `PersistStorage` 的实现决定：内存或文件目录。
 */

pub mod error;
pub mod filesystem;
pub mod memory;

// 重新导出核心类型和函数
pub use error::{StorageError, StorageResult};
pub use filesystem::{FileStorage, FileStorageOptions};
pub use memory::MemoryStorage;

/// 键值持久化存储
pub trait PersistStorage: Send + Sync {
    /// 读取键对应的值，不存在时返回 None
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// 写入键值，覆盖已有值
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// 删除键，不存在时无操作
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// 校验存储键：非空，只含字母、数字、`-`、`_`、`.`，且不以 `.` 开头
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
