/*!
 * 运行配置模块
 *
 * 基于 TOML 的运行配置：存储介质与存储键、默认重载延迟、日志级别。
 */

pub mod defaults;
pub mod paths;
pub mod reader;
pub mod types;
pub mod validator;

// 重新导出核心类型和函数
pub use defaults::*;
pub use paths::ConfigPaths;
pub use reader::StoreConfigReader;
pub use types::*;
pub use validator::StoreConfigValidator;

/// 配置系统版本
pub const CONFIG_VERSION: &str = "1.0.0";

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "config";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "preferences.toml";

/// 偏好存储目录名
pub const STORAGE_DIR_NAME: &str = "storage";
