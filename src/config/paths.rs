/*!
 * 配置系统路径管理模块
 *
 * 提供统一的配置文件与存储目录路径管理，支持跨平台路径解析和目录创建。
 */

use crate::utils::error::{app_error, app_error_with_context, AppResult};
#[cfg(target_os = "windows")]
use anyhow::Context;
use std::path::{Path, PathBuf};

/// 配置路径管理器
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// 应用程序数据目录
    app_data_dir: PathBuf,

    /// 配置目录
    config_dir: PathBuf,

    /// 偏好存储目录
    storage_dir: PathBuf,
}

impl ConfigPaths {
    /// 创建新的配置路径管理器
    ///
    /// 根据当前平台自动确定配置目录位置。
    ///
    /// # 错误
    ///
    /// 如果无法确定用户目录或创建必要的目录，将返回错误。
    pub fn new() -> AppResult<Self> {
        let app_data_dir = Self::get_app_data_dir()?;
        Self::with_app_data_dir(app_data_dir)
    }

    /// 使用自定义应用数据目录创建配置路径管理器
    ///
    /// # 参数
    ///
    /// * `app_data_dir` - 自定义的应用数据目录路径
    pub fn with_app_data_dir<P: AsRef<Path>>(app_data_dir: P) -> AppResult<Self> {
        let app_data_dir = app_data_dir.as_ref().to_path_buf();
        let config_dir = app_data_dir.join(crate::config::CONFIG_DIR_NAME);
        let storage_dir = app_data_dir.join(crate::config::STORAGE_DIR_NAME);

        let paths = Self {
            app_data_dir,
            config_dir,
            storage_dir,
        };

        paths.ensure_directories_exist()?;

        Ok(paths)
    }

    /// 获取应用程序数据目录
    ///
    /// - Windows: `%APPDATA%\AppPreferences`
    /// - macOS: `~/Library/Application Support/AppPreferences`
    /// - Linux: `~/.config/app-preferences`
    fn get_app_data_dir() -> AppResult<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            let appdata = std::env::var("APPDATA").with_context(|| "无法获取 APPDATA 环境变量")?;
            Ok(PathBuf::from(appdata).join("AppPreferences"))
        }

        #[cfg(target_os = "macos")]
        {
            let home = dirs::home_dir().ok_or_else(|| app_error("无法获取用户主目录"))?;
            Ok(home
                .join("Library")
                .join("Application Support")
                .join("AppPreferences"))
        }

        #[cfg(target_os = "linux")]
        {
            let config_dir = dirs::config_dir().ok_or_else(|| app_error("无法获取配置目录"))?;
            Ok(config_dir.join("app-preferences"))
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            let home = dirs::home_dir().ok_or_else(|| app_error("无法获取用户主目录"))?;
            Ok(home.join(".app-preferences"))
        }
    }

    /// 确保所有必要的目录存在
    fn ensure_directories_exist(&self) -> AppResult<()> {
        for dir in [&self.app_data_dir, &self.config_dir, &self.storage_dir] {
            if !dir.exists() {
                let context = format!("无法创建目录 {}", dir.display());
                std::fs::create_dir_all(dir).map_err(app_error_with_context(&context))?;
            }
        }
        Ok(())
    }

    /// 获取应用程序数据目录路径
    pub fn app_data_dir(&self) -> &Path {
        &self.app_data_dir
    }

    /// 获取配置目录路径
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// 获取主配置文件路径
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(crate::config::CONFIG_FILE_NAME)
    }

    /// 获取偏好存储目录路径
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_app_data_dir_creates_layout() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_app_data_dir(temp_dir.path()).unwrap();

        assert!(paths.config_dir().exists());
        assert!(paths.storage_dir().exists());
        assert_eq!(
            paths.config_file(),
            temp_dir
                .path()
                .join(crate::config::CONFIG_DIR_NAME)
                .join(crate::config::CONFIG_FILE_NAME)
        );
    }
}
