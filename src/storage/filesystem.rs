/*!
 * 文件键值存储
 *
 * 每个键对应目录下的一个 `<key>.json` 文件。写入采用"临时文件 + 重命名"的原子方式，
 * 覆盖前保留一份 `.backup`，写入成功后删除；若主文件缺失而备份仍在，读取时回退到备份。
 */

use super::{validate_key, PersistStorage, StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 存储文件扩展名
const ITEM_EXTENSION: &str = "json";

/// 文件存储选项
#[derive(Debug, Clone)]
pub struct FileStorageOptions {
    /// 覆盖前是否创建备份
    pub backup_enabled: bool,
    /// 文件权限（Unix系统）
    pub file_permissions: Option<u32>,
}

impl Default for FileStorageOptions {
    fn default() -> Self {
        Self {
            backup_enabled: true,
            file_permissions: Some(0o644),
        }
    }
}

/// 文件存储
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
    options: FileStorageOptions,
}

impl FileStorage {
    /// 创建文件存储，目录不存在时创建
    pub fn new(directory: impl Into<PathBuf>) -> StorageResult<Self> {
        Self::with_options(directory, FileStorageOptions::default())
    }

    pub fn with_options(
        directory: impl Into<PathBuf>,
        options: FileStorageOptions,
    ) -> StorageResult<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)
            .map_err(|e| StorageError::io("creating storage directory", Some(directory.clone()), e))?;
        debug!("文件存储目录: {}", directory.display());
        Ok(Self { directory, options })
    }

    pub fn options(&self) -> &FileStorageOptions {
        &self.options
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// 键对应的文件路径
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.{}", key, ITEM_EXTENSION))
    }

    fn backup_path(path: &Path) -> PathBuf {
        path.with_extension(format!("{}.backup", ITEM_EXTENSION))
    }

    fn temp_path(path: &Path) -> PathBuf {
        path.with_extension(format!("{}.tmp.{}", ITEM_EXTENSION, std::process::id()))
    }

    fn read_optional(path: &Path) -> StorageResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io("reading item", Some(path.to_path_buf()), e)),
        }
    }

    /// 原子写入
    fn atomic_write(&self, path: &Path, content: &str) -> StorageResult<()> {
        let temp_path = Self::temp_path(path);

        fs::write(&temp_path, content)
            .map_err(|e| StorageError::io("writing temp file", Some(temp_path.clone()), e))?;

        #[cfg(unix)]
        if let Some(permissions) = self.options.file_permissions {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(permissions);
            fs::set_permissions(&temp_path, perms).map_err(|e| {
                StorageError::io("setting file permissions", Some(temp_path.clone()), e)
            })?;
        }

        let backup_path = if self.options.backup_enabled && path.exists() {
            let backup = Self::backup_path(path);
            match fs::copy(path, &backup) {
                Ok(_) => Some(backup),
                Err(e) => {
                    warn!("创建备份失败: {} - {}", path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::io("renaming temp file", Some(path.to_path_buf()), e));
        }

        if let Some(backup) = backup_path {
            let _ = fs::remove_file(&backup);
        }

        Ok(())
    }
}

impl PersistStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let path = self.item_path(key);

        if let Some(content) = Self::read_optional(&path)? {
            return Ok(Some(content));
        }

        let backup = Self::read_optional(&Self::backup_path(&path))?;
        if backup.is_some() {
            warn!("存储文件缺失，使用备份: {}", path.display());
        }
        Ok(backup)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let path = self.item_path(key);
        self.atomic_write(&path, value)?;
        debug!("已写入存储项: {}", key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        let path = self.item_path(key);
        for target in [path.clone(), Self::backup_path(&path)] {
            match fs::remove_file(&target) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(StorageError::io("removing item", Some(target), e)),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_and_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();

        assert_eq!(storage.get_item("app-store").unwrap(), None);

        storage.set_item("app-store", r#"{"collapsed":true}"#).unwrap();
        storage.set_item("app-store", r#"{"collapsed":false}"#).unwrap();

        assert_eq!(
            storage.get_item("app-store").unwrap().as_deref(),
            Some(r#"{"collapsed":false}"#)
        );
        // 写入成功后不应残留备份或临时文件
        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_falls_back_to_backup() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();
        let path = storage.item_path("app-store");
        fs::write(FileStorage::backup_path(&path), "\"dark\"").unwrap();

        assert_eq!(
            storage.get_item("app-store").unwrap().as_deref(),
            Some("\"dark\"")
        );

        storage.remove_item("app-store").unwrap();
        assert_eq!(storage.get_item("app-store").unwrap(), None);
    }

    #[test]
    fn test_nested_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested).unwrap();
        storage.set_item("color-scheme", "\"auto\"").unwrap();
        assert!(nested.join("color-scheme.json").exists());
    }
}
