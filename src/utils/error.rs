/*!
 * 错误处理模块
 *
 * 基于 anyhow 的应用层错误处理：配置加载、启动装配等流程统一返回 `AppResult`，
 * 领域内的可恢复错误（颜色解析、存储）则由各模块的 thiserror 枚举描述。
 */

use anyhow::{anyhow, Result as AnyhowResult};

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 创建简单的应用程序错误
pub fn app_error(msg: impl Into<String>) -> anyhow::Error {
    anyhow!(msg.into())
}

/// 创建带上下文的错误转换函数
///
/// 返回一个闭包，可以将任何实现了 Display + Debug + Send + Sync 的错误
/// 转换为带有指定上下文信息的应用错误。
pub fn app_error_with_context<T>(msg: &str) -> impl FnOnce(T) -> anyhow::Error + '_
where
    T: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    move |err| anyhow!("{}: {}", msg, err)
}

/// 快速创建错误并返回
#[macro_export]
macro_rules! app_bail {
    ($msg:literal $(,)?) => {
        return Err(anyhow::anyhow!($msg))
    };
    ($err:expr $(,)?) => {
        return Err(anyhow::anyhow!($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err(anyhow::anyhow!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bail_on_empty(value: &str) -> AppResult<usize> {
        if value.is_empty() {
            crate::app_bail!("值不能为空");
        }
        Ok(value.len())
    }

    #[test]
    fn test_app_bail_returns_error() {
        assert!(bail_on_empty("").is_err());
        assert_eq!(bail_on_empty("abc").unwrap(), 3);
    }

    #[test]
    fn test_error_with_context() {
        let err = app_error_with_context::<std::io::Error>("读取存储失败")(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "读取存储失败: missing");
        assert_eq!(app_error("x").to_string(), "x");
    }
}
