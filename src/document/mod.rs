/*!
 * 文档根节点副作用边界
 *
 * 偏好存储对页面的全部副作用都经过 `DocumentRoot`：设置根节点 CSS 变量、
 * 切换根节点 class。宿主环境（WebView、浏览器绑定）实现该 trait，
 * 测试和无界面场景使用 `VirtualDocument`。
 */

use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// 主色 CSS 变量名
pub const PRIMARY_COLOR_VAR: &str = "--primary-color";

/// 色弱模式 class
pub const COLOR_WEAK_CLASS: &str = "color-weak";

/// 灰色模式 class
pub const GRAY_MODE_CLASS: &str = "gray-mode";

/// 文档根节点
///
/// 偏好存储在释放状态锁之后才调用这些方法，实现可以在其中读取存储。
pub trait DocumentRoot: Send + Sync {
    /// 设置根节点样式属性（CSS 变量）
    fn set_style_property(&self, name: &str, value: &str);

    /// 读取根节点样式属性
    fn style_property(&self, name: &str) -> Option<String>;

    /// 切换 class，存在则移除，不存在则添加
    fn toggle_class(&self, class: &str);

    /// 移除 class，不存在时无操作
    fn remove_class(&self, class: &str);

    /// 根节点是否包含 class
    fn contains_class(&self, class: &str) -> bool;

    /// 将 class 的存在状态设置为 `present`
    fn set_class(&self, class: &str, present: bool) {
        if self.contains_class(class) != present {
            self.toggle_class(class);
        }
    }
}

/// 内存中的文档根节点
#[derive(Debug, Default)]
pub struct VirtualDocument {
    classes: RwLock<BTreeSet<String>>,
    styles: RwLock<HashMap<String, String>>,
}

impl VirtualDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前所有 class，按字母序
    pub fn class_list(&self) -> Vec<String> {
        self.classes.read().iter().cloned().collect()
    }
}

impl DocumentRoot for VirtualDocument {
    fn set_style_property(&self, name: &str, value: &str) {
        debug!("设置根节点样式: {} = {}", name, value);
        self.styles
            .write()
            .insert(name.to_string(), value.to_string());
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.styles.read().get(name).cloned()
    }

    fn toggle_class(&self, class: &str) {
        let mut classes = self.classes.write();
        if !classes.remove(class) {
            classes.insert(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.write().remove(class);
    }

    fn contains_class(&self, class: &str) -> bool {
        self.classes.read().contains(class)
    }
}
