/*!
 * 界面偏好存储演示程序
 *
 * 从配置文件启动偏好存储，依次执行各个动作并打印结果快照
 */

use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

use preferences_lib::config::ConfigPaths;
use preferences_lib::document::VirtualDocument;
use preferences_lib::setup::{initialize, HostBindings};
use preferences_lib::signals::VirtualFullscreen;
use preferences_lib::{ColorMode, LayoutToggle, StoreEvent, TransitionAnimation};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎨 界面偏好存储演示程序");
    println!("========================");

    // 创建临时目录用于演示
    let temp_dir = TempDir::new()?;
    let paths = ConfigPaths::with_app_data_dir(temp_dir.path())?;
    tokio::fs::write(
        paths.config_file(),
        "[reload]\ndefault_delay_ms = 300\n\n[logging]\nlevel = \"debug\"\n",
    )
    .await?;
    println!("📁 数据目录: {:?}", temp_dir.path());

    let document = Arc::new(VirtualDocument::new());
    let store = initialize(
        &paths,
        HostBindings {
            document: document.clone(),
            fullscreen: Arc::new(VirtualFullscreen::new()),
        },
    )
    .await?;

    let mut events = store.subscribe();

    println!("\n🖌️ 设置主题色...");
    store.set_primary_color("#2080f0")?;
    let theme = store.theme();
    println!("  hover:   {:?}", theme.get_str("common.primaryColorHover"));
    println!("  pressed: {:?}", theme.get_str("common.primaryColorPressed"));

    println!("\n🧭 布局与动画...");
    store.toggle_collapse();
    store.toggle_layout(LayoutToggle::Watermark);
    store.set_transition_animation(TransitionAnimation::ZoomFade);
    store.set_theme_token("common.borderRadius", json!("4px"))?;

    println!("\n♿ 无障碍模式...");
    store.toggle_gray_mode();
    store.toggle_color_weak();
    println!("  根节点 class: {:?}", document.class_list());

    println!("\n🌗 配色方案...");
    store.set_color_mode(ColorMode::Dark);
    println!("  偏好: {}, 生效: {}", store.store_color_mode(), store.color_mode());

    println!("\n🖥️ 全屏...");
    store.toggle_full_screen().await?;
    println!("  全屏: {}", store.full_screen());

    println!("\n🔄 重载页面...");
    if let Some(handle) = store.reload_page_default().await {
        println!("  loadFlag (重载中): {}", store.load_flag());
        handle.await?;
    }
    println!("  loadFlag (完成): {}", store.load_flag());

    println!("\n📸 当前快照:");
    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);

    println!("\n♻️ 重置所有偏好...");
    store.reset_all_theme()?;
    println!("  主题色: {}", store.primary_color());
    println!("  根节点 class: {:?}", document.class_list());

    let mut updates = 0;
    while let Ok(event) = events.try_recv() {
        if let StoreEvent::Updated { .. } = event {
            updates += 1;
        }
    }
    println!("\n📨 共收到 {updates} 个更新事件");

    println!("\n✅ 演示完成");
    Ok(())
}
