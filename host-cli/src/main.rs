//! # Host CLI
//!
//! 无头宿主：用终端日志展示奔跑猫动画。
//!
//! 实现两个宿主能力：表面是一条结构化日志（帧切换时打印资源
//! 路径），调度器由墙钟节拍泵入（约 60Hz）。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p host-cli           # 默认运行 3 秒
//! cargo run -p host-cli -- 10     # 运行 10 秒
//! ```

use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use sprite_runtime::{ManualScheduler, RedrawScheduler, SpriteSurface, SurfaceHost, mount_cat};
use tracing::info;

/// 显示刷新周期（约 60Hz）
const REFRESH_INTERVAL: Duration = Duration::from_millis(16);

/// 把帧切换打到日志的表面
struct TerminalSurface;

impl SpriteSurface for TerminalSurface {
    fn set_image_source(&self, path: &str) {
        info!(path, "帧切换");
    }
}

/// 终端宿主：容器总是存在
struct TerminalHost;

impl SurfaceHost for TerminalHost {
    fn create_sprite_element(
        &self,
        container_id: &str,
        class_name: &str,
    ) -> Option<Rc<dyn SpriteSurface>> {
        info!(container_id, class_name, "创建精灵元素");
        Some(Rc::new(TerminalSurface))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let seconds: u64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()
        .context("运行时长必须是整数秒")?
        .unwrap_or(3);

    let scheduler = Rc::new(ManualScheduler::new());
    let animation = mount_cat(&TerminalHost, Rc::clone(&scheduler) as Rc<dyn RedrawScheduler>)?;

    // 以墙钟节拍泵调度器，模拟显示刷新
    let start = Instant::now();
    let deadline = Duration::from_secs(seconds);
    while start.elapsed() < deadline {
        thread::sleep(REFRESH_INTERVAL);
        let now = start.elapsed().as_secs_f64() * 1000.0;
        scheduler.run_frame(now);
    }

    animation.stop();
    info!(final_frame = animation.current_frame(), "动画已停止");
    Ok(())
}
