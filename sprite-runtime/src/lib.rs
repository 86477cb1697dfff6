//! # Sprite Runtime
//!
//! 奔跑猫装饰动画的核心运行时库。
//!
//! ## 架构概述
//!
//! `sprite-runtime` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它通过两个能力接口与宿主层（Host）通信：
//!
//! ```text
//! Host                             Runtime
//!   │                                 │
//!   │──── run_frame(now) ───────────►│ RedrawScheduler 派发 tick
//!   │                                 │ tick(now)
//!   │◄─── set_image_source(path) ────│ SpriteSurface
//!   │                                 │
//! ```
//!
//! 宿主拥有时钟和显示：它按自己的刷新节拍泵调度器，Runtime 在
//! tick 里决定是否推进帧，并通过表面接口把图源切到当前帧。
//!
//! ## 核心类型
//!
//! - [`FrameAnimator`]：帧动画器（状态 + 推进逻辑）
//! - [`AnimationLoop`]：自我续期的循环驱动器（run / stop）
//! - [`RedrawScheduler`]：宿主提供的重绘调度能力
//! - [`SpriteSurface`] / [`SurfaceHost`]：宿主提供的视觉表面能力
//! - [`mount_cat`]：顶层组装入口
//!
//! ## 使用示例
//!
//! ```ignore
//! use sprite_runtime::{mount_cat, ManualScheduler};
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let animation = mount_cat(&my_host, scheduler.clone())?;
//!
//! // 宿主主循环：每次显示刷新泵一帧
//! loop {
//!     let now = next_refresh();
//!     scheduler.run_frame(now);
//! }
//!
//! // 宿主销毁路径
//! animation.stop();
//! ```
//!
//! ## 模块结构
//!
//! - [`animator`]：帧动画器核心
//! - [`driver`]：动画循环驱动器
//! - [`scheduler`]：重绘调度能力接口
//! - [`surface`]：视觉表面能力接口
//! - [`sprite`]：精灵图固定配置
//! - [`mount`]：顶层组装
//! - [`error`]：错误类型定义

pub mod animator;
pub mod driver;
pub mod error;
pub mod mount;
pub mod scheduler;
pub mod sprite;
pub mod surface;

// 重导出核心类型
pub use animator::FrameAnimator;
pub use driver::{AnimationLoop, LoopState};
pub use error::{AnimError, AnimResult};
pub use mount::{CAT_CONTAINER_ID, CAT_ICON_CLASS, CatAnimation, mount_cat};
pub use scheduler::{CallbackHandle, ManualScheduler, RedrawCallback, RedrawScheduler, TimestampMs};
pub use surface::{SpriteSurface, SurfaceHost};
