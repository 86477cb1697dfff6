//! # Animator 模块
//!
//! 帧动画器核心：维护当前帧并按固定间隔推进。
//!
//! ## 推进模型
//!
//! ```text
//! tick(now):
//!     elapsed = now - last_frame_time
//!     if elapsed >= FRAME_INTERVAL_MS:
//!         advance_frame()
//!         last_frame_time = now - (elapsed % FRAME_INTERVAL_MS)
//! ```
//!
//! 单次 `if` 而非 `while`：一次 tick 最多推进一帧，错过多个间隔
//! 时不补帧。相位保留式的重置避免了跳帧 tick 的累积漂移。

use std::rc::Rc;

use crate::scheduler::TimestampMs;
use crate::sprite;
use crate::surface::SpriteSurface;

/// 帧动画器
///
/// 持有表面元素的引用并独占使用它。构造后立即显示第 0 帧，
/// 之后由 [`tick`](Self::tick) 按时间推进。
///
/// ## 不变量
///
/// - `current_frame` 始终落在 `0..TOTAL_FRAMES`
/// - 表面元素显示的图源始终对应 `current_frame`
/// - 每次 tick 最多推进一帧
pub struct FrameAnimator {
    /// 表面元素（外部拥有）
    surface: Rc<dyn SpriteSurface>,
    /// 当前帧索引
    current_frame: u32,
    /// 上一次帧推进的时间戳
    last_frame_time: TimestampMs,
}

impl std::fmt::Debug for FrameAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameAnimator")
            .field("current_frame", &self.current_frame)
            .field("last_frame_time", &self.last_frame_time)
            .finish()
    }
}

impl FrameAnimator {
    /// 创建新的帧动画器
    ///
    /// 立即把表面图源设为第 0 帧。
    ///
    /// # 参数
    /// - `surface`: 已解析好的表面元素
    pub fn new(surface: Rc<dyn SpriteSurface>) -> Self {
        let animator = Self {
            surface,
            current_frame: 0,
            last_frame_time: 0.0,
        };
        animator.update_display();
        animator
    }

    /// 当前帧索引
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// 推进到下一帧
    ///
    /// 帧索引模 `TOTAL_FRAMES` 回绕，随后刷新显示。
    pub fn advance_frame(&mut self) {
        self.current_frame = (self.current_frame + 1) % sprite::TOTAL_FRAMES;
        self.update_display();
    }

    /// 把表面图源刷新为当前帧
    pub fn update_display(&self) {
        self.surface.set_image_source(&sprite::frame_source(self.current_frame));
    }

    /// 记录帧起点时间
    ///
    /// 由驱动器在循环启动时调用，之后的 tick 以此为基准计算流逝。
    pub fn mark_frame_origin(&mut self, now: TimestampMs) {
        self.last_frame_time = now;
    }

    /// 按时间推进动画
    ///
    /// 流逝时间不足一个间隔时什么都不做。达到间隔时推进一帧并做
    /// 相位保留式重置（见模块文档）。
    ///
    /// # 返回
    /// - `true`: 本次 tick 推进了一帧
    /// - `false`: 未到推进时机
    pub fn tick(&mut self, now: TimestampMs) -> bool {
        let elapsed = now - self.last_frame_time;
        if elapsed >= sprite::FRAME_INTERVAL_MS {
            self.advance_frame();
            self.last_frame_time = now - (elapsed % sprite::FRAME_INTERVAL_MS);
            true
        } else {
            false
        }
    }
}
