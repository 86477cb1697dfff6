//! # Driver 模块
//!
//! 动画循环驱动器：把 [`FrameAnimator`] 和重绘调度器接在一起。
//!
//! ## 执行模型
//!
//! 这不是固定周期的定时器，而是自我续期的 tick 函数：每次显示
//! 刷新运行一次，内部用流逝的墙钟时间决定是否推进帧。有效帧率
//! 因此独立于（且上界为）显示刷新率。
//!
//! ```text
//! run():  取消旧注册 → 记录帧起点 → 注册 tick
//! tick(now):  animator.tick(now) → 无条件重新注册
//! stop():  取消待派发的注册 → 回到 Idle
//! ```
//!
//! ## 并发模型
//!
//! 单线程、协作式。循环对同一个驱动器最多持有一个待派发注册，
//! 调度器按注册顺序派发，所以 tick 全序且互不重叠。

use std::cell::RefCell;
use std::rc::Rc;

use crate::animator::FrameAnimator;
use crate::scheduler::{CallbackHandle, RedrawScheduler, TimestampMs};

/// 循环状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// 无待派发注册（初始状态，或 stop 之后）
    #[default]
    Idle,
    /// 有待派发注册，每次 tick 自我续期
    Running,
}

impl LoopState {
    /// 是否正在运行
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// 循环内部状态
struct LoopInner {
    /// 帧动画器
    animator: FrameAnimator,
    /// 重绘调度器
    scheduler: Rc<dyn RedrawScheduler>,
    /// 当前待派发的注册（最多一个）
    pending: Option<CallbackHandle>,
}

/// 动画循环驱动器
///
/// ## 不变量
///
/// 任意时刻最多持有一个待派发注册。`run()` 先取消旧注册再
/// 注册新回调，重复调用不会叠加动画速率。
pub struct AnimationLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl std::fmt::Debug for AnimationLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AnimationLoop")
            .field("animator", &inner.animator)
            .field("pending", &inner.pending)
            .finish()
    }
}

impl AnimationLoop {
    /// 创建新的驱动器（不自动启动）
    pub fn new(animator: FrameAnimator, scheduler: Rc<dyn RedrawScheduler>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoopInner {
                animator,
                scheduler,
                pending: None,
            })),
        }
    }

    /// 启动（或重启）动画循环
    ///
    /// 幂等：已有待派发注册时先取消，再把当前时刻记为帧起点并
    /// 注册 tick。重复调用后仍然只有一个待派发注册。
    pub fn run(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(handle) = inner.pending.take() {
                inner.scheduler.cancel(handle);
            }
            let now = inner.scheduler.now();
            inner.animator.mark_frame_origin(now);
        }
        Self::schedule_tick(&self.inner);
    }

    /// 停止动画循环
    ///
    /// 取消待派发的注册并回到 Idle。已是 Idle 时无效果。
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handle) = inner.pending.take() {
            inner.scheduler.cancel(handle);
        }
    }

    /// 当前循环状态
    pub fn state(&self) -> LoopState {
        if self.inner.borrow().pending.is_some() {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    /// 是否正在运行
    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// 当前帧索引
    pub fn current_frame(&self) -> u32 {
        self.inner.borrow().animator.current_frame()
    }

    /// 注册下一次 tick
    fn schedule_tick(inner: &Rc<RefCell<LoopInner>>) {
        let scheduler = Rc::clone(&inner.borrow().scheduler);
        let state = Rc::clone(inner);
        let handle = scheduler.schedule(Box::new(move |now| {
            Self::on_tick(&state, now);
        }));
        inner.borrow_mut().pending = Some(handle);
    }

    /// 单次 tick：推进动画并无条件续期
    fn on_tick(inner: &Rc<RefCell<LoopInner>>, now: TimestampMs) {
        {
            let mut state = inner.borrow_mut();
            state.pending = None;
            let _ = state.animator.tick(now);
        }
        Self::schedule_tick(inner);
    }
}
