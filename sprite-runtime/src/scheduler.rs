//! # Scheduler 模块
//!
//! 重绘调度能力的接口定义。
//!
//! ## 核心概念
//!
//! - `RedrawScheduler`: 宿主提供的连续重绘调度器，每次显示刷新派发一次回调
//! - `CallbackHandle`: 待派发回调的不透明句柄
//! - `ManualScheduler`: 确定性实现，由宿主显式泵入每一帧
//!
//! ## 设计说明
//!
//! Runtime 不拥有时钟。真实时间由宿主推进，Runtime 只在回调里
//! 收到单调递增的时间戳。这样动画逻辑可以用任意时间序列驱动，
//! 测试无需真实等待。

use std::cell::RefCell;

/// 单调高精度时间戳（毫秒）
pub type TimestampMs = f64;

/// 一次性重绘回调，参数为当前时间戳
pub type RedrawCallback = Box<dyn FnOnce(TimestampMs)>;

/// 待派发回调的句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(pub u64);

impl CallbackHandle {
    /// 创建新的回调句柄
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// 获取内部 ID 值
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// 重绘调度器接口
///
/// 宿主实现此 trait 提供三项能力：注册一次性回调、取消待派发的
/// 注册、读取单调时钟。回调大致对齐下一次显示刷新，只派发一次；
/// 持续动画通过回调内部重新注册实现。
pub trait RedrawScheduler {
    /// 注册一次性重绘回调
    ///
    /// # 返回
    /// 本次注册的句柄，可用于取消
    fn schedule(&self, callback: RedrawCallback) -> CallbackHandle;

    /// 取消待派发的注册
    ///
    /// 已派发或未知的句柄被忽略（no-op）。
    fn cancel(&self, handle: CallbackHandle);

    /// 读取单调时钟
    fn now(&self) -> TimestampMs;
}

/// 调度器内部状态
struct SchedulerInner {
    /// 当前时钟值
    now: TimestampMs,
    /// 下一个句柄 ID
    next_handle: u64,
    /// 待派发的回调（按注册顺序）
    pending: Vec<(CallbackHandle, RedrawCallback)>,
    /// 本帧派发期间被取消的句柄（墓碑）
    cancelled: Vec<CallbackHandle>,
}

/// 确定性重绘调度器
///
/// 回调按注册顺序入队，宿主调用 [`run_frame`](Self::run_frame) 时
/// 统一派发。派发期间新注册的回调留到下一帧，符合"每次刷新
/// 只派发一次"的语义。
///
/// 同时服务两类宿主：测试用任意时间戳序列泵帧，无头宿主用
/// 墙钟节拍泵帧。
pub struct ManualScheduler {
    inner: RefCell<SchedulerInner>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.pending.len())
            .finish()
    }
}

impl ManualScheduler {
    /// 创建新的调度器，时钟从 0 开始
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(SchedulerInner {
                now: 0.0,
                next_handle: 1,
                pending: Vec::new(),
                cancelled: Vec::new(),
            }),
        }
    }

    /// 当前待派发的回调数量
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// 推进时钟并派发本帧回调
    ///
    /// 只派发调用时已注册的回调，按注册顺序逐个调用。回调内部
    /// 重新注册的回调排到下一帧。
    ///
    /// # 参数
    /// - `now`: 本帧的时间戳，必须单调不减
    pub fn run_frame(&self, now: TimestampMs) {
        let batch = {
            let mut inner = self.inner.borrow_mut();
            inner.now = now;
            std::mem::take(&mut inner.pending)
        };

        for (handle, callback) in batch {
            // 同一帧内靠前的回调可能取消靠后的回调
            let skipped = {
                let mut inner = self.inner.borrow_mut();
                let pos = inner.cancelled.iter().position(|h| *h == handle);
                match pos {
                    Some(pos) => {
                        let _ = inner.cancelled.swap_remove(pos);
                        true
                    }
                    None => false,
                }
            };
            if !skipped {
                callback(now);
            }
        }

        // 对已派发句柄的迟到取消只在本帧内有意义
        self.inner.borrow_mut().cancelled.clear();
    }
}

impl RedrawScheduler for ManualScheduler {
    fn schedule(&self, callback: RedrawCallback) -> CallbackHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = CallbackHandle::new(inner.next_handle);
        inner.next_handle += 1;
        inner.pending.push((handle, callback));
        handle
    }

    fn cancel(&self, handle: CallbackHandle) {
        let mut inner = self.inner.borrow_mut();
        let pos = inner.pending.iter().position(|(h, _)| *h == handle);
        match pos {
            Some(pos) => {
                let _ = inner.pending.remove(pos);
            }
            None => inner.cancelled.push(handle),
        }
    }

    fn now(&self) -> TimestampMs {
        self.inner.borrow().now
    }
}
