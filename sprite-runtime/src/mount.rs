//! # Mount 模块
//!
//! 顶层组装入口：把猫动画挂到宿主页面上。
//!
//! 动画器本身不知道容器、样式类这些页面细节，也不碰任何无关的
//! 页面状态。页面级的接线全部集中在这里，宿主的初始化流程只
//! 需要调用一次 [`mount_cat`]。

use std::rc::Rc;

use tracing::{debug, warn};

use crate::animator::FrameAnimator;
use crate::driver::{AnimationLoop, LoopState};
use crate::error::{AnimError, AnimResult};
use crate::scheduler::RedrawScheduler;
use crate::surface::SurfaceHost;

/// 猫动画的容器标识
pub const CAT_CONTAINER_ID: &str = "cat-container";

/// 猫图片元素的样式类
pub const CAT_ICON_CLASS: &str = "cat-icon";

/// 已挂载的猫动画
///
/// 持有运行中的动画循环。宿主在自己的销毁路径（比如容器被移除
/// 时）调用 [`stop`](Self::stop) 释放调度器里的注册。
#[derive(Debug)]
pub struct CatAnimation {
    driver: AnimationLoop,
}

impl CatAnimation {
    /// 停止动画循环
    pub fn stop(&self) {
        self.driver.stop();
    }

    /// 重新启动动画循环（幂等）
    pub fn run(&self) {
        self.driver.run();
    }

    /// 当前循环状态
    pub fn state(&self) -> LoopState {
        self.driver.state()
    }

    /// 是否正在运行
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// 当前帧索引
    pub fn current_frame(&self) -> u32 {
        self.driver.current_frame()
    }
}

/// 挂载猫动画并立即启动循环
///
/// 通过宿主在 `cat-container` 内创建图片元素（初始显示第 0 帧），
/// 随后启动动画循环。
///
/// # 错误
///
/// 容器不存在时软失败：记录一条诊断日志并返回
/// [`AnimError::MissingContainer`]，不创建元素、不启动循环、
/// 不 panic。页面上动画只是不出现，没有其他可见影响。
pub fn mount_cat(
    host: &dyn SurfaceHost,
    scheduler: Rc<dyn RedrawScheduler>,
) -> AnimResult<CatAnimation> {
    let Some(surface) = host.create_sprite_element(CAT_CONTAINER_ID, CAT_ICON_CLASS) else {
        warn!(container = CAT_CONTAINER_ID, "容器不存在，猫动画未挂载");
        return Err(AnimError::MissingContainer {
            container: CAT_CONTAINER_ID.to_string(),
        });
    };

    let animator = FrameAnimator::new(surface);
    let driver = AnimationLoop::new(animator, scheduler);
    driver.run();

    debug!(container = CAT_CONTAINER_ID, "猫动画已挂载并启动");
    Ok(CatAnimation { driver })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::surface::SpriteSurface;
    use std::cell::RefCell;

    /// 记录所有图源变化的测试表面
    struct RecordingSurface {
        sources: RefCell<Vec<String>>,
    }

    impl SpriteSurface for RecordingSurface {
        fn set_image_source(&self, path: &str) {
            self.sources.borrow_mut().push(path.to_string());
        }
    }

    /// 记录创建请求的测试宿主
    struct TestHost {
        /// 容器是否存在
        has_container: bool,
        /// 收到的 (container_id, class_name) 请求
        requests: RefCell<Vec<(String, String)>>,
        /// 创建出的表面（容器存在时）
        surface: Rc<RecordingSurface>,
    }

    impl TestHost {
        fn new(has_container: bool) -> Self {
            Self {
                has_container,
                requests: RefCell::new(Vec::new()),
                surface: Rc::new(RecordingSurface {
                    sources: RefCell::new(Vec::new()),
                }),
            }
        }
    }

    impl SurfaceHost for TestHost {
        fn create_sprite_element(
            &self,
            container_id: &str,
            class_name: &str,
        ) -> Option<Rc<dyn SpriteSurface>> {
            self.requests
                .borrow_mut()
                .push((container_id.to_string(), class_name.to_string()));
            if self.has_container {
                Some(Rc::clone(&self.surface) as Rc<dyn SpriteSurface>)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_mount_creates_element_and_starts_loop() {
        let host = TestHost::new(true);
        let scheduler = Rc::new(ManualScheduler::new());

        let animation = mount_cat(&host, Rc::clone(&scheduler) as Rc<dyn RedrawScheduler>)
            .expect("挂载应成功");

        // 元素按约定的容器和样式类创建
        assert_eq!(
            *host.requests.borrow(),
            vec![("cat-container".to_string(), "cat-icon".to_string())]
        );

        // 初始显示第 0 帧，循环已启动
        assert_eq!(
            host.surface.sources.borrow().first().map(String::as_str),
            Some("./assets/cat/light_cat_running_0.ico")
        );
        assert!(animation.is_running());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_mount_missing_container_soft_fails() {
        let host = TestHost::new(false);
        let scheduler = Rc::new(ManualScheduler::new());

        let result = mount_cat(&host, Rc::clone(&scheduler) as Rc<dyn RedrawScheduler>);

        assert_eq!(
            result.unwrap_err(),
            AnimError::MissingContainer {
                container: "cat-container".to_string(),
            }
        );

        // 没有元素被创建，也没有循环被启动
        assert!(host.surface.sources.borrow().is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_mounted_animation_stop_and_restart() {
        let host = TestHost::new(true);
        let scheduler = Rc::new(ManualScheduler::new());

        let animation = mount_cat(&host, Rc::clone(&scheduler) as Rc<dyn RedrawScheduler>)
            .expect("挂载应成功");

        animation.stop();
        assert_eq!(animation.state(), LoopState::Idle);
        assert_eq!(scheduler.pending_count(), 0);

        animation.run();
        assert!(animation.is_running());
        assert_eq!(scheduler.pending_count(), 1);
    }
}
