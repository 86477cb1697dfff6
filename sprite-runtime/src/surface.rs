//! # Surface 模块
//!
//! 视觉表面能力的接口定义。
//!
//! ## 核心概念
//!
//! - `SpriteSurface`: 动画器控制的图片元素（只改图源，不管布局）
//! - `SurfaceHost`: 元素来源（查找容器、创建并插入图片元素）
//!
//! ## 设计说明
//!
//! 动画器只依赖"已解析好的表面元素"，元素从哪里来（查找现成的
//! 还是新建一个）完全由宿主决定。两种获取方式对动画逻辑没有
//! 任何区别，所以不进入组件本身。

use std::rc::Rc;

/// 精灵表面元素
///
/// 动画器对它独占使用但不拥有：元素的生命周期归宿主管理，
/// 动画器只负责把图源切到当前帧。
pub trait SpriteSurface {
    /// 设置图片资源路径
    fn set_image_source(&self, path: &str);
}

/// 表面宿主
///
/// 负责把动画挂到页面结构上：解析容器、创建图片元素、打上
/// 样式类、插入为容器的子节点。
pub trait SurfaceHost {
    /// 在指定容器内创建精灵图片元素
    ///
    /// # 参数
    /// - `container_id`: 容器标识
    /// - `class_name`: 元素的样式类
    ///
    /// # 返回
    /// - `Some(surface)`: 元素已创建并插入容器
    /// - `None`: 容器不存在，未创建任何元素
    fn create_sprite_element(
        &self,
        container_id: &str,
        class_name: &str,
    ) -> Option<Rc<dyn SpriteSurface>>;
}
