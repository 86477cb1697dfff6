//! # Sprite 模块
//!
//! 奔跑猫精灵图的固定配置：帧数、帧间隔和资源路径模板。
//!
//! 这些常量不对外开放配置，路径模板必须与资源目录中的文件名
//! 逐字符一致，否则宿主端加载不到对应的帧图片。

use crate::scheduler::TimestampMs;

/// 动画总帧数
pub const TOTAL_FRAMES: u32 = 5;

/// 帧推进的最小时间间隔（毫秒）
pub const FRAME_INTERVAL_MS: TimestampMs = 150.0;

/// 计算指定帧的图片资源路径
///
/// # 参数
/// - `frame`: 帧索引，有效范围 `0..TOTAL_FRAMES`
pub fn frame_source(frame: u32) -> String {
    debug_assert!(frame < TOTAL_FRAMES);
    format!("./assets/cat/light_cat_running_{frame}.ico")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_source_template() {
        // 路径模板对每一帧逐字符成立
        for frame in 0..TOTAL_FRAMES {
            assert_eq!(
                frame_source(frame),
                format!("./assets/cat/light_cat_running_{frame}.ico")
            );
        }
    }

    #[test]
    fn test_frame_zero_source() {
        assert_eq!(frame_source(0), "./assets/cat/light_cat_running_0.ico");
    }
}
