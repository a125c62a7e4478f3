//! 核心模块
//!
//! 包含引擎的公共基础设施：
//! - `error` - 错误类型定义
//! - `logging` - 日志初始化
//! - `macros` - 样板代码宏

pub mod error;
pub mod logging;
#[macro_use]
pub mod macros;

pub use error::{ParticleError, ParticleResult};
pub use logging::init_logging;
