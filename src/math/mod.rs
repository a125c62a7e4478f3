//! 快速数值原语
//!
//! - [`FastRand`]: 可注入种子的线性同余随机数生成器
//! - [`fast_math`]: 近似三角函数

pub mod fast_math;
pub mod fast_rand;

pub use fast_rand::FastRand;
