//! 修改器执行策略
//!
//! 决定一帧内修改器管线如何映射到活跃粒子区间：
//!
//! ```text
//! Sequential:  [=========== m1 ===========][=========== m2 ===========]
//!
//! Parallel:    worker 0: [== m1 ==][== m2 ==]
//!              worker 1: [== m1 ==][== m2 ==]
//!              worker 2: [== m1 ==][== m2 ==]
//!                                            ^ join
//! ```
//!
//! 并行模式下每个工作线程对自己的分区按顺序执行完整的修改器列表。
//! 分区互不重叠且恰好覆盖 `[0, tail)`，因此不存在数据竞争。
//!
//! 工作线程是每帧在 `thread::scope` 内创建的作用域线程，数量不超过 `workers`，
//! 调用线程自己处理最后一个分区并在返回前等待其余线程。不维护常驻线程池：
//! 修改器可以借用帧内数据，不需要 `'static`。

use super::buffer::ParticleSlice;
use super::modifier::ModifierCollection;
use std::thread;

/// 执行策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierExecutionStrategy {
    /// 单次遍历，所有修改器依次作用于整个区间
    Sequential,
    /// 按工作线程数拆分区间并行执行，`workers == 0` 表示使用 CPU 核心数
    Parallel { workers: usize },
}

impl Default for ModifierExecutionStrategy {
    fn default() -> Self {
        Self::Parallel { workers: 0 }
    }
}

impl ModifierExecutionStrategy {
    /// 使用 CPU 核心数的并行策略
    pub fn parallel() -> Self {
        Self::Parallel { workers: 0 }
    }

    /// 实际使用的工作线程数
    pub fn worker_count(&self) -> usize {
        match *self {
            Self::Sequential => 1,
            Self::Parallel { workers: 0 } => num_cpus::get().max(1),
            Self::Parallel { workers } => workers,
        }
    }

    /// 对视图执行修改器管线
    ///
    /// 每个粒子恰好被每个修改器处理一次。空管线或空视图直接返回。
    pub fn execute(
        &self,
        modifiers: &ModifierCollection,
        elapsed_seconds: f32,
        mut particles: ParticleSlice<'_>,
    ) {
        if modifiers.is_empty() || particles.is_empty() {
            return;
        }

        match self {
            Self::Sequential => modifiers.run(elapsed_seconds, &mut particles),
            Self::Parallel { .. } => {
                let partitions = particles.partition(self.worker_count());
                if partitions.len() == 1 {
                    for mut partition in partitions {
                        modifiers.run(elapsed_seconds, &mut partition);
                    }
                    return;
                }

                tracing::trace!(
                    target: "particles",
                    "Running {} modifiers across {} partitions",
                    modifiers.len(),
                    partitions.len()
                );

                // scope 结束时等待所有工作线程完成
                thread::scope(|scope| {
                    let mut partitions = partitions;
                    let local = partitions.pop();
                    for mut partition in partitions {
                        scope.spawn(move || modifiers.run(elapsed_seconds, &mut partition));
                    }
                    if let Some(mut partition) = local {
                        modifiers.run(elapsed_seconds, &mut partition);
                    }
                });
            }
        }
    }
}
