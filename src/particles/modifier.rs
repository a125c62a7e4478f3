//! 修改器管线
//!
//! 修改器是无状态的逐粒子变换，按声明顺序依次作用于同一段粒子视图。
//! 后面的修改器能看到前面修改器在本帧写入的值。

use super::buffer::ParticleSlice;
use crate::impl_default_and_new;
use std::fmt;

/// 逐粒子修改器
///
/// 实现不得保存按粒子下标索引的状态：同一个修改器可能在多个线程上
/// 同时作用于互不重叠的分区。
pub trait Modifier: Send + Sync {
    /// 修改器名称，用于日志
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 更新视图中的每个粒子
    fn update(&self, elapsed_seconds: f32, particles: &mut ParticleSlice<'_>);
}

/// 有序的修改器集合
pub struct ModifierCollection {
    modifiers: Vec<Box<dyn Modifier>>,
}

impl_default_and_new!(ModifierCollection {
    modifiers: Vec::new(),
});

impl ModifierCollection {
    /// 追加修改器到末尾
    pub fn push<M: Modifier + 'static>(&mut self, modifier: M) {
        self.modifiers.push(Box::new(modifier));
    }

    /// 链式追加
    pub fn with<M: Modifier + 'static>(mut self, modifier: M) -> Self {
        self.push(modifier);
        self
    }

    /// 在指定位置插入
    ///
    /// # Panics
    ///
    /// `index > len` 时 panic。
    pub fn insert<M: Modifier + 'static>(&mut self, index: usize, modifier: M) {
        self.modifiers.insert(index, Box::new(modifier));
    }

    /// 移除指定位置的修改器
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Modifier>> {
        if index < self.modifiers.len() {
            Some(self.modifiers.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.modifiers.clear();
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Modifier> {
        self.modifiers.iter().map(|m| m.as_ref())
    }

    /// 按顺序对同一视图执行全部修改器
    pub fn run(&self, elapsed_seconds: f32, particles: &mut ParticleSlice<'_>) {
        for modifier in &self.modifiers {
            modifier.update(elapsed_seconds, particles);
        }
    }
}

impl fmt::Debug for ModifierCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.modifiers.iter().map(|m| m.name()))
            .finish()
    }
}
