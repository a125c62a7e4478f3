//! SoA (Structure of Arrays) 粒子缓冲区
//!
//! 每个粒子字段独立存放在一个定长数组中，活跃粒子始终占据前缀 `[0, tail)`：
//!
//! ```text
//!  index:     0   1   2   3   4   5   6   7
//!  x:       [ a | b | c | d | . | . | . | . ]
//!  y:       [ a | b | c | d | . | . | . | . ]
//!  ...                      ^
//!                          tail
//! ```
//!
//! - `release` 在尾部追加，O(1)
//! - `reclaim` 移除最旧的 k 个粒子，每列整体前移，O(n)
//!
//! 粒子没有身份，只有列下标。除回收导致的前移外，粒子从不重排。

use crate::core::error::{ParticleError, ParticleResult};
use glam::{Vec2, Vec3};
use std::mem;

/// 粒子字段数量
pub const FIELD_COUNT: usize = 13;

/// 粒子字段（列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleField {
    X,
    Y,
    VX,
    VY,
    Inception,
    Age,
    R,
    G,
    B,
    Opacity,
    Scale,
    Rotation,
    Mass,
}

impl ParticleField {
    /// 所有字段，按存储顺序
    pub const ALL: [ParticleField; FIELD_COUNT] = [
        ParticleField::X,
        ParticleField::Y,
        ParticleField::VX,
        ParticleField::VY,
        ParticleField::Inception,
        ParticleField::Age,
        ParticleField::R,
        ParticleField::G,
        ParticleField::B,
        ParticleField::Opacity,
        ParticleField::Scale,
        ParticleField::Rotation,
        ParticleField::Mass,
    ];

    /// 渲染拷贝时的字段顺序
    pub const RENDER_ORDER: [ParticleField; 11] = [
        ParticleField::Age,
        ParticleField::X,
        ParticleField::Y,
        ParticleField::R,
        ParticleField::G,
        ParticleField::B,
        ParticleField::Opacity,
        ParticleField::Scale,
        ParticleField::Rotation,
        ParticleField::VX,
        ParticleField::VY,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// 单个粒子的值快照
///
/// 缓冲区内部并不以这种形式存储，仅用于读取和调试。
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    /// 位置
    pub position: Vec2,
    /// 速度
    pub velocity: Vec2,
    /// 诞生时刻（模拟时钟，秒）
    pub inception: f32,
    /// 归一化年龄（0 = 刚诞生，1 = 寿命耗尽）
    pub age: f32,
    /// 颜色
    pub color: Vec3,
    /// 不透明度
    pub opacity: f32,
    /// 缩放
    pub scale: f32,
    /// 旋转（弧度）
    pub rotation: f32,
    /// 质量
    pub mass: f32,
}

impl Particle {
    /// 单个粒子占用的字节数
    pub const SIZE_IN_BYTES: usize = mem::size_of::<Particle>();
}

/// 活跃粒子区间的可变视图
///
/// 每个字段是同一区间上的一段切片，长度一致。视图可以在任意位置拆分为两个
/// 不重叠的视图，这是并行执行修改器的基础。
#[derive(Debug)]
pub struct ParticleSlice<'a> {
    pub x: &'a mut [f32],
    pub y: &'a mut [f32],
    pub vx: &'a mut [f32],
    pub vy: &'a mut [f32],
    pub inception: &'a mut [f32],
    pub age: &'a mut [f32],
    pub r: &'a mut [f32],
    pub g: &'a mut [f32],
    pub b: &'a mut [f32],
    pub opacity: &'a mut [f32],
    pub scale: &'a mut [f32],
    pub rotation: &'a mut [f32],
    pub mass: &'a mut [f32],
}

/// 在同一位置拆分视图的每一列
macro_rules! split_columns {
    ($slice:expr, $mid:expr; $($field:ident),+ $(,)?) => {{
        let slice = $slice;
        let mid = $mid;
        $(let $field = slice.$field.split_at_mut(mid);)+
        (
            ParticleSlice { $($field: $field.0),+ },
            ParticleSlice { $($field: $field.1),+ },
        )
    }};
}

impl<'a> ParticleSlice<'a> {
    /// 视图中的粒子数
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// 在 `mid` 处拆分为 `[0, mid)` 与 `[mid, len)`
    ///
    /// # Panics
    ///
    /// `mid > len` 时 panic，与 `slice::split_at_mut` 一致。
    pub fn split_at(self, mid: usize) -> (ParticleSlice<'a>, ParticleSlice<'a>) {
        split_columns!(self, mid;
            x, y, vx, vy, inception, age, r, g, b, opacity, scale, rotation, mass)
    }

    /// 拆分为最多 `parts` 个连续、互不重叠且覆盖全部粒子的分区
    ///
    /// 空视图返回单个空分区。
    pub fn partition(self, parts: usize) -> Vec<ParticleSlice<'a>> {
        let len = self.len();
        let parts = parts.clamp(1, len.max(1));
        let chunk = len.div_ceil(parts);

        let mut partitions = Vec::with_capacity(parts);
        let mut rest = self;
        while rest.len() > chunk {
            let (head, tail) = rest.split_at(chunk);
            partitions.push(head);
            rest = tail;
        }
        partitions.push(rest);
        partitions
    }
}

/// 固定容量的 SoA 粒子缓冲区
#[derive(Debug)]
pub struct ParticleBuffer {
    /// 各字段的列，长度均为 `capacity`
    columns: [Vec<f32>; FIELD_COUNT],
    capacity: usize,
    tail: usize,
    disposed: bool,
}

impl ParticleBuffer {
    /// 创建固定容量的缓冲区，容量必须大于零
    pub fn new(capacity: usize) -> ParticleResult<Self> {
        if capacity == 0 {
            return Err(ParticleError::InvalidCapacity);
        }

        Ok(Self {
            columns: std::array::from_fn(|_| vec![0.0; capacity]),
            capacity,
            tail: 0,
            disposed: false,
        })
    }

    /// 构造时固定的容量
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 活跃粒子数
    #[inline]
    pub fn active_count(&self) -> usize {
        self.tail
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail == 0
    }

    /// 剩余可分配的槽位，已释放的缓冲区返回 0
    #[inline]
    pub fn available(&self) -> usize {
        if self.disposed {
            0
        } else {
            self.capacity - self.tail
        }
    }

    /// 全部列占用的字节数
    pub fn size_in_bytes(&self) -> usize {
        self.capacity * Particle::SIZE_IN_BYTES
    }

    /// 在尾部分配最多 `requested` 个粒子
    ///
    /// 返回 `(起始下标, 实际数量)`。容量不足时静默截断，新槽位的字段不做初始化。
    pub fn release(&mut self, requested: usize) -> (usize, usize) {
        let start = self.tail;
        let count = requested.min(self.available());

        if count < requested {
            tracing::trace!(
                target: "particles",
                "Release truncated: requested {}, available {}",
                requested,
                count
            );
        }

        self.tail += count;
        (start, count)
    }

    /// 移除最旧的 `count` 个粒子
    ///
    /// `[count, tail)` 整体前移到 `[0, tail - count)`，相对顺序不变。
    /// `count` 超过活跃数时按活跃数处理。
    pub fn reclaim(&mut self, count: usize) {
        debug_assert!(count <= self.tail, "reclaim count exceeds active particles");
        let count = count.min(self.tail);
        if count == 0 {
            return;
        }

        let tail = self.tail;
        for column in &mut self.columns {
            column.copy_within(count..tail, 0);
        }
        self.tail -= count;
    }

    /// 清空所有活跃粒子
    pub fn reset(&mut self) {
        self.tail = 0;
    }

    /// 某字段的活跃前缀
    #[inline]
    pub fn column(&self, field: ParticleField) -> &[f32] {
        &self.columns[field.index()][..self.tail]
    }

    /// 某字段活跃前缀的可变切片
    #[inline]
    pub fn column_mut(&mut self, field: ParticleField) -> &mut [f32] {
        &mut self.columns[field.index()][..self.tail]
    }

    /// 活跃前缀的可变视图
    pub fn slice_mut(&mut self) -> ParticleSlice<'_> {
        let tail = self.tail;
        let [x, y, vx, vy, inception, age, r, g, b, opacity, scale, rotation, mass] =
            &mut self.columns;

        ParticleSlice {
            x: &mut x[..tail],
            y: &mut y[..tail],
            vx: &mut vx[..tail],
            vy: &mut vy[..tail],
            inception: &mut inception[..tail],
            age: &mut age[..tail],
            r: &mut r[..tail],
            g: &mut g[..tail],
            b: &mut b[..tail],
            opacity: &mut opacity[..tail],
            scale: &mut scale[..tail],
            rotation: &mut rotation[..tail],
            mass: &mut mass[..tail],
        }
    }

    /// 读取单个活跃粒子的快照
    pub fn get(&self, index: usize) -> Option<Particle> {
        if index >= self.tail {
            return None;
        }
        let at = |field: ParticleField| self.columns[field.index()][index];

        Some(Particle {
            position: Vec2::new(at(ParticleField::X), at(ParticleField::Y)),
            velocity: Vec2::new(at(ParticleField::VX), at(ParticleField::VY)),
            inception: at(ParticleField::Inception),
            age: at(ParticleField::Age),
            color: Vec3::new(
                at(ParticleField::R),
                at(ParticleField::G),
                at(ParticleField::B),
            ),
            opacity: at(ParticleField::Opacity),
            scale: at(ParticleField::Scale),
            rotation: at(ParticleField::Rotation),
            mass: at(ParticleField::Mass),
        })
    }

    /// 拷贝到目标内存所需的元素数
    pub fn render_len(&self) -> usize {
        self.tail * ParticleField::RENDER_ORDER.len()
    }

    /// 按 [`ParticleField::RENDER_ORDER`] 逐字段拷贝活跃前缀
    ///
    /// 每个字段写入 `active_count()` 个元素，返回写入的元素总数。
    pub fn copy_to(&self, dst: &mut [f32]) -> ParticleResult<usize> {
        let required = self.render_len();
        if dst.len() < required {
            return Err(ParticleError::DestinationTooSmall {
                required,
                actual: dst.len(),
            });
        }

        for (chunk, field) in dst[..required]
            .chunks_exact_mut(self.tail.max(1))
            .zip(ParticleField::RENDER_ORDER)
        {
            chunk.copy_from_slice(self.column(field));
        }
        Ok(required)
    }

    /// 与 [`copy_to`](Self::copy_to) 相同的布局，写入原始字节（供 GPU 上传使用）
    ///
    /// 返回写入的字节数。
    pub fn copy_to_bytes(&self, dst: &mut [u8]) -> ParticleResult<usize> {
        let field_bytes = self.tail * mem::size_of::<f32>();
        let required = field_bytes * ParticleField::RENDER_ORDER.len();
        if dst.len() < required {
            return Err(ParticleError::DestinationTooSmall {
                required,
                actual: dst.len(),
            });
        }

        for (chunk, field) in dst[..required]
            .chunks_exact_mut(field_bytes.max(1))
            .zip(ParticleField::RENDER_ORDER)
        {
            chunk.copy_from_slice(bytemuck::cast_slice(self.column(field)));
        }
        Ok(required)
    }

    /// 释放列的底层内存
    ///
    /// 可重复调用；之后缓冲区为空且不再接受分配。
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.tail = 0;
        for column in &mut self.columns {
            *column = Vec::new();
        }
        tracing::debug!(
            target: "particles",
            "Particle buffer disposed (capacity {})",
            self.capacity
        );
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
