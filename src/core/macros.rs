//! 核心宏定义
//!
//! 提供统一的宏来减少配置与集合类型的样板代码

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use particle_engine::impl_default;
///
/// struct ReclaimSettings {
///     interval: f32,
///     enabled: bool,
/// }
///
/// impl_default!(ReclaimSettings {
///     interval: 0.0,
///     enabled: true,
/// });
///
/// assert!(ReclaimSettings::default().enabled);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

/// 同时实现Default和new()的宏
///
/// 使用示例:
/// ```rust
/// use particle_engine::impl_default_and_new;
///
/// struct FrameCounter {
///     frames: u64,
/// }
///
/// impl_default_and_new!(FrameCounter {
///     frames: 0,
/// });
///
/// assert_eq!(FrameCounter::new().frames, 0);
/// ```
#[macro_export]
macro_rules! impl_default_and_new {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }

        impl $struct_name {
            pub fn new() -> Self {
                Self::default()
            }
        }
    };
}

#[cfg(test)]
mod tests {

    struct ReleaseCounter {
        released: u64,
        label: String,
    }

    impl_default_and_new!(ReleaseCounter {
        released: 0,
        label: String::from("sparks"),
    });

    #[test]
    fn test_impl_default_and_new() {
        let a = ReleaseCounter::default();
        let b = ReleaseCounter::new();

        assert_eq!(a.released, 0);
        assert_eq!(a.label, "sparks");
        assert_eq!(b.released, 0);
        assert_eq!(b.label, "sparks");
    }
}
