use core::{
    ffi::{c_char, CStr},
    iter::FusedIterator,
    marker::PhantomData,
};

/// 参数个数是否包含 `argv[0]`（程序名）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgConvention {
    /// 原样使用 argc/argv
    WithProgramName,
    /// 跳过 `argv[0]`，只保留真正的参数
    #[default]
    PayloadOnly,
}

/// 原始参数向量上的游标
///
/// 每次 `next` 先检查剩余个数，再读取当前位置，最后前移并递减。
/// 只能消费一次，不可 `Clone`。
pub struct RawArgs<'a> {
    cursor: *const *const c_char,
    remaining: usize,
    _marker: PhantomData<&'a CStr>,
}

impl<'a> RawArgs<'a> {
    /// # Safety
    ///
    /// `argv` 起始的 `argc` 个指针都必须指向以 NUL 结尾、在 `'a` 内有效且不被修改的字符串。
    /// 本函数不做任何检查。
    pub const unsafe fn new(argc: usize, argv: *const *const c_char) -> Self {
        Self {
            cursor: argv,
            remaining: argc,
            _marker: PhantomData,
        }
    }

    /// 按约定调整起点。argc 为 0 时不会下溢
    #[must_use]
    pub fn with_convention(mut self, convention: ArgConvention) -> Self {
        if convention == ArgConvention::PayloadOnly && self.remaining > 0 {
            self.cursor = self.cursor.wrapping_add(1);
            self.remaining -= 1;
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a> Iterator for RawArgs<'a> {
    type Item = &'a CStr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `new` 的调用者保证还剩 `remaining` 个有效指针
        let arg = unsafe { CStr::from_ptr(self.cursor.read()) };
        self.cursor = self.cursor.wrapping_add(1);
        self.remaining -= 1;
        Some(arg)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RawArgs<'_> {}

impl FusedIterator for RawArgs<'_> {}
