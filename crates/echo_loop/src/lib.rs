//! 参数回显循环
//!
//! 按顺序把参数向量中的每一项交给 [`PrintLine`]，每项一行。
//! 本 crate 不关心参数从哪里来，也不关心行最终写到哪里去。

#![cfg_attr(not(test), no_std)]

mod args;

use core::fmt;

pub use args::{ArgConvention, RawArgs};

/// 写一行并附带换行符的原语
pub trait PrintLine {
    type Error;

    /// 写出 `line`，随后写出一个 `\n`
    fn print_line(&mut self, line: &[u8]) -> Result<(), Self::Error>;
}

/// 第 `index` 个参数输出失败
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoError<E> {
    pub index: usize,
    pub source: E,
}

impl<E: fmt::Display> fmt::Display for EchoError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to echo argument #{}: {}", self.index, self.source)
    }
}

/// 依次输出 `args` 中的每一项，返回输出的行数
///
/// 先取元素再输出，因此空输入不会触发任何输出。
/// 第一次输出失败时立即返回，剩余参数不再输出。
pub fn echo<I, P>(args: I, out: &mut P) -> Result<usize, EchoError<P::Error>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
    P: PrintLine + ?Sized,
{
    let mut printed = 0;
    for arg in args {
        let line = arg.as_ref();
        log::trace!("echo #{printed}: {} bytes", line.len());
        out.print_line(line).map_err(|source| EchoError {
            index: printed,
            source,
        })?;
        printed += 1;
    }
    log::debug!("echoed {printed} line(s)");
    Ok(printed)
}
