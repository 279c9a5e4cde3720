//! 控制台用的定长行缓冲
//!
//! 真正的写操作由调用者以 `FnMut(fd, buf) -> KResult<usize>` 的形式传入，
//! 用户态传系统调用，测试里传假的写函数。

#![cfg_attr(not(test), no_std)]

use defines::error::{errno, KResult};
use heapless::Vec;

/// 写完整个 `buf`。被信号打断时重试，写入 0 字节视为 I/O 错误
pub fn write_all<W>(write: &mut W, fd: i32, mut buf: &[u8]) -> KResult<usize>
where
    W: FnMut(i32, &[u8]) -> KResult<usize>,
{
    let total = buf.len();
    while !buf.is_empty() {
        match write(fd, buf) {
            Ok(0) => return Err(errno::EIO),
            Ok(n) => buf = &buf[n..],
            Err(errno::EINTR) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(total)
}

/// 遇到 `\n` 或写满时刷新到 `fd`
pub struct LineBuffer<const N: usize> {
    fd: i32,
    buf: Vec<u8, N>,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new(fd: i32) -> Self {
        Self {
            fd,
            buf: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// 无论成功与否，缓冲区都会被清空
    pub fn flush<W>(&mut self, write: &mut W) -> KResult<usize>
    where
        W: FnMut(i32, &[u8]) -> KResult<usize>,
    {
        let ret = write_all(write, self.fd, &self.buf);
        self.buf.clear();
        ret
    }

    pub fn push_bytes<W>(&mut self, bytes: &[u8], write: &mut W) -> KResult<()>
    where
        W: FnMut(i32, &[u8]) -> KResult<usize>,
    {
        for &byte in bytes {
            // 写满就刷新，所以这里总有空位
            let _ = self.buf.push(byte);
            if byte == b'\n' || self.buf.is_full() {
                self.flush(write)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, vec::Vec};

    use defines::error::Error;

    use super::*;

    /// 按预设的结果逐次应答，预设用完后整块写入
    #[derive(Default)]
    struct FakeWriter {
        replies: VecDeque<KResult<usize>>,
        written: Vec<u8>,
        chunks: Vec<Vec<u8>>,
        calls: usize,
    }

    impl FakeWriter {
        fn with_replies(replies: impl IntoIterator<Item = KResult<usize>>) -> Self {
            Self {
                replies: replies.into_iter().collect(),
                ..Self::default()
            }
        }

        fn write(&mut self, fd: i32, buf: &[u8]) -> KResult<usize> {
            assert_eq!(fd, 1);
            self.calls += 1;
            let n = match self.replies.pop_front() {
                Some(Ok(n)) => n.min(buf.len()),
                Some(Err(err)) => return Err(err),
                None => buf.len(),
            };
            self.written.extend_from_slice(&buf[..n]);
            self.chunks.push(buf[..n].to_vec());
            Ok(n)
        }
    }

    fn write_all_with(fake: &mut FakeWriter, buf: &[u8]) -> KResult<usize> {
        write_all(&mut |fd, buf| fake.write(fd, buf), 1, buf)
    }

    #[test]
    fn short_writes_are_retried() {
        let mut fake = FakeWriter::with_replies((0..5).map(|_| Ok(1)));
        assert_eq!(write_all_with(&mut fake, b"hello\n"), Ok(6));
        assert_eq!(fake.written, b"hello\n");
        // 5 次各写 1 字节，最后一次写完剩下的 "\n"
        assert_eq!(fake.calls, 6);
    }

    #[test]
    fn interrupted_write_is_retried() {
        let mut fake = FakeWriter::with_replies([Err(errno::EINTR), Ok(2), Err(errno::EINTR)]);
        assert_eq!(write_all_with(&mut fake, b"abcd"), Ok(4));
        assert_eq!(fake.written, b"abcd");
        assert_eq!(fake.calls, 4);
    }

    #[test]
    fn zero_byte_write_is_eio() {
        let mut fake = FakeWriter::with_replies([Ok(1), Ok(0)]);
        assert_eq!(write_all_with(&mut fake, b"abc"), Err(errno::EIO));
        assert_eq!(fake.written, b"a");
    }

    #[test]
    fn other_errors_propagate() {
        let mut fake = FakeWriter::with_replies([Err(errno::ENOSPC)]);
        assert_eq!(write_all_with(&mut fake, b"abc"), Err(errno::ENOSPC));
        assert_eq!(fake.calls, 1);
    }

    #[test]
    fn empty_write_skips_syscall() {
        let mut fake = FakeWriter::default();
        assert_eq!(write_all_with(&mut fake, b""), Ok(0));
        assert_eq!(fake.calls, 0);
    }

    #[test]
    fn flushes_on_newline() {
        let mut fake = FakeWriter::default();
        let mut buf = LineBuffer::<16>::new(1);
        buf.push_bytes(b"ab\ncd", &mut |fd, b| fake.write(fd, b))
            .unwrap();
        assert_eq!(fake.chunks, [b"ab\n".to_vec()]);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn flushes_exactly_when_full() {
        let mut fake = FakeWriter::default();
        let mut buf = LineBuffer::<4>::new(1);
        buf.push_bytes(b"abcdefghij", &mut |fd, b| fake.write(fd, b))
            .unwrap();
        assert_eq!(fake.chunks, [b"abcd".to_vec(), b"efgh".to_vec()]);
        assert_eq!(buf.len(), 2);

        buf.flush(&mut |fd, b| fake.write(fd, b)).unwrap();
        assert_eq!(fake.written, b"abcdefghij");
        assert!(buf.is_empty());
    }

    #[test]
    fn failed_flush_clears_buffer() {
        let mut fake = FakeWriter::with_replies([Err(errno::ENOSPC)]);
        let mut buf = LineBuffer::<16>::new(1);
        let err: Error = buf
            .push_bytes(b"lost\n", &mut |fd, b| fake.write(fd, b))
            .unwrap_err();
        assert_eq!(err, errno::ENOSPC);
        assert!(buf.is_empty());

        // 之后的输出不受影响
        buf.push_bytes(b"kept\n", &mut |fd, b| fake.write(fd, b))
            .unwrap();
        assert_eq!(fake.written, b"kept\n");
    }

    #[test]
    fn failure_stops_midway() {
        let mut fake = FakeWriter::with_replies([Ok(4), Err(errno::EPIPE)]);
        let mut buf = LineBuffer::<16>::new(1);
        let ret = buf.push_bytes(b"one\ntwo\nthree\n", &mut |fd, b| fake.write(fd, b));
        assert_eq!(ret, Err(errno::EPIPE));
        // 第一行写完，第二行失败后剩余字节不再进入缓冲
        assert_eq!(fake.written, b"one\n");
        assert!(buf.is_empty());
    }
}
