use core::fmt::{self, Write};

use defines::{
    config::{CONSOLE_BUFFER_SIZE, STDERR, STDOUT},
    error::{Error, KResult},
};
use echo_loop::PrintLine;
use line_buffer::{write_all, LineBuffer};
use spin::Mutex;

use super::write;

static STDOUT_BUFFER: Mutex<LineBuffer<CONSOLE_BUFFER_SIZE>> =
    Mutex::new(LineBuffer::new(STDOUT));

/// 标准输出上的行输出原语
pub struct Stdout;

impl PrintLine for Stdout {
    type Error = Error;

    fn print_line(&mut self, line: &[u8]) -> KResult<()> {
        let mut buf = STDOUT_BUFFER.lock();
        buf.push_bytes(line, &mut write)?;
        buf.push_bytes(b"\n", &mut write)
    }
}

/// 标准错误不经缓冲
struct Stderr;

impl Write for Stderr {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_all(&mut write, STDERR, s.as_bytes())
            .map(drop)
            .or(Err(fmt::Error))
    }
}

/// 日志和 panic 信息都走这里，不能触发 panic
pub fn eprint(args: fmt::Arguments<'_>) {
    Stderr.write_fmt(args).ok();
}

#[macro_export]
macro_rules! eprintln {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console::eprint(format_args!(concat!($fmt, "\n") $(, $($arg)+)?));
    }
}

pub fn flush() -> KResult<usize> {
    STDOUT_BUFFER.lock().flush(&mut write)
}
