use core::fmt;

/// 系统调用返回的错误码，总是负数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error(core::ffi::c_int);

impl Error {
    #[inline]
    pub fn as_isize(self) -> isize {
        self.0 as isize
    }

    /// 把系统调用的原始返回值拆成结果
    #[inline]
    pub fn from_ret(ret: isize) -> KResult<usize> {
        if ret < 0 {
            Err(Error(ret as core::ffi::c_int))
        } else {
            Ok(ret as usize)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(errno::error_info(self.as_isize()))
    }
}

pub type KResult<T = isize> = core::result::Result<T, Error>;

pub mod errno {
    macro_rules! declare_errno {
        ($($name:tt, $errno:literal, $desc:literal,)*) => {
            $(#[doc = $desc]
            pub const $name: super::Error = super::Error($errno);)*
            pub fn error_info(errno: isize) -> &'static str {
                match errno {
                    $($errno => ::core::concat!(stringify!($name), ", ", stringify!($desc)),)*
                    _ => "Unknown error",
                }
            }
        };
    }

    #[rustfmt::skip]
    declare_errno!(
        EPERM,          -1,     "Operation not permitted.",
        EINTR,          -4,     "Interrupted system call.",
        EIO,            -5,     "I/O error.",
        EBADF,          -9,     "Bad file number.",
        EAGAIN,         -11,    "Try again.",
        EFAULT,         -14,    "Bad address.",
        EINVAL,         -22,    "Invalid argument.",
        EFBIG,          -27,    "File too large.",
        ENOSPC,         -28,    "No space left on device.",
        EPIPE,          -32,    "Broken pipe.",
    );
}
