/// 标准输入输出的文件描述符
pub const STDOUT: i32 = 1;
pub const STDERR: i32 = 2;

/// 用户态控制台缓冲区大小，遇到换行或写满时刷新
pub const CONSOLE_BUFFER_SIZE: usize = 256 * 10;

/// RISC-V psABI 要求函数调用时栈指针 16 字节对齐
pub const STACK_ALIGN: usize = 16;

/// 进程因 panic 退出时的退出码
pub const PANIC_EXIT_CODE: i32 = -1;
