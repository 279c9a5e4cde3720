#![no_std]
#![feature(linkage)]

#[macro_use]
pub mod console;
mod lang_items;
mod logger;
mod syscall;

use defines::{config::STACK_ALIGN, error::KResult};
use echo_loop::RawArgs;

pub use self::console::{flush, Stdout};
pub use self::syscall::*;

core::arch::global_asm!(include_str!("entry.S"), align = const STACK_ALIGN);

/// 由 `_start` 跳转而来，此时栈已经对齐
#[no_mangle]
extern "C" fn __user_start(sp: *const usize) -> ! {
    logger::init();
    // SAFETY: 按 Linux 的进程启动约定，`sp` 处依次是 argc、argv[0..argc]、NULL，
    // 且在进程存活期间不会被修改
    let args = unsafe {
        let argc = sp.read();
        RawArgs::new(argc, sp.add(1).cast())
    };
    log::trace!("process started with argc = {}", args.remaining());
    exit(main(args));
}

#[linkage = "weak"]
#[no_mangle]
fn main(_args: RawArgs<'static>) -> i32 {
    panic!("Cannot find main!");
}

pub fn write(fd: i32, buf: &[u8]) -> KResult<usize> {
    defines::error::Error::from_ret(sys_write(fd, buf.as_ptr(), buf.len()))
}

pub fn exit(exit_code: i32) -> ! {
    if let Err(err) = console::flush() {
        log::warn!("failed to flush stdout before exit: {err}");
    }
    sys_exit(exit_code);
}
