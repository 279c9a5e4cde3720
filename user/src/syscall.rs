use defines::syscall::{EXIT, WRITE};

#[inline(always)]
pub fn syscall3(id: usize, args: [usize; 3]) -> isize {
    let mut ret: isize;
    unsafe {
        core::arch::asm!(
            "ecall",
            inlateout("x10") args[0] => ret,
            in("x11") args[1],
            in("x12") args[2],
            in("x17") id
        );
    }
    ret
}

pub fn sys_write(fd: i32, buffer: *const u8, len: usize) -> isize {
    syscall3(WRITE, [fd as usize, buffer as usize, len])
}

pub fn sys_exit(exit_code: i32) -> ! {
    syscall3(EXIT, [exit_code as usize, 0, 0]);
    unreachable!("sys_exit never returns!");
}
