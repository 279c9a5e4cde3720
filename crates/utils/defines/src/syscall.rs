//! Linux RISC-V 的系统调用号，只列出用户程序实际用到的

macro_rules! declare_syscall_id {
    ($($name:tt, $id:literal,)*) => {
        $(pub const $name: usize = $id;)*
    };
}

#[rustfmt::skip]
declare_syscall_id!(
    WRITE,              64,
    EXIT,               93,
);
