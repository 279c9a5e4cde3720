pub const TARGET_ARCH: &str = "riscv64imac-unknown-none-elf";
/// 用户程序单独使用一个 target 目录，避免和 host 上的构建互相覆盖
pub const USER_TARGET_DIR: &str = "user/target";
/// QEMU 用户态模拟器
pub const QEMU: &str = "qemu-riscv64";
pub const GDB_PORT: u16 = 1234;
