use core::panic::PanicInfo;

use defines::config::PANIC_EXIT_CODE;

use crate::sys_exit;

#[panic_handler]
fn panic_handler(info: &PanicInfo<'_>) -> ! {
    if let Some(location) = info.location() {
        eprintln!(
            "Panicked at {}:{}, {}",
            location.file(),
            location.line(),
            info.message()
        );
    } else {
        eprintln!("Panicked: {}", info.message());
    }
    // 控制台锁可能正被持有，不刷新缓冲区直接退出
    sys_exit(PANIC_EXIT_CODE);
}
