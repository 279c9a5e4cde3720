#![no_std]
#![no_main]

use core::ffi::CStr;

use echo_loop::{ArgConvention, RawArgs};
use user::Stdout;

/// 逐行输出除程序名以外的所有参数
#[no_mangle]
pub fn main(args: RawArgs<'static>) -> i32 {
    let args = args.with_convention(ArgConvention::PayloadOnly);
    log::debug!("echo {} argument(s)", args.remaining());
    match echo_loop::echo(args.map(CStr::to_bytes), &mut Stdout) {
        Ok(_) => 0,
        Err(err) => {
            log::error!("{err}");
            1
        }
    }
}
