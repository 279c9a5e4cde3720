use std::env;

fn main() {
    println!("cargo::rerun-if-changed=src/linker.ld");
    println!("cargo::rerun-if-env-changed=USER_LOG");

    // 只有交叉编译到 riscv 时才使用自己的链接脚本
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("riscv64") {
        let crate_dir = env!("CARGO_MANIFEST_DIR");
        println!("cargo::rustc-link-arg=-T{crate_dir}/src/linker.ld");
    }
}
