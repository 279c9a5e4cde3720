use std::{path::Path, process};

use clap::Parser;

use crate::{
    build::BuildArgs,
    cmd_util::Cmd,
    variables::{GDB_PORT, QEMU},
};

/// 使用 QEMU 用户态模拟运行 echo，`--` 之后的参数原样传给它
#[derive(Parser)]
pub struct QemuArgs {
    #[clap(flatten)]
    build: BuildArgs,
    #[clap(long)]
    skip_build: bool,
    /// 如果开启，QEMU 会阻塞并等待 GDB 连接
    #[clap(long)]
    gdb: bool,
    /// 传给 echo 的参数
    #[clap(last = true)]
    args: Vec<String>,
}

impl QemuArgs {
    #[allow(clippy::exit)]
    pub fn run(self) -> anyhow::Result<()> {
        if !self.skip_build {
            self.build.build()?;
        }

        println!("Running qemu...");
        let status = Self::base_qemu(self.build.elf_path("echo"), self.gdb)
            .args(&self.args)
            .status()?;
        // 把 echo 的退出码原样交给调用者
        process::exit(status.code().unwrap_or(1));
    }

    /// `qemu-riscv64 [-g PORT] ELF`，程序参数由调用者追加
    pub fn base_qemu(elf: impl AsRef<Path>, gdb: bool) -> Cmd {
        let mut cmd = Cmd::new(QEMU);
        if gdb {
            cmd.args(["-g", &GDB_PORT.to_string()]);
        }
        cmd.arg(elf.as_ref());
        cmd
    }
}
