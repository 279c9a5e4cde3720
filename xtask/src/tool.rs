use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tap::Tap;

use crate::{
    build::BuildArgs,
    cmd_util::Cmd,
    variables::{TARGET_ARCH, USER_TARGET_DIR},
};

/// 生成 echo 或指定 ELF 的汇编
#[derive(Parser)]
pub struct AsmArgs {
    #[clap(flatten)]
    build: BuildArgs,
    /// ELF 路径，如果未指定则使用 echo 的路径
    #[clap(short, long)]
    path: Option<PathBuf>,
    #[clap(long)]
    skip_build: bool,
}

impl AsmArgs {
    pub fn dump(self) -> anyhow::Result<()> {
        if !self.skip_build {
            self.build.build()?;
        }
        let elf_path = self.path.unwrap_or_else(|| self.build.elf_path("echo"));
        let output = Cmd::parse("rust-objdump --arch-name=riscv64 -g")
            .args([
                "--source",
                "--demangle",
                "--line-numbers",
                "--file-headers",
                "--symbolize-operands",
                "--print-imm-hex",
                "--no-show-raw-insn",
            ])
            .args(["--section", ".text"])
            .args(["--section", ".rodata"])
            .args(["--section", ".data"])
            .args(["--section", ".bss"])
            .args([&elf_path])
            .tap(|cmd| println!("Invoking {cmd}"))
            .output()?;
        let asm_path = elf_path.with_extension("S");
        fs::write(&asm_path, output.stdout)
            .with_context(|| format!("failed to write {}", asm_path.display()))?;
        println!("Asm generated at {}", asm_path.display());
        Ok(())
    }
}

/// 工具链由 rust-toolchain.toml 固定，这里只补上 cargo-binutils
pub fn prepare_env() -> anyhow::Result<()> {
    Cmd::parse(&format!("rustup target add {TARGET_ARCH}")).invoke()?;
    Cmd::parse("rustup component add llvm-tools").invoke()?;
    Cmd::parse("cargo install cargo-binutils").invoke()
}

pub fn clean() -> anyhow::Result<()> {
    Cmd::parse("cargo clean").invoke()?;
    Cmd::parse("cargo clean")
        .args(["--target-dir", USER_TARGET_DIR])
        .invoke()
}

pub fn lint() -> anyhow::Result<()> {
    Cmd::parse("cargo clippy --package user")
        .args(["--target", TARGET_ARCH])
        .args(["--target-dir", USER_TARGET_DIR])
        .invoke()?;
    Cmd::parse("cargo clippy --all-targets")
        .args(["--package", "echo_loop"])
        .args(["--package", "defines"])
        .args(["--package", "line_buffer"])
        .args(["--package", "xtask"])
        .invoke()
}
