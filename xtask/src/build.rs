use std::path::PathBuf;

use clap::Parser;

use crate::{
    cmd_util::Cmd,
    variables::{TARGET_ARCH, USER_TARGET_DIR},
};

/// 构建用户程序
#[derive(Parser)]
pub struct BuildArgs {
    /// 以 debug 模式构建，默认 release
    #[clap(long)]
    debug: bool,
    /// 用户程序的日志级别，输出到 stderr
    #[clap(long, default_value_t = String::from("NONE"))]
    log: String,
}

impl BuildArgs {
    pub fn build(&self) -> anyhow::Result<()> {
        println!("Building user apps...");
        Cmd::parse("cargo build --package user")
            .args(["--target", TARGET_ARCH])
            .args(["--target-dir", USER_TARGET_DIR])
            .optional_arg((!self.debug).then_some("--release"))
            .env("USER_LOG", &self.log)
            .invoke()
    }

    pub fn elf_path(&self, bin: &str) -> PathBuf {
        let profile = if self.debug { "debug" } else { "release" };
        PathBuf::from(format!("{USER_TARGET_DIR}/{TARGET_ARCH}/{profile}/{bin}"))
    }
}
