use std::{fs::File, iter};

use anyhow::{bail, Context};
use clap::Parser;

use crate::{build::BuildArgs, qemu::QemuArgs};

/// 在 QEMU 中运行 echo，逐字节比对输出
#[derive(Parser)]
pub struct EtestArgs {
    #[clap(flatten)]
    build: BuildArgs,
    #[clap(long)]
    skip_build: bool,
}

struct Case {
    name: &'static str,
    args: Vec<String>,
    /// 把 stdout 重定向到 /dev/full，期望 echo 报错退出
    full_stdout: bool,
}

impl Case {
    fn new(name: &'static str, args: &[&str]) -> Self {
        Self {
            name,
            args: args.iter().map(|&s| s.to_owned()).collect(),
            full_stdout: false,
        }
    }

    fn expected_stdout(&self) -> Vec<u8> {
        self.args
            .iter()
            .flat_map(|arg| arg.bytes().chain(iter::once(b'\n')))
            .collect()
    }

    fn expected_code(&self) -> i32 {
        i32::from(self.full_stdout && !self.args.is_empty())
    }
}

fn cases() -> Vec<Case> {
    vec![
        Case::new("no_args", &[]),
        Case::new("single", &["x"]),
        Case::new("three", &["alpha", "beta", "gamma"]),
        Case::new("blank_and_spaces", &["", "hello world", "  padded  ", ""]),
        Case::new("utf8", &["中文", "ñandú", "emoji 🦀"]),
        Case::new("looks_like_flags", &["-n", "-e", "--", "\\n"]),
        Case {
            name: "many",
            args: (0..500).map(|i| format!("arg-{i}")).collect(),
            full_stdout: false,
        },
        // 超过控制台缓冲区，迫使中途刷新
        Case {
            name: "long_line",
            args: vec!["y".repeat(8000)],
            full_stdout: false,
        },
        Case {
            name: "stdout_full",
            args: vec!["alpha".to_owned(), "beta".to_owned()],
            full_stdout: true,
        },
        Case {
            name: "stdout_full_no_args",
            args: Vec::new(),
            full_stdout: true,
        },
    ]
}

impl EtestArgs {
    pub fn run_test(self) -> anyhow::Result<()> {
        if !self.skip_build {
            self.build.build()?;
        }
        let elf = self.build.elf_path("echo");

        println!("Running qemu...");
        let mut passed = Vec::new();
        let mut failed = Vec::new();
        for case in cases() {
            let mut cmd = QemuArgs::base_qemu(&elf, false);
            cmd.args(&case.args);
            if case.full_stdout {
                cmd.stdout(File::options().write(true).open("/dev/full")?);
            }
            let output = cmd
                .try_output()
                .with_context(|| format!("case {}", case.name))?;

            let code = output.status.code();
            let stdout_ok = case.full_stdout || output.stdout == case.expected_stdout();
            if stdout_ok && code == Some(case.expected_code()) {
                passed.push(case.name);
            } else {
                println!("---- {} ----", case.name);
                println!("exit code: {code:?}, expected {}", case.expected_code());
                println!("stdout:\n{}", String::from_utf8_lossy(&output.stdout));
                println!("stderr:\n{}", String::from_utf8_lossy(&output.stderr));
                failed.push(case.name);
            }
        }

        println!("Passed tests:");
        for name in &passed {
            println!("    etest {name}");
        }
        println!("Failed tests:");
        for name in &failed {
            println!("    etest {name}");
        }
        if !failed.is_empty() {
            bail!("{} of {} etest(s) failed", failed.len(), passed.len() + failed.len());
        }
        Ok(())
    }
}
