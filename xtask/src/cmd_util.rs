use std::{
    ffi::OsStr,
    fmt,
    process::{self, ExitStatus, Output, Stdio},
};

use anyhow::{bail, Context};

/// `process::Command` 的薄包装，失败时报告完整命令行
pub struct Cmd(process::Command);

impl Cmd {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self(process::Command::new(program))
    }

    /// 按空白切分的命令行，只用于写死的字面量
    pub fn parse(cmd_line: &str) -> Self {
        let mut words = cmd_line.split_whitespace();
        let program = words.next().expect("empty command line");
        let mut cmd = Self::new(program);
        cmd.args(words);
        cmd
    }

    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.0.arg(s);
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.0.args(args);
        self
    }

    pub fn optional_arg(&mut self, option: Option<impl AsRef<OsStr>>) -> &mut Self {
        if let Some(arg) = option {
            self.0.arg(arg);
        }
        self
    }

    pub fn env(&mut self, key: impl AsRef<OsStr>, val: impl AsRef<OsStr>) -> &mut Self {
        self.0.env(key, val);
        self
    }

    pub fn stdout(&mut self, cfg: impl Into<Stdio>) -> &mut Self {
        self.0.stdout(cfg);
        self
    }

    /// 继承终端运行，不检查退出码
    pub fn status(&mut self) -> anyhow::Result<ExitStatus> {
        self.0
            .status()
            .with_context(|| format!("failed to spawn `{self}`"))
    }

    /// 运行并要求成功退出
    pub fn invoke(&mut self) -> anyhow::Result<()> {
        let status = self.status()?;
        check(status, self)
    }

    /// 捕获输出，不检查退出码。stdin 关闭，避免子进程等待输入
    pub fn try_output(&mut self) -> anyhow::Result<Output> {
        self.0
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to spawn `{self}`"))
    }

    /// 捕获输出并要求成功退出
    pub fn output(&mut self) -> anyhow::Result<Output> {
        let output = self.try_output()?;
        check(output.status, self)?;
        Ok(output)
    }
}

fn check(status: ExitStatus, cmd: &Cmd) -> anyhow::Result<()> {
    match status.code() {
        Some(0) => Ok(()),
        Some(code) => bail!("`{cmd}` exited with code {code}"),
        None => bail!("`{cmd}` was killed by a signal"),
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let envs = self.0.get_envs().filter_map(|(k, v)| Some((k, v?)));
        for (key, val) in envs {
            write!(f, "{}={} ", key.to_string_lossy(), val.to_string_lossy())?;
        }
        write!(f, "{}", self.0.get_program().to_string_lossy())?;
        for arg in self.0.get_args() {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
