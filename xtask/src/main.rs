mod build;
mod cmd_util;
mod etest;
mod qemu;
mod tool;
mod variables;

use build::BuildArgs;
use clap::{Parser, Subcommand};
use etest::EtestArgs;
use qemu::QemuArgs;
use tool::AsmArgs;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build(BuildArgs),
    Asm(AsmArgs),
    Clean,
    Lint,
    Qemu(QemuArgs),
    Etest(EtestArgs),
    Env,
}

fn main() -> anyhow::Result<()> {
    use Commands::*;
    match Cli::parse().command {
        Build(args) => args.build(),
        Asm(args) => args.dump(),
        Clean => tool::clean(),
        Lint => tool::lint(),
        Qemu(args) => args.run(),
        Etest(args) => args.run_test(),
        Env => tool::prepare_env(),
    }
}
