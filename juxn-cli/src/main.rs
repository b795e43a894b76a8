//! Simple Uxn runner: load a ROM, run it against the minimal system and
//! console devices, and report how it stopped.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, trace, warn};

use juxn_core::{mnemonic, DevicePage, Memory, RunOutcome, Uxn, UxnRam};
use juxn_devices::{Console, System};

/// Uxn runner
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// ROM to load and execute
    rom: PathBuf,

    /// Maximum number of instructions to execute before giving up
    #[clap(long, default_value_t = 1_000_000)]
    budget: u64,

    /// Logs one line per executed instruction (opcode mnemonic and PC) at
    /// `trace` level
    #[clap(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("JUXN_LOG", "info")
        .write_style_or("JUXN_LOG", "always");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let rom = read_rom(&args.rom)?;

    let mut ram = UxnRam::new();
    let mut system = System::new();
    let mut console = Console::new();
    let mut devices = DevicePage::new();
    devices.register(0x0, &mut system);
    devices.register(0x1, &mut console);

    let mut vm = Uxn::new(Memory::new(&mut ram), devices);
    let overflow = vm.reset(&rom);
    if !overflow.is_empty() {
        anyhow::bail!(
            "ROM is {} bytes too large; at most {} bytes fit from 0x100",
            rom.len(),
            0x10000 - 0x100,
        );
    }

    let outcome = if args.trace {
        run_traced(&mut vm, args.budget)
    } else {
        vm.run(args.budget)
    };
    report(outcome);

    Ok(())
}

fn read_rom(path: &Path) -> Result<Vec<u8>> {
    let mut f =
        std::fs::File::open(path).with_context(|| format!("failed to open {path:?}"))?;
    let mut rom = vec![];
    f.read_to_end(&mut rom).context("failed to read ROM")?;
    Ok(rom)
}

/// Runs one instruction at a time, logging its mnemonic and PC at `trace`
/// level before executing it, until `budget` is spent or the VM halts.
fn run_traced(vm: &mut Uxn<'_>, budget: u64) -> RunOutcome {
    for _ in 0..budget {
        if vm.is_halted() {
            break;
        }
        let pc = vm.pc();
        let opcode = vm.memory().read_byte(pc);
        trace!("{pc:#06x}: {}", mnemonic(opcode));
        if let outcome @ RunOutcome::Halted { .. } = vm.run(1) {
            return outcome;
        }
    }
    vm.run(0)
}

/// A halt is normal VM termination, not a driver failure; a fault is still
/// logged at a louder level so it stands out from a clean `BRK`.
fn report(outcome: RunOutcome) {
    match outcome {
        RunOutcome::Halted { pc, reason } if reason.is_normal() => {
            info!("halted: {reason} (pc {pc:#06x})");
        }
        RunOutcome::Halted { pc, reason } => {
            warn!("halted: {reason} (pc {pc:#06x})");
        }
        RunOutcome::BudgetExhausted { pc } => {
            info!("step budget exhausted (pc {pc:#06x})");
        }
    }
}
