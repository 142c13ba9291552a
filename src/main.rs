/*!
 * Round-Robin Memory Simulator - Main Entry Point
 *
 * Host for the simulator library:
 * - Collects process tuples from stdin
 * - Renders the queue, scheduling events and memory map as text
 * - Or emits the full run report as JSON (SIM_OUTPUT=json)
 */

use miette::{IntoDiagnostic, Result};
use rr_memsim::{
    init_tracing, parse_specs, MemoryRun, Payload, ProcessSnapshot, ProcessSpec, RunReport,
    RunState, Scheduler, SchedulerEvent, SimConfig,
};
use std::io::{self, BufRead, Write};
use tracing::info;

const ENV_OUTPUT: &str = "SIM_OUTPUT";

fn main() -> Result<()> {
    init_tracing();

    let config = SimConfig::from_env()?;
    let json = std::env::var(ENV_OUTPUT)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    info!(
        quantum = config.time_quantum,
        pool_blocks = config.pool_blocks,
        processes = config.process_count,
        "Simulator starting"
    );

    let specs = read_specs(config.process_count, !json)?;
    let mut scheduler = Scheduler::builder()
        .with_config(config)
        .with_processes(specs)
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let report = scheduler.run()?;
        serde_json::to_writer_pretty(&mut out, &report).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
        return Ok(());
    }

    write_queue(&mut out, &scheduler.queue_snapshot()).into_diagnostic()?;

    while let Some(rotation) = scheduler.step()? {
        for event in &rotation.events {
            write_event(&mut out, event).into_diagnostic()?;
            if let (Payload::Admitted { .. }, Some(runs)) =
                (event.payload, &rotation.memory_on_admission)
            {
                write_memory(&mut out, runs).into_diagnostic()?;
            }
        }
    }

    write_summary(&mut out, &scheduler.report()).into_diagnostic()?;
    Ok(())
}

/// Prompt for and collect `count` process tuples from stdin
fn read_specs(count: usize, prompt: bool) -> Result<Vec<ProcessSpec>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut buffer = String::new();
    let mut tokens = 0;

    for index in 0..count {
        if prompt {
            print!(
                "Enter details for Process {} (arrival_time [int], duration, memory_needed): ",
                index
            );
            io::stdout().flush().into_diagnostic()?;
        }

        while tokens < 3 * (index + 1) {
            let Some(line) = lines.next() else { break };
            let line = line.into_diagnostic()?;
            tokens += line.split_whitespace().count();
            buffer.push_str(&line);
            buffer.push('\n');
        }
    }

    if prompt && count > 0 {
        println!();
    }

    Ok(parse_specs(&buffer, count)?)
}

fn write_queue<W: Write>(out: &mut W, queue: &[ProcessSnapshot]) -> io::Result<()> {
    if queue.is_empty() {
        return writeln!(out, "Queue is empty.");
    }

    for p in queue {
        writeln!(
            out,
            "Process ID: {}, Arrival Time: {}, Duration: {}, Memory Needed: {}, Remaining Time: {}, In Memory: {}",
            p.pid,
            p.arrival_time,
            p.duration,
            p.memory_needed,
            p.remaining_time,
            if p.in_memory { "Yes" } else { "No" }
        )?;
    }
    Ok(())
}

fn write_event<W: Write>(out: &mut W, event: &SchedulerEvent) -> io::Result<()> {
    let pid = event.pid;
    match event.payload {
        Payload::NotArrived { .. } => writeln!(out, "..."),
        Payload::Admitted { .. } => writeln!(out, "Process {} loaded into memory.", pid),
        Payload::Denied { .. } => writeln!(out, "Process {} cannot be loaded into memory.", pid),
        Payload::Executing { remaining_time } => {
            writeln!(out, "Simulating process {}", pid)?;
            if remaining_time > 0 {
                writeln!(out, "Process {} has {} s remaining", pid, remaining_time)?;
            }
            Ok(())
        }
        Payload::Finished { .. } => writeln!(out, "Process {} has finished", pid),
    }
}

fn write_memory<W: Write>(out: &mut W, runs: &[MemoryRun]) -> io::Result<()> {
    for (chunk, run) in runs.iter().enumerate() {
        match run.state {
            RunState::Free => writeln!(
                out,
                "Chunk of memory number {}: start at {} end at {}.\t State: Free",
                chunk, run.start, run.end
            )?,
            RunState::UsedBy(pid) => writeln!(
                out,
                "Chunk of memory number {}: start at {} end at {}.\t State: Used by process {}",
                chunk, run.start, run.end, pid
            )?,
        }
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(
        out,
        "All processes finished at time {} after {} rotations.",
        report.final_clock, report.rotations
    )?;
    for p in &report.processes {
        writeln!(
            out,
            "Process {}: arrival {}, completed {}, turnaround {}, denied {} times",
            p.pid,
            p.arrival_time,
            p.completed_at.unwrap_or_default(),
            p.turnaround.unwrap_or_default(),
            p.denials
        )?;
    }
    if let Some(avg) = report.average_turnaround() {
        writeln!(out, "Average turnaround: {:.2}", avg)?;
    }
    Ok(())
}
