//! Command-line demonstration driver.
//!
//! Drains a counting range to stdout, then shows early termination and a
//! handled fault. Bounds default to `10 20` and can be overridden as
//! `seq-demo <start> <end>`.

use std::env;
use std::process::ExitCode;

use lazyseq::prelude::*;

fn parse_bounds() -> Result<(i64, i64), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok((10, 20)),
        [start, end] => {
            let start = start
                .parse()
                .map_err(|_| format!("not a number: {start}"))?;
            let end = end.parse().map_err(|_| format!("not a number: {end}"))?;
            Ok((start, end))
        }
        _ => Err("usage: seq-demo [<start> <end>]".to_string()),
    }
}

fn main() -> ExitCode {
    let (start, end) = match parse_bounds() {
        Ok(bounds) => bounds,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    println!("draining range({start}, {end}):");
    let produced = drain(range(start, end), |n| println!("{n}"));
    println!("produced {produced} values");

    println!("\nearly termination after one element:");
    let mut stopped = values(vec![1, 2, 3]);
    println!("{:?}", stopped.advance());
    println!("{:?}", stopped.terminate());
    println!("{:?}", stopped.advance());

    println!("\nfault absorbed by the producer's own handling scope:");
    let mut guarded = handled(vec![1, 2, 3], |fault: Fault| {
        println!("handler observed: {fault}");
    });
    println!("{:?}", guarded.advance());
    println!("{:?}", guarded.inject_fault(Fault::new("some error...")));
    println!("{:?}", guarded.advance());

    ExitCode::SUCCESS
}
