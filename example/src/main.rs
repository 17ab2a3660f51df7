use fallible_fn::*;
use std::collections::HashMap;
use std::io;
use std::num::ParseIntError;

#[derive(Debug)]
struct MissingKey(String);

impl std::fmt::Display for MissingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no setting named {}", self.0)
    }
}

impl std::error::Error for MissingKey {}

fn parse_port(raw: &str) -> Result<u16, ParseIntError> {
    raw.trim().parse()
}

fn read_settings() -> io::Result<HashMap<String, String>> {
    Ok(HashMap::from([
        ("port".to_string(), "8080".to_string()),
        ("workers".to_string(), "four".to_string()),
    ]))
}

/// Plain consumer: knows nothing about the errors behind `resolve`.
fn sum_all<'a>(raw: &[&'a str], resolve: &impl Apply<&'a str, u16>) -> u32 {
    raw.iter().map(|r| u32::from(resolve.apply(*r))).sum()
}

#[tokio::main]
async fn main() {
    println!("1. function:");
    let port = wrap::function(parse_port);
    println!("   sum of ports = {}", sum_all(&["80", " 443", "8080"], &port));
    match PropagatedFault::catch(|| sum_all(&["80", "http"], &port)) {
        Ok(sum) => println!("   sum = {sum}"),
        Err(fault) => println!("   {fault}"),
    }

    println!("\n2. predicate:");
    let high = wrap::predicate(|raw: &str| parse_port(raw).map(|p| p >= 1024));
    for raw in ["22", "8443", "ssh"] {
        match PropagatedFault::catch(|| high.test(raw)) {
            Ok(verdict) => println!("   {raw:>5} -> {verdict}"),
            Err(fault) => println!("   {raw:>5} -> fault: {}", fault.cause()),
        }
    }

    println!("\n3. supplier:");
    let settings = wrap::supplier(read_settings);
    let lookup = |key: &str| {
        settings
            .supply()
            .remove(key)
            .ok_or_else(|| MissingKey(key.to_string()))
    };
    let setting = wrap::function(lookup);
    println!("   port = {}", setting.apply("port"));
    if let Err(fault) = PropagatedFault::catch(|| setting.apply("timeout")) {
        println!("   {}", fault.report());
    }

    println!("\n4. operator:");
    let halve = wrap::operator(|n: u32| {
        if n % 2 == 1 {
            Err(format!("{n} is odd"))
        } else {
            Ok(n / 2)
        }
    });
    let mut n = 40;
    loop {
        match PropagatedFault::catch(|| halve.transform(n)) {
            Ok(next) => {
                println!("   {n} -> {next}");
                n = next;
            }
            Err(fault) => {
                println!("   stopped: {}", fault.cause());
                break;
            }
        }
    }

    println!("\n5. across a blocking task:");
    let task = tokio::task::spawn_blocking(|| {
        let workers = wrap::supplier(|| -> io::Result<usize> {
            read_settings()?["workers"]
                .parse::<usize>()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        });
        workers.supply()
    });
    match task.await {
        Ok(workers) => println!("   workers = {workers}"),
        Err(join) if join.is_panic() => match join.into_panic().downcast::<PropagatedFault>() {
            Ok(fault) => println!("   task raised: {fault}"),
            Err(_) => println!("   task panicked"),
        },
        Err(_) => println!("   task cancelled"),
    }

    println!("\ncomplete!");
}
