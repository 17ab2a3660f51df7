//! # fallible-fn
//!
//! Fallible-fn lets an operation that returns `Result` stand in wherever code expects a plain
//! function shape: apply a value, test a value, supply a value, or transform a value. The
//! failure is not dropped. It is raised as a [`PropagatedFault`] panic that carries the
//! original error as its cause.
//!
//! # Quick Start
//!
//! ```rust
//! use fallible_fn::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, std::num::ParseIntError> {
//!     raw.parse()
//! }
//!
//! let port = wrap::function(parse_port);
//! assert_eq!(port.apply("8080"), 8080);
//! ```
//!
//! # Examples
//!
//! ## Writing against the plain contracts
//!
//! Code that consumes these values never sees the error type:
//!
//! ```rust
//! use fallible_fn::*;
//!
//! fn count_matching<'a>(items: &[&'a str], check: &impl Test<&'a str>) -> usize {
//!     items.iter().filter(|item| check.test(**item)).count()
//! }
//!
//! let is_high_port = wrap::predicate(|raw: &str| raw.parse::<u16>().map(|p| p >= 1024));
//! assert_eq!(count_matching(&["80", "8080", "9000"], &is_high_port), 2);
//! ```
//!
//! ## Getting the failure back
//!
//! ```rust
//! use fallible_fn::*;
//!
//! let disk = wrap::supplier(|| -> std::io::Result<u64> {
//!     Err(std::io::Error::other("disk unavailable"))
//! });
//!
//! let fault = PropagatedFault::catch(|| disk.supply()).unwrap_err();
//! assert_eq!(fault.contract(), Contract::Supply);
//! assert_eq!(fault.cause().to_string(), "disk unavailable");
//! assert!(fault.downcast_cause_ref::<std::io::Error>().is_some());
//! ```
//!
//! ## Implementing a contract by hand
//!
//! ```rust
//! use fallible_fn::*;
//!
//! struct Clamp {
//!     max: u32,
//! }
//!
//! impl FallibleTransform<u32> for Clamp {
//!     type Error = String;
//!
//!     fn try_transform(&self, value: u32) -> Result<u32, String> {
//!         if self.max == 0 {
//!             return Err("empty range".to_string());
//!         }
//!         Ok(value.min(self.max))
//!     }
//! }
//!
//! assert_eq!(Clamp { max: 10 }.transform(99), 10);
//! ```
//!
//! # Features
//!
//! - `std` - Raise faults with `panic_any` so the payload stays structured, and enable
//!   [`PropagatedFault::catch`] (default)
//!
//! Without `std` the crate only needs `alloc`, and a fault unwinds with its rendered message.

#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod apply;
mod fault;
mod predicate;
mod supply;
mod transform;
pub mod wrap;

pub use apply::{Apply, FallibleApply};
pub use fault::{Cause, Contract, PropagatedFault, Report};
pub use predicate::{FallibleTest, Test};
pub use supply::{FallibleSupply, Supply};
pub use transform::{FallibleTransform, Transform};
