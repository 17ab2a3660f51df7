//! The unchecked fault raised when a standard contract's fallible body fails.

use alloc::boxed::Box;
use core::error::Error;
use core::fmt;
use core::panic::Location;

/// The original failure carried by a [`PropagatedFault`].
///
/// Anything a fallible contract returns as its error must convert into this:
/// every `Error + Send + Sync + 'static` type, `&str`, `String`, as well as
/// `anyhow::Error` and `eyre::Report`.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Which standard contract raised a fault.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Contract {
    Apply,
    Test,
    Supply,
    Transform,
}

impl Contract {
    pub const fn name(self) -> &'static str {
        match self {
            Contract::Apply => "apply",
            Contract::Test => "test",
            Contract::Supply => "supply",
            Contract::Transform => "transform",
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised (as a panic) by `apply`, `test`, `supply` and `transform` when the
/// wrapped fallible method returns an error.
///
/// The error is moved in untouched and exposed as [`Error::source`], so the
/// original type and value can always be recovered with
/// [`downcast_cause_ref`](Self::downcast_cause_ref).
///
/// With the `std` feature the fault itself is the panic payload and can be
/// taken back with [`PropagatedFault::catch`] or
/// `std::panic::catch_unwind`. Without it, only the rendered message
/// survives the unwind.
#[derive(Debug, thiserror::Error)]
#[error("{contract} operation failed at {location}: {cause}")]
pub struct PropagatedFault {
    contract: Contract,
    location: &'static Location<'static>,
    #[source]
    cause: Cause,
}

impl PropagatedFault {
    pub fn new(contract: Contract, location: &'static Location<'static>, cause: Cause) -> Self {
        Self {
            contract,
            location,
            cause,
        }
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }

    /// Where the standard method was called.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }

    pub fn into_cause(self) -> Cause {
        self.cause
    }

    pub fn downcast_cause_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }

    /// Renders the fault followed by every level below its cause.
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }

    /// Unwinds with this fault.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        #[cfg(feature = "std")]
        std::panic::panic_any(self);

        #[cfg(not(feature = "std"))]
        panic!("{}", self);
    }
}

#[cfg(feature = "std")]
impl PropagatedFault {
    /// Runs `f`, handing back a fault it raised as `Err`.
    ///
    /// Panics that are not a `PropagatedFault` are resumed as they were.
    pub fn catch<T>(f: impl FnOnce() -> T) -> Result<T, PropagatedFault> {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
            Ok(value) => Ok(value),
            Err(payload) => match payload.downcast::<PropagatedFault>() {
                Ok(fault) => Err(*fault),
                Err(other) => std::panic::resume_unwind(other),
            },
        }
    }
}

/// See [`PropagatedFault::report`].
pub struct Report<'a>(&'a PropagatedFault);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut next = self.0.cause().source();
        while let Some(cause) = next {
            write!(f, "\n  caused by: {cause}")?;
            next = cause.source();
        }
        Ok(())
    }
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn propagate(contract: Contract, failure: impl Into<Cause>) -> ! {
    PropagatedFault::new(contract, Location::caller(), failure.into()).raise()
}
