use crate::fault::{self, Cause, Contract};

/// Produces an `Out` from nothing, or fails trying.
pub trait FallibleSupply<Out> {
    type Error: Into<Cause>;

    fn try_supply(&self) -> Result<Out, Self::Error>;
}

impl<F, Out, E> FallibleSupply<Out> for F
where
    F: Fn() -> Result<Out, E>,
    E: Into<Cause>,
{
    type Error = E;

    #[inline]
    fn try_supply(&self) -> Result<Out, E> {
        self()
    }
}

pub trait Supply<Out> {
    fn supply(&self) -> Out;
}

impl<F, Out> Supply<Out> for F
where
    F: FallibleSupply<Out> + ?Sized,
{
    #[inline]
    #[track_caller]
    fn supply(&self) -> Out {
        match self.try_supply() {
            Ok(out) => out,
            Err(failure) => fault::propagate(Contract::Supply, failure),
        }
    }
}
