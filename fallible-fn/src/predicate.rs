use crate::fault::{self, Cause, Contract};

/// A check on `In` that may fail before reaching a verdict.
pub trait FallibleTest<In> {
    type Error: Into<Cause>;

    fn try_test(&self, input: In) -> Result<bool, Self::Error>;
}

impl<F, In, E> FallibleTest<In> for F
where
    F: Fn(In) -> Result<bool, E>,
    E: Into<Cause>,
{
    type Error = E;

    #[inline]
    fn try_test(&self, input: In) -> Result<bool, E> {
        self(input)
    }
}

pub trait Test<In> {
    fn test(&self, input: In) -> bool;
}

impl<F, In> Test<In> for F
where
    F: FallibleTest<In> + ?Sized,
{
    #[inline]
    #[track_caller]
    fn test(&self, input: In) -> bool {
        match self.try_test(input) {
            Ok(verdict) => verdict,
            Err(failure) => fault::propagate(Contract::Test, failure),
        }
    }
}
