use crate::fault::{self, Cause, Contract};

/// An operation from `In` to `Out` that may fail.
///
/// Implemented for every `Fn(In) -> Result<Out, E>`, so a closure or a plain
/// `fn` returning `Result` can be handed anywhere an [`Apply`] is expected.
pub trait FallibleApply<In, Out> {
    type Error: Into<Cause>;

    fn try_apply(&self, input: In) -> Result<Out, Self::Error>;
}

impl<F, In, Out, E> FallibleApply<In, Out> for F
where
    F: Fn(In) -> Result<Out, E>,
    E: Into<Cause>,
{
    type Error = E;

    #[inline]
    fn try_apply(&self, input: In) -> Result<Out, E> {
        self(input)
    }
}

/// The plain shape: `In` in, `Out` out, no failure in the signature.
pub trait Apply<In, Out> {
    fn apply(&self, input: In) -> Out;
}

/// Calls [`try_apply`](FallibleApply::try_apply) once. An error is raised as a
/// [`PropagatedFault`](crate::PropagatedFault) pointing at the caller.
impl<F, In, Out> Apply<In, Out> for F
where
    F: FallibleApply<In, Out> + ?Sized,
{
    #[inline]
    #[track_caller]
    fn apply(&self, input: In) -> Out {
        match self.try_apply(input) {
            Ok(out) => out,
            Err(failure) => fault::propagate(Contract::Apply, failure),
        }
    }
}
