use crate::fault::{self, Cause, Contract};

/// Maps a `T` to another `T`, or fails.
///
/// Every `Fn(T) -> Result<T, E>` is one; such closures are also
/// [`FallibleApply<T, T>`](crate::FallibleApply), this trait only pins the
/// output to the input type.
pub trait FallibleTransform<T> {
    type Error: Into<Cause>;

    fn try_transform(&self, value: T) -> Result<T, Self::Error>;
}

impl<F, T, E> FallibleTransform<T> for F
where
    F: Fn(T) -> Result<T, E>,
    E: Into<Cause>,
{
    type Error = E;

    #[inline]
    fn try_transform(&self, value: T) -> Result<T, E> {
        self(value)
    }
}

pub trait Transform<T> {
    fn transform(&self, value: T) -> T;
}

impl<F, T> Transform<T> for F
where
    F: FallibleTransform<T> + ?Sized,
{
    #[inline]
    #[track_caller]
    fn transform(&self, value: T) -> T {
        match self.try_transform(value) {
            Ok(value) => value,
            Err(failure) => fault::propagate(Contract::Transform, failure),
        }
    }
}
