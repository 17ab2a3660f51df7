//! Explicit conversions from the fallible contracts to the plain ones.
//!
//! Each function hands back the value it was given, only typed as the plain
//! contract. Nothing is allocated and nothing can fail here; the translation
//! into a [`PropagatedFault`](crate::PropagatedFault) happens when the plain
//! method is called.

use crate::{
    Apply, FallibleApply, FallibleSupply, FallibleTest, FallibleTransform, Supply, Test, Transform,
};

/// Use a fallible function where an [`Apply`] is required.
#[inline]
pub fn function<F, In, Out>(orig: F) -> impl Apply<In, Out>
where
    F: FallibleApply<In, Out>,
{
    orig
}

/// Use a fallible predicate where a [`Test`] is required.
#[inline]
pub fn predicate<F, In>(orig: F) -> impl Test<In>
where
    F: FallibleTest<In>,
{
    orig
}

/// Use a fallible supplier where a [`Supply`] is required.
#[inline]
pub fn supplier<F, Out>(orig: F) -> impl Supply<Out>
where
    F: FallibleSupply<Out>,
{
    orig
}

/// Use a fallible transform where a [`Transform`] is required.
#[inline]
pub fn operator<F, T>(orig: F) -> impl Transform<T>
where
    F: FallibleTransform<T>,
{
    orig
}
