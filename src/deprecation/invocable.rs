// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Calling anything callable with its arguments packed in a tuple.
//!
//! Implemented for every `Fn` taking up to eight arguments. Constructors are
//! their `new`-style functions, and methods take the receiver as the first
//! argument (`Type::method` with `(&value, ..)`).

/// A callable taking `Args` as a tuple.
pub trait Invocable<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invocable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Invocable<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Ret {
                (self)($($arg),*)
            }
        }
    };
}

impl_invocable!();
impl_invocable!(A);
impl_invocable!(A, B);
impl_invocable!(A, B, C);
impl_invocable!(A, B, C, D);
impl_invocable!(A, B, C, D, E);
impl_invocable!(A, B, C, D, E, F);
impl_invocable!(A, B, C, D, E, F, G);
impl_invocable!(A, B, C, D, E, F, G, H);
