#![cfg(feature = "effect")]
//! Property-based tests for Context laws.
//!
//! Context values are compared by calling them with the same context.
//!
//! ## Functor Laws
//! - Identity: context.map(|x| x) == context
//! - Composition: context.map(f).map(g) == context.map(|x| g(f(x)))
//!
//! ## Pipe Laws
//! - Composition: a.pipe(b).call(c) == b.call(a.call(c))
//! - Identity: ask().pipe(a) == a == a.pipe(ask())
//! - Associativity: a.pipe(b).pipe(c) == a.pipe(b.pipe(c))
//!
//! ## Bind
//! - a.bind(b).call(c) == b.call(c)

use kinder::effect::Context;
use proptest::prelude::*;

fn add(amount: i64) -> Context<i64, i64> {
    Context::new(move |x: i64| x.wrapping_add(amount))
}

fn multiply(factor: i64) -> Context<i64, i64> {
    Context::new(move |x: i64| x.wrapping_mul(factor))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_context_functor_identity(amount in -1000i64..1000, context in -1000i64..1000) {
        prop_assert_eq!(add(amount).map(|x| x).call(context), add(amount).call(context));
    }

    #[test]
    fn prop_context_functor_composition(factor in -100i64..100, context in -100i64..100) {
        let function1 = |n: i64| n.wrapping_add(1);
        let function2 = |n: i64| n.wrapping_mul(2);

        let left = multiply(factor).map(function1).map(function2);
        let right = multiply(factor).map(move |x| function2(function1(x)));

        prop_assert_eq!(left.call(context), right.call(context));
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_context_pipe_composition(amount in -1000i64..1000, factor in -100i64..100, context in -1000i64..1000) {
        let piped = add(amount).pipe(multiply(factor));
        prop_assert_eq!(piped.call(context), multiply(factor).call(add(amount).call(context)));
    }

    #[test]
    fn prop_context_pipe_left_identity(amount in -1000i64..1000, context in -1000i64..1000) {
        let piped = Context::ask().pipe(add(amount));
        prop_assert_eq!(piped.call(context), add(amount).call(context));
    }

    #[test]
    fn prop_context_pipe_right_identity(amount in -1000i64..1000, context in -1000i64..1000) {
        let piped = add(amount).pipe(Context::ask());
        prop_assert_eq!(piped.call(context), add(amount).call(context));
    }

    #[test]
    fn prop_context_pipe_associativity(
        amount in -1000i64..1000,
        factor in -100i64..100,
        offset in -1000i64..1000,
        context in -1000i64..1000
    ) {
        let left = add(amount).pipe(multiply(factor)).pipe(add(offset));
        let right = add(amount).pipe(multiply(factor).pipe(add(offset)));
        prop_assert_eq!(left.call(context), right.call(context));
    }
}

// =============================================================================
// Bind
// =============================================================================

proptest! {
    #[test]
    fn prop_context_bind_returns_second_result(amount in -1000i64..1000, factor in -100i64..100, context in -1000i64..1000) {
        let bound = add(amount).bind(multiply(factor));
        prop_assert_eq!(bound.call(context), multiply(factor).call(context));
    }

    #[test]
    fn prop_context_pure_ignores_context(value in any::<i64>(), context in any::<i64>()) {
        let constant: Context<i64, i64> = Context::pure(value);
        prop_assert_eq!(constant.pipe(add(0)).call(context), value);
    }
}
