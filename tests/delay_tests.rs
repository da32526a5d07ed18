#![cfg(feature = "effect")]
//! Unit tests for Delay.
//!
//! Covers non-eagerness of construction and argument binding, re-execution
//! on every `run`, and chains built with `bind`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kinder::effect::Delay;
use rstest::{fixture, rstest};

#[derive(Debug)]
struct Container {
    value: i32,
}

type Shared = Rc<RefCell<Container>>;

#[fixture]
fn container() -> Shared {
    Rc::new(RefCell::new(Container { value: 1 }))
}

fn increase() -> Delay<Shared, Shared> {
    Delay::new(|container: Shared| {
        container.borrow_mut().value += 1;
        container
    })
}

fn power(container: Shared) -> Delay<(), Shared> {
    Delay::new(move |()| {
        let value = container.borrow().value;
        container.borrow_mut().value = value * value;
        Rc::clone(&container)
    })
}

fn square(value: i32) -> Delay<(), i32> {
    Delay::new(move |()| value * value)
}

fn add_two(value: i32) -> Delay<(), i32> {
    Delay::new(move |()| value + 2)
}

// =============================================================================
// Non-eagerness
// =============================================================================

#[rstest]
fn delay_construction_does_not_execute(container: Shared) {
    let observed = Rc::clone(&container);
    let _delay = Delay::new(move |()| observed.borrow_mut().value += 10);
    assert_eq!(container.borrow().value, 1);
}

#[rstest]
fn delay_apply_does_not_execute(container: Shared) {
    let suspended = increase().apply(Rc::clone(&container));
    assert_eq!(container.borrow().value, 1);

    suspended.run(());
    assert_eq!(container.borrow().value, 2);
}

#[rstest]
fn delay_bind_does_not_execute(container: Shared) {
    let _chain = increase().apply(Rc::clone(&container)).bind(power);
    assert_eq!(container.borrow().value, 1);
}

#[rstest]
fn delay_run_re_executes_every_time() {
    let runs = Rc::new(Cell::new(0));
    let observed = Rc::clone(&runs);
    let counted = Delay::new(move |step: i32| {
        observed.set(observed.get() + step);
        observed.get()
    });

    assert_eq!(counted.run(1), 1);
    assert_eq!(counted.run(1), 2);
    assert_eq!(counted.run(3), 5);
    assert_eq!(runs.get(), 5);
}

// =============================================================================
// Binding
// =============================================================================

#[rstest]
fn delay_bind_runs_self_then_continuation(container: Shared) {
    let chain = increase().apply(Rc::clone(&container)).bind(power);
    let result = chain.run(());

    assert!(Rc::ptr_eq(&result, &container));
    assert_eq!(container.borrow().value, 4);
}

#[rstest]
fn delay_bind_keeps_arguments_of_the_first_step(container: Shared) {
    container.borrow_mut().value = 4;
    let chain = increase().bind(power);

    chain.run(Rc::clone(&container));
    assert_eq!(container.borrow().value, 25);
}

#[rstest]
fn delay_bind_chains_several_steps(container: Shared) {
    container.borrow_mut().value = 5;
    let again = increase();
    let chain = increase()
        .apply(Rc::clone(&container))
        .bind(power)
        .bind(move |container| again.apply(container));

    chain.run(());
    assert_eq!(container.borrow().value, 37);
}

#[rstest]
fn delay_bind_threads_plain_values() {
    let chain = square(3).bind(square).bind(add_two);
    assert_eq!(chain.run(()), 83);
    assert_eq!(chain.run(()), 83);
}

#[rstest]
#[should_panic(expected = "step failed")]
fn delay_run_propagates_panics() {
    let failing = Delay::new(|()| -> i32 { panic!("step failed") });
    let chain = failing.bind(add_two);
    let _ = chain.run(());
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn delay_combined_composes_different_types() {
    let length = Delay::new(|text: String| text.len());
    let describe = Delay::new(|n: usize| format!("{n} chars"));

    let composed = length.combined(describe, |first, second| move |text| second(first(text)));
    assert_eq!(composed.run("hello".to_string()), "5 chars");
}
