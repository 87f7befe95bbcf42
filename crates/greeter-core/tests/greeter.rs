//! Tests for the public greeter API.

use greeter_core::{greeting, Greeter, GREETING};

#[test]
fn greeter_returns_hello_maven() {
    let greeter = Greeter::new();
    assert_eq!(greeter.greeting(), "Hello, Maven!");
}

#[test]
fn constant_and_functions_agree() {
    assert_eq!(GREETING, "Hello, Maven!");
    assert_eq!(greeting(), GREETING);
    assert_eq!(Greeter::default().greeting(), GREETING);
}

#[test]
fn fresh_greeters_are_interchangeable() {
    let a = Greeter::new();
    let b = a;
    assert_eq!(a, b);
    assert_eq!(a.greeting(), b.greeting());
}
