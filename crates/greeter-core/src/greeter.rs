/// The message every [`Greeter`] produces.
pub const GREETING: &str = "Hello, Maven!";

/// Stateless source of the greeting message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the greeting. Pure and infallible.
    pub fn greeting(&self) -> &'static str {
        GREETING
    }
}

/// Returns the greeting without constructing a [`Greeter`].
pub fn greeting() -> &'static str {
    Greeter::new().greeting()
}
