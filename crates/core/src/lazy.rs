use std::sync::OnceLock;

/// A zero-argument provider memoized on first use.
///
/// Used to defer construction of environment-sensitive collaborators (such as
/// the local Gradle installation locator) until something actually asks for
/// them, instead of relying on static initialization order.
pub struct Lazy<T> {
    cell: OnceLock<T>,
    init: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Lazy<T> {
    pub fn new(init: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            cell: OnceLock::new(),
            init: Box::new(init),
        }
    }

    /// The memoized value, constructing it on first call.
    pub fn value(&self) -> &T {
        self.cell.get_or_init(|| (self.init)())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell.get() {
            Some(value) => write!(f, "Lazy({value:?})"),
            None => write!(f, "Lazy(<uninitialized>)"),
        }
    }
}
