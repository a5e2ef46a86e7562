//! Link-time class registration via `inventory`.

use crate::registry::InterfaceRegistry;
use mimic_core::InterfaceError;

/// A class registration collected at link time via `inventory`.
///
/// Submit entries with [`submit_class!`](crate::submit_class) anywhere in
/// the program, then apply them with
/// [`InterfaceRegistry::register_collected`].
pub struct CollectedClass {
    /// Name for ordering and debugging.
    pub name: &'static str,
    /// Ordering key (lower runs first).
    pub priority: i32,
    /// Performs the registrations.
    pub register: fn(&mut InterfaceRegistry) -> Result<(), InterfaceError>,
}

impl CollectedClass {
    /// Create a collected entry with priority 0.
    pub const fn new(
        name: &'static str,
        register: fn(&mut InterfaceRegistry) -> Result<(), InterfaceError>,
    ) -> Self {
        Self {
            name,
            priority: 0,
            register,
        }
    }

    /// Set the priority.
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

inventory::collect!(CollectedClass);

/// All submitted entries, ordered by priority then name.
pub fn collected_classes() -> Vec<&'static CollectedClass> {
    let mut entries: Vec<&CollectedClass> = inventory::iter::<CollectedClass>.into_iter().collect();
    entries.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.name.cmp(b.name)));
    entries
}

impl InterfaceRegistry {
    /// Apply every collected class registration.
    ///
    /// Returns the number of entries applied. Stops at the first error.
    pub fn register_collected(&mut self) -> Result<usize, InterfaceError> {
        let entries = collected_classes();
        for entry in &entries {
            log_debug!(entry = entry.name, "applying collected class");
            (entry.register)(self)?;
        }
        Ok(entries.len())
    }
}

/// Submit a class registration for link-time collection.
///
/// ```rust,ignore
/// submit_class!("Dog", |registry| {
///     registry.set_implementation(Dog::type_tag(), "talk", Method::constant("woof"))
/// });
/// ```
#[macro_export]
macro_rules! submit_class {
    ($name:expr, $register:expr, priority = $priority:expr) => {
        $crate::inventory::submit! {
            $crate::collected::CollectedClass::new($name, $register).with_priority($priority)
        }
    };
    ($name:expr, $register:expr) => {
        $crate::inventory::submit! {
            $crate::collected::CollectedClass::new($name, $register)
        }
    };
}
