//! Deprecated function aliases.
//!
//! An alias is generated with [`deprecate_function!`](crate::deprecate_function): the generated
//! function carries a `#[deprecated]` attribute for compile-time warnings, logs a
//! [`DeprecationNotice`] through the `log` facade on every call, and forwards its arguments
//! to the replacement untouched.

use std::fmt;

/// Metadata for a deprecated alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// Name of the deprecated alias.
    pub old_name: &'static str,
    /// Name of the function to use instead.
    pub new_name: &'static str,
    /// Version in which the alias goes away.
    pub removal_version: &'static str,
}
impl DeprecationNotice {
    /// Log the notice at warning level.
    pub fn warn(&self) {
        log::warn!(target: "reframe::deprecation", "{}", self);
    }
}
impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "The function {} has been deprecated, please use {}. It will be removed in version {} of reframe.",
            self.old_name, self.new_name, self.removal_version,
        )
    }
}

/// Generate a deprecated alias that warns and forwards to its replacement.
///
/// ```ignore
/// deprecate_function!(
///     /// Old name of `new_fn`.
///     pub fn oldFn(a: f64) -> f64 => new_fn,
///     removal_version = "1.0.0",
///     note = "use `new_fn`, removed in 1.0.0",
/// );
/// ```
#[macro_export]
macro_rules! deprecate_function {
    (
        $(#[$meta:meta])*
        $vis:vis fn $old:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty => $new:path,
        removal_version = $removal:literal,
        note = $note:literal $(,)?
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[deprecated(note = $note)]
        $vis fn $old($($arg: $ty),*) -> $ret {
            $crate::deprecation::DeprecationNotice{
                old_name: stringify!($old),
                new_name: stringify!($new),
                removal_version: $removal,
            }.warn();
            $new($($arg),*)
        }
    };
}
