//! Convenience macros for call sites in request builders.

/// Validates that exactly one of the given `Option` bindings is `Some`.
///
/// Expands to a call to [`validator::exactly_one`](crate::validator::exactly_one)
/// with each binding's identifier as the parameter name.
///
/// # Examples
///
/// ```
/// use yt_params::exactly_one;
///
/// let chart: Option<&str> = Some("mostPopular");
/// let id: Option<&str> = None;
/// let my_rating: Option<&str> = None;
///
/// assert!(exactly_one!(chart, id, my_rating).is_ok());
/// ```
#[macro_export]
macro_rules! exactly_one {
    ($($param:ident),+ $(,)?) => {
        $crate::validator::exactly_one(&[$((stringify!($param), $param.is_some())),+])
    };
}
