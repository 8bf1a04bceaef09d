//! Construction macros for declaration and prop maps.

/// Builds a [`Declarations`](crate::value::Declarations) map in order.
///
/// ```rust
/// use uipart::decls;
///
/// let declarations = decls! { "p" => 8, "bg" => "white" };
/// assert_eq!(declarations.len(), 2);
/// ```
#[macro_export]
macro_rules! decls {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::value::Declarations::new();
        $(map.insert($key.to_string(), $crate::value::StyleValue::from($value));)*
        map
    }};
}

/// Builds a [`Props`](crate::value::Props) map in order.
#[macro_export]
macro_rules! props {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::value::Props::new();
        $(map.insert($key.to_string(), $crate::value::PropValue::from($value));)*
        map
    }};
}

/// Builds a [`PartStyles`](crate::value::PartStyles) map in order.
///
/// ```rust
/// use uipart::{decls, part_styles};
///
/// let styles = part_styles! {
///     "root" => decls! { "p" => 8 },
///     "label" => decls! { "fg" => "$colors.text" },
/// };
/// assert_eq!(styles.len(), 2);
/// ```
#[macro_export]
macro_rules! part_styles {
    ($($part:expr => $decls:expr),* $(,)?) => {{
        let mut map = $crate::value::PartStyles::new();
        $(map.insert($part.to_string(), $decls);)*
        map
    }};
}
