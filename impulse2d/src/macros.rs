/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [Polygon](crate::shape::Polygon) from a list of (x, y) tuples.
///
/// Evaluates to a `Result` since fewer than 3 vertices is rejected.
///
/// # Examples
///
/// ```
/// # use impulse2d::polygon;
/// # use impulse2d::core::math::*;
/// let triangle = polygon![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)].unwrap();
/// assert_eq!(triangle.vertices().len(), 3);
/// assert_eq!(triangle.vertices()[1], vec2(10.0, 0.0));
/// assert!(polygon![(0.0, 0.0), (1.0, 1.0)].is_err());
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        $crate::shape::Polygon::new(
            ::std::vec![$($crate::core::math::Vector2::new($x.0, $x.1)),*]
        )
    };
}
