/// Create an `AttributeSet` from a list of column indices.
///
/// ## Example
/// ```
/// #[macro_use] extern crate fastfds;
///
/// let set = attrset!{2, 4};
/// assert!(set.contains_index(2));
/// assert!(set.contains_index(4));
/// assert!(!set.contains_index(100));
/// ```
#[macro_export]
macro_rules! attrset {
    ($($key:expr,)+) => { attrset!($($key),+) };
    ($($key:expr),*) => {
        {
            let mut _set = $crate::AttributeSet::empty();
            $(
                let _ = _set.insert($key);
            )*
            _set
        }
    };
}

/// Create a `Vec<AttributeSet>` from a list of index lists.
///
/// ## Example
/// ```
/// #[macro_use] extern crate fastfds;
///
/// let actual = attrsetvec![[0, 1], [2]];
/// let expected = vec![attrset![0, 1], attrset![2]];
/// assert_eq!(expected, actual);
/// ```
#[macro_export]
macro_rules! attrsetvec {
    ($($setcontent:tt),*) => {
        {
            vec![
            $(
                attrset!$setcontent
            ),*
            ]
        }
    };
}
