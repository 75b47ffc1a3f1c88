#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use regex::Regex;
    pub use scraper::Selector;
}

/// A CSS selector parsed once, on first use.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        static SELECTOR: $crate::macros::__private::Lazy<$crate::macros::__private::Selector> =
            $crate::macros::__private::Lazy::new(|| {
                $crate::macros::__private::Selector::parse($e).unwrap()
            });
        &*SELECTOR
    }};
}

/// A regular expression compiled once, on first use.
#[macro_export]
macro_rules! regex {
    ($e: expr) => {{
        static PATTERN: $crate::macros::__private::Lazy<$crate::macros::__private::Regex> =
            $crate::macros::__private::Lazy::new(|| $crate::macros::__private::Regex::new($e).unwrap());
        &*PATTERN
    }};
}
