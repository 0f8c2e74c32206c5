//! Enum decoding with forward compatibility.
//!
//! API enum fields arrive as lowercase string tokens. Servers add new
//! tokens between SDK releases, so decoding is total: a token this build
//! does not know degrades to the enum's `Unrecognized` variant instead of
//! failing the whole response. Matching on a decoded enum therefore always
//! forces callers to consider the unknown case.

/// A Rust enum with a wire-token representation.
///
/// Implementations are generated with [`wire_enum!`](crate::wire_enum),
/// which also adds the `Unrecognized` catch-all variant.
pub trait WireEnum: Sized {
    /// Decodes a wire token. Never fails; unknown tokens yield the
    /// catch-all variant.
    fn from_token(token: &str) -> Self;

    /// Returns the wire token, or `None` for the catch-all variant.
    ///
    /// The `None` case makes the information loss explicit: a value that
    /// decoded as unrecognized cannot be re-sent.
    fn token(&self) -> Option<&'static str>;
}

/// Generates an API enum together with its [`WireEnum`] impl.
///
/// Each listed variant maps to one wire token. An `Unrecognized` variant
/// is appended automatically and absorbs every token not listed.
///
/// ```rust
/// use chargebee_api::{wire_enum, wire::WireEnum};
///
/// wire_enum! {
///     /// How a refund was settled.
///     pub enum RefundMethod {
///         /// Returned to the original instrument.
///         Original => "original",
///         /// Added to promotional credits.
///         Credits => "credits",
///     }
/// }
///
/// assert_eq!(RefundMethod::from_token("credits"), RefundMethod::Credits);
/// assert_eq!(RefundMethod::from_token("cash"), RefundMethod::Unrecognized);
/// assert_eq!(RefundMethod::Unrecognized.token(), None);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Catch-all for tokens introduced after this SDK release.
            Unrecognized,
        }

        impl $crate::wire::WireEnum for $name {
            fn from_token(token: &str) -> Self {
                match token {
                    $($token => Self::$variant,)+
                    other => {
                        ::tracing::warn!(
                            token = other,
                            kind = stringify!($name),
                            "unrecognized wire token, decoding as catch-all"
                        );
                        Self::Unrecognized
                    }
                }
            }

            fn token(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($token),)+
                    Self::Unrecognized => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::WireEnum;

    crate::wire_enum! {
        /// Exercise enum for the macro itself.
        pub enum Fruit {
            Apple => "apple",
            BloodOrange => "blood_orange",
        }
    }

    #[test]
    fn test_known_tokens_round_trip() {
        assert_eq!(Fruit::from_token("apple"), Fruit::Apple);
        assert_eq!(Fruit::from_token("blood_orange"), Fruit::BloodOrange);
        assert_eq!(Fruit::Apple.token(), Some("apple"));
        assert_eq!(Fruit::BloodOrange.token(), Some("blood_orange"));
    }

    #[test]
    fn test_unknown_token_degrades_to_unrecognized() {
        assert_eq!(Fruit::from_token("durian"), Fruit::Unrecognized);
    }

    #[test]
    fn test_decoding_is_case_sensitive() {
        // Wire tokens are lowercase; anything else is a foreign token.
        assert_eq!(Fruit::from_token("Apple"), Fruit::Unrecognized);
    }

    #[test]
    fn test_unrecognized_has_no_token() {
        assert_eq!(Fruit::Unrecognized.token(), None);
    }
}
