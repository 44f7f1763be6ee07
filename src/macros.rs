// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Declares a flat record with one `String` per form input.
///
/// Each entry is `rust_field => "FormId"`; the form ids become the column
/// names, in declaration order. Generates:
/// - `KEYS`: every form id, in order
/// - `from_source()`: snapshot of all inputs, absent ones as ""
/// - `get()`: lookup by form id (None only for unknown ids)
/// - `values()`: all values, in order
#[macro_export]
macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $field:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $( pub $field: ::std::string::String, )+
        }

        impl $name {
            pub const KEYS: &'static [&'static str] = &[ $( $key ),+ ];

            pub fn from_source<S: $crate::form::FieldSource + ?Sized>(src: &S) -> Self {
                Self {
                    $( $field: src.value($key).unwrap_or_default(), )+
                }
            }

            pub fn get(&self, key: &str) -> Option<&str> {
                match key {
                    $( $key => Some(self.$field.as_str()), )+
                    _ => None,
                }
            }

            pub fn values(&self) -> ::std::vec::Vec<&str> {
                vec![ $( self.$field.as_str() ),+ ]
            }
        }
    };
}
