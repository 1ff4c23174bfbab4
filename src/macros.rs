/// Create a new opaque type
macro_rules! opaque_type {
    ( $name:ident ) => {
        #[doc(hidden)]
        pub struct $name {
            _opaque: (),
        }
    };

    ( $( $name:ident),* $(,)? ) => {
        $( opaque_type!{$name} )*
    };
}

/// Define GL error code constants and a function to get the name of an error
/// code
macro_rules! error_codes {
    ( $($name:ident = $value:expr),* $(,)? ) => {
        $( pub const $name: GLenum = $value; )*

        /// Get the name of a GL error code, returning `None` if the error code
        /// is unknown
        pub fn error_name(code: GLenum) -> Option<&'static str> {
            match code {
                $($name => Some(stringify!($name)),)*
                _ => None,
            }
        }
    };
}

/// Define the symbol catalog: the `Symbol` slot index enum, the ordered
/// `SYMBOLS` list, and one typed accessor per entry on `ProcTable`.
///
/// Extension entries are only compiled in with the `extensions` feature and
/// always come after the core entries, so core slot indices are the same
/// whether or not the feature is enabled.
macro_rules! gl_symbols {
    (
        core {
            $(
                fn $cname:ident ( $( $cpname:ident : $cpty:ty ),* $(,)? ) $( -> $crty:ty )? ;
            )*
        }

        extensions {
            $(
                fn $ename:ident ( $( $epname:ident : $epty:ty ),* $(,)? ) $( -> $erty:ty )? ;
            )*
        }
    ) => {
        use crate::catalog::SymbolEntry;
        use crate::table::ProcTable;
        use const_cstr::ConstCStr;

        /// A GL entry point known to the catalog. The discriminant is the
        /// entry's slot index in the proc table.
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(usize)]
        pub enum Symbol {
            $( $cname, )*
            $(
                #[cfg(feature = "extensions")]
                $ename,
            )*
        }

        /// Every catalog entry, in slot order.
        #[cfg(not(feature = "extensions"))]
        pub const SYMBOLS: &[SymbolEntry] = &[
            $(
                SymbolEntry::new(
                    Symbol::$cname,
                    ConstCStr { val: concat!("gl", stringify!($cname), "\0") },
                    stringify!(unsafe extern "system" fn( $( $cpname: $cpty ),* ) $( -> $crty )?),
                ),
            )*
        ];

        /// Every catalog entry, in slot order.
        #[cfg(feature = "extensions")]
        pub const SYMBOLS: &[SymbolEntry] = &[
            $(
                SymbolEntry::new(
                    Symbol::$cname,
                    ConstCStr { val: concat!("gl", stringify!($cname), "\0") },
                    stringify!(unsafe extern "system" fn( $( $cpname: $cpty ),* ) $( -> $crty )?),
                ),
            )*
            $(
                SymbolEntry::new(
                    Symbol::$ename,
                    ConstCStr { val: concat!("gl", stringify!($ename), "\0") },
                    stringify!(unsafe extern "system" fn( $( $epname: $epty ),* ) $( -> $erty )?),
                ),
            )*
        ];

        /// Number of slots in the proc table.
        pub const SYMBOL_COUNT: usize = SYMBOLS.len();

        #[allow(non_snake_case)]
        impl ProcTable {
            $(
                #[doc = concat!("The resolved `gl", stringify!($cname), "` entry point, if available.")]
                #[inline]
                pub fn $cname(&self) -> Option<unsafe extern "system" fn( $( $cpname: $cpty ),* ) $( -> $crty )?> {
                    self.get_symbol(Symbol::$cname)
                        .map(|f| unsafe { std::mem::transmute(f) })
                }
            )*

            $(
                #[doc = concat!("The resolved `gl", stringify!($ename), "` entry point, if available.")]
                #[cfg(feature = "extensions")]
                #[inline]
                pub fn $ename(&self) -> Option<unsafe extern "system" fn( $( $epname: $epty ),* ) $( -> $erty )?> {
                    self.get_symbol(Symbol::$ename)
                        .map(|f| unsafe { std::mem::transmute(f) })
                }
            )*
        }
    };
}
