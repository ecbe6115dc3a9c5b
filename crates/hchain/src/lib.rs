//! hchain: a heterogeneous fixed-length chain.
//!
//! A chain over the types `(T1, T2, ..., Tn)` holds one value of `T1` (the head) and owns, by
//! value, a chain over `(T2, ..., Tn)` (the rest). The chain over no types at all is [`Nil`]: it
//! has neither a head nor a rest, and terminates the nesting.
//!
//! All of the structure is resolved at compile time:
//! - [`Chain::LEN`]: the number of types in the sequence;
//! - [`Chain::COUNT`]: the number of types after the head (`0` for [`Nil`]);
//! - [`NonEmpty::SIZE_OF_HEAD`]: the storage size of the head type.
//!
//! Following `rest` past [`Nil`] does not compile.
//!
//! ```
//! use std::mem::size_of;
//! use std::os::raw::{c_char, c_float, c_int};
//!
//! use hchain::{Chain, NonEmpty};
//!
//! type Test = hchain::Chain![c_int, c_float, c_char];
//!
//! let test = Test::default();
//!
//! assert_eq!(Test::LEN, 3);
//! assert_eq!(Test::COUNT, 2);
//!
//! assert_eq!(test.size_of_head(), size_of::<c_int>());
//! assert_eq!(test.rest().size_of_head(), size_of::<c_float>());
//! assert_eq!(test.rest().rest().size_of_head(), size_of::<c_char>());
//!
//! let _nil: &hchain::Nil = test.rest().rest().rest();
//! ```
//!
//! # Reporting
//!
//! A [`Report`] prints the per-level layout ([`Levels`]) of a chain:
//!
//! ```
//! use hchain::{Report, ReportConfig, ReportStyle};
//!
//! let config = ReportConfig { style: ReportStyle::SizesAndCounts };
//!
//! let mut out = Vec::new();
//! Report::new(&config)
//!     .write::<hchain::Chain![u32, u16, u8], _>(&mut out)
//!     .expect("Failed to write the report");
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "4 2 \n2 1 \n1 0 \n");
//! ```

mod macros;

mod chain;
mod error;
mod level;
mod report;
mod report_config;

mod exports {
    pub use crate::chain::{Chain, Cons, Nil, NonEmpty};
    pub use crate::error::{ConfigError, ReportError};
    pub use crate::level::{measure_heads, HeadSizes, Level, Levels};
    pub use crate::report::Report;
    pub use crate::report_config::{ReportConfig, ReportStyle, ENV_REPORT_STYLE};

    pub mod ops {
        pub use crate::chain::{ChainAsRef, ChainFold, ChainLen, Folder};
    }

    pub mod index {
        pub use crate::chain::{At, Get, Here, Idx, Nested, There};
    }
}

pub use exports::*;
