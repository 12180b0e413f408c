use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};


macro_rules! create_integer_id_newtype {
    ($struct_name:ident) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $struct_name(pub(crate) i64);

        impl $struct_name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl FromStr for $struct_name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let inner_id = <i64 as FromStr>::from_str(s)?;

                Ok(Self(inner_id))
            }
        }

        impl std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}


create_integer_id_newtype!(WordId);
