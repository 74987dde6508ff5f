use std::fmt;

use smol_str::SmolStr;

macro_rules! define_identity {
    ($doc:literal, $type_name:ident) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $type_name(pub SmolStr);
        impl $type_name {
            pub fn new(name: impl Into<SmolStr>) -> Self {
                Self(name.into())
            }
        }
        impl From<&str> for $type_name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }
        impl fmt::Display for $type_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_identity!("The identity of a user function.", FunctionId);

define_identity!("The identity of a variable within a function body.", VarId);

define_identity!("The identity of a storage slot of a contract instance.", SlotId);
