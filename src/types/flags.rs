use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::prelude::*;

/// Determines what is returned when an entry is extracted from, or iterated over in, a queue.
#[derive(
    IntoPrimitive, TryFromPrimitive, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug,
)]
#[repr(u8)]
pub enum ExtractFlags {
    /// Only the data of the entry.
    Data = 1,

    /// Only the priority of the entry.
    Priority = 2,

    /// Data and priority together.
    Both = 3,
}

impl ExtractFlags {
    pub fn name(&self) -> &'static str {
        match self {
            ExtractFlags::Data => "data",
            ExtractFlags::Priority => "priority",
            ExtractFlags::Both => "both",
        }
    }

    /// Interpret a raw flag value, as used by the numeric `EXTR_*` constants.
    pub fn from_raw(value: u8) -> Result<Self> {
        Self::try_from(value).map_err(|_| {
            Error::InvalidArgument(format!(
                "{} is not a valid extract flag, expected one of 1 (data), 2 (priority) or 3 (both)",
                value
            ))
        })
    }

    /// Shape an entry according to these flags.
    pub fn shape<T, P>(self, data: T, priority: P) -> Extracted<T, P> {
        match self {
            ExtractFlags::Data => Extracted::Data(data),
            ExtractFlags::Priority => Extracted::Priority(priority),
            ExtractFlags::Both => Extracted::Both { data, priority },
        }
    }
}

impl Default for ExtractFlags {
    fn default() -> Self {
        ExtractFlags::Data
    }
}

impl fmt::Display for ExtractFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtractFlags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "data" | "1" => Ok(ExtractFlags::Data),
            "priority" | "2" => Ok(ExtractFlags::Priority),
            "both" | "3" => Ok(ExtractFlags::Both),
            other => Err(Error::InvalidArgument(format!(
                "unknown extract flags {:?}",
                other
            ))),
        }
    }
}

/// An entry, shaped by the [`ExtractFlags`] of the queue it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extracted<T, P> {
    Data(T),
    Priority(P),
    Both { data: T, priority: P },
}

impl<T, P> Extracted<T, P> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Extracted::Data(data) | Extracted::Both { data, .. } => Some(data),
            Extracted::Priority(_) => None,
        }
    }

    pub fn priority(&self) -> Option<&P> {
        match self {
            Extracted::Priority(priority) | Extracted::Both { priority, .. } => Some(priority),
            Extracted::Data(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Extracted::Data(data) | Extracted::Both { data, .. } => Some(data),
            Extracted::Priority(_) => None,
        }
    }

    pub fn into_priority(self) -> Option<P> {
        match self {
            Extracted::Priority(priority) | Extracted::Both { priority, .. } => Some(priority),
            Extracted::Data(_) => None,
        }
    }
}

impl<T: Clone, P: Copy> Extracted<&T, P> {
    pub fn cloned(self) -> Extracted<T, P> {
        match self {
            Extracted::Data(data) => Extracted::Data(data.clone()),
            Extracted::Priority(priority) => Extracted::Priority(priority),
            Extracted::Both { data, priority } => Extracted::Both {
                data: data.clone(),
                priority,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(ExtractFlags::from_raw(1).unwrap(), ExtractFlags::Data);
        assert_eq!(ExtractFlags::from_raw(2).unwrap(), ExtractFlags::Priority);
        assert_eq!(ExtractFlags::from_raw(3).unwrap(), ExtractFlags::Both);
        assert_eq!(u8::from(ExtractFlags::Both), 3);

        for raw in [0u8, 4, 7, 255].iter().copied() {
            assert!(ExtractFlags::from_raw(raw).unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("data".parse::<ExtractFlags>().unwrap(), ExtractFlags::Data);
        assert_eq!(" both ".parse::<ExtractFlags>().unwrap(), ExtractFlags::Both);
        assert_eq!("2".parse::<ExtractFlags>().unwrap(), ExtractFlags::Priority);
        assert!("foo".parse::<ExtractFlags>().unwrap_err().is_invalid_argument());

        for flags in [ExtractFlags::Data, ExtractFlags::Priority, ExtractFlags::Both].iter() {
            assert_eq!(flags.to_string().parse::<ExtractFlags>().unwrap(), *flags);
        }
    }

    #[test]
    fn test_shape() {
        assert_eq!(ExtractFlags::Data.shape("a", 5), Extracted::Data("a"));
        assert_eq!(ExtractFlags::Priority.shape("a", 5), Extracted::Priority(5));
        assert_eq!(
            ExtractFlags::Both.shape("a", 5),
            Extracted::Both {
                data: "a",
                priority: 5
            }
        );

        let both = ExtractFlags::Both.shape("a", 5);
        assert_eq!(both.data(), Some(&"a"));
        assert_eq!(both.priority(), Some(&5));
        assert_eq!(Extracted::<&str, i32>::Priority(5).into_data(), None);
        assert_eq!(ExtractFlags::Data.shape(&1u8, 0).cloned(), Extracted::Data(1u8));
    }
}
