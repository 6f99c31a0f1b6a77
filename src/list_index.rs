use crate::cast::to_number;
use crate::core::Value;
use num_traits::ToPrimitive;
use rand::Rng;

/// Outcome of resolving a list-index block argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListIndex {
    /// 1-based position inside the list.
    Index(usize),
    /// The argument was `"all"` and the block accepts it.
    All,
    Invalid,
}

impl ListIndex {
    pub fn is_invalid(&self) -> bool {
        matches!(self, ListIndex::Invalid)
    }

    /// 0-based offset for slice access, if this is a concrete position.
    pub fn zero_based(&self) -> Option<usize> {
        match self {
            ListIndex::Index(i) => i.checked_sub(1),
            _ => None,
        }
    }
}

/// Resolve a block argument to a 1-based index into a list of `length` items.
///
/// Besides plain numbers (floored after a block number cast) the strings
/// `"last"`, `"random"`/`"any"` and, when `accept_all` is set, `"all"` are
/// understood. Random picks draw from `rng`.
pub fn to_list_index<R: Rng + ?Sized>(index: &Value, length: usize, accept_all: bool, rng: &mut R) -> ListIndex {
    if let Value::String(s) = index {
        match s.as_str() {
            "all" => {
                return if accept_all { ListIndex::All } else { ListIndex::Invalid };
            }
            "last" => {
                return if length > 0 { ListIndex::Index(length) } else { ListIndex::Invalid };
            }
            "random" | "any" => {
                return if length > 0 {
                    ListIndex::Index(rng.gen_range(1..=length))
                } else {
                    ListIndex::Invalid
                };
            }
            _ => {}
        }
    }
    let floored = to_number(index).floor();
    match floored.to_usize() {
        Some(i) if (1..=length).contains(&i) => ListIndex::Index(i),
        _ => {
            log::debug!("to_list_index: {:?} out of range for length {}", index, length);
            ListIndex::Invalid
        }
    }
}

/// [`to_list_index`] drawing random picks from the thread-local generator.
#[cfg(feature = "std")]
pub fn to_list_index_thread_rng(index: &Value, length: usize, accept_all: bool) -> ListIndex {
    to_list_index(index, length, accept_all, &mut rand::thread_rng())
}
