//! Primitive marshaling types and export descriptors.
//!
//! This module defines the closed set of primitive kinds a native call
//! signature is described with, and the static descriptor tables built
//! from them. Descriptor tables are fixed at build time; nothing is ever
//! added to or removed from one at runtime.

use std::fmt;

/// A primitive marshaling kind for one argument or return slot of a
/// native call.
///
/// # Supported kinds
/// - `Ptr` for everything pointer-sized: handles, buffers, strings,
///   callbacks, struct pointers
/// - signed and unsigned 8/16/32/64-bit integers
/// - `Void`, only meaningful as a return kind
///
/// Struct and float marshaling are deliberately absent; structs cross the
/// boundary as opaque pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Ptr,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Void,
}

impl Tag {
    /// Get the size of this kind in bytes (x86-64 ABI).
    pub fn size(self) -> usize {
        match self {
            Tag::Void => 0,
            Tag::I8 | Tag::U8 => 1,
            Tag::I16 | Tag::U16 => 2,
            Tag::I32 | Tag::U32 => 4,
            Tag::I64 | Tag::U64 | Tag::Ptr => 8,
        }
    }

    /// Check if this is an integer kind.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Tag::I8 | Tag::U8 | Tag::I16 | Tag::U16 | Tag::I32 | Tag::U32 | Tag::I64 | Tag::U64
        )
    }

    /// Check if this is the pointer kind.
    pub fn is_pointer(self) -> bool {
        matches!(self, Tag::Ptr)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Ptr => "ptr",
            Tag::I8 => "i8",
            Tag::U8 => "u8",
            Tag::I16 => "i16",
            Tag::U16 => "u16",
            Tag::I32 => "i32",
            Tag::U32 => "u32",
            Tag::I64 => "i64",
            Tag::U64 => "u64",
            Tag::Void => "void",
        };
        write!(f, "{}", name)
    }
}

/// Raw signature of one export: argument kinds in call order plus the
/// return kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub args: &'static [Tag],
    pub ret: Tag,
}

impl Signature {
    /// Number of arguments the native call takes.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// Static declaration of one export: the name it is linked by and its raw
/// signature.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// The symbol's exported name in the shared library.
    pub name: &'static str,
    pub sig: Signature,
}

/// The full export surface of one shared library.
///
/// Supplied at build time, usually by a generator; the cache treats it as
/// the sole source of truth for which names may be bound.
#[derive(Debug)]
pub struct SymbolTable {
    /// Library name handed to the platform loader (e.g. `user32.dll`).
    pub library: &'static str,
    /// One descriptor per export. Slot indices in the cache are indices
    /// into this slice.
    pub descriptors: &'static [Descriptor],
}

impl SymbolTable {
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Descriptor> {
        self.descriptors.get(idx)
    }

    /// Linear lookup of a name's descriptor index. The cache builds a hash
    /// index over this at construction; this entry point exists for tools
    /// and tests.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_sizes() {
        assert_eq!(Tag::Void.size(), 0);
        assert_eq!(Tag::I8.size(), 1);
        assert_eq!(Tag::U16.size(), 2);
        assert_eq!(Tag::I32.size(), 4);
        assert_eq!(Tag::U64.size(), 8);
        assert_eq!(Tag::Ptr.size(), 8);
    }

    #[test]
    fn test_tag_classification() {
        assert!(Tag::I32.is_integer());
        assert!(Tag::U64.is_integer());
        assert!(!Tag::Ptr.is_integer());
        assert!(!Tag::Void.is_integer());
        assert!(Tag::Ptr.is_pointer());
        assert!(!Tag::I64.is_pointer());
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::Ptr.to_string(), "ptr");
        assert_eq!(Tag::U32.to_string(), "u32");
        assert_eq!(Tag::Void.to_string(), "void");
    }

    static TABLE: SymbolTable = SymbolTable {
        library: "libtest.so",
        descriptors: &[
            Descriptor {
                name: "alpha",
                sig: Signature {
                    args: &[Tag::Ptr, Tag::U32],
                    ret: Tag::I32,
                },
            },
            Descriptor {
                name: "beta",
                sig: Signature {
                    args: &[],
                    ret: Tag::Void,
                },
            },
        ],
    };

    #[test]
    fn test_table_lookup() {
        assert_eq!(TABLE.len(), 2);
        assert!(!TABLE.is_empty());
        assert_eq!(TABLE.position("alpha"), Some(0));
        assert_eq!(TABLE.position("beta"), Some(1));
        assert_eq!(TABLE.position("gamma"), None);
    }

    #[test]
    fn test_descriptor_arity() {
        assert_eq!(TABLE.descriptors[0].sig.arity(), 2);
        assert_eq!(TABLE.descriptors[1].sig.arity(), 0);
    }
}
