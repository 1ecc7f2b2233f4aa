use super::{BindKind, Type};
use crate::{Error, Result};

use indexmap::IndexMap;

/// The outcome of declaring an abstract type: the engine-native spelling and
/// the wire binding kind values of that type use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declared {
    pub spelling: String,
    pub bind: BindKind,
}

/// Table of abstract type names and their engine descriptors.
///
/// The registry is constructed explicitly and passed to whatever needs it;
/// there is no process-wide singleton. Registration is idempotent: declaring
/// a name that already holds the same descriptor is a no-op, while declaring
/// it with a different descriptor is a configuration error.
///
/// The reverse direction (engine spelling back to abstract type) is served by
/// [`reverse_lookup`](Self::reverse_lookup). Every canonical scalar name
/// round-trips through its own spelling. Parameterized spellings
/// (`FixedString(n)`, `Decimal(p, s)`, `Array(...)`) and the unsigned integer
/// spellings are recovered structurally; all fixed-string lengths fold into
/// the fixed-string family, with the length carried out-of-band. `UInt8`
/// belongs to `boolean`, which owns that spelling.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: IndexMap<String, Type>,
    reverse: IndexMap<String, String>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
            reverse: IndexMap::new(),
        }
    }

    /// A registry holding the canonical scalar set.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let defaults = [
            ("boolean", Type::Boolean),
            (
                "tinyint",
                Type::Integer {
                    bits: 8,
                    unsigned: false,
                },
            ),
            (
                "smallint",
                Type::Integer {
                    bits: 16,
                    unsigned: false,
                },
            ),
            (
                "integer",
                Type::Integer {
                    bits: 32,
                    unsigned: false,
                },
            ),
            (
                "bigint",
                Type::Integer {
                    bits: 64,
                    unsigned: false,
                },
            ),
            ("float", Type::Float { bits: 32 }),
            ("double", Type::Float { bits: 64 }),
            (
                "decimal",
                Type::Decimal {
                    precision: Some((10, 0)),
                },
            ),
            ("string", Type::String),
            ("date", Type::Date),
            ("datetime", Type::DateTime),
        ];

        for (name, ty) in defaults {
            // Infallible: the set above has no duplicate names.
            registry.register(name, ty).unwrap();
        }

        registry
    }

    /// Registers an abstract type name.
    ///
    /// Re-registering an existing name with an equal descriptor is a no-op.
    pub fn register(&mut self, name: impl Into<String>, ty: Type) -> Result<()> {
        let name = name.into();

        if let Some(existing) = self.types.get(&name) {
            if *existing == ty {
                return Ok(());
            }
            return Err(Error::configuration(format!(
                "type `{}` is already registered as {}",
                name,
                existing.engine_spelling()
            )));
        }

        let spelling = ty.engine_spelling();
        self.reverse.entry(spelling).or_insert_with(|| name.clone());
        self.types.insert(name, ty);
        Ok(())
    }

    /// Resolves an abstract type name to its engine spelling and wire
    /// binding kind.
    pub fn declare(&self, name: &str) -> Result<Declared> {
        let ty = self
            .lookup(name)
            .ok_or_else(|| Error::configuration(format!("unknown abstract type `{}`", name)))?;

        Ok(Declared {
            spelling: ty.engine_spelling(),
            bind: ty.bind_kind(),
        })
    }

    /// Returns the registered descriptor for an abstract type name.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Recovers the abstract type behind an engine spelling.
    ///
    /// Registered spellings win; parameterized and unsigned spellings are
    /// parsed structurally.
    pub fn reverse_lookup(&self, spelling: &str) -> Option<Type> {
        if let Some(name) = self.reverse.get(spelling) {
            return self.types.get(name).cloned();
        }

        if let Some(inner) = parenthesized(spelling, "Array") {
            return self.reverse_lookup(inner).map(|ty| Type::Array(ty.into()));
        }

        if let Some(len) = parenthesized(spelling, "FixedString") {
            return len.trim().parse().ok().map(Type::FixedString);
        }

        if let Some(args) = parenthesized(spelling, "Decimal") {
            let (precision, scale) = args.split_once(',')?;
            return Some(Type::Decimal {
                precision: Some((
                    precision.trim().parse().ok()?,
                    scale.trim().parse().ok()?,
                )),
            });
        }

        let (unsigned, bits) = match spelling.strip_prefix("UInt") {
            Some(bits) => (true, bits),
            None => (false, spelling.strip_prefix("Int")?),
        };
        let bits: u8 = bits.parse().ok()?;
        matches!(bits, 8 | 16 | 32 | 64).then_some(Type::Integer { bits, unsigned })
    }

    /// Iterates the registered abstract names and their descriptors.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Extracts `inner` from a `head(inner)` spelling.
fn parenthesized<'a>(spelling: &'a str, head: &str) -> Option<&'a str> {
    spelling
        .strip_prefix(head)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_canonical_scalar_round_trips() {
        let registry = TypeRegistry::with_defaults();

        for (name, ty) in registry.iter() {
            let declared = registry.declare(name).unwrap();
            let recovered = registry.reverse_lookup(&declared.spelling).unwrap();
            assert_eq!(recovered, *ty, "round trip failed for `{}`", name);
        }
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = TypeRegistry::with_defaults();
        registry.register("boolean", Type::Boolean).unwrap();

        let err = registry.register("boolean", Type::String).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn reverse_parses_structural_spellings() {
        let registry = TypeRegistry::with_defaults();

        assert_eq!(
            registry.reverse_lookup("FixedString(16)"),
            Some(Type::FixedString(16))
        );
        assert_eq!(
            registry.reverse_lookup("Array(UInt32)"),
            Some(Type::Array(Box::new(Type::Integer {
                bits: 32,
                unsigned: true,
            })))
        );
        assert_eq!(
            registry.reverse_lookup("Decimal(12, 4)"),
            Some(Type::Decimal {
                precision: Some((12, 4))
            })
        );
        assert_eq!(registry.reverse_lookup("Widget"), None);
    }

    #[test]
    fn boolean_owns_uint8() {
        let registry = TypeRegistry::with_defaults();
        assert_eq!(registry.reverse_lookup("UInt8"), Some(Type::Boolean));
        assert_eq!(
            registry.reverse_lookup("UInt16"),
            Some(Type::Integer {
                bits: 16,
                unsigned: true,
            })
        );
    }

    #[test]
    fn declare_reports_bind_kinds() {
        let registry = TypeRegistry::with_defaults();

        assert_eq!(registry.declare("bigint").unwrap().bind, BindKind::Integer);
        assert_eq!(registry.declare("boolean").unwrap().bind, BindKind::Boolean);
        assert_eq!(registry.declare("datetime").unwrap().bind, BindKind::Text);
        assert!(registry.declare("geometry").is_err());
    }
}
