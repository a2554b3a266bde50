//! Flag translation.
//!
//! Every declared flag becomes either a reference to one of the runtime's
//! standard flags (whose values resolve through preference files) or a
//! generic boolean/string flag.

use passgen_core::strip_flag_prefix;
use passgen_manifest::FlagSpec;

/// A flag with first-class, preference-backed support in the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFlag {
    Org,
    Project,
    Environment,
    Service,
    User,
    Instance,
}

impl StandardFlag {
    pub const ALL: [StandardFlag; 6] = [
        StandardFlag::Org,
        StandardFlag::Project,
        StandardFlag::Environment,
        StandardFlag::Service,
        StandardFlag::User,
        StandardFlag::Instance,
    ];

    /// Exact, case-sensitive match on the long alias.
    pub fn from_long(long: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.long() == long)
    }

    pub fn long(&self) -> &'static str {
        match self {
            StandardFlag::Org => "--org",
            StandardFlag::Project => "--project",
            StandardFlag::Environment => "--environment",
            StandardFlag::Service => "--service",
            StandardFlag::User => "--user",
            StandardFlag::Instance => "--instance",
        }
    }

    /// Identifier exported by the runtime package.
    pub fn ident(&self) -> &'static str {
        match self {
            StandardFlag::Org => "StdOrgFlag",
            StandardFlag::Project => "StdProjectFlag",
            StandardFlag::Environment => "StdEnvFlag",
            StandardFlag::Service => "StdServiceFlag",
            StandardFlag::User => "StdUserFlag",
            StandardFlag::Instance => "StdInstanceFlag",
        }
    }
}

/// Value kind of a generic flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    String,
}

/// A flag that is not one of the standard flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericFlag {
    /// Combined alias list, e.g. `"name, n"`
    pub name: String,
    pub kind: FlagKind,
    /// Only ever set for string flags
    pub default: Option<String>,
    pub usage: String,
}

/// The outcome of translating one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatedFlag {
    Standard(StandardFlag),
    Generic(GenericFlag),
}

impl TranslatedFlag {
    /// True iff the flag is preference-backed.
    pub fn is_standard(&self) -> bool {
        matches!(self, TranslatedFlag::Standard(_))
    }
}

/// Maps flag declarations onto runtime flag constructs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagTranslator;

impl FlagTranslator {
    pub fn translate(&self, flag: &FlagSpec) -> TranslatedFlag {
        if let Some(standard) = StandardFlag::from_long(&flag.long) {
            return TranslatedFlag::Standard(standard);
        }

        let mut name = strip_flag_prefix(&flag.long).to_string();
        if let Some(short) = &flag.short {
            name.push_str(", ");
            name.push_str(strip_flag_prefix(short));
        }

        let (kind, default) = if flag.is_bool {
            (FlagKind::Bool, None)
        } else {
            let default = flag.default.clone().filter(|d| !d.is_empty());
            (FlagKind::String, default)
        };

        TranslatedFlag::Generic(GenericFlag {
            name,
            kind,
            default,
            usage: flag.description.clone(),
        })
    }

    /// Whether any of `flags` is preference-backed.
    pub fn uses_standard(&self, flags: &[FlagSpec]) -> bool {
        flags.iter().any(|f| self.translate(f).is_standard())
    }
}
