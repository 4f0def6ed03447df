//! C type resolution engine
//!
//! Maps a raw C type spelling onto the closed set of [`NativeType`] tags the
//! FFI runtime understands. Spellings with no primitive mapping fall back to
//! pointer-pattern heuristics and finally to an opaque reference into the
//! external `Types` namespace — existence of the referenced type is deferred
//! to the point the generated manifest is consumed, not validated here.
//!
//! Also provides [`split`], which separates a declarator fragment such as
//! `"const char * name"` into its type and identifier portions.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::errors::ParseError;

/// Canonical machine-level type tags shared by every component.
///
/// Abstracts over C's many equivalent spellings: every entry in the mapping
/// table resolves to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    I8,
    I16,
    I32,
    I64,
    ISize,

    U8,
    U16,
    U32,
    U64,
    USize,

    F32,
    F64,

    Bool,
    Void,

    Buffer,
    Function,
    Pointer,
}

impl NativeType {
    /// The lowercase tag spelled into the manifest.
    pub fn as_str(self) -> &'static str {
        match self {
            NativeType::I8 => "i8",
            NativeType::I16 => "i16",
            NativeType::I32 => "i32",
            NativeType::I64 => "i64",
            NativeType::ISize => "isize",
            NativeType::U8 => "u8",
            NativeType::U16 => "u16",
            NativeType::U32 => "u32",
            NativeType::U64 => "u64",
            NativeType::USize => "usize",
            NativeType::F32 => "f32",
            NativeType::F64 => "f64",
            NativeType::Bool => "bool",
            NativeType::Void => "void",
            NativeType::Buffer => "buffer",
            NativeType::Function => "function",
            NativeType::Pointer => "pointer",
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only mapping from qualifier-stripped C spellings to native tags.
///
/// Built once on first use and never mutated afterwards, so it is safe to
/// share across threads without synchronization.
static MAP: LazyLock<FxHashMap<&'static str, NativeType>> = LazyLock::new(|| {
    [
        // Primary types
        ("void", NativeType::Void),
        ("bool", NativeType::Bool),
        ("char", NativeType::I8),
        ("signed char", NativeType::I8),
        ("unsigned char", NativeType::U8),
        ("short", NativeType::I16),
        ("short int", NativeType::I16),
        ("signed short", NativeType::I16),
        ("signed short int", NativeType::I16),
        ("unsigned short", NativeType::U16),
        ("unsigned short int", NativeType::U16),
        ("int", NativeType::I32),
        ("signed", NativeType::I32),
        ("signed int", NativeType::I32),
        ("unsigned", NativeType::U32),
        ("unsigned int", NativeType::U32),
        ("long", NativeType::I32),
        ("long int", NativeType::I32),
        ("signed long", NativeType::I32),
        ("signed long int", NativeType::I32),
        ("unsigned long", NativeType::U32),
        ("unsigned long int", NativeType::U32),
        ("long long", NativeType::I64),
        ("long long int", NativeType::I64),
        ("signed long long", NativeType::I64),
        ("signed long long int", NativeType::I64),
        ("unsigned long long", NativeType::U64),
        ("unsigned long long int", NativeType::U64),
        ("float", NativeType::F32),
        ("double", NativeType::F64),
        // C99 fixed-width integer types
        ("int8_t", NativeType::I8),
        ("int16_t", NativeType::I16),
        ("int32_t", NativeType::I32),
        ("int64_t", NativeType::I64),
        ("int_least8_t", NativeType::I8),
        ("int_least16_t", NativeType::I16),
        ("int_least32_t", NativeType::I32),
        ("int_least64_t", NativeType::I64),
        ("int_fast8_t", NativeType::I8),
        ("int_fast16_t", NativeType::I16),
        ("int_fast32_t", NativeType::I32),
        ("int_fast64_t", NativeType::I64),
        ("intptr_t", NativeType::I64),
        ("intmax_t", NativeType::I64),
        ("uint8_t", NativeType::U8),
        ("uint16_t", NativeType::U16),
        ("uint32_t", NativeType::U32),
        ("uint64_t", NativeType::U64),
        ("uint_least8_t", NativeType::U8),
        ("uint_least16_t", NativeType::U16),
        ("uint_least32_t", NativeType::U32),
        ("uint_least64_t", NativeType::U64),
        ("uint_fast8_t", NativeType::U8),
        ("uint_fast16_t", NativeType::U16),
        ("uint_fast32_t", NativeType::U32),
        ("uint_fast64_t", NativeType::U64),
        ("uintptr_t", NativeType::U64),
        ("uintmax_t", NativeType::U64),
        ("wchar_t", NativeType::U16),
        ("char16_t", NativeType::U16),
        ("char32_t", NativeType::U32),
        ("size_t", NativeType::USize),
        ("ssize_t", NativeType::ISize),
        ("ptrdiff_t", NativeType::ISize),
        // Buffers
        ("char *", NativeType::Buffer),
        ("char[]", NativeType::Buffer),
        ("signed char *", NativeType::Buffer),
        ("signed char[]", NativeType::Buffer),
        ("unsigned char *", NativeType::Buffer),
        ("unsigned char[]", NativeType::Buffer),
        ("wchar_t *", NativeType::Buffer),
        ("wchar_t[]", NativeType::Buffer),
        ("char16_t *", NativeType::Buffer),
        ("char16_t[]", NativeType::Buffer),
        ("char32_t *", NativeType::Buffer),
        ("char32_t[]", NativeType::Buffer),
    ]
    .into_iter()
    .collect()
});

/// Qualifier keywords stripped from the front of a spelling before lookup.
const QUALIFIERS: [&str; 3] = ["const", "volatile", "restrict"];

const PTR_CANDIDATE: &str = "*";
const FUNCTION_PTR_CANDIDATE: &str = "(*";
const FUNCTION_PTR_PTR_CANDIDATE: &str = "(**";
const VARIADIC_CANDIDATE: &str = "...";

/// A resolved native-type expression: either a quoted canonical tag or a
/// reference into the external `Types` namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Native(NativeType),
    Named(String),
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::Native(native) => write!(f, "\"{native}\""),
            ResolvedType::Named(name) => write!(f, "Types.{name}"),
        }
    }
}

/// The outcome of resolving one C type spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// The original spelling, trimmed but otherwise untouched.
    pub c_type: String,
    /// The resolved manifest expression.
    pub native_type: ResolvedType,
}

/// A declarator separated into its type and identifier portions.
///
/// `c_name` is `None` for unnamed declarators, e.g. the bare type tokens that
/// appear in parameter lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    pub c_type: String,
    pub c_name: Option<String>,
}

/// Separates a declarator fragment into type and identifier.
///
/// Scans from the end for the last space or asterisk: everything after it is
/// the identifier, everything up to and including it is the type. With no
/// split point the whole input is the type.
///
/// ```
/// use ffigen::types::split;
///
/// let result = split("const char * name");
/// assert_eq!(result.c_type, "const char *");
/// assert_eq!(result.c_name.as_deref(), Some("name"));
///
/// assert_eq!(split("int").c_name, None);
/// ```
pub fn split(input: &str) -> SplitResult {
    let input = input.trim();

    match input.rfind([' ', '*']) {
        Some(index) => {
            let name = input[index + 1..].trim();
            SplitResult {
                c_type: input[..=index].trim().to_string(),
                c_name: (!name.is_empty()).then(|| name.to_string()),
            }
        }
        None => SplitResult {
            c_type: input.to_string(),
            c_name: None,
        },
    }
}

/// Resolves a C type spelling to a [`ParseResult`].
///
/// Resolution order is significant: exact table matches win over the pointer
/// heuristics, and the `(**` check must run before `(*` because its marker is
/// a superstring of the shorter one.
///
/// Fails only when the spelling contains the `...` variadic marker.
pub fn parse(c_type: &str) -> Result<ParseResult, ParseError> {
    let c_type = c_type.trim();

    if c_type.contains(VARIADIC_CANDIDATE) {
        return Err(ParseError::UnsupportedVariadic(c_type.to_string()));
    }

    // Qualifiers may appear multiple times and in any order; keep stripping
    // whole keywords until none remains at the front.
    let mut local = c_type;
    loop {
        let mut stripped = false;
        for qualifier in QUALIFIERS {
            if let Some(rest) = local.strip_prefix(qualifier) {
                if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                    local = rest.trim_start();
                    stripped = true;
                }
            }
        }
        if !stripped {
            break;
        }
    }

    let native_type = if let Some(&native) = MAP.get(local) {
        ResolvedType::Native(native)
    } else if local.contains(FUNCTION_PTR_PTR_CANDIDATE) {
        ResolvedType::Native(NativeType::Pointer)
    } else if local.contains(FUNCTION_PTR_CANDIDATE) {
        ResolvedType::Native(NativeType::Function)
    } else if local.contains(PTR_CANDIDATE) {
        ResolvedType::Native(NativeType::Pointer)
    } else {
        // Opaque named type: deferred to the external `Types` namespace.
        ResolvedType::Named(local.to_string())
    };

    Ok(ParseResult {
        c_type: c_type.to_string(),
        native_type,
    })
}
