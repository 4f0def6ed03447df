//! Manifest emission
//!
//! [`CodeWriter`] is a line-oriented text accumulator with an indent-level
//! counter; [`InterfaceWriter`] builds on it to emit one manifest block per
//! [`Signature`] between a `begin`/`end` framing pair.
//!
//! Emission is append-only and single-pass: block order in the output equals
//! the call order of [`InterfaceWriter::write_symbol`]. Every opened block is
//! closed within the same call, so indentation stays balanced on every path.

use crate::symbol::Signature;
use crate::types::ResolvedType;

/// Line-oriented text accumulator with indent tracking.
#[derive(Debug)]
pub struct CodeWriter {
    output: String,
    indent: usize,

    /// Indent with tab characters instead of spaces.
    pub use_tabs: bool,
    /// Spaces per indent level when `use_tabs` is off.
    pub indent_spaces: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
            use_tabs: false,
            indent_spaces: 4,
        }
    }

    fn reset(&mut self) {
        self.output.clear();
        self.indent = 0;
    }

    /// Appends `line` prefixed by the current indent, plus a newline.
    fn writeln(&mut self, line: &str) {
        for _ in 0..self.indent {
            if self.use_tabs {
                self.output.push('\t');
            } else {
                for _ in 0..self.indent_spaces {
                    self.output.push(' ');
                }
            }
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Appends a bare newline, used for visual spacing and never indented.
    fn newline(&mut self) {
        self.output.push('\n');
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Manifest emission options.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Module path the `Types` namespace is imported from, e.g. `"./types.ts"`.
    pub types_import_source: String,
}

/// Emits the `Deno.ForeignLibraryInterface` manifest, one symbol block at a
/// time.
///
/// Usage is `begin`, any number of `write_symbol` calls, then `end`; the
/// accumulated text is read back with [`InterfaceWriter::output`] or
/// [`InterfaceWriter::into_output`].
#[derive(Debug, Default)]
pub struct InterfaceWriter {
    writer: CodeWriter,
}

impl InterfaceWriter {
    pub fn new() -> Self {
        Self {
            writer: CodeWriter::new(),
        }
    }

    /// Discards accumulated output and resets indentation.
    pub fn reset(&mut self) {
        self.writer.reset();
    }

    /// The manifest text accumulated so far.
    pub fn output(&self) -> &str {
        &self.writer.output
    }

    pub fn into_output(self) -> String {
        self.writer.output
    }

    /// Emits the `Types` namespace import and opens the symbols collection.
    pub fn begin(&mut self, config: &WriterConfig) {
        self.writer.writeln(&format!(
            "import * as Types from \"{}\";",
            config.types_import_source
        ));
        self.writer.newline();
        self.writer.writeln("export const symbols = {");
        self.writer.indent += 1;
    }

    /// Closes the symbols collection with its type-conformance assertion.
    pub fn end(&mut self) {
        self.writer.indent -= 1;
        self.writer
            .writeln("} as const satisfies Deno.ForeignLibraryInterface;");
    }

    /// Emits one self-contained symbol block followed by a blank spacer line.
    pub fn write_symbol(&mut self, symbol: &Signature) {
        if let Some(docstring) = &symbol.docstring {
            self.writer.writeln(&format!("/** {docstring} */"));
        }

        self.writer.writeln(&format!("{}: {{", symbol.lib_name));
        self.writer.indent += 1;

        self.writer.writeln(&format!("name: \"{}\",", symbol.c_name));

        // Two aligned lists: the runtime tags actually declared, and the
        // compile-time tuple shape pairing each identifier with its
        // type-check expression.
        let mut parameters = Vec::new();
        let mut assertions = Vec::new();

        for parameter in &symbol.parameters {
            let tag = parameter.ty.native_type.to_string();
            parameters.push(tag.clone());

            match &parameter.c_name {
                None => assertions.push(tag),
                Some(name) => match &parameter.ty.native_type {
                    ResolvedType::Native(_) => assertions.push(format!("{name}: {tag}")),
                    ResolvedType::Named(_) => assertions.push(format!("{name}: typeof {tag}")),
                },
            }
        }

        self.writer.writeln(&format!(
            "parameters: [{}] as [{}],",
            parameters.join(","),
            assertions.join(", ")
        ));

        self.writer.writeln(&format!(
            "result: {}, // {}",
            symbol.return_type.native_type, symbol.return_type.c_type
        ));
        self.writer
            .writeln(&format!("optional: {},", symbol.is_optional));
        self.writer
            .writeln(&format!("nonblocking: {}", symbol.is_nonblocking));

        self.writer.indent -= 1;
        self.writer.writeln("},");
        self.writer.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Config, Parameter};
    use crate::types::{NativeType, ParseResult};

    fn config() -> WriterConfig {
        WriterConfig {
            types_import_source: "./types.ts".to_string(),
        }
    }

    #[test]
    fn test_framing() {
        let mut writer = InterfaceWriter::new();
        writer.begin(&config());
        writer.end();

        assert_eq!(
            writer.output(),
            "import * as Types from \"./types.ts\";\n\
             \n\
             export const symbols = {\n\
             } as const satisfies Deno.ForeignLibraryInterface;\n"
        );
    }

    #[test]
    fn test_symbol_block() {
        let signature =
            crate::symbol::parse("int add(int a, int b) // adds two numbers", &Config::default())
                .unwrap();

        let mut writer = InterfaceWriter::new();
        writer.begin(&config());
        writer.write_symbol(&signature);
        writer.end();

        assert_eq!(
            writer.output(),
            "import * as Types from \"./types.ts\";\n\
             \n\
             export const symbols = {\n\
             \x20   /** adds two numbers */\n\
             \x20   add: {\n\
             \x20       name: \"add\",\n\
             \x20       parameters: [\"i32\",\"i32\"] as [a: \"i32\", b: \"i32\"],\n\
             \x20       result: \"i32\", // int\n\
             \x20       optional: false,\n\
             \x20       nonblocking: false\n\
             \x20   },\n\
             \n\
             } as const satisfies Deno.ForeignLibraryInterface;\n"
        );
    }

    #[test]
    fn test_unnamed_and_opaque_parameters() {
        let signature = Signature {
            lib_name: "frob".to_string(),
            c_name: "frob".to_string(),
            parameters: vec![
                Parameter {
                    ty: ParseResult {
                        c_type: "void *".to_string(),
                        native_type: ResolvedType::Native(NativeType::Pointer),
                    },
                    c_name: None,
                },
                Parameter {
                    ty: ParseResult {
                        c_type: "MYSTRUCT".to_string(),
                        native_type: ResolvedType::Named("MYSTRUCT".to_string()),
                    },
                    c_name: Some("data".to_string()),
                },
            ],
            return_type: ParseResult {
                c_type: "void".to_string(),
                native_type: ResolvedType::Native(NativeType::Void),
            },
            is_optional: false,
            is_nonblocking: true,
            docstring: None,
        };

        let mut writer = InterfaceWriter::new();
        writer.write_symbol(&signature);

        // Unnamed parameters assert by bare tag; opaque named types assert
        // through `typeof` against the external namespace.
        assert_eq!(
            writer.output(),
            "frob: {\n\
             \x20   name: \"frob\",\n\
             \x20   parameters: [\"pointer\",Types.MYSTRUCT] as [\"pointer\", data: typeof Types.MYSTRUCT],\n\
             \x20   result: \"void\", // void\n\
             \x20   optional: false,\n\
             \x20   nonblocking: true\n\
             },\n\
             \n"
        );
    }

    #[test]
    fn test_tab_indentation() {
        let mut writer = InterfaceWriter::new();
        writer.writer.use_tabs = true;

        writer.begin(&config());
        writer.write_symbol(
            &crate::symbol::parse("void tick()", &Config::default()).unwrap(),
        );
        writer.end();

        assert!(writer.output().contains("\ttick: {\n"));
        assert!(writer.output().contains("\t\tname: \"tick\",\n"));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut writer = InterfaceWriter::new();
        writer.begin(&config());
        writer.reset();
        assert_eq!(writer.output(), "");

        // Indent restarts from zero after a reset.
        writer.writer.writeln("top");
        assert_eq!(writer.output(), "top\n");
    }
}
