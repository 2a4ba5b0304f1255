//! Go source rendering: the file header, optional-attribute setters and one
//! wrapper function per operation.

use std::fmt::Write as _;

use crate::catalog::{AttrDef, OpDef};
use crate::classify::ClassifiedOp;
use crate::comment::make_comment;
use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::ident::{camel_case, go_quote, identifier};
use crate::layout::{OutputLayout, OutputSlot};
use crate::types::{go_type, is_list_attr};

const HEADER_WARNING: &str = "\
// WARNING: This generation of wrapper functions for TensorFlow ops is in an
// experimental state. The generated API can change without notice.
";

/// Shared helpers every generated file carries after the import block.
const HEADER_HELPERS: &str = "\
// optionalAttr is an intentionally un-exported type to hide
// details of how optional attributes to operations are implemented.
type optionalAttr map[string]interface{}

func makeOutputList(op *tf.Operation, start int, output string) ([]tf.Output, int, error) {
\tsize, err := op.OutputListSize(output)
\tif err != nil {
\t\treturn nil, start, err
\t}
\tlist := make([]tf.Output, size)
\tfor i := 0; i < size; i++ {
\t\tlist[i] = op.Output(start + i)
\t}
\treturn list, start + size, nil
}
";

pub struct Emitter<'c> {
    config: &'c GenConfig,
}

impl<'c> Emitter<'c> {
    pub fn new(config: &'c GenConfig) -> Self {
        Emitter { config }
    }

    pub fn header(&self, out: &mut String) -> Result<()> {
        out.push_str("// DO NOT EDIT\n");
        writeln!(out, "// This file was machine generated by {}", self.config.generated_by)?;
        out.push_str("//\n");
        out.push_str(HEADER_WARNING);
        writeln!(out, "\npackage {}\n", self.config.package)?;
        writeln!(out, "import tf {}\n", go_quote(&self.config.runtime_import))?;
        out.push_str(HEADER_HELPERS);
        Ok(())
    }

    /// Renders the setters and the wrapper function for one screened op.
    pub fn op(&self, out: &mut String, c: &ClassifiedOp<'_>) -> Result<()> {
        check_op_name(&c.op.name)?;
        out.push('\n');
        if !c.optional_attrs.is_empty() {
            let name = &c.op.name;
            writeln!(out, "// {name}Attr is an optional argument to {name}.")?;
            writeln!(out, "type {name}Attr func(optionalAttr)")?;
            for attr in &c.optional_attrs {
                out.push('\n');
                attr_setter(out, c.op, attr)?;
            }
            out.push('\n');
        }
        doc_comment(out, c)?;
        signature(out, c)?;
        body(out, c)?;
        Ok(())
    }
}

fn check_op_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let starts_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    if !starts_upper || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(GenError::render(
            name,
            "op name is not an exported Go identifier",
        ));
    }
    Ok(())
}

fn attr_setter(out: &mut String, op: &OpDef, attr: &AttrDef) -> Result<()> {
    let func = format!("{}{}", op.name, camel_case(&attr.name));
    writeln!(
        out,
        "// {func} sets the optional {} attribute to value.",
        attr.name
    )?;
    if !attr.description.is_empty() {
        writeln!(out, "//\n// value: {}", make_comment(&attr.description))?;
    }
    if let Some(default) = &attr.default_value {
        writeln!(out, "// If not specified, defaults to {default}")?;
    }
    if let Some(min) = attr.minimum {
        if is_list_attr(attr) {
            writeln!(out, "//\n// REQUIRES: len(value) >= {min}")?;
        } else {
            writeln!(out, "//\n// REQUIRES: value >= {min}")?;
        }
    }
    writeln!(
        out,
        "func {func}(value {}) {}Attr {{",
        go_type(&attr.ty)?,
        op.name
    )?;
    out.push_str("\treturn func(m optionalAttr) {\n");
    writeln!(out, "\t\tm[{}] = value", go_quote(&attr.name))?;
    out.push_str("\t}\n}\n");
    Ok(())
}

fn doc_comment(out: &mut String, c: &ClassifiedOp<'_>) -> Result<()> {
    let op = c.op;
    writeln!(out, "// {}", make_comment(&op.summary))?;
    if let Some(dep) = &op.deprecation {
        writeln!(
            out,
            "//\n// DEPRECATED at GraphDef version {}: {}",
            dep.version,
            make_comment(&dep.explanation)
        )?;
    }
    if !op.description.is_empty() {
        writeln!(out, "//\n// {}", make_comment(&op.description))?;
    }
    if c.describe_arguments() {
        out.push_str("//\n// Arguments:\n");
        let described = op
            .input_arg
            .iter()
            .map(|a| (&a.name, &a.description))
            .chain(c.required_attrs.iter().map(|a| (&a.name, &a.description)));
        for (name, description) in described {
            if !description.is_empty() {
                writeln!(
                    out,
                    "//\t{}: {}",
                    identifier(name),
                    make_comment(description)
                )?;
            }
        }
    }
    if op.output_arg.is_empty() {
        out.push_str("//\n// Returns the created operation.\n");
    } else if c.describe_outputs() {
        if let [only] = op.output_arg.as_slice() {
            writeln!(out, "//\n// Returns {}", make_comment(&only.description))?;
        } else {
            out.push_str("//\n// Returns:\n");
            for arg in &op.output_arg {
                if arg.description.is_empty() {
                    writeln!(out, "//\t{}", identifier(&arg.name))?;
                } else {
                    writeln!(
                        out,
                        "//\t{}: {}",
                        identifier(&arg.name),
                        make_comment(&arg.description)
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn signature(out: &mut String, c: &ClassifiedOp<'_>) -> Result<()> {
    let op = c.op;
    write!(out, "func {}(scope *Scope", op.name)?;
    for arg in &op.input_arg {
        let slice = if arg.is_list() { "[]" } else { "" };
        write!(out, ", {} {slice}tf.Output", identifier(&arg.name))?;
    }
    for attr in &c.required_attrs {
        write!(out, ", {} {}", identifier(&attr.name), go_type(&attr.ty)?)?;
    }
    if !c.optional_attrs.is_empty() {
        write!(out, ", optional ...{}Attr", op.name)?;
    }
    out.push_str(") (");
    if op.output_arg.is_empty() {
        out.push_str("o *tf.Operation");
    } else {
        for (i, arg) in op.output_arg.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let slice = if arg.is_list() { "[]" } else { "" };
            write!(out, "{} {slice}tf.Output", identifier(&arg.name))?;
        }
    }
    out.push_str(") {\n");
    Ok(())
}

fn body(out: &mut String, c: &ClassifiedOp<'_>) -> Result<()> {
    let op = c.op;
    out.push_str("\tif scope.Err() != nil {\n\t\treturn\n\t}\n");

    if c.has_attrs() {
        let required: Vec<String> = c
            .required_attrs
            .iter()
            .map(|a| format!("{}: {}", go_quote(&a.name), identifier(&a.name)))
            .collect();
        writeln!(out, "\tattrs := map[string]interface{{}}{{{}}}", required.join(", "))?;
        if !c.optional_attrs.is_empty() {
            out.push_str("\tfor _, a := range optional {\n\t\ta(attrs)\n\t}\n");
        }
    }

    out.push_str("\topspec := tf.OpSpec{\n");
    writeln!(out, "\t\tType: {},", go_quote(&op.name))?;
    if !op.input_arg.is_empty() {
        let inputs: Vec<String> = op
            .input_arg
            .iter()
            .map(|a| {
                if a.is_list() {
                    format!("tf.OutputList({})", identifier(&a.name))
                } else {
                    identifier(&a.name)
                }
            })
            .collect();
        out.push_str("\t\tInput: []tf.Input{\n");
        writeln!(out, "\t\t\t{},", inputs.join(", "))?;
        out.push_str("\t\t},\n");
    }
    if c.has_attrs() {
        out.push_str("\t\tAttrs: attrs,\n");
    }
    out.push_str("\t}\n");

    let layout = OutputLayout::new(op);
    if layout.is_empty() {
        out.push_str("\treturn scope.AddOperation(opspec)\n}\n");
        return Ok(());
    }

    out.push_str("\top := scope.AddOperation(opspec)\n");
    if let Some(indices) = layout.static_indices() {
        let results: Vec<String> = indices.iter().map(|i| format!("op.Output({i})")).collect();
        writeln!(out, "\treturn {}\n}}", results.join(", "))?;
        return Ok(());
    }

    out.push_str("\tif scope.Err() != nil {\n\t\treturn\n\t}\n");
    out.push_str("\tvar idx int\n\tvar err error\n");
    let slots = layout.slots();
    for (i, slot) in slots.iter().enumerate() {
        let ident = identifier(slot.name());
        match *slot {
            OutputSlot::List(name) => {
                writeln!(
                    out,
                    "\tif {ident}, idx, err = makeOutputList(op, idx, {}); err != nil {{",
                    go_quote(name)
                )?;
                writeln!(out, "\t\tscope.UpdateErr({}, err)", go_quote(&op.name))?;
                out.push_str("\t\treturn\n\t}\n");
            }
            OutputSlot::Single(_) => {
                writeln!(out, "\t{ident} = op.Output(idx)")?;
                if i + 1 < slots.len() {
                    out.push_str("\tidx++\n");
                }
            }
        }
    }
    let results: Vec<String> = slots.iter().map(|s| identifier(s.name())).collect();
    writeln!(out, "\treturn {}\n}}", results.join(", "))?;
    Ok(())
}
