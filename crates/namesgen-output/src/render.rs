//! Go source rendering through a handlebars template.

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};
use serde::Serialize;

use namesgen_model::{ServiceRecord, ServiceSet};

use crate::error::Result;
use crate::gofmt::is_print;

/// Generator path written into the "Code generated" header.
pub const DEFAULT_GENERATOR: &str = "internal/generate/namesconsts/main.go";

/// Package clause of the generated file.
pub const DEFAULT_PACKAGE: &str = "names";

const TEMPLATE_NAME: &str = "consts";

// Block tags share a line with content so standalone-line stripping never
// applies; the layout is fixed up by the formatter anyway.
const CONSTS_TEMPLATE: &str = "// Code generated by {{generator}}; DO NOT EDIT.
package {{package}}

const (
{{#each services}}\t{{this.ProviderNameUpper}} = {{quote this.ProviderPackage}}
{{/each}})
";

/// Options for [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub package: String,
    pub generator: String,
    /// Escape values as Go string literals. When off, values are placed
    /// between quotes as-is and bad values surface in the formatter.
    pub escape_values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            generator: DEFAULT_GENERATOR.to_string(),
            escape_values: true,
        }
    }
}

#[derive(Serialize)]
struct TemplateData<'a> {
    generator: &'a str,
    package: &'a str,
    services: Vec<&'a ServiceRecord>,
}

/// Renders service sets into Go source text.
pub struct Renderer {
    handlebars: Handlebars<'static>,
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the constants template registered.
    pub fn new(options: RenderOptions) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        if options.escape_values {
            handlebars.register_helper("quote", Box::new(go_string_helper));
        } else {
            handlebars.register_helper("quote", Box::new(raw_quote_helper));
        }
        handlebars.register_template_string(TEMPLATE_NAME, CONSTS_TEMPLATE)?;

        Ok(Self {
            handlebars,
            options,
        })
    }

    /// Render `services` in input order. Output is deterministic.
    pub fn render(&self, services: &ServiceSet) -> Result<String> {
        let data = TemplateData {
            generator: &self.options.generator,
            package: &self.options.package,
            services: services.records().collect(),
        };
        let text = self.handlebars.render(TEMPLATE_NAME, &data)?;
        tracing::debug!(
            bytes = text.len(),
            constants = services.len(),
            "rendered template"
        );
        Ok(text)
    }
}

/// Render `services` with a one-off [`Renderer`].
pub fn render(services: &ServiceSet, options: &RenderOptions) -> Result<String> {
    Renderer::new(options.clone())?.render(services)
}

/// Quote `value` as a Go interpreted string literal.
///
/// Non-printable characters are written as `\x`, `\u` or `\U` escapes.
pub fn go_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if is_print(c) => out.push(c),
            c if (c as u32) < 0x80 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out.push('"');
    out
}

fn string_param<'a>(h: &'a Helper) -> std::result::Result<&'a str, RenderErrorReason> {
    h.param(0)
        .and_then(|v| v.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("quote", 0))
}

fn go_string_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = string_param(h)?;
    out.write(&go_quote(value))?;
    Ok(())
}

fn raw_quote_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = string_param(h)?;
    out.write(&format!("\"{value}\""))?;
    Ok(())
}
