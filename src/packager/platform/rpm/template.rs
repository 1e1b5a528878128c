//! RPM spec preamble template.

/// Handlebars template for the spec preamble fragment.
///
/// All values are substituted by the fragment producer before the assembler
/// ever sees the text; the assembler receives fully-formed fragments only.
pub const SPEC_HEADER_TEMPLATE: &str = "\
Name: {{product_name}}
Version: {{version}}
Release: {{release}}
Summary: {{summary}}
{{#if license}}License: {{license}}
{{/if}}{{#if vendor}}Vendor: {{vendor}}
{{/if}}{{#if homepage}}URL: {{homepage}}
{{/if}}\
AutoReqProv: no";
