//! Snapshot tests for whole generated files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use gentools_builder::{BuilderConfig, TextBuilder};

fn render_model(name: &str, fields: &[(&str, &str)]) -> String {
    let mut builder = TextBuilder::new();
    builder
        .append_auto_generated()
        .append_nullable_enable()
        .append_blank_line()
        .append_multiple_usings([
            vec!["System", "System.Text"],
            vec!["System.Text", "System.Linq"],
        ])
        .append_blank_line()
        .append_namespace("Generated.Models")
        .append_blank_line()
        .append_line(&format!("public partial class {name} {{"))
        .indent_with(|b| {
            b.for_each(fields, |b, (ty, field)| {
                b.append_line(&format!("public {ty} {field} {{ get; set; }}"));
            })
            .append_blank_line()
            .append_line("public override string ToString() {")
            .append_body_indented(&format!(
                "var sb = new StringBuilder();\r\nsb.Append(\"{name}\");\nreturn sb.ToString();"
            ))
            .append_line("}");
        })
        .append_line("}");
    builder.to_text_and_clear()
}

fn render_switch(cases: &[(u32, &str)]) -> String {
    let config: BuilderConfig = "[builder]\nindent_width = 2\n".parse().unwrap();
    let mut builder = TextBuilder::from_config(&config);
    builder
        .append_line("switch (kind) {")
        .indent_with(|b| {
            b.for_each(cases, |b, (value, word)| {
                b.append_line(&format!("case {value}:"))
                    .append_line_indented(&format!("return \"{word}\";"));
            })
            .append_line("default:")
            .indent_with(|b| {
                b.append_line("goto fallback;");
            });
        })
        .append_line("}")
        .indent()
        .unindent_line("fallback:")
        .append("throw new ArgumentOutOfRangeException(nameof(kind));")
        .append_comment("unreachable")
        .append_blank_line();
    builder.build()
}

#[test]
fn test_model_class() {
    let code = render_model("Person", &[("string", "Name"), ("int", "Age")]);
    insta::assert_snapshot!("model_class", code);
}

#[test]
fn test_switch_statement() {
    let code = render_switch(&[(1, "one"), (2, "two")]);
    insta::assert_snapshot!("switch_statement", code);
}
