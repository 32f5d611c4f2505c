//! Canonical layout for parsed source.

use super::parser::{ConstDecl, GroupLine, Item, SourceFile, Spec};

static BLANK: Item = Item::Blank;

pub(crate) fn print(file: &SourceFile) -> String {
    let mut items: Vec<&Item> = Vec::with_capacity(file.items.len() + 1);
    for (idx, item) in file.items.iter().enumerate() {
        if *item == Item::Blank && matches!(items.last(), None | Some(Item::Blank)) {
            continue;
        }
        items.push(item);
        // the package clause is always followed by a blank line
        if matches!(item, Item::Package { .. })
            && file
                .items
                .get(idx + 1)
                .is_some_and(|next| *next != Item::Blank)
        {
            items.push(&BLANK);
        }
    }
    while items.last() == Some(&&Item::Blank) {
        items.pop();
    }

    let mut lines = Vec::new();
    for item in items {
        match item {
            Item::Blank => lines.push(String::new()),
            Item::Comment(text) => lines.push(text.clone()),
            Item::Package { name, comment } => {
                lines.push(with_comment(format!("package {name}"), comment.as_deref()));
            }
            Item::Const(ConstDecl::Single(spec)) => {
                let line = format!("const {} = {}", spec.name, spec.value);
                lines.push(with_comment(line, spec.comment.as_deref()));
            }
            Item::Const(ConstDecl::Group {
                open_comment,
                lines: group,
                close_comment,
            }) if group.is_empty() && open_comment.is_none() => {
                lines.push(with_comment("const ()".to_string(), close_comment.as_deref()));
            }
            Item::Const(ConstDecl::Group {
                open_comment,
                lines: group,
                close_comment,
            }) => {
                lines.push(with_comment("const (".to_string(), open_comment.as_deref()));
                print_group(group, &mut lines);
                lines.push(with_comment(")".to_string(), close_comment.as_deref()));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn with_comment(mut line: String, comment: Option<&str>) -> String {
    if let Some(comment) = comment {
        line.push(' ');
        line.push_str(comment);
    }
    line
}

fn print_group(group: &[GroupLine], lines: &mut Vec<String>) {
    let mut run: Vec<&Spec> = Vec::new();
    for line in group {
        match line {
            GroupLine::Spec(spec) => run.push(spec),
            GroupLine::Blank => {
                print_run(&run, lines);
                run.clear();
                lines.push(String::new());
            }
            GroupLine::Comment(text) => {
                print_run(&run, lines);
                run.clear();
                lines.push(format!("\t{text}"));
            }
        }
    }
    print_run(&run, lines);
}

/// Prints consecutive specs with `=` aligned and trailing comments aligned
/// among consecutive commented specs.
fn print_run(run: &[&Spec], lines: &mut Vec<String>) {
    let name_width = run.iter().map(|spec| width(&spec.name)).max().unwrap_or(0);
    let mut idx = 0;
    while idx < run.len() {
        let commented = run[idx..]
            .iter()
            .take_while(|spec| spec.comment.is_some())
            .count();
        if commented == 0 {
            let spec = run[idx];
            lines.push(format!(
                "\t{} = {}",
                pad(&spec.name, name_width),
                spec.value
            ));
            idx += 1;
            continue;
        }
        let block = &run[idx..idx + commented];
        let cell_width = block
            .iter()
            .map(|spec| width(&spec.value) + 2)
            .max()
            .unwrap_or(0);
        for spec in block {
            let cell = format!("= {}", spec.value);
            lines.push(format!(
                "\t{} {} {}",
                pad(&spec.name, name_width),
                pad(&cell, cell_width),
                spec.comment.as_deref().unwrap_or_default()
            ));
        }
        idx += commented;
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, target: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat_n(' ', target.saturating_sub(width(text))));
    padded
}
