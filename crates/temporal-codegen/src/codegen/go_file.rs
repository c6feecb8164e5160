//! Output buffer for one generated Go file.
//!
//! Emitters append unindented lines and ask for identifiers through
//! [`GoFile::ident`], which records the import they need. [`GoFile::content`]
//! then lays the file out the way gofmt would: the import block goes right
//! after the package clause, blocks are tab-indented and runs of blank lines
//! are collapsed.

use std::collections::{BTreeMap, HashSet};

use crate::ir::{GoIdent, GoImportPath};

struct Line {
    code: String,
    trailing: Option<String>,
}

/// A Go source file under construction.
pub struct GoFile {
    filename: String,
    import_path: String,
    lines: Vec<Line>,
    package_line: Option<usize>,
    /// Import path to local alias, ordered by path.
    imports: BTreeMap<String, String>,
    aliases: HashSet<String>,
}

impl GoFile {
    pub fn new(filename: impl Into<String>, import_path: &GoImportPath) -> Self {
        Self {
            filename: filename.into(),
            import_path: import_path.path.clone(),
            lines: Vec::new(),
            package_line: None,
            imports: BTreeMap::new(),
            aliases: HashSet::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Appends one line of code.
    pub fn p(&mut self, code: impl Into<String>) {
        self.lines.push(Line {
            code: code.into(),
            trailing: None,
        });
    }

    /// Appends one line of code followed by a proto trailing comment.
    pub fn p_with_trailing(&mut self, code: impl Into<String>, trailing: &str) {
        let mut comment = comment_lines(trailing);
        if comment.len() == 1 {
            self.lines.push(Line {
                code: code.into(),
                trailing: comment.pop(),
            });
        } else {
            self.p(code);
            for line in comment {
                self.p(line);
            }
        }
    }

    pub fn blank(&mut self) {
        self.p("");
    }

    /// Appends a proto comment as `//` lines. Empty comments emit nothing.
    pub fn comment(&mut self, text: &str) {
        for line in comment_lines(text) {
            self.p(line);
        }
    }

    /// Appends the package clause; imports are laid out right after it.
    pub fn package(&mut self, name: &str) {
        self.p(format!("package {}", name));
        self.package_line = Some(self.lines.len() - 1);
    }

    /// Returns how `ident` is spelled in this file, importing its package
    /// when it lives elsewhere.
    pub fn ident(&mut self, ident: &GoIdent) -> String {
        if ident.import_path.path == self.import_path {
            return ident.name.clone();
        }
        let alias = self.import(&ident.import_path);
        format!("{}.{}", alias, ident.name)
    }

    fn import(&mut self, import_path: &GoImportPath) -> String {
        if let Some(alias) = self.imports.get(&import_path.path) {
            return alias.clone();
        }

        let mut alias = import_path.name.clone();
        let mut n = 1;
        while self.aliases.contains(&alias) {
            alias = format!("{}{}", import_path.name, n);
            n += 1;
        }

        self.aliases.insert(alias.clone());
        self.imports.insert(import_path.path.clone(), alias.clone());
        alias
    }

    /// Renders the file.
    pub fn content(&self) -> String {
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len() + self.imports.len() + 4);
        let mut depth = 0usize;

        for (index, line) in self.lines.iter().enumerate() {
            let code = line.code.trim();
            if code.is_empty() {
                push_blank(&mut out);
                continue;
            }

            let is_comment = code.starts_with("//");
            if !is_comment && (code.starts_with('}') || code.starts_with(')')) {
                depth = depth.saturating_sub(1);
            }

            let mut rendered = "\t".repeat(depth);
            rendered.push_str(code);
            if let Some(trailing) = &line.trailing {
                rendered.push(' ');
                rendered.push_str(trailing);
            }
            out.push(rendered);

            if !is_comment && (code.ends_with('{') || code.ends_with('(')) {
                depth += 1;
            }

            if self.package_line == Some(index) && !self.imports.is_empty() {
                push_blank(&mut out);
                out.push("import (".to_string());
                for (path, alias) in &self.imports {
                    out.push(format!("\t{} \"{}\"", alias, path));
                }
                out.push(")".to_string());
                push_blank(&mut out);
            }
        }

        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }

        let mut content = out.join("\n");
        content.push('\n');
        content
    }
}

fn push_blank(out: &mut Vec<String>) {
    if out.last().is_some_and(|l| !l.is_empty()) {
        out.push(String::new());
    }
}

/// Converts a proto comment into Go `//` lines, one per source line.
pub fn comment_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.strip_suffix('\n')
        .unwrap_or(text)
        .split('\n')
        .map(|line| format!("//{}", line))
        .collect()
}
