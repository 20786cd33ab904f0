// src/lib.rs
//
// htmlembed: embed an HTML page into a generated wxWidgets header
//
// - Reads the input once; the raw byte length becomes the `Alloc` size hint.
// - Escaping: every '\' and '"' gets one leading '\'. All other bytes, including
//   '\r' and non-UTF-8 sequences, pass through untouched.
// - Lines: split on '\n'; trailing empty segments are dropped, leading and interior
//   ones are kept (so "a\n" yields one statement, "\na" yields two).
// - Each line becomes `output->Append(wxT("<line>\n"));`, joined with '\n' into a
//   fixed `wxString* AcceleratorsDialogHtml()` template with no trailing newline.
// - The size hint is the pre-escape length, not the length of the embedded text.
// - The output file is only written after the header is fully rendered; a failed
//   read never touches it.

use memchr::{memchr2_iter, memchr_iter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "AcceleratorsDialog.html";
/// Header written when no path is given.
pub const DEFAULT_OUTPUT: &str = "AcceleratorsDialogHtml.h";

/// Name of the generated accessor function.
pub const FUNCTION_NAME: &str = "AcceleratorsDialogHtml";
/// Name of the `wxString*` built up inside the generated function.
pub const VARIABLE_NAME: &str = "output";

/* ================================ Errors ================================= */

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/* ================================ Escaping =============================== */

/// Prefix every backslash and double quote with a backslash.
pub fn escape(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() + src.len() / 16);
    let mut last = 0usize;
    for i in memchr2_iter(b'\\', b'"', src) {
        out.extend_from_slice(&src[last..i]);
        out.push(b'\\');
        last = i;
    }
    out.extend_from_slice(&src[last..]);
    out
}

/* ============================= Line splitting ============================ */

/// Split on '\n', dropping trailing empty segments.
///
/// '\r' is not a separator: CRLF input keeps the '\r' at the end of each line.
pub fn split_lines(escaped: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    for nl in memchr_iter(b'\n', escaped) {
        lines.push(&escaped[start..nl]);
        start = nl + 1;
    }
    lines.push(&escaped[start..]);

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/* ================================ Template =============================== */

fn push_fragment(out: &mut Vec<u8>, line: &[u8]) {
    out.extend_from_slice(VARIABLE_NAME.as_bytes());
    out.extend_from_slice(b"->Append(wxT(\"");
    out.extend_from_slice(line);
    out.extend_from_slice(b"\\n\"));");
}

/// Render the header around already-escaped `lines`.
///
/// Only the first statement carries the template's indent; the rest start at
/// column 0.
pub fn render(size_hint: usize, lines: &[&[u8]]) -> Vec<u8> {
    let body_len: usize = lines.iter().map(|l| l.len() + 32).sum();
    let mut out = Vec::with_capacity(body_len + 160);

    let prologue = format!(
        "#include \"wx/wx.h\"\n\
         wxString* {FUNCTION_NAME}() {{\n  \
         wxString* {VARIABLE_NAME} = new wxString();\n  \
         {VARIABLE_NAME}->Alloc({size_hint});\n  "
    );
    out.extend_from_slice(prologue.as_bytes());

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        push_fragment(&mut out, line);
    }

    let epilogue = format!("\n  return {VARIABLE_NAME};\n}}");
    out.extend_from_slice(epilogue.as_bytes());
    out
}

/* ================================ Generator ============================== */

/// What a successful [`run`] produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Raw input length, emitted as the `Alloc` argument.
    pub size_hint: usize,
    /// Number of `Append` statements in the header.
    pub statements: usize,
    /// Bytes written to the output file.
    pub written: usize,
}

struct Rendered {
    header: Vec<u8>,
    statements: usize,
}

fn render_source(src: &[u8]) -> Rendered {
    let escaped = escape(src);
    debug!(
        raw = src.len(),
        escaped = escaped.len(),
        "escaped backslashes and quotes"
    );
    let lines = split_lines(&escaped);
    Rendered {
        header: render(src.len(), &lines),
        statements: lines.len(),
    }
}

/// Turn raw HTML into the complete header text.
pub fn generate(src: &[u8]) -> Vec<u8> {
    render_source(src).header
}

/// Read `input`, generate the header, and write it to `output`.
pub fn run(input: &Path, output: &Path) -> Result<Summary, Error> {
    debug!(path = %input.display(), "reading input");
    let src = fs::read(input).map_err(|source| Error::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let Rendered { header, statements } = render_source(&src);

    debug!(path = %output.display(), bytes = header.len(), "writing header");
    fs::write(output, &header).map_err(|source| Error::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = Summary {
        size_hint: src.len(),
        statements,
        written: header.len(),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        size_hint = summary.size_hint,
        statements = summary.statements,
        "generated header"
    );
    Ok(summary)
}
